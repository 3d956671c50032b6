//! Shared fixtures for role settings tests

#![allow(dead_code)]

use azurepag_types::settings::{FlatOptions, GroupKey, NestedSettings, Rule, RuleGroup};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn rule(id: &str, setting: &str) -> Rule {
	Rule { rule_identifier: id.into(), setting: setting.into() }
}

/// Settings as the remote service returns them: extra rules and an extra group
pub fn remote_settings(id: &str, options: &FlatOptions) -> NestedSettings {
	NestedSettings {
		id: id.into(),
		lifecycle_management: vec![
			RuleGroup {
				caller: "Admin".into(),
				level: "Member".into(),
				operation: "ALL".into(),
				rules: vec![rule("ExpirationRule", r#"{"permanentAssignment":false,"maximumGrantPeriodInMinutes":43200}"#)],
			},
			RuleGroup::new(
				GroupKey::ACTIVATION,
				vec![
					rule("ApprovalRule", r#"{"enabled":false,"approvers":[]}"#),
					rule(
						"TicketingRule",
						&format!(r#"{{"ticketingRequired":{}}}"#, options.require_ticket_info_on_activation),
					),
					rule(
						"JustificationRule",
						&format!(r#"{{"required":{}}}"#, options.require_justification_on_activation),
					),
					rule("MfaRule", &format!(r#"{{"mfaRequired":{}}}"#, options.require_mfa_on_activation)),
					rule(
						"ExpirationRule",
						&format!(
							r#"{{"permanentAssignment":true,"maximumGrantPeriodInMinutes":{}}}"#,
							options.max_activation_time_minutes
						),
					),
				],
			),
			RuleGroup::new(
				GroupKey::ELIGIBLE_ASSIGNMENT,
				vec![rule(
					"ExpirationRule",
					&format!(
						r#"{{"permanentAssignment":{},"maximumGrantPeriodInMinutes":{}}}"#,
						options.allow_permanent_eligible_assignments,
						options.max_eligible_assignment_time_minutes
					),
				)],
			),
		],
	}
}

pub fn baseline() -> FlatOptions {
	FlatOptions {
		allow_permanent_eligible_assignments: false,
		max_eligible_assignment_time_minutes: 180,
		max_activation_time_minutes: 60,
		require_mfa_on_activation: true,
		require_justification_on_activation: false,
		require_ticket_info_on_activation: false,
	}
}

// vim: ts=4
