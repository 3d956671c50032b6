//! Settings codec
//!
//! Maps between `FlatOptions` and the remote `NestedSettings`:
//!
//! | option                                 | group               | rule                | payload field                 |
//! |----------------------------------------|---------------------|---------------------|-------------------------------|
//! | `max_activation_time_minutes`          | activation          | `ExpirationRule`    | `maximumGrantPeriodInMinutes` |
//! | `require_mfa_on_activation`            | activation          | `MfaRule`           | `mfaRequired`                 |
//! | `require_justification_on_activation`  | activation          | `JustificationRule` | `required`                    |
//! | `require_ticket_info_on_activation`    | activation          | `TicketingRule`     | `ticketingRequired`           |
//! | `max_eligible_assignment_time_minutes` | eligible assignment | `ExpirationRule`    | `maximumGrantPeriodInMinutes` |
//! | `allow_permanent_eligible_assignments` | eligible assignment | `ExpirationRule`    | `permanentAssignment`         |

use serde::Serialize;
use serde::de::DeserializeOwned;

use azurepag_types::settings::{
	ExpirationSetting, FlatOptions, GroupKey, JustificationSetting, MfaSetting, NestedSettings,
	Rule, RuleGroup, RuleId, RuleSetting, TicketingSetting,
};

use crate::lookup::{find_group, find_rule};
use crate::prelude::*;

fn parse_payload<T: DeserializeOwned>(rule: &Rule) -> PagResult<T> {
	serde_json::from_str(&rule.setting).map_err(|err| Error::MalformedPayload {
		rule: rule.rule_identifier.clone(),
		reason: err.to_string(),
	})
}

/// Decode a rule's payload according to its identifier
pub fn decode_setting(rule: &Rule) -> PagResult<RuleSetting> {
	let setting = match rule.rule_identifier.parse::<RuleId>()? {
		RuleId::Expiration => RuleSetting::Expiration(parse_payload(rule)?),
		RuleId::Mfa => RuleSetting::Mfa(parse_payload(rule)?),
		RuleId::Justification => RuleSetting::Justification(parse_payload(rule)?),
		RuleId::Ticketing => RuleSetting::Ticketing(parse_payload(rule)?),
	};
	Ok(setting)
}

/// Decode the rule `rule_id` of `group` and take the payload out of its variant
fn read_rule<T>(
	group: &RuleGroup,
	key: GroupKey,
	rule_id: RuleId,
	payload: fn(RuleSetting) -> Option<T>,
) -> PagResult<T> {
	let setting = decode_setting(find_rule(group, key, rule_id)?)?;
	payload(setting)
		.ok_or_else(|| Error::Internal(format!("{} decoded as {}", rule_id, setting.rule_id())))
}

/// Extract the flat options from remote settings.
///
/// Both governed groups and all four rules must be present.
pub fn decode(settings: &NestedSettings) -> PagResult<FlatOptions> {
	let activation = find_group(settings, GroupKey::ACTIVATION)?;
	let eligible = find_group(settings, GroupKey::ELIGIBLE_ASSIGNMENT)?;

	let ticketing =
		read_rule(activation, GroupKey::ACTIVATION, RuleId::Ticketing, RuleSetting::ticketing)?;
	let mfa = read_rule(activation, GroupKey::ACTIVATION, RuleId::Mfa, RuleSetting::mfa)?;
	let justification = read_rule(
		activation,
		GroupKey::ACTIVATION,
		RuleId::Justification,
		RuleSetting::justification,
	)?;
	let activation_expiration =
		read_rule(activation, GroupKey::ACTIVATION, RuleId::Expiration, RuleSetting::expiration)?;
	let assignment_expiration = read_rule(
		eligible,
		GroupKey::ELIGIBLE_ASSIGNMENT,
		RuleId::Expiration,
		RuleSetting::expiration,
	)?;

	Ok(FlatOptions {
		allow_permanent_eligible_assignments: assignment_expiration.permanent_assignment,
		max_eligible_assignment_time_minutes: assignment_expiration.maximum_grant_period_in_minutes,
		max_activation_time_minutes: activation_expiration.maximum_grant_period_in_minutes,
		require_mfa_on_activation: mfa.mfa_required,
		require_justification_on_activation: justification.required,
		require_ticket_info_on_activation: ticketing.ticketing_required,
	})
}

fn to_json<T: Serialize>(value: &T) -> PagResult<String> {
	serde_json::to_string(value)
		.map_err(|err| Error::Internal(format!("cannot serialize rule setting: {}", err)))
}

/// Serialize a payload to its JSON string form
pub fn encode_payload(setting: &RuleSetting) -> PagResult<String> {
	match setting {
		RuleSetting::Expiration(s) => to_json(s),
		RuleSetting::Mfa(s) => to_json(s),
		RuleSetting::Justification(s) => to_json(s),
		RuleSetting::Ticketing(s) => to_json(s),
	}
}

/// Build the rule carrying the given payload
pub fn encode(setting: &RuleSetting) -> PagResult<Rule> {
	Ok(Rule {
		rule_identifier: setting.rule_id().as_str().into(),
		setting: encode_payload(setting)?,
	})
}

/// Build a complete replacement for the two governed rule groups
pub fn assemble(id: &str, options: &FlatOptions) -> PagResult<NestedSettings> {
	let activation_rules = [
		RuleSetting::Expiration(ExpirationSetting {
			// unused for activation, but the remote side requires it
			permanent_assignment: true,
			maximum_grant_period_in_minutes: options.max_activation_time_minutes,
		}),
		RuleSetting::Mfa(MfaSetting { mfa_required: options.require_mfa_on_activation }),
		RuleSetting::Justification(JustificationSetting {
			required: options.require_justification_on_activation,
		}),
		RuleSetting::Ticketing(TicketingSetting {
			ticketing_required: options.require_ticket_info_on_activation,
		}),
	];
	let eligible_rules = [RuleSetting::Expiration(ExpirationSetting {
		permanent_assignment: options.allow_permanent_eligible_assignments,
		maximum_grant_period_in_minutes: options.max_eligible_assignment_time_minutes,
	})];

	Ok(NestedSettings {
		id: id.to_string(),
		lifecycle_management: vec![
			RuleGroup::new(
				GroupKey::ACTIVATION,
				activation_rules.iter().map(encode).collect::<PagResult<_>>()?,
			),
			RuleGroup::new(
				GroupKey::ELIGIBLE_ASSIGNMENT,
				eligible_rules.iter().map(encode).collect::<PagResult<_>>()?,
			),
		],
	})
}


// vim: ts=4
