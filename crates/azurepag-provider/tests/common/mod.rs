//! Common test utilities: an in-memory remote client and fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use azurepag_provider::{Provider, ProviderConfig};
use azurepag_types::client::{
	AssignmentState, NewRoleAssignmentRequest, PagClient, RoleAssignmentRequest, RoleDefinition,
};
use azurepag_types::error::{ApiError, ApiResult};
use azurepag_types::settings::{FlatOptions, GroupKey, NestedSettings, Rule, RuleGroup};

pub const GROUP_ID: &str = "2f6a2d0c-group";
pub const MEMBER_ROLE_ID: &str = "role-member";
pub const OWNER_ROLE_ID: &str = "role-owner";
pub const SETTINGS_ID: &str = "settings-member";

#[derive(Debug, Default)]
pub struct MemoryState {
	pub role_definitions: HashMap<String, Vec<RoleDefinition>>,
	/// Keyed by (group id, role definition id)
	pub settings: HashMap<(String, String), NestedSettings>,
	/// Every settings value submitted through `update_role_settings`
	pub updates: Vec<NestedSettings>,
	pub settings_reads: u32,
	/// Failures returned by `update_role_settings`, one per call, before it starts succeeding
	pub update_failures: VecDeque<ApiError>,
	/// Failures returned by `get_role_definitions`, one per call
	pub definitions_failures: VecDeque<ApiError>,
	/// Failures returned by `register_group` before it starts succeeding
	pub register_failures: VecDeque<ApiError>,
	pub register_calls: u32,
	pub assignment_requests: Vec<RoleAssignmentRequest>,
	pub next_request_id: u32,
}

/// In-memory stand-in for the remote service
#[derive(Debug, Default)]
pub struct MemoryClient {
	pub state: Mutex<MemoryState>,
}

impl MemoryClient {
	/// A group with Member and Owner roles; Member has settings built from `options`
	pub fn with_group(options: &FlatOptions) -> Arc<Self> {
		let client = Self::default();
		{
			let mut state = client.state.lock();
			state.role_definitions.insert(
				GROUP_ID.into(),
				vec![
					RoleDefinition { id: MEMBER_ROLE_ID.into(), display_name: "Member".into() },
					RoleDefinition { id: OWNER_ROLE_ID.into(), display_name: "Owner".into() },
				],
			);
			state
				.settings
				.insert((GROUP_ID.into(), MEMBER_ROLE_ID.into()), remote_settings(SETTINGS_ID, options));
		}
		Arc::new(client)
	}

	pub fn stored_settings(&self) -> NestedSettings {
		let state = self.state.lock();
		state.settings[&(GROUP_ID.to_string(), MEMBER_ROLE_ID.to_string())].clone()
	}
}

#[async_trait]
impl PagClient for MemoryClient {
	async fn get_role_definitions(&self, group_id: &str) -> ApiResult<Vec<RoleDefinition>> {
		let mut state = self.state.lock();
		if let Some(err) = state.definitions_failures.pop_front() {
			return Err(err);
		}
		state
			.role_definitions
			.get(group_id)
			.cloned()
			.ok_or_else(|| ApiError::not_found(format!("group {} is not registered", group_id)))
	}

	async fn get_role_settings(
		&self,
		group_id: &str,
		role_definition_id: &str,
	) -> ApiResult<NestedSettings> {
		let mut state = self.state.lock();
		state.settings_reads += 1;
		state
			.settings
			.get(&(group_id.to_string(), role_definition_id.to_string()))
			.cloned()
			.ok_or_else(|| ApiError::not_found("role settings"))
	}

	async fn update_role_settings(&self, update: &NestedSettings) -> ApiResult<()> {
		let mut state = self.state.lock();
		if let Some(err) = state.update_failures.pop_front() {
			return Err(err);
		}
		state.updates.push(update.clone());

		let stored = state
			.settings
			.values_mut()
			.find(|s| s.id == update.id)
			.ok_or_else(|| ApiError::not_found("role settings"))?;
		// full overwrite of each submitted group, other groups untouched
		for group in &update.lifecycle_management {
			let existing = stored.lifecycle_management.iter_mut().find(|g| {
				g.caller == group.caller && g.level == group.level && g.operation == group.operation
			});
			match existing {
				Some(existing) => *existing = group.clone(),
				None => stored.lifecycle_management.push(group.clone()),
			}
		}
		Ok(())
	}

	async fn register_group(&self, group_id: &str) -> ApiResult<()> {
		let mut state = self.state.lock();
		state.register_calls += 1;
		if let Some(err) = state.register_failures.pop_front() {
			return Err(err);
		}
		state.role_definitions.entry(group_id.to_string()).or_insert_with(|| {
			vec![RoleDefinition { id: MEMBER_ROLE_ID.into(), display_name: "Member".into() }]
		});
		Ok(())
	}

	async fn get_role_assignment_requests(
		&self,
		group_id: &str,
		state: AssignmentState,
	) -> ApiResult<Vec<RoleAssignmentRequest>> {
		Ok(self
			.state
			.lock()
			.assignment_requests
			.iter()
			.filter(|r| r.resource_id == group_id && r.assignment_state == state)
			.cloned()
			.collect())
	}

	async fn create_role_assignment_request(
		&self,
		request: &NewRoleAssignmentRequest,
	) -> ApiResult<RoleAssignmentRequest> {
		let mut state = self.state.lock();
		state.next_request_id += 1;
		let created = RoleAssignmentRequest {
			id: format!("request-{}", state.next_request_id),
			resource_id: request.resource_id.clone(),
			role_definition_id: request.role_definition_id.clone(),
			subject_id: request.subject_id.clone(),
			assignment_state: request.assignment_state,
		};
		state.assignment_requests.push(created.clone());
		Ok(created)
	}

	async fn delete_role_assignment_request(
		&self,
		group_id: &str,
		subject_id: &str,
		role_definition_id: &str,
		assignment_state: AssignmentState,
	) -> ApiResult<()> {
		let mut state = self.state.lock();
		let before = state.assignment_requests.len();
		state.assignment_requests.retain(|r| {
			!(r.resource_id == group_id
				&& r.subject_id == subject_id
				&& r.role_definition_id == role_definition_id
				&& r.assignment_state == assignment_state)
		});
		if state.assignment_requests.len() == before {
			return Err(ApiError::not_found("role assignment request"));
		}
		Ok(())
	}
}

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn provider(client: Arc<MemoryClient>) -> Provider {
	init_tracing();
	let config = ProviderConfig::builder()
		.token("test-token")
		.registration_retry_attempts(5, Duration::from_secs(3))
		.build_with_env(|_| None)
		.unwrap();
	Provider::new(config, client)
}

fn rule(id: &str, setting: String) -> Rule {
	Rule { rule_identifier: id.into(), setting }
}

/// Settings shaped like the remote service returns them, including rules and groups
/// this crate does not manage
pub fn remote_settings(id: &str, options: &FlatOptions) -> NestedSettings {
	NestedSettings {
		id: id.into(),
		lifecycle_management: vec![
			RuleGroup::new(
				GroupKey::ACTIVATION,
				vec![
					rule(
						"ExpirationRule",
						format!(
							r#"{{"permanentAssignment":true,"maximumGrantPeriodInMinutes":{}}}"#,
							options.max_activation_time_minutes
						),
					),
					rule("MfaRule", format!(r#"{{"mfaRequired":{}}}"#, options.require_mfa_on_activation)),
					rule(
						"JustificationRule",
						format!(r#"{{"required":{}}}"#, options.require_justification_on_activation),
					),
					rule(
						"TicketingRule",
						format!(r#"{{"ticketingRequired":{}}}"#, options.require_ticket_info_on_activation),
					),
					rule("ApprovalRule", r#"{"enabled":false,"approvers":[]}"#.into()),
				],
			),
			RuleGroup::new(
				GroupKey::ELIGIBLE_ASSIGNMENT,
				vec![rule(
					"ExpirationRule",
					format!(
						r#"{{"permanentAssignment":{},"maximumGrantPeriodInMinutes":{}}}"#,
						options.allow_permanent_eligible_assignments,
						options.max_eligible_assignment_time_minutes
					),
				)],
			),
			RuleGroup {
				caller: "Admin".into(),
				level: "Member".into(),
				operation: "ALL".into(),
				rules: vec![rule(
					"ExpirationRule",
					r#"{"permanentAssignment":false,"maximumGrantPeriodInMinutes":259200}"#.into(),
				)],
			},
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
