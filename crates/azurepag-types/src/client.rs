//! Remote Privileged Access Group API client.
//!
//! The transport (authentication, HTTP) lives behind this trait. Every call returns the
//! raw `ApiError` on failure; interpretation is left to the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::{self, Debug};

use crate::error::{ApiError, ApiResult};
use crate::settings::NestedSettings;

/// Role available on a registered group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
	pub id: String,
	pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentState {
	Eligible,
	Active,
}

impl AssignmentState {
	pub fn as_str(self) -> &'static str {
		match self {
			AssignmentState::Eligible => "Eligible",
			AssignmentState::Active => "Active",
		}
	}
}

impl fmt::Display for AssignmentState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Existing role assignment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentRequest {
	pub id: String,
	/// Object id of the group the role belongs to
	pub resource_id: String,
	pub role_definition_id: String,
	pub subject_id: String,
	pub assignment_state: AssignmentState,
}

/// Parameters for creating a role assignment request
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoleAssignmentRequest {
	pub resource_id: String,
	pub role_definition_id: String,
	pub subject_id: String,
	pub assignment_state: AssignmentState,
	pub reason: Option<String>,
}

#[async_trait]
pub trait PagClient: Debug + Send + Sync {
	/// Lists the roles defined on a registered group
	async fn get_role_definitions(&self, group_id: &str) -> ApiResult<Vec<RoleDefinition>>;

	/// Resolves a role by display name
	async fn get_role_definition(&self, group_id: &str, role_name: &str) -> ApiResult<RoleDefinition> {
		self.get_role_definitions(group_id)
			.await?
			.into_iter()
			.find(|def| def.display_name == role_name)
			.ok_or_else(|| {
				ApiError::not_found(format!("role definition '{}' not found on {}", role_name, group_id))
			})
	}

	async fn get_role_settings(
		&self,
		group_id: &str,
		role_definition_id: &str,
	) -> ApiResult<NestedSettings>;

	/// Replaces the governed rule groups of the settings identified by `settings.id`
	async fn update_role_settings(&self, settings: &NestedSettings) -> ApiResult<()>;

	/// Registers a group for Privileged Access Group management
	async fn register_group(&self, group_id: &str) -> ApiResult<()>;

	async fn get_role_assignment_requests(
		&self,
		group_id: &str,
		state: AssignmentState,
	) -> ApiResult<Vec<RoleAssignmentRequest>>;

	async fn get_role_assignment_request(
		&self,
		group_id: &str,
		subject_id: &str,
		role_definition_id: &str,
		state: AssignmentState,
	) -> ApiResult<RoleAssignmentRequest> {
		self.get_role_assignment_requests(group_id, state)
			.await?
			.into_iter()
			.find(|req| req.subject_id == subject_id && req.role_definition_id == role_definition_id)
			.ok_or_else(|| {
				ApiError::not_found(format!(
					"{} assignment of {} to {} not found",
					state, role_definition_id, subject_id
				))
			})
	}

	async fn create_role_assignment_request(
		&self,
		request: &NewRoleAssignmentRequest,
	) -> ApiResult<RoleAssignmentRequest>;

	async fn delete_role_assignment_request(
		&self,
		group_id: &str,
		subject_id: &str,
		role_definition_id: &str,
		state: AssignmentState,
	) -> ApiResult<()>;
}


// vim: ts=4
