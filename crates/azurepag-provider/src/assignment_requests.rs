//! Role assignment requests: a data source listing them and a resource managing one

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use azurepag_types::client::{AssignmentState, NewRoleAssignmentRequest, RoleAssignmentRequest};

use crate::prelude::*;
use crate::provider::Provider;

/// One assignment request as exposed by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentRequestItem {
	pub id: String,
	/// Object id of the group, the remote `resourceId`
	pub group_id: String,
	pub role_definition_id: String,
	pub subject_id: String,
	pub assignment_state: AssignmentState,
}

impl From<RoleAssignmentRequest> for RoleAssignmentRequestItem {
	fn from(request: RoleAssignmentRequest) -> Self {
		Self {
			id: request.id,
			group_id: request.resource_id,
			role_definition_id: request.role_definition_id,
			subject_id: request.subject_id,
			assignment_state: request.assignment_state,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentRequestsState {
	/// Object id of the group
	pub id: String,
	pub assignment_state: AssignmentState,
	pub role_assignment_requests: Vec<RoleAssignmentRequestItem>,
}

/// Desired assignment of a role to a subject
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentArgs {
	pub object_id: String,
	pub subject_id: String,
	pub role_name: String,
	pub assignment_state: AssignmentState,
	pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentState {
	/// Remote request id
	pub id: String,
	pub object_id: String,
	pub subject_id: String,
	pub role_name: String,
	pub role_definition_id: String,
	pub assignment_state: AssignmentState,
}

impl Provider {
	pub async fn list_role_assignment_requests(
		&self,
		object_id: &str,
		state: AssignmentState,
	) -> PagResult<RoleAssignmentRequestsState> {
		let requests = self.client().get_role_assignment_requests(object_id, state).await?;
		debug!("Found {} {} assignment requests on {}", requests.len(), state, object_id);

		Ok(RoleAssignmentRequestsState {
			id: object_id.to_string(),
			assignment_state: state,
			role_assignment_requests: requests
				.into_iter()
				.map(RoleAssignmentRequestItem::from)
				.collect(),
		})
	}

	pub async fn create_role_assignment_request(
		&self,
		args: &RoleAssignmentArgs,
	) -> PagResult<RoleAssignmentState> {
		let client = self.client();
		let role_definition = client.get_role_definition(&args.object_id, &args.role_name).await?;

		let created = client
			.create_role_assignment_request(&NewRoleAssignmentRequest {
				resource_id: args.object_id.clone(),
				role_definition_id: role_definition.id,
				subject_id: args.subject_id.clone(),
				assignment_state: args.assignment_state,
				reason: args.reason.clone(),
			})
			.await?;
		info!(
			"Requested {} assignment of '{}' to {} on {} ({})",
			args.assignment_state, args.role_name, args.subject_id, args.object_id, created.id
		);

		self.read_role_assignment_request(args).await
	}

	pub async fn read_role_assignment_request(
		&self,
		args: &RoleAssignmentArgs,
	) -> PagResult<RoleAssignmentState> {
		let client = self.client();
		let role_definition = client.get_role_definition(&args.object_id, &args.role_name).await?;
		let request = client
			.get_role_assignment_request(
				&args.object_id,
				&args.subject_id,
				&role_definition.id,
				args.assignment_state,
			)
			.await?;

		Ok(RoleAssignmentState {
			id: request.id,
			object_id: args.object_id.clone(),
			subject_id: args.subject_id.clone(),
			role_name: args.role_name.clone(),
			role_definition_id: role_definition.id,
			assignment_state: request.assignment_state,
		})
	}

	pub async fn delete_role_assignment_request(&self, args: &RoleAssignmentArgs) -> PagResult<()> {
		let client = self.client();
		let role_definition = client.get_role_definition(&args.object_id, &args.role_name).await?;
		client
			.delete_role_assignment_request(
				&args.object_id,
				&args.subject_id,
				&role_definition.id,
				args.assignment_state,
			)
			.await?;
		info!("Removed {} assignment of '{}' from {}", args.assignment_state, args.role_name, args.subject_id);
		Ok(())
	}
}

// vim: ts=4
