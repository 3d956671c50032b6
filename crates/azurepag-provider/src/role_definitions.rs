//! Role definitions data source

use serde::{Deserialize, Serialize};

use azurepag_types::client::RoleDefinition;

use crate::prelude::*;
use crate::provider::Provider;

/// One role definition as exposed by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinitionItem {
	pub id: String,
	pub display_name: String,
}

impl From<RoleDefinition> for RoleDefinitionItem {
	fn from(definition: RoleDefinition) -> Self {
		Self { id: definition.id, display_name: definition.display_name }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinitionsState {
	/// Object id of the group
	pub id: String,
	pub role_definitions: Vec<RoleDefinitionItem>,
}

impl Provider {
	pub async fn list_role_definitions(&self, object_id: &str) -> PagResult<RoleDefinitionsState> {
		let role_definitions = self.client().get_role_definitions(object_id).await?;
		debug!("Found {} role definitions on {}", role_definitions.len(), object_id);

		Ok(RoleDefinitionsState {
			id: object_id.to_string(),
			role_definitions: role_definitions.into_iter().map(RoleDefinitionItem::from).collect(),
		})
	}
}

// vim: ts=4
