//! Role settings resource
//!
//! Converges the activation and eligible-assignment rules of one role on a group towards the
//! configured options. Options left out of the configuration keep their remote value.

use serde::{Deserialize, Serialize};

use azurepag_core::{codec, merge};
use azurepag_types::settings::{FlatOptions, OptionsPatch};

use crate::prelude::*;
use crate::provider::Provider;

/// Desired configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSettingsArgs {
	/// Object id of the group
	pub object_id: String,
	/// Display name of the role, e.g. "Member" or "Owner"
	pub role_name: String,
	#[serde(flatten)]
	pub options: OptionsPatch,
}

/// Observed state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSettingsState {
	/// Remote settings id
	pub id: String,
	pub object_id: String,
	pub role_name: String,
	pub role_definition_id: String,
	#[serde(flatten)]
	pub options: FlatOptions,
}

impl Provider {
	/// Apply the supplied options on top of the current remote settings, then read back.
	pub async fn create_role_settings(&self, args: &RoleSettingsArgs) -> PagResult<RoleSettingsState> {
		let client = self.client();
		let role_definition = client.get_role_definition(&args.object_id, &args.role_name).await?;
		let existing = client.get_role_settings(&args.object_id, &role_definition.id).await?;

		let (requested, changed) = args.options.into_parts();
		let updated = merge(&existing, &requested, &changed)?;

		info!(
			"Updating role settings {} for role '{}' on {} ({} options set)",
			updated.id,
			args.role_name,
			args.object_id,
			changed.fields().count()
		);
		client.update_role_settings(&updated).await?;

		self.read_role_settings(&args.object_id, &args.role_name).await
	}

	pub async fn read_role_settings(
		&self,
		object_id: &str,
		role_name: &str,
	) -> PagResult<RoleSettingsState> {
		let client = self.client();
		let role_definition = client.get_role_definition(object_id, role_name).await?;
		let settings = client.get_role_settings(object_id, &role_definition.id).await?;
		let options = codec::decode(&settings)?;

		Ok(RoleSettingsState {
			id: settings.id,
			object_id: object_id.to_string(),
			role_name: role_name.to_string(),
			role_definition_id: role_definition.id,
			options,
		})
	}

	pub async fn update_role_settings(&self, args: &RoleSettingsArgs) -> PagResult<RoleSettingsState> {
		self.create_role_settings(args).await
	}

	/// Forget the resource. The remote settings stay as they are; nothing is restored.
	pub async fn delete_role_settings(&self, state: &RoleSettingsState) -> PagResult<()> {
		warn!(
			"Role settings {} of '{}' on {} are left unchanged on removal",
			state.id, state.role_name, state.object_id
		);
		Ok(())
	}
}

// vim: ts=4
