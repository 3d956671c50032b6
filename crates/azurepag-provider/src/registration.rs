//! Group registration resource
//!
//! A group has to be registered for Privileged Access Group management before its roles can
//! be configured. Right after the group is created elsewhere, registration fails with an
//! unauthorized error until permissions propagate; `register_with_retry` rides that out.

use serde::{Deserialize, Serialize};

use azurepag_core::register_with_retry;

use crate::diag::Diagnostic;
use crate::prelude::*;
use crate::provider::Provider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationState {
	pub id: String,
	pub object_id: String,
}

impl Provider {
	/// Register the group, then confirm its role definitions are readable
	pub async fn create_registration(&self, object_id: &str) -> PagResult<RegistrationState> {
		let client = self.client();

		register_with_retry(
			object_id,
			|id| client.register_group(id),
			self.config().registration_retry(),
			self.cancel(),
		)
		.await?;

		let role_definitions = client.get_role_definitions(object_id).await?;
		debug!("Group {} registered with {} role definitions", object_id, role_definitions.len());

		Ok(RegistrationState { id: object_id.to_string(), object_id: object_id.to_string() })
	}

	/// Registration has no remote state worth refreshing
	pub async fn read_registration(&self, state: &RegistrationState) -> PagResult<RegistrationState> {
		Ok(state.clone())
	}

	/// Groups cannot be unregistered; only a warning is produced
	pub async fn delete_registration(&self, state: &RegistrationState) -> Vec<Diagnostic> {
		warn!("Group {} stays registered", state.object_id);
		vec![Diagnostic::warning("Groups cannot be unregistered once registered.")]
	}
}

// vim: ts=4
