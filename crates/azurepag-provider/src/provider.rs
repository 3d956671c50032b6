//! Provider: configuration plus the remote client shared by all resources

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use azurepag_types::client::PagClient;

use crate::config::ProviderConfig;
use crate::prelude::*;

#[derive(Debug)]
pub struct Provider {
	config: ProviderConfig,
	client: Arc<dyn PagClient>,
	cancel: CancellationToken,
}

impl Provider {
	pub fn new(config: ProviderConfig, client: Arc<dyn PagClient>) -> Self {
		Self { config, client, cancel: CancellationToken::new() }
	}

	/// Build the client from the configured token and user agent
	pub fn configure<F>(config: ProviderConfig, make_client: F) -> Self
	where
		F: FnOnce(&str, &str) -> Arc<dyn PagClient>,
	{
		let client = make_client(config.token(), config.user_agent());
		info!("Provider client created");
		Self::new(config, client)
	}

	pub fn config(&self) -> &ProviderConfig {
		&self.config
	}

	pub fn client(&self) -> &dyn PagClient {
		self.client.as_ref()
	}

	/// Token observed by long-running operations. Cancelling it aborts them.
	pub fn cancellation_token(&self) -> CancellationToken {
		self.cancel.clone()
	}

	pub(crate) fn cancel(&self) -> &CancellationToken {
		&self.cancel
	}
}

// vim: ts=4
