//! Provider configuration

use std::fmt;
use std::time::Duration;

use azurepag_core::RetryPolicy;

use crate::prelude::*;

/// Environment variable consulted when no token is given explicitly
pub const TOKEN_ENV_VAR: &str = "AZUREPAG_TOKEN";

pub const DEFAULT_USER_AGENT: &str = concat!("azurepag/", env!("CARGO_PKG_VERSION"));

/// Validated provider configuration
#[derive(Clone)]
pub struct ProviderConfig {
	token: String,
	user_agent: String,
	registration_retry: RetryPolicy,
}

impl fmt::Debug for ProviderConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderConfig")
			.field("token", &"<redacted>")
			.field("user_agent", &self.user_agent)
			.field("registration_retry", &self.registration_retry)
			.finish()
	}
}

impl ProviderConfig {
	pub fn builder() -> ProviderConfigBuilder {
		ProviderConfigBuilder::new()
	}

	/// Configuration with every value taken from defaults and the environment
	pub fn from_env() -> PagResult<Self> {
		Self::builder().build()
	}

	/// API bearer token
	pub fn token(&self) -> &str {
		&self.token
	}

	pub fn user_agent(&self) -> &str {
		&self.user_agent
	}

	pub fn registration_retry(&self) -> &RetryPolicy {
		&self.registration_retry
	}
}

/// Builder for ProviderConfig with fluent API
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
	token: Option<String>,
	user_agent: Option<String>,
	registration_retry: RetryPolicy,
}

impl ProviderConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the token explicitly (takes precedence over the environment)
	pub fn token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self
	}

	/// Product token prepended to the default user agent, e.g. `terraform/1.9`
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}

	/// Override the registration retry policy (defaults to 51 attempts, 3 seconds apart)
	pub fn registration_retry(mut self, policy: RetryPolicy) -> Self {
		self.registration_retry = policy;
		self
	}

	pub fn registration_retry_attempts(mut self, max_attempts: u32, delay: Duration) -> Self {
		self.registration_retry = RetryPolicy::new(max_attempts, delay);
		self
	}

	/// Build the configuration, reading the token from `AZUREPAG_TOKEN` if not set
	pub fn build(self) -> PagResult<ProviderConfig> {
		self.build_with_env(|key| std::env::var(key).ok())
	}

	/// Build using `env` to look up environment variables
	pub fn build_with_env<F>(self, env: F) -> PagResult<ProviderConfig>
	where
		F: Fn(&str) -> Option<String>,
	{
		let token = self.token.or_else(|| env(TOKEN_ENV_VAR)).unwrap_or_default();
		if token.trim().is_empty() {
			return Err(Error::ConfigError("API token must be specified".into()));
		}

		let user_agent = match self.user_agent {
			Some(product) if !product.is_empty() => format!("{} {}", product, DEFAULT_USER_AGENT),
			_ => DEFAULT_USER_AGENT.to_string(),
		};

		debug!("Provider configured, user agent: {}", user_agent);
		Ok(ProviderConfig { token, user_agent, registration_retry: self.registration_retry })
	}
}


// vim: ts=4
