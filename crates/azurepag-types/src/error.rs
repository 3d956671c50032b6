//! Error types shared by the settings codec, the merger, the retrier and the provider.

use std::fmt;

pub type PagResult<T> = std::result::Result<T, Error>;

/// Result of a call through the remote API client
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure reported by the remote API client.
///
/// Carries the HTTP status and the (possibly empty) response body. Callers other than the
/// registration retrier surface it without interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
	pub status: u16,
	pub body: Option<String>,
}

impl ApiError {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, body: Some(body.into()) }
	}

	/// Error without a response body
	pub fn status(status: u16) -> Self {
		Self { status, body: None }
	}

	pub fn not_found(what: impl Into<String>) -> Self {
		Self::new(404, what)
	}

	pub fn is_not_found(&self) -> bool {
		self.status == 404
	}

	/// True when the body is missing or zero-length
	pub fn has_empty_body(&self) -> bool {
		self.body.as_deref().is_none_or(str::is_empty)
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "status: {}, body: {}", self.status, self.body.as_deref().unwrap_or_default())
	}
}

impl std::error::Error for ApiError {}

#[derive(Debug)]
pub enum Error {
	/// An expected rule group or rule is absent; names what is missing
	RuleNotFound(String),
	/// A rule's `setting` payload does not match the shape of its identifier
	MalformedPayload { rule: String, reason: String },
	/// Rule identifier outside the known vocabulary
	UnknownRule(String),
	/// Remote API failure, passed through as-is
	Api(ApiError),
	ConfigError(String),
	/// Operation aborted through its cancellation token
	Cancelled,
	Internal(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::RuleNotFound(what) => write!(f, "{} not found", what),
			Error::MalformedPayload { rule, reason } => {
				write!(f, "malformed setting payload for {}: {}", rule, reason)
			}
			Error::UnknownRule(id) => write!(f, "unknown rule identifier: {}", id),
			Error::Api(err) => write!(f, "api error: {}", err),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Cancelled => write!(f, "operation cancelled"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Api(err) => Some(err),
			_ => None,
		}
	}
}

impl From<ApiError> for Error {
	fn from(err: ApiError) -> Self {
		Self::Api(err)
	}
}


// vim: ts=4
