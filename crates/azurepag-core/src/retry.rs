//! Group registration retry
//!
//! A freshly created group can be registered only after the caller's permissions on it have
//! propagated. Until then the remote side answers `401` with an empty body. That window is
//! bounded, so registration retries at a fixed interval for a bounded number of attempts.
//! Every other failure is returned immediately.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::prelude::*;

/// Fixed-interval retry bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
	max_attempts: u32,
	delay: Duration,
}

impl Default for RetryPolicy {
	/// One initial attempt plus 50 retries, 3 seconds apart
	fn default() -> Self {
		Self { max_attempts: 51, delay: Duration::from_secs(3) }
	}
}

impl RetryPolicy {
	/// Create a policy making at most `max_attempts` calls (at least one), `delay` apart
	pub fn new(max_attempts: u32, delay: Duration) -> Self {
		Self { max_attempts, delay }
	}

	pub fn max_attempts(&self) -> u32 {
		self.max_attempts.max(1)
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Check if another attempt may follow attempt number `attempt` (1-based)
	pub fn should_retry(&self, attempt: u32) -> bool {
		attempt < self.max_attempts()
	}
}

/// The permission propagation race: `401` with an empty body.
///
/// A `401` carrying a body is treated as a real authorization failure.
pub fn is_retryable(err: &ApiError) -> bool {
	err.status == 401 && err.has_empty_body()
}

/// Call `register(subject_id)` until it succeeds, fails with a non-retryable error, or the
/// policy runs out of attempts.
///
/// Sleeps only between attempts. On exhaustion the last retryable error is returned as
/// `Error::Api`, the same shape as an immediate failure. Cancelling `cancel` aborts
/// promptly with `Error::Cancelled`, including in the middle of a sleep.
pub async fn register_with_retry<'a, F, Fut>(
	subject_id: &'a str,
	mut register: F,
	policy: &RetryPolicy,
	cancel: &CancellationToken,
) -> PagResult<()>
where
	F: FnMut(&'a str) -> Fut,
	Fut: Future<Output = ApiResult<()>>,
{
	let mut attempt: u32 = 1;
	loop {
		let result = tokio::select! {
			() = cancel.cancelled() => return Err(Error::Cancelled),
			result = register(subject_id) => result,
		};

		match result {
			Ok(()) => {
				info!("Registered {} (attempt {})", subject_id, attempt);
				return Ok(());
			}
			Err(err) if !is_retryable(&err) => {
				debug!("Registration of {} failed: {}", subject_id, err);
				return Err(Error::Api(err));
			}
			Err(err) if !policy.should_retry(attempt) => {
				warn!(
					"Registration of {} still unauthorized after {} attempts, giving up",
					subject_id, attempt
				);
				return Err(Error::Api(err));
			}
			Err(_) => {
				debug!(
					"Registration of {} unauthorized (attempt {}/{}), retrying in {:?}",
					subject_id,
					attempt,
					policy.max_attempts(),
					policy.delay()
				);
			}
		}

		tokio::select! {
			() = cancel.cancelled() => return Err(Error::Cancelled),
			() = tokio::time::sleep(policy.delay()) => (),
		}
		attempt += 1;
	}
}


// vim: ts=4
