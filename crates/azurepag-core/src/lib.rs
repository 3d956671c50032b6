//! Role settings reconciliation for Privileged Access Groups.
//!
//! - `codec`: flat options <-> nested rule groups
//! - `merge`: read-modify-write update of remote settings
//! - `retry`: group registration across the permission propagation window
//! - `lookup`: rule group and rule selection

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod lookup;
pub mod merge;
pub mod prelude;
pub mod retry;

pub use codec::{assemble, decode, decode_setting, encode, encode_payload};
pub use merge::{effective_options, merge};
pub use retry::{RetryPolicy, is_retryable, register_with_retry};

// vim: ts=4
