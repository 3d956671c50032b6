//! Privileged Access Group provider: resource and data source lifecycle operations.
//!
//! Resources:
//! - role settings (`create/read/update/delete_role_settings`)
//! - registration (`create/read/delete_registration`)
//! - role assignment request (`create/read/delete_role_assignment_request`)
//!
//! Data sources:
//! - role definitions (`list_role_definitions`)
//! - role assignment requests (`list_role_assignment_requests`)

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod assignment_requests;
pub mod config;
pub mod diag;
pub mod provider;
pub mod registration;
pub mod role_definitions;
pub mod role_settings;

mod prelude;

pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use diag::{Diagnostic, Severity};
pub use provider::Provider;

// vim: ts=4
