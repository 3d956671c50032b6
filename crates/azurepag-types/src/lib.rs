//! Shared types for Privileged Access Group settings management.
//!
//! This crate holds the role settings data model (flat options and the remote nested rule
//! representation), the error type, and the remote API client trait. It is shared by the
//! core reconciliation crate and the provider crate.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod settings;

// vim: ts=4
