//! Non-fatal messages returned by lifecycle operations

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub severity: Severity,
	pub summary: String,
}

impl Diagnostic {
	pub fn warning(summary: impl Into<String>) -> Self {
		Self { severity: Severity::Warning, summary: summary.into() }
	}
}

// vim: ts=4
