//! Role settings data model
//!
//! Two views of the same configuration:
//! - `FlatOptions`: the user-facing record of six options
//! - `NestedSettings`: the remote representation, rule groups holding rules whose `setting`
//!   is a JSON-encoded payload

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// Flat view
//***********

/// User-facing role settings options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatOptions {
	pub allow_permanent_eligible_assignments: bool,
	/// Ignored by the remote system while permanent assignments are allowed
	pub max_eligible_assignment_time_minutes: i64,
	pub max_activation_time_minutes: i64,
	pub require_mfa_on_activation: bool,
	pub require_justification_on_activation: bool,
	pub require_ticket_info_on_activation: bool,
}

/// Names one field of `FlatOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
	AllowPermanentEligibleAssignments,
	MaxEligibleAssignmentTimeMinutes,
	MaxActivationTimeMinutes,
	RequireMfaOnActivation,
	RequireJustificationOnActivation,
	RequireTicketInfoOnActivation,
}

impl OptionField {
	pub const ALL: [OptionField; 6] = [
		OptionField::AllowPermanentEligibleAssignments,
		OptionField::MaxEligibleAssignmentTimeMinutes,
		OptionField::MaxActivationTimeMinutes,
		OptionField::RequireMfaOnActivation,
		OptionField::RequireJustificationOnActivation,
		OptionField::RequireTicketInfoOnActivation,
	];

	/// Configuration name of the option
	pub fn name(self) -> &'static str {
		match self {
			OptionField::AllowPermanentEligibleAssignments => "allow_permanent_eligible_assignments",
			OptionField::MaxEligibleAssignmentTimeMinutes => "max_eligible_assignment_time_minutes",
			OptionField::MaxActivationTimeMinutes => "max_activation_time_minutes",
			OptionField::RequireMfaOnActivation => "require_mfa_on_activation",
			OptionField::RequireJustificationOnActivation => "require_justification_on_activation",
			OptionField::RequireTicketInfoOnActivation => "require_ticket_info_on_activation",
		}
	}

	const fn bit(self) -> u8 {
		1 << self as u8
	}
}

impl fmt::Display for OptionField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Which `FlatOptions` fields were explicitly supplied by the caller.
///
/// An unset field means "leave the remote value as it is".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangedMask(u8);

impl ChangedMask {
	pub const fn none() -> Self {
		Self(0)
	}

	pub fn all() -> Self {
		OptionField::ALL.into_iter().collect()
	}

	pub fn only(field: OptionField) -> Self {
		Self::none().with(field)
	}

	#[must_use]
	pub fn with(self, field: OptionField) -> Self {
		Self(self.0 | field.bit())
	}

	pub fn set(&mut self, field: OptionField) {
		self.0 |= field.bit();
	}

	pub fn is_set(&self, field: OptionField) -> bool {
		self.0 & field.bit() != 0
	}

	pub fn is_empty(&self) -> bool {
		self.0 == 0
	}

	/// Iterate the fields marked as changed
	pub fn fields(self) -> impl Iterator<Item = OptionField> {
		OptionField::ALL.into_iter().filter(move |f| self.is_set(*f))
	}
}

impl FromIterator<OptionField> for ChangedMask {
	fn from_iter<I: IntoIterator<Item = OptionField>>(iter: I) -> Self {
		iter.into_iter().fold(Self::none(), Self::with)
	}
}

/// Partially specified options: `Some` marks an explicitly supplied value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsPatch {
	pub allow_permanent_eligible_assignments: Option<bool>,
	pub max_eligible_assignment_time_minutes: Option<i64>,
	pub max_activation_time_minutes: Option<i64>,
	pub require_mfa_on_activation: Option<bool>,
	pub require_justification_on_activation: Option<bool>,
	pub require_ticket_info_on_activation: Option<bool>,
}

fn pick<T: Default>(value: Option<T>, field: OptionField, mask: &mut ChangedMask) -> T {
	match value {
		Some(value) => {
			mask.set(field);
			value
		}
		None => T::default(),
	}
}

impl OptionsPatch {
	/// Split into requested values and the mask of supplied fields.
	///
	/// Fields absent from the patch come out as defaults; they are only meaningful
	/// together with the mask.
	pub fn into_parts(self) -> (FlatOptions, ChangedMask) {
		let mut mask = ChangedMask::none();
		let requested = FlatOptions {
			allow_permanent_eligible_assignments: pick(
				self.allow_permanent_eligible_assignments,
				OptionField::AllowPermanentEligibleAssignments,
				&mut mask,
			),
			max_eligible_assignment_time_minutes: pick(
				self.max_eligible_assignment_time_minutes,
				OptionField::MaxEligibleAssignmentTimeMinutes,
				&mut mask,
			),
			max_activation_time_minutes: pick(
				self.max_activation_time_minutes,
				OptionField::MaxActivationTimeMinutes,
				&mut mask,
			),
			require_mfa_on_activation: pick(
				self.require_mfa_on_activation,
				OptionField::RequireMfaOnActivation,
				&mut mask,
			),
			require_justification_on_activation: pick(
				self.require_justification_on_activation,
				OptionField::RequireJustificationOnActivation,
				&mut mask,
			),
			require_ticket_info_on_activation: pick(
				self.require_ticket_info_on_activation,
				OptionField::RequireTicketInfoOnActivation,
				&mut mask,
			),
		};
		(requested, mask)
	}
}

// Nested view
//*************

/// Remote role settings: lifecycle management rule groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedSettings {
	pub id: String,
	#[serde(default)]
	pub lifecycle_management: Vec<RuleGroup>,
}

/// Rules governing one `(caller, level, operation)` combination.
///
/// The key fields stay strings on the wire so groups outside the known vocabulary survive
/// a fetch. Selection goes through `GroupKey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleGroup {
	pub caller: String,
	pub level: String,
	pub operation: String,
	#[serde(rename = "value", default)]
	pub rules: Vec<Rule>,
}

impl RuleGroup {
	pub fn new(key: GroupKey, rules: Vec<Rule>) -> Self {
		Self {
			caller: key.caller.as_str().into(),
			level: key.level.as_str().into(),
			operation: key.operation.as_str().into(),
			rules,
		}
	}

	pub fn has_key(&self, key: GroupKey) -> bool {
		self.caller == key.caller.as_str()
			&& self.level == key.level.as_str()
			&& self.operation == key.operation.as_str()
	}
}

/// A single rule with its JSON-encoded setting payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
	pub rule_identifier: String,
	pub setting: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Caller {
	EndUser,
	Admin,
}

impl Caller {
	pub fn as_str(self) -> &'static str {
		match self {
			Caller::EndUser => "EndUser",
			Caller::Admin => "Admin",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
	Member,
	Eligible,
}

impl Level {
	pub fn as_str(self) -> &'static str {
		match self {
			Level::Member => "Member",
			Level::Eligible => "Eligible",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	All,
}

impl Operation {
	pub fn as_str(self) -> &'static str {
		match self {
			Operation::All => "ALL",
		}
	}
}

/// Identifies a rule group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
	pub caller: Caller,
	pub level: Level,
	pub operation: Operation,
}

impl GroupKey {
	/// Governs role activation: MFA, justification, ticketing, activation duration
	pub const ACTIVATION: GroupKey =
		GroupKey { caller: Caller::EndUser, level: Level::Member, operation: Operation::All };

	/// Governs eligible assignments: permanent flag, assignment duration
	pub const ELIGIBLE_ASSIGNMENT: GroupKey =
		GroupKey { caller: Caller::Admin, level: Level::Eligible, operation: Operation::All };
}

impl fmt::Display for GroupKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"rule group ({}, {}, {})",
			self.caller.as_str(),
			self.level.as_str(),
			self.operation.as_str()
		)
	}
}

/// Known rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
	Expiration,
	Mfa,
	Justification,
	Ticketing,
}

impl RuleId {
	pub fn as_str(self) -> &'static str {
		match self {
			RuleId::Expiration => "ExpirationRule",
			RuleId::Mfa => "MfaRule",
			RuleId::Justification => "JustificationRule",
			RuleId::Ticketing => "TicketingRule",
		}
	}
}

impl fmt::Display for RuleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RuleId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ExpirationRule" => Ok(RuleId::Expiration),
			"MfaRule" => Ok(RuleId::Mfa),
			"JustificationRule" => Ok(RuleId::Justification),
			"TicketingRule" => Ok(RuleId::Ticketing),
			_ => Err(Error::UnknownRule(s.into())),
		}
	}
}

// Rule payloads
//***************

/// `ExpirationRule` payload.
///
/// In the activation group `permanent_assignment` is unused but required; it is always
/// written as `true` there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationSetting {
	pub permanent_assignment: bool,
	pub maximum_grant_period_in_minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaSetting {
	pub mfa_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustificationSetting {
	pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketingSetting {
	pub ticketing_required: bool,
}

/// Decoded rule payload, one variant per rule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSetting {
	Expiration(ExpirationSetting),
	Mfa(MfaSetting),
	Justification(JustificationSetting),
	Ticketing(TicketingSetting),
}

impl RuleSetting {
	pub fn rule_id(&self) -> RuleId {
		match self {
			RuleSetting::Expiration(_) => RuleId::Expiration,
			RuleSetting::Mfa(_) => RuleId::Mfa,
			RuleSetting::Justification(_) => RuleId::Justification,
			RuleSetting::Ticketing(_) => RuleId::Ticketing,
		}
	}

	pub fn expiration(self) -> Option<ExpirationSetting> {
		match self {
			RuleSetting::Expiration(s) => Some(s),
			_ => None,
		}
	}

	pub fn mfa(self) -> Option<MfaSetting> {
		match self {
			RuleSetting::Mfa(s) => Some(s),
			_ => None,
		}
	}

	pub fn justification(self) -> Option<JustificationSetting> {
		match self {
			RuleSetting::Justification(s) => Some(s),
			_ => None,
		}
	}

	pub fn ticketing(self) -> Option<TicketingSetting> {
		match self {
			RuleSetting::Ticketing(s) => Some(s),
			_ => None,
		}
	}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	#[test]
	fn test_patch_into_parts_marks_supplied_fields() {
		let patch = OptionsPatch {
			max_activation_time_minutes: Some(120),
			require_mfa_on_activation: Some(false),
			..OptionsPatch::default()
		};
		let (requested, mask) = patch.into_parts();

		assert_eq!(requested.max_activation_time_minutes, 120);
		assert!(!requested.require_mfa_on_activation);
		assert!(mask.is_set(OptionField::MaxActivationTimeMinutes));
		assert!(mask.is_set(OptionField::RequireMfaOnActivation));
		assert_eq!(mask.fields().count(), 2);
	}

	#[test]
	fn test_empty_patch_changes_nothing() {
		let (_, mask) = OptionsPatch::default().into_parts();
		assert!(mask.is_empty());
	}

	#[test]
	fn test_mask_all() {
		let mask = ChangedMask::all();
		assert!(OptionField::ALL.iter().all(|f| mask.is_set(*f)));
	}

	#[test]
	fn test_rule_id_parse() {
		assert_eq!("MfaRule".parse::<RuleId>().ok(), Some(RuleId::Mfa));
		assert!(matches!("ApprovalRule".parse::<RuleId>(), Err(Error::UnknownRule(id)) if id == "ApprovalRule"));
	}

	#[test]
	fn test_nested_settings_wire_format() {
		let json = r#"{
			"id": "settings-1",
			"lifecycleManagement": [{
				"caller": "EndUser",
				"level": "Member",
				"operation": "ALL",
				"value": [{"ruleIdentifier": "MfaRule", "setting": "{\"mfaRequired\":true}"}]
			}]
		}"#;
		let settings: NestedSettings = serde_json::from_str(json).unwrap();

		assert_eq!(settings.id, "settings-1");
		assert!(settings.lifecycle_management[0].has_key(GroupKey::ACTIVATION));
		assert_eq!(settings.lifecycle_management[0].rules[0].rule_identifier, "MfaRule");
	}

	#[test]
	fn test_rule_setting_accessors() {
		let setting = RuleSetting::Mfa(MfaSetting { mfa_required: true });
		assert_eq!(setting.mfa(), Some(MfaSetting { mfa_required: true }));
		assert_eq!(setting.expiration(), None);
		assert_eq!(setting.ticketing(), None);
	}

	#[test]
	fn test_group_key_display() {
		assert_eq!(
			GroupKey::ELIGIBLE_ASSIGNMENT.to_string(),
			"rule group (Admin, Eligible, ALL)"
		);
	}
}

// vim: ts=4
