//! Settings merge
//!
//! Read-modify-write semantics for role settings:
//! - The existing remote settings are decoded into a baseline
//! - Fields marked in the `ChangedMask` take the requested value
//! - Unmarked fields keep the baseline value verbatim (never defaulted)
//! - Both governed rule groups are rebuilt from scratch under the existing settings id
//!
//! The result is meant to be submitted as a full replacement of the governed groups.

use azurepag_types::settings::{ChangedMask, FlatOptions, NestedSettings, OptionField};

use crate::codec;
use crate::prelude::*;

fn choose<T>(changed: &ChangedMask, field: OptionField, requested: T, baseline: T) -> T {
	if changed.is_set(field) { requested } else { baseline }
}

/// Overlay the changed fields of `requested` onto `baseline`
pub fn effective_options(
	baseline: &FlatOptions,
	requested: &FlatOptions,
	changed: &ChangedMask,
) -> FlatOptions {
	FlatOptions {
		allow_permanent_eligible_assignments: choose(
			changed,
			OptionField::AllowPermanentEligibleAssignments,
			requested.allow_permanent_eligible_assignments,
			baseline.allow_permanent_eligible_assignments,
		),
		max_eligible_assignment_time_minutes: choose(
			changed,
			OptionField::MaxEligibleAssignmentTimeMinutes,
			requested.max_eligible_assignment_time_minutes,
			baseline.max_eligible_assignment_time_minutes,
		),
		max_activation_time_minutes: choose(
			changed,
			OptionField::MaxActivationTimeMinutes,
			requested.max_activation_time_minutes,
			baseline.max_activation_time_minutes,
		),
		require_mfa_on_activation: choose(
			changed,
			OptionField::RequireMfaOnActivation,
			requested.require_mfa_on_activation,
			baseline.require_mfa_on_activation,
		),
		require_justification_on_activation: choose(
			changed,
			OptionField::RequireJustificationOnActivation,
			requested.require_justification_on_activation,
			baseline.require_justification_on_activation,
		),
		require_ticket_info_on_activation: choose(
			changed,
			OptionField::RequireTicketInfoOnActivation,
			requested.require_ticket_info_on_activation,
			baseline.require_ticket_info_on_activation,
		),
	}
}

/// Build the updated settings for `existing`.
///
/// # Errors
/// Any `RuleNotFound` or `MalformedPayload` from decoding `existing` is returned as-is;
/// nothing is produced in that case.
pub fn merge(
	existing: &NestedSettings,
	requested: &FlatOptions,
	changed: &ChangedMask,
) -> PagResult<NestedSettings> {
	let baseline = codec::decode(existing)?;
	let effective = effective_options(&baseline, requested, changed);

	for field in changed.fields() {
		debug!("Overriding role setting option: {}", field);
	}

	codec::assemble(&existing.id, &effective)
}


// vim: ts=4
