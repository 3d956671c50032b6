//! Rule group and rule lookup

use azurepag_types::settings::{GroupKey, NestedSettings, Rule, RuleGroup, RuleId};

use crate::prelude::*;

/// Find the rule group with the given key
pub fn find_group(settings: &NestedSettings, key: GroupKey) -> PagResult<&RuleGroup> {
	settings
		.lifecycle_management
		.iter()
		.find(|group| group.has_key(key))
		.ok_or_else(|| Error::RuleNotFound(key.to_string()))
}

/// Find a rule by identifier inside a group. `key` only serves the error message.
pub fn find_rule(group: &RuleGroup, key: GroupKey, rule_id: RuleId) -> PagResult<&Rule> {
	group
		.rules
		.iter()
		.find(|rule| rule.rule_identifier == rule_id.as_str())
		.ok_or_else(|| Error::RuleNotFound(format!("rule '{}' in {}", rule_id, key)))
}


// vim: ts=4
