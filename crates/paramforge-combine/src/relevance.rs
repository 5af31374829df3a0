//! Don't-care rule evaluation against candidate instances.
//!
//! Physical removal here is the primary deduplication mechanism: once the
//! irrelevant names are stripped, structurally equal instances collapse in
//! the set regardless of the ordering's own rule awareness. The ordering's
//! rule handling (see [`crate::ordering`]) is a safety net for instances
//! inserted from elsewhere, e.g. during set union.

use std::collections::BTreeSet;

use paramforge_core::{Instance, RuleTable};

/// Computes the union of parameter names irrelevant to `instance`.
///
/// For every rule: a total don't-care (empty value-map) marks the
/// controlling name itself; otherwise, when the instance's controlling
/// value is a key of the value-map, every name in its drop-set is marked.
/// Rules whose controlling name is absent from the instance are no-ops.
/// Pure and total: the result depends only on the instance's own values and
/// the rule table.
pub fn irrelevant_names(rules: &RuleTable, instance: &Instance) -> BTreeSet<String> {
    let mut dropped = BTreeSet::new();
    for (controlling, by_value) in rules.iter() {
        if by_value.is_empty() {
            dropped.insert(controlling.to_owned());
            continue;
        }
        if let Some(value) = instance.value_of(controlling) {
            if let Some(names) = by_value.get(value) {
                dropped.extend(names.iter().cloned());
            }
        }
    }
    dropped
}

/// Deletes every irrelevant name from `instance`.
///
/// Removal of an already-absent name is a no-op.
pub fn strip_irrelevant(rules: &RuleTable, instance: &mut Instance) {
    for name in irrelevant_names(rules, instance) {
        instance.remove(&name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car_instance() -> Instance {
        let mut instance = Instance::new();
        instance
            .set("vehicle", "car")
            .set("AC", 1i64)
            .set("wind-protector", 0i64);
        instance
    }

    #[test]
    fn conditional_rule_drops_names_keyed_by_the_controlling_value() {
        let mut rules = RuleTable::new();
        rules.when("vehicle", "car", ["wind-protector"]);
        rules.when("vehicle", "motorbike", ["AC"]);

        let mut instance = car_instance();
        strip_irrelevant(&rules, &mut instance);

        assert!(instance.contains("AC"));
        assert!(!instance.contains("wind-protector"));
    }

    #[test]
    fn total_dont_care_drops_the_controlling_name_itself() {
        let mut rules = RuleTable::new();
        rules.always_irrelevant("wind-protector");

        let mut instance = car_instance();
        strip_irrelevant(&rules, &mut instance);

        assert!(!instance.contains("wind-protector"));
        assert_eq!(instance.len(), 2);
    }

    #[test]
    fn rules_union_across_controlling_parameters() {
        let mut rules = RuleTable::new();
        rules.when("vehicle", "car", ["wind-protector"]);
        rules.when("AC", 1i64, ["vehicle"]);

        let mut instance = car_instance();
        strip_irrelevant(&rules, &mut instance);

        assert_eq!(instance.names().collect::<Vec<_>>(), vec!["AC"]);
    }

    #[test]
    fn absent_controlling_name_is_a_no_op() {
        let mut rules = RuleTable::new();
        rules.when("fuel", "diesel", ["AC"]);

        let mut instance = car_instance();
        strip_irrelevant(&rules, &mut instance);

        assert_eq!(instance.len(), 3);
    }

    #[test]
    fn dropping_an_absent_name_is_a_no_op() {
        let mut rules = RuleTable::new();
        rules.when("vehicle", "car", ["heated-grips"]);

        let mut instance = car_instance();
        strip_irrelevant(&rules, &mut instance);

        assert_eq!(instance.len(), 3);
    }

    #[test]
    fn controlling_value_must_match_exactly() {
        let mut rules = RuleTable::new();
        // Int-typed controlling value; the instance holds a string.
        rules.when("vehicle", 1i64, ["AC"]);

        let mut instance = car_instance();
        strip_irrelevant(&rules, &mut instance);

        assert!(instance.contains("AC"));
        assert_eq!(irrelevant_names(&rules, &instance), BTreeSet::new());
    }
}
