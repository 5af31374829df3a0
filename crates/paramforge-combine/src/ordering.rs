//! Rule-aware ordering over instances.
//!
//! [`InstanceOrdering`] is the ordering predicate of the deduplicating
//! [`InstanceSet`](crate::set::InstanceSet): two instances comparing
//! `Equal` are one equivalence class and only one representative is kept.
//! The rules bound here are fixed for the lifetime of the ordering; a rule
//! change requires constructing a new set, never mutating the ordering
//! under a populated one.

use std::cmp::Ordering;

use paramforge_core::{Instance, RuleTable};

/// Compares instances under a fixed don't-care rule table.
///
/// The comparison walks the union of both instances' parameter names in
/// lexicographic order and skips a name when any of the following holds:
/// - a total don't-care rule covers the name;
/// - a conditional rule keyed on *either* operand's controlling value
///   drops the name (consulting both operands keeps the relation
///   symmetric: `compare(a, b)` is always the reverse of `compare(b, a)`);
/// - both operands agree on the name's value;
/// - only one operand carries the name (tolerated size mismatch, needed
///   when merging instances built under different rule tables).
///
/// The first non-skipped name whose values differ decides the ordering;
/// when no name decides, the instances are equivalent.
#[derive(Debug, Clone, Default)]
pub struct InstanceOrdering {
    rules: RuleTable,
}

impl InstanceOrdering {
    /// Creates an ordering bound to the given rule table.
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Returns the rule table this ordering was bound to.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Compares two instances under the bound rules.
    pub fn compare(&self, a: &Instance, b: &Instance) -> Ordering {
        let mut left = a.iter().peekable();
        let mut right = b.iter().peekable();
        loop {
            match (left.peek().copied(), right.peek().copied()) {
                (None, None) => return Ordering::Equal,
                // Names carried by one side only are tolerated.
                (Some(_), None) => {
                    left.next();
                }
                (None, Some(_)) => {
                    right.next();
                }
                (Some((left_name, left_value)), Some((right_name, right_value))) => {
                    match left_name.cmp(right_name) {
                        Ordering::Less => {
                            left.next();
                        }
                        Ordering::Greater => {
                            right.next();
                        }
                        Ordering::Equal => {
                            if !self.is_irrelevant(left_name, a, b) {
                                match left_value.cmp(right_value) {
                                    Ordering::Equal => {}
                                    decided => return decided,
                                }
                            }
                            left.next();
                            right.next();
                        }
                    }
                }
            }
        }
    }

    /// Returns true if the instances fall into the same equivalence class.
    pub fn equivalent(&self, a: &Instance, b: &Instance) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// True when `name` is dropped by a rule triggered by either operand.
    fn is_irrelevant(&self, name: &str, a: &Instance, b: &Instance) -> bool {
        for (controlling, by_value) in self.rules.iter() {
            if by_value.is_empty() {
                if controlling == name {
                    return true;
                }
                continue;
            }
            for operand in [a, b] {
                if let Some(value) = operand.value_of(controlling) {
                    if by_value.get(value).is_some_and(|names| names.contains(name)) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
