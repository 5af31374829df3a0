//! Ordered, deduplicating storage for generated instances.

use std::cmp::Ordering;

use paramforge_core::Instance;

use crate::ordering::InstanceOrdering;

/// An ordered set of instances, deduplicated by an [`InstanceOrdering`]
/// bound at construction.
///
/// Invariant: no two members compare `Equal` under the bound ordering.
/// Members are kept sorted, so insertion and lookup are binary searches.
///
/// # Examples
///
/// ```
/// use paramforge_combine::{InstanceOrdering, InstanceSet};
/// use paramforge_core::Instance;
///
/// let mut set = InstanceSet::new(InstanceOrdering::default());
/// let mut instance = Instance::new();
/// instance.set("vehicle", "car");
///
/// assert!(set.insert(instance.clone()));
/// assert!(!set.insert(instance));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceSet {
    ordering: InstanceOrdering,
    members: Vec<Instance>,
}

impl InstanceSet {
    /// Creates an empty set deduplicated by `ordering`.
    pub fn new(ordering: InstanceOrdering) -> Self {
        Self {
            ordering,
            members: Vec::new(),
        }
    }

    /// Inserts an instance unless an equivalent member already exists.
    ///
    /// Returns true when the instance was added, false when it collapsed
    /// into an existing equivalence class.
    pub fn insert(&mut self, instance: Instance) -> bool {
        match self.position_of(&instance) {
            Ok(_) => false,
            Err(position) => {
                self.members.insert(position, instance);
                true
            }
        }
    }

    /// Returns true if an equivalent member exists.
    pub fn contains(&self, instance: &Instance) -> bool {
        self.position_of(instance).is_ok()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Removes all members, keeping the bound ordering.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Iterates over members in ordering position.
    pub fn iter(&self) -> std::slice::Iter<'_, Instance> {
        self.members.iter()
    }

    /// Returns the ordering this set deduplicates by.
    pub fn ordering(&self) -> &InstanceOrdering {
        &self.ordering
    }

    fn position_of(&self, instance: &Instance) -> Result<usize, usize> {
        let ordering = &self.ordering;
        self.members
            .binary_search_by(|member| ordering.compare(member, instance))
    }
}

impl<'a> IntoIterator for &'a InstanceSet {
    type Item = &'a Instance;
    type IntoIter = std::slice::Iter<'a, Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramforge_core::RuleTable;

    fn instance(pairs: &[(&str, i64)]) -> Instance {
        let mut built = Instance::new();
        for (name, value) in pairs {
            built.set(*name, *value);
        }
        built
    }

    #[test]
    fn members_are_kept_in_ordering_position() {
        let mut set = InstanceSet::default();
        set.insert(instance(&[("x", 3)]));
        set.insert(instance(&[("x", 1)]));
        set.insert(instance(&[("x", 2)]));

        let values: Vec<i64> = set.iter().map(|i| i.get_int("x").unwrap()).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn equivalent_instances_collapse() {
        let mut rules = RuleTable::new();
        rules.when("mode", 0i64, ["tolerance"]);
        let mut set = InstanceSet::new(InstanceOrdering::new(rules));

        assert!(set.insert(instance(&[("mode", 0), ("tolerance", 1)])));
        assert!(!set.insert(instance(&[("mode", 0), ("tolerance", 2)])));
        assert!(set.insert(instance(&[("mode", 1), ("tolerance", 2)])));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn contains_uses_the_bound_ordering() {
        let mut rules = RuleTable::new();
        rules.always_irrelevant("seed");
        let mut set = InstanceSet::new(InstanceOrdering::new(rules));
        set.insert(instance(&[("seed", 1), ("steps", 5)]));

        assert!(set.contains(&instance(&[("seed", 99), ("steps", 5)])));
        assert!(!set.contains(&instance(&[("seed", 1), ("steps", 6)])));
    }

    #[test]
    fn clear_keeps_the_ordering() {
        let mut rules = RuleTable::new();
        rules.always_irrelevant("seed");
        let mut set = InstanceSet::new(InstanceOrdering::new(rules));
        set.insert(instance(&[("seed", 1)]));
        set.clear();

        assert!(set.is_empty());
        assert!(!set.ordering().rules().is_empty());
    }
}
