//! Orchestration: one generation pass, set union and instance naming.

use paramforge_core::{DomainTable, Instance, ParamValue, RuleTable};
use tracing::{debug, trace};

use crate::ordering::InstanceOrdering;
use crate::product::for_each_combination;
use crate::relevance::strip_irrelevant;
use crate::set::InstanceSet;

/// Owns one deduplicated [`InstanceSet`] and the operations that build and
/// merge it.
///
/// Stateless orchestration: the only state crossing calls is the owned set,
/// and [`combine`](Combinator::combine) replaces it wholesale rather than
/// patching it incrementally.
///
/// # Examples
///
/// ```
/// use paramforge_combine::Combinator;
/// use paramforge_core::{DomainTable, RuleTable};
///
/// let mut domains = DomainTable::new();
/// domains.insert("vehicle", ["car", "motorbike"]);
/// domains.insert("AC", [0i64, 1]);
/// domains.insert("wind-protector", [0i64, 1]);
///
/// let mut rules = RuleTable::new();
/// rules.when("vehicle", "car", ["wind-protector"]);
/// rules.when("vehicle", "motorbike", ["AC"]);
///
/// let mut combinator = Combinator::new();
/// combinator.combine(&domains, &rules);
///
/// // Two AC settings per car, two wind-protector settings per motorbike.
/// assert_eq!(combinator.instances().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Combinator {
    instances: InstanceSet,
}

impl Combinator {
    /// Creates a combinator with an empty instance set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the owned set from the full cartesian product of `domains`,
    /// filtered and deduplicated under `rules`.
    ///
    /// The previous contents are discarded. Product generation and
    /// don't-care filtering are fused into one pass: the raw product is
    /// never materialized. Postcondition: the set holds exactly one
    /// representative per equivalence class induced by `rules`.
    pub fn combine(&mut self, domains: &DomainTable, rules: &RuleTable) {
        let mut set = InstanceSet::new(InstanceOrdering::new(rules.clone()));
        let names: Vec<&str> = domains.names().collect();
        let sequences: Vec<&[ParamValue]> =
            domains.iter().map(|(_, candidates)| candidates).collect();

        let mut raw_combinations = 0usize;
        for_each_combination(&sequences, |combination| {
            raw_combinations += 1;
            let mut instance = Instance::new();
            for (name, value) in names.iter().zip(combination) {
                instance.set(*name, value.clone());
            }
            strip_irrelevant(rules, &mut instance);
            if !set.insert(instance) {
                trace!(raw_combination = raw_combinations, "combination collapsed");
            }
        });

        debug!(
            parameters = domains.len(),
            raw_combinations,
            instances = set.len(),
            "combine pass complete"
        );
        self.instances = set;
    }

    /// Builds a combinator holding the union of two instance sets,
    /// deduplicated under a caller-chosen rule table.
    ///
    /// Every instance of `left` is inserted, then every instance of
    /// `right`; the rule-aware ordering collapses instances that were
    /// generated under different (or no) rule tables.
    pub fn merged(left: &Combinator, right: &Combinator, rules: &RuleTable) -> Combinator {
        let mut set = InstanceSet::new(InstanceOrdering::new(rules.clone()));
        for instance in left.instances() {
            set.insert(instance.clone());
        }
        for instance in right.instances() {
            set.insert(instance.clone());
        }
        debug!(
            left = left.instances().len(),
            right = right.instances().len(),
            merged = set.len(),
            "combinator union complete"
        );
        Combinator { instances: set }
    }

    /// Returns the owned instance set.
    pub fn instances(&self) -> &InstanceSet {
        &self.instances
    }

    /// Drops all generated instances, keeping the bound rules.
    pub fn clear(&mut self) {
        self.instances.clear();
    }
}

/// Generates a deterministic name for an instance, usable as a file or
/// test-case identifier.
///
/// `name_value` fragments are joined with `_` in lexicographic name order;
/// characters unsafe in identifiers or filenames (anything but ASCII
/// alphanumerics, `-` and `_`) are normalized to `_`. Pure function of the
/// instance contents.
///
/// # Examples
///
/// ```
/// use paramforge_combine::instance_name;
/// use paramforge_core::Instance;
///
/// let mut instance = Instance::new();
/// instance.set("vehicle", "car").set("horsepower", 100i64);
///
/// assert_eq!(instance_name(&instance), "horsepower_100_vehicle_car");
/// ```
pub fn instance_name(instance: &Instance) -> String {
    let mut name = String::new();
    for (parameter, value) in instance.iter() {
        if !name.is_empty() {
            name.push('_');
        }
        name.push_str(parameter);
        name.push('_');
        name.push_str(&value.to_string());
    }
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
