//! Parameter domains, don't-care rules and concrete instances.
//!
//! A [`DomainTable`] names the parameters under test and lists the candidate
//! values of each. A [`RuleTable`] states which parameters become irrelevant
//! once a controlling parameter takes a specific value. An [`Instance`] is
//! one concrete assignment of values to the parameter names that remained
//! relevant.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CombineError, Result};
use crate::value::{ParamValue, ValueKind};

/// Candidate-value domains, keyed by parameter name.
///
/// Names are unique; candidate order affects only enumeration order, never
/// the final deduplicated instance set.
///
/// # Examples
///
/// ```
/// use paramforge_core::DomainTable;
///
/// let mut domains = DomainTable::new();
/// domains.insert("vehicle", ["car", "motorbike"]);
/// domains.insert("horsepower", [100i64, 120, 130]);
///
/// assert_eq!(domains.len(), 2);
/// assert_eq!(domains.get("vehicle").map(|d| d.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainTable {
    domains: BTreeMap<String, Vec<ParamValue>>,
}

impl DomainTable {
    /// Creates an empty domain table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate values for a parameter, replacing any previous
    /// domain under the same name.
    pub fn insert<N, I, V>(&mut self, name: N, values: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        self.domains
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    /// Returns the candidate values for a parameter, if present.
    pub fn get(&self, name: &str) -> Option<&[ParamValue]> {
        self.domains.get(name).map(Vec::as_slice)
    }

    /// Returns the declared value kind of a parameter: the kind of its
    /// first candidate. `None` for unknown names and empty domains.
    pub fn declared_kind(&self, name: &str) -> Option<ValueKind> {
        self.domains.get(name)?.first().map(ParamValue::kind)
    }

    /// Number of parameters in the table.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Returns true if the table holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Iterates over `(name, candidates)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParamValue])> {
        self.domains.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Iterates over parameter names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    /// Merges two tables into a new one.
    ///
    /// Candidate lists for a shared name are concatenated with exact
    /// duplicates removed. Fails fast with `ConflictingDomainType` if the
    /// tables disagree on a shared name's declared kind, rather than
    /// building a table the comparator cannot order consistently.
    pub fn merge(&self, other: &DomainTable) -> Result<DomainTable> {
        let mut merged = self.clone();
        for (name, candidates) in other.iter() {
            match merged.domains.entry(name.to_owned()) {
                Entry::Vacant(entry) => {
                    entry.insert(candidates.to_vec());
                }
                Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    let left = existing.first().map(ParamValue::kind);
                    let right = candidates.first().map(ParamValue::kind);
                    if let (Some(left), Some(right)) = (left, right) {
                        if left != right {
                            return Err(CombineError::ConflictingDomainType {
                                name: name.to_owned(),
                                left,
                                right,
                            });
                        }
                    }
                    for value in candidates {
                        if !existing.contains(value) {
                            existing.push(value.clone());
                        }
                    }
                }
            }
        }
        Ok(merged)
    }
}

/// Conditional-relevance ("don't-care") rules.
///
/// Maps a controlling parameter name to a map from one of its candidate
/// values to the set of parameter names irrelevant at that value. An entry
/// with an empty value-map is a *total* don't-care: the controlling name
/// itself is irrelevant regardless of value. A controlling value absent
/// from the value-map carries no override. Multiple rules apply
/// simultaneously; the engine takes the union of the dropped names.
///
/// # Examples
///
/// ```
/// use paramforge_core::RuleTable;
///
/// let mut rules = RuleTable::new();
/// rules.when("vehicle", "car", ["wind-protector"]);
/// rules.when("vehicle", "motorbike", ["AC"]);
/// rules.always_irrelevant("debug-dump");
///
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<String, BTreeMap<ParamValue, BTreeSet<String>>>,
}

impl RuleTable {
    /// Creates an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `dropped` irrelevant whenever `controlling` holds `value`.
    ///
    /// Repeated calls for the same `(controlling, value)` pair extend the
    /// drop-set.
    pub fn when<C, V, I, N>(&mut self, controlling: C, value: V, dropped: I) -> &mut Self
    where
        C: Into<String>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.rules
            .entry(controlling.into())
            .or_default()
            .entry(value.into())
            .or_default()
            .extend(dropped.into_iter().map(Into::into));
        self
    }

    /// Declares `name` globally irrelevant regardless of any value (a total
    /// don't-care). Replaces any conditional rules under the same name.
    pub fn always_irrelevant<N: Into<String>>(&mut self, name: N) -> &mut Self {
        self.rules.insert(name.into(), BTreeMap::new());
        self
    }

    /// Returns the value-map of one controlling parameter, if present.
    pub fn get(&self, controlling: &str) -> Option<&BTreeMap<ParamValue, BTreeSet<String>>> {
        self.rules.get(controlling)
    }

    /// Iterates over `(controlling, value-map)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<ParamValue, BTreeSet<String>>)> {
        self.rules.iter().map(|(n, m)| (n.as_str(), m))
    }

    /// Number of controlling parameters with rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One concrete test configuration: a mapping from parameter name to value.
///
/// After don't-care filtering an instance may hold fewer names than the
/// full parameter set; an absent name means "irrelevant here", not
/// "default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    entries: BTreeMap<String, ParamValue>,
}

impl Instance {
    /// Creates an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a value to a parameter name.
    pub fn set<N: Into<String>, V: Into<ParamValue>>(&mut self, name: N, value: V) -> &mut Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Removes a parameter. Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.entries.remove(name)
    }

    /// Returns true if the instance carries the parameter.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the value of a parameter, or `None` when it is absent.
    pub fn value_of(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    /// Returns the value of a parameter, failing with `NotFound` when the
    /// name is missing or was dropped as irrelevant.
    pub fn get(&self, name: &str) -> Result<&ParamValue> {
        self.entries
            .get(name)
            .ok_or_else(|| CombineError::NotFound(name.to_owned()))
    }

    /// Reads a parameter as a bool.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        self.get(name)?.try_bool()
    }

    /// Reads a parameter as an i64.
    pub fn get_int(&self, name: &str) -> Result<i64> {
        self.get(name)?.try_i64()
    }

    /// Reads a parameter as an f64.
    pub fn get_float(&self, name: &str) -> Result<f64> {
        self.get(name)?.try_f64()
    }

    /// Reads a parameter as a string.
    pub fn get_str(&self, name: &str) -> Result<&str> {
        self.get(name)?.try_str()
    }

    /// Number of parameters carried by the instance.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the instance carries no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterates over parameter names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
