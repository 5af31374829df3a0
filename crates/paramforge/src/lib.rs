//! ParamForge - Deduplicated test-configuration generation
//!
//! Turn named parameters with finite candidate-value domains, plus
//! conditional-relevance ("don't-care") rules, into the minimal
//! deduplicated set of test configurations.
//!
//! # Example
//!
//! ```rust
//! use paramforge::prelude::*;
//!
//! let mut domains = DomainTable::new();
//! domains.insert("vehicle", ["car", "motorbike"]);
//! domains.insert("horsepower", [100i64, 130]);
//! domains.insert("AC", [0i64, 1]);
//! domains.insert("wind-protector", [0i64, 1]);
//!
//! let mut rules = RuleTable::new();
//! rules.when("vehicle", "car", ["wind-protector"]);
//! rules.when("vehicle", "motorbike", ["AC"]);
//!
//! let mut combinator = Combinator::new();
//! combinator.combine(&domains, &rules);
//! assert_eq!(combinator.instances().len(), 8);
//!
//! for instance in combinator.instances() {
//!     // e.g. "AC_0_horsepower_100_vehicle_car"
//!     let _label = instance_name(instance);
//! }
//! ```

// Core data model
pub use paramforge_core::{
    CombineError, DomainTable, Instance, ParamValue, Result, RuleTable, ValueKind,
};

// Generation engine
pub use paramforge_combine::{
    cartesian_product, for_each_combination, instance_name, Combinator, InstanceOrdering,
    InstanceSet,
};

// Campaign loading
pub use paramforge_config::{CampaignConfig, ConfigError, RawValue, RuleConfig};

pub mod prelude {
    pub use super::{
        instance_name, CampaignConfig, Combinator, DomainTable, Instance, InstanceSet, ParamValue,
        RuleTable,
    };
}
