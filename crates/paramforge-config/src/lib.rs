//! Configuration loading for ParamForge.
//!
//! Load parameter domains and don't-care rules from TOML or YAML files so
//! a test campaign can be described without code changes.
//!
//! # Examples
//!
//! Load a campaign from a TOML string:
//!
//! ```
//! use paramforge_config::CampaignConfig;
//!
//! let config = CampaignConfig::from_toml_str(r#"
//!     [parameters]
//!     vehicle = ["car", "motorbike"]
//!     horsepower = [100, 120, 130]
//!     airbag = [0, 1]
//!
//!     [[rules]]
//!     parameter = "vehicle"
//!     [rules.when]
//!     car = ["wind-protector"]
//!     motorbike = ["AC"]
//! "#).unwrap();
//!
//! let (domains, rules) = config.tables().unwrap();
//! assert_eq!(domains.len(), 3);
//! assert_eq!(rules.len(), 1);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use paramforge_core::{DomainTable, ParamValue, RuleTable, ValueKind};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A test campaign: parameter domains plus don't-care rules.
///
/// This is the external configuration surface feeding the engine; the
/// engine itself only ever sees the converted [`DomainTable`] and
/// [`RuleTable`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CampaignConfig {
    /// Candidate values per parameter name.
    #[serde(default)]
    pub parameters: BTreeMap<String, Vec<RawValue>>,

    /// Conditional-relevance rules.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl CampaignConfig {
    /// Creates an empty campaign.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a campaign from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a campaign from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a campaign from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a campaign from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a campaign from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Converts the `[parameters]` section into a domain table.
    pub fn domain_table(&self) -> Result<DomainTable, ConfigError> {
        let mut domains = DomainTable::new();
        for (name, candidates) in &self.parameters {
            let values: Vec<ParamValue> = candidates.iter().map(RawValue::to_value).collect();
            domains.insert(name.clone(), values);
        }
        Ok(domains)
    }

    /// Converts the `[[rules]]` entries into a rule table.
    ///
    /// Fails fast rather than building a table the engine would silently
    /// ignore: the controlling parameter must exist, and every `when` key
    /// must parse as, and actually be, one of its candidates.
    pub fn rule_table(&self) -> Result<RuleTable, ConfigError> {
        let domains = self.domain_table()?;
        let mut rules = RuleTable::new();
        for rule in &self.rules {
            if !self.parameters.contains_key(&rule.parameter) {
                return Err(ConfigError::Invalid(format!(
                    "rule references unknown parameter `{}`",
                    rule.parameter
                )));
            }
            if rule.when.is_empty() {
                rules.always_irrelevant(rule.parameter.clone());
                continue;
            }
            let kind = domains.declared_kind(&rule.parameter).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "parameter `{}` has no candidate values to key rules on",
                    rule.parameter
                ))
            })?;
            for (raw_value, dropped) in &rule.when {
                let value = parse_controlling_value(raw_value, kind).ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "rule value `{raw_value}` is not a valid {kind} for parameter `{}`",
                        rule.parameter
                    ))
                })?;
                let candidates = domains.get(&rule.parameter).unwrap_or(&[]);
                if !candidates.contains(&value) {
                    return Err(ConfigError::Invalid(format!(
                        "rule value `{raw_value}` is not a candidate of parameter `{}`",
                        rule.parameter
                    )));
                }
                rules.when(rule.parameter.clone(), value, dropped.iter().cloned());
            }
        }
        Ok(rules)
    }

    /// Converts the whole campaign into `(domains, rules)`.
    pub fn tables(&self) -> Result<(DomainTable, RuleTable), ConfigError> {
        Ok((self.domain_table()?, self.rule_table()?))
    }
}

/// One scalar candidate value as it appears in the document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point.
    Float(f64),
    /// String.
    Str(String),
}

impl RawValue {
    fn to_value(&self) -> ParamValue {
        match self {
            RawValue::Bool(v) => ParamValue::from(*v),
            RawValue::Int(v) => ParamValue::from(*v),
            RawValue::Float(v) => ParamValue::from(*v),
            RawValue::Str(v) => ParamValue::from(v.clone()),
        }
    }
}

/// One conditional-relevance rule.
///
/// Without a `when` table the rule is a total don't-care: the parameter is
/// irrelevant regardless of its value.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleConfig {
    /// The controlling parameter name.
    pub parameter: String,

    /// Controlling value (rendered as a document key) to the parameter
    /// names irrelevant at that value.
    #[serde(default)]
    pub when: BTreeMap<String, Vec<String>>,
}

/// Parses a document key back into a candidate value of the declared kind.
fn parse_controlling_value(raw: &str, kind: ValueKind) -> Option<ParamValue> {
    match kind {
        ValueKind::Bool => raw.parse::<bool>().ok().map(ParamValue::from),
        ValueKind::Int => raw.parse::<i64>().ok().map(ParamValue::from),
        ValueKind::Float => raw.parse::<f64>().ok().map(ParamValue::from),
        ValueKind::Str => Some(ParamValue::from(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEHICLE_TOML: &str = r#"
        [parameters]
        vehicle = ["car", "motorbike"]
        horsepower = [100, 130]
        AC = [0, 1]
        "wind-protector" = [0, 1]

        [[rules]]
        parameter = "vehicle"
        [rules.when]
        car = ["wind-protector"]
        motorbike = ["AC"]
    "#;

    #[test]
    fn test_toml_parsing() {
        let config = CampaignConfig::from_toml_str(VEHICLE_TOML).unwrap();
        let (domains, rules) = config.tables().unwrap();

        assert_eq!(domains.len(), 4);
        assert_eq!(domains.declared_kind("horsepower"), Some(ValueKind::Int));
        let by_value = rules.get("vehicle").unwrap();
        assert!(by_value
            .get(&ParamValue::from("car"))
            .unwrap()
            .contains("wind-protector"));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            parameters:
              vehicle: ["car", "motorbike"]
              horsepower: [100, 130]
              AC: [0, 1]
              wind-protector: [0, 1]
            rules:
              - parameter: vehicle
                when:
                  car: [wind-protector]
                  motorbike: [AC]
        "#;

        let toml_config = CampaignConfig::from_toml_str(VEHICLE_TOML).unwrap();
        let yaml_config = CampaignConfig::from_yaml_str(yaml).unwrap();

        let (toml_domains, toml_rules) = toml_config.tables().unwrap();
        let (yaml_domains, yaml_rules) = yaml_config.tables().unwrap();
        assert_eq!(toml_domains, yaml_domains);
        assert_eq!(toml_rules, yaml_rules);
    }

    #[test]
    fn integer_controlling_values_parse_against_the_declared_kind() {
        let config = CampaignConfig::from_toml_str(
            r#"
            [parameters]
            airbag = [0, 1]
            "side-curtain" = [0, 1]

            [[rules]]
            parameter = "airbag"
            [rules.when]
            0 = ["side-curtain"]
        "#,
        )
        .unwrap();

        let rules = config.rule_table().unwrap();
        let by_value = rules.get("airbag").unwrap();
        assert!(by_value
            .get(&ParamValue::from(0i64))
            .unwrap()
            .contains("side-curtain"));
    }

    #[test]
    fn rule_without_when_is_a_total_dont_care() {
        let config = CampaignConfig::from_toml_str(
            r#"
            [parameters]
            debug-dump = [0, 1]

            [[rules]]
            parameter = "debug-dump"
        "#,
        )
        .unwrap();

        let rules = config.rule_table().unwrap();
        assert!(rules.get("debug-dump").unwrap().is_empty());
    }

    #[test]
    fn rule_on_unknown_parameter_is_invalid() {
        let config = CampaignConfig::from_toml_str(
            r#"
            [parameters]
            vehicle = ["car"]

            [[rules]]
            parameter = "fuel"
        "#,
        )
        .unwrap();

        assert!(matches!(
            config.rule_table(),
            Err(ConfigError::Invalid(message)) if message.contains("fuel")
        ));
    }

    #[test]
    fn rule_value_outside_the_domain_is_invalid() {
        let config = CampaignConfig::from_toml_str(
            r#"
            [parameters]
            vehicle = ["car", "motorbike"]
            AC = [0, 1]

            [[rules]]
            parameter = "vehicle"
            [rules.when]
            bus = ["AC"]
        "#,
        )
        .unwrap();

        assert!(matches!(
            config.rule_table(),
            Err(ConfigError::Invalid(message)) if message.contains("bus")
        ));
    }

    #[test]
    fn rule_value_of_the_wrong_kind_is_invalid() {
        let config = CampaignConfig::from_toml_str(
            r#"
            [parameters]
            airbag = [0, 1]
            vehicle = ["car"]

            [[rules]]
            parameter = "airbag"
            [rules.when]
            maybe = ["vehicle"]
        "#,
        )
        .unwrap();

        assert!(matches!(
            config.rule_table(),
            Err(ConfigError::Invalid(message)) if message.contains("maybe")
        ));
    }

    #[test]
    fn mixed_scalar_kinds_convert() {
        let config = CampaignConfig::from_toml_str(
            r#"
            [parameters]
            magTol = [0.5, 1.0]
            signal = ["sine", "noise"]
            steps = [1, 2]
            verbose = [true, false]
        "#,
        )
        .unwrap();

        let domains = config.domain_table().unwrap();
        assert_eq!(domains.declared_kind("magTol"), Some(ValueKind::Float));
        assert_eq!(domains.declared_kind("signal"), Some(ValueKind::Str));
        assert_eq!(domains.declared_kind("steps"), Some(ValueKind::Int));
        assert_eq!(domains.declared_kind("verbose"), Some(ValueKind::Bool));
    }
}
