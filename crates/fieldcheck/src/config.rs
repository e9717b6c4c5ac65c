//! Construction input for a [`Validator`].
//!
//! Field specifications are plain data and can be read from JSON with
//! [`ValidatorConfig`]. Custom rules carry predicates, so they are supplied in
//! code through [`ValidatorBuilder::rule`] or [`Validator::from_config`].

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FieldCheckError, Result};
use crate::field::FieldSpec;
use crate::registry::RuleRegistry;
use crate::rule::Rule;
use crate::validator::Validator;

// ============================================================================
// CONFIG
// ============================================================================

/// Declarative part of a validator's configuration.
///
/// ```
/// use fieldcheck::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json(r#"{
///     "fields": {
///         "name":  { "rules": "required,alpha_space" },
///         "email": { "rules": ["required", "email"], "message": "Bad email" }
///     },
///     "defaultMessage": "Please check this field"
/// }"#).unwrap();
///
/// let fields = config.fields.as_ref().unwrap();
/// assert_eq!(fields.keys().collect::<Vec<_>>(), ["name", "email"]);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Field specifications in declaration order. Required.
    pub fields: Option<IndexMap<String, FieldSpec>>,
    /// Replaces the registry's fallback message.
    pub default_message: Option<String>,
}

impl ValidatorConfig {
    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent constructor for [`Validator`].
///
/// ```
/// use fieldcheck::{FieldSpec, Rule, Validator};
/// use serde_json::Value;
///
/// let validator = Validator::builder()
///     .field("username", FieldSpec::new("required,handle"))
///     .rule("handle", Rule::new(|v: &Value| v.as_str().is_some_and(|s| s.starts_with('@'))))
///     .build()
///     .unwrap();
///
/// assert!(validator.registry().contains("handle"));
/// ```
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    fields: Option<IndexMap<String, FieldSpec>>,
    rules: Vec<(String, Rule)>,
    default_message: Option<String>,
}

impl ValidatorBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a declarative config.
    #[must_use]
    pub fn from_config(config: ValidatorConfig) -> Self {
        Self {
            fields: config.fields,
            rules: Vec::new(),
            default_message: config.default_message,
        }
    }

    /// Adds a field; re-adding a name replaces its spec but keeps its position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), spec);
        self
    }

    /// Adds several fields in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn fields<I, K>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldSpec)>,
        K: Into<String>,
    {
        let table = self.fields.get_or_insert_with(IndexMap::new);
        for (name, spec) in fields {
            table.insert(name.into(), spec);
        }
        self
    }

    /// Registers a custom rule, overriding a built-in of the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.rules.push((name.into(), rule));
        self
    }

    /// Registers several custom rules in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules<I, K>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<String>,
    {
        self.rules
            .extend(rules.into_iter().map(|(name, rule)| (name.into(), rule)));
        self
    }

    /// Replaces the fallback message.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }

    /// Merges the rules and builds the validator.
    ///
    /// Fails with [`FieldCheckError::MissingFields`] when no field was given.
    pub fn build(self) -> Result<Validator> {
        let fields = self.fields.ok_or(FieldCheckError::MissingFields)?;
        let mut registry = RuleRegistry::with_overrides(self.rules);
        if let Some(message) = self.default_message {
            registry.set_default_message(message);
        }
        tracing::debug!(
            fields = fields.len(),
            rules = registry.len(),
            "validator configured"
        );
        Ok(Validator::from_parts(fields, registry))
    }
}
