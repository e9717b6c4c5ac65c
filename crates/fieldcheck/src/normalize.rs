//! Rule specifications and their normalization into ordered rule lists.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{FieldCheckError, Result};
use crate::rule::{Rule, RuleOutcome, RuleRef};

/// The rules attached to a field, in any of the accepted shapes.
///
/// From JSON, a string becomes [`RuleSpec::Names`], an array becomes
/// [`RuleSpec::List`] and anything else is kept as [`RuleSpec::Invalid`]
/// so the error surfaces when the field is validated.
///
/// # Examples
///
/// ```
/// use fieldcheck::{RuleRef, RuleSpec, normalize};
/// use serde_json::Value;
///
/// let names = normalize(&RuleSpec::from("required, email")).unwrap();
/// assert_eq!(names[1].name(), Some("email"));
///
/// let mixed = RuleSpec::from(vec![
///     RuleRef::from("required"),
///     RuleRef::inline(|v: &Value| v.as_str().is_some_and(|s| s.len() > 3)),
/// ]);
/// assert_eq!(normalize(&mixed).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum RuleSpec {
    /// A single inline predicate.
    Predicate(Rule),
    /// An explicit list of names and/or predicates.
    List(Vec<RuleRef>),
    /// Comma-separated rule names, e.g. `"required,email"`.
    Names(String),
    /// A declarative value of an unsupported shape.
    Invalid(Value),
}

impl RuleSpec {
    /// Wraps a predicate as a one-rule specification.
    pub fn predicate<F, R>(predicate: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<RuleOutcome>,
    {
        Self::Predicate(Rule::new(predicate))
    }
}

impl From<&str> for RuleSpec {
    fn from(names: &str) -> Self {
        Self::Names(names.to_owned())
    }
}

impl From<String> for RuleSpec {
    fn from(names: String) -> Self {
        Self::Names(names)
    }
}

impl From<Rule> for RuleSpec {
    fn from(rule: Rule) -> Self {
        Self::Predicate(rule)
    }
}

impl From<Vec<RuleRef>> for RuleSpec {
    fn from(rules: Vec<RuleRef>) -> Self {
        Self::List(rules)
    }
}

impl<const N: usize> From<[&str; N]> for RuleSpec {
    fn from(names: [&str; N]) -> Self {
        Self::List(names.into_iter().map(RuleRef::from).collect())
    }
}

impl From<Value> for RuleSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::String(names) => Self::Names(names),
            Value::Array(items) => Self::List(items.into_iter().map(RuleRef::from).collect()),
            other => Self::Invalid(other),
        }
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Turns a rule specification into the ordered list of rules to evaluate.
///
/// Name strings are split on `,` and each segment is trimmed. Lists are kept
/// as they are, including elements that will fail to resolve later.
pub fn normalize(spec: &RuleSpec) -> Result<Vec<RuleRef>> {
    match spec {
        RuleSpec::Predicate(rule) => Ok(vec![RuleRef::Inline(rule.clone())]),
        RuleSpec::List(rules) => Ok(rules.clone()),
        RuleSpec::Names(names) => Ok(names
            .split(',')
            .map(|name| RuleRef::Named(name.trim().to_owned()))
            .collect()),
        RuleSpec::Invalid(found) => Err(FieldCheckError::InvalidRuleSpec {
            found: found.to_string(),
        }),
    }
}
