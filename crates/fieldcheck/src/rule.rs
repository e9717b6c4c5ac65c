//! Rules and rule references.
//!
//! A [`Rule`] is a pure predicate over a single [`Value`] plus an optional
//! default message. Rules are referenced from a field either by registered
//! name or inline, see [`RuleRef`].

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Shared predicate function.
pub type Predicate = Arc<dyn Fn(&Value) -> RuleOutcome + Send + Sync>;

// ============================================================================
// RULE OUTCOME
// ============================================================================

/// Result of invoking a rule predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule; the message comes from the fallback chain.
    Fail,
    /// The value violates the rule and the predicate supplied the message.
    FailWith(String),
}

impl RuleOutcome {
    /// Returns true for [`RuleOutcome::Pass`].
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The predicate-supplied message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::FailWith(message) => Some(message),
            _ => None,
        }
    }

    /// Interprets a loosely typed predicate result.
    ///
    /// Only `true` passes. A non-empty string fails with that string as the
    /// message; every other value (`false`, `0`, `""`, `null`, ...) is a bare
    /// failure.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(true) => Self::Pass,
            Value::String(message) if !message.is_empty() => Self::FailWith(message.clone()),
            _ => Self::Fail,
        }
    }
}

impl From<bool> for RuleOutcome {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }
}

impl From<String> for RuleOutcome {
    fn from(message: String) -> Self {
        if message.is_empty() {
            Self::Fail
        } else {
            Self::FailWith(message)
        }
    }
}

impl From<&str> for RuleOutcome {
    fn from(message: &str) -> Self {
        Self::from(message.to_owned())
    }
}

/// `None` passes, `Some(message)` fails with the message.
impl From<Option<String>> for RuleOutcome {
    fn from(message: Option<String>) -> Self {
        message.map_or(Self::Pass, Self::from)
    }
}

impl From<Value> for RuleOutcome {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A named or anonymous predicate with an optional default message.
///
/// Rules are immutable once built.
///
/// # Examples
///
/// ```
/// use fieldcheck::Rule;
/// use serde_json::json;
///
/// let even = Rule::new(|v| v.as_i64().is_some_and(|n| n % 2 == 0))
///     .with_message("Field must be even.");
///
/// assert!(even.check(&json!(4)).passed());
/// assert!(!even.check(&json!(3)).passed());
/// assert_eq!(even.message(), Some("Field must be even."));
/// ```
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: Option<String>,
    required: bool,
}

impl Rule {
    /// Creates a rule from a predicate returning anything convertible into
    /// a [`RuleOutcome`] (`bool`, `String`, `&str`, `Option<String>`, `Value`).
    pub fn new<F, R>(predicate: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<RuleOutcome>,
    {
        Self {
            predicate: Arc::new(move |value: &Value| -> RuleOutcome { predicate(value).into() }),
            message: None,
            required: false,
        }
    }

    /// Creates a rule from an already shared predicate.
    pub fn from_predicate(predicate: Predicate) -> Self {
        Self {
            predicate,
            message: None,
            required: false,
        }
    }

    /// Sets the default failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Flags the rule as a presence requirement. Metadata only.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Invokes the predicate.
    pub fn check(&self, value: &Value) -> RuleOutcome {
        (self.predicate)(value)
    }

    /// The default failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the rule was flagged as a presence requirement.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The shared predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("predicate", &"<function>")
            .field("message", &self.message)
            .field("required", &self.required)
            .finish()
    }
}

// ============================================================================
// RULE REFERENCE
// ============================================================================

/// One entry of a field's rule list.
#[derive(Debug, Clone)]
pub enum RuleRef {
    /// A rule looked up by name in the registry.
    Named(String),
    /// An anonymous rule carried inline.
    Inline(Rule),
    /// A declarative list element that is neither a name nor a predicate.
    ///
    /// Only produced when a rule list is read from JSON; evaluating it fails
    /// with [`FieldCheckError::UnsupportedRuleType`](crate::FieldCheckError::UnsupportedRuleType).
    Unsupported(Value),
}

impl RuleRef {
    /// Wraps a predicate as an inline reference.
    pub fn inline<F, R>(predicate: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<RuleOutcome>,
    {
        Self::Inline(Rule::new(predicate))
    }

    /// The rule name for [`RuleRef::Named`].
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for RuleRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for RuleRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Rule> for RuleRef {
    fn from(rule: Rule) -> Self {
        Self::Inline(rule)
    }
}

impl From<Value> for RuleRef {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Self::Named(name),
            other => Self::Unsupported(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_from_bool() {
        assert_eq!(RuleOutcome::from(true), RuleOutcome::Pass);
        assert_eq!(RuleOutcome::from(false), RuleOutcome::Fail);
    }

    #[test]
    fn test_outcome_from_string() {
        assert_eq!(
            RuleOutcome::from("Too short"),
            RuleOutcome::FailWith("Too short".into())
        );
        assert_eq!(RuleOutcome::from(""), RuleOutcome::Fail);
        assert_eq!(RuleOutcome::from(None::<String>), RuleOutcome::Pass);
    }

    #[test]
    fn test_outcome_falsy_values_are_bare_failures() {
        assert_eq!(RuleOutcome::from_value(&json!(0)), RuleOutcome::Fail);
        assert_eq!(RuleOutcome::from_value(&json!("")), RuleOutcome::Fail);
        assert_eq!(RuleOutcome::from_value(&Value::Null), RuleOutcome::Fail);
        assert_eq!(RuleOutcome::from_value(&json!(false)), RuleOutcome::Fail);
    }

    #[test]
    fn test_outcome_truthy_non_true_values_fail() {
        assert_eq!(RuleOutcome::from_value(&json!(1)), RuleOutcome::Fail);
        assert_eq!(RuleOutcome::from_value(&json!({})), RuleOutcome::Fail);
        assert_eq!(RuleOutcome::from_value(&json!(true)), RuleOutcome::Pass);
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new(|v: &Value| v.is_string())
            .with_message("Must be text.")
            .required();
        assert_eq!(rule.message(), Some("Must be text."));
        assert!(rule.is_required());
        assert!(rule.check(&json!("x")).passed());
        assert_eq!(rule.check(&json!(1)), RuleOutcome::Fail);
    }

    #[test]
    fn test_rule_shares_predicate() {
        let rule = Rule::new(|v: &Value| v.is_number()).with_message("first");
        let twin = Rule::from_predicate(Arc::clone(rule.predicate())).with_message("second");
        assert!(Arc::ptr_eq(rule.predicate(), twin.predicate()));
        assert!(twin.check(&json!(3)).passed());
        assert_eq!(twin.check(&json!("3")), RuleOutcome::Fail);
        assert_eq!(twin.message(), Some("second"));
        assert!(!twin.is_required());
    }

    #[test]
    fn test_rule_ref_from_value() {
        assert_eq!(RuleRef::from(json!("email")).name(), Some("email"));
        assert!(matches!(RuleRef::from(json!(7)), RuleRef::Unsupported(_)));
    }

    #[test]
    fn test_rule_debug_hides_predicate() {
        let rule = Rule::new(|_: &Value| true);
        assert!(format!("{rule:?}").contains("<function>"));
    }
}
