//! Rule registry
//!
//! Maps rule names to [`Rule`]s. Every validator owns its own registry: the
//! built-in table merged with the caller's rules, built once at construction.
//! Caller rules always win over built-ins of the same name, and the built-in
//! table itself is never mutated, so two validators with different overrides
//! cannot interfere.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::builtin::{self, DEFAULT_KEY, DEFAULT_MESSAGE};
use crate::error::{FieldCheckError, Result};
use crate::rule::{Rule, RuleRef};

static BUILTINS: LazyLock<RuleRegistry> = LazyLock::new(|| {
    let mut registry = RuleRegistry::empty();
    registry.extend(builtin::rules());
    registry
});

/// Named rule table with a fallback message.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Rule, RuleRegistry};
/// use serde_json::Value;
///
/// let registry = RuleRegistry::with_overrides([(
///     "required",
///     Rule::new(|v: &Value| !v.is_null()).with_message("Please fill this in."),
/// )]);
///
/// assert_eq!(registry.get("required").and_then(Rule::message), Some("Please fill this in."));
/// assert_eq!(
///     RuleRegistry::builtin().get("required").and_then(Rule::message),
///     Some("Field is required."),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: IndexMap<String, Rule>,
    default_message: String,
}

impl RuleRegistry {
    /// A registry without any rules and the stock fallback message.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
            default_message: DEFAULT_MESSAGE.to_owned(),
        }
    }

    /// A fresh copy of the built-in rules.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTINS.clone()
    }

    /// The built-in rules merged with `overrides`; later entries win.
    pub fn with_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<String>,
    {
        let mut registry = Self::builtin();
        registry.extend(overrides);
        registry
    }

    /// Registers a rule, replacing any previous rule of the same name.
    ///
    /// The name `default` is reserved for the fallback message: registering
    /// it replaces the fallback with the rule's message (if it has one) and
    /// does not make `default` resolvable as a rule.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        let name = name.into();
        if name == DEFAULT_KEY {
            if let Some(message) = rule.message() {
                self.default_message = message.to_owned();
            }
            return;
        }
        if self.rules.insert(name.clone(), rule).is_some() {
            tracing::trace!(rule = %name, "rule overridden");
        }
    }

    /// Registers every rule from the iterator, in order.
    pub fn extend<I, K>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<String>,
    {
        for (name, rule) in rules {
            self.register(name, rule);
        }
    }

    /// Replaces the fallback message.
    pub fn set_default_message(&mut self, message: impl Into<String>) {
        self.default_message = message.into();
    }

    /// Resolves a rule reference.
    ///
    /// Named references are looked up in the table; inline rules resolve to
    /// themselves.
    pub fn resolve<'a>(&'a self, rule: &'a RuleRef) -> Result<&'a Rule> {
        match rule {
            RuleRef::Named(name) => self
                .rules
                .get(name)
                .ok_or_else(|| FieldCheckError::unknown_rule(name.as_str())),
            RuleRef::Inline(rule) => Ok(rule),
            RuleRef::Unsupported(found) => Err(FieldCheckError::UnsupportedRuleType {
                found: found.to_string(),
            }),
        }
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Returns true if a rule with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The fallback message used when nothing more specific is available.
    #[must_use]
    pub fn default_message(&self) -> &str {
        &self.default_message
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<K: Into<String>> FromIterator<(K, Rule)> for RuleRegistry {
    /// Built-ins merged with the collected rules.
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        Self::with_overrides(iter)
    }
}
