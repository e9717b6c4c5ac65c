//! The validator facade and aggregate validation.
//!
//! A [`Validator`] owns the field specifications, the merged rule registry
//! and the per-field state map. The host component is reached through the
//! [`Scope`] trait: it supplies the state object values are read from and
//! receives a refresh notification after state changes.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::config::{ValidatorBuilder, ValidatorConfig};
use crate::engine::{Verdict, run_rules};
use crate::error::{FieldCheckError, Result};
use crate::field::{ErrorVisibility, FieldSpec, FieldState, ValidationResult};
use crate::locate::locate;
use crate::normalize::RuleSpec;
use crate::registry::RuleRegistry;
use crate::rule::Rule;

// ============================================================================
// HOST SCOPE
// ============================================================================

/// The host component a validator reports to.
pub trait Scope {
    /// The state object field values are read from.
    fn state(&self) -> &Value;

    /// Asks the host to re-render after validity changed.
    fn refresh(&mut self);
}

/// A [`Scope`] owning its state and counting refreshes.
///
/// ```
/// use fieldcheck::{JsonScope, Scope};
/// use serde_json::json;
///
/// let mut scope = JsonScope::new(json!({ "name": "" }));
/// scope.set("name", json!("Ada"));
/// scope.refresh();
/// assert_eq!(scope.state()["name"], "Ada");
/// assert_eq!(scope.refreshes(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonScope {
    state: Value,
    refreshes: usize,
}

impl JsonScope {
    /// Wraps a state object.
    #[must_use]
    pub fn new(state: Value) -> Self {
        Self {
            state,
            refreshes: 0,
        }
    }

    /// Sets a top-level property, turning the state into an object if needed.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        if !self.state.is_object() {
            self.state = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = &mut self.state {
            map.insert(key.into(), value);
        }
    }

    /// Mutable access to the whole state.
    pub fn state_mut(&mut self) -> &mut Value {
        &mut self.state
    }

    /// How many refreshes were requested so far.
    #[must_use]
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl Scope for JsonScope {
    fn state(&self) -> &Value {
        &self.state
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates a set of named fields and keeps their validity state.
///
/// # Examples
///
/// ```
/// use fieldcheck::{FieldSpec, JsonScope, Validator};
/// use serde_json::json;
///
/// let mut validator = Validator::builder()
///     .field("name", FieldSpec::new("required"))
///     .field("email", FieldSpec::new("required,email"))
///     .build()
///     .unwrap();
///
/// let mut scope = JsonScope::new(json!({ "name": "Ada", "email": "ada@" }));
/// let has_errors = validator.validate_all(&mut scope, None).unwrap();
///
/// assert!(has_errors);
/// assert!(validator.is_invalid("email"));
/// assert!(!validator.is_invalid("name"));
/// assert_eq!(scope.refreshes(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    fields: IndexMap<String, FieldSpec>,
    registry: RuleRegistry,
    states: HashMap<String, FieldState>,
}

impl Validator {
    /// Starts a [`ValidatorBuilder`].
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Builds a validator from a declarative config and custom rules.
    pub fn from_config<I, K>(config: ValidatorConfig, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<String>,
    {
        ValidatorBuilder::from_config(config).rules(rules).build()
    }

    pub(crate) fn from_parts(fields: IndexMap<String, FieldSpec>, registry: RuleRegistry) -> Self {
        Self {
            fields,
            registry,
            states: HashMap::new(),
        }
    }

    /// Validates one field against a value supplied by the caller.
    ///
    /// This is the interactive path: the field shows its own error exactly
    /// when it is invalid. `rules` replaces the field's configured rules for
    /// this call. The host is refreshed once.
    pub fn validate_field<S>(
        &mut self,
        scope: &mut S,
        name: &str,
        value: &Value,
        rules: Option<&RuleSpec>,
    ) -> Result<ValidationResult>
    where
        S: Scope + ?Sized,
    {
        let verdict = self.verdict(name, value, rules)?;
        let result = self.commit(name, &verdict, ErrorVisibility::Track);
        tracing::debug!(field = name, invalid = result.invalid, "field validated");
        scope.refresh();
        Ok(result)
    }

    /// Validates `names`, or every configured field, in one batch.
    ///
    /// Values are read from the scope's state through each field's path.
    /// Every target is evaluated before any state is committed, so an error
    /// leaves all states untouched and skips the refresh. On success every
    /// target shows its error and the host is refreshed exactly once.
    ///
    /// Returns `true` if at least one target is invalid.
    pub fn validate_all<S>(&mut self, scope: &mut S, names: Option<&[&str]>) -> Result<bool>
    where
        S: Scope + ?Sized,
    {
        let targets: Vec<String> = match names {
            Some(names) => names.iter().map(|name| (*name).to_owned()).collect(),
            None => self.fields.keys().cloned().collect(),
        };

        let verdicts = targets
            .iter()
            .map(|name| {
                let value = self.value_of(name, scope.state())?;
                self.verdict(name, value, None)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut has_error = false;
        for (name, verdict) in targets.iter().zip(&verdicts) {
            self.commit(name, verdict, ErrorVisibility::Show);
            has_error |= verdict.invalid;
        }

        tracing::debug!(fields = targets.len(), has_error, "form validated");
        scope.refresh();
        Ok(has_error)
    }

    /// Re-evaluates a field against `source` and returns its visible message.
    ///
    /// The stored `invalid` flag is updated; `show_error` is not. The message
    /// is empty unless the field is invalid and its error is already shown.
    pub fn check(
        &mut self,
        name: &str,
        source: &Value,
        rules: Option<&RuleSpec>,
    ) -> Result<String> {
        let value = self.value_of(name, source)?;
        let verdict = self.verdict(name, value, rules)?;
        Ok(self.commit(name, &verdict, ErrorVisibility::Keep).message)
    }

    /// True when the field is invalid and its error is shown.
    ///
    /// Unknown and never-validated fields read as valid.
    #[must_use]
    pub fn is_invalid(&self, name: &str) -> bool {
        self.states.get(name).is_some_and(FieldState::is_invalid)
    }

    /// Stored state of a field, once it has been evaluated.
    #[must_use]
    pub fn field_state(&self, name: &str) -> Option<&FieldState> {
        self.states.get(name)
    }

    /// Every stored field state.
    pub fn states(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.states.iter().map(|(name, state)| (name.as_str(), state))
    }

    /// The specification of a configured field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Configured field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The merged rule registry.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------------

    fn spec(&self, name: &str) -> Result<&FieldSpec> {
        self.fields
            .get(name)
            .ok_or_else(|| FieldCheckError::unknown_field(name))
    }

    fn value_of<'v>(&self, name: &str, source: &'v Value) -> Result<&'v Value> {
        let spec = self.spec(name)?;
        locate(spec.path_or(name), source)
    }

    fn verdict(&self, name: &str, value: &Value, rules: Option<&RuleSpec>) -> Result<Verdict> {
        let spec = self.spec(name)?;
        let rules = rules
            .or(spec.rules.as_ref())
            .ok_or_else(|| FieldCheckError::missing_rules(name))?;
        run_rules(&self.registry, value, rules, spec.message.as_deref())
    }

    fn commit(
        &mut self,
        name: &str,
        verdict: &Verdict,
        visibility: ErrorVisibility,
    ) -> ValidationResult {
        self.states
            .entry(name.to_owned())
            .or_default()
            .commit(verdict, visibility)
    }
}
