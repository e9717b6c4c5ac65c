//! Field specifications and per-field validity state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::RuleSpec;

// ============================================================================
// FIELD SPECIFICATION
// ============================================================================

/// Configuration of one named field.
///
/// Deserializes from the camelCase keys used by UI bindings:
///
/// ```
/// use fieldcheck::FieldSpec;
///
/// let spec: FieldSpec = serde_json::from_str(r#"{
///     "rules": "required,email",
///     "message": "Enter a valid email.",
///     "field": "account.email",
///     "ref": "emailInput"
/// }"#).unwrap();
///
/// assert_eq!(spec.path_or("email"), "account.email");
/// assert_eq!(spec.binding.ref_name.as_deref(), Some("emailInput"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    /// Rules evaluated for this field, in order.
    pub rules: Option<RuleSpec>,
    /// Message used for every failing rule of this field.
    pub message: Option<String>,
    /// Dotted path of the value in the host state; defaults to the field name.
    pub field: Option<String>,
    /// UI-binding metadata, carried through untouched.
    #[serde(flatten)]
    pub binding: FieldBinding,
}

impl FieldSpec {
    /// A field validated by `rules`.
    pub fn new(rules: impl Into<RuleSpec>) -> Self {
        Self {
            rules: Some(rules.into()),
            ..Self::default()
        }
    }

    /// Sets the field-level message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Reads the value from `path` instead of the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.field = Some(path.into());
        self
    }

    /// Attaches UI-binding metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_binding(mut self, binding: FieldBinding) -> Self {
        self.binding = binding;
        self
    }

    /// The value path, falling back to `name`.
    #[must_use]
    pub fn path_or<'a>(&'a self, name: &'a str) -> &'a str {
        self.field.as_deref().unwrap_or(name)
    }
}

/// Opaque UI-binding metadata.
///
/// The engine never interprets these; a binding layer maps its own node
/// identities to field names with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldBinding {
    /// Reference name of the input element.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    /// Selector applied to the referenced element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_selector: Option<Value>,
    /// Selector used to find the element in the rendered tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dom_selector: Option<Value>,
}

// ============================================================================
// FIELD STATE
// ============================================================================

/// Stored validity of one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    /// Result of the last evaluation.
    pub invalid: bool,
    /// Whether the error is surfaced to the user.
    pub show_error: bool,
}

impl FieldState {
    /// True when the field failed and its error is shown.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid && self.show_error
    }
}

/// How a commit treats the `show_error` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorVisibility {
    /// Leave the stored flag untouched.
    #[default]
    Keep,
    /// Show the error from now on.
    Show,
    /// Show the error exactly when the field is invalid.
    Track,
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of validating one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether a rule failed.
    pub invalid: bool,
    /// The error message; empty unless the field is invalid and shown.
    pub message: String,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub fn valid() -> Self {
        Self::default()
    }
}
