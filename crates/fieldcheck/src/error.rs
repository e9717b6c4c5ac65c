//! Error types for rule configuration and field lookup.
//!
//! Every variant describes a misconfiguration (a rule name that was never
//! registered, a field path that does not exist in the host state, ...).
//! A *failed validation* is not an error: it is reported through
//! [`ValidationResult`](crate::ValidationResult).

/// Errors raised while configuring or running a [`Validator`](crate::Validator).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FieldCheckError {
    /// The rule specification has a shape that cannot be normalized.
    #[error("invalid rule specification: expected a predicate, a list or a comma-separated string, found {found}")]
    InvalidRuleSpec {
        /// JSON rendering of the rejected specification.
        found: String,
    },

    /// A named rule is absent from the merged registry.
    #[error("rule '{name}' is not registered")]
    UnknownRule {
        /// The unresolved rule name.
        name: String,
    },

    /// A rule list element is neither a rule name nor a predicate.
    #[error("unsupported rule reference: {found}")]
    UnsupportedRuleType {
        /// JSON rendering of the rejected element.
        found: String,
    },

    /// Neither the call site nor the field specification supplied rules.
    #[error("no rules configured for field '{field}'")]
    MissingRules {
        /// The field being validated.
        field: String,
    },

    /// Dotted-path traversal hit a segment that does not exist.
    #[error("path '{path}' does not exist in state: segment '{segment}' is undefined")]
    FieldPath {
        /// The full dotted path.
        path: String,
        /// The first segment that could not be resolved.
        segment: String,
    },

    /// The construction input carried no field specifications.
    #[error("field specifications are required to build a validator")]
    MissingFields,

    /// A field name that is not part of the configured fields.
    #[error("field '{field}' is not configured")]
    UnknownField {
        /// The unknown field name.
        field: String,
    },

    /// The JSON construction input could not be parsed.
    #[error("invalid validator config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl FieldCheckError {
    /// Creates an [`UnknownRule`](Self::UnknownRule) error.
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Creates a [`MissingRules`](Self::MissingRules) error.
    pub fn missing_rules(field: impl Into<String>) -> Self {
        Self::MissingRules {
            field: field.into(),
        }
    }

    /// Creates an [`UnknownField`](Self::UnknownField) error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a [`FieldPath`](Self::FieldPath) error.
    pub fn field_path(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::FieldPath {
            path: path.into(),
            segment: segment.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = FieldCheckError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_rule_display() {
        let error = FieldCheckError::unknown_rule("zipcode");
        assert_eq!(error.to_string(), "rule 'zipcode' is not registered");
    }

    #[test]
    fn test_field_path_display() {
        let error = FieldCheckError::field_path("user.address.zip", "address");
        assert_eq!(
            error.to_string(),
            "path 'user.address.zip' does not exist in state: segment 'address' is undefined"
        );
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FieldCheckError::from(parse);
        assert!(matches!(error, FieldCheckError::InvalidConfig(_)));
        assert!(error.to_string().starts_with("invalid validator config:"));
    }
}
