//! Prelude module for convenient imports.
//!
//! `use fieldcheck::prelude::*;` brings in the validator, its configuration
//! types and the rule model.

pub use crate::config::{ValidatorBuilder, ValidatorConfig};
pub use crate::error::FieldCheckError;
pub use crate::field::{FieldBinding, FieldSpec, FieldState, ValidationResult};
pub use crate::normalize::RuleSpec;
pub use crate::registry::RuleRegistry;
pub use crate::rule::{Rule, RuleOutcome, RuleRef};
pub use crate::validator::{JsonScope, Scope, Validator};
