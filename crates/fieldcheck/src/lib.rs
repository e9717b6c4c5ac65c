//! # fieldcheck
//!
//! Declarative field validation: named fields carry rule lists, rules are
//! evaluated in order with first-failure short-circuit, and a [`Validator`]
//! keeps per-field validity state for a host UI to render.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let mut validator = Validator::builder()
//!     .field("username", FieldSpec::new("required,alpha_num_dash"))
//!     .field("email", FieldSpec::new("required,email").with_message("Enter a valid email."))
//!     .build()
//!     .unwrap();
//!
//! let mut form = JsonScope::new(json!({ "username": "ada-l", "email": "ada" }));
//! assert!(validator.validate_all(&mut form, None).unwrap());
//! assert_eq!(
//!     validator.check("email", form.state(), None).unwrap(),
//!     "Enter a valid email."
//! );
//! ```
//!
//! ## Rules
//!
//! A field's rules are a [`RuleSpec`]: a comma-separated list of names
//! (`"required,email"`), an explicit list of [`RuleRef`]s mixing names and
//! inline predicates, or a single inline [`Rule`]. Predicates return anything
//! convertible into a [`RuleOutcome`]: `true` passes, `false` fails with the
//! fallback message chain, a string fails with that string as the message.
//!
//! Built-in rules: `required`, `numeric`, `email`, `url`, `alpha`,
//! `alpha_space`, `alpha_num`, `alpha_num_space`, `alpha_num_dash`,
//! `alpha_num_dash_space`, `array`, `boolean`, `accepted`.

pub mod builtin;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod field;
pub mod locate;
pub mod normalize;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod validator;

pub use config::{ValidatorBuilder, ValidatorConfig};
pub use engine::{Verdict, run_rules};
pub use error::{FieldCheckError, Result};
pub use evaluate::{evaluate, resolve_message};
pub use field::{ErrorVisibility, FieldBinding, FieldSpec, FieldState, ValidationResult};
pub use locate::locate;
pub use normalize::{RuleSpec, normalize};
pub use registry::RuleRegistry;
pub use rule::{Predicate, Rule, RuleOutcome, RuleRef};
pub use validator::{JsonScope, Scope, Validator};
