//! Field validity engine
//!
//! Validating a field happens in two steps. [`run_rules`] evaluates the
//! field's rules in order and stops at the first failure, producing a
//! [`Verdict`] without touching any state. [`FieldState::commit`] then
//! persists the verdict. Because every error is raised in the first step, a
//! field whose validation fails with an error keeps its previous state.

use serde_json::Value;

use crate::error::Result;
use crate::evaluate::{evaluate, resolve_message};
use crate::field::{ErrorVisibility, FieldState, ValidationResult};
use crate::normalize::{RuleSpec, normalize};
use crate::registry::RuleRegistry;

/// Pure outcome of running one field's rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Whether a rule failed.
    pub invalid: bool,
    /// Message of the first failing rule.
    pub message: Option<String>,
    /// Name of the first failing rule, `None` for inline rules.
    pub failed_rule: Option<String>,
}

impl Verdict {
    /// A passing verdict.
    #[must_use]
    pub fn valid() -> Self {
        Self::default()
    }
}

/// Evaluates `rules` against `value`, short-circuiting at the first failure.
///
/// Rules after the failing one are never invoked, so at most one message is
/// derived per pass.
pub fn run_rules(
    registry: &RuleRegistry,
    value: &Value,
    rules: &RuleSpec,
    field_message: Option<&str>,
) -> Result<Verdict> {
    for rule in normalize(rules)? {
        let outcome = evaluate(registry, &rule, value)?;
        if outcome.passed() {
            continue;
        }
        return Ok(Verdict {
            invalid: true,
            message: Some(resolve_message(registry, &rule, &outcome, field_message)),
            failed_rule: rule.name().map(str::to_owned),
        });
    }
    Ok(Verdict::valid())
}

impl FieldState {
    /// Persists `verdict` and reports the result under the new visibility.
    pub fn commit(&mut self, verdict: &Verdict, visibility: ErrorVisibility) -> ValidationResult {
        self.invalid = verdict.invalid;
        match visibility {
            ErrorVisibility::Keep => {}
            ErrorVisibility::Show => self.show_error = true,
            ErrorVisibility::Track => self.show_error = verdict.invalid,
        }
        self.result_for(verdict)
    }

    /// The result `verdict` yields under the current visibility.
    #[must_use]
    pub fn result_for(&self, verdict: &Verdict) -> ValidationResult {
        let message = match &verdict.message {
            Some(message) if verdict.invalid && self.show_error => message.clone(),
            _ => String::new(),
        };
        ValidationResult {
            invalid: verdict.invalid,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, RuleRef};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>, message: &'static str) -> RuleRef {
        let counter = Arc::clone(counter);
        RuleRef::from(
            Rule::new(move |_: &Value| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            })
            .with_message(message),
        )
    }

    #[test]
    fn test_short_circuit() {
        let registry = RuleRegistry::builtin();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let rules = RuleSpec::from(vec![counting(&first, "A"), counting(&second, "B")]);

        let verdict = run_rules(&registry, &json!("x"), &rules, None).unwrap();
        assert_eq!(verdict.message.as_deref(), Some("A"));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_pass() {
        let registry = RuleRegistry::builtin();
        let rules = RuleSpec::from("required,email");
        let verdict = run_rules(&registry, &json!("a@b.co"), &rules, None).unwrap();
        assert_eq!(verdict, Verdict::valid());
    }

    #[test]
    fn test_failed_rule_name() {
        let registry = RuleRegistry::builtin();
        let verdict = run_rules(&registry, &json!("nope"), &"required,email".into(), None).unwrap();
        assert!(verdict.invalid);
        assert_eq!(verdict.failed_rule.as_deref(), Some("email"));
        assert_eq!(
            verdict.message.as_deref(),
            Some("Field must be a valid email address.")
        );
    }

    #[test]
    fn test_field_message_overrides_rule_default() {
        let registry = RuleRegistry::builtin();
        let verdict = run_rules(&registry, &json!(""), &"required".into(), Some("Name?")).unwrap();
        assert_eq!(verdict.message.as_deref(), Some("Name?"));
    }

    #[test]
    fn test_unknown_rule_after_failure_is_not_reached() {
        let registry = RuleRegistry::builtin();
        let verdict = run_rules(&registry, &json!(""), &"required,bogus".into(), None).unwrap();
        assert!(verdict.invalid);
    }

    #[test]
    fn test_commit_visibility() {
        let invalid = Verdict {
            invalid: true,
            message: Some("bad".into()),
            failed_rule: None,
        };

        let mut state = FieldState::default();
        let result = state.commit(&invalid, ErrorVisibility::Keep);
        assert_eq!(result, ValidationResult { invalid: true, message: String::new() });
        assert!(!state.show_error);

        let result = state.commit(&invalid, ErrorVisibility::Show);
        assert_eq!(result.message, "bad");
        assert!(state.is_invalid());

        let result = state.commit(&Verdict::valid(), ErrorVisibility::Track);
        assert_eq!(result, ValidationResult::valid());
        assert!(!state.show_error);
    }

    #[test]
    fn test_result_for_follows_stored_flag() {
        let verdict = Verdict {
            invalid: true,
            message: Some("bad".into()),
            failed_rule: None,
        };
        let hidden = FieldState::default();
        assert_eq!(hidden.result_for(&verdict).message, "");
        let shown = FieldState { invalid: true, show_error: true };
        assert_eq!(shown.result_for(&verdict).message, "bad");
    }
}
