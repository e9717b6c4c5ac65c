//! Rule evaluation and failure message resolution.

use serde_json::Value;

use crate::error::Result;
use crate::registry::RuleRegistry;
use crate::rule::{Rule, RuleOutcome, RuleRef};

/// Resolves `rule` against `registry` and invokes it with `value`.
pub fn evaluate(registry: &RuleRegistry, rule: &RuleRef, value: &Value) -> Result<RuleOutcome> {
    let resolved = registry.resolve(rule)?;
    let outcome = resolved.check(value);
    tracing::trace!(rule = rule.name().unwrap_or("<inline>"), ?outcome, "rule evaluated");
    Ok(outcome)
}

/// Picks the message for a failed rule.
///
/// Priority: the message returned by the predicate, then the field-level
/// message, then the rule's own default, then the registry fallback.
pub fn resolve_message(
    registry: &RuleRegistry,
    rule: &RuleRef,
    outcome: &RuleOutcome,
    field_message: Option<&str>,
) -> String {
    if let Some(message) = outcome.message() {
        return message.to_owned();
    }
    if let Some(message) = field_message.filter(|m| !m.is_empty()) {
        return message.to_owned();
    }
    let rule_message = match rule {
        RuleRef::Named(name) => registry.get(name).and_then(Rule::message),
        RuleRef::Inline(rule) => rule.message(),
        RuleRef::Unsupported(_) => None,
    };
    rule_message
        .unwrap_or_else(|| registry.default_message())
        .to_owned()
}
