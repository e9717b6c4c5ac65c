//! Built-in rules.
//!
//! Character-class rules test the value's text form: strings as-is, numbers
//! and booleans through `to_string`, `null` as empty text. Floats print the
//! way `serde_json` prints them, so `1e20` keeps its exponent and is not
//! `numeric`. Letter classes are ASCII only. Arrays and objects
//! have no text form and fail every pattern rule. Empty text passes all
//! pattern rules so that optional fields stay valid until `required` says
//! otherwise.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::rule::Rule;

/// Message used when neither the predicate, the field, nor the rule has one.
pub const DEFAULT_MESSAGE: &str = "Field is invalid";

/// Name of the registry entry holding the fallback message.
pub const DEFAULT_KEY: &str = "default";

// ============================================================================
// PATTERNS
// ============================================================================

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]*$").unwrap());

static ALPHA_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]*$").unwrap());

static ALPHA_NUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").unwrap());

static ALPHA_NUM_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s]*$").unwrap());

static ALPHA_NUM_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

static ALPHA_NUM_DASH_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\s-]*$").unwrap());

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+\.?[0-9]*)?$").unwrap());

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+,/=?^`{|}~-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([Hh][Tt][Tt][Pp][Ss]?|[Ff][Tt][Pp])://(-\.)?([^\s/?.#-]+\.?)+(/\S*)?$")
        .unwrap()
});

// ============================================================================
// HELPERS
// ============================================================================

/// Text form of a value for pattern rules.
pub(crate) fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null => Some(Cow::Borrowed("")),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Null or the empty string.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn matches(pattern: &Regex, value: &Value) -> bool {
    text_of(value).is_some_and(|text| pattern.is_match(&text))
}

fn pattern_rule(pattern: &'static LazyLock<Regex>, message: &str) -> Rule {
    Rule::new(move |value: &Value| matches(pattern, value)).with_message(message)
}

// ============================================================================
// TABLE
// ============================================================================

/// Every built-in rule with its default message, in a stable order.
pub fn rules() -> Vec<(&'static str, Rule)> {
    vec![
        (
            "accepted",
            Rule::new(|value: &Value| *value == Value::Bool(true))
                .with_message("Field must be accepted.")
                .required(),
        ),
        ("alpha", pattern_rule(&ALPHA, "Field may only contain letters.")),
        (
            "alpha_space",
            pattern_rule(&ALPHA_SPACE, "Field may only contain letters and spaces."),
        ),
        (
            "alpha_num",
            pattern_rule(&ALPHA_NUM, "Field may only contain letters and numbers."),
        ),
        (
            "alpha_num_space",
            pattern_rule(
                &ALPHA_NUM_SPACE,
                "Field may only contain letters, numbers, and spaces.",
            ),
        ),
        (
            "alpha_num_dash",
            pattern_rule(
                &ALPHA_NUM_DASH,
                "Field may only contain letters, numbers, and dashes.",
            ),
        ),
        (
            "alpha_num_dash_space",
            pattern_rule(
                &ALPHA_NUM_DASH_SPACE,
                "Field may only contain letters, numbers, dashes, and spaces.",
            ),
        ),
        (
            "array",
            Rule::new(Value::is_array).with_message("Field must be an array."),
        ),
        (
            "boolean",
            Rule::new(Value::is_boolean).with_message("Field must be a boolean."),
        ),
        (
            "email",
            pattern_rule(&EMAIL, "Field must be a valid email address."),
        ),
        ("numeric", pattern_rule(&NUMERIC, "Field must be a number.")),
        (
            "required",
            Rule::new(|value: &Value| !is_blank(value)).with_message("Field is required."),
        ),
        ("url", pattern_rule(&URL, "Field must be a url.")),
    ]
}
