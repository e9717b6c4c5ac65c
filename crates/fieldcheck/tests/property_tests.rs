//! Property-based tests for fieldcheck.

use fieldcheck::prelude::*;
use fieldcheck::{locate, normalize};
use proptest::prelude::*;
use serde_json::{Value, json};

fn validator(rules: &str) -> Validator {
    Validator::builder()
        .field("field", FieldSpec::new(rules))
        .build()
        .unwrap()
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validate_field_idempotent(s in ".{0,20}") {
        let mut v = validator("required,alpha_num_dash");
        let mut scope = JsonScope::default();
        let first = v.validate_field(&mut scope, "field", &json!(s), None).unwrap();
        let second = v.validate_field(&mut scope, "field", &json!(s), None).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(v.states().count(), 1);
    }

    #[test]
    fn check_never_changes_visibility(s in ".{0,20}") {
        let mut v = validator("email");
        let state = json!({ "field": s });
        v.check("field", &state, None).unwrap();
        prop_assert!(!v.field_state("field").unwrap().show_error);
        prop_assert!(!v.is_invalid("field"));
    }
}

// ============================================================================
// BUILT-IN PATTERNS
// ============================================================================

proptest! {
    #[test]
    fn alpha_num_accepts_ascii_alphanumerics(s in "[a-zA-Z0-9]{0,30}") {
        let mut v = validator("alpha_num");
        let mut scope = JsonScope::default();
        prop_assert!(!v.validate_field(&mut scope, "field", &json!(s), None).unwrap().invalid);
    }

    #[test]
    fn alpha_num_rejects_any_space(a in "[a-z0-9]{1,10}", b in "[a-z0-9]{1,10}") {
        let mut v = validator("alpha_num");
        let mut scope = JsonScope::default();
        let value = json!(format!("{a} {b}"));
        prop_assert!(v.validate_field(&mut scope, "field", &value, None).unwrap().invalid);
    }

    #[test]
    fn numeric_accepts_decimals(int in 0u32..100_000, frac in 0u32..1000) {
        let mut v = validator("numeric");
        let mut scope = JsonScope::default();
        let value = json!(format!("{int}.{frac}"));
        prop_assert!(!v.validate_field(&mut scope, "field", &value, None).unwrap().invalid);
    }
}

// ============================================================================
// AGGREGATE: result == OR of per-field invalidity
// ============================================================================

proptest! {
    #[test]
    fn validate_all_is_or_of_fields(
        values in proptest::collection::vec(prop_oneof![Just(""), Just("ok")], 1..6)
    ) {
        let mut builder = Validator::builder();
        let mut state = serde_json::Map::new();
        for (i, value) in values.iter().enumerate() {
            builder = builder.field(format!("f{i}"), FieldSpec::new("required"));
            state.insert(format!("f{i}"), json!(value));
        }
        let mut v = builder.build().unwrap();
        let mut scope = JsonScope::new(Value::Object(state));

        let has_error = v.validate_all(&mut scope, None).unwrap();
        prop_assert_eq!(has_error, values.contains(&""));
        prop_assert_eq!(scope.refreshes(), 1);
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(v.is_invalid(&format!("f{i}")), value.is_empty());
        }
    }
}

// ============================================================================
// NORMALIZATION AND LOOKUP
// ============================================================================

proptest! {
    #[test]
    fn names_normalize_to_segments(names in proptest::collection::vec("[a-z_]{1,12}", 1..6)) {
        let spec = RuleSpec::from(names.join(" , "));
        let refs = normalize(&spec).unwrap();
        let resolved: Vec<&str> = refs.iter().filter_map(RuleRef::name).collect();
        prop_assert_eq!(resolved, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn nested_lookup_finds_leaf(a in "[a-z]{1,8}", b in "[a-z]{1,8}", n in any::<i64>()) {
        let mut inner = serde_json::Map::new();
        inner.insert(b.clone(), json!(n));
        let mut outer = serde_json::Map::new();
        outer.insert(a.clone(), Value::Object(inner));
        let state = Value::Object(outer);
        let path = format!("{a}.{b}");
        prop_assert_eq!(locate(&path, &state).unwrap(), &json!(n));
    }
}
