//! A signup form validated the way a UI component would drive it.
//!
//! Run with `RUST_LOG=fieldcheck=debug` to see the validator's logs.

use fieldcheck::prelude::*;
use serde_json::{Value, json};

fn main() -> Result<(), FieldCheckError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ValidatorConfig::from_json(
        r#"{
            "fields": {
                "username": { "rules": "required,alpha_num_dash,not_reserved" },
                "email":    { "rules": ["required", "email"], "field": "contact.email" },
                "age":      { "rules": "numeric", "message": "Age must be a whole number." },
                "terms":    { "rules": "accepted" }
            }
        }"#,
    )?;

    let not_reserved = Rule::new(|value: &Value| match value.as_str() {
        Some(name @ ("admin" | "root")) => Some(format!("'{name}' is reserved.")),
        _ => None,
    });
    let mut validator = Validator::from_config(config, [("not_reserved", not_reserved)])?;

    let mut form = JsonScope::new(json!({
        "username": "admin",
        "contact": { "email": "ada@example" },
        "age": "thirty",
        "terms": false
    }));

    // Typing into a single input only reports that input.
    let typed = validator.validate_field(&mut form, "username", &json!("ada_l"), None)?;
    println!("username while typing: {typed:?}");

    // Submitting checks the whole form and refreshes once.
    let has_errors = validator.validate_all(&mut form, None)?;
    println!("submit has errors: {has_errors} (refreshes: {})", form.refreshes());

    let state = form.state().clone();
    for name in ["username", "email", "age", "terms"] {
        let message = validator.check(name, &state, None)?;
        println!("{name:>10}: {}", if message.is_empty() { "ok" } else { message.as_str() });
    }

    Ok(())
}
