//! Dotted-path lookup into the host state.

use serde_json::Value;

use crate::error::{FieldCheckError, Result};

static UNDEFINED: Value = Value::Null;

/// Resolves `path` inside `source`.
///
/// A single-segment path is a plain property lookup; a missing property
/// reads as `null`. A dotted path walks nested objects and fails with
/// [`FieldCheckError::FieldPath`] as soon as a segment is missing or the
/// value being walked is not an object. There is no array-index syntax.
///
/// # Examples
///
/// ```
/// use fieldcheck::locate;
/// use serde_json::json;
///
/// let state = json!({ "a": { "b": { "c": 5 } } });
/// assert_eq!(locate("a.b.c", &state).unwrap(), &json!(5));
/// assert!(locate("a.x", &state).is_err());
/// assert!(locate("missing", &state).unwrap().is_null());
/// ```
pub fn locate<'a>(path: &str, source: &'a Value) -> Result<&'a Value> {
    if !path.contains('.') {
        return Ok(source.get(path).unwrap_or(&UNDEFINED));
    }
    path.split('.').try_fold(source, |current, segment| {
        current
            .as_object()
            .and_then(|object| object.get(segment))
            .ok_or_else(|| FieldCheckError::field_path(path, segment))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_segment() {
        let state = json!({ "email": "a@b.co" });
        assert_eq!(locate("email", &state).unwrap(), &json!("a@b.co"));
        assert_eq!(locate("name", &state).unwrap(), &Value::Null);
    }

    #[test]
    fn test_nested_lookup() {
        let state = json!({ "a": { "b": { "c": 5 } } });
        assert_eq!(locate("a.b.c", &state).unwrap(), &json!(5));
        assert_eq!(locate("a.b", &state).unwrap(), &json!({ "c": 5 }));
    }

    #[test]
    fn test_missing_segment() {
        let state = json!({ "a": { "b": 1 } });
        let err = locate("a.x", &state).unwrap_err();
        assert!(matches!(
            err,
            FieldCheckError::FieldPath { ref path, ref segment } if path == "a.x" && segment == "x"
        ));
    }

    #[test]
    fn test_walk_through_scalar_fails() {
        let state = json!({ "a": { "b": 1 } });
        assert!(locate("a.b.c", &state).is_err());
    }

    #[test]
    fn test_explicit_null_leaf_is_defined() {
        let state = json!({ "user": { "nickname": null } });
        assert_eq!(locate("user.nickname", &state).unwrap(), &Value::Null);
    }

    #[test]
    fn test_no_array_indexing() {
        let state = json!({ "tags": ["x", "y"] });
        assert!(locate("tags.0", &state).is_err());
    }
}
