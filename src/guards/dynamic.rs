//! Guards over dynamically-typed payload values
//!
//! Values that arrive untyped (deserialized request bodies, config blobs) are
//! inspected as `serde_json::Value`. Runtime type checks compare against the
//! closed [`ValueKind`] tag enumeration, never against type-name strings.

use crate::domain::violations::{display_label, violation, GuardKind, GuardResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The runtime type tag of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// The tag of the given value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Convert to string for display; matches the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loose equality between dynamic values: integers and floats compare
/// numerically, and a numeric string compares against numbers by its parsed
/// value. Everything else requires identical kinds.
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(left), Some(right)) => left == right,
            _ => x == y,
        },
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match (n.as_f64(), s.trim().parse::<f64>()) {
                (Some(left), Ok(right)) => left == right,
                _ => false,
            }
        }
        _ => a == b,
    }
}

/// Render an operand for default messages: strings print raw, everything
/// else as its JSON form.
fn display_operand(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Fails when `value` loosely equals `forbidden`: numbers compare
/// numerically across integer and float forms, and numeric strings compare
/// against numbers by their parsed value.
///
/// # Examples
///
/// ```
/// use guard_against::guards;
/// use serde_json::json;
///
/// assert!(guards::loose_match(json!(1), &json!(1.0), None, None).is_err());
/// assert!(guards::loose_match(json!("1"), &json!(1), None, None).is_err());
/// assert_eq!(guards::loose_match(json!(2), &json!(1), None, None).unwrap(), json!(2));
/// ```
pub fn loose_match(
    value: Value,
    forbidden: &Value,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<Value> {
    if loosely_equal(&value, forbidden) {
        return Err(violation(GuardKind::Match, message, || {
            format!(
                "Required input {} cannot be {}.",
                display_label(label),
                display_operand(forbidden)
            )
        }));
    }

    Ok(value)
}

/// Fails when `value` strictly equals `forbidden`: identical kind and value.
/// The integer `1` does not strictly equal the float `1.0`.
pub fn strict_match(
    value: Value,
    forbidden: &Value,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<Value> {
    if ValueKind::of(&value) == ValueKind::of(forbidden) && value == *forbidden {
        return Err(violation(GuardKind::StrictMatch, message, || {
            format!(
                "Required input {} cannot be {}.",
                display_label(label),
                display_operand(forbidden)
            )
        }));
    }

    Ok(value)
}

/// Fails when the value's runtime tag equals `kind`.
pub fn of_kind(
    value: Value,
    kind: ValueKind,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<Value> {
    if ValueKind::of(&value) == kind {
        return Err(violation(GuardKind::Type, message, || {
            format!("Required input {} cannot be of type {kind}.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when the value's runtime tag differs from `kind`.
pub fn not_of_kind(
    value: Value,
    kind: ValueKind,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<Value> {
    if ValueKind::of(&value) != kind {
        return Err(violation(GuardKind::NotType, message, || {
            format!("Required input {} has to be of type {kind}.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when the value is an object carrying the named property.
pub fn has_property(
    value: Value,
    property: &str,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<Value> {
    if value.as_object().is_some_and(|fields| fields.contains_key(property)) {
        return Err(violation(GuardKind::HasProperty, message, || {
            format!(
                "Required input {} has an unwanted property {property}.",
                display_label(label)
            )
        }));
    }

    Ok(value)
}

/// Fails when the value is not an object, or is an object lacking the named
/// property.
pub fn has_no_property(
    value: Value,
    property: &str,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<Value> {
    if !value.as_object().is_some_and(|fields| fields.contains_key(property)) {
        return Err(violation(GuardKind::MissingProperty, message, || {
            format!("Required input {} is missing a property {property}.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when the value is empty under the per-category definition: null,
/// boolean false, numeric zero, zero-length string, zero-length array or
/// object. The string `"0"` is a non-empty string and passes.
pub fn empty_value(
    value: Value,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<Value> {
    let is_empty = match &value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    };

    if is_empty {
        return Err(violation(GuardKind::Empty, message, || {
            format!("Required input {} cannot be only empty.", display_label(label))
        }));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_value_kind_tags() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Bool);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
    }

    #[rstest]
    #[case(json!(1), json!(1), true)]
    #[case(json!(1), json!(1.0), true)]
    #[case(json!("1"), json!(1), true)]
    #[case(json!(1), json!(" 1 "), true)]
    #[case(json!("a"), json!("a"), true)]
    #[case(json!(1), json!(2), false)]
    #[case(json!("x"), json!(1), false)]
    #[case(json!(true), json!(1), false)]
    #[case(json!(null), json!(0), false)]
    fn test_loose_equality(#[case] a: Value, #[case] b: Value, #[case] equal: bool) {
        assert_eq!(loosely_equal(&a, &b), equal, "{a} ~ {b}");
    }

    #[test]
    fn test_loose_match() {
        let err = loose_match(json!("1"), &json!(1), Some("page"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Match));
        assert_eq!(err.to_string(), "Required input page cannot be 1.");

        assert_eq!(loose_match(json!(2), &json!(1), None, None).unwrap(), json!(2));
    }

    #[test]
    fn test_strict_match_requires_identical_kind() {
        // Loosely equal but not strictly: different kinds pass.
        assert_eq!(strict_match(json!("1"), &json!(1), None, None).unwrap(), json!("1"));
        assert_eq!(strict_match(json!(1), &json!(1.0), None, None).unwrap(), json!(1));

        let err = strict_match(json!("admin"), &json!("admin"), Some("role"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::StrictMatch));
        assert_eq!(err.to_string(), "Required input role cannot be admin.");
    }

    #[test]
    fn test_of_kind() {
        let err = of_kind(json!("text"), ValueKind::String, Some("payload"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Type));
        assert_eq!(err.to_string(), "Required input payload cannot be of type string.");

        assert_eq!(of_kind(json!(1), ValueKind::String, None, None).unwrap(), json!(1));
    }

    #[test]
    fn test_not_of_kind() {
        let err = not_of_kind(json!(1), ValueKind::String, Some("payload"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::NotType));
        assert_eq!(err.to_string(), "Required input payload has to be of type string.");

        assert_eq!(not_of_kind(json!("x"), ValueKind::String, None, None).unwrap(), json!("x"));
    }

    #[test]
    fn test_has_property() {
        let user = json!({"name": "ada", "admin": true});

        let err = has_property(user.clone(), "admin", Some("user"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::HasProperty));
        assert_eq!(err.to_string(), "Required input user has an unwanted property admin.");

        assert_eq!(has_property(user.clone(), "email", None, None).unwrap(), user);
        // Non-objects have no properties at all.
        assert_eq!(has_property(json!(1), "admin", None, None).unwrap(), json!(1));
    }

    #[test]
    fn test_has_no_property() {
        let user = json!({"name": "ada"});

        let err = has_no_property(user.clone(), "email", Some("user"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::MissingProperty));
        assert_eq!(err.to_string(), "Required input user is missing a property email.");

        assert_eq!(has_no_property(user.clone(), "name", None, None).unwrap(), user);
        assert!(has_no_property(json!([1, 2]), "name", None, None).is_err());
    }

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(false), true)]
    #[case(json!(0), true)]
    #[case(json!(0.0), true)]
    #[case(json!(""), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    #[case(json!(true), false)]
    #[case(json!(1), false)]
    #[case(json!("0"), false)]
    #[case(json!([0]), false)]
    fn test_empty_value_per_category(#[case] value: Value, #[case] violates: bool) {
        let result = empty_value(value.clone(), None, None);
        assert_eq!(result.is_err(), violates, "empty_value({value})");
        if let Ok(passed) = result {
            assert_eq!(passed, value);
        }
    }

    #[test]
    fn test_operand_display_in_messages() {
        let err = loose_match(json!(true), &json!(true), Some("flag"), None).unwrap_err();
        assert_eq!(err.to_string(), "Required input flag cannot be true.");

        let err = strict_match(json!([1, 2]), &json!([1, 2]), None, None).unwrap_err();
        assert_eq!(err.to_string(), "Required input value cannot be [1,2].");
    }
}
