//! Guards against absent and boolean values
//!
//! Absence is expressed as `Option`: guarding against null unwraps the value,
//! so a successful check hands the caller the inner `T` ready for use.

use crate::domain::violations::{display_label, violation, GuardKind, GuardResult};

/// Fails when `value` is `None`; returns the unwrapped inner value otherwise.
///
/// # Examples
///
/// ```
/// use guard_against::guards;
///
/// let port = guards::null(Some(8080), Some("port"), None).unwrap();
/// assert_eq!(port, 8080);
/// assert!(guards::null::<u16>(None, Some("port"), None).is_err());
/// ```
pub fn null<T>(value: Option<T>, label: Option<&str>, message: Option<&str>) -> GuardResult<T> {
    match value {
        Some(inner) => Ok(inner),
        None => Err(violation(GuardKind::Null, message, || {
            format!("Required input {} was null.", display_label(label))
        })),
    }
}

/// Fails when `value` is `true`.
pub fn is_true(value: bool, label: Option<&str>, message: Option<&str>) -> GuardResult<bool> {
    if value {
        return Err(violation(GuardKind::True, message, || {
            format!("Required input {} cannot be true.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when `value` is `false`.
pub fn is_false(value: bool, label: Option<&str>, message: Option<&str>) -> GuardResult<bool> {
    if !value {
        return Err(violation(GuardKind::False, message, || {
            format!("Required input {} cannot be false.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when `value` is `None` or `Some(true)`.
///
/// Sub-checks run left to right; the null check fires first, so
/// `null_or_true(None, ..)` reports the null violation.
pub fn null_or_true(
    value: Option<bool>,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<bool> {
    let value = null(value, label, message)?;
    is_true(value, label, message)
}

/// Fails when `value` is `None` or `Some(false)`.
pub fn null_or_false(
    value: Option<bool>,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<bool> {
    let value = null(value, label, message)?;
    is_false(value, label, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::violations::GuardKind;

    #[test]
    fn test_null_passes_through_non_null() {
        assert_eq!(null(Some("Hello"), None, None).unwrap(), "Hello");
        assert_eq!(null(Some(""), None, None).unwrap(), "");
        assert_eq!(null(Some(0), None, None).unwrap(), 0);
        assert_eq!(null(Some(false), None, None).unwrap(), false);
    }

    #[test]
    fn test_null_fails_on_none() {
        let err = null::<i32>(None, Some("count"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Null));
        assert_eq!(err.to_string(), "Required input count was null.");
    }

    #[test]
    fn test_null_default_label() {
        let err = null::<i32>(None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Required input value was null.");
    }

    #[test]
    fn test_is_true() {
        assert_eq!(is_true(false, None, None).unwrap(), false);

        let err = is_true(true, Some("dry_run"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::True));
        assert_eq!(err.to_string(), "Required input dry_run cannot be true.");
    }

    #[test]
    fn test_is_false() {
        assert_eq!(is_false(true, None, None).unwrap(), true);

        let err = is_false(false, None, None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::False));
        assert_eq!(err.to_string(), "Required input value cannot be false.");
    }

    #[test]
    fn test_null_or_true_first_failure_wins() {
        // Both sub-checks would object to None; the null check runs first.
        let err = null_or_true(None, Some("flag"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Null));
        assert_eq!(err.to_string(), "Required input flag was null.");

        let err = null_or_true(Some(true), Some("flag"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::True));

        assert_eq!(null_or_true(Some(false), None, None).unwrap(), false);
    }

    #[test]
    fn test_null_or_false_first_failure_wins() {
        let err = null_or_false(None, None, None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Null));

        let err = null_or_false(Some(false), None, None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::False));

        assert_eq!(null_or_false(Some(true), None, None).unwrap(), true);
    }

    #[test]
    fn test_custom_message_override() {
        let err = is_true(true, Some("flag"), Some("flag must stay off")).unwrap_err();
        assert_eq!(err.to_string(), "flag must stay off");
        assert_eq!(err.kind(), Some(GuardKind::True));
    }
}
