//! Guards against whitespace strings and forbidden patterns

use crate::domain::violations::{display_label, violation, GuardError, GuardKind, GuardResult};
use crate::guards::collection;
use regex::Regex;

/// Fails when the string is exactly one space character.
pub fn white_space<S: AsRef<str>>(
    value: S,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<S> {
    if value.as_ref() == " " {
        return Err(violation(GuardKind::WhiteSpace, message, || {
            format!("Required input {} cannot be only whitespace.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when the string is empty or exactly one space character.
///
/// The empty check runs first, so `""` reports the empty violation.
///
/// # Examples
///
/// ```
/// use guard_against::guards;
///
/// assert_eq!(guards::empty_or_white_space("ok", None, None).unwrap(), "ok");
/// assert!(guards::empty_or_white_space("", None, None).is_err());
/// assert!(guards::empty_or_white_space(" ", None, None).is_err());
/// ```
pub fn empty_or_white_space<S: AsRef<str>>(
    value: S,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<S> {
    collection::empty(value.as_ref(), label, message)?;
    white_space(value, label, message)
}

/// Fails when the string matches `pattern`.
///
/// The pattern is compiled on every call; a malformed pattern is reported as
/// [`GuardError::Pattern`], never as a violation. Callers guarding in a hot
/// path should compile once and use [`regex_compiled`].
pub fn regex<S: AsRef<str>>(
    value: S,
    pattern: &str,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<S> {
    let compiled = Regex::new(pattern)
        .map_err(|e| GuardError::pattern(format!("Invalid pattern '{pattern}': {e}")))?;

    regex_compiled(value, &compiled, label, message)
}

/// Fails when the string matches the pre-compiled pattern.
///
/// The default message joins all capture groups of the match with a comma.
pub fn regex_compiled<S: AsRef<str>>(
    value: S,
    pattern: &Regex,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<S> {
    if let Some(captures) = pattern.captures(value.as_ref()) {
        return Err(violation(GuardKind::Regex, message, || {
            let matched =
                captures.iter().flatten().map(|m| m.as_str()).collect::<Vec<_>>().join(",");
            format!(
                "Required input {} cannot be any of the followings: {matched}.",
                display_label(label)
            )
        }));
    }

    Ok(value)
}
