//! Guard against an arbitrary caller-supplied predicate
//!
//! Unlike every other guard, the caller picks the error here: the predicate
//! guard is the escape hatch for conditions the fixed surface cannot express,
//! so no default message is generated for it.

use crate::domain::violations::{GuardError, GuardKind, GuardResult};

/// Fails with the supplied error when the predicate evaluates to true.
///
/// The error can be any type, so domain-specific errors flow through
/// unchanged:
///
/// ```
/// use guard_against::guards;
///
/// #[derive(Debug, PartialEq)]
/// struct QuotaExceeded(&'static str);
///
/// let used = 3;
/// assert_eq!(guards::expression(|| used > 5, QuotaExceeded("over quota")), Ok(()));
/// assert_eq!(
///     guards::expression(|| used > 2, QuotaExceeded("over quota")),
///     Err(QuotaExceeded("over quota")),
/// );
/// ```
pub fn expression<F, E>(predicate: F, error: E) -> Result<(), E>
where
    F: FnOnce() -> bool,
{
    if predicate() {
        return Err(error);
    }

    Ok(())
}

/// Fails with an invalid-argument violation of the given kind and message
/// when the predicate evaluates to true.
pub fn expression_msg<F>(predicate: F, kind: GuardKind, message: &str) -> GuardResult<()>
where
    F: FnOnce() -> bool,
{
    expression(predicate, GuardError::invalid(kind, message))
}
