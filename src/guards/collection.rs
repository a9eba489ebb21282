//! Guards against collection emptiness, size, and membership
//!
//! A "countable" is anything exposing a size: strings, slices, the std
//! collections, and dynamic payload values. Size guards take the collection
//! by value and hand it back untouched on success, so ownership flows through
//! the guard chain.

use crate::domain::violations::{display_label, violation, GuardKind, GuardResult};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

/// A value exposing a size or length.
pub trait Countable {
    /// Number of elements (characters for strings).
    fn count(&self) -> usize;
}

impl Countable for str {
    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Countable for String {
    fn count(&self) -> usize {
        self.as_str().count()
    }
}

impl Countable for &str {
    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<T> Countable for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for &[T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T> Countable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Countable for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Countable for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

/// Arrays and objects count their elements, strings their characters;
/// scalars count zero.
impl Countable for Value {
    fn count(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(fields) => fields.len(),
            Value::String(text) => text.as_str().count(),
            _ => 0,
        }
    }
}

/// Fails when the countable has no elements.
///
/// This is the typed emptiness check; for full dynamic-payload truthiness
/// (null, false, numeric zero) see [`crate::guards::dynamic::empty_value`].
///
/// # Examples
///
/// ```
/// use guard_against::guards;
///
/// assert_eq!(guards::empty("ok", None, None).unwrap(), "ok");
/// assert!(guards::empty(Vec::<i32>::new(), Some("items"), None).is_err());
/// ```
pub fn empty<C: Countable>(value: C, label: Option<&str>, message: Option<&str>) -> GuardResult<C> {
    if value.count() == 0 {
        return Err(violation(GuardKind::Empty, message, || {
            format!("Required input {} cannot be only empty.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when the countable holds exactly `count` elements.
pub fn count<C: Countable>(
    value: C,
    count: usize,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<C> {
    if value.count() == count {
        return Err(violation(GuardKind::Count, message, || {
            format!("Required inputs {} count cannot be {count}.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when the countable holds `count` or more elements.
pub fn count_or_more<C: Countable>(
    value: C,
    count: usize,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<C> {
    if value.count() >= count {
        return Err(violation(GuardKind::CountOrMore, message, || {
            format!(
                "Required inputs {} count cannot be more or equals to {count}.",
                display_label(label)
            )
        }));
    }

    Ok(value)
}

/// Fails when the countable holds `count` or fewer elements.
pub fn count_or_less<C: Countable>(
    value: C,
    count: usize,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<C> {
    if value.count() <= count {
        return Err(violation(GuardKind::CountOrLess, message, || {
            format!(
                "Required inputs {} count cannot be less or equals to {count}.",
                display_label(label)
            )
        }));
    }

    Ok(value)
}

/// Fails when the collection contains an element equal to `needle`.
///
/// The needle must implement `Display` so the default message can name it;
/// supply a custom `message` for non-displayable element types.
pub fn contains<C, T>(
    value: C,
    needle: &T,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<C>
where
    C: AsRef<[T]>,
    T: PartialEq + fmt::Display,
{
    if value.as_ref().contains(needle) {
        return Err(violation(GuardKind::Contains, message, || {
            format!("Required input {} cannot include {needle}.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when the collection contains no element equal to `needle`.
pub fn lacks<C, T>(
    value: C,
    needle: &T,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<C>
where
    C: AsRef<[T]>,
    T: PartialEq + fmt::Display,
{
    if !value.as_ref().contains(needle) {
        return Err(violation(GuardKind::Lacks, message, || {
            format!("Required input {} must include {needle}.", display_label(label))
        }));
    }

    Ok(value)
}
