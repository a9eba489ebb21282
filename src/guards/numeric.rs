//! Guards against numeric sign and range conditions
//!
//! All guards here are generic over [`Numeric`], a closed trait covering the
//! primitive integer and float types. `Display` is required so operands can
//! be interpolated into default messages.

use crate::domain::violations::{display_label, violation, GuardKind, GuardResult};
use std::fmt;

/// A primitive number a sign or range guard can inspect.
pub trait Numeric: Copy + PartialOrd + fmt::Display {
    /// The additive identity the sign checks compare against.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($($int:ty),* ; $($float:ty),*) => {
        $(impl Numeric for $int {
            const ZERO: Self = 0;
        })*
        $(impl Numeric for $float {
            const ZERO: Self = 0.0;
        })*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize; f32, f64);

/// Fails when `value` is below zero.
pub fn negative<N: Numeric>(
    value: N,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<N> {
    if value < N::ZERO {
        return Err(violation(GuardKind::Negative, message, || {
            format!("Required input {} cannot be a negative number.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when `value` is above zero. Zero is not positive.
///
/// # Examples
///
/// ```
/// use guard_against::guards;
///
/// assert!(guards::positive(5, None, None).is_err());
/// assert_eq!(guards::positive(-5, None, None).unwrap(), -5);
/// assert_eq!(guards::positive(0, None, None).unwrap(), 0);
/// ```
pub fn positive<N: Numeric>(
    value: N,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<N> {
    if value > N::ZERO {
        return Err(violation(GuardKind::Positive, message, || {
            format!("Required input {} cannot be a positive number.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when `value` equals zero.
pub fn zero<N: Numeric>(value: N, label: Option<&str>, message: Option<&str>) -> GuardResult<N> {
    if value == N::ZERO {
        return Err(violation(GuardKind::Zero, message, || {
            format!("Required input {} cannot be zero.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when `value` is below or equal to zero.
///
/// Composed left to right: a negative value reports the negative violation,
/// never the zero one.
pub fn negative_or_zero<N: Numeric>(
    value: N,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<N> {
    negative(value, label, message)?;
    zero(value, label, message)
}

/// Fails when `value` is above or equal to zero.
pub fn positive_or_zero<N: Numeric>(
    value: N,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<N> {
    positive(value, label, message)?;
    zero(value, label, message)
}

/// Fails when `value` lies inside the inclusive interval `[from, to]`.
pub fn range<N: Numeric>(
    value: N,
    from: N,
    to: N,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<N> {
    if value >= from && value <= to {
        return Err(violation(GuardKind::Range, message, || {
            format!("Required input {} cannot be in range {from} - {to}.", display_label(label))
        }));
    }

    Ok(value)
}

/// Fails when `value` lies outside the open interval `(from, to)`.
///
/// Both exact boundaries fail this guard as well as [`range`]: at
/// `value == from` or `value == to` the two guards agree by construction.
pub fn not_range<N: Numeric>(
    value: N,
    from: N,
    to: N,
    label: Option<&str>,
    message: Option<&str>,
) -> GuardResult<N> {
    if value <= from || value >= to {
        return Err(violation(GuardKind::NotRange, message, || {
            format!("Required input {} is not in range {from} - {to}.", display_label(label))
        }));
    }

    Ok(value)
}
