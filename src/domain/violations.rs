//! Core domain model for guard-clause violations
//!
//! Architecture: one error taxonomy shared by every guard - the
//! invalid-argument violation. A violation carries the closed kind of the
//! guarded condition that fired plus a human-readable message; it is built
//! only on the failing path and never stored or retried internally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The guarded condition behind a violation.
///
/// A closed enumeration: every guard in the crate reports exactly one of
/// these kinds, so callers can branch on what fired without parsing message
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GuardKind {
    /// Value was null/absent
    Null,
    /// Boolean value was true
    True,
    /// Boolean value was false
    False,
    /// Numeric value was below zero
    Negative,
    /// Numeric value was above zero
    Positive,
    /// Numeric value was zero
    Zero,
    /// Value loosely equalled a forbidden comparison value
    Match,
    /// Value strictly equalled a forbidden comparison value
    StrictMatch,
    /// Numeric value fell inside a forbidden inclusive interval
    Range,
    /// Numeric value fell outside a required open interval
    NotRange,
    /// Value was empty
    Empty,
    /// String was a single space character
    WhiteSpace,
    /// String matched a forbidden pattern
    Regex,
    /// Collection size equalled a forbidden count
    Count,
    /// Collection size reached or exceeded a forbidden count
    CountOrMore,
    /// Collection size was at or below a forbidden count
    CountOrLess,
    /// Collection contained a forbidden element
    Contains,
    /// Collection lacked a required element
    Lacks,
    /// Value had a forbidden runtime type
    Type,
    /// Value lacked a required runtime type
    NotType,
    /// Object carried an unwanted property
    HasProperty,
    /// Object lacked a required property
    MissingProperty,
    /// A caller-supplied predicate held
    Expression,
}

impl GuardKind {
    /// Convert to string for display; matches the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Zero => "zero",
            Self::Match => "match",
            Self::StrictMatch => "strict_match",
            Self::Range => "range",
            Self::NotRange => "not_range",
            Self::Empty => "empty",
            Self::WhiteSpace => "white_space",
            Self::Regex => "regex",
            Self::Count => "count",
            Self::CountOrMore => "count_or_more",
            Self::CountOrLess => "count_or_less",
            Self::Contains => "contains",
            Self::Lacks => "lacks",
            Self::Type => "type",
            Self::NotType => "not_type",
            Self::HasProperty => "has_property",
            Self::MissingProperty => "missing_property",
            Self::Expression => "expression",
        }
    }
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a guarded condition is met
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// A guard's predicate held for the value under test
    #[error("{message}")]
    InvalidArgument { kind: GuardKind, message: String },

    /// A supplied regular expression could not be compiled
    #[error("Pattern error: {message}")]
    Pattern { message: String },
}

impl GuardError {
    /// Create an invalid-argument violation of the given kind
    pub fn invalid(kind: GuardKind, message: impl Into<String>) -> Self {
        Self::InvalidArgument { kind, message: message.into() }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern { message: message.into() }
    }

    /// The guarded condition that fired, if this is a violation
    pub fn kind(&self) -> Option<GuardKind> {
        match self {
            Self::InvalidArgument { kind, .. } => Some(*kind),
            Self::Pattern { .. } => None,
        }
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. } | Self::Pattern { message } => message,
        }
    }
}

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Build the violation for a failing guard: the caller's `message` override
/// wins, otherwise the generated default is used.
pub(crate) fn violation(
    kind: GuardKind,
    message: Option<&str>,
    default: impl FnOnce() -> String,
) -> GuardError {
    match message {
        Some(text) => GuardError::invalid(kind, text),
        None => GuardError::invalid(kind, default()),
    }
}

/// The label interpolated into default messages when the caller supplied none
pub(crate) fn display_label(label: Option<&str>) -> &str {
    label.unwrap_or("value")
}
