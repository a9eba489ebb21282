//! The guard surface: one free function per guarded condition
//!
//! Every guard takes the value under test, an optional variable-name label
//! used only in the generated default message, an optional custom message
//! that overrides the default entirely, and any condition-specific operands.
//! On success the original value comes back verbatim so guards chain at the
//! top of a function body; on failure the guard returns the violation and
//! touches nothing else.

pub mod collection;
pub mod dynamic;
pub mod expression;
pub mod nullable;
pub mod numeric;
pub mod string;

pub use collection::{contains, count, count_or_less, count_or_more, empty, lacks, Countable};
pub use dynamic::{
    empty_value, has_no_property, has_property, loose_match, not_of_kind, of_kind, strict_match,
    ValueKind,
};
pub use expression::{expression, expression_msg};
pub use nullable::{is_false, is_true, null, null_or_false, null_or_true};
pub use numeric::{
    negative, negative_or_zero, not_range, positive, positive_or_zero, range, zero, Numeric,
};
pub use string::{empty_or_white_space, regex, regex_compiled, white_space};
