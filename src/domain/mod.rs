//! Domain layer for guard-against
//!
//! CDD Principle: Domain Model - Pure business logic for precondition checking
//! - Contains the violation kind taxonomy and the shared error contract
//! - Independent of any infrastructure concern; guards perform no I/O
//! - Expresses the ubiquitous language of guard clauses and violations

pub mod violations;

// Re-export main domain types for convenience
pub use violations::*;
