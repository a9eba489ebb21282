//! guard-against - Guard-clause precondition checks
//!
//! Architecture: Clean Architecture - a pure domain library with no
//! infrastructure layer at all
//! - Every guard is a stateless free function: evaluate one predicate, then
//!   either hand the value back verbatim or return a structured violation
//! - One shared error contract ([`GuardError`]) across the whole surface;
//!   guards never log, never perform I/O, and never swallow a failure
//! - Translating a violation into domain handling (an HTTP 400, a retry, a
//!   prompt) belongs to the caller
//!
//! Guards chain at the top of a function body:
//!
//! ```
//! use guard_against::{guards, GuardResult};
//!
//! fn register(name: &str, age: i64, retries: Option<u32>) -> GuardResult<String> {
//!     let name = guards::empty_or_white_space(name, Some("name"), None)?;
//!     let age = guards::negative_or_zero(age, Some("age"), None)?;
//!     let retries = guards::null(retries, Some("retries"), None)?;
//!
//!     Ok(format!("{name} ({age}), {retries} retries"))
//! }
//!
//! assert_eq!(register("ada", 36, Some(3)).unwrap(), "ada (36), 3 retries");
//! assert!(register(" ", 36, Some(3)).is_err());
//! assert!(register("ada", -1, Some(3)).is_err());
//! assert!(register("ada", 36, None).is_err());
//! ```

pub mod domain;
pub mod guards;

// Re-export main types for convenient access
pub use domain::violations::{GuardError, GuardKind, GuardResult};

pub use guards::{Countable, Numeric, ValueKind};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // End-to-end shape of a guarded constructor: the first violated guard
    // decides the error the caller sees.
    fn build_pool(size: Option<i32>, hosts: Vec<&'static str>) -> GuardResult<(i32, Vec<&'static str>)> {
        let size = guards::null(size, Some("size"), None)?;
        let size = guards::negative_or_zero(size, Some("size"), None)?;
        let hosts = guards::empty(hosts, Some("hosts"), None)?;
        let hosts = guards::contains(hosts, &"localhost", Some("hosts"), None)?;

        Ok((size, hosts))
    }

    #[test]
    fn test_guard_chain_success_passes_values_through() {
        let (size, hosts) = build_pool(Some(4), vec!["db1", "db2"]).unwrap();
        assert_eq!(size, 4);
        assert_eq!(hosts, vec!["db1", "db2"]);
    }

    #[test]
    fn test_guard_chain_reports_first_violation() {
        let err = build_pool(None, vec![]).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Null));

        let err = build_pool(Some(0), vec![]).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Zero));

        let err = build_pool(Some(4), vec![]).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Empty));

        let err = build_pool(Some(4), vec!["localhost"]).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Contains));
    }

    #[test]
    fn test_dynamic_payload_guard_chain() {
        let payload = json!({"name": "ada", "age": 36});

        let payload = guards::not_of_kind(payload, ValueKind::Object, None, None).unwrap();
        let payload = guards::empty_value(payload, Some("payload"), None).unwrap();
        let payload = guards::has_no_property(payload, "name", Some("payload"), None).unwrap();

        let err = guards::has_property(payload, "age", Some("payload"), None).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::HasProperty));
    }

    #[test]
    fn test_violation_kind_survives_custom_message() {
        let err = guards::zero(0, Some("divisor"), Some("division by zero")).unwrap_err();
        assert_eq!(err.kind(), Some(GuardKind::Zero));
        assert_eq!(err.to_string(), "division by zero");
    }
}
