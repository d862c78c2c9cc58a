//! Free-text filtering over the student set and the public phone lookup
//! grammar.
//!
//! Nothing here holds state; every call runs against whatever snapshot the
//! caller passes in.

use crate::error::CoreError;
use crate::student::Student;
use crate::validation::is_valid_phone;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Rejection message for a public lookup that is not 12 digits.
pub const INVALID_PHONE_QUERY_MESSAGE: &str = "Please enter a valid 12-digit phone number";

/// Message for a well-formed lookup that matched nobody.
pub const LOOKUP_MISS_MESSAGE: &str = "No student found with this phone number";

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Whether `student` matches an already lower-cased query.
///
/// Name, email and enrollment type code are compared lower-cased; the phone
/// number is compared as stored.
fn matches(student: &Student, needle: &str) -> bool {
    let p = &student.profile;
    p.name.to_lowercase().contains(needle)
        || p.email.to_lowercase().contains(needle)
        || p.phone_number.contains(needle)
        || p.enrollment_type.code().to_lowercase().contains(needle)
}

/// Filter `records` by a free-text query, preserving their order.
///
/// An empty query returns every record.
///
/// # Examples
///
/// ```
/// use cohort_core::search::filter;
/// assert!(filter(&[], "anything").is_empty());
/// ```
pub fn filter(records: &[Student], query: &str) -> Vec<Student> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|s| matches(s, &needle))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Public lookup
// ---------------------------------------------------------------------------

/// Accept a public lookup input only if it is exactly 12 ASCII digits.
///
/// # Examples
///
/// ```
/// use cohort_core::search::parse_phone_query;
/// assert_eq!(parse_phone_query("911234567890").unwrap(), "911234567890");
/// assert!(parse_phone_query("12345").is_err());
/// ```
pub fn parse_phone_query(input: &str) -> Result<&str, CoreError> {
    if is_valid_phone(input) {
        Ok(input)
    } else {
        Err(CoreError::InputFormat(INVALID_PHONE_QUERY_MESSAGE.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
