//! Storage-side model structs and DTOs.
//!
//! Student records are defined in `cohort_core::student`; this module holds
//! the audit log entity, its create DTO and its query parameters.

pub mod audit;
