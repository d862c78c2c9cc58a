//! Repository layer for the cohort registry.
//!
//! Records and audit entries live in process memory behind `parking_lot`
//! locks. The [`StudentRepository`] trait is the seam for other backends.

pub mod models;
pub mod repositories;

pub use repositories::{AuditLogStore, InMemoryStudentRepo, StudentRepository};
