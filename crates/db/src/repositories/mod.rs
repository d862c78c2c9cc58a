//! Repository layer.
//!
//! Each repository owns its state behind an interior lock and is meant to be
//! shared through an `Arc`.

pub mod audit_repo;
pub mod student_repo;

pub use audit_repo::AuditLogStore;
pub use student_repo::{InMemoryStudentRepo, StudentRepository};
