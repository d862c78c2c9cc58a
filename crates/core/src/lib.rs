//! Domain logic for the cohort student registry.
//!
//! Everything here is pure: no storage, no I/O. The `db` crate supplies
//! repositories and the `service` crate wires them into the registry.

pub mod audit;
pub mod clock;
pub mod error;
pub mod lifecycle;
pub mod search;
pub mod student;
pub mod types;
pub mod validation;
