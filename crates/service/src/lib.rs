//! In-process collaborator contract for the cohort student registry.
//!
//! The presentation layer talks to a [`Registry`]; it never touches the
//! repositories directly.

pub mod config;
pub mod error;
pub mod registry;

pub use config::{RegistryConfig, SweepMode};
pub use error::{ServiceError, ServiceResult};
pub use registry::{PublicLookup, Registry, StudentSummary};
