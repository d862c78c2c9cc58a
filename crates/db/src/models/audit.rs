//! Audit log entity models and DTOs.
//!
//! Entries are immutable once created; there is no update DTO.

use cohort_core::audit::{Actor, AuditAction};
use cohort_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Audit log entity
// ---------------------------------------------------------------------------

/// A single audit log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub timestamp: Timestamp,
    pub admin_name: String,
    pub admin_email: String,
    pub action: AuditAction,
    pub student_id: DbId,
    pub student_name: String,
    pub details: String,
}

impl AuditLog {
    /// One-line summary, e.g. `Updated student: Asha Rao`.
    pub fn summary(&self) -> String {
        cohort_core::audit::summary_line(self.action, &self.student_name)
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for appending a new entry. The store assigns `id` and `timestamp`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuditLog {
    pub admin_name: String,
    pub admin_email: String,
    pub action: AuditAction,
    pub student_id: DbId,
    pub student_name: String,
    pub details: String,
}

impl CreateAuditLog {
    pub fn new(
        actor: &Actor,
        action: AuditAction,
        student_id: DbId,
        student_name: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            admin_name: actor.name.clone(),
            admin_email: actor.email.clone(),
            action,
            student_id,
            student_name: student_name.into(),
            details: details.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Filter parameters for querying the audit log. Results stay newest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQuery {
    pub student_id: Option<DbId>,
    pub action: Option<AuditAction>,
    pub admin_email: Option<String>,
    /// Case-insensitive substring over student name and details.
    pub search_text: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
