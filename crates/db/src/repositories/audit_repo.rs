//! In-memory store for the append-only audit log.

use std::sync::Arc;

use cohort_core::clock::Clock;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::audit::{AuditLog, AuditQuery, CreateAuditLog};

/// Default page size for [`AuditLogStore::query`].
const DEFAULT_QUERY_LIMIT: usize = 50;

/// Upper bound on the page size for [`AuditLogStore::query`].
const MAX_QUERY_LIMIT: usize = 500;

/// Ordered audit log, newest entry first.
///
/// Entries are never mutated or removed.
pub struct AuditLogStore {
    entries: RwLock<Vec<AuditLog>>,
    clock: Arc<dyn Clock>,
}

impl AuditLogStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Assign an id and timestamp, then prepend the entry.
    pub fn append(&self, input: CreateAuditLog) -> AuditLog {
        let entry = AuditLog {
            id: Uuid::new_v4(),
            timestamp: self.clock.now(),
            admin_name: input.admin_name,
            admin_email: input.admin_email,
            action: input.action,
            student_id: input.student_id,
            student_name: input.student_name,
            details: input.details,
        };

        self.entries.write().insert(0, entry.clone());
        tracing::info!(
            audit_id = %entry.id,
            action = %entry.action,
            student_id = entry.student_id,
            admin_email = %entry.admin_email,
            "Audit entry appended"
        );
        entry
    }

    /// Every entry, newest first.
    pub fn list(&self) -> Vec<AuditLog> {
        self.entries.read().clone()
    }

    /// Entries matching `params`, newest first, paginated.
    pub fn query(&self, params: &AuditQuery) -> Vec<AuditLog> {
        let limit = params.limit.unwrap_or(DEFAULT_QUERY_LIMIT).clamp(1, MAX_QUERY_LIMIT);
        let offset = params.offset.unwrap_or(0);
        let needle = params.search_text.as_deref().map(str::to_lowercase);

        self.entries
            .read()
            .iter()
            .filter(|e| params.student_id.map_or(true, |id| e.student_id == id))
            .filter(|e| params.action.map_or(true, |a| e.action == a))
            .filter(|e| {
                params
                    .admin_email
                    .as_deref()
                    .map_or(true, |email| e.admin_email.eq_ignore_ascii_case(email))
            })
            .filter(|e| {
                needle.as_deref().map_or(true, |n| {
                    e.student_name.to_lowercase().contains(n) || e.details.to_lowercase().contains(n)
                })
            })
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
