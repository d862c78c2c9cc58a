//! Audit trail vocabulary: action kinds, actors and detail text.
//!
//! This module lives in `core` (zero internal deps) so both the repository
//! layer and the registry build entries from the same strings.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Kind of administrative mutation recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Add,
    Update,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Add => "ADD",
            AuditAction::Update => "UPDATE",
        }
    }

    /// Past-tense verb used in log summaries.
    pub fn verb(self) -> &'static str {
        match self {
            AuditAction::Add => "Added",
            AuditAction::Update => "Updated",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

/// The administrator a mutation is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub email: String,
}

impl Actor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Detail text
// ---------------------------------------------------------------------------

/// Details for an `ADD` entry.
pub fn add_details(phone_number: &str) -> String {
    format!("Added new student with phone number {phone_number}")
}

/// Details for an `UPDATE` entry.
pub fn update_details() -> String {
    "Updated student information".to_string()
}

/// One-line summary, e.g. `Added student: Asha Rao`.
pub fn summary_line(action: AuditAction, student_name: &str) -> String {
    format!("{} student: {student_name}", action.verb())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
