//! Student record model.
//!
//! A [`StudentDraft`] is a candidate submitted by an administrator; the
//! repository turns it into a [`Student`] by assigning an id. Updates submit
//! the full [`Student`] back.

use serde::{Deserialize, Serialize};

use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// The kind of enrollment a student holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentType {
    JobSeeker,
    PaidIntern,
    UnpaidIntern,
    Student,
    Learner,
}

impl EnrollmentType {
    /// All enrollment types in display order.
    pub const ALL: [EnrollmentType; 5] = [
        EnrollmentType::JobSeeker,
        EnrollmentType::PaidIntern,
        EnrollmentType::UnpaidIntern,
        EnrollmentType::Student,
        EnrollmentType::Learner,
    ];

    /// Wire code, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            EnrollmentType::JobSeeker => "JOB_SEEKER",
            EnrollmentType::PaidIntern => "PAID_INTERN",
            EnrollmentType::UnpaidIntern => "UNPAID_INTERN",
            EnrollmentType::Student => "STUDENT",
            EnrollmentType::Learner => "LEARNER",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            EnrollmentType::JobSeeker => "Job Seeker",
            EnrollmentType::PaidIntern => "Paid Intern",
            EnrollmentType::UnpaidIntern => "Unpaid Intern",
            EnrollmentType::Student => "Student",
            EnrollmentType::Learner => "Learner",
        }
    }
}

impl std::fmt::Display for EnrollmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Stored activity status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    #[default]
    Active,
    Inactive,
}

impl ActivityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Active => "ACTIVE",
            ActivityStatus::Inactive => "INACTIVE",
        }
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Draft (candidate without id)
// ---------------------------------------------------------------------------

/// Every attribute of a student record except its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub enrollment_type: EnrollmentType,
    pub amount_paid: f64,
    pub due_amount: f64,
    pub discount: f64,
    pub incentives_paid: f64,
    pub date_of_joining: Date,
    pub country: String,
    pub state: String,
    pub address: String,
    pub government_id_proof: String,
    #[serde(default)]
    pub activity_status: ActivityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactivity_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_on: Option<Date>,
}

impl StudentDraft {
    /// The inactivity reason, if present and not blank.
    pub fn reason(&self) -> Option<&str> {
        self.inactivity_reason
            .as_deref()
            .filter(|r| !r.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A student record as held by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: DbId,
    #[serde(flatten)]
    pub profile: StudentDraft,
}

impl Student {
    pub fn new(id: DbId, profile: StudentDraft) -> Self {
        Self { id, profile }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn phone_number(&self) -> &str {
        &self.profile.phone_number
    }

    pub fn status(&self) -> ActivityStatus {
        self.profile.activity_status
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
