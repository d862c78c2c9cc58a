//! Activity lifecycle of a student record.
//!
//! A record is stored with an explicit status but readers see its
//! *effective* status, which also accounts for a scheduled inactivation
//! date that has been reached. Everything in this module is a pure function
//! of the record and "today"; callers decide whether to persist the result.

use serde::Serialize;

use crate::student::{ActivityStatus, Student};
use crate::types::Date;

// ---------------------------------------------------------------------------
// System reasons
// ---------------------------------------------------------------------------

/// Reason written by the whole-set sweep.
pub const SWEEP_INACTIVITY_REASON: &str = "Automatically marked inactive based on scheduled date";

/// Reason reported by a single-record lookup.
pub const LOOKUP_INACTIVITY_REASON: &str =
    "Automatically marked inactive due to reaching scheduled end date";

/// Which reader is asking. Only the reported reason differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationContext {
    Sweep,
    Lookup,
}

impl EvaluationContext {
    pub fn reason(self) -> &'static str {
        match self {
            EvaluationContext::Sweep => SWEEP_INACTIVITY_REASON,
            EvaluationContext::Lookup => LOOKUP_INACTIVITY_REASON,
        }
    }
}

// ---------------------------------------------------------------------------
// Effective status
// ---------------------------------------------------------------------------

/// The status a reader perceives on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveStatus {
    pub status: ActivityStatus,
    pub reason: Option<String>,
    /// True when the scheduled date overrode a stored `ACTIVE`.
    pub auto_inactivated: bool,
}

/// Whether the scheduled inactivation date has been reached for a record
/// still stored as `ACTIVE`.
pub fn is_due_for_inactivation(student: &Student, today: Date) -> bool {
    student.status() == ActivityStatus::Active
        && student.profile.inactive_on.is_some_and(|on| today >= on)
}

pub fn evaluate(student: &Student, today: Date, context: EvaluationContext) -> EffectiveStatus {
    if is_due_for_inactivation(student, today) {
        return EffectiveStatus {
            status: ActivityStatus::Inactive,
            reason: Some(context.reason().to_string()),
            auto_inactivated: true,
        };
    }

    EffectiveStatus {
        status: student.status(),
        reason: student.profile.inactivity_reason.clone(),
        auto_inactivated: false,
    }
}

/// The record as a reader perceives it on `today`.
pub fn apply_effective_status(student: &Student, today: Date, context: EvaluationContext) -> Student {
    let effective = evaluate(student, today, context);
    if !effective.auto_inactivated {
        return student.clone();
    }

    let mut out = student.clone();
    out.profile.activity_status = effective.status;
    out.profile.inactivity_reason = effective.reason;
    out
}

/// Records whose effective status differs from what is stored, already
/// rewritten with the sweep reason.
///
/// Written-back records are stored `INACTIVE`, so sweeping them again yields
/// nothing.
pub fn sweep(records: &[Student], today: Date) -> Vec<Student> {
    records
        .iter()
        .filter(|s| is_due_for_inactivation(s, today))
        .map(|s| apply_effective_status(s, today, EvaluationContext::Sweep))
        .collect()
}

// ---------------------------------------------------------------------------
// Manual edits
// ---------------------------------------------------------------------------

/// Apply the reactivation rule to a submitted edit.
///
/// `previous` is the effective status of the stored record. Moving from
/// `INACTIVE` to `ACTIVE` always clears the reason and the scheduled date,
/// whatever the submission carried.
pub fn normalize_edit(previous: ActivityStatus, mut submitted: Student) -> Student {
    if previous == ActivityStatus::Inactive && submitted.status() == ActivityStatus::Active {
        submitted.profile.inactivity_reason = None;
        submitted.profile.inactive_on = None;
    }
    submitted
}

/// Advisory message shown while an edit is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditNotice {
    Reactivation,
    ScheduledInactivation,
}

impl EditNotice {
    pub fn message(self) -> &'static str {
        match self {
            EditNotice::Reactivation => {
                "Reactivating will clear inactivity reason and scheduled date"
            }
            EditNotice::ScheduledInactivation => {
                "Warning: This student is scheduled to become inactive on this date"
            }
        }
    }
}

pub fn edit_notices(stored: &Student, submitted_status: ActivityStatus, today: Date) -> Vec<EditNotice> {
    let mut notices = Vec::new();
    if submitted_status != ActivityStatus::Active {
        return notices;
    }

    let previous = evaluate(stored, today, EvaluationContext::Sweep).status;
    if previous == ActivityStatus::Inactive {
        notices.push(EditNotice::Reactivation);
    }
    if stored.profile.inactive_on.is_some() {
        notices.push(EditNotice::ScheduledInactivation);
    }
    notices
}

// ---------------------------------------------------------------------------
// Expiry countdown
// ---------------------------------------------------------------------------

/// Whole days from `today` until `inactive_on` (negative once passed).
pub fn days_until(inactive_on: Date, today: Date) -> i64 {
    (inactive_on - today).num_days()
}

/// Display-only countdown to a scheduled inactivation. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiresIn {
    Expired,
    Today,
    Days(i64),
}

pub fn expires_in(inactive_on: Date, today: Date) -> ExpiresIn {
    match days_until(inactive_on, today) {
        n if n < 0 => ExpiresIn::Expired,
        0 => ExpiresIn::Today,
        n => ExpiresIn::Days(n),
    }
}

impl std::fmt::Display for ExpiresIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiresIn::Expired => f.write_str("Expired"),
            ExpiresIn::Today => f.write_str("Today"),
            ExpiresIn::Days(n) => write!(f, "{n} days"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
