//! The registry: every operation the presentation layer may invoke.
//!
//! A [`Registry`] owns handles to the student repository, the audit store,
//! the clock and the configuration. It applies the lifecycle rules and the
//! validation rule table before anything reaches storage, and attributes
//! successful mutations to the signed-in actor.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use cohort_core::audit::{self, Actor, AuditAction};
use cohort_core::clock::{Clock, SystemClock};
use cohort_core::error::CoreError;
use cohort_core::lifecycle::{self, EditNotice, EvaluationContext};
use cohort_core::search;
use cohort_core::student::{ActivityStatus, Student, StudentDraft};
use cohort_core::types::{Date, DbId};
use cohort_core::validation::validate_draft;
use cohort_db::models::audit::{AuditLog, CreateAuditLog};
use cohort_db::repositories::student_repo::DUPLICATE_PHONE_MESSAGE;
use cohort_db::{AuditLogStore, InMemoryStudentRepo, StudentRepository};
use parking_lot::RwLock;
use serde::Serialize;

use crate::config::{RegistryConfig, SweepMode};
use crate::error::ServiceResult;

const STUDENT: &str = "student";

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// A record prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    #[serde(flatten)]
    pub student: Student,
    /// Countdown to the scheduled inactivation, if one is set.
    pub expires_in: Option<String>,
    pub enrollment_label: &'static str,
}

/// Result of a successful public lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicLookup {
    pub student: Student,
    pub expires_in: Option<String>,
    pub support_message: String,
}

/// Message shown under a public lookup result.
pub fn support_message(status: ActivityStatus, contact: &str) -> String {
    match status {
        ActivityStatus::Active => format!("For any queries, contact support at {contact}"),
        ActivityStatus::Inactive => format!(
            "Your account is currently inactive. Please contact your mentor for assistance at {contact}"
        ),
    }
}

/// Parse a JSON array of drafts from `path`.
pub fn load_seed_file(path: &Path) -> ServiceResult<Vec<StudentDraft>> {
    let raw = std::fs::read_to_string(path)?;
    let drafts: Vec<StudentDraft> = serde_json::from_str(&raw)?;
    Ok(drafts)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

pub struct Registry<R: StudentRepository> {
    repo: Arc<R>,
    audit: Arc<AuditLogStore>,
    clock: Arc<dyn Clock>,
    config: Arc<RegistryConfig>,
    actor: RwLock<Option<Actor>>,
}

impl Registry<InMemoryStudentRepo> {
    /// A registry over fresh in-memory stores and the wall clock.
    pub fn in_memory(config: RegistryConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self::new(
            Arc::new(InMemoryStudentRepo::new()),
            Arc::new(AuditLogStore::new(Arc::clone(&clock))),
            clock,
            config,
        )
    }
}

impl<R: StudentRepository> Registry<R> {
    pub fn new(
        repo: Arc<R>,
        audit: Arc<AuditLogStore>,
        clock: Arc<dyn Clock>,
        config: RegistryConfig,
    ) -> Self {
        Self {
            repo,
            audit,
            clock,
            config: Arc::new(config),
            actor: RwLock::new(None),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn today(&self) -> Date {
        self.clock.today()
    }

    // -- session --------------------------------------------------------------

    /// Attribute subsequent mutations to `actor`.
    pub fn sign_in(&self, actor: Actor) {
        tracing::info!(admin_email = %actor.email, "Actor signed in");
        *self.actor.write() = Some(actor);
    }

    pub fn sign_out(&self) {
        if let Some(actor) = self.actor.write().take() {
            tracing::info!(admin_email = %actor.email, "Actor signed out");
        }
    }

    pub fn current_actor(&self) -> Option<Actor> {
        self.actor.read().clone()
    }

    // -- reads ----------------------------------------------------------------

    /// Every record with its effective status, in insertion order.
    ///
    /// In eager mode records due for inactivation are written back first.
    pub fn list_records(&self) -> ServiceResult<Vec<Student>> {
        let today = self.today();
        let records = self.repo.list();

        if self.config.sweep_mode == SweepMode::Eager {
            self.write_back(&records, today)?;
        }

        Ok(records
            .iter()
            .map(|s| lifecycle::apply_effective_status(s, today, EvaluationContext::Sweep))
            .collect())
    }

    /// Run the sweep and persist the result regardless of the configured
    /// mode. Returns how many records changed.
    pub fn sweep_now(&self) -> ServiceResult<usize> {
        self.write_back(&self.repo.list(), self.today())
    }

    /// Persist the sweep of `snapshot`. A record edited since the snapshot
    /// was taken is left to the next sweep.
    fn write_back(&self, snapshot: &[Student], today: Date) -> ServiceResult<usize> {
        let mut written = 0;
        for swept in lifecycle::sweep(snapshot, today) {
            let id = swept.id;
            let Some(stored) = snapshot.iter().find(|s| s.id == id) else {
                continue;
            };
            if self.repo.update_if_unchanged(stored, swept)? {
                written += 1;
                tracing::info!(student_id = id, "Scheduled inactivation written back");
            }
        }
        Ok(written)
    }

    /// Exact phone lookup with the lookup-time override applied.
    pub fn find_by_phone(&self, phone_number: &str) -> Option<Student> {
        let today = self.today();
        self.repo
            .find_by_phone(phone_number)
            .map(|s| lifecycle::apply_effective_status(&s, today, EvaluationContext::Lookup))
    }

    /// Public lookup by raw user input.
    ///
    /// Malformed input is rejected before the repository is consulted. A
    /// well-formed number that matches nobody is `Ok(None)`.
    pub fn lookup_by_phone(&self, input: &str) -> ServiceResult<Option<PublicLookup>> {
        let phone_number = match search::parse_phone_query(input) {
            Ok(phone_number) => phone_number,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected public lookup");
                return Err(err.into());
            }
        };

        let Some(student) = self.find_by_phone(phone_number) else {
            tracing::debug!("{}", search::LOOKUP_MISS_MESSAGE);
            return Ok(None);
        };

        let expires_in = self.expires_in_text(&student);
        let support_message = support_message(student.status(), &self.config.support_contact);
        Ok(Some(PublicLookup {
            student,
            expires_in,
            support_message,
        }))
    }

    /// Records matching a free-text query. An empty query matches all.
    pub fn filter_records(&self, query: &str) -> ServiceResult<Vec<Student>> {
        Ok(search::filter(&self.list_records()?, query))
    }

    pub fn summarize(&self, student: &Student) -> StudentSummary {
        StudentSummary {
            student: student.clone(),
            expires_in: self.expires_in_text(student),
            enrollment_label: student.profile.enrollment_type.label(),
        }
    }

    fn expires_in_text(&self, student: &Student) -> Option<String> {
        let today = self.today();
        student
            .profile
            .inactive_on
            .map(|on| lifecycle::expires_in(on, today).to_string())
    }

    /// Advisory notices for changing record `id` to `submitted_status`.
    pub fn edit_notices(
        &self,
        id: DbId,
        submitted_status: ActivityStatus,
    ) -> ServiceResult<Vec<EditNotice>> {
        let stored = self
            .repo
            .find_by_id(id)
            .ok_or(CoreError::NotFound { entity: STUDENT, id })?;
        Ok(lifecycle::edit_notices(&stored, submitted_status, self.today()))
    }

    // -- writes ---------------------------------------------------------------

    /// Validate and store a new record.
    pub fn add_record(&self, draft: StudentDraft) -> ServiceResult<Student> {
        if let Err(err) = validate_draft(&draft) {
            tracing::warn!(error = %err, "Rejected new student");
            return Err(err.into());
        }

        let student = self.repo.add(draft).inspect_err(|err| {
            tracing::warn!(error = %err, "Rejected new student");
        })?;

        if let Some(actor) = self.current_actor() {
            self.append_audit(
                &actor,
                AuditAction::Add,
                &student,
                audit::add_details(student.phone_number()),
            );
        }
        Ok(student)
    }

    /// Validate and store an edit of an existing record.
    ///
    /// Moving a record from inactive to active clears its reason and
    /// scheduled date. On any error the stored record is unchanged.
    pub fn update_record(&self, submitted: Student) -> ServiceResult<Student> {
        let id = submitted.id;
        let Some(stored) = self.repo.find_by_id(id) else {
            tracing::warn!(student_id = id, "Rejected update of unknown student");
            return Err(CoreError::NotFound { entity: STUDENT, id }.into());
        };

        let previous = lifecycle::evaluate(&stored, self.today(), EvaluationContext::Sweep).status;
        let student = lifecycle::normalize_edit(previous, submitted);

        if let Err(err) = validate_draft(&student.profile) {
            tracing::warn!(student_id = id, error = %err, "Rejected student update");
            return Err(err.into());
        }

        let student = self.repo.update(student).inspect_err(|err| {
            tracing::warn!(student_id = id, error = %err, "Rejected student update");
        })?;

        if let Some(actor) = self.current_actor() {
            self.append_audit(&actor, AuditAction::Update, &student, audit::update_details());
        }
        Ok(student)
    }

    /// Bulk-load records. Nothing is audited.
    ///
    /// The whole batch is checked before the first record is stored, so a
    /// rejected batch leaves the repository as it was.
    pub fn seed(&self, drafts: Vec<StudentDraft>) -> ServiceResult<Vec<Student>> {
        let mut phones = HashSet::with_capacity(drafts.len());
        for draft in &drafts {
            validate_draft(draft)?;
            let taken = !phones.insert(draft.phone_number.as_str())
                || self.repo.find_by_phone(&draft.phone_number).is_some();
            if taken {
                tracing::warn!(phone_number = %draft.phone_number, "Rejected seed batch");
                return Err(CoreError::duplicate("phone_number", DUPLICATE_PHONE_MESSAGE).into());
            }
        }

        let mut out = Vec::with_capacity(drafts.len());
        for draft in drafts {
            out.push(self.repo.add(draft)?);
        }
        tracing::info!(count = out.len(), "Seeded student records");
        Ok(out)
    }

    // -- audit ----------------------------------------------------------------

    pub fn append_audit(
        &self,
        actor: &Actor,
        action: AuditAction,
        subject: &Student,
        details: impl Into<String>,
    ) -> AuditLog {
        self.audit.append(CreateAuditLog::new(
            actor,
            action,
            subject.id,
            subject.name(),
            details,
        ))
    }

    /// Audit entries, newest first.
    pub fn list_audit(&self) -> Vec<AuditLog> {
        self.audit.list()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
