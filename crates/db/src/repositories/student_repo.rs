//! Repository for student records.

use std::collections::HashMap;

use cohort_core::error::CoreError;
use cohort_core::student::{Student, StudentDraft};
use cohort_core::types::DbId;
use parking_lot::RwLock;

/// Message reported when a phone number belongs to another record.
pub const DUPLICATE_PHONE_MESSAGE: &str = "This phone number is already registered";

/// Entity name used in [`CoreError::NotFound`].
const ENTITY: &str = "student";

/// Canonical owner of the student record set.
///
/// Implementations assign ids and enforce phone uniqueness. They never
/// inspect why a record changed and never write audit entries.
pub trait StudentRepository: Send + Sync {
    /// Every record, in insertion order.
    fn list(&self) -> Vec<Student>;

    fn find_by_id(&self, id: DbId) -> Option<Student>;

    /// Exact match on the stored phone number.
    fn find_by_phone(&self, phone_number: &str) -> Option<Student>;

    /// Store a new record under a fresh id.
    ///
    /// Fails with [`CoreError::Validation`] if the phone number is taken.
    fn add(&self, draft: StudentDraft) -> Result<Student, CoreError>;

    /// Replace the record with the same id, keeping its position.
    ///
    /// Fails with [`CoreError::NotFound`] if the id is unknown and with
    /// [`CoreError::Validation`] if the phone number belongs to another id.
    fn update(&self, student: Student) -> Result<Student, CoreError>;

    /// Replace the record only if it still equals `expected`.
    ///
    /// Returns `Ok(false)` and leaves storage alone when the stored record
    /// has changed since `expected` was read. Errors as [`update`](Self::update).
    fn update_if_unchanged(&self, expected: &Student, student: Student) -> Result<bool, CoreError>;
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
struct State {
    records: Vec<Student>,
    by_phone: HashMap<String, DbId>,
    last_id: DbId,
}

impl State {
    fn position(&self, id: DbId) -> Option<usize> {
        self.records.iter().position(|s| s.id == id)
    }

    fn phone_owner(&self, phone_number: &str) -> Option<DbId> {
        self.by_phone.get(phone_number).copied()
    }

    fn replace(&mut self, student: Student) -> Result<Student, CoreError> {
        let Some(index) = self.position(student.id) else {
            return Err(CoreError::NotFound {
                entity: ENTITY,
                id: student.id,
            });
        };

        match self.phone_owner(&student.profile.phone_number) {
            Some(owner) if owner != student.id => {
                tracing::debug!(
                    student_id = student.id,
                    owner_id = owner,
                    "Rejected duplicate phone on update"
                );
                return Err(CoreError::duplicate("phone_number", DUPLICATE_PHONE_MESSAGE));
            }
            _ => {}
        }

        let previous_phone = self.records[index].profile.phone_number.clone();
        if previous_phone != student.profile.phone_number {
            self.by_phone.remove(&previous_phone);
            self.by_phone
                .insert(student.profile.phone_number.clone(), student.id);
        }
        self.records[index] = student.clone();

        tracing::debug!(student_id = student.id, "Student record updated");
        Ok(student)
    }
}

/// Process-memory repository.
///
/// The uniqueness check, id assignment and write happen under one write
/// guard, so concurrent writers cannot register the same phone twice.
#[derive(Default)]
pub struct InMemoryStudentRepo {
    state: RwLock<State>,
}

impl InMemoryStudentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }
}

impl StudentRepository for InMemoryStudentRepo {
    fn list(&self) -> Vec<Student> {
        self.state.read().records.clone()
    }

    fn find_by_id(&self, id: DbId) -> Option<Student> {
        let state = self.state.read();
        state.position(id).map(|i| state.records[i].clone())
    }

    fn find_by_phone(&self, phone_number: &str) -> Option<Student> {
        let state = self.state.read();
        state
            .phone_owner(phone_number)
            .and_then(|id| state.position(id))
            .map(|i| state.records[i].clone())
    }

    fn add(&self, draft: StudentDraft) -> Result<Student, CoreError> {
        let mut state = self.state.write();

        if state.phone_owner(&draft.phone_number).is_some() {
            tracing::debug!(phone_number = %draft.phone_number, "Rejected duplicate phone on add");
            return Err(CoreError::duplicate("phone_number", DUPLICATE_PHONE_MESSAGE));
        }

        state.last_id += 1;
        let student = Student::new(state.last_id, draft);
        state
            .by_phone
            .insert(student.profile.phone_number.clone(), student.id);
        state.records.push(student.clone());

        tracing::debug!(student_id = student.id, "Student record added");
        Ok(student)
    }

    fn update(&self, student: Student) -> Result<Student, CoreError> {
        self.state.write().replace(student)
    }

    fn update_if_unchanged(&self, expected: &Student, student: Student) -> Result<bool, CoreError> {
        let mut state = self.state.write();

        let index = state.position(student.id).ok_or(CoreError::NotFound {
            entity: ENTITY,
            id: student.id,
        })?;
        if state.records[index] != *expected {
            tracing::debug!(student_id = student.id, "Stored record changed, update skipped");
            return Ok(false);
        }

        state.replace(student)?;
        Ok(true)
    }
}
