#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cohort_core::audit::Actor;
use cohort_core::clock::{Clock, FixedClock};
use cohort_core::error::CoreError;
use cohort_core::student::{ActivityStatus, EnrollmentType, Student, StudentDraft};
use cohort_core::types::{Date, DbId};
use cohort_db::{AuditLogStore, InMemoryStudentRepo, StudentRepository};
use cohort_service::{Registry, RegistryConfig, SweepMode};
use parking_lot::Mutex;

/// The day every registry built here believes it is.
pub fn today() -> Date {
    day(2024, 6, 15)
}

pub fn day(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

pub fn admin() -> Actor {
    Actor::new("Admin User", "admin@example.com")
}

/// A draft that passes every validation rule.
pub fn draft(name: &str, phone: &str) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone_number: phone.to_string(),
        enrollment_type: EnrollmentType::PaidIntern,
        amount_paid: 5000.0,
        due_amount: 1000.0,
        discount: 0.0,
        incentives_paid: 0.0,
        date_of_joining: day(2024, 1, 10),
        country: "India".to_string(),
        state: "Kerala".to_string(),
        address: "12 Beach Road, Kochi".to_string(),
        government_id_proof: "AADHAAR-1234".to_string(),
        activity_status: ActivityStatus::Active,
        inactivity_reason: None,
        inactive_on: None,
    }
}

/// Same as [`draft`] with a scheduled inactivation date.
pub fn scheduled_draft(name: &str, phone: &str, inactive_on: Date) -> StudentDraft {
    StudentDraft {
        inactive_on: Some(inactive_on),
        ..draft(name, phone)
    }
}

pub fn config(mode: SweepMode) -> RegistryConfig {
    RegistryConfig {
        sweep_mode: mode,
        support_contact: "+91-000-000-0000".to_string(),
        seed_path: None,
    }
}

/// A registry over the given repository, pinned to [`today`].
pub fn registry_with<R: StudentRepository>(repo: Arc<R>, mode: SweepMode) -> Registry<R> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::on(today()));
    let audit = Arc::new(AuditLogStore::new(Arc::clone(&clock)));
    Registry::new(repo, audit, clock, config(mode))
}

pub fn registry(mode: SweepMode) -> Registry<InMemoryStudentRepo> {
    registry_with(Arc::new(InMemoryStudentRepo::new()), mode)
}

// ---------------------------------------------------------------------------
// Counting repository
// ---------------------------------------------------------------------------

/// Wraps the in-memory repository and counts every call made to it.
#[derive(Default)]
pub struct CountingRepo {
    inner: InMemoryStudentRepo,
    calls: AtomicUsize,
    updates: AtomicUsize,
}

impl CountingRepo {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl StudentRepository for CountingRepo {
    fn list(&self) -> Vec<Student> {
        self.hit();
        self.inner.list()
    }

    fn find_by_id(&self, id: DbId) -> Option<Student> {
        self.hit();
        self.inner.find_by_id(id)
    }

    fn find_by_phone(&self, phone_number: &str) -> Option<Student> {
        self.hit();
        self.inner.find_by_phone(phone_number)
    }

    fn add(&self, draft: StudentDraft) -> Result<Student, CoreError> {
        self.hit();
        self.inner.add(draft)
    }

    fn update(&self, student: Student) -> Result<Student, CoreError> {
        self.hit();
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(student)
    }

    fn update_if_unchanged(&self, expected: &Student, student: Student) -> Result<bool, CoreError> {
        self.hit();
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update_if_unchanged(expected, student)
    }
}

// ---------------------------------------------------------------------------
// Interleaving repository
// ---------------------------------------------------------------------------

type Hook = Box<dyn FnOnce(&InMemoryStudentRepo) + Send>;

/// Runs a one-shot write against the inner repository right after the next
/// `list()` snapshot is taken, standing in for a concurrent editor.
#[derive(Default)]
pub struct InterleavingRepo {
    pub inner: InMemoryStudentRepo,
    after_list: Mutex<Option<Hook>>,
}

impl InterleavingRepo {
    pub fn after_next_list(&self, hook: impl FnOnce(&InMemoryStudentRepo) + Send + 'static) {
        *self.after_list.lock() = Some(Box::new(hook));
    }
}

impl StudentRepository for InterleavingRepo {
    fn list(&self) -> Vec<Student> {
        let snapshot = self.inner.list();
        if let Some(hook) = self.after_list.lock().take() {
            hook(&self.inner);
        }
        snapshot
    }

    fn find_by_id(&self, id: DbId) -> Option<Student> {
        self.inner.find_by_id(id)
    }

    fn find_by_phone(&self, phone_number: &str) -> Option<Student> {
        self.inner.find_by_phone(phone_number)
    }

    fn add(&self, draft: StudentDraft) -> Result<Student, CoreError> {
        self.inner.add(draft)
    }

    fn update(&self, student: Student) -> Result<Student, CoreError> {
        self.inner.update(student)
    }

    fn update_if_unchanged(&self, expected: &Student, student: Student) -> Result<bool, CoreError> {
        self.inner.update_if_unchanged(expected, student)
    }
}
