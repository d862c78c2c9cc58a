//! Student validation engine.
//!
//! Provides the declarative rule table and a pure-logic evaluator shared by
//! the add and edit paths. Phone uniqueness needs the whole record set and
//! is enforced by the repository instead.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate_rules, is_valid_email, is_valid_phone, validate_draft};
pub use rules::{FieldRule, FieldViolation, RuleType, ValidationErrors, ValidationResult, STUDENT_RULES};
