//! Rule evaluator: pure logic, no repository access.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{FieldRule, FieldViolation, RuleType, ValidationResult, STUDENT_RULES};
use crate::error::CoreError;
use crate::student::{ActivityStatus, StudentDraft};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid regex")
});

// `\d` is Unicode-aware in `regex`; phone numbers are ASCII digits only.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("valid regex"));

/// Whether `value` matches the accepted email address grammar.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether `value` is exactly 12 ASCII digits.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Evaluate all rules against a single draft.
pub fn evaluate_rules(rules: &[FieldRule], draft: &StudentDraft) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, draft))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Run [`STUDENT_RULES`] and fail with [`CoreError::Validation`] on any violation.
pub fn validate_draft(draft: &StudentDraft) -> Result<(), CoreError> {
    evaluate_rules(STUDENT_RULES, draft)
        .into_result()
        .map_err(CoreError::Validation)
}

// ---------------------------------------------------------------------------
// Field lookup
// ---------------------------------------------------------------------------

enum FieldValue<'a> {
    Text(&'a str),
    Amount(f64),
    Missing,
}

fn field_value<'a>(draft: &'a StudentDraft, field: &str) -> FieldValue<'a> {
    match field {
        "name" => FieldValue::Text(&draft.name),
        "email" => FieldValue::Text(&draft.email),
        "phone_number" => FieldValue::Text(&draft.phone_number),
        "country" => FieldValue::Text(&draft.country),
        "state" => FieldValue::Text(&draft.state),
        "address" => FieldValue::Text(&draft.address),
        "government_id_proof" => FieldValue::Text(&draft.government_id_proof),
        "inactivity_reason" => draft
            .inactivity_reason
            .as_deref()
            .map_or(FieldValue::Missing, FieldValue::Text),
        "amount_paid" => FieldValue::Amount(draft.amount_paid),
        "due_amount" => FieldValue::Amount(draft.due_amount),
        "discount" => FieldValue::Amount(draft.discount),
        "incentives_paid" => FieldValue::Amount(draft.incentives_paid),
        _ => FieldValue::Missing,
    }
}

// ---------------------------------------------------------------------------
// Rule dispatch
// ---------------------------------------------------------------------------

fn evaluate_single_rule(rule: &FieldRule, draft: &StudentDraft) -> Option<FieldViolation> {
    let value = field_value(draft, rule.field);

    let failed = match rule.rule_type {
        RuleType::Required => is_blank(&value),
        RuleType::Email => matches!(value, FieldValue::Text(s) if !s.is_empty() && !is_valid_email(s)),
        RuleType::PhoneFormat => {
            matches!(value, FieldValue::Text(s) if !s.is_empty() && !is_valid_phone(s))
        }
        RuleType::NonNegative => matches!(value, FieldValue::Amount(n) if n.is_finite() && n < 0.0),
        RuleType::RequiredWhenInactive => {
            draft.activity_status == ActivityStatus::Inactive && is_blank(&value)
        }
    };

    failed.then(|| violation(rule))
}

fn is_blank(value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(s) => s.trim().is_empty(),
        FieldValue::Amount(n) => !n.is_finite(),
        FieldValue::Missing => true,
    }
}

fn violation(rule: &FieldRule) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        rule_type: rule.rule_type.as_str().to_string(),
        message: rule.message.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
