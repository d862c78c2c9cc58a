//! Validation rule and result types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// The check a rule performs against its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Text must be non-blank; amounts must be finite numbers.
    Required,
    /// Text, when present, must be a well-formed email address.
    Email,
    /// Text, when present, must be exactly 12 ASCII digits.
    PhoneFormat,
    /// Amounts, when numeric, must not be negative.
    NonNegative,
    /// Text must be non-blank while the submitted status is `INACTIVE`.
    RequiredWhenInactive,
}

impl RuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleType::Required => "required",
            RuleType::Email => "email",
            RuleType::PhoneFormat => "phone_format",
            RuleType::NonNegative => "non_negative",
            RuleType::RequiredWhenInactive => "required_when_inactive",
        }
    }
}

/// One row of the rule table: which field, which check, what to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule_type: RuleType,
    pub message: &'static str,
}

const fn rule(field: &'static str, rule_type: RuleType, message: &'static str) -> FieldRule {
    FieldRule {
        field,
        rule_type,
        message,
    }
}

/// Rules applied to every submitted student, on both add and edit.
///
/// Order matters only for the order of reported violations.
pub const STUDENT_RULES: &[FieldRule] = &[
    rule("name", RuleType::Required, "Name is required"),
    rule("email", RuleType::Required, "Email is required"),
    rule("email", RuleType::Email, "Invalid email address"),
    rule("phone_number", RuleType::Required, "Phone number is required"),
    rule(
        "phone_number",
        RuleType::PhoneFormat,
        "Phone number must be exactly 12 digits",
    ),
    rule("amount_paid", RuleType::Required, "Amount paid is required"),
    rule("amount_paid", RuleType::NonNegative, "Amount must be positive"),
    rule("due_amount", RuleType::Required, "Due amount is required"),
    rule("due_amount", RuleType::NonNegative, "Amount must be positive"),
    rule("discount", RuleType::Required, "Discount is required"),
    rule("discount", RuleType::NonNegative, "Discount must be positive"),
    rule("incentives_paid", RuleType::Required, "Incentives paid is required"),
    rule("incentives_paid", RuleType::NonNegative, "Amount must be positive"),
    rule("country", RuleType::Required, "Country is required"),
    rule("state", RuleType::Required, "State is required"),
    rule("address", RuleType::Required, "Address is required"),
    rule(
        "government_id_proof",
        RuleType::Required,
        "Government ID proof is required",
    ),
    rule(
        "inactivity_reason",
        RuleType::RequiredWhenInactive,
        "Reason is required when status is inactive",
    ),
];

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

/// Aggregated result of evaluating all rules against one draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Convert into `Err` when any rule failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// The violations carried by a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    /// A single uniqueness violation, reported outside the rule table.
    pub fn duplicate(field: &'static str, message: impl Into<String>) -> Self {
        Self(vec![FieldViolation {
            field: field.to_string(),
            rule_type: "unique".to_string(),
            message: message.into(),
        }])
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Whether any violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// The first message reported for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}
