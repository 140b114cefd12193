//! Structured validation failures.

use serde::Serialize;
use thiserror::Error;

/// Which constraint a field violated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field was absent.
    Missing,
    /// The field held a JSON value of the wrong type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// A string was shorter than the declared minimum (in characters).
    TooShort { min: usize },
    /// A number fell outside the declared inclusive bounds.
    OutOfRange { min: f64, max: f64 },
    /// A number had a fractional part where an integer was required.
    NotAnInteger,
}

impl core::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViolationKind::Missing => f.write_str("is required"),
            ViolationKind::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ViolationKind::TooShort { min } => {
                write!(f, "must be at least {min} character(s) long")
            }
            ViolationKind::OutOfRange { min, max } => {
                write!(f, "must be between {min} and {max}")
            }
            ViolationKind::NotAnInteger => f.write_str("must be an integer"),
        }
    }
}

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Field name, or `$` for the input root.
    pub field: &'static str,
    #[serde(flatten)]
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        let message = format!("{field} {kind}");
        Self { field, kind, message }
    }
}

/// Every violation found in one input, in schema field order.
///
/// Never empty: a validation run with no violations succeeds instead.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{} field(s) failed validation: {}", .violations.len(), summary(.violations))]
pub struct ValidationErrors {
    schema: &'static str,
    violations: Vec<FieldViolation>,
}

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub(crate) fn new(schema: &'static str, violations: Vec<FieldViolation>) -> Self {
        Self { schema, violations }
    }

    /// Name of the schema that rejected the input.
    pub fn schema(&self) -> &'static str {
        self.schema
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// The violation recorded for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }
}
