use serde::Serialize;

/// A single field-level validation failure.
///
/// Validation collects every violation in a request before failing, so
/// clients see all problems at once rather than one per round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
