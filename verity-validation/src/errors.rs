// Validation errors

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::panic::Location;
use thiserror::Error;
use verity_core::{Error, HttpStatus, Level, Stack};

/// Reason a rule rejected a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("must be present")]
    MustBePresent,

    #[error("must be a slice")]
    MustBeASlice,

    #[error("is required")]
    Required,

    #[error("{0}")]
    Custom(String),
}

impl RuleError {
    /// A rule-specific reason, phrased to follow the field path
    /// (`"must be positive"` reads as `field age must be positive`).
    pub fn custom(reason: impl Into<String>) -> Self {
        RuleError::Custom(reason.into())
    }
}

/// One failing (field, rule) pair.
///
/// Displays as `field <path> <reason>` and is decorated with a stack
/// snapshot, status 422 and level INFO, all reachable through
/// [`verity_core::find_stack`], [`verity_core::find_status`] and
/// [`verity_core::find_level`].
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field path that failed validation
    pub field: String,

    /// Rule-specific reason
    pub message: String,

    /// Name of the rule that failed
    pub constraint: &'static str,

    error: Error,
}

impl ValidationError {
    /// Create a violation whose stack snapshot points at the caller.
    #[track_caller]
    pub fn new(field: impl Into<String>, constraint: &'static str, cause: RuleError) -> Self {
        Self::at(field, constraint, cause, Location::caller())
    }

    /// Create a violation whose stack snapshot is attributed to `location`.
    pub fn at(
        field: impl Into<String>,
        constraint: &'static str,
        cause: RuleError,
        location: &'static Location<'static>,
    ) -> Self {
        let field = field.into();
        let message = cause.to_string();
        let error = Error::at(format!("field {} {}", field, message), location)
            .with_source(cause)
            .with_status(HttpStatus::UnprocessableEntity)
            .with_level(Level::Info);

        Self {
            field,
            message,
            constraint,
            error,
        }
    }

    pub fn stack(&self) -> Option<&Stack> {
        self.error.stack()
    }

    pub fn status(&self) -> Option<HttpStatus> {
        self.error.status()
    }

    pub fn level(&self) -> Option<Level> {
        self.error.level()
    }

    /// The decorated error carried by this violation.
    pub fn as_error(&self) -> &Error {
        &self.error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// Serialized as it is reported to API clients.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 3)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("constraint", self.constraint)?;
        state.end()
    }
}

// Stack snapshots differ between calls; equality covers what was reported.
impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.message == other.message
            && self.constraint == other.constraint
            && self.error.status() == other.error.status()
            && self.error.level() == other.error.level()
    }
}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Status of the whole collection: 422 for any violation.
    pub fn status(&self) -> HttpStatus {
        HttpStatus::UnprocessableEntity
    }

    /// `Ok(())` when empty.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// JSON body for an HTTP 422 response.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": self.status(),
            "errors": self.errors,
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
