// Built-in rules

use crate::{Rule, RuleError};
use std::sync::Arc;
use verity_core::Value;

/// The field must exist.
///
/// `Present` is its own prerequisite, which makes any verification that
/// includes it (directly or through another rule's prerequisites) run
/// against absent fields instead of skipping them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Present;

impl Rule for Present {
    fn verify(&self, value: &Value) -> Result<(), RuleError> {
        if value.is_absent() {
            Err(RuleError::MustBePresent)
        } else {
            Ok(())
        }
    }

    fn require(&self) -> Vec<Arc<dyn Rule>> {
        vec![Arc::new(Present)]
    }

    fn name(&self) -> &'static str {
        "present"
    }
}

/// The field must be present and not empty (`null`, `""`, `[]` or `{}`).
///
/// Absence is reported by the [`Present`] prerequisite, so this rule only
/// rejects values that exist but are empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn verify(&self, value: &Value) -> Result<(), RuleError> {
        if !value.is_absent() && value.is_empty() {
            Err(RuleError::Required)
        } else {
            Ok(())
        }
    }

    fn require(&self) -> Vec<Arc<dyn Rule>> {
        vec![Arc::new(Present)]
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// The field must be an array.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slice;

impl Rule for Slice {
    fn verify(&self, value: &Value) -> Result<(), RuleError> {
        if value.kind().is_sequence() {
            Ok(())
        } else {
            Err(RuleError::MustBeASlice)
        }
    }

    fn name(&self) -> &'static str {
        "slice"
    }
}
