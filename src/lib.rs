// Verity - declarative field validation for JSON-shaped data
//
// Values are checked against per-field verifications. Every violation is a
// decorated error carrying a stack snapshot, an HTTP status and a severity
// level.

// Re-export core functionality
pub use verity_core::*;

// Re-export logging
pub use verity_log;

// Re-export optional crates
#[cfg(feature = "validation")]
pub use verity_validation;

// Prelude for common imports
pub mod prelude {
    pub use crate::{Error, HttpStatus, Kind, Level, Value, find_level, find_stack, find_status};

    #[cfg(feature = "validation")]
    pub use verity_validation::{
        Present, Required, Rule, RuleError, Slice, ValidationError, ValidationErrors,
        Verification, validate, verify,
    };
}
