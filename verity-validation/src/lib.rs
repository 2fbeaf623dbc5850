//! Field validation for Verity
//!
//! Declares which rules apply to which fields of a value and reports every
//! violation as a decorated, classified error.
//!
//! # Examples
//!
//! ## Validating a payload
//!
//! ```
//! use serde_json::json;
//! use verity_validation::{validate, verify, Present, Required, Slice};
//!
//! let payload = json!({
//!     "title": "",
//!     "tags": ["big", "animal"],
//! });
//!
//! let errors = validate(
//!     payload,
//!     &[
//!         verify!("title", Required),
//!         verify!("tags", Slice),
//!         verify!("user.name", Present),
//!         verify!("description", Slice),
//!     ],
//! );
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].to_string(), "field title is required");
//! assert_eq!(errors[1].to_string(), "field user.name must be present");
//! ```
//!
//! `description` is absent and none of its rules mandate presence, so it is
//! not checked at all.
//!
//! ## Custom rules
//!
//! ```
//! use serde_json::json;
//! use verity_validation::{validate, Rule, RuleError, Verification};
//! use verity_core::Value;
//!
//! struct Positive;
//!
//! impl Rule for Positive {
//!     fn verify(&self, value: &Value) -> Result<(), RuleError> {
//!         match value.raw().and_then(|raw| raw.as_f64()) {
//!             Some(n) if n > 0.0 => Ok(()),
//!             _ => Err(RuleError::custom("must be positive")),
//!         }
//!     }
//! }
//!
//! let errors = validate(
//!     json!({"age": -4}),
//!     &[Verification::new("age").rule(Positive)],
//! );
//! assert_eq!(errors[0].to_string(), "field age must be positive");
//! ```
//!
//! ## Error metadata
//!
//! ```
//! use serde_json::json;
//! use verity_core::{find_level, find_stack, find_status, HttpStatus, Level};
//! use verity_validation::{validate, verify, Present};
//!
//! let errors = validate(json!({}), &[verify!("user.title", Present)]);
//!
//! assert_eq!(find_status(&errors[0]), Some(HttpStatus::UnprocessableEntity));
//! assert_eq!(find_level(&errors[0]), Some(Level::Info));
//! assert!(find_stack(&errors[0]).is_some());
//! ```

mod errors;
mod rules;
mod traits;
mod validator;
mod verification;

pub use errors::*;
pub use rules::*;
pub use traits::*;
pub use validator::*;
pub use verification::*;
