// Field verifications

use crate::Rule;
use std::fmt;
use std::sync::Arc;

/// Binds one field path to an ordered list of rules.
///
/// Field paths use `.` to reach nested fields (`user.title`) and array
/// elements (`items.0`).
#[derive(Clone)]
pub struct Verification {
    field: String,
    rules: Vec<Arc<dyn Rule>>,
}

impl Verification {
    /// Start a verification with no rules.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule.
    pub fn rule(mut self, rule: impl Rule) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Append a rule shared with other verifications.
    pub fn shared_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }
}

impl fmt::Debug for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verification")
            .field("field", &self.field)
            .field(
                "rules",
                &self.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Build a verification from already shared rules.
pub fn verify<I>(field: impl Into<String>, rules: I) -> Verification
where
    I: IntoIterator<Item = Arc<dyn Rule>>,
{
    Verification {
        field: field.into(),
        rules: rules.into_iter().collect(),
    }
}

/// Build a [`Verification`] from a field path and any number of rules.
///
/// ```
/// use verity_validation::{verify, Present, Slice};
///
/// let verification = verify!("user.tags", Present, Slice);
/// assert_eq!(verification.field(), "user.tags");
/// assert_eq!(verification.rules().len(), 2);
/// ```
#[macro_export]
macro_rules! verify {
    ($field:expr $(, $rule:expr)* $(,)?) => {
        $crate::Verification::new($field)$(.rule($rule))*
    };
}
