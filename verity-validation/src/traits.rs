// Rule contract

use crate::RuleError;
use std::any::TypeId;
use std::sync::Arc;
use verity_core::Value;

/// A stateless check applied to the value of one field.
///
/// Rules only run against absent fields when some rule of the verification
/// mandates presence (see [`Rule::mandates_presence`]); otherwise an absent
/// field is skipped entirely.
pub trait Rule: Send + Sync + 'static {
    /// Check a resolved field value.
    fn verify(&self, value: &Value) -> Result<(), RuleError>;

    /// Prerequisite rules that run before this one. None by default.
    fn require(&self) -> Vec<Arc<dyn Rule>> {
        Vec::new()
    }

    /// Label reported as the constraint of a violation.
    fn name(&self) -> &'static str {
        "custom"
    }

    /// Concrete type of the rule. Identifies rules when prerequisites are
    /// expanded; not meant to be overridden.
    fn rule_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// A rule that lists its own type as a prerequisite is a presence gate:
    /// the field is checked even when absent.
    fn mandates_presence(&self) -> bool {
        let own = self.rule_type_id();
        self.require().iter().any(|rule| rule.rule_type_id() == own)
    }
}

impl<F> Rule for F
where
    F: Fn(&Value) -> Result<(), RuleError> + Send + Sync + 'static,
{
    fn verify(&self, value: &Value) -> Result<(), RuleError> {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gate;

    impl Rule for Gate {
        fn verify(&self, _value: &Value) -> Result<(), RuleError> {
            Ok(())
        }

        fn require(&self) -> Vec<Arc<dyn Rule>> {
            vec![Arc::new(Gate)]
        }
    }

    struct NeedsGate;

    impl Rule for NeedsGate {
        fn verify(&self, _value: &Value) -> Result<(), RuleError> {
            Ok(())
        }

        fn require(&self) -> Vec<Arc<dyn Rule>> {
            vec![Arc::new(Gate)]
        }
    }

    #[test]
    fn test_default_name_is_custom() {
        assert_eq!(Gate.name(), "custom");
        assert_eq!(NeedsGate.name(), "custom");
        assert_ne!(Gate.rule_type_id(), NeedsGate.rule_type_id());
    }

    #[test]
    fn test_closures_have_distinct_identities() {
        let low = |_: &Value| -> Result<(), RuleError> { Ok(()) };
        let high = |_: &Value| -> Result<(), RuleError> { Ok(()) };

        assert_eq!(low.name(), high.name());
        assert_ne!(low.rule_type_id(), high.rule_type_id());
    }

    #[test]
    fn test_self_requirement_mandates_presence() {
        assert!(Gate.mandates_presence());
        assert!(!NeedsGate.mandates_presence());
    }

    #[test]
    fn test_closure_rule() {
        let positive = |value: &Value| match value.raw().and_then(|raw| raw.as_i64()) {
            Some(n) if n > 0 => Ok(()),
            _ => Err(RuleError::custom("must be positive")),
        };

        assert!(positive.verify(&Value::new(serde_json::json!(3))).is_ok());
        assert!(positive.verify(&Value::new(serde_json::json!(-3))).is_err());
        assert!(positive.require().is_empty());
    }
}
