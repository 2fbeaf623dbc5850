// Validation engine

use crate::{Rule, ValidationError, Verification};
use std::any::TypeId;
use std::collections::HashSet;
use std::mem;
use std::panic::Location;
use std::sync::Arc;
use verity_core::Value;
use verity_log::{debug, trace};

const TARGET: &str = "verity::validation";

/// Validate `value` against each verification, in order.
///
/// For every verification the field path is resolved against `value`. An
/// absent field is skipped unless one of its rules, or one of their
/// transitive prerequisites, mandates presence. Otherwise every planned
/// rule runs, and each failure becomes one [`ValidationError`] whose stack
/// snapshot points at the caller of `validate`.
///
/// The result is ordered by verification, then rule, and is empty when
/// everything passed.
///
/// ```
/// use serde_json::json;
/// use verity_validation::{validate, verify, Present, Slice};
///
/// let errors = validate(
///     json!({"title": "Horse", "tags": "animal"}),
///     &[
///         verify!("title", Present),
///         verify!("tags", Slice),
///         verify!("owner.name", Present),
///     ],
/// );
///
/// let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
/// assert_eq!(messages, vec![
///     "field tags must be a slice",
///     "field owner.name must be present",
/// ]);
/// ```
#[track_caller]
pub fn validate(value: impl Into<Value>, verifications: &[Verification]) -> Vec<ValidationError> {
    let location = Location::caller();
    let root = value.into();
    let mut errors = Vec::new();

    for verification in verifications {
        let field = verification.field();
        let field_value = root.get(field);
        let rules = plan(verification.rules());

        if field_value.is_absent() && !rules.iter().any(|rule| rule.mandates_presence()) {
            debug!(target: TARGET, "field {} is absent and optional, skipping", field);
            continue;
        }

        for rule in &rules {
            if let Err(cause) = rule.verify(&field_value) {
                trace!(target: TARGET, "field {} failed {}: {}", field, rule.name(), cause);
                errors.push(ValidationError::at(field, rule.name(), cause, location));
            }
        }
    }

    errors
}

/// Rules to run for one verification: each declared rule preceded by its
/// transitive prerequisites.
///
/// Only stateless (zero-sized) prerequisites are collapsed, by concrete
/// type: one is dropped when a rule of the same type is declared on the
/// verification or already planned. Configured rules and distinct closures
/// always run. A prerequisite whose type is already on the expansion path
/// is dropped, which ends self-requirements and cycles.
fn plan(rules: &[Arc<dyn Rule>]) -> Vec<Arc<dyn Rule>> {
    let declared: HashSet<TypeId> = rules
        .iter()
        .filter_map(|rule| stateless_identity(rule.as_ref()))
        .collect();
    let mut planner = Planner {
        declared,
        planned: HashSet::new(),
        path: Vec::new(),
        rules: Vec::with_capacity(rules.len()),
    };

    for rule in rules {
        planner.path.push(rule.rule_type_id());
        planner.expand(rule.as_ref());
        planner.path.pop();

        if let Some(identity) = stateless_identity(rule.as_ref()) {
            planner.planned.insert(identity);
        }
        planner.rules.push(Arc::clone(rule));
    }

    planner.rules
}

struct Planner {
    declared: HashSet<TypeId>,
    planned: HashSet<TypeId>,
    path: Vec<TypeId>,
    rules: Vec<Arc<dyn Rule>>,
}

impl Planner {
    fn expand(&mut self, rule: &dyn Rule) {
        for prerequisite in rule.require() {
            let type_id = prerequisite.rule_type_id();
            if self.path.contains(&type_id) {
                continue;
            }
            if let Some(identity) = stateless_identity(prerequisite.as_ref()) {
                if self.declared.contains(&identity) || !self.planned.insert(identity) {
                    continue;
                }
            }

            self.path.push(type_id);
            self.expand(prerequisite.as_ref());
            self.path.pop();
            self.rules.push(prerequisite);
        }
    }
}

/// Two instances of a zero-sized rule type are interchangeable.
fn stateless_identity(rule: &dyn Rule) -> Option<TypeId> {
    (mem::size_of_val(rule) == 0).then(|| rule.rule_type_id())
}
