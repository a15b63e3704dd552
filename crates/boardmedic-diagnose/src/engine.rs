//! Rule engine matching symptom sets against the static rule table.

use std::collections::BTreeMap;

use tracing::debug;

use boardmedic_model::{Symptom, SymptomType};
use boardmedic_rules::{InferenceRule, RuleCondition, builtin_rules};

/// Engine holding the static rule table.
///
/// Rules are loaded once at construction and never mutated at runtime.
#[derive(Debug)]
pub struct InferenceEngine {
    rules: Vec<InferenceRule>,
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceEngine {
    /// Engine over the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Engine over a caller-supplied rule table.
    pub fn with_rules(rules: Vec<InferenceRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[InferenceRule] {
        &self.rules
    }

    /// Match the rule table against a symptom set.
    ///
    /// A rule matches when every condition is satisfied by at least one
    /// symptom. Matched rules come back sorted ascending by priority
    /// value (1 = most authoritative); ties keep table order.
    pub fn apply_rules(&self, symptoms: &[Symptom]) -> Vec<&InferenceRule> {
        if symptoms.is_empty() {
            return Vec::new();
        }

        // Index symptoms by type so each condition scans only its own kind.
        let mut by_type: BTreeMap<SymptomType, Vec<&Symptom>> = BTreeMap::new();
        for symptom in symptoms {
            by_type.entry(symptom.symptom_type).or_default().push(symptom);
        }

        let mut matched: Vec<&InferenceRule> = self
            .rules
            .iter()
            .filter(|rule| {
                rule.conditions
                    .iter()
                    .all(|condition| condition_holds(condition, &by_type))
            })
            .collect();

        matched.sort_by_key(|rule| rule.priority);
        debug!(
            symptoms = symptoms.len(),
            matched = matched.len(),
            "applied inference rules"
        );
        matched
    }
}

/// A condition holds when some symptom of its type satisfies the
/// measurement range. Symptoms without a measured value satisfy any
/// range: the range only constrains values that were actually read.
fn condition_holds(
    condition: &RuleCondition,
    by_type: &BTreeMap<SymptomType, Vec<&Symptom>>,
) -> bool {
    let Some(candidates) = by_type.get(&condition.symptom_type) else {
        return false;
    };

    candidates.iter().any(|symptom| {
        match (&condition.measurement_range, symptom.measured_value) {
            (Some(range), Some(value)) => range.contains(value),
            _ => true,
        }
    })
}
