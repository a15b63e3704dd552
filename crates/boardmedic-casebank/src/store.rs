//! The in-memory repair case store.
//!
//! The bank owns every `RepairCase` it holds; callers receive clones
//! or references and mutate cases only through the bank's methods.
//! Mutators signal a missing case by returning `false` so call sites
//! can treat absence as a normal, checked outcome.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use tracing::info;

use boardmedic_model::{
    ComponentReplacement, DiagnosticResult, RepairCase, RepairStep, Symptom, ValidationResult,
    ValidationTest,
};

/// In-memory repository of repair cases.
///
/// Construct one per application and pass it by reference; there is no
/// global instance. Case numbers start at 1, increase monotonically,
/// and are never reused, even after deletion.
#[derive(Debug, Default)]
pub struct CaseBank {
    cases: BTreeMap<String, RepairCase>,
    next_case_number: u64,
}

impl CaseBank {
    pub fn new() -> Self {
        Self {
            cases: BTreeMap::new(),
            next_case_number: 1,
        }
    }

    /// Open a new case for a diagnosed board.
    ///
    /// Allocates the next case number, generates the search tags, and
    /// seeds the estimates from the diagnostic result.
    pub fn create_case(
        &mut self,
        board_type: impl Into<String>,
        symptoms: Vec<Symptom>,
        diagnostic_result: DiagnosticResult,
        board_id: Option<String>,
    ) -> RepairCase {
        let board_type = board_type.into();
        let case_number = self.next_case_number;
        self.next_case_number += 1;

        let id = format!("case_{}_{case_number}", Utc::now().timestamp_millis());
        let tags = generate_tags(&board_type, &diagnostic_result, &symptoms);
        let case = RepairCase {
            id: id.clone(),
            case_number,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            board_type,
            board_id,
            symptoms,
            failure_pattern: diagnostic_result.failure_pattern,
            repair_steps: Vec::new(),
            replaced_components: None,
            validation_test: None,
            validation_result: None,
            repair_success: false,
            estimated_cost: diagnostic_result.estimated_cost,
            actual_cost: None,
            estimated_time: diagnostic_result.estimated_time,
            actual_time: None,
            technician_notes: None,
            root_cause: None,
            preventive_measures: None,
            client_source: None,
            future_risk_probability: None,
            tags,
            diagnostic_result,
        };

        info!(case_number, case_id = %id, "opened repair case");
        self.cases.insert(id, case.clone());
        case
    }

    pub fn get_case(&self, case_id: &str) -> Option<&RepairCase> {
        self.cases.get(case_id)
    }

    pub fn get_case_by_number(&self, case_number: u64) -> Option<&RepairCase> {
        self.cases.values().find(|c| c.case_number == case_number)
    }

    /// All stored cases, in id order.
    pub fn all_cases(&self) -> impl Iterator<Item = &RepairCase> {
        self.cases.values()
    }

    /// Append a repair step. Returns false when the case is unknown.
    pub fn add_repair_step(&mut self, case_id: &str, step: RepairStep) -> bool {
        let Some(case) = self.cases.get_mut(case_id) else {
            return false;
        };
        case.repair_steps.push(step);
        true
    }

    /// Record a component swap and fold its cost into `actual_cost`.
    pub fn record_component_replacement(
        &mut self,
        case_id: &str,
        replacement: ComponentReplacement,
    ) -> bool {
        let Some(case) = self.cases.get_mut(case_id) else {
            return false;
        };
        let cost = replacement.cost;
        case.replaced_components
            .get_or_insert_with(Vec::new)
            .push(replacement);
        case.actual_cost = Some(case.actual_cost.unwrap_or(0.0) + cost);
        true
    }

    /// Close out a case with its validation outcome.
    ///
    /// `repair_success` follows the validation verdict. Completion is
    /// allowed even when no repair steps were recorded.
    pub fn complete_case(
        &mut self,
        case_id: &str,
        validation_test: ValidationTest,
        validation_result: ValidationResult,
        actual_time: Option<u32>,
        notes: Option<String>,
    ) -> bool {
        let Some(case) = self.cases.get_mut(case_id) else {
            return false;
        };
        case.repair_success = validation_result.passed;
        case.validation_test = Some(validation_test);
        case.validation_result = Some(validation_result);
        case.actual_time = actual_time;
        if let Some(notes) = notes {
            case.technician_notes = Some(notes);
        }
        info!(case_id = %case_id, success = case.repair_success, "completed repair case");
        true
    }

    /// Merge post-repair learning metadata. Only provided fields are
    /// touched.
    pub fn add_learning_data(
        &mut self,
        case_id: &str,
        root_cause: Option<String>,
        preventive_measures: Option<Vec<String>>,
        client_source: Option<String>,
        future_risk_probability: Option<f64>,
    ) -> bool {
        let Some(case) = self.cases.get_mut(case_id) else {
            return false;
        };
        if let Some(root_cause) = root_cause {
            case.root_cause = Some(root_cause);
        }
        if let Some(preventive_measures) = preventive_measures {
            case.preventive_measures = Some(preventive_measures);
        }
        if let Some(client_source) = client_source {
            case.client_source = Some(client_source);
        }
        if let Some(future_risk_probability) = future_risk_probability {
            case.future_risk_probability = Some(future_risk_probability);
        }
        true
    }

    pub fn delete_case(&mut self, case_id: &str) -> bool {
        self.cases.remove(case_id).is_some()
    }

    pub fn total_cases(&self) -> usize {
        self.cases.len()
    }

    /// Wipe the store and restart numbering at 1. Test/reset utility.
    pub fn clear_all_cases(&mut self) {
        self.cases.clear();
        self.next_case_number = 1;
    }

    /// Insert an externally produced case, keeping the number counter
    /// ahead of it so future cases never collide.
    pub(crate) fn adopt_case(&mut self, case: RepairCase) {
        if case.case_number >= self.next_case_number {
            self.next_case_number = case.case_number + 1;
        }
        self.cases.insert(case.id.clone(), case);
    }
}

/// Search tags: lowercased board type, the failure pattern, each
/// distinct symptom type in first-appearance order, and "critical"
/// when any symptom carries that severity.
fn generate_tags(
    board_type: &str,
    diagnostic_result: &DiagnosticResult,
    symptoms: &[Symptom],
) -> Vec<String> {
    let mut tags = vec![
        board_type.to_lowercase(),
        diagnostic_result.failure_pattern.as_str().to_string(),
    ];
    for symptom in symptoms {
        let tag = symptom.symptom_type.as_str();
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    if symptoms.iter().any(|s| s.severity.is_critical()) {
        tags.push("critical".to_string());
    }
    tags
}
