//! Repair case types — the durable unit of the case bank.

use serde::{Deserialize, Serialize};

use crate::diagnostic::DiagnosticResult;
use crate::failure::FailurePattern;
use crate::symptom::Symptom;

/// Kind of work a repair step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Inspect,
    Measure,
    Replace,
    Solder,
    Test,
}

/// One step performed during a repair. Steps are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairStep {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub description: String,
    pub component_ids: Vec<String>,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_result: Option<String>,
}

/// A component swapped during the repair. The cost accumulates into the
/// case's `actual_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReplacement {
    pub id: String,
    pub component_id: String,
    pub component_type: String,
    pub reason: String,
    pub cost: f64,
}

/// The functional test run to validate a completed repair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationTest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pass_criteria: String,
    pub failure_actions: Vec<String>,
}

/// Outcome of the validation test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub id: String,
    pub timestamp: String,
    pub test_id: String,
    pub test_name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A persisted record of one diagnose-and-fix episode.
///
/// Cases are owned exclusively by the case bank; callers mutate them
/// only through the bank's methods. Many fields fill in incrementally
/// as the repair progresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairCase {
    pub id: String,
    /// Monotonic, 1-based, unique for the lifetime of the bank.
    pub case_number: u64,
    pub timestamp: String,
    pub board_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    pub symptoms: Vec<Symptom>,
    pub failure_pattern: FailurePattern,
    pub diagnostic_result: DiagnosticResult,
    pub repair_steps: Vec<RepairStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_components: Option<Vec<ComponentReplacement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_test: Option<ValidationTest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_result: Option<ValidationResult>,
    pub repair_success: bool,
    pub estimated_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    /// Minutes.
    pub estimated_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preventive_measures: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future_risk_probability: Option<f64>,
    pub tags: Vec<String>,
}

/// Read-only projection of a historical case scored against a new
/// symptom set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPatternMatch {
    pub case_id: String,
    pub case_number: u64,
    /// Similarity in percent, clamped to [0, 100].
    pub similarity: u8,
    pub matching_symptoms: Vec<String>,
    pub board_type: String,
    pub repair_success: bool,
    pub resolution: String,
    pub cost: f64,
    pub time_to_repair: u32,
}
