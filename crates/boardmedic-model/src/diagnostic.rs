//! Diagnostic result types produced by the orchestrator.
//!
//! A `DiagnosticResult` is computed fresh per diagnosis and either
//! consumed directly by the caller or embedded into a repair case.

use serde::{Deserialize, Serialize};

use crate::failure::{Difficulty, FailurePattern};
use crate::symptom::Symptom;

/// One candidate root cause, ranked by probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbableCause {
    pub id: String,
    pub description: String,
    /// Probability in percent, descending across the cause list.
    pub probability: u8,
    pub reasoning: String,
    pub test_procedure: String,
}

/// Kind of action a repair recommendation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairAction {
    Replace,
    Measure,
    Test,
    Reflow,
    Clean,
    Reprogram,
}

impl RepairAction {
    /// Infer the action from a repair procedure description.
    ///
    /// Keyword precedence matches the procedure phrasing in the
    /// knowledge base: "check" counts as a measurement.
    pub fn from_procedure(procedure: &str) -> Self {
        let lower = procedure.to_lowercase();
        if lower.contains("replace") {
            RepairAction::Replace
        } else if lower.contains("measure") || lower.contains("check") {
            RepairAction::Measure
        } else if lower.contains("test") {
            RepairAction::Test
        } else if lower.contains("reflow") {
            RepairAction::Reflow
        } else if lower.contains("clean") {
            RepairAction::Clean
        } else if lower.contains("flash") || lower.contains("program") {
            RepairAction::Reprogram
        } else {
            RepairAction::Test
        }
    }
}

/// A prioritized repair recommendation derived from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairRecommendation {
    pub id: String,
    /// 1 = highest priority.
    pub priority: u8,
    pub action: RepairAction,
    pub description: String,
    pub tools: Vec<String>,
    pub steps: Vec<String>,
    pub expected_outcome: String,
    pub confidence: u8,
}

/// Health of a single power rail reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailReading {
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub expected: f64,
}

/// Regulator section of the power route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatorStatus {
    pub working: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_voltage: Option<f64>,
}

/// Overall integrity of the power delivery chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteIntegrity {
    Good,
    Degraded,
    Broken,
}

/// Where along the power route the failure is suspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePoint {
    PowerInput,
    VoltageRegulator,
    Microcontroller,
    Trace,
}

/// Reasoning about the input -> regulator -> load power chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRouteAnalysis {
    pub input_voltage: RailReading,
    pub regulator_status: RegulatorStatus,
    pub microcontroller_power: RailReading,
    pub route_integrity: RouteIntegrity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspected_failure_point: Option<FailurePoint>,
    pub recommendations: Vec<String>,
}

/// Full output of one diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub id: String,
    pub timestamp: String,
    pub symptoms: Vec<Symptom>,
    pub failure_pattern: FailurePattern,
    /// Overall confidence in percent, capped at 95.
    pub confidence: u8,
    pub probable_causes: Vec<ProbableCause>,
    pub affected_components: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_route_analysis: Option<PowerRouteAnalysis>,
    pub recommendations: Vec<RepairRecommendation>,
    pub estimated_difficulty: Difficulty,
    /// Minutes.
    pub estimated_time: u32,
    /// Currency units.
    pub estimated_cost: f64,
}
