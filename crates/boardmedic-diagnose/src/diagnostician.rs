//! Diagnostic orchestrator.
//!
//! Composes inference output into a full diagnostic result: failure
//! pattern, confidence, ranked probable causes, power route analysis,
//! prioritized repair recommendations, and effort estimates. Apart
//! from id/timestamp generation, a diagnosis is a pure function of its
//! input and the static rule/knowledge tables.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{SecondsFormat, Utc};
use tracing::info;

use boardmedic_model::{
    DiagnosticResult, FailurePattern, ProbableCause, RepairAction, RepairRecommendation, Severity,
    Symptom, SymptomType,
};
use boardmedic_rules::{InferenceRule, KnowledgeBase};

use crate::engine::InferenceEngine;
use crate::error::DiagnoseError;
use crate::power_route::analyze_power_route;

/// Base confidence when no rule matched.
const BASE_CONFIDENCE: u32 = 50;
/// Per-symptom confidence bonus, capped.
const SYMPTOM_BONUS_STEP: u32 = 5;
const SYMPTOM_BONUS_CAP: u32 = 20;
/// Bonus when any symptom is critical.
const CRITICAL_BONUS: u32 = 10;
/// Hard ceiling on reported confidence.
const CONFIDENCE_CAP: u32 = 95;

/// Number of probable causes surfaced per diagnosis.
const MAX_CAUSES: usize = 3;
/// Number of repair recommendations surfaced per diagnosis.
const MAX_RECOMMENDATIONS: usize = 5;

/// The diagnostic orchestrator. Construct one per application and pass
/// it by reference; there is no global instance.
#[derive(Debug)]
pub struct Diagnostician {
    engine: InferenceEngine,
    knowledge: KnowledgeBase,
    sequence: AtomicU64,
}

impl Default for Diagnostician {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostician {
    /// Orchestrator over the built-in rule table and knowledge base.
    pub fn new() -> Self {
        Self::with_parts(InferenceEngine::new(), KnowledgeBase::builtin())
    }

    pub fn with_parts(engine: InferenceEngine, knowledge: KnowledgeBase) -> Self {
        Self {
            engine,
            knowledge,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Perform a diagnosis over a validated symptom set.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnoseError`] when the list is empty or a symptom is
    /// missing its id or description.
    pub fn diagnose(&self, symptoms: &[Symptom]) -> Result<DiagnosticResult, DiagnoseError> {
        validate_symptoms(symptoms)?;

        let now_millis = Utc::now().timestamp_millis();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let id = format!("diag_{now_millis}_{sequence}");

        let matched = self.engine.apply_rules(symptoms);
        let failure_pattern = determine_failure_pattern(symptoms, &matched);
        let confidence = calculate_confidence(symptoms, &matched);
        let probable_causes = self.identify_probable_causes(failure_pattern, now_millis);
        let power_route_analysis = analyze_power_route(symptoms);
        let recommendations = self.generate_recommendations(failure_pattern, now_millis);
        let affected_components = affected_components(symptoms);

        let knowledge = self.knowledge.get(failure_pattern);
        let result = DiagnosticResult {
            id,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            symptoms: symptoms.to_vec(),
            failure_pattern,
            confidence,
            probable_causes,
            affected_components,
            power_route_analysis,
            recommendations,
            estimated_difficulty: knowledge
                .map(|k| k.difficulty)
                .unwrap_or(KnowledgeBase::DEFAULT_DIFFICULTY),
            estimated_time: knowledge
                .map(|k| k.estimated_time.min)
                .unwrap_or(KnowledgeBase::DEFAULT_TIME),
            estimated_cost: knowledge
                .map(|k| k.estimated_cost.min)
                .unwrap_or(KnowledgeBase::DEFAULT_COST),
        };
        info!(
            pattern = %result.failure_pattern,
            confidence = result.confidence,
            "diagnosis complete"
        );
        Ok(result)
    }

    /// Up to three typical causes at decreasing probability, each with
    /// a positionally matched test procedure.
    fn identify_probable_causes(
        &self,
        pattern: FailurePattern,
        now_millis: i64,
    ) -> Vec<ProbableCause> {
        let Some(knowledge) = self.knowledge.get(pattern) else {
            return Vec::new();
        };

        knowledge
            .typical_causes
            .iter()
            .take(MAX_CAUSES)
            .enumerate()
            .map(|(index, cause)| ProbableCause {
                id: format!("cause_{now_millis}_{index}"),
                description: cause.clone(),
                probability: (80 - 15 * index) as u8,
                reasoning: format!("Common cause for {pattern}"),
                test_procedure: knowledge
                    .diagnostic_steps
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| "Visual inspection".to_string()),
            })
            .collect()
    }

    /// Up to five recommendations from the knowledge entry's repair
    /// procedures, priority ascending with position.
    fn generate_recommendations(
        &self,
        pattern: FailurePattern,
        now_millis: i64,
    ) -> Vec<RepairRecommendation> {
        let Some(knowledge) = self.knowledge.get(pattern) else {
            return Vec::new();
        };

        knowledge
            .repair_procedures
            .iter()
            .take(MAX_RECOMMENDATIONS)
            .enumerate()
            .map(|(index, procedure)| RepairRecommendation {
                id: format!("rec_{now_millis}_{index}"),
                priority: (index + 1) as u8,
                action: RepairAction::from_procedure(procedure),
                description: procedure.clone(),
                tools: knowledge.required_tools.clone(),
                steps: vec![procedure.clone()],
                expected_outcome: format!("Resolve {pattern}"),
                confidence: (85 - 10 * index) as u8,
            })
            .collect()
    }
}

fn validate_symptoms(symptoms: &[Symptom]) -> Result<(), DiagnoseError> {
    if symptoms.is_empty() {
        return Err(DiagnoseError::EmptySymptoms);
    }
    for (index, symptom) in symptoms.iter().enumerate() {
        if symptom.id.trim().is_empty() || symptom.description.trim().is_empty() {
            return Err(DiagnoseError::InvalidSymptom { index });
        }
    }
    Ok(())
}

/// Rule conclusion when available, direct symptom inspection otherwise.
fn determine_failure_pattern(
    symptoms: &[Symptom],
    matched: &[&InferenceRule],
) -> FailurePattern {
    if let Some(rule) = matched.first() {
        return rule.conclusion.failure_pattern;
    }

    let critical_count = symptoms
        .iter()
        .filter(|s| s.severity == Severity::Critical)
        .count();
    let has = |kind: SymptomType| symptoms.iter().any(|s| s.symptom_type == kind);

    if has(SymptomType::NoVoltage) {
        FailurePattern::NoPower
    } else if has(SymptomType::Overheating) {
        FailurePattern::ComponentOverheating
    } else if has(SymptomType::NoCommunication) && critical_count == 0 {
        FailurePattern::CommunicationFailure
    } else {
        FailurePattern::Unknown
    }
}

/// Rule confidence (or the base), plus symptom-count and severity
/// bonuses, capped at 95.
fn calculate_confidence(symptoms: &[Symptom], matched: &[&InferenceRule]) -> u8 {
    let mut confidence = matched
        .first()
        .map(|rule| u32::from(rule.conclusion.confidence))
        .unwrap_or(BASE_CONFIDENCE);

    confidence += (symptoms.len() as u32 * SYMPTOM_BONUS_STEP).min(SYMPTOM_BONUS_CAP);
    if symptoms.iter().any(|s| s.severity.is_critical()) {
        confidence += CRITICAL_BONUS;
    }

    confidence.min(CONFIDENCE_CAP) as u8
}

/// Deduplicated component ids in order of first appearance.
fn affected_components(symptoms: &[Symptom]) -> Vec<String> {
    let mut seen = Vec::new();
    for symptom in symptoms {
        if let Some(component_id) = &symptom.component_id
            && !seen.contains(component_id)
        {
            seen.push(component_id.clone());
        }
    }
    seen
}
