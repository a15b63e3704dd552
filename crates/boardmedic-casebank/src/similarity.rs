//! Search and historical similarity ranking.

use tracing::debug;

use boardmedic_model::{FailurePattern, HistoricalPatternMatch, RepairCase, Symptom};

use crate::store::CaseBank;

/// Board-type weight for an exact (case-insensitive) match.
const BOARD_EXACT_WEIGHT: f64 = 30.0;
/// Board-type weight when the stored type merely contains the query.
const BOARD_PARTIAL_WEIGHT: f64 = 15.0;
/// Weight available to symptom overlap.
const SYMPTOM_WEIGHT: f64 = 70.0;
/// Matches at or below this score are not worth surfacing.
const SIMILARITY_FLOOR: u8 = 30;

impl CaseBank {
    /// Cases whose board type contains the query (case-insensitive).
    pub fn search_by_board_type(&self, board_type: &str) -> Vec<&RepairCase> {
        let needle = board_type.to_lowercase();
        self.all_cases()
            .filter(|c| c.board_type.to_lowercase().contains(&needle))
            .collect()
    }

    /// Cases diagnosed with exactly this failure pattern.
    pub fn search_by_failure_pattern(&self, pattern: FailurePattern) -> Vec<&RepairCase> {
        self.all_cases()
            .filter(|c| c.failure_pattern == pattern)
            .collect()
    }

    /// Cases carrying a tag that contains the query (case-insensitive).
    pub fn search_by_tag(&self, tag: &str) -> Vec<&RepairCase> {
        let needle = tag.to_lowercase();
        self.all_cases()
            .filter(|c| c.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
            .collect()
    }

    /// Score every stored case against a new symptom set and return the
    /// best matches, descending by similarity.
    ///
    /// Matches scoring at or below the floor (30) are dropped; at most
    /// `limit` entries come back.
    pub fn find_similar_cases(
        &self,
        board_type: &str,
        symptoms: &[Symptom],
        limit: usize,
    ) -> Vec<HistoricalPatternMatch> {
        let mut matches: Vec<HistoricalPatternMatch> = self
            .all_cases()
            .filter_map(|case| {
                let similarity = calculate_similarity(board_type, symptoms, case);
                if similarity <= SIMILARITY_FLOOR {
                    return None;
                }
                Some(HistoricalPatternMatch {
                    case_id: case.id.clone(),
                    case_number: case.case_number,
                    similarity,
                    matching_symptoms: matching_symptoms(symptoms, &case.symptoms),
                    board_type: case.board_type.clone(),
                    repair_success: case.repair_success,
                    resolution: summarize_resolution(case),
                    cost: case.actual_cost.unwrap_or(case.estimated_cost),
                    time_to_repair: case.actual_time.unwrap_or(case.estimated_time),
                })
            })
            .collect();

        matches.sort_by(|a, b| b.similarity.cmp(&a.similarity));
        matches.truncate(limit);
        debug!(
            candidates = self.total_cases(),
            surfaced = matches.len(),
            "similarity search"
        );
        matches
    }
}

/// Weighted similarity between a new issue and a stored case, rounded
/// and clamped to [0, 100].
///
/// Board type contributes up to 30 points, symptom overlap up to 70.
/// Overlap counts every cross-pair sharing a symptom type, without
/// deduplication; repeated types can saturate the ratio, which the
/// final clamp absorbs.
fn calculate_similarity(board_type: &str, symptoms: &[Symptom], case: &RepairCase) -> u8 {
    let mut similarity = 0.0;

    let query_board = board_type.to_lowercase();
    let case_board = case.board_type.to_lowercase();
    if query_board == case_board {
        similarity += BOARD_EXACT_WEIGHT;
    } else if case_board.contains(&query_board) {
        similarity += BOARD_PARTIAL_WEIGHT;
    }

    let pairs = matching_symptoms(symptoms, &case.symptoms).len();
    let larger = symptoms.len().max(case.symptoms.len());
    if larger > 0 {
        similarity += (pairs as f64 / larger as f64) * SYMPTOM_WEIGHT;
    }

    similarity.round().clamp(0.0, 100.0) as u8
}

/// Every (query, candidate) pair sharing a symptom type, rendered as
/// "type: description" from the query side.
fn matching_symptoms(query: &[Symptom], candidate: &[Symptom]) -> Vec<String> {
    let mut matches = Vec::new();
    for q in query {
        for c in candidate {
            if q.symptom_type == c.symptom_type {
                matches.push(format!("{}: {}", q.symptom_type, q.description));
            }
        }
    }
    matches
}

/// One-line outcome summary for a historical match.
fn summarize_resolution(case: &RepairCase) -> String {
    if !case.repair_success {
        return "Repair unsuccessful".to_string();
    }
    match case.replaced_components.as_deref() {
        None | Some([]) => "Resolved without component replacement".to_string(),
        Some([only]) => format!("Replaced {}", only.component_type),
        Some(components) => format!("Replaced {} components", components.len()),
    }
}
