//! Aggregate analytics over the case history.

use std::collections::BTreeMap;

use serde::Serialize;

use boardmedic_model::FailurePattern;

use crate::store::CaseBank;

/// One row of the failure-pattern histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureCount {
    pub pattern: FailurePattern,
    pub count: u64,
}

impl CaseBank {
    /// Percentage of successful repairs for a pattern, rounded; 0 when
    /// no case carries the pattern.
    pub fn success_rate_for_pattern(&self, pattern: FailurePattern) -> u8 {
        let cases = self.search_by_failure_pattern(pattern);
        if cases.is_empty() {
            return 0;
        }
        let successful = cases.iter().filter(|c| c.repair_success).count();
        ((successful as f64 / cases.len() as f64) * 100.0).round() as u8
    }

    /// Mean actual repair time in minutes, rounded, over cases that
    /// recorded one; 0 when none did.
    pub fn average_repair_time(&self, pattern: FailurePattern) -> u32 {
        let times: Vec<u32> = self
            .search_by_failure_pattern(pattern)
            .iter()
            .filter_map(|c| c.actual_time)
            .collect();
        if times.is_empty() {
            return 0;
        }
        let total: u64 = times.iter().map(|&t| u64::from(t)).sum();
        (total as f64 / times.len() as f64).round() as u32
    }

    /// Mean actual repair cost, rounded to cents, over cases that
    /// recorded one; 0 when none did.
    pub fn average_repair_cost(&self, pattern: FailurePattern) -> f64 {
        let costs: Vec<f64> = self
            .search_by_failure_pattern(pattern)
            .iter()
            .filter_map(|c| c.actual_cost)
            .collect();
        if costs.is_empty() {
            return 0.0;
        }
        let mean = costs.iter().sum::<f64>() / costs.len() as f64;
        (mean * 100.0).round() / 100.0
    }

    /// Failure patterns by occurrence, most common first, truncated to
    /// `limit`. Ties keep pattern declaration order.
    pub fn most_common_failures(&self, limit: usize) -> Vec<FailureCount> {
        let mut counts: BTreeMap<FailurePattern, u64> = BTreeMap::new();
        for case in self.all_cases() {
            *counts.entry(case.failure_pattern).or_default() += 1;
        }

        let mut histogram: Vec<FailureCount> = counts
            .into_iter()
            .map(|(pattern, count)| FailureCount { pattern, count })
            .collect();
        histogram.sort_by(|a, b| b.count.cmp(&a.count));
        histogram.truncate(limit);
        histogram
    }

    /// How often each component type was replaced, across all cases.
    pub fn component_failure_stats(&self) -> BTreeMap<String, u64> {
        let mut stats: BTreeMap<String, u64> = BTreeMap::new();
        for case in self.all_cases() {
            for replacement in case.replaced_components.iter().flatten() {
                *stats.entry(replacement.component_type.clone()).or_default() += 1;
            }
        }
        stats
    }
}
