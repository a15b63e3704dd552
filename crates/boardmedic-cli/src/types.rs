use std::collections::BTreeMap;

use boardmedic_casebank::{FailureCount, PackageImport};
use boardmedic_model::{DiagnosticResult, HistoricalPatternMatch, RepairCase};

/// Outcome of the `diagnose` command.
#[derive(Debug)]
pub struct DiagnoseOutcome {
    pub result: DiagnosticResult,
    /// Present when the diagnosis was recorded into a casebank.
    pub case: Option<RepairCase>,
    /// Historical matches from the casebank, when one was given.
    pub similar: Vec<HistoricalPatternMatch>,
}

/// Per-pattern analytics row for the `stats` command.
#[derive(Debug)]
pub struct PatternStats {
    pub pattern: boardmedic_model::FailurePattern,
    pub cases: usize,
    pub success_rate: u8,
    pub average_time: u32,
    pub average_cost: f64,
}

/// Outcome of the `stats` command.
#[derive(Debug)]
pub struct StatsOutcome {
    pub total_cases: usize,
    pub patterns: Vec<PatternStats>,
    pub most_common: Vec<FailureCount>,
    pub component_failures: BTreeMap<String, u64>,
}

/// Outcome of the `package` command.
#[derive(Debug)]
pub struct PackageOutcome {
    pub package_id: String,
    pub total_cases: usize,
    pub out_path: std::path::PathBuf,
}

/// Outcome of the `import-package` command.
#[derive(Debug)]
pub struct ImportOutcomeReport {
    pub import: PackageImport,
    pub total_cases: usize,
}
