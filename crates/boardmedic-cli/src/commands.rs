//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use boardmedic_casebank::CaseBank;
use boardmedic_diagnose::Diagnostician;
use boardmedic_model::Symptom;

use crate::cli::{DiagnoseArgs, ImportPackageArgs, PackageArgs, SimilarArgs, StatsArgs};
use crate::types::{
    DiagnoseOutcome, ImportOutcomeReport, PackageOutcome, PatternStats, StatsOutcome,
};

pub fn run_diagnose(args: &DiagnoseArgs) -> Result<DiagnoseOutcome> {
    let symptoms = load_symptoms(&args.symptoms_file)?;
    let diagnostician = Diagnostician::new();
    let result = diagnostician.diagnose(&symptoms)?;

    let (case, similar) = match &args.casebank {
        Some(path) => {
            let mut bank = load_casebank(path)?;
            // Search the history before the new case joins it.
            let similar = bank.find_similar_cases(&args.board_type, &symptoms, 5);
            let case = bank.create_case(
                args.board_type.clone(),
                symptoms,
                result.clone(),
                args.board_id.clone(),
            );
            save_casebank(path, &bank)?;
            (Some(case), similar)
        }
        None => (None, Vec::new()),
    };

    Ok(DiagnoseOutcome {
        result,
        case,
        similar,
    })
}

pub fn run_similar(args: &SimilarArgs) -> Result<Vec<boardmedic_model::HistoricalPatternMatch>> {
    let symptoms = load_symptoms(&args.symptoms_file)?;
    let bank = load_casebank(&args.casebank)?;
    Ok(bank.find_similar_cases(&args.board_type, &symptoms, args.limit))
}

pub fn run_stats(args: &StatsArgs) -> Result<StatsOutcome> {
    let bank = load_casebank(&args.casebank)?;

    let most_common = bank.most_common_failures(usize::MAX);
    let patterns = most_common
        .iter()
        .map(|entry| PatternStats {
            pattern: entry.pattern,
            cases: entry.count as usize,
            success_rate: bank.success_rate_for_pattern(entry.pattern),
            average_time: bank.average_repair_time(entry.pattern),
            average_cost: bank.average_repair_cost(entry.pattern),
        })
        .collect();

    Ok(StatsOutcome {
        total_cases: bank.total_cases(),
        patterns,
        most_common: bank.most_common_failures(5),
        component_failures: bank.component_failure_stats(),
    })
}

pub fn run_package(args: &PackageArgs) -> Result<PackageOutcome> {
    let bank = load_casebank(&args.casebank)?;

    let case_ids: Vec<String> = if args.cases.is_empty() {
        bank.all_cases().map(|c| c.id.clone()).collect()
    } else {
        args.cases.clone()
    };

    let package = bank
        .create_package(&case_ids, args.author.clone(), args.description.clone())
        .ok_or_else(|| anyhow!("no cases found to package"))?;

    let json = serde_json::to_string_pretty(&package).context("serialize package")?;
    fs::write(&args.out, json)
        .with_context(|| format!("write package to {}", args.out.display()))?;
    info!(package_id = %package.package_id, cases = package.metadata.total_cases,
        "wrote case package");

    Ok(PackageOutcome {
        package_id: package.package_id,
        total_cases: package.metadata.total_cases,
        out_path: args.out.clone(),
    })
}

pub fn run_import_package(args: &ImportPackageArgs) -> Result<ImportOutcomeReport> {
    let data = fs::read_to_string(&args.package_file)
        .with_context(|| format!("read package {}", args.package_file.display()))?;

    let mut bank = load_casebank(&args.casebank)?;
    let import = bank
        .import_package(&data)
        .context("validate case package")?;
    save_casebank(&args.casebank, &bank)?;

    Ok(ImportOutcomeReport {
        import,
        total_cases: bank.total_cases(),
    })
}

/// Read a JSON symptom array from disk.
pub fn load_symptoms(path: &Path) -> Result<Vec<Symptom>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read symptoms from {}", path.display()))?;
    let symptoms: Vec<Symptom> =
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(symptoms)
}

/// Load a casebank file; a missing file is an empty bank.
pub fn load_casebank(path: &Path) -> Result<CaseBank> {
    let mut bank = CaseBank::new();
    if !path.exists() {
        return Ok(bank);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("read casebank {}", path.display()))?;
    let outcome = bank.import_cases(&data);
    if outcome.failed > 0 {
        warn!(
            failed = outcome.failed,
            path = %path.display(),
            "skipped unreadable case records"
        );
    }
    Ok(bank)
}

/// Persist a casebank back to its file.
pub fn save_casebank(path: &Path, bank: &CaseBank) -> Result<()> {
    fs::write(path, bank.export_all_cases())
        .with_context(|| format!("write casebank {}", path.display()))
}
