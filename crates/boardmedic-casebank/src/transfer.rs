//! JSON import/export for individual cases.
//!
//! Exported JSON is exactly the `RepairCase` wire shape and must
//! round-trip losslessly. Imports deserialize into the typed model
//! before anything enters the store; bulk imports tolerate partial
//! failure and report counts instead of erroring.

use serde::Serialize;
use tracing::{info, warn};

use boardmedic_model::RepairCase;

use crate::error::TransferError;
use crate::store::CaseBank;

/// Result of a bulk import.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub failed: usize,
    pub cases: Vec<RepairCase>,
}

impl CaseBank {
    /// Serialize one case to pretty JSON; `None` when the case is
    /// unknown.
    pub fn export_case(&self, case_id: &str) -> Option<String> {
        let case = self.get_case(case_id)?;
        // RepairCase serialization cannot fail: no maps with non-string
        // keys, no non-finite floats are ever stored.
        Some(serde_json::to_string_pretty(case).expect("serialize repair case"))
    }

    /// Serialize the listed cases (unknown ids are skipped) to a JSON
    /// array.
    pub fn export_cases(&self, case_ids: &[String]) -> String {
        let cases: Vec<&RepairCase> = case_ids
            .iter()
            .filter_map(|id| self.get_case(id))
            .collect();
        serde_json::to_string_pretty(&cases).expect("serialize repair cases")
    }

    /// Serialize every stored case to a JSON array.
    pub fn export_all_cases(&self) -> String {
        let cases: Vec<&RepairCase> = self.all_cases().collect();
        serde_json::to_string_pretty(&cases).expect("serialize repair cases")
    }

    /// Import a single case from JSON.
    ///
    /// The record must deserialize into the full `RepairCase` shape and
    /// carry a non-empty id. The case-number counter advances past the
    /// imported number so subsequent cases never collide.
    pub fn import_case(&mut self, json: &str) -> Result<RepairCase, TransferError> {
        let case: RepairCase = serde_json::from_str(json)?;
        if case.id.trim().is_empty() {
            return Err(TransferError::MissingId);
        }
        info!(case_number = case.case_number, case_id = %case.id, "imported repair case");
        self.adopt_case(case.clone());
        Ok(case)
    }

    /// Import a JSON array of cases, tolerating per-record failure.
    ///
    /// A malformed top-level document counts as one failure; a
    /// malformed element fails alone without aborting the batch.
    pub fn import_cases(&mut self, json: &str) -> ImportOutcome {
        let values: Vec<serde_json::Value> = match serde_json::from_str(json) {
            Ok(values) => values,
            Err(error) => {
                warn!(%error, "rejected case batch");
                return ImportOutcome {
                    imported: 0,
                    failed: 1,
                    cases: Vec::new(),
                };
            }
        };

        let mut outcome = ImportOutcome::default();
        for value in values {
            match serde_json::from_value::<RepairCase>(value) {
                Ok(case) if !case.id.trim().is_empty() => {
                    self.adopt_case(case.clone());
                    outcome.cases.push(case);
                    outcome.imported += 1;
                }
                Ok(_) => outcome.failed += 1,
                Err(error) => {
                    warn!(%error, "skipped malformed case record");
                    outcome.failed += 1;
                }
            }
        }
        info!(
            imported = outcome.imported,
            failed = outcome.failed,
            "case batch import"
        );
        outcome
    }
}
