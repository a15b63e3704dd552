//! Shareable case packages.
//!
//! A package wraps one or more cases plus summary metadata so repairs
//! can be shared between workshops without cloud infrastructure.
//! Packages are plain JSON; signing is out of scope.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use boardmedic_model::{FailurePattern, RepairCase};

use crate::error::PackageError;
use crate::store::CaseBank;
use crate::transfer::ImportOutcome;

/// Current package format version.
pub const PACKAGE_VERSION: &str = "1.0";

/// Summary metadata carried alongside the packaged cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    pub total_cases: usize,
    pub board_types: Vec<String>,
    pub failure_patterns: Vec<FailurePattern>,
    pub tags: Vec<String>,
}

/// A shareable bundle of repair cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePackage {
    pub version: String,
    pub package_id: String,
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cases: Vec<RepairCase>,
    pub metadata: PackageMetadata,
}

/// Package metadata surfaced without importing anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePreview {
    pub package_id: String,
    pub created_date: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub total_cases: usize,
    pub board_types: Vec<String>,
    pub failure_patterns: Vec<FailurePattern>,
}

/// Outcome of importing a package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageImport {
    pub package_id: String,
    pub imported: usize,
    pub failed: usize,
}

impl CaseBank {
    /// Bundle the listed cases into a package. Unknown ids are
    /// skipped; `None` when nothing resolves.
    pub fn create_package(
        &self,
        case_ids: &[String],
        author: Option<String>,
        description: Option<String>,
    ) -> Option<CasePackage> {
        let cases: Vec<RepairCase> = case_ids
            .iter()
            .filter_map(|id| self.get_case(id).cloned())
            .collect();
        if cases.is_empty() {
            return None;
        }

        let mut board_types = Vec::new();
        let mut failure_patterns = Vec::new();
        let mut tags = Vec::new();
        for case in &cases {
            if !board_types.contains(&case.board_type) {
                board_types.push(case.board_type.clone());
            }
            if !failure_patterns.contains(&case.failure_pattern) {
                failure_patterns.push(case.failure_pattern);
            }
            for tag in &case.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }

        let now_millis = Utc::now().timestamp_millis();
        Some(CasePackage {
            version: PACKAGE_VERSION.to_string(),
            package_id: package_id(&cases, now_millis),
            created_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            author,
            description,
            metadata: PackageMetadata {
                total_cases: cases.len(),
                board_types,
                failure_patterns,
                tags,
            },
            cases,
        })
    }

    /// Validate and import a package.
    ///
    /// The document must carry the full package shape (version,
    /// package id, cases, metadata); individual cases then import with
    /// the usual per-record tolerance.
    pub fn import_package(&mut self, json: &str) -> Result<PackageImport, PackageError> {
        let package: CasePackage = serde_json::from_str(json)?;
        let cases_json =
            serde_json::to_string(&package.cases).expect("serialize package cases");
        let ImportOutcome {
            imported, failed, ..
        } = self.import_cases(&cases_json);
        Ok(PackageImport {
            package_id: package.package_id,
            imported,
            failed,
        })
    }
}

/// Read package metadata without touching any store.
pub fn preview_package(json: &str) -> Result<PackagePreview, PackageError> {
    let package: CasePackage = serde_json::from_str(json)?;
    Ok(PackagePreview {
        package_id: package.package_id,
        created_date: package.created_date,
        author: package.author,
        description: package.description,
        total_cases: package.metadata.total_cases,
        board_types: package.metadata.board_types,
        failure_patterns: package.metadata.failure_patterns,
    })
}

/// Package ids carry a content-hash tail so packaging the same cases
/// in the same instant stays deterministic.
fn package_id(cases: &[RepairCase], now_millis: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(now_millis.to_le_bytes());
    for case in cases {
        hasher.update(case.id.as_bytes());
        hasher.update(case.case_number.to_le_bytes());
    }
    let digest = hasher.finalize();
    format!("pkg_{now_millis}_{}", hex::encode(&digest[..4]))
}
