//! In-memory case store for BoardMedic.
//!
//! [`CaseBank`] owns every repair case for the lifetime of a process:
//! creation and incremental mutation, tag and similarity search over
//! the history, aggregate analytics, and JSON transfer including the
//! shareable package format.

pub mod error;
pub mod package;
pub mod similarity;
pub mod stats;
pub mod store;
pub mod transfer;

pub use error::{PackageError, TransferError};
pub use package::{
    CasePackage, PACKAGE_VERSION, PackageImport, PackageMetadata, PackagePreview, preview_package,
};
pub use stats::FailureCount;
pub use store::CaseBank;
pub use transfer::ImportOutcome;
