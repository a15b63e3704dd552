use thiserror::Error;

/// Input validation failures raised at the diagnose() boundary.
///
/// These are fatal to the call and surface directly to the caller;
/// everything downstream of a successful validation degrades
/// gracefully instead of erroring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnoseError {
    #[error("invalid symptoms: must be a non-empty list")]
    EmptySymptoms,
    #[error("invalid symptom at index {index}: missing required fields")]
    InvalidSymptom { index: usize },
}

pub type Result<T> = std::result::Result<T, DiagnoseError>;
