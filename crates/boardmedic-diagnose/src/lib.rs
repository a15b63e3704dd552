//! Diagnostic reasoning for BoardMedic.
//!
//! [`InferenceEngine`] matches symptom sets against the static rule
//! table; [`Diagnostician`] composes matched rules, power route
//! analysis, and failure knowledge into a [`DiagnosticResult`].
//!
//! [`DiagnosticResult`]: boardmedic_model::DiagnosticResult

pub mod diagnostician;
pub mod engine;
pub mod error;
pub mod observe;
pub mod power_route;

pub use diagnostician::Diagnostician;
pub use engine::InferenceEngine;
pub use error::{DiagnoseError, Result};
pub use observe::symptoms_from_measurements;
pub use power_route::analyze_power_route;
