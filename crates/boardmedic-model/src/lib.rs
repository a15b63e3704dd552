pub mod case;
pub mod diagnostic;
pub mod failure;
pub mod measurement;
pub mod symptom;

pub use case::{
    ComponentReplacement, HistoricalPatternMatch, RepairCase, RepairStep, StepKind,
    ValidationResult, ValidationTest,
};
pub use diagnostic::{
    DiagnosticResult, FailurePoint, PowerRouteAnalysis, ProbableCause, RailReading,
    RegulatorStatus, RepairAction, RepairRecommendation, RouteIntegrity,
};
pub use failure::{Difficulty, FailurePattern};
pub use measurement::{AnomalyType, SensingMeasurement};
pub use symptom::{Severity, Symptom, SymptomType};
