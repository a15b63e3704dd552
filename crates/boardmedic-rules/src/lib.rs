pub mod knowledge;
pub mod rules;

pub use knowledge::{CostRange, FailureKnowledge, KnowledgeBase, TimeRange};
pub use rules::{InferenceRule, MeasurementRange, RuleCondition, RuleConclusion, builtin_rules};
