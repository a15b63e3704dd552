//! Built-in inference rules.
//!
//! Rules are static condition -> conclusion mappings loaded once at
//! engine construction and never mutated at runtime. Priority 1 is the
//! most authoritative; the engine resolves ties between matched rules
//! by ascending priority value.

use serde::{Deserialize, Serialize};

use boardmedic_model::{FailurePattern, SymptomType};

/// Inclusive measurement window; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl MeasurementRange {
    /// True when `value` lies inside the window.
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min
            && value < min
        {
            return false;
        }
        if let Some(max) = self.max
            && value > max
        {
            return false;
        }
        true
    }
}

/// One condition a symptom set must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    pub symptom_type: SymptomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_range: Option<MeasurementRange>,
}

/// What a rule concludes when all its conditions hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConclusion {
    pub failure_pattern: FailurePattern,
    pub confidence: u8,
    pub reasoning: String,
}

/// A static condition -> conclusion mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRule {
    pub id: String,
    pub name: String,
    pub conditions: Vec<RuleCondition>,
    pub conclusion: RuleConclusion,
    /// Lower value = higher precedence.
    pub priority: u8,
}

/// The built-in rule table, in declaration order.
pub fn builtin_rules() -> Vec<InferenceRule> {
    vec![
        // No 3.3V usually means a dead regulator.
        InferenceRule {
            id: "rule_001".to_string(),
            name: "No 3.3V - Regulator Failure".to_string(),
            conditions: vec![RuleCondition {
                symptom_type: SymptomType::NoVoltage,
                measurement_range: Some(MeasurementRange {
                    min: None,
                    max: Some(0.5),
                }),
            }],
            conclusion: RuleConclusion {
                failure_pattern: FailurePattern::VoltageRegulatorFailure,
                confidence: 85,
                reasoning: "No 3.3V output typically indicates AMS1117 or similar regulator \
                            failure"
                    .to_string(),
            },
            priority: 1,
        },
        // 5V present but 3.3V low suggests a degraded regulator.
        InferenceRule {
            id: "rule_002".to_string(),
            name: "Low 3.3V - Degraded Regulator".to_string(),
            conditions: vec![RuleCondition {
                symptom_type: SymptomType::LowVoltage,
                measurement_range: Some(MeasurementRange {
                    min: Some(1.0),
                    max: Some(3.0),
                }),
            }],
            conclusion: RuleConclusion {
                failure_pattern: FailurePattern::VoltageRegulatorFailure,
                confidence: 75,
                reasoning: "Low 3.3V output suggests degraded or failing voltage regulator"
                    .to_string(),
            },
            priority: 2,
        },
        // UART not responding with good power points at firmware.
        InferenceRule {
            id: "rule_003".to_string(),
            name: "UART Dead with Power - Firmware Issue".to_string(),
            conditions: vec![RuleCondition {
                symptom_type: SymptomType::NoCommunication,
                measurement_range: None,
            }],
            conclusion: RuleConclusion {
                failure_pattern: FailurePattern::FirmwareCorruption,
                confidence: 70,
                reasoning: "UART not responding with proper power suggests firmware corruption \
                            or bootloader failure"
                    .to_string(),
            },
            priority: 3,
        },
        // Component heating at idle points at a short.
        InferenceRule {
            id: "rule_004".to_string(),
            name: "Overheating in Idle - Short Circuit".to_string(),
            conditions: vec![RuleCondition {
                symptom_type: SymptomType::Overheating,
                measurement_range: None,
            }],
            conclusion: RuleConclusion {
                failure_pattern: FailurePattern::ShortCircuit,
                confidence: 80,
                reasoning: "Component heating with no load indicates short circuit or damaged \
                            component"
                    .to_string(),
            },
            priority: 1,
        },
        // No boot with power present.
        InferenceRule {
            id: "rule_005".to_string(),
            name: "No Boot - Microcontroller or Firmware".to_string(),
            conditions: vec![RuleCondition {
                symptom_type: SymptomType::NoCommunication,
                measurement_range: None,
            }],
            conclusion: RuleConclusion {
                failure_pattern: FailurePattern::MicrocontrollerDead,
                confidence: 65,
                reasoning: "Power present but no boot suggests dead microcontroller or corrupt \
                            firmware"
                    .to_string(),
            },
            priority: 4,
        },
    ]
}
