//! Measurement records handed over by the sensing layer.

use serde::{Deserialize, Serialize};

/// Anomaly classification reported alongside a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyType {
    OutOfRange,
    Noise,
    Unstable,
}

impl AnomalyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::OutOfRange => "out_of_range",
            AnomalyType::Noise => "noise",
            AnomalyType::Unstable => "unstable",
        }
    }
}

/// One sensed value from the observation layer.
///
/// The core never talks to hardware; this is the shape the sensing
/// collaborator delivers for translation into symptoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensingMeasurement {
    pub id: String,
    pub component_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_id: Option<String>,
    pub value: f64,
    pub unit: String,
    pub anomaly_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_type: Option<AnomalyType>,
    /// Detector confidence in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
}
