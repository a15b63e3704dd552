//! Symptom taxonomy for observed board faults.
//!
//! Symptoms are the input to the inference engine. They are created by
//! the operator or translated from measurement anomalies, and are
//! immutable once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an observed abnormal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomType {
    /// A rail that should carry voltage reads at or near zero.
    NoVoltage,
    /// A rail reads below its expected level.
    LowVoltage,
    /// A rail reads above its expected level.
    HighVoltage,
    /// A communication interface (UART, I2C, ...) does not respond.
    NoCommunication,
    /// A component runs hot, including at idle.
    Overheating,
    /// Electrical noise on a signal or rail.
    Noise,
    /// A fault that comes and goes.
    Intermittent,
    /// Visible physical damage (burns, cracks, lifted pads).
    PhysicalDamage,
}

impl SymptomType {
    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomType::NoVoltage => "no_voltage",
            SymptomType::LowVoltage => "low_voltage",
            SymptomType::HighVoltage => "high_voltage",
            SymptomType::NoCommunication => "no_communication",
            SymptomType::Overheating => "overheating",
            SymptomType::Noise => "noise",
            SymptomType::Intermittent => "intermittent",
            SymptomType::PhysicalDamage => "physical_damage",
        }
    }

    /// Parse a symptom type from its wire name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "no_voltage" => Some(SymptomType::NoVoltage),
            "low_voltage" => Some(SymptomType::LowVoltage),
            "high_voltage" => Some(SymptomType::HighVoltage),
            "no_communication" => Some(SymptomType::NoCommunication),
            "overheating" => Some(SymptomType::Overheating),
            "noise" => Some(SymptomType::Noise),
            "intermittent" => Some(SymptomType::Intermittent),
            "physical_damage" => Some(SymptomType::PhysicalDamage),
            _ => None,
        }
    }
}

impl fmt::Display for SymptomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a symptom, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An observed abnormal condition, optionally tied to a component/pin
/// and a measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    pub id: String,
    #[serde(rename = "type")]
    pub symptom_type: SymptomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub description: String,
    pub severity: Severity,
}

impl Symptom {
    /// Create an operator-entered symptom with default (medium) severity.
    pub fn reported(
        id: impl Into<String>,
        symptom_type: SymptomType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            symptom_type,
            component_id: None,
            pin_id: None,
            measured_value: None,
            expected_value: None,
            unit: None,
            description: description.into(),
            severity: Severity::Medium,
        }
    }

    /// Attach a measured/expected value pair.
    #[must_use]
    pub fn with_measurement(mut self, measured: f64, expected: f64, unit: impl Into<String>) -> Self {
        self.measured_value = Some(measured);
        self.expected_value = Some(expected);
        self.unit = Some(unit.into());
        self
    }

    /// Attach the component under suspicion.
    #[must_use]
    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    /// Override the default severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
