//! Failure pattern enumeration and repair difficulty grades.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named root-cause category produced by the inference engine.
///
/// The enumeration is closed: every rule conclusion and every stored
/// case refers to one of these patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePattern {
    NoPower,
    VoltageRegulatorFailure,
    MicrocontrollerDead,
    CommunicationFailure,
    ShortCircuit,
    OpenCircuit,
    ComponentOverheating,
    FirmwareCorruption,
    BootloaderFailure,
    PowerSupplyFailure,
    Unknown,
}

impl FailurePattern {
    /// All patterns, in declaration order.
    pub const ALL: [FailurePattern; 11] = [
        FailurePattern::NoPower,
        FailurePattern::VoltageRegulatorFailure,
        FailurePattern::MicrocontrollerDead,
        FailurePattern::CommunicationFailure,
        FailurePattern::ShortCircuit,
        FailurePattern::OpenCircuit,
        FailurePattern::ComponentOverheating,
        FailurePattern::FirmwareCorruption,
        FailurePattern::BootloaderFailure,
        FailurePattern::PowerSupplyFailure,
        FailurePattern::Unknown,
    ];

    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePattern::NoPower => "no_power",
            FailurePattern::VoltageRegulatorFailure => "voltage_regulator_failure",
            FailurePattern::MicrocontrollerDead => "microcontroller_dead",
            FailurePattern::CommunicationFailure => "communication_failure",
            FailurePattern::ShortCircuit => "short_circuit",
            FailurePattern::OpenCircuit => "open_circuit",
            FailurePattern::ComponentOverheating => "component_overheating",
            FailurePattern::FirmwareCorruption => "firmware_corruption",
            FailurePattern::BootloaderFailure => "bootloader_failure",
            FailurePattern::PowerSupplyFailure => "power_supply_failure",
            FailurePattern::Unknown => "unknown",
        }
    }

    /// Parse a pattern from its wire name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "no_power" => Some(FailurePattern::NoPower),
            "voltage_regulator_failure" => Some(FailurePattern::VoltageRegulatorFailure),
            "microcontroller_dead" => Some(FailurePattern::MicrocontrollerDead),
            "communication_failure" => Some(FailurePattern::CommunicationFailure),
            "short_circuit" => Some(FailurePattern::ShortCircuit),
            "open_circuit" => Some(FailurePattern::OpenCircuit),
            "component_overheating" => Some(FailurePattern::ComponentOverheating),
            "firmware_corruption" => Some(FailurePattern::FirmwareCorruption),
            "bootloader_failure" => Some(FailurePattern::BootloaderFailure),
            "power_supply_failure" => Some(FailurePattern::PowerSupplyFailure),
            "unknown" => Some(FailurePattern::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for FailurePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repair difficulty grade attached to knowledge entries and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
