//! Failure knowledge registry.
//!
//! One read-only entry per known failure pattern: typical causes,
//! diagnostic steps, repair procedures, and cost/time envelopes. The
//! orchestrator degrades to [`KnowledgeBase::DEFAULT_DIFFICULTY`] /
//! `DEFAULT_TIME` / `DEFAULT_COST` for patterns without an entry, so a
//! diagnosis always produces a usable result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use boardmedic_model::{Difficulty, FailurePattern};

/// Inclusive cost envelope in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

/// Inclusive time envelope in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: u32,
    pub max: u32,
}

/// Reference data for one failure pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureKnowledge {
    pub id: String,
    pub failure_pattern: FailurePattern,
    pub common_symptoms: Vec<String>,
    pub typical_causes: Vec<String>,
    pub diagnostic_steps: Vec<String>,
    pub repair_procedures: Vec<String>,
    pub required_tools: Vec<String>,
    pub estimated_cost: CostRange,
    pub estimated_time: TimeRange,
    /// Historical success rate in percent.
    pub success_rate: u8,
    pub difficulty: Difficulty,
}

/// Registry of failure knowledge keyed by pattern.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: BTreeMap<FailurePattern, FailureKnowledge>,
}

impl KnowledgeBase {
    /// Difficulty assumed for patterns without a knowledge entry.
    pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;
    /// Minutes assumed for patterns without a knowledge entry.
    pub const DEFAULT_TIME: u32 = 30;
    /// Cost assumed for patterns without a knowledge entry.
    pub const DEFAULT_COST: f64 = 1.0;

    /// Build the built-in registry.
    pub fn builtin() -> Self {
        let mut base = Self::default();
        for entry in builtin_knowledge() {
            base.entries.insert(entry.failure_pattern, entry);
        }
        base
    }

    pub fn get(&self, pattern: FailurePattern) -> Option<&FailureKnowledge> {
        self.entries.get(&pattern)
    }

    pub fn contains(&self, pattern: FailurePattern) -> bool {
        self.entries.contains_key(&pattern)
    }

    /// Entries in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = &FailureKnowledge> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn builtin_knowledge() -> Vec<FailureKnowledge> {
    vec![
        FailureKnowledge {
            id: "fk_001".to_string(),
            failure_pattern: FailurePattern::VoltageRegulatorFailure,
            common_symptoms: strings(&[
                "No 3.3V output",
                "Low 3.3V output (< 3.0V)",
                "Regulator overheating",
                "No microcontroller activity",
            ]),
            typical_causes: strings(&[
                "Cheap/faulty power supply",
                "Input voltage spike",
                "Shorted output",
                "Component aging",
                "Poor soldering",
            ]),
            diagnostic_steps: strings(&[
                "Measure input voltage (should be 4.5-6V for AMS1117)",
                "Measure output voltage (should be 3.3V ± 0.1V)",
                "Check regulator temperature",
                "Test with no load",
                "Check for shorts on 3.3V rail",
            ]),
            repair_procedures: strings(&[
                "Replace voltage regulator (AMS1117-3.3)",
                "Replace input capacitor (typically 10µF)",
                "Replace output capacitor (typically 22µF)",
                "Check for board damage",
                "Test with known good power supply",
            ]),
            required_tools: strings(&[
                "Soldering iron",
                "Multimeter",
                "Hot air station (optional)",
                "Flux",
            ]),
            estimated_cost: CostRange { min: 0.5, max: 2.0 },
            estimated_time: TimeRange { min: 15, max: 45 },
            success_rate: 92,
            difficulty: Difficulty::Medium,
        },
        FailureKnowledge {
            id: "fk_002".to_string(),
            failure_pattern: FailurePattern::FirmwareCorruption,
            common_symptoms: strings(&[
                "No UART response",
                "Boot loop",
                "Partial boot",
                "Random behavior",
            ]),
            typical_causes: strings(&[
                "Failed firmware upload",
                "Power loss during flashing",
                "Corrupted flash memory",
                "Wrong bootloader",
            ]),
            diagnostic_steps: strings(&[
                "Verify power supply stability (3.3V)",
                "Check boot mode pins",
                "Monitor UART output during boot",
                "Try entering bootloader mode",
                "Test with external programmer",
            ]),
            repair_procedures: strings(&[
                "Enter bootloader mode (hold BOOT, press RESET)",
                "Reflash firmware via UART",
                "Try different baud rate",
                "Use external programmer (JTAG/SWD)",
                "If hardware OK, flash known-good firmware",
            ]),
            required_tools: strings(&["USB-UART adapter", "Computer", "Programming software"]),
            estimated_cost: CostRange { min: 0.0, max: 0.0 },
            estimated_time: TimeRange { min: 10, max: 30 },
            success_rate: 85,
            difficulty: Difficulty::Easy,
        },
        FailureKnowledge {
            id: "fk_003".to_string(),
            failure_pattern: FailurePattern::MicrocontrollerDead,
            common_symptoms: strings(&[
                "No boot",
                "No communication on any interface",
                "Chip is hot or cold",
                "No current draw",
            ]),
            typical_causes: strings(&[
                "ESD damage",
                "Reverse voltage",
                "Overvoltage",
                "Manufacturing defect",
            ]),
            diagnostic_steps: strings(&[
                "Verify 3.3V at VDD pins",
                "Check GND continuity",
                "Measure current consumption",
                "Test crystal oscillator (if present)",
                "Try external programmer",
            ]),
            repair_procedures: strings(&[
                "Verify all power connections",
                "Test with external debugger",
                "If confirmed dead, replace microcontroller",
                "Check for board-level damage",
                "Consider board replacement if BGA package",
            ]),
            required_tools: strings(&["Multimeter", "Hot air station", "Programmer/Debugger"]),
            estimated_cost: CostRange {
                min: 2.0,
                max: 15.0,
            },
            estimated_time: TimeRange { min: 30, max: 120 },
            success_rate: 60,
            difficulty: Difficulty::Hard,
        },
        FailureKnowledge {
            id: "fk_004".to_string(),
            failure_pattern: FailurePattern::PowerSupplyFailure,
            common_symptoms: strings(&[
                "No 5V at input",
                "Voltage drops under load",
                "USB port not working",
                "Fuse blown",
            ]),
            typical_causes: strings(&[
                "Dead USB cable",
                "Blown fuse",
                "Damaged diode",
                "Bad USB connector",
            ]),
            diagnostic_steps: strings(&[
                "Test USB cable with other device",
                "Check fuse continuity",
                "Measure voltage at USB connector",
                "Check protection diode",
                "Look for physical damage",
            ]),
            repair_procedures: strings(&[
                "Replace USB cable",
                "Replace blown fuse",
                "Replace protection diode",
                "Reflow USB connector",
                "Check for shorts before powering",
            ]),
            required_tools: strings(&["Multimeter", "Soldering iron", "Known-good USB cable"]),
            estimated_cost: CostRange { min: 0.0, max: 3.0 },
            estimated_time: TimeRange { min: 5, max: 30 },
            success_rate: 90,
            difficulty: Difficulty::Easy,
        },
    ]
}
