//! Power route analysis: input rail -> regulator -> microcontroller.

use boardmedic_model::{
    FailurePoint, PowerRouteAnalysis, RailReading, RegulatorStatus, RouteIntegrity, Symptom,
    SymptomType,
};

/// Nominal upstream supply voltage.
const INPUT_EXPECTED: f64 = 5.0;
/// Input counts as present above this threshold.
const INPUT_PRESENT_ABOVE: f64 = 4.0;
/// Nominal regulated rail voltage.
const RAIL_EXPECTED: f64 = 3.3;
/// Regulator counts as working above this threshold.
const RAIL_WORKING_ABOVE: f64 = 3.0;

/// Reason about the power delivery chain.
///
/// Only runs when a voltage symptom is present; returns `None`
/// otherwise. The upstream supply symptom is recognized by an
/// "input"/"5v" description, the regulated rail by "3.3v"/"regulator";
/// the first matching symptom in list order wins.
pub fn analyze_power_route(symptoms: &[Symptom]) -> Option<PowerRouteAnalysis> {
    let power_related = symptoms.iter().any(|s| {
        matches!(
            s.symptom_type,
            SymptomType::NoVoltage | SymptomType::LowVoltage
        )
    });
    if !power_related {
        return None;
    }

    let input = symptoms.iter().find(|s| {
        let description = s.description.to_lowercase();
        description.contains("input") || description.contains("5v")
    });
    let regulator = symptoms.iter().find(|s| {
        let description = s.description.to_lowercase();
        description.contains("3.3v") || description.contains("regulator")
    });

    let input_value = input.and_then(|s| s.measured_value);
    let rail_value = regulator.and_then(|s| s.measured_value);

    let input_present = input_value.is_some_and(|v| v > INPUT_PRESENT_ABOVE);
    let regulator_working = rail_value.is_some_and(|v| v > RAIL_WORKING_ABOVE);

    let mut recommendations = Vec::new();
    let mut suspected_failure_point = None;
    if !input_present {
        recommendations.push("Check USB cable and power source".to_string());
        recommendations.push("Test fuse continuity".to_string());
        suspected_failure_point = Some(FailurePoint::PowerInput);
    } else if !regulator_working {
        recommendations.push("Replace voltage regulator".to_string());
        recommendations.push("Check for shorts on output rail".to_string());
        suspected_failure_point = Some(FailurePoint::VoltageRegulator);
    }

    let route_integrity = if input_present && regulator_working {
        RouteIntegrity::Good
    } else if input_present {
        RouteIntegrity::Degraded
    } else {
        RouteIntegrity::Broken
    };

    Some(PowerRouteAnalysis {
        input_voltage: RailReading {
            present: input_present,
            value: input_value,
            expected: INPUT_EXPECTED,
        },
        regulator_status: RegulatorStatus {
            working: regulator_working,
            output_voltage: rail_value,
        },
        microcontroller_power: RailReading {
            present: regulator_working,
            value: rail_value,
            expected: RAIL_EXPECTED,
        },
        route_integrity,
        suspected_failure_point,
        recommendations,
    })
}
