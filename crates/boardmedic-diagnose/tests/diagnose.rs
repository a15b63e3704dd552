//! Integration tests for the diagnostic orchestrator.

use boardmedic_diagnose::{DiagnoseError, Diagnostician};
use boardmedic_model::{
    Difficulty, FailurePattern, FailurePoint, RepairAction, RouteIntegrity, Severity, Symptom,
    SymptomType,
};

fn symptom(id: &str, kind: SymptomType, description: &str) -> Symptom {
    Symptom::reported(id, kind, description)
}

#[test]
fn dead_rail_fires_regulator_rule() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "No 3.3V output").with_measurement(
            0.1, 3.3, "V",
        ),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    assert_eq!(
        result.failure_pattern,
        FailurePattern::VoltageRegulatorFailure
    );
    // rule_001 confidence 85 plus one-symptom bonus.
    assert_eq!(result.confidence, 90);
}

#[test]
fn degraded_rail_fires_low_voltage_rule() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::LowVoltage, "3.3V rail sagging").with_measurement(
            2.2, 3.3, "V",
        ),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    assert_eq!(
        result.failure_pattern,
        FailurePattern::VoltageRegulatorFailure
    );
    assert_eq!(result.confidence, 80);
}

#[test]
fn silent_uart_prefers_firmware_over_dead_mcu() {
    // rule_003 (priority 3) and rule_005 (priority 4) both match a
    // no_communication symptom; the lower priority value wins.
    let diagnostician = Diagnostician::new();
    let symptoms = vec![symptom(
        "symptom_1",
        SymptomType::NoCommunication,
        "UART silent during boot",
    )];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    assert_eq!(result.failure_pattern, FailurePattern::FirmwareCorruption);
}

#[test]
fn out_of_range_measurement_disarms_rule_and_falls_back() {
    // A no_voltage reading of 2.0V misses rule_001's <= 0.5V window, so
    // no rule matches and direct inspection concludes no_power.
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "Rail reads half scale").with_measurement(
            2.0, 3.3, "V",
        ),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    assert_eq!(result.failure_pattern, FailurePattern::NoPower);
    assert_eq!(result.confidence, 55);
}

#[test]
fn fallback_precedence_overheating_then_communication() {
    let diagnostician = Diagnostician::new();

    // Physical damage alone matches nothing and stays unknown.
    let result = diagnostician
        .diagnose(&[symptom(
            "symptom_1",
            SymptomType::PhysicalDamage,
            "Cracked solder joints",
        )])
        .expect("diagnose");
    assert_eq!(result.failure_pattern, FailurePattern::Unknown);

    // A critical no_communication symptom is excluded from the
    // communication_failure fallback.
    let result = diagnostician
        .diagnose(&[
            symptom("symptom_1", SymptomType::PhysicalDamage, "Burn mark"),
            symptom("symptom_2", SymptomType::NoCommunication, "I2C bus silent")
                .with_severity(Severity::Critical),
        ])
        .expect("diagnose");
    // rule_003 still matches no_communication, so the rule conclusion
    // wins over any fallback here.
    assert_eq!(result.failure_pattern, FailurePattern::FirmwareCorruption);
}

#[test]
fn fallback_covers_communication_failure_when_rules_are_silent() {
    // The built-in table always has a rule for no_communication, so
    // drive the fallback path with an empty rule set.
    let diagnostician = Diagnostician::with_parts(
        boardmedic_diagnose::InferenceEngine::with_rules(Vec::new()),
        boardmedic_rules::KnowledgeBase::builtin(),
    );

    let result = diagnostician
        .diagnose(&[symptom(
            "symptom_1",
            SymptomType::NoCommunication,
            "SPI bus silent",
        )])
        .expect("diagnose");
    assert_eq!(result.failure_pattern, FailurePattern::CommunicationFailure);

    // With a critical symptom in the set, the same input degrades to
    // unknown instead.
    let result = diagnostician
        .diagnose(&[
            symptom("symptom_1", SymptomType::NoCommunication, "SPI bus silent")
                .with_severity(Severity::Critical),
        ])
        .expect("diagnose");
    assert_eq!(result.failure_pattern, FailurePattern::Unknown);
}

#[test]
fn empty_and_malformed_symptoms_are_rejected() {
    let diagnostician = Diagnostician::new();
    assert_eq!(
        diagnostician.diagnose(&[]),
        Err(DiagnoseError::EmptySymptoms)
    );

    let mut blank = symptom("symptom_1", SymptomType::Noise, "Hiss on audio rail");
    blank.id = String::new();
    assert_eq!(
        diagnostician.diagnose(&[blank]),
        Err(DiagnoseError::InvalidSymptom { index: 0 })
    );

    let mut undescribed = symptom("symptom_1", SymptomType::Noise, "x");
    undescribed.description = "   ".to_string();
    assert_eq!(
        diagnostician.diagnose(&[undescribed]),
        Err(DiagnoseError::InvalidSymptom { index: 0 })
    );
}

#[test]
fn confidence_is_capped_at_95() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "No 3.3V output")
            .with_measurement(0.1, 3.3, "V")
            .with_severity(Severity::Critical),
        symptom("symptom_2", SymptomType::Overheating, "Regulator hot to the touch"),
        symptom("symptom_3", SymptomType::Noise, "Supply whine"),
        symptom("symptom_4", SymptomType::Intermittent, "Resets under load"),
        symptom("symptom_5", SymptomType::PhysicalDamage, "Discolored board"),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    assert_eq!(result.confidence, 95);
}

#[test]
fn power_route_blames_regulator_when_input_is_good() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "No 3.3V at regulator output")
            .with_measurement(0.1, 3.3, "V")
            .with_severity(Severity::Critical),
        symptom("symptom_2", SymptomType::LowVoltage, "5V input present").with_measurement(
            5.1, 5.0, "V",
        ),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    let route = result.power_route_analysis.expect("power route analysis");
    assert!(route.input_voltage.present);
    assert!(!route.regulator_status.working);
    assert_eq!(route.route_integrity, RouteIntegrity::Degraded);
    assert_eq!(
        route.suspected_failure_point,
        Some(FailurePoint::VoltageRegulator)
    );
    assert!(
        route
            .recommendations
            .iter()
            .any(|r| r.contains("Replace voltage regulator"))
    );
}

#[test]
fn power_route_blames_input_when_supply_is_dead() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "5V input missing").with_measurement(
            0.0, 5.0, "V",
        ),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    let route = result.power_route_analysis.expect("power route analysis");
    assert!(!route.input_voltage.present);
    assert_eq!(route.route_integrity, RouteIntegrity::Broken);
    assert_eq!(route.suspected_failure_point, Some(FailurePoint::PowerInput));
}

#[test]
fn power_route_absent_without_voltage_symptoms() {
    let diagnostician = Diagnostician::new();
    let result = diagnostician
        .diagnose(&[symptom(
            "symptom_1",
            SymptomType::Overheating,
            "Chip heats at idle",
        )])
        .expect("diagnose");
    assert!(result.power_route_analysis.is_none());
}

#[test]
fn probable_causes_rank_descending_with_positional_procedures() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "No 3.3V output").with_measurement(
            0.2, 3.3, "V",
        ),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    let probabilities: Vec<u8> = result.probable_causes.iter().map(|c| c.probability).collect();
    assert_eq!(probabilities, vec![80, 65, 50]);
    assert_eq!(result.probable_causes[0].description, "Cheap/faulty power supply");
    assert_eq!(
        result.probable_causes[0].test_procedure,
        "Measure input voltage (should be 4.5-6V for AMS1117)"
    );
}

#[test]
fn recommendations_are_prioritized_and_typed() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "No 3.3V output").with_measurement(
            0.2, 3.3, "V",
        ),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    assert_eq!(result.recommendations.len(), 5);
    let priorities: Vec<u8> = result.recommendations.iter().map(|r| r.priority).collect();
    assert_eq!(priorities, vec![1, 2, 3, 4, 5]);
    let confidences: Vec<u8> = result.recommendations.iter().map(|r| r.confidence).collect();
    assert_eq!(confidences, vec![85, 75, 65, 55, 45]);
    assert_eq!(result.recommendations[0].action, RepairAction::Replace);
    // "Check for board damage" reads as a measurement action.
    assert_eq!(result.recommendations[3].action, RepairAction::Measure);
}

#[test]
fn affected_components_deduplicate_in_first_appearance_order() {
    let diagnostician = Diagnostician::new();
    let symptoms = vec![
        symptom("symptom_1", SymptomType::NoVoltage, "No 3.3V output")
            .with_component("regulator_1"),
        symptom("symptom_2", SymptomType::Overheating, "Regulator hot")
            .with_component("regulator_1"),
        symptom("symptom_3", SymptomType::NoCommunication, "UART silent")
            .with_component("esp32_1"),
    ];

    let result = diagnostician.diagnose(&symptoms).expect("diagnose");
    assert_eq!(result.affected_components, vec!["regulator_1", "esp32_1"]);
}

#[test]
fn patterns_without_knowledge_fall_back_to_defaults() {
    let diagnostician = Diagnostician::new();
    // Overheating fires rule_004 -> short_circuit, which has no
    // knowledge entry.
    let result = diagnostician
        .diagnose(&[symptom(
            "symptom_1",
            SymptomType::Overheating,
            "IC heats with no load",
        )])
        .expect("diagnose");

    assert_eq!(result.failure_pattern, FailurePattern::ShortCircuit);
    assert_eq!(result.estimated_difficulty, Difficulty::Medium);
    assert_eq!(result.estimated_time, 30);
    assert_eq!(result.estimated_cost, 1.0);
    assert!(result.probable_causes.is_empty());
    assert!(result.recommendations.is_empty());
}
