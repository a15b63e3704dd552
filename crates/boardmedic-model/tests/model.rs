//! Wire-shape tests for the repair case model.

use boardmedic_model::{
    ComponentReplacement, DiagnosticResult, Difficulty, FailurePattern, HistoricalPatternMatch,
    ProbableCause, RepairAction, RepairCase, RepairRecommendation, RepairStep, Severity, StepKind,
    Symptom, SymptomType,
};

fn sample_case() -> RepairCase {
    let symptoms = vec![
        Symptom::reported("symptom_1", SymptomType::NoVoltage, "No 3.3V output")
            .with_measurement(0.1, 3.3, "V")
            .with_component("regulator_1")
            .with_severity(Severity::Critical),
    ];
    let diagnostic_result = DiagnosticResult {
        id: "diag_1700000000000_0".to_string(),
        timestamp: "2024-05-01T10:00:00.000Z".to_string(),
        symptoms: symptoms.clone(),
        failure_pattern: FailurePattern::VoltageRegulatorFailure,
        confidence: 90,
        probable_causes: vec![ProbableCause {
            id: "cause_1700000000000_0".to_string(),
            description: "Cheap/faulty power supply".to_string(),
            probability: 80,
            reasoning: "Common cause for voltage_regulator_failure".to_string(),
            test_procedure: "Measure input voltage".to_string(),
        }],
        affected_components: vec!["regulator_1".to_string()],
        power_route_analysis: None,
        recommendations: vec![RepairRecommendation {
            id: "rec_1700000000000_0".to_string(),
            priority: 1,
            action: RepairAction::Replace,
            description: "Replace voltage regulator (AMS1117-3.3)".to_string(),
            tools: vec!["Soldering iron".to_string()],
            steps: vec!["Replace voltage regulator (AMS1117-3.3)".to_string()],
            expected_outcome: "Resolve voltage_regulator_failure".to_string(),
            confidence: 85,
        }],
        estimated_difficulty: Difficulty::Medium,
        estimated_time: 15,
        estimated_cost: 0.5,
    };

    RepairCase {
        id: "case_1700000000000_1".to_string(),
        case_number: 1,
        timestamp: "2024-05-01T10:00:00.000Z".to_string(),
        board_type: "ESP32-WROOM-32".to_string(),
        board_id: Some("board_7".to_string()),
        symptoms,
        failure_pattern: FailurePattern::VoltageRegulatorFailure,
        diagnostic_result,
        repair_steps: vec![RepairStep {
            id: "step_1".to_string(),
            order: 1,
            title: "Swap regulator".to_string(),
            description: "Desolder and replace the AMS1117".to_string(),
            component_ids: vec!["regulator_1".to_string()],
            kind: StepKind::Replace,
            warning: Some("Board is heat sensitive".to_string()),
            expected_result: None,
        }],
        replaced_components: Some(vec![ComponentReplacement {
            id: "r1".to_string(),
            component_id: "regulator_1".to_string(),
            component_type: "AMS1117-3.3".to_string(),
            reason: "Shorted output".to_string(),
            cost: 0.76,
        }]),
        validation_test: None,
        validation_result: None,
        repair_success: true,
        estimated_cost: 0.5,
        actual_cost: Some(0.76),
        estimated_time: 15,
        actual_time: Some(25),
        technician_notes: Some("Replaced regulator".to_string()),
        root_cause: None,
        preventive_measures: None,
        client_source: None,
        future_risk_probability: None,
        tags: vec![
            "esp32-wroom-32".to_string(),
            "voltage_regulator_failure".to_string(),
            "no_voltage".to_string(),
            "critical".to_string(),
        ],
    }
}

#[test]
fn repair_case_round_trips_through_json() {
    let case = sample_case();
    let json = serde_json::to_string_pretty(&case).expect("serialize");
    let back: RepairCase = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, case);
}

#[test]
fn repair_case_uses_original_wire_names() {
    let case = sample_case();
    let json = serde_json::to_value(&case).expect("serialize");
    assert_eq!(json["caseNumber"], 1);
    assert_eq!(json["boardType"], "ESP32-WROOM-32");
    assert_eq!(json["failurePattern"], "voltage_regulator_failure");
    assert_eq!(json["repairSteps"][0]["type"], "replace");
    assert_eq!(json["replacedComponents"][0]["componentType"], "AMS1117-3.3");
    assert_eq!(json["diagnosticResult"]["probableCauses"][0]["probability"], 80);
    // Unset optionals stay off the wire entirely.
    assert!(json.get("rootCause").is_none());
    assert!(json.get("validationTest").is_none());
}

#[test]
fn missing_required_fields_fail_deserialization() {
    let err = serde_json::from_str::<RepairCase>("{\"id\": \"case_1\"}");
    assert!(err.is_err());
}

#[test]
fn historical_match_serializes_in_camel_case() {
    let entry = HistoricalPatternMatch {
        case_id: "case_1".to_string(),
        case_number: 1,
        similarity: 100,
        matching_symptoms: vec!["no_voltage: No 3.3V output".to_string()],
        board_type: "ESP32".to_string(),
        repair_success: true,
        resolution: "Replaced AMS1117-3.3".to_string(),
        cost: 0.76,
        time_to_repair: 25,
    };
    let json = serde_json::to_value(&entry).expect("serialize");
    assert_eq!(json["caseNumber"], 1);
    assert_eq!(json["timeToRepair"], 25);
    assert_eq!(json["repairSuccess"], true);
}
