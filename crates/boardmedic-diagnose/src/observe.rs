//! Translation of measurement anomalies into symptoms.
//!
//! The sensing layer is an external collaborator; this is the boundary
//! where its anomaly reports become inference-engine input.

use chrono::Utc;

use boardmedic_model::{AnomalyType, SensingMeasurement, Severity, Symptom, SymptomType};

/// Convert anomalous measurements into symptoms. Measurements without
/// a detected anomaly are skipped.
pub fn symptoms_from_measurements(measurements: &[SensingMeasurement]) -> Vec<Symptom> {
    let now_millis = Utc::now().timestamp_millis();
    measurements
        .iter()
        .enumerate()
        .filter(|(_, m)| m.anomaly_detected)
        .map(|(index, m)| Symptom {
            id: format!("symptom_{now_millis}_{index}"),
            symptom_type: symptom_type_for(m.anomaly_type),
            component_id: Some(m.component_id.clone()),
            pin_id: m.pin_id.clone(),
            measured_value: Some(m.value),
            expected_value: None,
            unit: Some(m.unit.clone()),
            description: format!(
                "Anomaly detected: {}",
                m.anomaly_type.map(|a| a.as_str()).unwrap_or("unknown")
            ),
            severity: severity_for(m.confidence),
        })
        .collect()
}

fn symptom_type_for(anomaly: Option<AnomalyType>) -> SymptomType {
    match anomaly {
        Some(AnomalyType::OutOfRange) => SymptomType::LowVoltage,
        Some(AnomalyType::Noise) => SymptomType::Noise,
        Some(AnomalyType::Unstable) => SymptomType::Intermittent,
        None => SymptomType::NoVoltage,
    }
}

/// Detector confidence maps onto severity: >80 critical, >60 high,
/// >40 medium, else low.
fn severity_for(confidence: Option<u8>) -> Severity {
    match confidence {
        Some(c) if c > 80 => Severity::Critical,
        Some(c) if c > 60 => Severity::High,
        Some(c) if c > 40 => Severity::Medium,
        _ => Severity::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(anomaly: Option<AnomalyType>, confidence: Option<u8>) -> SensingMeasurement {
        SensingMeasurement {
            id: "m_1".to_string(),
            component_id: "regulator_1".to_string(),
            pin_id: Some("vout".to_string()),
            value: 2.1,
            unit: "V".to_string(),
            anomaly_detected: true,
            anomaly_type: anomaly,
            confidence,
        }
    }

    #[test]
    fn anomalies_become_symptoms() {
        let symptoms = symptoms_from_measurements(&[
            measurement(Some(AnomalyType::OutOfRange), Some(85)),
            SensingMeasurement {
                anomaly_detected: false,
                ..measurement(None, None)
            },
        ]);
        assert_eq!(symptoms.len(), 1);
        assert_eq!(symptoms[0].symptom_type, SymptomType::LowVoltage);
        assert_eq!(symptoms[0].severity, Severity::Critical);
        assert_eq!(symptoms[0].measured_value, Some(2.1));
        assert_eq!(symptoms[0].description, "Anomaly detected: out_of_range");
    }

    #[test]
    fn severity_thresholds_follow_detector_confidence() {
        assert_eq!(severity_for(Some(81)), Severity::Critical);
        assert_eq!(severity_for(Some(80)), Severity::High);
        assert_eq!(severity_for(Some(61)), Severity::High);
        assert_eq!(severity_for(Some(41)), Severity::Medium);
        assert_eq!(severity_for(Some(40)), Severity::Low);
        assert_eq!(severity_for(None), Severity::Low);
    }

    #[test]
    fn unstable_and_noise_map_to_their_symptom_types() {
        assert_eq!(
            symptom_type_for(Some(AnomalyType::Unstable)),
            SymptomType::Intermittent
        );
        assert_eq!(symptom_type_for(Some(AnomalyType::Noise)), SymptomType::Noise);
        assert_eq!(symptom_type_for(None), SymptomType::NoVoltage);
    }
}
