//! Property tests over the similarity invariants.

use proptest::prelude::*;

use boardmedic_casebank::CaseBank;
use boardmedic_diagnose::Diagnostician;
use boardmedic_model::{Symptom, SymptomType};

fn symptom_type_strategy() -> impl Strategy<Value = SymptomType> {
    prop_oneof![
        Just(SymptomType::NoVoltage),
        Just(SymptomType::LowVoltage),
        Just(SymptomType::NoCommunication),
        Just(SymptomType::Overheating),
        Just(SymptomType::Noise),
        Just(SymptomType::Intermittent),
    ]
}

fn symptoms_strategy() -> impl Strategy<Value = Vec<Symptom>> {
    prop::collection::vec(symptom_type_strategy(), 1..5).prop_map(|kinds| {
        kinds
            .into_iter()
            .enumerate()
            .map(|(index, kind)| {
                Symptom::reported(format!("symptom_{index}"), kind, "Observed fault")
            })
            .collect()
    })
}

fn seeded_bank() -> CaseBank {
    let diagnostician = Diagnostician::new();
    let mut bank = CaseBank::new();
    for (board, kinds) in [
        ("ESP32-WROOM-32", vec![SymptomType::NoVoltage, SymptomType::Overheating]),
        ("Arduino Nano", vec![SymptomType::NoCommunication]),
        ("STM32 Nucleo", vec![SymptomType::Noise, SymptomType::Intermittent]),
    ] {
        let symptoms: Vec<Symptom> = kinds
            .into_iter()
            .enumerate()
            .map(|(index, kind)| {
                Symptom::reported(format!("symptom_{index}"), kind, "Seeded fault")
            })
            .collect();
        let result = diagnostician.diagnose(&symptoms).expect("diagnose");
        bank.create_case(board, symptoms, result, None);
    }
    bank
}

proptest! {
    #[test]
    fn similarity_results_stay_above_floor_and_sorted(
        symptoms in symptoms_strategy(),
        board in "[A-Za-z0-9]{1,12}",
        limit in 0usize..6,
    ) {
        let bank = seeded_bank();
        let matches = bank.find_similar_cases(&board, &symptoms, limit);

        prop_assert!(matches.len() <= limit);
        for window in matches.windows(2) {
            prop_assert!(window[0].similarity >= window[1].similarity);
        }
        for entry in &matches {
            prop_assert!(entry.similarity > 30);
            prop_assert!(entry.similarity <= 100);
        }
    }
}
