//! Snapshot of the built-in knowledge registry.
//!
//! Guards the reference data against accidental edits: pattern
//! coverage, difficulty grades, and the cost/time envelopes the
//! orchestrator quotes to operators.

use boardmedic_rules::KnowledgeBase;

#[test]
fn builtin_knowledge_digest() {
    let base = KnowledgeBase::builtin();
    let digest = base
        .iter()
        .map(|entry| {
            format!(
                "{} {} {}% {}-{}min",
                entry.failure_pattern,
                entry.difficulty,
                entry.success_rate,
                entry.estimated_time.min,
                entry.estimated_time.max,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(digest, @r"
    voltage_regulator_failure medium 92% 15-45min
    microcontroller_dead hard 60% 30-120min
    firmware_corruption easy 85% 10-30min
    power_supply_failure easy 90% 5-30min
    ");
}
