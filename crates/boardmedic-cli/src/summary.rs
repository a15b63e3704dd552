//! Human-readable summaries for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use boardmedic_model::{HistoricalPatternMatch, PowerRouteAnalysis, RouteIntegrity};
use boardmedic_rules::KnowledgeBase;

use crate::types::{DiagnoseOutcome, ImportOutcomeReport, PackageOutcome, StatsOutcome};

pub fn print_diagnosis(outcome: &DiagnoseOutcome) {
    let result = &outcome.result;
    println!("Failure pattern: {}", result.failure_pattern);
    println!("Confidence: {}%", result.confidence);
    println!(
        "Estimated: {} difficulty, {} min, {:.2} cost",
        result.estimated_difficulty, result.estimated_time, result.estimated_cost
    );
    if !result.affected_components.is_empty() {
        println!("Affected components: {}", result.affected_components.join(", "));
    }

    if !result.probable_causes.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Probability"),
            header_cell("Probable cause"),
            header_cell("Test procedure"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for cause in &result.probable_causes {
            table.add_row(vec![
                Cell::new(format!("{}%", cause.probability)),
                Cell::new(&cause.description),
                Cell::new(&cause.test_procedure),
            ]);
        }
        println!("{table}");
    }

    if !result.recommendations.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Priority"),
            header_cell("Action"),
            header_cell("Recommendation"),
            header_cell("Confidence"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Center);
        align_column(&mut table, 3, CellAlignment::Right);
        for recommendation in &result.recommendations {
            table.add_row(vec![
                Cell::new(recommendation.priority),
                Cell::new(format!("{:?}", recommendation.action).to_lowercase()),
                Cell::new(&recommendation.description),
                Cell::new(format!("{}%", recommendation.confidence)),
            ]);
        }
        println!("{table}");
    }

    if let Some(route) = &result.power_route_analysis {
        print_power_route(route);
    }

    if let Some(case) = &outcome.case {
        println!("Recorded as case #{} ({})", case.case_number, case.id);
    }
    if !outcome.similar.is_empty() {
        println!("Similar historical cases:");
        print_matches(&outcome.similar);
    }
}

fn print_power_route(route: &PowerRouteAnalysis) {
    let integrity = match route.route_integrity {
        RouteIntegrity::Good => "good",
        RouteIntegrity::Degraded => "degraded",
        RouteIntegrity::Broken => "broken",
    };
    println!("Power route: {integrity}");
    println!(
        "  input {} (expected {:.1}V){}",
        if route.input_voltage.present { "present" } else { "missing" },
        route.input_voltage.expected,
        route
            .input_voltage
            .value
            .map(|v| format!(", measured {v:.2}V"))
            .unwrap_or_default()
    );
    println!(
        "  regulator {}{}",
        if route.regulator_status.working { "working" } else { "suspect" },
        route
            .regulator_status
            .output_voltage
            .map(|v| format!(", output {v:.2}V"))
            .unwrap_or_default()
    );
    for recommendation in &route.recommendations {
        println!("  -> {recommendation}");
    }
}

pub fn print_matches(matches: &[HistoricalPatternMatch]) {
    if matches.is_empty() {
        println!("No similar cases found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case"),
        header_cell("Similarity"),
        header_cell("Board"),
        header_cell("Outcome"),
        header_cell("Resolution"),
        header_cell("Cost"),
        header_cell("Time"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for entry in matches {
        let outcome_cell = if entry.repair_success {
            Cell::new("fixed").fg(Color::Green)
        } else {
            Cell::new("failed").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(format!("#{}", entry.case_number)),
            Cell::new(format!("{}%", entry.similarity)),
            Cell::new(&entry.board_type),
            outcome_cell,
            Cell::new(&entry.resolution),
            Cell::new(format!("{:.2}", entry.cost)),
            Cell::new(format!("{} min", entry.time_to_repair)),
        ]);
    }
    println!("{table}");
}

pub fn print_stats(outcome: &StatsOutcome) {
    println!("Cases: {}", outcome.total_cases);
    if outcome.patterns.is_empty() {
        println!("No failure history yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Failure pattern"),
        header_cell("Cases"),
        header_cell("Success"),
        header_cell("Avg time"),
        header_cell("Avg cost"),
    ]);
    apply_table_style(&mut table);
    for column in 1..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for stats in &outcome.patterns {
        table.add_row(vec![
            Cell::new(stats.pattern.as_str()),
            Cell::new(stats.cases),
            Cell::new(format!("{}%", stats.success_rate)),
            Cell::new(format!("{} min", stats.average_time)),
            Cell::new(format!("{:.2}", stats.average_cost)),
        ]);
    }
    println!("{table}");

    if !outcome.component_failures.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Component"), header_cell("Replacements")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (component, count) in &outcome.component_failures {
            table.add_row(vec![Cell::new(component), Cell::new(count)]);
        }
        println!("{table}");
    }
}

pub fn print_patterns(knowledge: &KnowledgeBase) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Failure pattern"),
        header_cell("Difficulty"),
        header_cell("Success rate"),
        header_cell("Time"),
        header_cell("Cost"),
    ]);
    apply_table_style(&mut table);
    for column in 2..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for pattern in boardmedic_model::FailurePattern::ALL {
        match knowledge.get(pattern) {
            Some(entry) => table.add_row(vec![
                Cell::new(pattern.as_str()),
                Cell::new(entry.difficulty.as_str()),
                Cell::new(format!("{}%", entry.success_rate)),
                Cell::new(format!(
                    "{}-{} min",
                    entry.estimated_time.min, entry.estimated_time.max
                )),
                Cell::new(format!(
                    "{:.2}-{:.2}",
                    entry.estimated_cost.min, entry.estimated_cost.max
                )),
            ]),
            None => table.add_row(vec![
                Cell::new(pattern.as_str()),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]),
        };
    }
    println!("{table}");
}

pub fn print_package(outcome: &PackageOutcome) {
    println!(
        "Packaged {} case(s) as {} -> {}",
        outcome.total_cases,
        outcome.package_id,
        outcome.out_path.display()
    );
}

pub fn print_import(outcome: &ImportOutcomeReport) {
    println!(
        "Imported {} case(s), {} failed (package {})",
        outcome.import.imported, outcome.import.failed, outcome.import.package_id
    );
    println!("Casebank now holds {} case(s)", outcome.total_cases);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
