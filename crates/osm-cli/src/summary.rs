//! Table rendering for command output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osm_audit::{AuditConfig, AuditReport};
use osm_model::{Correction, KeyTypeCounts};

use crate::types::NormalizeReport;

/// Values listed per token before the rest are folded into a count.
const MAX_EXAMPLES: usize = 5;

pub fn print_audit_reports(reports: &[AuditReport]) {
    println!("{}", overview_table(reports));
    for report in reports {
        if report.result.is_empty() {
            continue;
        }
        println!();
        println!("{} ({}):", report.audit, report.target_key);
        println!("{}", token_table(report));
    }
}

pub fn print_normalize_report(report: &NormalizeReport, changed_only: bool) {
    println!("{}", overview_table(std::slice::from_ref(&report.audit)));
    println!();
    println!("{}", corrections_table(&report.corrections, changed_only));
    println!(
        "{} of {} values rewritten",
        report.changed_count(),
        report.corrections.len()
    );
}

/// One row per audit with its record and token counts.
pub fn overview_table(reports: &[AuditReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Audit"),
        header_cell("Key"),
        header_cell("Records"),
        header_cell("Skipped"),
        header_cell("Tokens"),
        header_cell("Values"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for report in reports {
        table.add_row(vec![
            Cell::new(&report.audit)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&report.target_key),
            Cell::new(report.records_seen),
            count_cell(report.skipped, Color::Yellow),
            count_cell(report.result.len(), Color::Red),
            count_cell(report.result.value_count(), Color::Red),
        ]);
    }
    table
}

/// Tokens needing review, with up to [`MAX_EXAMPLES`] of their values.
pub fn token_table(report: &AuditReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Count"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (token, values) in report.result.iter() {
        let mut examples: Vec<&str> = values
            .iter()
            .take(MAX_EXAMPLES)
            .map(String::as_str)
            .collect();
        let more = values.len().saturating_sub(MAX_EXAMPLES);
        let folded = format!("(+{more} more)");
        if more > 0 {
            examples.push(&folded);
        }
        table.add_row(vec![
            Cell::new(token).add_attribute(Attribute::Bold),
            Cell::new(values.len()),
            Cell::new(examples.join("\n")),
        ]);
    }
    table
}

pub fn corrections_table(corrections: &[Correction], changed_only: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Original"),
        header_cell("Corrected"),
        header_cell("Changed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for correction in corrections {
        if changed_only && !correction.changed() {
            continue;
        }
        let changed = if correction.changed() {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        let corrected = if correction.changed() {
            Cell::new(&correction.corrected).fg(Color::Green)
        } else {
            dim_cell(&correction.corrected)
        };
        table.add_row(vec![Cell::new(&correction.original), corrected, changed]);
    }
    table
}

pub fn key_types_table(counts: &KeyTypeCounts) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Keys")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in counts.iter() {
        table.add_row(vec![Cell::new(category), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn audits_table(config: &AuditConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Audit"),
        header_cell("Key"),
        header_cell("Pattern"),
        header_cell("Vocabulary"),
        header_cell("Corrections"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for spec in config.iter() {
        let vocabulary = if spec.vocabulary.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(spec.vocabulary.iter().collect::<Vec<_>>().join(", "))
        };
        table.add_row(vec![
            Cell::new(&spec.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&spec.target_key),
            Cell::new(spec.pattern),
            vocabulary,
            Cell::new(spec.corrections.len()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
