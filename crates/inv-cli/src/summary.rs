use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inv_cli::types::{CleanResult, FieldCounts};

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.source.display());
    println!("Records: {}", result.records);
    match (&result.outputs.clean_table, &result.outputs.anomaly_log) {
        (Some(table), Some(log)) => {
            println!("Clean table: {}", table.display());
            println!("Anomaly log: {}", log.display());
        }
        _ => println!("Dry run: no files written"),
    }
    if !result.missing_columns.is_empty() {
        println!(
            "Missing columns (read as empty): {}",
            result.missing_columns.join(", ")
        );
    }
    if !result.passthrough_columns.is_empty() {
        println!(
            "Passthrough columns: {}",
            result.passthrough_columns.join(", ")
        );
    }

    print_anomaly_table(result);
    print_device_table(result);
}

fn print_anomaly_table(result: &CleanResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Info"),
        header_cell("Total"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = FieldCounts::default();
    for (field, counts) in result.field_counts() {
        totals.errors += counts.errors;
        totals.warnings += counts.warnings;
        totals.info += counts.info;
        table.add_row(vec![
            Cell::new(field).fg(Color::Blue).add_attribute(Attribute::Bold),
            count_cell(counts.errors, Color::Red),
            count_cell(counts.warnings, Color::Yellow),
            count_cell(counts.info, Color::Green),
            Cell::new(counts.total()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(totals.errors, Color::Red).add_attribute(Attribute::Bold),
        count_cell(totals.warnings, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals.info, Color::Green).add_attribute(Attribute::Bold),
        Cell::new(totals.total()).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("Anomalies:");
    println!("{table}");
}

fn print_device_table(result: &CleanResult) {
    if result.device_types.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Device type"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (device_type, count) in &result.device_types {
        let cell = if device_type == "unknown" {
            dim_cell(device_type)
        } else {
            Cell::new(device_type)
        };
        table.add_row(vec![cell, Cell::new(count)]);
    }
    println!();
    println!("Device types:");
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
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
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
