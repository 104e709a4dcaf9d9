//! Terminal rendering of decoded transport files.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use xptview_xpt::{LibraryInfo, NumericValue, XptDataset, XptFile, XptValue};

/// Print the file-level summary: path, library metadata, dataset table.
pub fn print_file_summary(file: &XptFile, info: &LibraryInfo) {
    println!("File: {}", file.path);
    if !info.sas_version.is_empty() || !info.os_name.is_empty() {
        println!("Library: SAS {} on {}", info.sas_version, info.os_name);
    }
    if !info.created.is_empty() {
        println!("Created: {}", info.created);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Label"),
        header_cell("Variables"),
        header_cell("Observations"),
        header_cell("Preview rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for dataset in &file.datasets {
        table.add_row(vec![
            name_cell(&dataset.name),
            label_cell(dataset.label.as_deref()),
            Cell::new(dataset.num_columns()),
            Cell::new(dataset.observation_count),
            Cell::new(dataset.num_rows()),
        ]);
    }
    println!("{table}");
}

/// Print one dataset: schema table and, unless suppressed, a row preview.
pub fn print_dataset(dataset: &XptDataset, max_rows: usize, schema_only: bool) {
    match &dataset.label {
        Some(label) => println!("Dataset {} ({label})", dataset.name),
        None => println!("Dataset {}", dataset.name),
    }

    print_schema(dataset);
    if !schema_only {
        print_preview(dataset, max_rows);
    }
}

fn print_schema(dataset: &XptDataset) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Type"),
        header_cell("Length"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for column in &dataset.columns {
        table.add_row(vec![
            name_cell(&column.name),
            Cell::new(column.data_type),
            Cell::new(column.length),
            label_cell(column.label.as_deref()),
        ]);
    }
    println!("{table}");
}

fn print_preview(dataset: &XptDataset, max_rows: usize) {
    if dataset.rows.is_empty() {
        println!("(no observations)");
        return;
    }

    let shown = dataset.rows.len().min(max_rows);
    let mut table = Table::new();
    table.set_header(
        dataset
            .columns
            .iter()
            .map(|column| header_cell(&column.name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    for row in dataset.rows.iter().take(shown) {
        table.add_row(row.iter().map(value_cell).collect::<Vec<_>>());
    }
    println!("{table}");
    println!(
        "showing {shown} of {} observations",
        dataset.observation_count
    );
}

/// Format a decoded cell for display.
///
/// Numerics render with trailing zeros trimmed; missing values render as
/// their SAS dot code.
pub fn format_value(value: &XptValue) -> String {
    match value {
        XptValue::Char(text) => text.clone(),
        XptValue::Num(NumericValue::Value(number)) => format_numeric(*number),
        XptValue::Num(NumericValue::Missing(missing)) => missing.display_code(),
    }
}

/// Format a numeric value with up to 6 decimal places, trimming trailing
/// zeros and a dangling decimal point.
fn format_numeric(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn value_cell(value: &XptValue) -> Cell {
    match value {
        XptValue::Num(NumericValue::Missing(_)) => dim_cell(format_value(value)),
        XptValue::Num(NumericValue::Value(_)) => {
            Cell::new(format_value(value)).set_alignment(CellAlignment::Right)
        }
        XptValue::Char(_) => Cell::new(format_value(value)),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
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

fn name_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: Option<&str>) -> Cell {
    match label {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
