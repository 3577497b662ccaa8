use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let counts = &result.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(counts.input)]);
    table.add_row(vec![
        Cell::new("Invalid phones"),
        count_cell(counts.invalid_phone, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Invalid emails"),
        count_cell(counts.invalid_email, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Batch duplicates"),
        count_cell(counts.batch_duplicates, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Reference duplicates"),
        count_cell(counts.reference_duplicates, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Outside date range"),
        count_cell(counts.outside_date_range, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Kept").add_attribute(Attribute::Bold),
        Cell::new(counts.kept)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    for path in &result.outputs {
        println!("Wrote: {}", path.display());
    }
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
