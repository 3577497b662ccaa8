//! Positional record extraction from an upload table.

use leads_model::{ColumnLayout, Record};

use crate::csv_table::CsvTable;

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Parse a sequence cell, tolerating spreadsheet numeric formatting.
fn parse_seq(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    // Numeric exports often render integers as "7.0".
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value >= 0.0 => Some(value as u32),
        _ => None,
    }
}

/// Extract records from `table` using the positional `layout`.
///
/// A missing or unparseable sequence cell falls back to the 1-based row
/// position, keeping identity strictly positional. Columns outside the
/// layout are collected into `extra` in sheet order.
pub fn records_from_table(table: &CsvTable, layout: &ColumnLayout) -> Vec<Record> {
    let width = table.headers.len().max(layout.min_width());
    table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let seq = parse_seq(cell(row, layout.seq)).unwrap_or(idx as u32 + 1);
            let extra = (0..width)
                .filter(|column| !layout.covers(*column))
                .map(|column| cell(row, column).to_string())
                .collect();
            Record {
                seq,
                registered: cell(row, layout.registered).to_string(),
                name: cell(row, layout.name).to_string(),
                phone: cell(row, layout.phone).to_string(),
                email: cell(row, layout.email).to_string(),
                extra,
            }
        })
        .collect()
}

/// Header names of the passthrough columns, in sheet order.
pub fn passthrough_headers(table: &CsvTable, layout: &ColumnLayout) -> Vec<String> {
    table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !layout.covers(*idx))
        .map(|(_, header)| header.clone())
        .collect()
}
