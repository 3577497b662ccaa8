use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// A spreadsheet read as text: one header row plus data rows.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`CsvTable`].
///
/// The first non-empty row is the header row; every later row is padded or
/// truncated to the header width. Fully blank rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if let Some(headers) = &headers {
            let mut row = Vec::with_capacity(headers.len());
            for idx in 0..headers.len() {
                let value = record.get(idx).unwrap_or("");
                row.push(normalize_cell(value));
            }
            rows.push(row);
        } else {
            headers = Some(record.iter().map(normalize_header).collect());
        }
    }
    let headers = headers.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv table loaded"
    );
    Ok(CsvTable { headers, rows })
}

/// Index of the first header matching `name`, ignoring case.
pub fn column_index(table: &CsvTable, name: &str) -> Option<usize> {
    let wanted = name.trim().to_lowercase();
    table
        .headers
        .iter()
        .position(|header| header.trim().to_lowercase() == wanted)
}
