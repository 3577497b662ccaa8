//! Reference ("master") table extraction for cross-batch deduplication.

use std::path::Path;

use anyhow::{Result, bail};
use tracing::debug;

use crate::csv_table::{CsvTable, column_index, read_csv_table};

/// Header naming the phone column of a reference sheet.
pub const REFERENCE_PHONE_COLUMN: &str = "SĐT";

/// Header naming the email column of a reference sheet.
pub const REFERENCE_EMAIL_COLUMN: &str = "Email";

/// Raw phone and email values from a reference sheet.
///
/// Values are unnormalized text; the core builds its comparison index from
/// them. The reference table is never filtered.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    pub phones: Vec<String>,
    pub emails: Vec<String>,
}

/// Extract the reference columns from an already-loaded table.
///
/// Missing `SĐT`/`Email` headers are a whole-pipeline error: the sheet does
/// not have the expected structure and no partial output should be produced.
pub fn reference_from_table(table: &CsvTable) -> Result<ReferenceTable> {
    let Some(phone_idx) = column_index(table, REFERENCE_PHONE_COLUMN) else {
        bail!("reference sheet has no '{REFERENCE_PHONE_COLUMN}' column");
    };
    let Some(email_idx) = column_index(table, REFERENCE_EMAIL_COLUMN) else {
        bail!("reference sheet has no '{REFERENCE_EMAIL_COLUMN}' column");
    };
    let mut reference = ReferenceTable::default();
    for row in &table.rows {
        if let Some(value) = row.get(phone_idx) {
            reference.phones.push(value.clone());
        }
        if let Some(value) = row.get(email_idx) {
            reference.emails.push(value.clone());
        }
    }
    Ok(reference)
}

/// Read a reference sheet from disk.
pub fn read_reference_table(path: &Path) -> Result<ReferenceTable> {
    let table = read_csv_table(path)?;
    let reference = reference_from_table(&table)?;
    debug!(
        path = %path.display(),
        phones = reference.phones.len(),
        emails = reference.emails.len(),
        "reference table loaded"
    );
    Ok(reference)
}
