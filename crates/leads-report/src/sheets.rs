//! Output sheet writers.
//!
//! Every output is a single sheet: one header row, then data rows in
//! processing order. Column order is fixed; passthrough columns keep their
//! sheet names and sit between the fixed fields and the staff columns.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use leads_model::{AssignedRecord, RemovedRecord};

const FIXED_HEADERS: &[&str] = &["STT", "Registered", "Name", "Phone", "Email"];

/// TV and CS staff columns appended to the cleaned sheet.
const STAFF_HEADERS: &[&str] = &["TV", "CS"];

fn cleaned_header(extra_headers: &[String]) -> Vec<String> {
    let mut header: Vec<String> = FIXED_HEADERS.iter().map(ToString::to_string).collect();
    header.extend(extra_headers.iter().cloned());
    header.extend(STAFF_HEADERS.iter().map(ToString::to_string));
    header
}

fn record_fields(record: &leads_model::Record) -> Vec<String> {
    let mut fields = vec![
        record.seq.to_string(),
        record.registered.clone(),
        record.name.clone(),
        record.phone.clone(),
        record.email.clone(),
    ];
    fields.extend(record.extra.iter().cloned());
    fields
}

/// Write the cleaned, staff-assigned sheet to `writer`.
pub fn write_cleaned_to<W: Write>(
    writer: W,
    extra_headers: &[String],
    records: &[AssignedRecord],
) -> Result<()> {
    let mut out = WriterBuilder::new().from_writer(writer);
    out.write_record(cleaned_header(extra_headers))
        .context("write cleaned header")?;
    for assigned in records {
        let mut fields = record_fields(&assigned.record);
        fields.push(assigned.advisor.clone());
        fields.push(assigned.care.clone());
        out.write_record(&fields).context("write cleaned row")?;
    }
    out.flush().context("flush cleaned sheet")?;
    Ok(())
}

/// Write the cleaned sheet to `path`.
pub fn write_cleaned(
    path: &Path,
    extra_headers: &[String],
    records: &[AssignedRecord],
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_cleaned_to(file, extra_headers, records)
        .with_context(|| format!("write {}", path.display()))
}

/// Write removed rows with their audit reasons to `writer`.
pub fn write_removed_to<W: Write>(
    writer: W,
    extra_headers: &[String],
    records: &[RemovedRecord],
) -> Result<()> {
    let mut out = WriterBuilder::new().from_writer(writer);
    let mut header: Vec<String> = FIXED_HEADERS.iter().map(ToString::to_string).collect();
    header.extend(extra_headers.iter().cloned());
    header.push("Reason".to_string());
    out.write_record(header).context("write removed header")?;
    for removed in records {
        let mut fields = record_fields(&removed.record);
        fields.push(removed.reason());
        out.write_record(&fields).context("write removed row")?;
    }
    out.flush().context("flush removed sheet")?;
    Ok(())
}

/// Write the removed sheet to `path`.
pub fn write_removed(
    path: &Path,
    extra_headers: &[String],
    records: &[RemovedRecord],
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_removed_to(file, extra_headers, records)
        .with_context(|| format!("write {}", path.display()))
}

/// Write a balanced distribution as `STT,Staff` rows to `writer`.
pub fn write_distribution_to<W: Write>(writer: W, names: &[String]) -> Result<()> {
    let mut out = WriterBuilder::new().from_writer(writer);
    out.write_record(["STT", "Staff"])
        .context("write distribution header")?;
    for (index, name) in names.iter().enumerate() {
        out.write_record([(index + 1).to_string(), name.clone()])
            .context("write distribution row")?;
    }
    out.flush().context("flush distribution sheet")?;
    Ok(())
}

/// Write the distribution sheet to `path`.
pub fn write_distribution(path: &Path, names: &[String]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    write_distribution_to(file, names).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use leads_model::{DuplicateCause, Record};

    use super::*;

    fn sample_record() -> Record {
        Record {
            seq: 1,
            registered: "01/03/2024".to_string(),
            name: "Nguyễn Văn An".to_string(),
            phone: "0912345678".to_string(),
            email: "an@example.com".to_string(),
            extra: vec!["facebook".to_string()],
        }
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("write sheet");
        String::from_utf8(buffer).expect("utf8 sheet")
    }

    #[test]
    fn cleaned_sheet_layout() {
        let assigned = vec![AssignedRecord {
            record: sample_record(),
            advisor: "X".to_string(),
            care: "P".to_string(),
        }];
        let rendered = render(|buffer| {
            write_cleaned_to(buffer, &["Source".to_string()], &assigned)
        });
        insta::assert_snapshot!(rendered, @r"
        STT,Registered,Name,Phone,Email,Source,TV,CS
        1,01/03/2024,Nguyễn Văn An,0912345678,an@example.com,facebook,X,P
        ");
    }

    #[test]
    fn removed_sheet_carries_reasons() {
        let removed = vec![RemovedRecord {
            record: sample_record(),
            causes: vec![DuplicateCause::PhoneOf(7), DuplicateCause::EmailInReference],
        }];
        let rendered = render(|buffer| {
            write_removed_to(buffer, &["Source".to_string()], &removed)
        });
        assert!(rendered.starts_with("STT,Registered,Name,Phone,Email,Source,Reason"));
        assert!(rendered.contains("phone matches row 7; email exists in reference data"));
    }

    #[test]
    fn distribution_sheet_numbers_rows() {
        let names = vec!["A".to_string(), "A".to_string(), "B".to_string()];
        let rendered = render(|buffer| write_distribution_to(buffer, &names));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["STT,Staff", "1,A", "2,A", "3,B"]);
    }

    #[test]
    fn sheets_write_to_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cleaned.csv");
        write_cleaned(&path, &[], &[]).expect("write cleaned");
        let content = std::fs::read_to_string(&path).expect("read back");
        assert!(content.starts_with("STT,Registered,Name,Phone,Email,TV,CS"));
    }
}
