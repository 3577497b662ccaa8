use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use comfy_table::Table;
use tracing::{info, info_span, trace};

use leads_core::{BatchOptions, ReferenceIndex, distribute_balanced, process_batch};
use leads_ingest::{passthrough_headers, read_csv_table, read_reference_table, records_from_table};
use leads_model::{ColumnLayout, StaffRoster, parse_name_list};
use leads_numbering::{COUNTRY_CODES, bundled_plan};
use leads_report::{write_cleaned, write_distribution, write_removed};

use crate::cli::{CleanArgs, DistributeArgs};
use crate::logging::redact_value;
use crate::summary::apply_table_style;
use crate::types::CleanResult;

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let layout = ColumnLayout::new(
        args.col_seq,
        args.col_date,
        args.col_name,
        args.col_phone,
        args.col_email,
    )
    .context("invalid column layout")?;

    let table = read_csv_table(&args.input)
        .with_context(|| format!("load batch: {}", args.input.display()))?;
    let extra_headers = passthrough_headers(&table, &layout);
    let records = records_from_table(&table, &layout);
    info!(
        rows = records.len(),
        passthrough_columns = extra_headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    for record in &records {
        trace!(
            seq = record.seq,
            phone = %redact_value(&record.phone),
            email = %redact_value(&record.email),
            "row ingested"
        );
    }

    let reference = match &args.reference {
        Some(path) => {
            let reference = read_reference_table(path)
                .with_context(|| format!("load reference: {}", path.display()))?;
            Some(ReferenceIndex::from_raw(
                &reference.phones,
                &reference.emails,
            ))
        }
        None => None,
    };

    let roster = StaffRoster::new(
        parse_name_list(&args.advisors),
        parse_name_list(&args.care),
    );
    let options = BatchOptions {
        date_range: parse_date_range(args.from.as_deref(), args.to.as_deref())?,
    };

    let outcome = process_batch(
        records,
        reference.as_ref(),
        &roster,
        &options,
        bundled_plan(),
    );

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let mut outputs = Vec::new();
    if !args.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir: {}", output_dir.display()))?;
        let cleaned_path = output_dir.join("cleaned.csv");
        write_cleaned(&cleaned_path, &extra_headers, &outcome.cleaned)?;
        outputs.push(cleaned_path);
        if !outcome.removed.is_empty() {
            let removed_path = output_dir.join("removed.csv");
            write_removed(&removed_path, &extra_headers, &outcome.removed)?;
            outputs.push(removed_path);
        }
    }
    info!(
        kept = outcome.counts.kept,
        removed = outcome.removed.len(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );

    Ok(CleanResult {
        input: args.input.clone(),
        output_dir,
        counts: outcome.counts,
        outputs,
        dry_run: args.dry_run,
    })
}

pub fn run_distribute(args: &DistributeArgs) -> Result<()> {
    let names = parse_name_list(&args.names);
    if names.is_empty() {
        bail!("no staff names supplied");
    }
    let sequence = distribute_balanced(args.count, &names);
    if let Some(path) = &args.output {
        write_distribution(path, &sequence)?;
        println!("Distribution: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec!["Staff", "Items"]);
    apply_table_style(&mut table);
    for name in &names {
        let share = sequence.iter().filter(|item| *item == name).count();
        table.add_row(vec![name.clone(), share.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_countries() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Country", "National digits"]);
    apply_table_style(&mut table);
    for entry in COUNTRY_CODES {
        let digits = if entry.min_len == entry.max_len {
            entry.min_len.to_string()
        } else {
            format!("{}-{}", entry.min_len, entry.max_len)
        };
        table.add_row(vec![
            format!("+{}", entry.code),
            entry.name.to_string(),
            digits,
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Parse a DD/MM/YYYY date bound.
pub fn parse_date_arg(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y")
        .with_context(|| format!("invalid date {raw:?} (expected DD/MM/YYYY)"))
}

fn parse_date_range(from: Option<&str>, to: Option<&str>) -> Result<Option<(NaiveDate, NaiveDate)>> {
    match (from, to) {
        (Some(from), Some(to)) => {
            let from = parse_date_arg(from)?;
            let to = parse_date_arg(to)?;
            if from > to {
                bail!("date range start {from} is after end {to}");
            }
            Ok(Some((from, to)))
        }
        _ => Ok(None),
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    input.parent().unwrap_or_else(|| Path::new(".")).join("output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_args_parse_day_first() {
        let date = parse_date_arg("05/03/2024").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(parse_date_arg("2024-03-05").is_err());
    }

    #[test]
    fn date_range_must_be_ordered() {
        assert!(parse_date_range(Some("02/01/2024"), Some("01/01/2024")).is_err());
        assert!(parse_date_range(None, None).expect("no range").is_none());
    }

    #[test]
    fn output_dir_defaults_next_to_input() {
        let dir = default_output_dir(Path::new("/data/batch.csv"));
        assert_eq!(dir, PathBuf::from("/data/output"));
    }
}
