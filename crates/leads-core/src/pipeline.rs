//! Batch orchestration: normalize, deduplicate, filter, assign.

use chrono::NaiveDate;
use tracing::{debug, info};

use leads_model::{AssignedRecord, Record, RemovedRecord, StaffRoster};
use leads_numbering::NumberingPlan;

use crate::assign::assign_cyclic;
use crate::dedupe::{ReferenceIndex, dedupe_against, dedupe_within};
use crate::normalize::{normalize_email, normalize_name, normalize_registered, parse_registered};
use crate::phone::normalize_phone_with_plan;

/// Knobs for one processing pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Inclusive registration-date window applied after deduplication.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

/// Per-stage counters for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub input: usize,
    pub invalid_phone: usize,
    pub invalid_email: usize,
    pub batch_duplicates: usize,
    pub reference_duplicates: usize,
    pub outside_date_range: usize,
    pub kept: usize,
}

/// Result of one processing pass over a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub cleaned: Vec<AssignedRecord>,
    pub removed: Vec<RemovedRecord>,
    pub counts: StageCounts,
}

/// Normalize every field of every record in place, counting degradations.
///
/// A field that had content but normalized to the invalid sentinel counts
/// against that field; blank cells do not.
pub fn normalize_records(
    records: &mut [Record],
    plan: &dyn NumberingPlan,
    counts: &mut StageCounts,
) {
    for record in records.iter_mut() {
        record.name = normalize_name(&record.name);
        let phone = normalize_phone_with_plan(&record.phone, plan);
        let normalized_phone = phone.to_string();
        if normalized_phone.is_empty() && !record.phone.trim().is_empty() {
            counts.invalid_phone += 1;
        }
        record.phone = normalized_phone;
        let email = normalize_email(&record.email);
        if email.is_empty() && !record.email.trim().is_empty() {
            counts.invalid_email += 1;
        }
        record.email = email;
        record.registered = normalize_registered(&record.registered);
    }
}

fn filter_by_date_range(
    records: Vec<Record>,
    range: (NaiveDate, NaiveDate),
    counts: &mut StageCounts,
) -> Vec<Record> {
    let (from, to) = range;
    let mut inside = Vec::with_capacity(records.len());
    for record in records {
        let in_range = parse_registered(&record.registered)
            .is_some_and(|date| date >= from && date <= to);
        if in_range {
            inside.push(record);
        } else {
            counts.outside_date_range += 1;
        }
    }
    inside
}

/// Run one complete pass over a batch.
///
/// Stages: field normalization, in-batch deduplication, reference
/// deduplication (when a reference index is supplied), the optional
/// registration-date window, and cyclic staff assignment. The pass is
/// synchronous and leaves no state behind.
pub fn process_batch(
    mut records: Vec<Record>,
    reference: Option<&ReferenceIndex>,
    roster: &StaffRoster,
    options: &BatchOptions,
    plan: &dyn NumberingPlan,
) -> BatchOutcome {
    let mut counts = StageCounts {
        input: records.len(),
        ..StageCounts::default()
    };

    normalize_records(&mut records, plan, &mut counts);
    debug!(
        rows = counts.input,
        invalid_phone = counts.invalid_phone,
        invalid_email = counts.invalid_email,
        "fields normalized"
    );

    let within = dedupe_within(records);
    counts.batch_duplicates = within.removed.len();
    let mut removed = within.removed;
    let mut survivors = within.kept;

    if let Some(reference) = reference {
        let against = dedupe_against(survivors, reference);
        counts.reference_duplicates = against.removed.len();
        removed.extend(against.removed);
        survivors = against.kept;
    }

    if let Some(range) = options.date_range {
        survivors = filter_by_date_range(survivors, range, &mut counts);
    }

    counts.kept = survivors.len();
    info!(
        input = counts.input,
        batch_duplicates = counts.batch_duplicates,
        reference_duplicates = counts.reference_duplicates,
        outside_date_range = counts.outside_date_range,
        kept = counts.kept,
        "batch processed"
    );

    BatchOutcome {
        cleaned: assign_cyclic(survivors, roster),
        removed,
        counts,
    }
}
