//! Duplicate detection within a batch and against a reference dataset.

use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use tracing::debug;

use leads_model::{DedupeOutcome, DuplicateCause, Record, RemovedRecord};

use crate::normalize::normalize_email;
use crate::phone::normalize_phone;

/// Membership index built once from a reference ("master") dataset.
///
/// Reference values are normalized exactly like batch values; entries that
/// fail normalization produce no key and can never cause a collision.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    phones: HashSet<String>,
    emails: HashSet<String>,
}

impl ReferenceIndex {
    pub fn from_raw(phones: &[String], emails: &[String]) -> Self {
        let phones: HashSet<String> = phones
            .iter()
            .filter_map(|raw| normalize_phone(raw).as_key())
            .collect();
        let emails: HashSet<String> = emails
            .iter()
            .map(|raw| normalize_email(raw))
            .filter(|email| !email.is_empty())
            .collect();
        debug!(
            phones = phones.len(),
            emails = emails.len(),
            "reference index built"
        );
        Self { phones, emails }
    }

    pub fn contains_phone(&self, key: &str) -> bool {
        !key.is_empty() && self.phones.contains(key)
    }

    pub fn contains_email(&self, key: &str) -> bool {
        !key.is_empty() && self.emails.contains(key)
    }

    pub fn len(&self) -> usize {
        self.phones.len() + self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty() && self.emails.is_empty()
    }
}

/// Partition a normalized batch by first occurrence of phone and email.
///
/// The first row carrying a value is the canonical target; later rows are
/// removed with a cause naming that row's sequence number. Phone and email
/// collisions are tracked independently, so a row can carry both causes.
/// Empty values are never collision keys. Order is preserved on both sides
/// of the partition.
pub fn dedupe_within(records: Vec<Record>) -> DedupeOutcome {
    let mut first_phone: HashMap<String, u32> = HashMap::new();
    let mut first_email: HashMap<String, u32> = HashMap::new();
    let mut outcome = DedupeOutcome::default();
    for record in records {
        let mut causes = Vec::new();
        if !record.phone.is_empty() {
            match first_phone.entry(record.phone.clone()) {
                Entry::Occupied(first) => causes.push(DuplicateCause::PhoneOf(*first.get())),
                Entry::Vacant(slot) => {
                    slot.insert(record.seq);
                }
            }
        }
        if !record.email.is_empty() {
            match first_email.entry(record.email.clone()) {
                Entry::Occupied(first) => causes.push(DuplicateCause::EmailOf(*first.get())),
                Entry::Vacant(slot) => {
                    slot.insert(record.seq);
                }
            }
        }
        if causes.is_empty() {
            outcome.kept.push(record);
        } else {
            outcome.removed.push(RemovedRecord { record, causes });
        }
    }
    outcome
}

/// Partition a normalized batch against a reference index.
///
/// A row is removed when its phone exists in the reference, or its
/// non-empty email does. The reference itself is never filtered.
pub fn dedupe_against(records: Vec<Record>, reference: &ReferenceIndex) -> DedupeOutcome {
    let mut outcome = DedupeOutcome::default();
    for record in records {
        let mut causes = Vec::new();
        if reference.contains_phone(&record.phone) {
            causes.push(DuplicateCause::PhoneInReference);
        }
        if reference.contains_email(&record.email) {
            causes.push(DuplicateCause::EmailInReference);
        }
        if causes.is_empty() {
            outcome.kept.push(record);
        } else {
            outcome.removed.push(RemovedRecord { record, causes });
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seq: u32, phone: &str, email: &str) -> Record {
        Record {
            seq,
            phone: phone.to_string(),
            email: email.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn first_occurrence_wins_within_batch() {
        let outcome = dedupe_within(vec![
            record(1, "0912345678", ""),
            record(2, "0912345678", ""),
            record(3, "0987654321", ""),
        ]);
        assert_eq!(outcome.kept.len(), 2);
        assert_eq!(outcome.removed.len(), 1);
        assert_eq!(outcome.removed[0].record.seq, 2);
        assert_eq!(outcome.removed[0].causes, vec![DuplicateCause::PhoneOf(1)]);
    }

    #[test]
    fn phone_and_email_causes_combine() {
        let outcome = dedupe_within(vec![
            record(1, "0912345678", "a@b.vn"),
            record(2, "0912345678", "a@b.vn"),
        ]);
        assert_eq!(
            outcome.removed[0].causes,
            vec![DuplicateCause::PhoneOf(1), DuplicateCause::EmailOf(1)]
        );
        assert_eq!(
            outcome.removed[0].reason(),
            "phone matches row 1; email matches row 1"
        );
    }

    #[test]
    fn empty_values_never_collide() {
        let outcome = dedupe_within(vec![
            record(1, "", ""),
            record(2, "", ""),
            record(3, "", ""),
        ]);
        assert_eq!(outcome.kept.len(), 3);
        assert!(outcome.removed.is_empty());
    }

    #[test]
    fn order_is_stable() {
        let outcome = dedupe_within(vec![
            record(5, "0912345678", ""),
            record(6, "0911111111", ""),
            record(7, "0912345678", ""),
            record(8, "0922222222", ""),
        ]);
        let kept: Vec<u32> = outcome.kept.iter().map(|r| r.seq).collect();
        assert_eq!(kept, vec![5, 6, 8]);
    }

    #[test]
    fn reference_index_normalizes_raw_values() {
        let reference = ReferenceIndex::from_raw(
            &["84912345678".to_string(), "not a phone".to_string()],
            &[" Foo@Bar.COM ".to_string(), "bad".to_string()],
        );
        assert!(reference.contains_phone("0912345678"));
        assert!(reference.contains_email("foo@bar.com"));
        assert_eq!(reference.len(), 2);
    }

    #[test]
    fn phone_match_excludes_regardless_of_email() {
        let reference = ReferenceIndex::from_raw(
            &["0912345678".to_string()],
            &["known@example.com".to_string()],
        );
        let outcome = dedupe_against(
            vec![
                record(1, "0912345678", "fresh@example.com"),
                record(2, "0987654321", "known@example.com"),
                record(3, "0987654322", "fresh2@example.com"),
            ],
            &reference,
        );
        assert_eq!(outcome.kept.len(), 1);
        assert_eq!(outcome.kept[0].seq, 3);
        assert_eq!(outcome.removed[0].causes, vec![DuplicateCause::PhoneInReference]);
        assert_eq!(outcome.removed[1].causes, vec![DuplicateCause::EmailInReference]);
    }

    #[test]
    fn empty_email_never_matches_reference() {
        let reference = ReferenceIndex::from_raw(&[], &["a@b.vn".to_string()]);
        let outcome = dedupe_against(vec![record(1, "0912345678", "")], &reference);
        assert_eq!(outcome.kept.len(), 1);
    }
}
