//! Duplicate detection outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Why a row was removed as a duplicate.
///
/// In-batch causes name the sequence number of the first-seen row the value
/// collided with; reference causes mean the value already exists in the
/// reference dataset. A row can carry a phone cause and an email cause at
/// the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seq")]
pub enum DuplicateCause {
    PhoneOf(u32),
    EmailOf(u32),
    PhoneInReference,
    EmailInReference,
}

impl fmt::Display for DuplicateCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhoneOf(seq) => write!(f, "phone matches row {seq}"),
            Self::EmailOf(seq) => write!(f, "email matches row {seq}"),
            Self::PhoneInReference => f.write_str("phone exists in reference data"),
            Self::EmailInReference => f.write_str("email exists in reference data"),
        }
    }
}

/// A removed row together with every cause that applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedRecord {
    pub record: Record,
    pub causes: Vec<DuplicateCause>,
}

impl RemovedRecord {
    /// The audit reason string: all causes joined with `; `.
    pub fn reason(&self) -> String {
        let parts: Vec<String> = self.causes.iter().map(ToString::to_string).collect();
        parts.join("; ")
    }
}

/// Stable partition of a batch into kept and removed rows.
///
/// Both halves preserve the original sheet order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DedupeOutcome {
    pub kept: Vec<Record>,
    pub removed: Vec<RemovedRecord>,
}

impl DedupeOutcome {
    pub fn from_kept(kept: Vec<Record>) -> Self {
        Self {
            kept,
            removed: Vec::new(),
        }
    }
}
