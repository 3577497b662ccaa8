//! Staff rosters and per-row assignments.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The two staff categories a cleaned batch is spread across.
///
/// `advisors` fills the TV column of the output sheet, `care` the CS column.
/// The rotations are independent: an empty roster leaves its column empty
/// without affecting the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRoster {
    pub advisors: Vec<String>,
    pub care: Vec<String>,
}

impl StaffRoster {
    pub fn new(advisors: Vec<String>, care: Vec<String>) -> Self {
        Self { advisors, care }
    }

    pub fn is_empty(&self) -> bool {
        self.advisors.is_empty() && self.care.is_empty()
    }
}

/// Parse a comma-separated free-text name list.
///
/// Blank entries are dropped, surrounding whitespace is trimmed, order is
/// preserved.
pub fn parse_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A kept record with the staff assigned to each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedRecord {
    pub record: Record,
    pub advisor: String,
    pub care: String,
}
