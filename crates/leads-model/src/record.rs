//! Contact records and the positional layout of an upload sheet.

use serde::{Deserialize, Serialize};

use crate::error::{LeadError, Result};

/// One contact row from an upload sheet.
///
/// All cell values are carried as text. `seq` is the row's sequence number
/// from the sheet; it is the only identity a row has, and duplicate reasons
/// refer to it. `extra` holds passthrough columns in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub seq: u32,
    pub registered: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub extra: Vec<String>,
}

impl Record {
    pub fn new(seq: u32) -> Self {
        Self {
            seq,
            ..Self::default()
        }
    }
}

/// Column offsets of the fixed fields in an upload sheet.
///
/// Exact offsets vary by deployment, so they are configuration rather than
/// constants. Every column not named here is treated as passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub seq: usize,
    pub registered: usize,
    pub name: usize,
    pub phone: usize,
    pub email: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            seq: 0,
            registered: 1,
            name: 2,
            phone: 3,
            email: 4,
        }
    }
}

impl ColumnLayout {
    /// Build a layout from configured offsets. Offsets must be distinct.
    pub fn new(
        seq: usize,
        registered: usize,
        name: usize,
        phone: usize,
        email: usize,
    ) -> Result<Self> {
        let mut offsets = [seq, registered, name, phone, email];
        offsets.sort_unstable();
        if offsets.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(LeadError::Message(
                "column offsets must be distinct".to_string(),
            ));
        }
        Ok(Self {
            seq,
            registered,
            name,
            phone,
            email,
        })
    }

    /// Returns true when `index` is one of the fixed field columns.
    pub fn covers(&self, index: usize) -> bool {
        index == self.seq
            || index == self.registered
            || index == self.name
            || index == self.phone
            || index == self.email
    }

    /// Smallest column count a row must have to fill every fixed field.
    pub fn min_width(&self) -> usize {
        [self.seq, self.registered, self.name, self.phone, self.email]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}
