//! Canonical phone number representations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of phone normalization.
///
/// A national value is a 10-digit mobile number (`0` + `3`..`9` + 8 digits)
/// or an 11-digit landline number (`02` + 9 digits). An international value
/// carries the `+`-prefixed E.164 digits and the country resolved from the
/// calling code. `Invalid` means no pipeline stage accepted the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum NormalizedPhone {
    National(String),
    International { number: String, country: String },
    Invalid,
}

impl NormalizedPhone {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Collision key for duplicate detection: the canonical text form.
    /// Invalid numbers never collide.
    pub fn as_key(&self) -> Option<String> {
        if self.is_valid() {
            Some(self.to_string())
        } else {
            None
        }
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::National(number) => f.write_str(number),
            Self::International { number, country } => {
                write!(f, "{number} / {country}")
            }
            Self::Invalid => Ok(()),
        }
    }
}
