//! Vietnamese national numbering patterns.
//!
//! Mobile numbers are 10 digits: `0`, a network digit `3`..`9`, then 8
//! subscriber digits. Landline numbers are 11 digits: the `02` area prefix
//! followed by 9 digits. Before the 2018 renumbering, mobile subscribers on
//! 4-digit prefixes had 11-digit numbers; those prefixes were retired and
//! mapped onto modern 3-digit prefixes, shortening the numbers to 10 digits.

/// Vietnam's E.164 country calling code.
pub const COUNTRY_CODE: &str = "84";

/// Retired 4-digit mobile prefixes and their 2018 replacements.
///
/// One entry per prefix retired in the 2018 migration, grouped by carrier:
/// MobiFone, VinaPhone, Viettel, Vietnamobile, Gmobile.
pub const LEGACY_MOBILE_PREFIXES: &[(&str, &str)] = &[
    ("0120", "070"),
    ("0121", "079"),
    ("0122", "077"),
    ("0126", "076"),
    ("0128", "078"),
    ("0123", "083"),
    ("0124", "084"),
    ("0125", "085"),
    ("0127", "081"),
    ("0129", "082"),
    ("0162", "032"),
    ("0163", "033"),
    ("0164", "034"),
    ("0165", "035"),
    ("0166", "036"),
    ("0167", "037"),
    ("0168", "038"),
    ("0169", "039"),
    ("0186", "056"),
    ("0188", "058"),
    ("0199", "059"),
];

/// Returns true for a canonical 10-digit mobile number.
pub fn is_mobile_number(digits: &str) -> bool {
    let mut chars = digits.chars();
    digits.len() == 10
        && chars.next() == Some('0')
        && chars.next().is_some_and(|ch| ('3'..='9').contains(&ch))
        && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// Returns true for a canonical 11-digit landline number.
pub fn is_landline_number(digits: &str) -> bool {
    digits.len() == 11 && digits.starts_with("02") && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// Rewrite an 11-digit number on a retired prefix to its modern form.
///
/// Only 11-digit strings can carry a retired prefix (4 prefix digits plus 7
/// subscriber digits); anything else returns `None`.
pub fn remap_legacy_prefix(digits: &str) -> Option<String> {
    if digits.len() != 11 {
        return None;
    }
    let (prefix, subscriber) = digits.split_at(4);
    LEGACY_MOBILE_PREFIXES
        .iter()
        .find(|(retired, _)| *retired == prefix)
        .map(|(_, modern)| format!("{modern}{subscriber}"))
}
