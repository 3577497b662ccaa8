//! Country calling codes and the numbering-plan capability.
//!
//! The table below is bundled configuration data, not logic: one entry per
//! supported calling code with the country name and the length range of the
//! national significant number. Lookup is longest-prefix-first so that
//! 3-digit codes such as `852` are never shadowed by `85` or `8`.

/// One row of the calling-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub name: &'static str,
    /// Shortest valid national significant number, in digits.
    pub min_len: usize,
    /// Longest valid national significant number, in digits.
    pub max_len: usize,
}

/// Bundled calling-code table.
#[rustfmt::skip]
pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "1", name: "United States", min_len: 10, max_len: 10 },
    CountryCode { code: "7", name: "Russia", min_len: 10, max_len: 10 },
    CountryCode { code: "27", name: "South Africa", min_len: 9, max_len: 9 },
    CountryCode { code: "31", name: "Netherlands", min_len: 9, max_len: 9 },
    CountryCode { code: "32", name: "Belgium", min_len: 8, max_len: 9 },
    CountryCode { code: "33", name: "France", min_len: 9, max_len: 9 },
    CountryCode { code: "34", name: "Spain", min_len: 9, max_len: 9 },
    CountryCode { code: "39", name: "Italy", min_len: 9, max_len: 10 },
    CountryCode { code: "41", name: "Switzerland", min_len: 9, max_len: 9 },
    CountryCode { code: "44", name: "United Kingdom", min_len: 9, max_len: 10 },
    CountryCode { code: "45", name: "Denmark", min_len: 8, max_len: 8 },
    CountryCode { code: "46", name: "Sweden", min_len: 7, max_len: 9 },
    CountryCode { code: "47", name: "Norway", min_len: 8, max_len: 8 },
    CountryCode { code: "48", name: "Poland", min_len: 9, max_len: 9 },
    CountryCode { code: "49", name: "Germany", min_len: 10, max_len: 11 },
    CountryCode { code: "52", name: "Mexico", min_len: 10, max_len: 10 },
    CountryCode { code: "55", name: "Brazil", min_len: 10, max_len: 11 },
    CountryCode { code: "60", name: "Malaysia", min_len: 9, max_len: 10 },
    CountryCode { code: "61", name: "Australia", min_len: 9, max_len: 9 },
    CountryCode { code: "62", name: "Indonesia", min_len: 9, max_len: 11 },
    CountryCode { code: "63", name: "Philippines", min_len: 10, max_len: 10 },
    CountryCode { code: "64", name: "New Zealand", min_len: 8, max_len: 9 },
    CountryCode { code: "65", name: "Singapore", min_len: 8, max_len: 8 },
    CountryCode { code: "66", name: "Thailand", min_len: 9, max_len: 9 },
    CountryCode { code: "81", name: "Japan", min_len: 10, max_len: 10 },
    CountryCode { code: "82", name: "South Korea", min_len: 9, max_len: 10 },
    CountryCode { code: "84", name: "Vietnam", min_len: 9, max_len: 10 },
    CountryCode { code: "86", name: "China", min_len: 11, max_len: 11 },
    CountryCode { code: "90", name: "Turkey", min_len: 10, max_len: 10 },
    CountryCode { code: "91", name: "India", min_len: 10, max_len: 10 },
    CountryCode { code: "92", name: "Pakistan", min_len: 10, max_len: 10 },
    CountryCode { code: "95", name: "Myanmar", min_len: 8, max_len: 10 },
    CountryCode { code: "212", name: "Morocco", min_len: 9, max_len: 9 },
    CountryCode { code: "234", name: "Nigeria", min_len: 10, max_len: 10 },
    CountryCode { code: "420", name: "Czechia", min_len: 9, max_len: 9 },
    CountryCode { code: "421", name: "Slovakia", min_len: 9, max_len: 9 },
    CountryCode { code: "852", name: "Hong Kong", min_len: 8, max_len: 8 },
    CountryCode { code: "853", name: "Macau", min_len: 8, max_len: 8 },
    CountryCode { code: "855", name: "Cambodia", min_len: 8, max_len: 9 },
    CountryCode { code: "856", name: "Laos", min_len: 8, max_len: 10 },
    CountryCode { code: "880", name: "Bangladesh", min_len: 10, max_len: 10 },
    CountryCode { code: "886", name: "Taiwan", min_len: 9, max_len: 9 },
    CountryCode { code: "966", name: "Saudi Arabia", min_len: 9, max_len: 9 },
    CountryCode { code: "971", name: "United Arab Emirates", min_len: 9, max_len: 9 },
    CountryCode { code: "972", name: "Israel", min_len: 9, max_len: 9 },
    CountryCode { code: "977", name: "Nepal", min_len: 10, max_len: 10 },
];

/// Split a digit string into its calling code and national number.
///
/// Tries 3-digit, then 2-digit, then 1-digit prefixes so overlapping codes
/// resolve unambiguously.
pub fn split_country_code(digits: &str) -> Option<(&'static CountryCode, &str)> {
    for width in (1..=3).rev() {
        if digits.len() < width {
            continue;
        }
        let (prefix, rest) = digits.split_at(width);
        if let Some(entry) = COUNTRY_CODES.iter().find(|entry| entry.code == prefix) {
            return Some((entry, rest));
        }
    }
    None
}

/// Validation and country resolution over `+`-prefixed candidates.
///
/// The pipeline in `leads-core` depends only on this trait, so it stays
/// testable independently of the bundled table's exact contents.
pub trait NumberingPlan {
    /// Returns true when the candidate's calling code is known and the
    /// national number length is valid for that country.
    fn validate(&self, number: &str) -> bool;

    /// Country name for the candidate's calling code.
    fn country_for(&self, number: &str) -> Option<String>;
}

/// `NumberingPlan` backed by [`COUNTRY_CODES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledPlan;

fn candidate_digits(number: &str) -> Option<&str> {
    let digits = number.strip_prefix('+')?;
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

impl NumberingPlan for BundledPlan {
    fn validate(&self, number: &str) -> bool {
        let Some(digits) = candidate_digits(number) else {
            return false;
        };
        match split_country_code(digits) {
            Some((entry, national)) => {
                (entry.min_len..=entry.max_len).contains(&national.len())
            }
            None => false,
        }
    }

    fn country_for(&self, number: &str) -> Option<String> {
        let digits = candidate_digits(number)?;
        split_country_code(digits).map(|(entry, _)| entry.name.to_string())
    }
}

static BUNDLED: BundledPlan = BundledPlan;

/// The process-wide bundled plan. Immutable after startup.
pub fn bundled_plan() -> &'static BundledPlan {
    &BUNDLED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix_wins() {
        let (entry, rest) = split_country_code("85298765432").expect("hong kong");
        assert_eq!(entry.name, "Hong Kong");
        assert_eq!(rest, "98765432");

        let (entry, rest) = split_country_code("8613812345678").expect("china");
        assert_eq!(entry.name, "China");
        assert_eq!(rest, "13812345678");
    }

    #[test]
    fn validate_checks_national_length() {
        let plan = bundled_plan();
        assert!(plan.validate("+6598765432"));
        assert!(!plan.validate("+65987654321"));
        assert!(plan.validate("+14155552671"));
        assert!(!plan.validate("+1415555267"));
        assert!(!plan.validate("+999123456789"));
        assert!(!plan.validate("6598765432"));
    }

    #[test]
    fn country_resolution() {
        let plan = bundled_plan();
        assert_eq!(plan.country_for("+6598765432").as_deref(), Some("Singapore"));
        assert_eq!(plan.country_for("+84912345678").as_deref(), Some("Vietnam"));
        assert!(plan.country_for("+999123").is_none());
    }

    #[test]
    fn table_codes_are_unique() {
        for (idx, entry) in COUNTRY_CODES.iter().enumerate() {
            assert!(
                !COUNTRY_CODES[idx + 1..].iter().any(|other| other.code == entry.code),
                "duplicate code {}",
                entry.code
            );
        }
    }
}
