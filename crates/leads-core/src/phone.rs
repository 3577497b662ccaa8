//! Phone normalization pipeline.
//!
//! A layered rewrite-and-classify pass over free-text phone strings. Cheap,
//! unambiguous domestic rewrites run before international parsing: the
//! domestic market carries formatting debt (the 2018 prefix migration) and a
//! 9-digit national number missing its leading zero would otherwise collide
//! with shorter country codes. Every stage either accepts a canonical value
//! or falls through; nothing raises.
//!
//! Stage order:
//! 1. sanitize (digits + leading `+`, `O`→`0`, `00`→`+`, artifacts dropped)
//! 2. retired-prefix remap on 11-digit strings
//! 3. `84`/`+84` country-code collapse to the `0`-prefixed national form
//! 4. direct national match (10-digit mobile, 11-digit landline)
//! 5. missing-leading-zero recovery for 9-digit strings
//! 6. international parse of `+`-prefixed strings
//! 7. implicit country-code detection, longest prefix first
//! 8. reject
//!
//! Vietnamese numbers are never emitted as international: a number whose
//! resolved calling code is `84` at stage 6 or 7 was refused by the
//! national rewrites above, and re-emitting it would double-count the
//! domestic market, so it is rejected instead.

use leads_model::NormalizedPhone;
use leads_numbering::{
    COUNTRY_CODE, NumberingPlan, bundled_plan, is_landline_number, is_mobile_number,
    remap_legacy_prefix, split_country_code,
};

/// Fewest national digits stage 7 will accept after an implied country code.
const MIN_IMPLIED_NATIONAL_DIGITS: usize = 7;

/// Normalize a raw phone cell against the bundled numbering plan.
pub fn normalize_phone(raw: &str) -> NormalizedPhone {
    normalize_phone_with_plan(raw, bundled_plan())
}

/// Normalize a raw phone cell against the given numbering plan.
pub fn normalize_phone_with_plan(raw: &str, plan: &dyn NumberingPlan) -> NormalizedPhone {
    let Some((plus, digits)) = sanitize(raw) else {
        return NormalizedPhone::Invalid;
    };

    // Stages 2-3: collapse an explicit 84 country code into national form.
    if digits.starts_with(COUNTRY_CODE) {
        let candidate = format!("0{}", &digits[COUNTRY_CODE.len()..]);
        if let Some(national) = accept_national(&candidate) {
            return national;
        }
    }

    if !plus {
        // Stages 2 and 4 on the bare string.
        if let Some(national) = accept_national(&digits) {
            return national;
        }
        // Stage 5: recover a leading zero dropped by numeric cell formats.
        if digits.len() == 9 && digits.starts_with(|ch| ('3'..='9').contains(&ch)) {
            let candidate = format!("0{digits}");
            if is_mobile_number(&candidate) {
                return NormalizedPhone::National(candidate);
            }
        }
    }

    // Stages 6-7: international, explicit or implied.
    let Some((entry, national)) = split_country_code(&digits) else {
        return NormalizedPhone::Invalid;
    };
    if entry.code == COUNTRY_CODE {
        return NormalizedPhone::Invalid;
    }
    if !plus && national.len() < MIN_IMPLIED_NATIONAL_DIGITS {
        return NormalizedPhone::Invalid;
    }
    let number = format!("+{digits}");
    if !plan.validate(&number) {
        return NormalizedPhone::Invalid;
    }
    match plan.country_for(&number) {
        Some(country) => NormalizedPhone::International { number, country },
        None => NormalizedPhone::Invalid,
    }
}

/// Stage 1: reduce a raw cell to digits plus an optional leading `+`.
///
/// Spreadsheet artifacts (leading `=`/quotes, curly quotes, separators) are
/// dropped and a `00` international prefix collapses to `+`. A confusable
/// `O`/`o` becomes `0` only when it touches a digit; an `o` inside a word
/// (or inside this pipeline's own country annotation) is not a digit typo.
/// Returns `None` when no digits survive.
fn sanitize(raw: &str) -> Option<(bool, String)> {
    let chars: Vec<char> = raw.chars().collect();
    let mut digits = String::new();
    let mut plus = false;
    for (idx, &ch) in chars.iter().enumerate() {
        match ch {
            '0'..='9' => digits.push(ch),
            'O' | 'o' => {
                let prev_digit = idx > 0 && chars[idx - 1].is_ascii_digit();
                let next_digit = chars.get(idx + 1).is_some_and(char::is_ascii_digit);
                if prev_digit || next_digit {
                    digits.push('0');
                }
            }
            '+' if digits.is_empty() => plus = true,
            _ => {}
        }
    }
    if !plus && digits.starts_with("00") {
        plus = true;
        digits.drain(..2);
    }
    if digits.is_empty() {
        None
    } else {
        Some((plus, digits))
    }
}

/// Stages 2 and 4 over a candidate national string.
fn accept_national(candidate: &str) -> Option<NormalizedPhone> {
    if candidate.len() == 11
        && let Some(modern) = remap_legacy_prefix(candidate)
        && is_mobile_number(&modern)
    {
        return Some(NormalizedPhone::National(modern));
    }
    if is_mobile_number(candidate) || is_landline_number(candidate) {
        return Some(NormalizedPhone::National(candidate.to_string()));
    }
    None
}
