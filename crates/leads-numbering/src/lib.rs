//! Bundled numbering-plan reference data.
//!
//! Everything in this crate is static configuration: the Vietnamese national
//! patterns with the 2018 legacy-prefix migration table, and the country
//! calling-code table behind the [`NumberingPlan`] capability trait. Tables
//! are initialized at process start and never mutated.

pub mod plan;
pub mod vietnam;

pub use plan::{BundledPlan, COUNTRY_CODES, CountryCode, NumberingPlan, bundled_plan, split_country_code};
pub use vietnam::{
    COUNTRY_CODE, LEGACY_MOBILE_PREFIXES, is_landline_number, is_mobile_number,
    remap_legacy_prefix,
};
