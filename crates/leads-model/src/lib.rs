pub mod assignment;
pub mod dedupe;
pub mod error;
pub mod phone;
pub mod record;

pub use assignment::{AssignedRecord, StaffRoster, parse_name_list};
pub use dedupe::{DedupeOutcome, DuplicateCause, RemovedRecord};
pub use error::{LeadError, Result};
pub use phone::NormalizedPhone;
pub use record::{ColumnLayout, Record};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_record_reason_joins_causes() {
        let removed = RemovedRecord {
            record: Record::new(5),
            causes: vec![DuplicateCause::PhoneOf(2), DuplicateCause::EmailOf(3)],
        };
        assert_eq!(removed.reason(), "phone matches row 2; email matches row 3");
    }

    #[test]
    fn phone_display_forms() {
        let national = NormalizedPhone::National("0912345678".to_string());
        assert_eq!(national.to_string(), "0912345678");

        let international = NormalizedPhone::International {
            number: "+6598765432".to_string(),
            country: "Singapore".to_string(),
        };
        assert_eq!(international.to_string(), "+6598765432 / Singapore");
        assert_eq!(NormalizedPhone::Invalid.to_string(), "");
        assert!(NormalizedPhone::Invalid.as_key().is_none());
    }

    #[test]
    fn name_list_parsing() {
        assert_eq!(
            parse_name_list(" An, Bình ,,Chi "),
            vec!["An".to_string(), "Bình".to_string(), "Chi".to_string()]
        );
        assert!(parse_name_list("  ,  ").is_empty());
    }

    #[test]
    fn record_serializes() {
        let record = Record {
            seq: 1,
            registered: "01/02/2024".to_string(),
            name: "Nguyễn Văn An".to_string(),
            phone: "0912345678".to_string(),
            email: "an@example.com".to_string(),
            extra: vec!["note".to_string()],
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: Record = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn layout_rejects_overlapping_offsets() {
        assert!(ColumnLayout::new(0, 1, 2, 3, 4).is_ok());
        assert!(ColumnLayout::new(0, 0, 2, 3, 4).is_err());
    }

    #[test]
    fn layout_defaults_cover_fixed_columns() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.min_width(), 5);
        assert!(layout.covers(0));
        assert!(layout.covers(4));
        assert!(!layout.covers(5));
    }
}
