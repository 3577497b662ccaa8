pub mod csv_table;
pub mod records;
pub mod reference;

pub use csv_table::{CsvTable, column_index, read_csv_table};
pub use records::{passthrough_headers, records_from_table};
pub use reference::{
    REFERENCE_EMAIL_COLUMN, REFERENCE_PHONE_COLUMN, ReferenceTable, read_reference_table,
    reference_from_table,
};
