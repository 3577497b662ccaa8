pub mod sheets;

pub use sheets::{
    write_cleaned, write_cleaned_to, write_distribution, write_distribution_to, write_removed,
    write_removed_to,
};
