pub mod aggregate;

pub use aggregate::{DailyEntry, DailyEntryDto, DailyEntryForm};
