pub mod daily_entry;
pub mod pro_labore;
