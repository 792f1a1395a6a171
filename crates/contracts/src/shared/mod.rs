pub mod errors;
pub mod format;
pub mod metrics;
pub mod period;
pub mod validation;
