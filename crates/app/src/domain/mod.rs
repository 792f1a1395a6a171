pub mod daily_entry;
pub mod pro_labore;

use crate::shared::supabase::SupabaseError;

/// Failure of a domain operation, already split along the error taxonomy:
/// local pre-flight violations versus a backend-reported failure reduced
/// to its user-facing sentence.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("dados inválidos: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Backend(String),
}

impl From<SupabaseError> for ServiceError {
    fn from(error: SupabaseError) -> Self {
        ServiceError::Backend(error.friendly())
    }
}
