//! Compensation record operations.

use contracts::domain::pro_labore::{ProLabore, ProLaboreForm};
use contracts::shared::validation::validate_pro_labore;

use super::repository;
use crate::domain::ServiceError;
use crate::shared::supabase::SupabaseClient;

pub async fn list_all(client: &SupabaseClient) -> Result<Vec<ProLabore>, ServiceError> {
    Ok(repository::list_all(client).await?)
}

/// Validate and insert a new compensation record, returning the created
/// row.
pub async fn create(
    client: &SupabaseClient,
    form: &ProLaboreForm,
) -> Result<ProLabore, ServiceError> {
    let violations = validate_pro_labore(form);
    if !violations.is_empty() {
        return Err(ServiceError::Validation(violations));
    }
    let dto = form.to_dto();
    tracing::info!(month = %dto.month, "inserting pro-labore");
    Ok(repository::insert(client, &dto).await?)
}

/// Validate and overwrite the record with the given id.
pub async fn update(
    client: &SupabaseClient,
    id: i64,
    form: &ProLaboreForm,
) -> Result<(), ServiceError> {
    let violations = validate_pro_labore(form);
    if !violations.is_empty() {
        return Err(ServiceError::Validation(violations));
    }
    let dto = form.to_dto();
    tracing::info!(id, month = %dto.month, "updating pro-labore");
    Ok(repository::update(client, id, &dto).await?)
}

pub async fn delete(client: &SupabaseClient, id: i64) -> Result<(), ServiceError> {
    tracing::info!(id, "deleting pro-labore");
    Ok(repository::delete(client, id).await?)
}
