//! Daily entry operations: pre-flight validation, then the backend call.

use contracts::domain::daily_entry::{DailyEntry, DailyEntryForm};
use contracts::shared::validation::validate_daily_entry;

use super::repository;
use crate::domain::ServiceError;
use crate::shared::supabase::SupabaseClient;

pub async fn list_all(client: &SupabaseClient) -> Result<Vec<DailyEntry>, ServiceError> {
    Ok(repository::list_all(client).await?)
}

/// Validate and insert a new daily entry, returning the created row.
pub async fn create(
    client: &SupabaseClient,
    form: &DailyEntryForm,
) -> Result<DailyEntry, ServiceError> {
    let dto = validated_dto(form)?;
    tracing::info!(date = %dto.date, "inserting daily entry");
    Ok(repository::insert(client, &dto).await?)
}

/// Validate and overwrite the entry with the given id.
pub async fn update(
    client: &SupabaseClient,
    id: i64,
    form: &DailyEntryForm,
) -> Result<(), ServiceError> {
    let dto = validated_dto(form)?;
    tracing::info!(id, date = %dto.date, "updating daily entry");
    Ok(repository::update(client, id, &dto).await?)
}

pub async fn delete(client: &SupabaseClient, id: i64) -> Result<(), ServiceError> {
    tracing::info!(id, "deleting daily entry");
    Ok(repository::delete(client, id).await?)
}

fn validated_dto(
    form: &DailyEntryForm,
) -> Result<contracts::domain::daily_entry::DailyEntryDto, ServiceError> {
    let violations = validate_daily_entry(form);
    if !violations.is_empty() {
        return Err(ServiceError::Validation(violations));
    }
    form.to_dto()
        .map_err(|message| ServiceError::Validation(vec![message]))
}
