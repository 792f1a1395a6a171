//! Typed table access for `prolabore`.

use contracts::domain::pro_labore::{ProLabore, ProLaboreDto};

use crate::shared::supabase::{Direction, SupabaseClient, SupabaseError};

const TABLE: &str = "prolabore";

/// All compensation records, newest month first.
pub async fn list_all(client: &SupabaseClient) -> Result<Vec<ProLabore>, SupabaseError> {
    client.list(TABLE, Some(("mes_ano", Direction::Desc))).await
}

pub async fn insert(
    client: &SupabaseClient,
    dto: &ProLaboreDto,
) -> Result<ProLabore, SupabaseError> {
    client.insert(TABLE, dto).await
}

pub async fn update(
    client: &SupabaseClient,
    id: i64,
    dto: &ProLaboreDto,
) -> Result<(), SupabaseError> {
    client.update(TABLE, id, dto).await
}

pub async fn delete(client: &SupabaseClient, id: i64) -> Result<(), SupabaseError> {
    client.delete(TABLE, id).await
}
