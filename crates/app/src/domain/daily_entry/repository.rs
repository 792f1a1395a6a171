//! Typed table access for `lancamentos`.

use contracts::domain::daily_entry::{DailyEntry, DailyEntryDto};

use crate::shared::supabase::{Direction, SupabaseClient, SupabaseError};

const TABLE: &str = "lancamentos";

/// All entries, newest first (the order the history table shows them in).
pub async fn list_all(client: &SupabaseClient) -> Result<Vec<DailyEntry>, SupabaseError> {
    client.list(TABLE, Some(("data", Direction::Desc))).await
}

pub async fn insert(
    client: &SupabaseClient,
    dto: &DailyEntryDto,
) -> Result<DailyEntry, SupabaseError> {
    client.insert(TABLE, dto).await
}

pub async fn update(
    client: &SupabaseClient,
    id: i64,
    dto: &DailyEntryDto,
) -> Result<(), SupabaseError> {
    client.update(TABLE, id, dto).await
}

pub async fn delete(client: &SupabaseClient, id: i64) -> Result<(), SupabaseError> {
    client.delete(TABLE, id).await
}
