//! Explicit application state container.
//!
//! Replaces the implicit top-level screen state of a thin client: the
//! record collections are a read-only cache of the backend, wholly
//! replaced by `reload` after every successful mutation rather than
//! patched in place. Derived metrics are memoized against a data version
//! and recomputed only when a reload actually changes the data.

use std::collections::{HashMap, HashSet};

use contracts::domain::daily_entry::{DailyEntry, DailyEntryForm};
use contracts::domain::pro_labore::{ProLabore, ProLaboreForm};
use contracts::shared::metrics::{monthly_summary, total_metrics, MonthlySummary, TotalMetrics};
use contracts::shared::period::{filter_by_range, Period};

use crate::domain::{daily_entry, pro_labore, ServiceError};
use crate::shared::supabase::{SupabaseClient, SupabaseError};

#[derive(Debug, thiserror::Error)]
#[error("Operação já em andamento para este registro. Aguarde a conclusão.")]
pub struct MutationInFlight {
    pub key: String,
}

/// Failure of a user action routed through the state container.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    InFlight(#[from] MutationInFlight),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[derive(Default)]
pub struct AppState {
    entries: Vec<DailyEntry>,
    pro_labores: Vec<ProLabore>,
    /// Bumped on every data replacement; keys the memoized caches.
    version: u64,
    totals_cache: Option<(u64, TotalMetrics)>,
    monthly_cache: Option<(u64, Vec<MonthlySummary>)>,
    in_flight: HashSet<String>,
}

/// In-flight key for a daily entry submission, keyed by the entry date.
pub fn daily_entry_key(date: &str) -> String {
    format!("lancamentos:{}", date.trim())
}

/// In-flight key for a compensation record submission, keyed by month.
pub fn pro_labore_key(month: &str) -> String {
    format!("prolabore:{}", month.trim())
}

/// In-flight key for a deletion, keyed by the row id.
fn id_key(table: &str, id: i64) -> String {
    format!("{}:id:{}", table, id)
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull both collections from the backend and replace the cache
    /// wholesale. On failure the previous data is kept untouched.
    pub async fn reload(&mut self, client: &SupabaseClient) -> Result<(), SupabaseError> {
        let entries = daily_entry::repository::list_all(client).await?;
        let pro_labores = pro_labore::repository::list_all(client).await?;
        self.replace(entries, pro_labores);
        Ok(())
    }

    /// Replace the cached collections and invalidate memoized metrics.
    pub fn replace(&mut self, entries: Vec<DailyEntry>, pro_labores: Vec<ProLabore>) {
        self.entries = entries;
        self.pro_labores = pro_labores;
        self.version += 1;
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn pro_labores(&self) -> &[ProLabore] {
        &self.pro_labores
    }

    /// Overall totals, memoized per data version.
    pub fn totals(&mut self) -> TotalMetrics {
        match &self.totals_cache {
            Some((version, cached)) if *version == self.version => cached.clone(),
            _ => {
                let computed = total_metrics(&self.entries);
                self.totals_cache = Some((self.version, computed.clone()));
                computed
            }
        }
    }

    /// Per-month aggregates, ascending by month key, memoized per data
    /// version.
    pub fn monthly(&mut self) -> Vec<MonthlySummary> {
        match &self.monthly_cache {
            Some((version, cached)) if *version == self.version => cached.clone(),
            _ => {
                let computed = monthly_summary(&self.entries);
                self.monthly_cache = Some((self.version, computed.clone()));
                computed
            }
        }
    }

    /// Entries within the given reporting period, anchored on the local
    /// calendar date.
    pub fn entries_in(&self, period: &Period) -> Vec<DailyEntry> {
        let (start, end) = period.bounds(chrono::Local::now().date_naive());
        filter_by_range(&self.entries, start, end)
    }

    /// Totals over the given period. Not memoized: the filtered set
    /// depends on the current date, not just the data version.
    pub fn totals_in(&self, period: &Period) -> TotalMetrics {
        total_metrics(&self.entries_in(period))
    }

    /// Per-month aggregates over the given period.
    pub fn monthly_in(&self, period: &Period) -> Vec<MonthlySummary> {
        monthly_summary(&self.entries_in(period))
    }

    /// Month-keyed pro-labore amounts, the join side of the monthly report.
    pub fn pro_labore_by_month(&self) -> HashMap<String, f64> {
        self.pro_labores
            .iter()
            .map(|p| (p.month.clone(), p.amount))
            .collect()
    }

    /// Acquire the in-flight marker for a mutation on `key`. A second
    /// submission for the same key while the first is unsettled is
    /// rejected instead of firing a duplicate request.
    pub fn begin_mutation(&mut self, key: &str) -> Result<(), MutationInFlight> {
        if !self.in_flight.insert(key.to_string()) {
            return Err(MutationInFlight {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    /// Release the marker on settlement, success or failure alike.
    pub fn finish_mutation(&mut self, key: &str) {
        self.in_flight.remove(key);
    }

    // -----------------------------------------------------------------------
    // Mutations: guard, dispatch, then refetch on success.
    // -----------------------------------------------------------------------

    pub async fn create_daily_entry(
        &mut self,
        client: &SupabaseClient,
        form: &DailyEntryForm,
    ) -> Result<DailyEntry, ActionError> {
        let key = daily_entry_key(&form.date);
        self.begin_mutation(&key)?;
        let result = daily_entry::service::create(client, form).await;
        self.finish_mutation(&key);
        let created = result?;
        self.reload(client).await.map_err(ServiceError::from)?;
        Ok(created)
    }

    pub async fn update_daily_entry(
        &mut self,
        client: &SupabaseClient,
        id: i64,
        form: &DailyEntryForm,
    ) -> Result<(), ActionError> {
        let key = daily_entry_key(&form.date);
        self.begin_mutation(&key)?;
        let result = daily_entry::service::update(client, id, form).await;
        self.finish_mutation(&key);
        result?;
        self.reload(client).await.map_err(ServiceError::from)?;
        Ok(())
    }

    pub async fn delete_daily_entry(
        &mut self,
        client: &SupabaseClient,
        id: i64,
    ) -> Result<(), ActionError> {
        let key = id_key("lancamentos", id);
        self.begin_mutation(&key)?;
        let result = daily_entry::service::delete(client, id).await;
        self.finish_mutation(&key);
        result?;
        self.reload(client).await.map_err(ServiceError::from)?;
        Ok(())
    }

    pub async fn create_pro_labore(
        &mut self,
        client: &SupabaseClient,
        form: &ProLaboreForm,
    ) -> Result<ProLabore, ActionError> {
        let key = pro_labore_key(&form.month);
        self.begin_mutation(&key)?;
        let result = pro_labore::service::create(client, form).await;
        self.finish_mutation(&key);
        let created = result?;
        self.reload(client).await.map_err(ServiceError::from)?;
        Ok(created)
    }

    pub async fn update_pro_labore(
        &mut self,
        client: &SupabaseClient,
        id: i64,
        form: &ProLaboreForm,
    ) -> Result<(), ActionError> {
        let key = pro_labore_key(&form.month);
        self.begin_mutation(&key)?;
        let result = pro_labore::service::update(client, id, form).await;
        self.finish_mutation(&key);
        result?;
        self.reload(client).await.map_err(ServiceError::from)?;
        Ok(())
    }

    pub async fn delete_pro_labore(
        &mut self,
        client: &SupabaseClient,
        id: i64,
    ) -> Result<(), ActionError> {
        let key = id_key("prolabore", id);
        self.begin_mutation(&key)?;
        let result = pro_labore::service::delete(client, id).await;
        self.finish_mutation(&key);
        result?;
        self.reload(client).await.map_err(ServiceError::from)?;
        Ok(())
    }
}
