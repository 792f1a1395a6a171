//! Pure KPI computation over daily entries.
//!
//! Every ratio is guarded against a zero denominator and returns 0.0 in
//! that case; nothing here allocates state, touches the backend or fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::daily_entry::DailyEntry;

// ---------------------------------------------------------------------------
// Scalar formulas
// ---------------------------------------------------------------------------

/// Gross profit: sales value minus ad spend. May be negative.
pub fn profit(sales_value: f64, ad_spend: f64) -> f64 {
    sales_value - ad_spend
}

/// Cost per lead: ad spend / lead count, 0 when there are no leads.
pub fn cost_per_lead(ad_spend: f64, lead_count: i64) -> f64 {
    if lead_count == 0 {
        return 0.0;
    }
    ad_spend / lead_count as f64
}

/// Cost per acquisition: ad spend / sale count, 0 when there are no sales.
pub fn cost_per_acquisition(ad_spend: f64, sale_count: i64) -> f64 {
    if sale_count == 0 {
        return 0.0;
    }
    ad_spend / sale_count as f64
}

/// Average ticket: sales value / sale count, 0 when there are no sales.
pub fn average_ticket(sales_value: f64, sale_count: i64) -> f64 {
    if sale_count == 0 {
        return 0.0;
    }
    sales_value / sale_count as f64
}

/// ROI as a multiplier (2.0 = every unit spent returned two), 0 when
/// nothing was spent.
pub fn roi(sales_value: f64, ad_spend: f64) -> f64 {
    if ad_spend == 0.0 {
        return 0.0;
    }
    sales_value / ad_spend
}

/// How many leads it takes to close one sale, 0 when there are no sales.
pub fn leads_per_sale(lead_count: i64, sale_count: i64) -> f64 {
    if sale_count == 0 {
        return 0.0;
    }
    lead_count as f64 / sale_count as f64
}

/// Lead-to-sale conversion as a percentage, 0 when there are no leads.
pub fn conversion_rate(lead_count: i64, sale_count: i64) -> f64 {
    if lead_count == 0 {
        return 0.0;
    }
    sale_count as f64 / lead_count as f64 * 100.0
}

// ---------------------------------------------------------------------------
// Per-entry and aggregate results
// ---------------------------------------------------------------------------

/// KPIs derived from a single daily entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub profit: f64,
    pub cpl: f64,
    pub cpa: f64,
    pub average_ticket: f64,
    pub roi: f64,
}

pub fn daily_metrics(entry: &DailyEntry) -> DailyMetrics {
    DailyMetrics {
        profit: profit(entry.sales_value, entry.ad_spend),
        cpl: cost_per_lead(entry.ad_spend, entry.lead_count),
        cpa: cost_per_acquisition(entry.ad_spend, entry.sale_count),
        average_ticket: average_ticket(entry.sales_value, entry.sale_count),
        roi: roi(entry.sales_value, entry.ad_spend),
    }
}

/// Summed inputs and the KPIs computed from those sums.
///
/// Ratios are always derived from the aggregate totals, never from a mean
/// of per-day ratios: an average of ratios is distorted whenever record
/// volumes differ day to day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalMetrics {
    pub ad_spend: f64,
    pub sales_value: f64,
    pub lead_count: i64,
    pub sale_count: i64,
    pub profit: f64,
    pub cpl: f64,
    pub cpa: f64,
    pub average_ticket: f64,
    pub roi: f64,
    pub leads_per_sale: f64,
}

impl TotalMetrics {
    pub fn zero() -> Self {
        Self {
            ad_spend: 0.0,
            sales_value: 0.0,
            lead_count: 0,
            sale_count: 0,
            profit: 0.0,
            cpl: 0.0,
            cpa: 0.0,
            average_ticket: 0.0,
            roi: 0.0,
            leads_per_sale: 0.0,
        }
    }
}

pub fn total_metrics(entries: &[DailyEntry]) -> TotalMetrics {
    let mut ad_spend = 0.0;
    let mut sales_value = 0.0;
    let mut lead_count = 0i64;
    let mut sale_count = 0i64;

    for entry in entries {
        ad_spend += entry.ad_spend;
        sales_value += entry.sales_value;
        lead_count += entry.lead_count;
        sale_count += entry.sale_count;
    }

    TotalMetrics {
        ad_spend,
        sales_value,
        lead_count,
        sale_count,
        profit: profit(sales_value, ad_spend),
        cpl: cost_per_lead(ad_spend, lead_count),
        cpa: cost_per_acquisition(ad_spend, sale_count),
        average_ticket: average_ticket(sales_value, sale_count),
        roi: roi(sales_value, ad_spend),
        leads_per_sale: leads_per_sale(lead_count, sale_count),
    }
}

/// Aggregate totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Month key, `YYYY-MM`.
    pub month: String,
    pub totals: TotalMetrics,
}

/// Group entries by calendar month and aggregate each group, ascending by
/// month key. Empty input produces an empty vec.
pub fn monthly_summary(entries: &[DailyEntry]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<String, Vec<&DailyEntry>> = BTreeMap::new();
    for entry in entries {
        by_month.entry(entry.month_key()).or_default().push(entry);
    }

    by_month
        .into_iter()
        .map(|(month, group)| {
            let owned: Vec<DailyEntry> = group.into_iter().cloned().collect();
            MonthlySummary {
                month,
                totals: total_metrics(&owned),
            }
        })
        .collect()
}

/// Monthly net profit after the month's compensation draw.
pub fn net_profit(gross_profit: f64, pro_labore: f64) -> f64 {
    gross_profit - pro_labore
}
