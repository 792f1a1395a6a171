//! Date-period filtering of daily entries.
//!
//! The dashboard offers preset ranges (all, today, last 7/15/30 days) and
//! a custom start/end pair. Bounds are plain calendar dates compared
//! date-to-date, so a day either falls in the range or it does not;
//! both ends are inclusive.

use chrono::{Duration, NaiveDate};

use crate::domain::daily_entry::DailyEntry;

/// A user-selectable reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    Today,
    /// Today and the `n` days preceding it.
    LastDays(i64),
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Resolve the period to concrete inclusive bounds, anchored on
    /// `today`. `All` has no bounds.
    pub fn bounds(&self, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            Period::All => (None, None),
            Period::Today => (Some(today), Some(today)),
            Period::LastDays(n) => (Some(today - Duration::days(*n)), Some(today)),
            Period::Custom { start, end } => (Some(*start), Some(*end)),
        }
    }
}

/// Entries whose date falls within the inclusive `[start, end]` range.
/// A missing bound leaves that side open.
pub fn filter_by_range(
    entries: &[DailyEntry],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<DailyEntry> {
    entries
        .iter()
        .filter(|entry| {
            start.map_or(true, |start| entry.date >= start)
                && end.map_or(true, |end| entry.date <= end)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str) -> DailyEntry {
        DailyEntry {
            id: 1,
            date: date.parse().unwrap(),
            ad_spend: 10.0,
            sales_value: 20.0,
            lead_count: 2,
            sale_count: 1,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_both_boundaries_are_inclusive() {
        let entries = vec![
            entry("2025-01-09"),
            entry("2025-01-10"),
            entry("2025-01-15"),
            entry("2025-01-20"),
            entry("2025-01-21"),
        ];
        let kept = filter_by_range(&entries, Some(date("2025-01-10")), Some(date("2025-01-20")));
        let dates: Vec<String> = kept.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-01-10", "2025-01-15", "2025-01-20"]);
    }

    #[test]
    fn test_open_bounds_keep_everything() {
        let entries = vec![entry("2020-01-01"), entry("2030-12-31")];
        assert_eq!(filter_by_range(&entries, None, None).len(), 2);
    }

    #[test]
    fn test_single_sided_range() {
        let entries = vec![entry("2025-01-05"), entry("2025-02-05")];
        let kept = filter_by_range(&entries, Some(date("2025-02-01")), None);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date, date("2025-02-05"));
    }

    #[test]
    fn test_today_preset_is_the_single_day() {
        let today = date("2025-06-15");
        assert_eq!(
            Period::Today.bounds(today),
            (Some(today), Some(today))
        );
    }

    #[test]
    fn test_last_days_preset_reaches_back_inclusive() {
        let today = date("2025-06-15");
        let (start, end) = Period::LastDays(7).bounds(today);
        assert_eq!(start, Some(date("2025-06-08")));
        assert_eq!(end, Some(today));

        // An entry exactly on the computed start date survives the filter.
        let entries = vec![entry("2025-06-07"), entry("2025-06-08"), entry("2025-06-15")];
        let kept = filter_by_range(&entries, start, end);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_all_has_no_bounds() {
        assert_eq!(Period::All.bounds(date("2025-06-15")), (None, None));
    }
}
