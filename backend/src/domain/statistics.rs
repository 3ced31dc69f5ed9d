//! Aggregation over ledger snapshots.
//!
//! All figures here are pure reductions over a slice of entries for a given
//! "today". Passing the reference day in keeps every window deterministic
//! under test.
//!
//! ## Windows
//!
//! - **Today**: entries dated exactly on the reference day
//! - **Weekly**: a rolling seven-day window ending on the reference day
//! - **Monthly / last month**: calendar months, matched on year and month
//! - **Series**: per-month totals for charting, in first-seen order

use chrono::{Datelike, Duration, NaiveDate};
use shared::{IncomeEntry, IncomeStats, MonthlyTotal};

use super::calendar::{month_label, previous_month};

/// Compute the full dashboard summary for a ledger snapshot.
pub fn summarize(entries: &[IncomeEntry], today: NaiveDate) -> IncomeStats {
    let week_start = today - Duration::days(6);

    let today_total = sum_where(entries, |entry| entry.date == today);
    let weekly_total = sum_where(entries, |entry| {
        entry.date >= week_start && entry.date <= today
    });
    let monthly_total = sum_where(entries, |entry| {
        entry.date.year() == today.year() && entry.date.month() == today.month()
    });

    let (last_month, last_month_year) = previous_month(today.month(), today.year());
    let last_month_total = sum_where(entries, |entry| {
        entry.date.year() == last_month_year && entry.date.month() == last_month
    });

    let growth = growth_percentage(monthly_total, last_month_total);

    IncomeStats {
        today_total,
        weekly_total,
        monthly_total,
        last_month_total,
        growth_percentage: growth,
        growth_is_positive: growth >= 0.0,
        monthly_series: monthly_series(entries),
    }
}

fn sum_where<F>(entries: &[IncomeEntry], keep: F) -> f64
where
    F: Fn(&IncomeEntry) -> bool,
{
    entries
        .iter()
        .filter(|entry| keep(entry))
        .map(|entry| entry.total)
        .sum()
}

/// Month-over-month growth with fixed fallbacks for an empty previous
/// month: 100% when this month has income, 0% when neither does.
fn growth_percentage(monthly_total: f64, last_month_total: f64) -> f64 {
    if last_month_total == 0.0 {
        if monthly_total > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (monthly_total - last_month_total) / last_month_total * 100.0
    }
}

/// Group totals by month label, preserving the order in which each month
/// first appears in the ledger. The chart renders buckets as given, so the
/// order is part of the contract.
fn monthly_series(entries: &[IncomeEntry]) -> Vec<MonthlyTotal> {
    let mut series: Vec<MonthlyTotal> = Vec::new();
    for entry in entries {
        let label = month_label(entry.date);
        match series.iter_mut().find(|bucket| bucket.label == label) {
            Some(bucket) => bucket.total += entry.total,
            None => series.push(MonthlyTotal {
                label,
                total: entry.total,
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str) -> NaiveDate {
        date.parse().unwrap()
    }

    fn entry(id: u64, date: &str, cash_amount: f64, coin_amount: f64) -> IncomeEntry {
        IncomeEntry::new(id, day(date), cash_amount, coin_amount, "12:00".to_string())
    }

    #[test]
    fn test_single_entry_today_lands_in_every_window() {
        let entries = vec![entry(1, "2024-03-01", 100.0, 20.0)];

        let stats = summarize(&entries, day("2024-03-01"));

        assert_eq!(stats.today_total, 120.0);
        assert_eq!(stats.weekly_total, 120.0);
        assert_eq!(stats.monthly_total, 120.0);
        assert_eq!(stats.last_month_total, 0.0);
        assert_eq!(stats.growth_percentage, 100.0);
        assert!(stats.growth_is_positive);
        assert_eq!(stats.monthly_series.len(), 1);
        assert_eq!(stats.monthly_series[0].label, "Mar 2024");
        assert_eq!(stats.monthly_series[0].total, 120.0);
    }

    #[test]
    fn test_empty_ledger_yields_flat_zeroes() {
        let stats = summarize(&[], day("2024-03-01"));

        assert_eq!(stats.today_total, 0.0);
        assert_eq!(stats.weekly_total, 0.0);
        assert_eq!(stats.monthly_total, 0.0);
        assert_eq!(stats.last_month_total, 0.0);
        assert_eq!(stats.growth_percentage, 0.0);
        assert!(stats.growth_is_positive);
        assert!(stats.monthly_series.is_empty());
    }

    #[test]
    fn test_weekly_window_spans_exactly_seven_days() {
        let entries = vec![
            entry(1, "2024-03-03", 1.0, 0.0),  // day before the window
            entry(2, "2024-03-04", 10.0, 0.0), // oldest day inside
            entry(3, "2024-03-10", 100.0, 0.0), // reference day
            entry(4, "2024-03-11", 1000.0, 0.0), // dated in the future
        ];

        let stats = summarize(&entries, day("2024-03-10"));

        assert_eq!(stats.weekly_total, 110.0);
        assert_eq!(stats.today_total, 100.0);
    }

    #[test]
    fn test_monthly_windows_match_on_year_and_month() {
        let entries = vec![
            entry(1, "2024-03-05", 150.0, 0.0),
            entry(2, "2024-02-20", 200.0, 0.0),
            entry(3, "2023-03-05", 999.0, 0.0), // same month, wrong year
            entry(4, "2023-02-05", 999.0, 0.0),
        ];

        let stats = summarize(&entries, day("2024-03-10"));

        assert_eq!(stats.monthly_total, 150.0);
        assert_eq!(stats.last_month_total, 200.0);
        assert_eq!(stats.growth_percentage, -25.0);
        assert!(!stats.growth_is_positive);
    }

    #[test]
    fn test_last_month_rolls_back_across_the_year_boundary() {
        let entries = vec![
            entry(1, "2024-01-10", 80.0, 0.0),
            entry(2, "2023-12-15", 40.0, 0.0),
        ];

        let stats = summarize(&entries, day("2024-01-20"));

        assert_eq!(stats.monthly_total, 80.0);
        assert_eq!(stats.last_month_total, 40.0);
        assert_eq!(stats.growth_percentage, 100.0);
    }

    #[test]
    fn test_growth_is_zero_when_both_months_are_empty() {
        let entries = vec![entry(1, "2024-01-10", 500.0, 0.0)];

        let stats = summarize(&entries, day("2024-06-15"));

        assert_eq!(stats.monthly_total, 0.0);
        assert_eq!(stats.last_month_total, 0.0);
        assert_eq!(stats.growth_percentage, 0.0);
        assert!(stats.growth_is_positive);
    }

    #[test]
    fn test_monthly_series_keeps_first_seen_order() {
        let entries = vec![
            entry(1, "2024-03-10", 10.0, 0.0),
            entry(2, "2024-01-05", 20.0, 0.0),
            entry(3, "2024-03-20", 30.0, 0.0),
            entry(4, "2024-02-14", 40.0, 0.0),
        ];

        let stats = summarize(&entries, day("2024-03-31"));

        let labels: Vec<&str> = stats
            .monthly_series
            .iter()
            .map(|bucket| bucket.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Mar 2024", "Jan 2024", "Feb 2024"]);
        assert_eq!(stats.monthly_series[0].total, 40.0);
        assert_eq!(stats.monthly_series[1].total, 20.0);
        assert_eq!(stats.monthly_series[2].total, 40.0);
    }
}
