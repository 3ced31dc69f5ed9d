//! "Same day last month" matching.
//!
//! Calendar months do not line up day-for-day, so comparing an entry
//! against last month works by weekday and week position instead: among
//! last month's entries that fall on the same weekday, pick the one whose
//! week-of-month sits closest to the target's. A first Friday compares
//! against a first Friday, a late Friday against a late one.

use chrono::Datelike;
use shared::{IncomeEntry, LastMonthComparison};

use super::calendar::{previous_month, week_of_month};

/// Find the counterpart of `target` in the previous calendar month.
///
/// Candidates must share the target's weekday and fall in the calendar
/// month directly before the target's date. The winner minimizes the
/// week-of-month distance; on a tie the earliest candidate in ledger
/// order wins. Returns `None` when no candidate exists.
pub fn find_last_month_match(
    entries: &[IncomeEntry],
    target: &IncomeEntry,
) -> Option<LastMonthComparison> {
    let (prev_month, prev_year) = previous_month(target.date.month(), target.date.year());
    let target_week = week_of_month(target.date);

    let mut best: Option<(&IncomeEntry, u32)> = None;
    for candidate in entries {
        if candidate.date.year() != prev_year || candidate.date.month() != prev_month {
            continue;
        }
        if candidate.weekday != target.weekday {
            continue;
        }

        let distance = week_of_month(candidate.date).abs_diff(target_week);
        match best {
            // Strict comparison keeps the first of equally-distant candidates
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    let (matched, _) = best?;
    let difference = target.total - matched.total;
    let percent_change = if matched.total == 0.0 {
        None
    } else {
        Some(difference / matched.total * 100.0)
    };

    Some(LastMonthComparison {
        matched: matched.clone(),
        difference,
        percent_change,
    })
}
