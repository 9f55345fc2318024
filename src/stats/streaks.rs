// Streak computation over the dense daily contribution series.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::contributions::DailyCount;

/// Current and longest contribution streaks with their date ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
    pub current_start: Option<String>,
    pub current_end: Option<String>,
    pub longest_start: Option<String>,
    pub longest_end: Option<String>,
}

/// Calculate streaks from a daily series. The current streak walks backwards
/// from `today`; a day without contributions ends it immediately.
pub fn calculate(daily: &[DailyCount], today: NaiveDate) -> Streaks {
    let contribution_dates: BTreeSet<NaiveDate> = daily
        .iter()
        .filter(|d| d.count > 0)
        .filter_map(|d| NaiveDate::parse_from_str(&d.date, "%Y-%m-%d").ok())
        .collect();

    if contribution_dates.is_empty() {
        return Streaks::default();
    }

    // Current streak, counting back from today.
    let mut current = 0u32;
    let mut current_start = None;
    let mut check = today;
    while contribution_dates.contains(&check) {
        current += 1;
        current_start = Some(check);
        match check.checked_sub_days(Days::new(1)) {
            Some(prev) => check = prev,
            None => break,
        }
    }
    let current_end = (current > 0).then_some(today);

    // Longest run of consecutive contribution dates.
    let mut longest = 0u32;
    let mut longest_start = None;
    let mut longest_end = None;
    let mut run_start = None;
    let mut run_end = None;
    let mut run_len = 0u32;

    for &date in &contribution_dates {
        let extends = run_end
            .and_then(|end: NaiveDate| end.checked_add_days(Days::new(1)))
            .is_some_and(|next| next == date);

        if extends {
            run_len += 1;
        } else {
            run_start = Some(date);
            run_len = 1;
        }
        run_end = Some(date);

        if run_len > longest {
            longest = run_len;
            longest_start = run_start;
            longest_end = run_end;
        }
    }

    let fmt = |d: NaiveDate| d.format("%Y-%m-%d").to_string();

    Streaks {
        current,
        longest,
        current_start: current_start.map(fmt),
        current_end: current_end.map(fmt),
        longest_start: longest_start.map(fmt),
        longest_end: longest_end.map(fmt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u64) -> DailyCount {
        DailyCount {
            date: date.to_string(),
            count,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_series() {
        let streaks = calculate(&[], date("2024-06-15"));
        assert_eq!(streaks, Streaks::default());
    }

    #[test]
    fn test_no_contribution_days() {
        let daily = vec![day("2024-06-14", 0), day("2024-06-15", 0)];
        let streaks = calculate(&daily, date("2024-06-15"));
        assert_eq!(streaks, Streaks::default());
    }

    #[test]
    fn test_current_streak_ending_today() {
        let daily = vec![
            day("2024-06-12", 0),
            day("2024-06-13", 2),
            day("2024-06-14", 1),
            day("2024-06-15", 3),
        ];
        let streaks = calculate(&daily, date("2024-06-15"));

        assert_eq!(streaks.current, 3);
        assert_eq!(streaks.current_start.as_deref(), Some("2024-06-13"));
        assert_eq!(streaks.current_end.as_deref(), Some("2024-06-15"));
        assert_eq!(streaks.longest, 3);
    }

    #[test]
    fn test_streak_broken_yesterday_is_not_current() {
        let daily = vec![day("2024-06-13", 1), day("2024-06-14", 1)];
        let streaks = calculate(&daily, date("2024-06-15"));

        assert_eq!(streaks.current, 0);
        assert!(streaks.current_start.is_none());
        assert_eq!(streaks.longest, 2);
    }

    #[test]
    fn test_longest_streak_in_the_middle() {
        let daily = vec![
            day("2024-06-01", 1),
            day("2024-06-02", 1),
            day("2024-06-03", 1),
            day("2024-06-04", 1),
            day("2024-06-06", 1),
            day("2024-06-15", 2),
        ];
        let streaks = calculate(&daily, date("2024-06-15"));

        assert_eq!(streaks.longest, 4);
        assert_eq!(streaks.longest_start.as_deref(), Some("2024-06-01"));
        assert_eq!(streaks.longest_end.as_deref(), Some("2024-06-04"));
        assert_eq!(streaks.current, 1);
        assert_eq!(streaks.current_start.as_deref(), Some("2024-06-15"));
    }

    #[test]
    fn test_single_day_streak() {
        let daily = vec![day("2024-06-15", 5)];
        let streaks = calculate(&daily, date("2024-06-15"));

        assert_eq!(streaks.current, 1);
        assert_eq!(streaks.longest, 1);
        assert_eq!(streaks.longest_start, streaks.longest_end);
    }
}
