// Contribution series derived from the public events timeline.
// GitHub has no direct contributions API, so events within the trailing year
// are bucketed into daily and monthly counts.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::github::{Event, GitHubClient, Repo};

const DAILY_CHART_DAYS: usize = 60;
const MONTHLY_CHART_MONTHS: usize = 12;
const WINDOW_DAYS: u64 = 365;

/// Contributions on a single day, `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

/// Contributions in a single month, `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

/// Aggregated activity over the trailing year.
#[derive(Debug, Clone, Default)]
pub struct Activity {
    pub total: u64,
    pub contributions_last_year: u64,
    pub commits_last_year: u64,
    pub prs_last_year: u64,
    pub issues_last_year: u64,
    pub contributed_to: usize,
    /// Dense zero-filled series covering the whole window; streak input.
    pub daily_year: Vec<DailyCount>,
    /// Last 60 days, for the daily chart.
    pub daily: Vec<DailyCount>,
    /// Last 12 months, for the monthly chart.
    pub monthly: Vec<MonthlyCount>,
}

/// Collect activity from the events timeline, falling back to a rough
/// per-repository estimate when the events fetch fails.
pub async fn collect(client: &GitHubClient, login: &str, repos: &[Repo]) -> Activity {
    match client.get_user_events(login).await {
        Ok(events) => from_events(login, &events, Utc::now()),
        Err(e) => {
            warn!("events fetch failed for {login}, estimating from repos: {e}");
            estimate_from_repos(repos.len())
        }
    }
}

/// Bucket events into daily/monthly series and last-year counters.
pub fn from_events(login: &str, events: &[Event], now: DateTime<Utc>) -> Activity {
    let today = now.date_naive();
    let window_start = today - Days::new(WINDOW_DAYS);

    let mut daily_buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut monthly_buckets: BTreeMap<String, u64> = BTreeMap::new();
    let mut commits_last_year = 0u64;
    let mut prs_last_year = 0u64;
    let mut issues_last_year = 0u64;
    let mut contributed_to: BTreeSet<String> = BTreeSet::new();

    for event in events {
        let date = event.created_at.date_naive();
        if date < window_start {
            continue;
        }

        *daily_buckets.entry(date).or_default() += 1;
        *monthly_buckets
            .entry(date.format("%Y-%m").to_string())
            .or_default() += 1;

        match event.event_type.as_str() {
            "PushEvent" => commits_last_year += event.payload.size.unwrap_or(0),
            "PullRequestEvent" => prs_last_year += 1,
            "IssuesEvent" => issues_last_year += 1,
            _ => {}
        }

        if let Some(repo) = &event.repo {
            if let Some((owner, _)) = repo.name.split_once('/') {
                if owner != login {
                    contributed_to.insert(repo.name.clone());
                }
            }
        }
    }

    // Dense zero-filled daily series over the window.
    let mut daily_year = Vec::new();
    let mut day = window_start;
    while day <= today {
        daily_year.push(DailyCount {
            date: day.format("%Y-%m-%d").to_string(),
            count: daily_buckets.get(&day).copied().unwrap_or(0),
        });
        day = day + Days::new(1);
    }

    // Dense monthly series from the window start's month through the current one.
    let mut monthly = Vec::new();
    let mut month = first_of_month(window_start);
    let current_month = first_of_month(today);
    while month <= current_month {
        let key = month.format("%Y-%m").to_string();
        monthly.push(MonthlyCount {
            count: monthly_buckets.get(&key).copied().unwrap_or(0),
            month: key,
        });
        month = next_month(month);
    }

    let total: u64 = daily_buckets.values().sum();

    let daily = daily_year
        .iter()
        .rev()
        .take(DAILY_CHART_DAYS)
        .rev()
        .cloned()
        .collect();
    let monthly = monthly
        .into_iter()
        .rev()
        .take(MONTHLY_CHART_MONTHS)
        .rev()
        .collect();

    Activity {
        total,
        contributions_last_year: total,
        commits_last_year,
        prs_last_year,
        issues_last_year,
        contributed_to: contributed_to.len(),
        daily_year,
        daily,
        monthly,
    }
}

/// Rough activity estimate used when the events API is unavailable.
pub fn estimate_from_repos(repo_count: usize) -> Activity {
    let repos = repo_count as u64;
    Activity {
        commits_last_year: repos * 10,
        prs_last_year: repos * 2,
        issues_last_year: repos,
        ..Activity::default()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists.
    date.with_day(1).unwrap_or(date)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{EventPayload, EventRepo};
    use chrono::TimeZone;

    fn event(event_type: &str, at: DateTime<Utc>, repo: &str, push_size: Option<u64>) -> Event {
        Event {
            event_type: event_type.to_string(),
            created_at: at,
            repo: Some(EventRepo {
                name: repo.to_string(),
            }),
            payload: EventPayload { size: push_size },
        }
    }

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_events_are_bucketed_by_day_and_month() {
        let now = ts(2024, 6, 15);
        let events = vec![
            event("PushEvent", ts(2024, 6, 14), "alice/repo", Some(3)),
            event("PushEvent", ts(2024, 6, 14), "alice/repo", Some(2)),
            event("IssuesEvent", ts(2024, 5, 1), "alice/repo", None),
        ];

        let activity = from_events("alice", &events, now);

        assert_eq!(activity.total, 3);
        assert_eq!(activity.contributions_last_year, 3);
        assert_eq!(activity.commits_last_year, 5);
        assert_eq!(activity.issues_last_year, 1);
        assert_eq!(activity.prs_last_year, 0);

        let june_14 = activity
            .daily_year
            .iter()
            .find(|d| d.date == "2024-06-14")
            .unwrap();
        assert_eq!(june_14.count, 2);

        let may = activity.monthly.iter().find(|m| m.month == "2024-05").unwrap();
        assert_eq!(may.count, 1);
    }

    #[test]
    fn test_events_outside_window_are_ignored() {
        let now = ts(2024, 6, 15);
        let events = vec![event("PushEvent", ts(2022, 1, 1), "alice/old", Some(10))];

        let activity = from_events("alice", &events, now);

        assert_eq!(activity.total, 0);
        assert_eq!(activity.commits_last_year, 0);
    }

    #[test]
    fn test_contributed_to_excludes_own_repos() {
        let now = ts(2024, 6, 15);
        let events = vec![
            event("PullRequestEvent", ts(2024, 6, 1), "alice/mine", None),
            event("PullRequestEvent", ts(2024, 6, 2), "bob/theirs", None),
            event("PullRequestEvent", ts(2024, 6, 3), "bob/theirs", None),
            event("PullRequestEvent", ts(2024, 6, 4), "carol/other", None),
        ];

        let activity = from_events("alice", &events, now);

        assert_eq!(activity.contributed_to, 2);
        assert_eq!(activity.prs_last_year, 4);
    }

    #[test]
    fn test_series_lengths() {
        let now = ts(2024, 6, 15);
        let activity = from_events("alice", &[], now);

        assert_eq!(activity.daily_year.len(), 366);
        assert_eq!(activity.daily.len(), 60);
        assert_eq!(activity.monthly.len(), 12);
        assert!(activity.daily_year.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_dense_series_spans_window() {
        let now = ts(2025, 3, 1);
        let activity = from_events("alice", &[], now);

        let first = activity.daily_year.first().unwrap();
        let last = activity.daily_year.last().unwrap();
        assert_eq!(first.date, "2024-03-01");
        assert_eq!(last.date, "2025-03-01");
        assert_eq!(activity.daily_year.len(), 366);
        assert_eq!(activity.monthly.len(), 12);
    }

    #[test]
    fn test_daily_chart_keeps_most_recent_days() {
        let now = ts(2024, 6, 15);
        let events = vec![event("PushEvent", ts(2024, 6, 15), "alice/repo", Some(1))];

        let activity = from_events("alice", &events, now);

        let last = activity.daily.last().unwrap();
        assert_eq!(last.date, "2024-06-15");
        assert_eq!(last.count, 1);
    }

    #[test]
    fn test_estimate_from_repos() {
        let activity = estimate_from_repos(4);
        assert_eq!(activity.commits_last_year, 40);
        assert_eq!(activity.prs_last_year, 8);
        assert_eq!(activity.issues_last_year, 4);
        assert!(activity.daily.is_empty());
    }

    #[test]
    fn test_next_month_wraps_year() {
        let dec = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(next_month(dec), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
