// Statistics snapshot assembly.
// Fetches a user's profile and activity from GitHub, derives the view model,
// and caches the result on disk for the configured TTL.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod contributions;
pub mod languages;
pub mod streaks;

pub use contributions::{DailyCount, MonthlyCount};
pub use languages::LanguageShare;
pub use streaks::Streaks;

use crate::cache;
use crate::error::Result;
use crate::github::GitHubClient;

/// Derived statistics snapshot for a single GitHub user. This is the unit
/// that gets cached; pages and badges are rendered from it deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    /// Account creation date, `YYYY-MM-DD`.
    pub created_at: String,
    pub total_stars: u64,
    pub total_contributions: u64,
    pub contributions_last_year: u64,
    pub commits_last_year: u64,
    pub pull_requests_last_year: u64,
    pub issues_last_year: u64,
    /// Distinct repositories owned by others that the user touched.
    pub contributed_to: usize,
    pub streaks: Streaks,
    pub daily_contributions: Vec<DailyCount>,
    pub monthly_contributions: Vec<MonthlyCount>,
    pub languages: Vec<LanguageShare>,
}

/// Fetch a fresh snapshot from the GitHub API.
pub async fn fetch_user_stats(client: &GitHubClient, login: &str) -> Result<UserStats> {
    let user = client.get_user(login).await?;
    let repos = client.get_user_repos(login).await?;

    let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
    let languages = languages::aggregate(client, &repos).await;
    let activity = contributions::collect(client, login, &repos).await;
    let streaks = streaks::calculate(&activity.daily_year, Utc::now().date_naive());

    Ok(UserStats {
        username: user.login,
        name: user.name.unwrap_or_else(|| login.to_string()),
        avatar_url: user.avatar_url.unwrap_or_default(),
        bio: user.bio,
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        created_at: user
            .created_at
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        total_stars,
        total_contributions: activity.total,
        contributions_last_year: activity.contributions_last_year,
        commits_last_year: activity.commits_last_year,
        pull_requests_last_year: activity.prs_last_year,
        issues_last_year: activity.issues_last_year,
        contributed_to: activity.contributed_to,
        streaks,
        daily_contributions: activity.daily,
        monthly_contributions: activity.monthly,
        languages,
    })
}

/// Serve a snapshot from the cache when fresh enough, otherwise fetch and
/// store a new one. A failed cache write is logged, never fatal.
pub async fn cached_user_stats(
    client: &GitHubClient,
    login: &str,
    ttl: Duration,
) -> Result<UserStats> {
    let path = cache::user_stats_path(login);

    if let Some(path) = &path {
        match cache::read_if_valid::<UserStats>(path, ttl) {
            Ok(Some(stats)) => {
                debug!("cache hit for {login}");
                return Ok(stats);
            }
            Ok(None) => {}
            Err(e) => warn!("unreadable cache entry for {login}: {e}"),
        }
    }

    let stats = fetch_user_stats(client, login).await?;

    if let Some(path) = &path {
        if let Err(e) = cache::write_cached(path, &stats) {
            warn!("failed to cache stats for {login}: {e}");
        }
    }

    Ok(stats)
}

#[cfg(test)]
pub(crate) fn sample_stats() -> UserStats {
    UserStats {
        username: "octocat".to_string(),
        name: "The Octocat".to_string(),
        avatar_url: "https://example.com/avatar.png".to_string(),
        bio: Some("Mascot & <tester>".to_string()),
        public_repos: 8,
        followers: 1234,
        following: 9,
        created_at: "2011-01-25".to_string(),
        total_stars: 640,
        total_contributions: 500,
        contributions_last_year: 480,
        commits_last_year: 1500,
        pull_requests_last_year: 42,
        issues_last_year: 17,
        contributed_to: 5,
        streaks: Streaks {
            current: 4,
            longest: 21,
            current_start: Some("2024-06-12".to_string()),
            current_end: Some("2024-06-15".to_string()),
            longest_start: Some("2024-01-01".to_string()),
            longest_end: Some("2024-01-21".to_string()),
        },
        daily_contributions: vec![
            DailyCount {
                date: "2024-06-14".to_string(),
                count: 3,
            },
            DailyCount {
                date: "2024-06-15".to_string(),
                count: 5,
            },
        ],
        monthly_contributions: vec![MonthlyCount {
            month: "2024-06".to_string(),
            count: 48,
        }],
        languages: vec![
            LanguageShare {
                name: "Rust".to_string(),
                percentage: 61.5,
            },
            LanguageShare {
                name: "Python".to_string(),
                percentage: 38.5,
            },
        ],
    }
}
