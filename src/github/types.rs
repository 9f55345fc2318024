// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<DateTime<Utc>>,
}

/// Repository as returned by the owned-repos listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub owner: RepoOwner,
    #[serde(default)]
    pub stargazers_count: u64,
    pub language: Option<String>,
    /// Repository size in KiB.
    #[serde(default)]
    pub size: u64,
}

/// Repository owner reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// Public timeline event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub payload: EventPayload,
}

/// Repository reference inside an event, `owner/name` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// Event payload; only the push commit count is of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub size: Option<u64>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
