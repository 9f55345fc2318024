// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::error::{DashError, Result};

use super::client::GitHubClient;
use super::types::{Event, Repo, User};

const PER_PAGE: usize = 100;
/// Hard cap on pagination; the public events API tops out at ~300 entries
/// anyway and runaway repo lists should not exhaust the rate budget.
const MAX_PAGES: u32 = 10;

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, login: &str) -> Result<User> {
        let response = self
            .get(&format!("/users/{}", login))
            .await
            .map_err(|e| match e {
                DashError::NotFound(_) => DashError::UserNotFound(login.to_string()),
                other => other,
            })?;
        let user: User = response.json().await?;
        Ok(user)
    }

    /// Get all repositories owned by a user.
    pub async fn get_user_repos(&self, login: &str) -> Result<Vec<Repo>> {
        self.get_all_pages(&format!("/users/{}/repos", login), &[("type", "owner")])
            .await
    }

    /// Get a user's public events (most recent first).
    pub async fn get_user_events(&self, login: &str) -> Result<Vec<Event>> {
        self.get_all_pages(&format!("/users/{}/events/public", login), &[])
            .await
    }

    /// Get the byte count per language for a repository.
    pub async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<BTreeMap<String, u64>> {
        let response = self
            .get(&format!("/repos/{}/{}/languages", owner, repo))
            .await?;
        let languages: BTreeMap<String, u64> = response.json().await?;
        Ok(languages)
    }

    /// Fetch every page of a list endpoint until a short page arrives.
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();

        for page in 1..=MAX_PAGES {
            let mut params: Vec<(String, String)> = extra_params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            params.push(("per_page".to_string(), PER_PAGE.to_string()));
            params.push(("page".to_string(), page.to_string()));

            let response = self.get_with_params(endpoint, &params).await?;
            let items: Vec<T> = response.json().await?;
            let short_page = items.len() < PER_PAGE;

            all_items.extend(items);

            if short_page {
                break;
            }
        }

        Ok(all_items)
    }
}
