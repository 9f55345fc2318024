// Language usage aggregated across a user's repositories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::github::{GitHubClient, Repo};

/// Repos for which the detailed per-language breakdown is fetched; anything
/// beyond the first few would burn the rate budget for marginal precision.
const DETAILED_REPO_LIMIT: usize = 10;
const TOP_LANGUAGES: usize = 8;

/// A language and its share of the user's code, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: f64,
}

/// Aggregate language usage: every repo's primary language weighted by its
/// size, refined with the detailed byte breakdown for the first few repos.
pub async fn aggregate(client: &GitHubClient, repos: &[Repo]) -> Vec<LanguageShare> {
    let mut language_bytes: BTreeMap<String, u64> = BTreeMap::new();

    for repo in repos {
        if let Some(language) = &repo.language {
            // Size is reported in KiB; a coarse stand-in for byte counts.
            *language_bytes.entry(language.clone()).or_default() += repo.size * 1024;
        }
    }

    for repo in repos.iter().take(DETAILED_REPO_LIMIT) {
        match client.get_repo_languages(&repo.owner.login, &repo.name).await {
            Ok(breakdown) => {
                for (language, bytes) in breakdown {
                    *language_bytes.entry(language).or_default() += bytes;
                }
            }
            Err(e) => {
                debug!("language breakdown unavailable for {}: {e}", repo.name);
            }
        }
    }

    shares(&language_bytes)
}

/// Convert byte counts into the top language shares, largest first.
pub fn shares(language_bytes: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = language_bytes.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(&String, &u64)> = language_bytes.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(TOP_LANGUAGES)
        .map(|(name, bytes)| LanguageShare {
            name: name.clone(),
            percentage: ((*bytes as f64 / total as f64) * 1000.0).round() / 10.0,
        })
        .collect()
}
