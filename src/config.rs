// Process configuration loaded from environment variables.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::cache::DEFAULT_TTL;

pub struct Config {
    pub port: u16,
    pub github_token: Option<String>,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn load() -> Self {
        let ttl_secs: u64 = try_load("GITHUB_CACHE_TTL_SECS", &DEFAULT_TTL.as_secs().to_string());

        Self {
            port: try_load("PORT", "8080"),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            cache_ttl: Duration::from_secs(ttl_secs),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
