// Cache store for reading and writing cached data.
// Handles JSON serialization, TTL checking, and filesystem operations.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Default TTL for cached user snapshots: 30 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check if this cached data has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed > ttl
    }

    /// Check if this cached data is still valid (not expired).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

/// Read cached JSON data from a file.
pub fn read_cached<T: DeserializeOwned>(path: &Path) -> Result<Option<CachedData<T>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let cached: CachedData<T> = serde_json::from_str(&contents)?;
    Ok(Some(cached))
}

/// Read cached JSON data, returning None if expired.
pub fn read_if_valid<T: DeserializeOwned>(path: &Path, ttl: Duration) -> Result<Option<T>> {
    match read_cached::<T>(path)? {
        Some(cached) if cached.is_valid(ttl) => Ok(Some(cached.data)),
        _ => Ok(None),
    }
}

/// Write data to cache as JSON.
pub fn write_cached<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let cached = CachedData::new(data);
    let json = serde_json::to_string_pretty(&cached)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
