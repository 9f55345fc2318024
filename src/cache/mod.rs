// Cache module for local filesystem caching.
// Stores computed user statistics snapshots with a fixed time-to-live.

pub mod paths;
pub mod store;

pub use paths::user_stats_path;
pub use store::{DEFAULT_TTL, read_if_valid, write_cached};
