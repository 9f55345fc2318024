// Cache path utilities.
// Constructs filesystem paths for cached user snapshots.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/octodash on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "octodash").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to a user's cached statistics snapshot. Usernames are
/// case-insensitive on GitHub, so the key is lowercased.
pub fn user_stats_path(login: &str) -> Option<PathBuf> {
    cache_dir().map(|dir| {
        dir.join("users")
            .join(format!("{}.json", sanitize_name(&login.to_ascii_lowercase())))
    })
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("simple"), "simple");
        assert_eq!(sanitize_name("with/slash"), "with_slash");
        assert_eq!(sanitize_name("owner:name"), "owner_name");
    }

    #[test]
    fn test_user_stats_path_is_case_insensitive() {
        let upper = user_stats_path("Octocat").unwrap();
        let lower = user_stats_path("octocat").unwrap();
        assert_eq!(upper, lower);
        assert!(upper.ends_with("users/octocat.json"));
    }
}
