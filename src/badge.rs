// SVG badge generation.
// Renders a user's statistics as a self-contained, embeddable SVG.

use crate::stats::UserStats;
use crate::themes::Theme;

const WIDTH: u32 = 600;
const HEIGHT: u32 = 320;

// Simplified GitHub mark, 16x16 viewbox.
const GITHUB_LOGO_PATH: &str = "M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.012 8.012 0 0 0 16 8c0-4.42-3.58-8-8-8z";

/// Escape text for embedding in SVG/XML content and attributes.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format large numbers compactly: 1500 -> "1.5k".
pub fn format_number(n: u64) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// Letter rating derived from total stars.
pub fn rating(total_stars: u64) -> &'static str {
    if total_stars > 1000 {
        "A+"
    } else if total_stars > 500 {
        "A"
    } else if total_stars > 100 {
        "B+"
    } else {
        "C+"
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        s.chars().take(max_chars).collect()
    } else {
        s.to_string()
    }
}

/// One cell of the stats grid: label above value.
fn stat_cell(x: u32, label: &str, value: &str, value_size: u32, theme: &Theme) -> String {
    format!(
        r#"<rect x="{x}" y="0" width="120" height="50" rx="8" fill="rgba(255, 255, 255, 0.05)" stroke="rgba(255, 255, 255, 0.1)" stroke-width="1"/>
        <text x="{tx}" y="20" font-family="Inter, system-ui, sans-serif" font-size="11" fill="{secondary}">{label}</text>
        <text x="{tx}" y="38" font-family="Inter, system-ui, sans-serif" font-size="{value_size}" font-weight="700" fill="{accent}">{value}</text>"#,
        tx = x + 15,
        secondary = theme.badge_text_secondary,
        accent = theme.accent_color,
    )
}

/// Render the full stats badge for a user.
pub fn render_badge(stats: &UserStats, theme: &Theme) -> String {
    let username = escape_xml(&stats.username);
    let display_name = escape_xml(&truncate(&stats.name, 40));
    let top_language = stats
        .languages
        .first()
        .map(|l| truncate(&l.name, 12))
        .unwrap_or_else(|| "N/A".to_string());
    let top_language = escape_xml(&top_language);

    let bar_total = 540.0;
    let bar_filled = (stats.contributed_to as f64 / stats.public_repos.max(1) as f64 * bar_total)
        .min(bar_total);

    let row1 = [
        stat_cell(0, "Stars", &format_number(stats.total_stars), 18, theme),
        stat_cell(140, "Repositories", &stats.public_repos.to_string(), 18, theme),
        stat_cell(280, "Followers", &format_number(stats.followers as u64), 18, theme),
        stat_cell(
            420,
            "Contributions",
            &format_number(stats.total_contributions),
            18,
            theme,
        ),
    ]
    .join("\n        ");

    let row2 = [
        stat_cell(
            0,
            "Commits (1Y)",
            &format_number(stats.commits_last_year),
            18,
            theme,
        ),
        stat_cell(
            140,
            "Pull Requests",
            &stats.pull_requests_last_year.to_string(),
            18,
            theme,
        ),
        stat_cell(
            280,
            "Current Streak",
            &format!("{} \u{1f525}", stats.streaks.current),
            18,
            theme,
        ),
        stat_cell(420, "Top Language", &top_language, 16, theme),
    ]
    .join("\n        ");

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{WIDTH}" height="{HEIGHT}">
    <defs>
        <linearGradient id="bgGradient" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:{bg};stop-opacity:1" />
            <stop offset="100%" style="stop-color:{bg_light};stop-opacity:1" />
        </linearGradient>
        <linearGradient id="accentGradient" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:{accent};stop-opacity:1" />
            <stop offset="100%" style="stop-color:{accent_light};stop-opacity:1" />
        </linearGradient>
    </defs>

    <!-- Background -->
    <rect width="{WIDTH}" height="{HEIGHT}" fill="url(#bgGradient)" rx="12"/>

    <!-- Header section -->
    <rect width="{WIDTH}" height="80" fill="url(#accentGradient)" opacity="0.15" rx="12"/>

    <!-- GitHub mark, linked to the profile -->
    <a xlink:href="https://github.com/{username}" target="_blank">
        <g transform="translate(30, 20)">
            <rect x="0" y="0" width="40" height="40" rx="8" fill="rgba(255, 255, 255, 0.1)" stroke="{accent}" stroke-width="1.5"/>
            <g transform="translate(8, 8) scale(0.24)">
                <path d="{logo}" fill="{accent}"/>
            </g>
        </g>
        <title>View {username} on GitHub</title>
    </a>

    <a xlink:href="https://github.com/{username}" target="_blank" style="text-decoration: none;">
        <text x="75" y="35" font-family="Inter, system-ui, sans-serif" font-size="24" font-weight="700" fill="{accent}">{username}</text>
    </a>
    <text x="75" y="60" font-family="Inter, system-ui, sans-serif" font-size="14" fill="{secondary}">{display_name}</text>
    <text x="75" y="78" font-family="Inter, system-ui, sans-serif" font-size="10" fill="{secondary}" opacity="0.7">GitHub Statistics</text>

    <!-- Rating -->
    <circle cx="{rating_cx}" cy="40" r="30" fill="url(#accentGradient)" opacity="0.2"/>
    <circle cx="{rating_cx}" cy="40" r="24" fill="{bg}" stroke="{accent}" stroke-width="2"/>
    <text x="{rating_cx}" y="47" font-family="Inter, system-ui, sans-serif" font-size="18" font-weight="700" fill="{accent}" text-anchor="middle">{rating}</text>
    <text x="{rating_cx}" y="62" font-family="Inter, system-ui, sans-serif" font-size="10" fill="{secondary}" text-anchor="middle">Rating</text>

    <!-- Stats grid -->
    <g transform="translate(30, 100)">
        {row1}
    </g>
    <g transform="translate(30, 170)">
        {row2}
    </g>

    <!-- Contributed-to bar -->
    <g transform="translate(30, 250)">
        <text x="0" y="15" font-family="Inter, system-ui, sans-serif" font-size="11" fill="{secondary}">Contributed to {contributed_to} repositories</text>
        <rect x="0" y="25" width="540" height="8" rx="4" fill="rgba(255, 255, 255, 0.1)"/>
        <rect x="0" y="25" width="{bar_filled:.1}" height="8" rx="4" fill="url(#accentGradient)"/>
    </g>

    <!-- Decorative corners -->
    <circle cx="50" cy="280" r="20" fill="{accent}" opacity="0.1"/>
    <circle cx="{rating_cx}" cy="280" r="20" fill="{accent}" opacity="0.1"/>
</svg>
"#,
        bg = theme.badge_bg,
        bg_light = theme.badge_bg_light,
        accent = theme.accent_color,
        accent_light = theme.accent_color_light,
        secondary = theme.badge_text_secondary,
        logo = GITHUB_LOGO_PATH,
        rating = rating(stats.total_stars),
        rating_cx = WIDTH - 50,
        contributed_to = stats.contributed_to,
    )
}

/// Small error badge shown when stats cannot be fetched.
pub fn render_error_badge(message: &str) -> String {
    let message = escape_xml(&truncate(message, 50));
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="100">
    <rect width="400" height="100" fill="#1a1a1a"/>
    <text x="200" y="50" font-family="Arial" font-size="14" fill="#ff6b6b" text-anchor="middle">Error: {message}</text>
</svg>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::sample_stats;
    use crate::themes::{all_themes, get_theme};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.0k");
        assert_eq!(format_number(1500), "1.5k");
        assert_eq!(format_number(12345), "12.3k");
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating(0), "C+");
        assert_eq!(rating(100), "C+");
        assert_eq!(rating(101), "B+");
        assert_eq!(rating(501), "A");
        assert_eq!(rating(1001), "A+");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<svg>"), "&lt;svg&gt;");
        assert_eq!(escape_xml("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_badge_contains_user_and_theme() {
        let stats = sample_stats();
        let theme = get_theme("neon_dark");
        let svg = render_badge(&stats, theme);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("octocat"));
        assert!(svg.contains(theme.accent_color));
        assert!(svg.contains(theme.badge_bg));
        assert!(svg.contains("Rust"));
        // 640 stars lands in the "A" band.
        assert!(svg.contains(">A</text>"));
    }

    #[test]
    fn test_badge_escapes_user_content() {
        let mut stats = sample_stats();
        stats.name = "<script>alert(1)</script>".to_string();
        let svg = render_badge(&stats, get_theme("light_clean"));

        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_badge_renders_for_every_theme() {
        let stats = sample_stats();
        for theme in all_themes() {
            let svg = render_badge(&stats, theme);
            assert!(svg.contains(theme.badge_bg), "theme {}", theme.id);
            assert!(svg.ends_with("</svg>\n"), "theme {}", theme.id);
        }
    }

    #[test]
    fn test_error_badge_keeps_literal_colors() {
        let svg = render_error_badge("boom");
        assert!(svg.contains(r##"fill="#1a1a1a""##));
        assert!(svg.contains(r##"fill="#ff6b6b""##));
        assert!(svg.contains("Error: boom"));
    }

    #[test]
    fn test_error_badge_truncates_and_escapes() {
        let long = "x".repeat(80);
        let svg = render_error_badge(&long);
        assert!(svg.contains(&"x".repeat(50)));
        assert!(!svg.contains(&"x".repeat(51)));

        let svg = render_error_badge("<oops>");
        assert!(svg.contains("&lt;oops&gt;"));
    }
}
