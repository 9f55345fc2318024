// HTML page rendering.
// Pages are built as plain strings from the cached snapshot and the theme;
// rendering is deterministic so cached data yields byte-identical responses.

use crate::error::DashError;
use crate::stats::UserStats;
use crate::themes::{Theme, all_themes};

const SITE_TITLE: &str = "GitHub Stats Generator";

/// Escape text for embedding in HTML content and attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Theme selector that posts back to /set-theme and returns to `redirect`.
fn theme_picker(theme: &Theme, redirect: &str) -> String {
    let options: String = all_themes()
        .iter()
        .map(|t| {
            let selected = if t.id == theme.id { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                t.id,
                escape_html(t.name)
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="/set-theme" class="theme-picker">
<input type="hidden" name="redirect" value="{}"/>
<select name="theme" onchange="this.form.submit()">{options}</select>
</form>"#,
        escape_html(redirect)
    )
}

fn layout(title: &str, theme: &Theme, redirect: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>{title}</title>
<style>
:root {{
  --accent: {accent};
  --accent-light: {accent_light};
  --success: {success};
  --warning: {warning};
  --chart-line: {chart_line};
  --chart-fill: {chart_fill};
}}
</style>
</head>
<body class="{body_classes} {text_primary}">
<header class="site-header">
<a href="/" class="site-title">{site_title}</a>
{picker}
</header>
<main>
{content}
</main>
</body>
</html>
"#,
        accent = theme.accent_color,
        accent_light = theme.accent_color_light,
        success = theme.success_color,
        warning = theme.warning_color,
        chart_line = theme.chart_line_color,
        chart_fill = theme.chart_fill_color,
        body_classes = theme.body_classes,
        text_primary = theme.text_primary,
        site_title = SITE_TITLE,
        picker = theme_picker(theme, redirect),
    )
}

fn stat_card(theme: &Theme, label: &str, value: &str) -> String {
    format!(
        r#"<div class="stat-card {card}">
<span class="stat-label {secondary}">{label}</span>
<span class="stat-value">{value}</span>
</div>"#,
        card = theme.card_classes,
        secondary = theme.text_secondary,
    )
}

/// Landing page with the username search form.
pub fn home_page(theme: &Theme) -> String {
    let content = format!(
        r#"<section class="hero {card}">
<h1>{SITE_TITLE}</h1>
<p class="{secondary}">Enter a GitHub username to see their stats dashboard and badge.</p>
<form class="search" onsubmit="location.href='/u/'+encodeURIComponent(this.username.value);return false">
<input type="text" name="username" placeholder="octocat" required autofocus/>
<button type="submit">Show stats</button>
</form>
</section>"#,
        card = theme.card_classes,
        secondary = theme.text_secondary,
    );

    layout(SITE_TITLE, theme, "/", &content)
}

/// Stats dashboard page for a user.
pub fn stats_page(stats: &UserStats, theme: &Theme) -> String {
    let username = escape_html(&stats.username);
    let name = escape_html(&stats.name);
    let bio = stats
        .bio
        .as_deref()
        .map(|b| {
            format!(
                r#"<p class="bio {}">{}</p>"#,
                theme.text_secondary,
                escape_html(b)
            )
        })
        .unwrap_or_default();

    let cards = [
        ("Stars", stats.total_stars.to_string()),
        ("Repositories", stats.public_repos.to_string()),
        ("Followers", stats.followers.to_string()),
        ("Following", stats.following.to_string()),
        ("Contributions", stats.total_contributions.to_string()),
        ("Commits (1Y)", stats.commits_last_year.to_string()),
        ("Pull Requests (1Y)", stats.pull_requests_last_year.to_string()),
        ("Issues (1Y)", stats.issues_last_year.to_string()),
        ("Contributed To", stats.contributed_to.to_string()),
    ]
    .iter()
    .map(|(label, value)| stat_card(theme, label, value))
    .collect::<Vec<_>>()
    .join("\n");

    let streaks = format!(
        r#"<div class="streaks">
{current}
{longest}
</div>"#,
        current = stat_card(
            theme,
            "Current Streak",
            &streak_value(stats.streaks.current, &stats.streaks.current_start, &stats.streaks.current_end),
        ),
        longest = stat_card(
            theme,
            "Longest Streak",
            &streak_value(stats.streaks.longest, &stats.streaks.longest_start, &stats.streaks.longest_end),
        ),
    );

    let languages = if stats.languages.is_empty() {
        format!(
            r#"<p class="{}">No language data available.</p>"#,
            theme.text_secondary
        )
    } else {
        stats
            .languages
            .iter()
            .map(|lang| {
                format!(
                    r#"<div class="language-row">
<span class="language-name">{name}</span>
<div class="language-bar"><div class="language-fill" style="width: {pct}%"></div></div>
<span class="language-pct {secondary}">{pct}%</span>
</div>"#,
                    name = escape_html(&lang.name),
                    pct = lang.percentage,
                    secondary = theme.text_secondary,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let daily_json =
        serde_json::to_string(&stats.daily_contributions).unwrap_or_else(|_| "[]".to_string());
    let monthly_json =
        serde_json::to_string(&stats.monthly_contributions).unwrap_or_else(|_| "[]".to_string());

    let content = format!(
        r#"<section class="profile {card}">
<img class="avatar" src="{avatar}" alt="{username}" width="96" height="96"/>
<div>
<h1>{name}</h1>
<a class="username" href="https://github.com/{username}">@{username}</a>
{bio}
<p class="{secondary}">On GitHub since {created_at}</p>
</div>
</section>
<section class="stats-grid">
{cards}
</section>
<section class="streaks-section">
{streaks}
</section>
<section class="languages {card}">
<h2>Top Languages</h2>
{languages}
</section>
<section class="charts {card}">
<h2>Contribution Activity</h2>
<canvas id="daily-chart"></canvas>
<canvas id="monthly-chart"></canvas>
</section>
<script>
const contributionData = {{
  daily: {daily_json},
  monthly: {monthly_json}
}};
</script>"#,
        card = theme.card_classes,
        avatar = escape_html(&stats.avatar_url),
        secondary = theme.text_secondary,
        created_at = escape_html(&stats.created_at),
    );

    let redirect = format!("/u/{}", stats.username);
    layout(
        &format!("{} | {}", stats.username, SITE_TITLE),
        theme,
        &redirect,
        &content,
    )
}

fn streak_value(days: u32, start: &Option<String>, end: &Option<String>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!(
            "{days} days <span class=\"streak-range\">({} to {})</span>",
            escape_html(start),
            escape_html(end)
        ),
        _ => format!("{days} days"),
    }
}

/// Error page for failed lookups.
pub fn error_page(username: &str, err: &DashError, theme: &Theme) -> String {
    let hint = match err {
        DashError::RateLimited {
            authenticated: false,
            ..
        } => format!(
            r#"<p class="hint {}">The anonymous GitHub API limit is very low. Set the <code>GITHUB_TOKEN</code> environment variable to raise it.</p>"#,
            theme.text_secondary
        ),
        DashError::RateLimited {
            authenticated: true,
            ..
        } => format!(
            r#"<p class="hint {}">The rate limit will reset shortly; please try again later.</p>"#,
            theme.text_secondary
        ),
        _ => String::new(),
    };

    let content = format!(
        r#"<section class="error {card}">
<h1>Something went wrong</h1>
<p class="error-message" style="color: var(--warning)">{message}</p>
{hint}
<a href="/">&larr; Back to search</a>
</section>"#,
        card = theme.card_classes,
        message = escape_html(&err.to_string()),
    );

    let redirect = format!("/u/{}", username);
    layout(
        &format!("Error | {}", SITE_TITLE),
        theme,
        &redirect,
        &content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::sample_stats;
    use crate::themes::{all_themes, get_theme};

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert_eq!(escape_html("a\"b'c"), "a&quot;b&#x27;c");
    }

    #[test]
    fn test_home_page_renders_for_every_theme() {
        for theme in all_themes() {
            let html = home_page(theme);
            assert!(html.contains("GitHub Stats Generator"), "theme {}", theme.id);
            assert!(html.contains(theme.body_classes), "theme {}", theme.id);
            assert!(html.contains(theme.accent_color), "theme {}", theme.id);
        }
    }

    #[test]
    fn test_stats_page_renders_for_every_theme() {
        let stats = sample_stats();
        for theme in all_themes() {
            let html = stats_page(&stats, theme);
            assert!(html.contains("@octocat"), "theme {}", theme.id);
            assert!(html.contains("The Octocat"), "theme {}", theme.id);
            assert!(html.contains(theme.card_classes), "theme {}", theme.id);
            assert!(html.contains("Top Languages"), "theme {}", theme.id);
        }
    }

    #[test]
    fn test_stats_page_escapes_bio() {
        let stats = sample_stats();
        let html = stats_page(&stats, get_theme("neon_dark"));

        assert!(html.contains("Mascot &amp; &lt;tester&gt;"));
        assert!(!html.contains("<tester>"));
    }

    #[test]
    fn test_stats_page_embeds_chart_data() {
        let stats = sample_stats();
        let html = stats_page(&stats, get_theme("neon_dark"));

        assert!(html.contains(r#""date":"2024-06-15""#));
        assert!(html.contains(r#""month":"2024-06""#));
    }

    #[test]
    fn test_theme_picker_marks_current_selection() {
        let html = home_page(get_theme("solar_dark"));
        assert!(html.contains(r#"<option value="solar_dark" selected>"#));
        assert!(html.contains(r#"<option value="neon_dark">"#));
    }

    #[test]
    fn test_error_page_not_found() {
        let err = DashError::UserNotFound("ghost".to_string());
        let html = error_page("ghost", &err, get_theme("neon_dark"));

        assert!(html.contains("not found on GitHub"));
        assert!(!html.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_error_page_rate_limit_hints() {
        let anon = DashError::RateLimited {
            reset_at: "12:00:00 UTC".to_string(),
            authenticated: false,
        };
        let html = error_page("octocat", &anon, get_theme("neon_dark"));
        assert!(html.contains("GITHUB_TOKEN"));
        assert!(html.contains("12:00:00 UTC"));

        let authed = DashError::RateLimited {
            reset_at: "12:00:00 UTC".to_string(),
            authenticated: true,
        };
        let html = error_page("octocat", &authed, get_theme("neon_dark"));
        assert!(!html.contains("GITHUB_TOKEN"));
        assert!(html.contains("try again later"));
    }
}
