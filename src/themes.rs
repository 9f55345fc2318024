// Theme registry.
// Each theme carries the CSS classes and colors used by pages and badges.

/// Visual theme applied to pages and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub body_classes: &'static str,
    pub card_classes: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub accent_color: &'static str,
    pub accent_color_light: &'static str,
    pub success_color: &'static str,
    pub warning_color: &'static str,
    pub chart_line_color: &'static str,
    pub chart_fill_color: &'static str,
    pub badge_bg: &'static str,
    pub badge_bg_light: &'static str,
    pub badge_text: &'static str,
    pub badge_text_secondary: &'static str,
}

pub const DEFAULT_THEME: &str = "neon_dark";

const THEMES: &[Theme] = &[
    Theme {
        id: "neon_dark",
        name: "Neon Dark",
        body_classes: "theme-neon-dark bg-dark-bg",
        card_classes: "bg-dark-card border border-gray-700",
        text_primary: "text-gray-100",
        text_secondary: "text-gray-400",
        accent_color: "#00d4ff",
        accent_color_light: "#33dfff",
        success_color: "#10b981",
        warning_color: "#f59e0b",
        chart_line_color: "#00d4ff",
        chart_fill_color: "rgba(0, 212, 255, 0.1)",
        badge_bg: "#141b2d",
        badge_bg_light: "#1a2332",
        badge_text: "#e5e7eb",
        badge_text_secondary: "#9ca3af",
    },
    Theme {
        id: "solar_dark",
        name: "Solar Dark",
        body_classes: "theme-solar-dark bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900",
        card_classes: "bg-gray-800 border border-gray-700",
        text_primary: "text-gray-100",
        text_secondary: "text-gray-400",
        accent_color: "#fdb44b",
        accent_color_light: "#fdc66b",
        success_color: "#10b981",
        warning_color: "#ff6b6b",
        chart_line_color: "#fdb44b",
        chart_fill_color: "rgba(253, 180, 75, 0.1)",
        badge_bg: "#1f2937",
        badge_bg_light: "#273449",
        badge_text: "#e5e7eb",
        badge_text_secondary: "#9ca3af",
    },
    Theme {
        id: "light_clean",
        name: "Light Clean",
        body_classes: "theme-light-clean bg-gray-50",
        card_classes: "bg-white border border-gray-200",
        text_primary: "text-gray-900",
        text_secondary: "text-gray-600",
        accent_color: "#3b82f6",
        accent_color_light: "#60a5fa",
        success_color: "#10b981",
        warning_color: "#f59e0b",
        chart_line_color: "#3b82f6",
        chart_fill_color: "rgba(59, 130, 246, 0.1)",
        badge_bg: "#ffffff",
        badge_bg_light: "#f3f4f6",
        badge_text: "#111827",
        badge_text_secondary: "#6b7280",
    },
    Theme {
        id: "minimal_dark",
        name: "Minimal Dark",
        body_classes: "theme-minimal-dark bg-gray-950",
        card_classes: "bg-gray-900 border border-gray-800",
        text_primary: "text-gray-100",
        text_secondary: "text-gray-500",
        accent_color: "#8b5cf6",
        accent_color_light: "#a78bfa",
        success_color: "#10b981",
        warning_color: "#f59e0b",
        chart_line_color: "#8b5cf6",
        chart_fill_color: "rgba(139, 92, 246, 0.1)",
        badge_bg: "#111827",
        badge_bg_light: "#1f2937",
        badge_text: "#e5e7eb",
        badge_text_secondary: "#9ca3af",
    },
];

/// Get a theme by id, returning the default if not found.
pub fn get_theme(id: &str) -> &'static Theme {
    // The first registry entry is the default theme.
    THEMES
        .iter()
        .find(|theme| theme.id == id)
        .unwrap_or(&THEMES[0])
}

/// All available themes, in registry order.
pub fn all_themes() -> &'static [Theme] {
    THEMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_by_id() {
        let theme = get_theme("solar_dark");
        assert_eq!(theme.id, "solar_dark");
        assert_eq!(theme.name, "Solar Dark");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let theme = get_theme("does_not_exist");
        assert_eq!(theme.id, DEFAULT_THEME);
    }

    #[test]
    fn test_registry_has_unique_ids() {
        let themes = all_themes();
        assert_eq!(themes.len(), 4);
        for (i, a) in themes.iter().enumerate() {
            for b in &themes[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
