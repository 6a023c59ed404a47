//! Style Tokens
//!
//! Maps theme and row state to CSS classes and image paths.
//! Kept apart from the list model so neither depends on the other.

use crate::models::Theme;

/// Root container
pub fn page_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "page theme-light",
        Theme::Dark => "page theme-dark",
    }
}

/// Header background image
pub fn banner_image(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "public/images/bg-desktop-light.jpg",
        Theme::Dark => "public/images/bg-desktop-dark.jpg",
    }
}

/// Theme switch icon: the sun switches to light, the moon to dark
pub fn theme_icon(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Light => ("public/images/icon-moon.svg", "Moon Icon"),
        Theme::Dark => ("public/images/icon-sun.svg", "Sun Icon"),
    }
}

/// Input box and list card
pub fn panel_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "panel panel-light",
        Theme::Dark => "panel panel-dark",
    }
}

pub fn row_class(theme: Theme, dragging: bool, drop_target: bool) -> String {
    let mut c = String::from(match theme {
        Theme::Light => "todo-row row-light",
        Theme::Dark => "todo-row row-dark",
    });
    if dragging { c.push_str(" dragging"); }
    if drop_target { c.push_str(" drop-target"); }
    c
}

pub fn text_class(theme: Theme, completed: bool) -> &'static str {
    match (theme, completed) {
        (Theme::Light, false) => "todo-text text-light",
        (Theme::Light, true) => "todo-text text-light done",
        (Theme::Dark, false) => "todo-text text-dark",
        (Theme::Dark, true) => "todo-text text-dark done",
    }
}

/// Leading circular toggle
pub fn check_class(completed: bool) -> &'static str {
    if completed { "check-btn checked" } else { "check-btn" }
}

pub fn footer_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "list-footer footer-light",
        Theme::Dark => "list-footer footer-dark",
    }
}

/// Filter label; the selected one is highlighted regardless of theme
pub fn filter_button_class(theme: Theme, selected: bool) -> &'static str {
    match (selected, theme) {
        (true, _) => "filter-btn selected",
        (false, Theme::Light) => "filter-btn highlight-light",
        (false, Theme::Dark) => "filter-btn highlight-dark",
    }
}

pub fn clear_button_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "clear-btn highlight-light",
        Theme::Dark => "clear-btn highlight-dark",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_text_is_struck_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            assert!(text_class(theme, true).split(' ').any(|c| c == "done"));
            assert!(!text_class(theme, false).split(' ').any(|c| c == "done"));
        }
    }

    #[test]
    fn test_selected_filter_is_highlighted() {
        assert_eq!(filter_button_class(Theme::Light, true), filter_button_class(Theme::Dark, true));
        assert!(filter_button_class(Theme::Dark, false).ends_with("highlight-dark"));
    }

    #[test]
    fn test_row_class_flags() {
        assert_eq!(row_class(Theme::Light, false, false), "todo-row row-light");
        assert_eq!(row_class(Theme::Dark, true, false), "todo-row row-dark dragging");
        assert_eq!(row_class(Theme::Dark, false, true), "todo-row row-dark drop-target");
    }

    #[test]
    fn test_theme_icon_offers_the_other_theme() {
        assert_eq!(theme_icon(Theme::Light).1, "Moon Icon");
        assert_eq!(theme_icon(Theme::Dark).1, "Sun Icon");
    }
}
