//! Frontend Models
//!
//! Todo record plus the two pieces of view state (filter, theme).

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Which items the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter, in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Light/dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        let mut todo = Todo::new(1, "Read");
        assert!(Filter::All.matches(&todo));
        assert!(Filter::Active.matches(&todo));
        assert!(!Filter::Completed.matches(&todo));
        todo.completed = true;
        assert!(Filter::All.matches(&todo));
        assert!(!Filter::Active.matches(&todo));
        assert!(Filter::Completed.matches(&todo));
    }

    #[test]
    fn test_filter_serialization() {
        assert_eq!(serde_json::to_string(&Filter::Active).unwrap(), "\"active\"");
        let parsed: Filter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, Filter::Completed);
        assert!(serde_json::from_str::<Filter>("\"done\"").is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert!(!Theme::default().is_dark());
        assert!(Theme::Light.toggled().is_dark());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
