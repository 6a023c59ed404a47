//! Startup Configuration
//!
//! Seed todos and initial view state, bundled as `assets/config.json`.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Filter, Theme, Todo};
use crate::todos::TodoList;

const BUNDLED_CONFIG: &str = include_str!("../assets/config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed id {0} appears more than once")]
    DuplicateSeedId(u64),
    #[error("seed entry {index} has blank text")]
    BlankSeedText { index: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub filter: Filter,
    /// Pointer travel before a press on a row becomes a drag
    pub drag_threshold_px: i32,
    pub seed: Vec<Todo>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            filter: Filter::All,
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            seed: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load the bundled config
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        for todo in &mut config.seed {
            todo.text = todo.text.trim().to_string();
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for (index, todo) in self.seed.iter().enumerate() {
            if todo.text.trim().is_empty() {
                return Err(ConfigError::BlankSeedText { index });
            }
            if !seen.insert(todo.id) {
                return Err(ConfigError::DuplicateSeedId(todo.id));
            }
        }
        Ok(())
    }

    /// Initial list built from the seed entries
    pub fn seed_list(&self) -> TodoList {
        TodoList::from_todos(self.seed.iter().cloned())
    }
}
