//! Demo host settings stored as settings.json in the app data directory

use search_dropdown::constants::{DEFAULT_MAX_SUGGESTIONS, SETTINGS_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    /// JSON catalog to load instead of the bundled one
    pub catalog_path: Option<String>,
    /// Cap on selectable entries shown at once (headers not counted)
    pub max_suggestions: usize,
    pub last_query: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            catalog_path: None,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            last_query: String::new(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        let Ok(json) = std::fs::read_to_string(&path) else {
            debug!("No settings file found, using defaults");
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                debug!(path = %path.display(), "Settings loaded");
                settings
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, path = %path.display(), "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}
