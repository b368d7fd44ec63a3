//! Persistent tool settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that persist between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the studio file share holding the project folders.
    pub root: PathBuf,

    /// Extension of scene snapshots.
    pub scene_ext: String,

    /// Extension of notes records.
    pub notes_ext: String,

    /// Artist name stamped into notes records.
    pub artist: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("//core/ripley"),
            scene_ext: "mb".to_string(),
            notes_ext: "rtf".to_string(),
            artist: String::new(),
        }
    }
}

impl Settings {
    /// Get settings file path
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("cgvault");
            std::fs::create_dir_all(&p).ok();
            p.push("settings.json");
            p
        })
    }

    /// Load settings from file
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(path) = Self::path() {
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(path, json);
            }
        }
    }
}
