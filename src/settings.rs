//! Settings infrastructure for orgcycle.
//!
//! A `settings.toml` next to (or above) the workspace root configures the
//! ordered TODO keyword list; everything else falls back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::context::KeywordSet;

/// Root settings structure loaded from settings.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Org dialect configuration.
    pub org: Option<OrgSettings>,
}

/// Org dialect settings.
#[derive(Debug, Default, Deserialize)]
pub struct OrgSettings {
    /// Ordered task-status keywords, first to last.
    /// Example: `todo_keywords = ["TODO", "NEXT", "WAIT", "DONE"]`
    pub todo_keywords: Option<Vec<String>>,
}

impl Settings {
    /// Build the keyword set from the configured list, or the default
    /// `TODO`/`DONE` pair when the list is absent or empty.
    pub fn keyword_set(&self) -> KeywordSet {
        match self
            .org
            .as_ref()
            .and_then(|org| org.todo_keywords.as_ref())
            .filter(|keywords| !keywords.is_empty())
        {
            Some(keywords) => KeywordSet::new(keywords.clone()),
            None => KeywordSet::default(),
        }
    }
}

/// Load settings from a settings.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: failed to parse settings.toml: {}", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover settings.toml by searching up the directory tree, then direct children.
///
/// Search order:
/// 1. Walk up from `start_dir` to filesystem root
/// 2. If not found, check immediate child directories of `start_dir`
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found settings.toml. If not found, returns
/// `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("settings.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join("settings.toml");
                if candidate.is_file() {
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}
