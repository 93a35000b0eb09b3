//! Settings file handling for the yuseong meteor shower.
//!
//! Settings live in a TOML file under the platform config directory. Every
//! key is optional; values are replayed through the component's attribute
//! path at startup, so malformed entries degrade to defaults with a
//! diagnostic instead of failing the launch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Problems while loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid TOML.
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// User settings. Absent keys keep the component defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Meteor count.
    pub meteors: Option<i64>,
    /// Star count.
    pub stars: Option<i64>,
    /// Whether to show the black hole.
    pub show_black_hole: Option<bool>,
    /// Gradient style, kept raw so validation happens in one place.
    pub type_gradient: Option<String>,
}

impl Settings {
    /// Load settings from the default path; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match settings_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from an explicit file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Attribute name/value pairs for replay through the component's
    /// attribute path, in attribute order.
    pub fn attribute_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(n) = self.meteors {
            pairs.push(("meteors", n.to_string()));
        }
        if let Some(n) = self.stars {
            pairs.push(("stars", n.to_string()));
        }
        if let Some(show) = self.show_black_hole {
            pairs.push(("show_black_hole", show.to_string()));
        }
        if let Some(style) = &self.type_gradient {
            pairs.push(("type_gradient", style.clone()));
        }
        pairs
    }
}

/// Default settings file location for this platform.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "yuseong").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_keeps_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.attribute_pairs().is_empty());
    }

    #[test]
    fn partial_files_set_only_named_keys() {
        let settings: Settings = toml::from_str("stars = 50\nshow_black_hole = true\n").unwrap();
        assert_eq!(settings.stars, Some(50));
        assert_eq!(settings.show_black_hole, Some(true));
        assert_eq!(settings.meteors, None);
        assert_eq!(
            settings.attribute_pairs(),
            vec![
                ("stars", "50".to_string()),
                ("show_black_hole", "true".to_string()),
            ]
        );
    }

    #[test]
    fn gradient_is_kept_raw_for_the_validator() {
        let settings: Settings = toml::from_str("type_gradient = \"diagonal\"\n").unwrap();
        assert_eq!(settings.type_gradient.as_deref(), Some("diagonal"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result: Result<Settings, _> = toml::from_str("stars = ");
        assert!(result.is_err());
    }
}
