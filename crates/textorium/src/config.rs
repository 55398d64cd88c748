//! # Configuration
//!
//! Textorium configuration is managed by [`confique`], which layers a TOML file,
//! environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `TEXTORIUM_DATA_DIR`, `TEXTORIUM_DEFAULT_SORT`, ...
//! 2. **Config file**: `textorium.toml` in the OS config directory, or the
//!    file named by `TEXTORIUM_CONFIG`. A missing file is fine.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! Command-line flags sit above all of these but are applied by the caller.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where `snippets.json` lives |
//! | `default_sort` | `createdAt` | Sort key for `list` |
//! | `descending` | `true` | Sort direction for `list` |
//! | `export_file` | `snippets_export.json` | Default export target |
//! | `limits.max_title_chars` | `200` | Import bound, `0` disables |
//! | `limits.max_content_chars` | `10000` | Import bound, `0` disables |
//! | `limits.max_tag_chars` | `50` | Import bound, `0` disables |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TextoriumError};
use crate::sort::SortKey;
use crate::validation::{
    ImportLimits, DEFAULT_MAX_CONTENT_CHARS, DEFAULT_MAX_TAG_CHARS, DEFAULT_MAX_TITLE_CHARS,
};

pub const CONFIG_FILE: &str = "textorium.toml";
pub const CONFIG_PATH_ENV: &str = "TEXTORIUM_CONFIG";
pub const DEFAULT_EXPORT_FILE: &str = "snippets_export.json";

/// Configuration for textorium, stored in `textorium.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TextoriumConfig {
    /// Directory holding `snippets.json`. Defaults to the OS data directory.
    #[config(env = "TEXTORIUM_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Sort key used by `list`: title, createdAt, updatedAt or favorite.
    #[config(default = "createdAt", env = "TEXTORIUM_DEFAULT_SORT")]
    pub default_sort: String,

    /// Sort direction used by `list`.
    #[config(default = true, env = "TEXTORIUM_DESCENDING")]
    pub descending: bool,

    /// File written by `export` when no path is given.
    #[config(default = "snippets_export.json")]
    pub export_file: String,

    #[config(nested)]
    pub limits: LimitsConfig,
}

/// Length bounds for imported records. `0` disables a bound.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LimitsConfig {
    #[config(default = 200)]
    pub max_title_chars: usize,

    #[config(default = 10000)]
    pub max_content_chars: usize,

    #[config(default = 50)]
    pub max_tag_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            max_tag_chars: DEFAULT_MAX_TAG_CHARS,
        }
    }
}

impl Default for TextoriumConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_sort: SortKey::CreatedAt.to_string(),
            descending: true,
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            limits: LimitsConfig::default(),
        }
    }
}

impl TextoriumConfig {
    /// Loads configuration from the environment and the config file.
    pub fn load() -> Result<Self> {
        let file = config_file_path();
        Self::load_from(file.as_deref())
    }

    /// Loads configuration from the environment and, if given, `file`.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| TextoriumError::Config(e.to_string()))
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.default_sort)
    }

    pub fn limits(&self) -> ImportLimits {
        ImportLimits::from_config(
            self.limits.max_title_chars,
            self.limits.max_content_chars,
            self.limits.max_tag_chars,
        )
    }

    /// The configured data directory, or the OS data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    TextoriumError::Config("Could not determine data directory".to_string())
                }),
        }
    }

    /// A commented sample `textorium.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

/// `TEXTORIUM_CONFIG` if set, otherwise `textorium.toml` in the OS config
/// directory. `None` when neither can be determined.
pub fn config_file_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(|| project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE)))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "textorium", "textorium")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TextoriumConfig::default();
        assert_eq!(config.sort_key(), SortKey::CreatedAt);
        assert!(config.descending);
        assert_eq!(config.export_file, "snippets_export.json");
        assert_eq!(config.limits(), ImportLimits::default());
    }

    #[test]
    fn test_unknown_sort_key_falls_back() {
        let config = TextoriumConfig {
            default_sort: "color".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_key(), SortKey::Newest);
    }

    #[test]
    fn test_zero_limits_disable_bounds() {
        let config = TextoriumConfig {
            limits: LimitsConfig {
                max_title_chars: 0,
                max_content_chars: 5,
                max_tag_chars: 0,
            },
            ..Default::default()
        };
        let limits = config.limits();
        assert_eq!(limits.max_title_chars, None);
        assert_eq!(limits.max_content_chars, Some(5));
        assert_eq!(limits.max_tag_chars, None);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = TextoriumConfig {
            data_dir: Some(PathBuf::from("/tmp/snips")),
            ..Default::default()
        };
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("/tmp/snips"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "default_sort = \"title\"\nexport_file = \"out.json\"\n\n[limits]\nmax_title_chars = 10\n",
        )
        .unwrap();

        let config = TextoriumConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.export_file, "out.json");
        assert_eq!(config.limits.max_title_chars, 10);
        assert_eq!(config.limits.max_content_chars, 10000);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = TextoriumConfig::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.export_file, "snippets_export.json");
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "descending = \"maybe\"").unwrap();
        assert!(matches!(
            TextoriumConfig::load_from(Some(&path)),
            Err(TextoriumError::Config(_))
        ));
    }

    #[test]
    fn test_template_mentions_every_setting() {
        let template = TextoriumConfig::template();
        for key in ["data_dir", "default_sort", "export_file", "max_tag_chars"] {
            assert!(template.contains(key), "missing {key}");
        }
    }
}
