//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StrataResult;
use crate::selection::{SelectorKind, DEFAULT_LEVELS};

use super::loader::{self, ConfigWarning};

/// Selector shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "default_levels")]
    pub levels: usize,

    #[serde(default)]
    pub kind: SelectorKind,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            kind: SelectorKind::default(),
        }
    }
}

fn default_levels() -> usize {
    DEFAULT_LEVELS
}

/// Column layout of the terminal picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Version chips per row in the nested column
    #[serde(default = "default_chips_per_row")]
    pub chips_per_row: usize,

    /// Chips shown before the show-more toggle
    #[serde(default = "default_visible_versions")]
    pub visible_versions: usize,

    /// Rows shown by a scroll-helper column
    #[serde(default = "default_scroll_height")]
    pub scroll_height: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            chips_per_row: default_chips_per_row(),
            visible_versions: default_visible_versions(),
            scroll_height: default_scroll_height(),
        }
    }
}

fn default_chips_per_row() -> usize {
    3
}

fn default_visible_versions() -> usize {
    6
}

fn default_scroll_height() -> usize {
    8
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StrataResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StrataResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (STRATA_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
