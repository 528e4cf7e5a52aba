//! Configuration module for Strata
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STRATA_*)
//! 3. Project config (./strata.toml)
//! 4. User config (~/.config/strata/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, LayoutConfig, OutputConfig, SelectorConfig};
