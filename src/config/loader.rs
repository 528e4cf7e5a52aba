//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StrataResult;
use crate::selection::SelectorKind;

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "strata.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StrataResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> StrataResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| crate::error::StrataError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match Config::load(&project_config) {
                Ok(config) => return config.with_env_overrides(),
                Err(e) => tracing::warn!(file = %project_config.display(), "ignoring config: {e}"),
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match Config::load(&user_config) {
                Ok(config) => return config.with_env_overrides(),
                Err(e) => tracing::warn!(file = %user_config.display(), "ignoring config: {e}"),
            }
        }
    }

    Config::default().with_env_overrides()
}

/// Apply environment variable overrides (STRATA_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // STRATA_LEVELS
    if let Some(levels) = get_env("STRATA_LEVELS") {
        match levels.trim().parse::<usize>() {
            Ok(levels) if levels > 0 => config.selector.levels = levels,
            _ => tracing::warn!(value = %levels, "ignoring invalid STRATA_LEVELS"),
        }
    }

    // STRATA_KIND
    if let Some(kind) = get_env("STRATA_KIND") {
        config.selector.kind = match kind.to_lowercase().as_str() {
            "advanced-selector" | "advanced" => SelectorKind::AdvancedSelector,
            _ => SelectorKind::Default,
        };
    }

    // STRATA_COLOR
    if let Some(color) = get_env("STRATA_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

/// `$XDG_CONFIG_HOME/strata/config.toml`, falling back to the platform dir
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("strata/config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "selector",
        "levels",
        "kind",
        "layout",
        "chips_per_row",
        "visible_versions",
        "scroll_height",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
