//! Subcommand implementations

pub mod levels;
pub mod pick;
pub mod resolve;

use anyhow::{Context, Result};

use strata::config::{Config, PROJECT_CONFIG_FILE};
use strata::error::{StrataError, StrataResult};
use strata::models::load_tree;
use strata::presentation::SelectorArgs;
use strata::selection::SelectionManager;

/// Load `./strata.toml` (reporting unknown keys), else the user config
pub fn load_config() -> Config {
    let project = std::env::current_dir()
        .ok()
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .filter(|path| path.exists());

    if let Some(path) = project {
        match Config::load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in warnings {
                    tracing::warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        line = ?warning.line,
                        suggestion = ?warning.suggestion,
                        "unknown config key"
                    );
                }
                return config.with_env_overrides();
            }
            Err(e) => tracing::warn!(file = %path.display(), "ignoring config: {e}"),
        }
    }

    Config::load_or_default(None)
}

/// Split `a/b/c` into ids
pub fn parse_select_path(path: &str) -> StrataResult<Vec<&str>> {
    path.split('/')
        .map(str::trim)
        .map(|id| {
            if id.is_empty() {
                Err(StrataError::EmptyPathSegment(path.to_string()))
            } else {
                Ok(id)
            }
        })
        .collect()
}

/// Load the tree and apply `--levels`, `--kind` and `--select`
pub fn build_manager(args: &SelectorArgs, config: &Config) -> Result<SelectionManager> {
    let tree = load_tree(&args.tree)
        .with_context(|| format!("failed to load option tree {}", args.tree.display()))?;
    let levels = args
        .levels
        .map(usize::from)
        .unwrap_or(config.selector.levels);
    let kind = args.kind.unwrap_or(config.selector.kind);
    tracing::info!(levels, %kind, options = tree.len(), "selector ready");

    let mut manager = SelectionManager::new(tree, levels, kind);
    if let Some(path) = &args.select {
        let ids = parse_select_path(path)?;
        manager
            .select_path(&ids)
            .with_context(|| format!("cannot select '{path}'"))?;
    }
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_select_path_splits_ids() {
        assert_eq!(parse_select_path("a/a1").unwrap(), vec!["a", "a1"]);
        assert_eq!(parse_select_path(" a / b ").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn parse_select_path_rejects_empty_segments() {
        assert!(matches!(
            parse_select_path("a//b"),
            Err(StrataError::EmptyPathSegment(_))
        ));
        assert!(parse_select_path("").is_err());
    }
}
