//! Line-prompt fallback for terminals where the column picker cannot run.
//!
//! Asks one question per level, top-down, through dialoguer.

use dialoguer::{FuzzySelect, Select};

use crate::error::{StrataError, StrataResult};
use crate::models::{ActionIcon, OptionNode};
use crate::selection::{with_first_action_icon, LevelKey, SelectionManager};
use crate::ui::theme::StrataTheme;

/// Levels with more options than this get a fuzzy search prompt
const FUZZY_THRESHOLD: usize = 10;

/// Prompt for every level, then for the nested choice and its action icon
pub fn run_prompt(
    manager: &mut SelectionManager,
    theme: &StrataTheme,
    title: &str,
) -> StrataResult<()> {
    for level in 1..=manager.levels() {
        let options = manager.level_data(level).to_vec();
        if options.is_empty() {
            break;
        }
        let current = manager.state().at(level).map(|o| o.id.clone());
        let (labels, default) = prompt_items(&options, current.as_deref());
        let prompt = format!("{title} (level {level})");

        let index = choose(theme, &prompt, &labels, default)?;
        manager.select_option(LevelKey::level(level), options[index].clone());
        if manager.is_last_level(level) {
            break;
        }
    }

    let Some(key) = manager.nested_key() else {
        return Ok(());
    };
    let versions = match manager.state().at(key.level_number()) {
        Some(parent) if !parent.is_leaf() => parent.sub_categories.clone(),
        _ => return Ok(()),
    };

    let current = manager.state().get(key).map(|o| o.id.clone());
    let (labels, default) = prompt_items(&versions, current.as_deref());
    let index = choose(theme, &format!("{title} (version)"), &labels, default)?;
    let version = with_first_action_icon(&versions[index]);
    let icons = version.action_icons.clone();
    manager.select_option(key, version);

    if icons.len() > 1 {
        let labels = action_labels(&icons);
        let index = choose(theme, &format!("{title} (action)"), &labels, 0)?;
        manager.select_action_icon(icons[index].clone());
    }
    Ok(())
}

fn choose(theme: &StrataTheme, prompt: &str, labels: &[String], default: usize) -> StrataResult<usize> {
    let picked = if labels.len() > FUZZY_THRESHOLD {
        FuzzySelect::with_theme(theme)
            .with_prompt(prompt)
            .items(labels)
            .default(default)
            .interact_opt()?
    } else {
        Select::with_theme(theme)
            .with_prompt(prompt)
            .items(labels)
            .default(default)
            .interact_opt()?
    };
    picked.ok_or(StrataError::Cancelled)
}

/// Labels for a level and the index of the current choice
fn prompt_items(options: &[OptionNode], current: Option<&str>) -> (Vec<String>, usize) {
    let labels = options
        .iter()
        .map(|option| match &option.details {
            Some(details) => format!("{} ({})", option.title, details),
            None => option.title.clone(),
        })
        .collect();
    let default = current
        .and_then(|id| options.iter().position(|o| o.id == id))
        .unwrap_or(0);
    (labels, default)
}

fn action_labels(icons: &[ActionIcon]) -> Vec<String> {
    icons
        .iter()
        .map(|icon| format!("{} {}", icon.icon, icon.value))
        .collect()
}
