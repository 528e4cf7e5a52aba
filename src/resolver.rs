//! Level data resolution
//!
//! Pure functions mapping the option tree and the current selection to the
//! options shown at each level.

use crate::models::OptionNode;
use crate::selection::SelectionState;

/// Options displayed at `level`.
///
/// Level 1 is always the root data; deeper levels are the children of the
/// selection one level up, or nothing when that level has no selection.
pub fn level_data<'a>(
    level: usize,
    state: &'a SelectionState,
    root: &'a [OptionNode],
) -> &'a [OptionNode] {
    match level {
        0 => &[],
        1 => root,
        _ => state
            .at(level - 1)
            .map(|parent| parent.sub_categories.as_slice())
            .unwrap_or(&[]),
    }
}

/// Whether `level` is the last column that gets rendered.
///
/// True at the configured depth, or when the level's own selection has no
/// children even though more level slots are configured.
pub fn is_last_level(level: usize, levels: usize, state: &SelectionState) -> bool {
    if level >= levels {
        return true;
    }
    state.at(level).map_or(true, OptionNode::is_leaf)
}

/// Levels that currently produce a column, top-down
pub fn rendered_levels(levels: usize, state: &SelectionState, root: &[OptionNode]) -> Vec<usize> {
    let mut rendered = Vec::new();
    for level in 1..=levels {
        if level_data(level, state, root).is_empty() {
            break;
        }
        rendered.push(level);
        if is_last_level(level, levels, state) {
            break;
        }
    }
    rendered
}
