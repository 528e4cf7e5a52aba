//! Selector variants
//!
//! The cascade is the same for every selector; what differs is what happens
//! once the deepest level has been written. That hook lives behind
//! [`SelectionPolicy`], picked once from [`SelectorKind`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::LevelKey;
use super::state::SelectionState;
use crate::models::OptionNode;

/// Which selector variant to build
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorKind {
    #[default]
    Default,
    AdvancedSelector,
}

impl SelectorKind {
    pub fn policy(self) -> Box<dyn SelectionPolicy> {
        match self {
            SelectorKind::Default => Box::new(DefaultPolicy),
            SelectorKind::AdvancedSelector => Box::new(AdvancedSelectorPolicy),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectorKind::Default => "default",
            SelectorKind::AdvancedSelector => "advanced-selector",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the deepest level settles after a selection
pub trait SelectionPolicy: fmt::Debug {
    fn kind(&self) -> SelectorKind;

    /// Called after `level{levels}` has been written.
    ///
    /// `cascaded` is true when the deepest slot was filled by a cascade from
    /// a shallower level, false when the user picked it directly.
    fn settle_deepest(&self, state: &mut SelectionState, levels: usize, cascaded: bool);

    /// Slot holding the secondary choice, if this variant has one
    fn nested_key(&self, _levels: usize) -> Option<LevelKey> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl SelectionPolicy for DefaultPolicy {
    fn kind(&self) -> SelectorKind {
        SelectorKind::Default
    }

    fn settle_deepest(&self, _state: &mut SelectionState, _levels: usize, _cascaded: bool) {}
}

/// Deepest level carries a nested choice (`level{levels}_1`) plus action icons
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedSelectorPolicy;

impl SelectionPolicy for AdvancedSelectorPolicy {
    fn kind(&self) -> SelectorKind {
        SelectorKind::AdvancedSelector
    }

    fn settle_deepest(&self, state: &mut SelectionState, levels: usize, cascaded: bool) {
        let key = LevelKey::nested(levels, 1);
        let deepest = state.at(levels);

        // Direct picks keep the nested id while the new parent still has it,
        // but the node itself always comes from the new parent.
        let kept = match (cascaded, deepest, state.get(key)) {
            (false, Some(parent), Some(current)) => parent
                .child(&current.id)
                .map(|fresh| refresh_nested(fresh, current)),
            _ => None,
        };

        let nested = kept.or_else(|| {
            deepest
                .and_then(OptionNode::first_child)
                .map(with_first_action_icon)
        });
        state.set(key, nested);
    }

    fn nested_key(&self, levels: usize) -> Option<LevelKey> {
        Some(LevelKey::nested(levels, 1))
    }
}

/// Clone `option` and denormalize its first action icon onto it
pub fn with_first_action_icon(option: &OptionNode) -> OptionNode {
    let mut nested = option.clone();
    if let Some(first) = nested.action_icons.first().cloned() {
        nested.trigger_icon = Some(first.icon.clone());
        nested.action_icon = Some(first);
    }
    nested
}

/// Clone `fresh`, keeping the action chosen on `previous` if `fresh` offers it
fn refresh_nested(fresh: &OptionNode, previous: &OptionNode) -> OptionNode {
    match &previous.action_icon {
        Some(icon) if fresh.action_icons.contains(icon) => {
            let mut nested = fresh.clone();
            nested.trigger_icon = Some(icon.icon.clone());
            nested.action_icon = Some(icon.clone());
            nested
        }
        _ => with_first_action_icon(fresh),
    }
}
