//! Selection state manager
//!
//! Owns the [`SelectionState`] and is the only place it is mutated. Every
//! selection cascades first children down to the configured depth and then
//! notifies the change listener once.

use std::fmt;

use super::key::LevelKey;
use super::policy::{with_first_action_icon, SelectionPolicy, SelectorKind};
use super::state::SelectionState;
use crate::error::{StrataError, StrataResult};
use crate::models::{ActionIcon, OptionNode};
use crate::resolver;

/// Default number of levels
pub const DEFAULT_LEVELS: usize = 3;

/// Listener invoked after each selection with the new state and the level
/// the caller selected at (never a cascaded level).
pub type ChangeListener = Box<dyn FnMut(&SelectionState, usize)>;

pub struct SelectionManager {
    data: Vec<OptionNode>,
    levels: usize,
    policy: Box<dyn SelectionPolicy>,
    state: SelectionState,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for SelectionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionManager")
            .field("levels", &self.levels)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SelectionManager {
    /// Create a manager seeded with the default selections
    pub fn new(data: Vec<OptionNode>, levels: usize, kind: SelectorKind) -> Self {
        let policy = kind.policy();
        let state = default_selections(&data, levels, policy.as_ref());
        Self {
            data,
            levels,
            policy,
            state,
            on_change: None,
        }
    }

    /// Replace the initial state with a pre-seeded one
    pub fn with_default_value(mut self, state: SelectionState) -> Self {
        self.state = state;
        self
    }

    pub fn on_change(mut self, listener: impl FnMut(&SelectionState, usize) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn into_state(self) -> SelectionState {
        self.state
    }

    pub fn data(&self) -> &[OptionNode] {
        &self.data
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn kind(&self) -> SelectorKind {
        self.policy.kind()
    }

    /// Slot of the advanced selector's secondary choice, if any
    pub fn nested_key(&self) -> Option<LevelKey> {
        self.policy.nested_key(self.levels)
    }

    /// Options visible at `level` under the current selection
    pub fn level_data(&self, level: usize) -> &[OptionNode] {
        resolver::level_data(level, &self.state, &self.data)
    }

    pub fn is_last_level(&self, level: usize) -> bool {
        resolver::is_last_level(level, self.levels, &self.state)
    }

    pub fn rendered_levels(&self) -> Vec<usize> {
        resolver::rendered_levels(self.levels, &self.state, &self.data)
    }

    /// Default selections for this manager's data
    pub fn default_selections(&self) -> SelectionState {
        default_selections(&self.data, self.levels, self.policy.as_ref())
    }

    /// Select `option` at `key` and cascade.
    ///
    /// Input is not validated beyond the level range: a level outside
    /// `1..=levels` is logged and ignored. Use
    /// [`try_select_option`](Self::try_select_option) for strict checks.
    pub fn select_option(&mut self, key: LevelKey, option: OptionNode) {
        let level = key.level_number();
        if level == 0 || level > self.levels {
            tracing::warn!(%key, levels = self.levels, "ignoring selection outside configured levels");
            return;
        }

        tracing::debug!(%key, id = %option.id, "select option");
        apply_selection(
            &mut self.state,
            key,
            option,
            self.levels,
            self.policy.as_ref(),
        );

        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.state, level);
        }
    }

    /// Like [`select_option`](Self::select_option) but rejects levels out of
    /// range and options that are not visible at that slot.
    pub fn try_select_option(&mut self, key: LevelKey, option: OptionNode) -> StrataResult<()> {
        let level = key.level_number();
        if level == 0 || level > self.levels {
            return Err(StrataError::LevelOutOfRange {
                level,
                levels: self.levels,
            });
        }

        let candidates = if key.is_nested() {
            self.state
                .at(level)
                .map(|o| o.sub_categories.as_slice())
                .unwrap_or(&[])
        } else {
            self.level_data(level)
        };
        if !candidates.iter().any(|c| c.id == option.id) {
            return Err(StrataError::UnknownOption {
                id: option.id,
                key: key.to_string(),
            });
        }

        self.select_option(key, option);
        Ok(())
    }

    /// Select a path of ids top-down, e.g. `["a", "a2"]`.
    ///
    /// With the advanced selector one extra id past the configured depth
    /// picks the nested choice.
    pub fn select_path<S: AsRef<str>>(&mut self, ids: &[S]) -> StrataResult<()> {
        for (i, id) in ids.iter().enumerate() {
            let id = id.as_ref();
            let level = i + 1;
            let key = match self.nested_key() {
                Some(nested) if level == self.levels + 1 => nested,
                _ => LevelKey::level(level),
            };
            let candidates = if key.is_nested() {
                self.state
                    .at(key.level_number())
                    .map(|o| o.sub_categories.as_slice())
                    .unwrap_or(&[])
            } else {
                self.level_data(level)
            };
            let option = candidates
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .ok_or_else(|| StrataError::UnknownOption {
                    id: id.to_string(),
                    key: key.to_string(),
                })?;
            let option = if key.is_nested() {
                with_first_action_icon(&option)
            } else {
                option
            };
            self.try_select_option(key, option)?;
        }
        Ok(())
    }

    /// Re-select the nested choice with `icon` as its action icon
    pub fn select_action_icon(&mut self, icon: ActionIcon) {
        let Some(key) = self.nested_key() else {
            return;
        };
        let Some(current) = self.state.get(key) else {
            return;
        };
        let mut nested = current.clone();
        nested.trigger_icon = Some(icon.icon.clone());
        nested.action_icon = Some(icon);
        self.select_option(key, nested);
    }

    /// Restore the default selections without notifying the listener
    pub fn reset(&mut self) {
        self.state = self.default_selections();
    }
}

/// Initial state: first option at every level, from the root down
pub fn default_selections(
    data: &[OptionNode],
    levels: usize,
    policy: &dyn SelectionPolicy,
) -> SelectionState {
    let mut state = SelectionState::blank(levels);
    if let Some(first) = data.first() {
        if levels > 0 {
            apply_selection(&mut state, LevelKey::level(1), first.clone(), levels, policy);
        }
    }
    state
}

fn apply_selection(
    state: &mut SelectionState,
    key: LevelKey,
    option: OptionNode,
    levels: usize,
    policy: &dyn SelectionPolicy,
) {
    state.set(key, Some(option));
    if key.is_nested() {
        return;
    }

    let level = key.level_number();
    for l in level..levels {
        let next = state.at(l).and_then(OptionNode::first_child).cloned();
        state.set(LevelKey::level(l + 1), next);
    }
    policy.settle_deepest(state, levels, level < levels);
}
