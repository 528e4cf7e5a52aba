//! The multi-level selector widget.
//!
//! Glues the [`SelectionManager`], the popover shell and the navigation
//! traversers together. Columns and the visible-items model are rebuilt
//! after every state change.

use crossterm::event::KeyEvent;

use crate::config::LayoutConfig;
use crate::navigation::{
    any_item, navigate, navigate_horizontal, skip_toggles, ItemId, NavKey, NavOutcome, RowScope,
    VisibleItems,
};
use crate::popover::{Popover, PopoverShell};
use crate::selection::{with_first_action_icon, LevelKey, SelectionManager, SelectionState};
use crate::ui::theme::Glyphs;

use super::options_group::{build_columns, is_chip, visible_items, Column, EntryKind};
use super::render::{render_columns, render_trigger, RenderOptions};

#[derive(Debug)]
pub struct MultiSelect<P: PopoverShell = Popover> {
    manager: SelectionManager,
    popover: P,
    layout: LayoutConfig,
    /// All version chips shown
    expanded: bool,
    focus: Option<ItemId>,
    columns: Vec<Column>,
    items: VisibleItems,
}

impl MultiSelect<Popover> {
    pub fn new(manager: SelectionManager) -> Self {
        Self::with_popover(manager, Popover::new())
    }
}

impl<P: PopoverShell> MultiSelect<P> {
    pub fn with_popover(manager: SelectionManager, popover: P) -> Self {
        let mut select = Self {
            manager,
            popover,
            layout: LayoutConfig::default(),
            expanded: false,
            focus: None,
            columns: Vec::new(),
            items: VisibleItems::new(),
        };
        select.rebuild();
        select
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self.rebuild();
        self
    }

    pub fn manager(&self) -> &SelectionManager {
        &self.manager
    }

    pub fn state(&self) -> &SelectionState {
        self.manager.state()
    }

    pub fn into_state(self) -> SelectionState {
        self.manager.into_state()
    }

    pub fn popover(&self) -> &P {
        &self.popover
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn items(&self) -> &VisibleItems {
        &self.items
    }

    pub fn focus(&self) -> Option<&ItemId> {
        self.focus.as_ref()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    /// Open the popover and focus the selected first-level option
    pub fn open(&mut self) {
        self.popover.set_open(true);
        self.rebuild();
        self.focus = self
            .columns
            .first()
            .and_then(|column| column.selected().or_else(|| column.entries.first()))
            .map(|entry| entry.id().clone());
    }

    pub fn close_selector(&mut self) {
        self.popover.set_open(false);
        self.expanded = false;
        self.focus = None;
        self.rebuild();
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close_selector();
        } else {
            self.open();
        }
    }

    /// Move focus to `id` if it is currently visible
    pub fn focus_item(&mut self, id: ItemId) -> bool {
        if self.items.contains(&id) {
            self.focus = Some(id);
            true
        } else {
            false
        }
    }

    /// Handle a key while the popover is open
    pub fn handle_key(&mut self, event: &KeyEvent) -> NavOutcome {
        if !self.is_open() {
            return NavOutcome::Ignored;
        }
        match NavKey::from_event(event) {
            Some(key) => self.navigate(key),
            None => NavOutcome::Ignored,
        }
    }

    pub fn navigate(&mut self, key: NavKey) -> NavOutcome {
        let Some(current) = self.focus.clone() else {
            let Some(first) = self.items.first(1, any_item) else {
                return NavOutcome::Stay;
            };
            let id = first.id.clone();
            self.focus = Some(id.clone());
            return NavOutcome::Focus(id);
        };

        let row = self
            .items
            .find(&current)
            .and_then(|item| item.data_id.clone());
        let outcome = match row.as_deref() {
            Some(row) => {
                let outcome = navigate_horizontal(key, &current, &self.items, RowScope::new(row));
                // The first chip of the first row hands Left back to the columns.
                if key == NavKey::Left && outcome == NavOutcome::Stay {
                    navigate(key, &current, &self.items, skip_toggles)
                } else {
                    outcome
                }
            }
            None => navigate(key, &current, &self.items, skip_toggles),
        };

        match &outcome {
            NavOutcome::Focus(id) => self.focus = Some(id.clone()),
            NavOutcome::FocusOut(id) => {
                self.focus = Some(id.clone());
                self.collapse_on_focus_out(id);
            }
            NavOutcome::Activate => self.activate(&current),
            NavOutcome::Ignored | NavOutcome::Stay => {}
        }
        outcome
    }

    /// Choose the entry behind `id`
    pub fn activate(&mut self, id: &ItemId) {
        let Some(entry) = self.columns.iter().find_map(|c| c.find(id)).cloned() else {
            tracing::debug!(%id, "activate on an item that is not rendered");
            return;
        };

        match entry.kind {
            EntryKind::Option(option) => {
                self.manager.select_option(LevelKey::level(id.level), option);
                if self.manager.is_last_level(id.level) {
                    self.close_selector();
                } else {
                    self.rebuild();
                }
            }
            EntryKind::Version(version) => {
                if let Some(key) = self.manager.nested_key() {
                    self.manager
                        .select_option(key, with_first_action_icon(&version));
                }
                self.close_selector();
            }
            EntryKind::Action(icon) => {
                self.manager.select_action_icon(icon);
                self.close_selector();
            }
            EntryKind::Toggle { .. } => {
                self.expanded = !self.expanded;
                self.rebuild();
            }
        }
    }

    /// Text for the trigger button
    pub fn trigger_label(&self, glyphs: &Glyphs) -> String {
        render_trigger(self.manager.state(), glyphs)
    }

    pub fn render(&self, opts: &RenderOptions) -> String {
        render_columns(&self.columns, self.focus.as_ref(), opts)
    }

    fn collapse_on_focus_out(&mut self, target: &ItemId) {
        let leaving_chips = self.items.find(target).is_some_and(|item| !is_chip(item));
        if self.expanded && leaving_chips {
            self.expanded = false;
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        self.columns = if self.popover.is_mounted() {
            build_columns(&self.manager, &self.layout, self.expanded)
        } else {
            Vec::new()
        };
        self.items = visible_items(&self.columns);

        if let Some(focus) = &self.focus {
            if !self.items.contains(focus) {
                let fallback = self
                    .items
                    .first(focus.level, skip_toggles)
                    .or_else(|| self.items.first(1, any_item))
                    .map(|item| item.id.clone());
                self.focus = fallback;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionIcon, OptionNode};
    use crate::selection::SelectorKind;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tree() -> Vec<OptionNode> {
        vec![
            OptionNode::new("a", "A").with_children(vec![
                OptionNode::new("a1", "A1").with_children(vec![
                    OptionNode::new("a1x", "A1x"),
                    OptionNode::new("a1y", "A1y"),
                ]),
                OptionNode::new("a2", "A2"),
            ]),
            OptionNode::new("b", "B").with_children(vec![OptionNode::new("b1", "B1")]),
        ]
    }

    fn icons() -> Vec<ActionIcon> {
        vec![
            ActionIcon {
                icon: "*".to_string(),
                value: "fav".to_string(),
            },
            ActionIcon {
                icon: "#".to_string(),
                value: "pin".to_string(),
            },
        ]
    }

    fn advanced() -> MultiSelect {
        let versions = (1..=5)
            .map(|i| OptionNode::new(format!("v{i}"), format!("V{i}")).with_action_icons(icons()))
            .collect();
        let data = vec![OptionNode::new("m", "Model").with_children(versions)];
        let manager = SelectionManager::new(data, 1, SelectorKind::AdvancedSelector);
        let mut select = MultiSelect::new(manager).with_layout(LayoutConfig {
            chips_per_row: 2,
            visible_versions: 3,
            scroll_height: 8,
        });
        select.open();
        select
    }

    fn focus_key(select: &MultiSelect) -> Option<&str> {
        select.focus().map(|id| id.key.as_str())
    }

    #[test]
    fn open_focuses_selected_first_level_option() {
        let mut select = MultiSelect::new(SelectionManager::new(tree(), 3, SelectorKind::Default));
        assert!(select.columns().is_empty());

        select.open();
        assert!(select.is_open());
        assert_eq!(select.focus(), Some(&ItemId::new(1, "a")));
        assert_eq!(select.columns().len(), 3);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut select = MultiSelect::new(SelectionManager::new(tree(), 3, SelectorKind::Default));
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(select.handle_key(&down), NavOutcome::Ignored);

        select.open();
        assert_eq!(
            select.handle_key(&down),
            NavOutcome::Focus(ItemId::new(1, "b"))
        );
    }

    #[test]
    fn arrows_move_between_columns() {
        let mut select = MultiSelect::new(SelectionManager::new(tree(), 3, SelectorKind::Default));
        select.open();

        assert_eq!(
            select.navigate(NavKey::Right),
            NavOutcome::Focus(ItemId::new(2, "a1"))
        );
        select.navigate(NavKey::Right);
        assert_eq!(select.focus(), Some(&ItemId::new(3, "a1x")));
        assert_eq!(select.navigate(NavKey::Right), NavOutcome::Stay);
        select.navigate(NavKey::Left);
        assert_eq!(select.focus(), Some(&ItemId::new(2, "a1")));
    }

    #[test]
    fn activating_a_parent_keeps_the_popover_open() {
        let mut select = MultiSelect::new(SelectionManager::new(tree(), 3, SelectorKind::Default));
        select.open();
        select.navigate(NavKey::Down);
        select.navigate(NavKey::Activate);

        assert!(select.is_open());
        assert_eq!(select.state().path_ids(), vec!["b", "b1"]);
        assert_eq!(select.columns().len(), 2);
        assert_eq!(select.focus(), Some(&ItemId::new(1, "b")));
    }

    #[test]
    fn activating_a_leaf_closes_the_popover() {
        let mut select = MultiSelect::new(SelectionManager::new(tree(), 3, SelectorKind::Default));
        select.open();
        assert!(select.focus_item(ItemId::new(2, "a2")));
        select.navigate(NavKey::Activate);

        assert!(!select.is_open());
        assert!(select.focus().is_none());
        assert_eq!(select.state().path_ids(), vec!["a", "a2"]);
    }

    #[test]
    fn chips_navigate_by_row() {
        let mut select = advanced();
        assert_eq!(focus_key(&select), Some("m"));

        select.navigate(NavKey::Right);
        assert_eq!(focus_key(&select), Some("v1"));
        select.navigate(NavKey::Right);
        assert_eq!(focus_key(&select), Some("v2"));
        assert_eq!(
            select.navigate(NavKey::Right),
            NavOutcome::FocusOut(ItemId::new(2, "v3"))
        );
        assert_eq!(
            select.navigate(NavKey::Left),
            NavOutcome::FocusOut(ItemId::new(2, "v2"))
        );
        select.navigate(NavKey::Left);
        assert_eq!(focus_key(&select), Some("v1"));
        assert_eq!(
            select.navigate(NavKey::Left),
            NavOutcome::Focus(ItemId::new(1, "m"))
        );
    }

    #[test]
    fn toggle_expands_and_focus_out_collapses() {
        let mut select = advanced();
        assert!(select.focus_item(ItemId::new(2, "__toggle")));
        select.navigate(NavKey::Activate);
        assert!(select.is_open());
        assert!(select.is_expanded());
        assert!(select.items().contains(&ItemId::new(2, "v5")));

        assert_eq!(
            select.navigate(NavKey::Left),
            NavOutcome::FocusOut(ItemId::new(2, "v5"))
        );
        assert!(select.is_expanded());

        select.navigate(NavKey::Right);
        assert_eq!(focus_key(&select), Some("__toggle"));
        assert!(!select.is_expanded());
        assert!(!select.items().contains(&ItemId::new(2, "v5")));
    }

    #[test]
    fn activating_a_version_selects_it_with_first_icon() {
        let mut select = advanced();
        assert!(select.focus_item(ItemId::new(2, "v3")));
        select.navigate(NavKey::Activate);

        assert!(!select.is_open());
        let nested = select.state().get(LevelKey::nested(1, 1)).unwrap();
        assert_eq!(nested.id, "v3");
        assert_eq!(nested.trigger_icon.as_deref(), Some("*"));
    }

    #[test]
    fn activating_an_action_icon_updates_nested_choice() {
        let mut select = advanced();
        assert!(select.focus_item(ItemId::new(2, "__action:pin")));
        select.navigate(NavKey::Activate);

        assert!(!select.is_open());
        let nested = select.state().get(LevelKey::nested(1, 1)).unwrap();
        assert_eq!(nested.id, "v1");
        assert_eq!(nested.action_icon.as_ref().map(|i| i.value.as_str()), Some("pin"));
        assert_eq!(
            select.trigger_label(&Glyphs::new(false)),
            "Model > V1 #"
        );
    }

    #[test]
    fn popover_listener_sees_transitions() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let popover = Popover::new().on_open_change(move |open| sink.borrow_mut().push(open));
        let mut select = MultiSelect::with_popover(
            SelectionManager::new(tree(), 2, SelectorKind::Default),
            popover,
        );

        select.toggle();
        select.open();
        select.toggle();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn force_mounted_popover_keeps_columns_while_closed() {
        let select = MultiSelect::with_popover(
            SelectionManager::new(tree(), 2, SelectorKind::Default),
            Popover::new().with_force_mount(),
        );
        assert!(!select.is_open());
        assert_eq!(select.columns().len(), 2);
    }
}
