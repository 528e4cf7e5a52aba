//! Column building.
//!
//! Turns the selection manager's state into one [`Column`] per rendered
//! level, and those columns into the [`VisibleItems`] model used for
//! keyboard navigation. Both are rebuilt after every state change so the
//! navigation universe always matches what is on screen.

use crate::config::LayoutConfig;
use crate::models::{ActionIcon, OptionNode};
use crate::navigation::{ItemId, ItemRole, NavItem, VisibleItems};
use crate::selection::{LevelKey, SelectionManager};

/// Key of the show more/less control in the nested column
pub const TOGGLE_KEY: &str = "__toggle";
/// Row group of the show more/less control
pub const TOGGLE_ROW: &str = "toggle";
/// Row group of the action icons in the nested column
pub const ACTIONS_ROW: &str = "actions";
/// Prefix of version chip row groups (`row-0`, `row-1`, ...)
pub const CHIP_ROW_PREFIX: &str = "row-";

const ACTION_KEY_PREFIX: &str = "__action:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular option of a level
    Option(OptionNode),
    /// Version chip of the advanced selector's nested column
    Version(OptionNode),
    /// Action icon of the nested choice
    Action(ActionIcon),
    /// Show more/less control for version chips
    Toggle { expanded: bool, hidden: usize },
}

/// One rendered item with what it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub item: NavItem,
    pub kind: EntryKind,
    pub selected: bool,
}

impl Entry {
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    pub fn label(&self) -> String {
        match &self.kind {
            EntryKind::Option(option) | EntryKind::Version(option) => option.title.clone(),
            EntryKind::Action(icon) => format!("{} {}", icon.icon, icon.value),
            EntryKind::Toggle { expanded: true, .. } => "less".to_string(),
            EntryKind::Toggle { hidden, .. } => format!("more ({hidden})"),
        }
    }

    /// Whether choosing this entry opens a deeper column
    pub fn has_children(&self) -> bool {
        matches!(&self.kind, EntryKind::Option(option) if !option.is_leaf())
    }
}

/// One column of the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub level: usize,
    /// Slot this column selects into
    pub key: LevelKey,
    /// Rendered as a scrolling single list
    pub scroll: bool,
    pub entries: Vec<Entry>,
}

impl Column {
    pub fn find(&self, id: &ItemId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.entries.iter().find(|e| e.selected)
    }
}

/// Build the columns for the manager's current state.
///
/// `expanded` shows every version chip instead of the first
/// `layout.visible_versions`.
pub fn build_columns(
    manager: &SelectionManager,
    layout: &LayoutConfig,
    expanded: bool,
) -> Vec<Column> {
    let state = manager.state();

    let mut columns: Vec<Column> = manager
        .rendered_levels()
        .into_iter()
        .map(|level| {
            let scroll = level > 1 && state.at(level - 1).is_some_and(|p| p.has_scroll_helper);
            let role = if scroll {
                ItemRole::Menu
            } else {
                ItemRole::Button
            };
            let selected_id = state.at(level).map(|o| o.id.as_str());
            let entries = manager
                .level_data(level)
                .iter()
                .map(|option| Entry {
                    item: NavItem::button(level, option.id.clone()).with_role(role),
                    selected: selected_id == Some(option.id.as_str()),
                    kind: EntryKind::Option(option.clone()),
                })
                .collect();
            Column {
                level,
                key: LevelKey::level(level),
                scroll,
                entries,
            }
        })
        .collect();

    let reached_deepest = columns.last().is_some_and(|c| c.level == manager.levels());
    if let (Some(key), true) = (manager.nested_key(), reached_deepest) {
        if let Some(column) = nested_column(manager, key, layout, expanded) {
            columns.push(column);
        }
    }

    columns
}

fn nested_column(
    manager: &SelectionManager,
    key: LevelKey,
    layout: &LayoutConfig,
    expanded: bool,
) -> Option<Column> {
    let state = manager.state();
    let parent = state.at(key.level_number())?;
    if parent.is_leaf() {
        return None;
    }

    let level = manager.levels() + 1;
    let current = state.get(key);
    let per_row = layout.chips_per_row.max(1);
    let limit = layout.visible_versions.max(1);
    let total = parent.sub_categories.len();
    let shown = if expanded { total } else { total.min(limit) };

    let mut entries: Vec<Entry> = parent
        .sub_categories
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, version)| Entry {
            item: NavItem::button(level, version.id.clone())
                .in_row(format!("{CHIP_ROW_PREFIX}{}", i / per_row)),
            selected: current.is_some_and(|c| c.id == version.id),
            kind: EntryKind::Version(version.clone()),
        })
        .collect();

    if total > limit {
        entries.push(Entry {
            item: NavItem::button(level, TOGGLE_KEY)
                .in_row(TOGGLE_ROW)
                .as_toggle(),
            selected: false,
            kind: EntryKind::Toggle {
                expanded,
                hidden: total - shown,
            },
        });
    }

    if let Some(current) = current {
        for icon in &current.action_icons {
            entries.push(Entry {
                item: NavItem::button(level, format!("{ACTION_KEY_PREFIX}{}", icon.value))
                    .in_row(ACTIONS_ROW),
                selected: current.action_icon.as_ref() == Some(icon),
                kind: EntryKind::Action(icon.clone()),
            });
        }
    }

    Some(Column {
        level,
        key,
        scroll: false,
        entries,
    })
}

/// Navigation model of the rendered columns
pub fn visible_items(columns: &[Column]) -> VisibleItems {
    columns
        .iter()
        .flat_map(|column| column.entries.iter().map(|entry| entry.item.clone()))
        .collect()
}

/// Whether `item` is a version chip (as opposed to a toggle or action)
pub fn is_chip(item: &NavItem) -> bool {
    item.data_id
        .as_deref()
        .is_some_and(|d| d.starts_with(CHIP_ROW_PREFIX))
}
