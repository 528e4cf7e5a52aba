//! In-memory model of the items currently rendered per level

use std::collections::BTreeMap;
use std::fmt;

/// Rendered role of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRole {
    /// Regular option column entry
    Button,
    /// Entry of a scrolling single-list column
    Menu,
}

/// Identity of a rendered item: its level plus a key unique in that level
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub level: usize,
    pub key: String,
}

impl ItemId {
    pub fn new(level: usize, key: impl Into<String>) -> Self {
        Self {
            level,
            key: key.into(),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level{}:{}", self.level, self.key)
    }
}

/// One focusable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: ItemId,
    pub role: ItemRole,
    /// Row group for horizontal navigation
    pub data_id: Option<String>,
    /// Show more/less control rather than a choice
    pub toggle: bool,
}

impl NavItem {
    pub fn button(level: usize, key: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(level, key),
            role: ItemRole::Button,
            data_id: None,
            toggle: false,
        }
    }

    pub fn with_role(mut self, role: ItemRole) -> Self {
        self.role = role;
        self
    }

    pub fn in_row(mut self, data_id: impl Into<String>) -> Self {
        self.data_id = Some(data_id.into());
        self
    }

    pub fn as_toggle(mut self) -> Self {
        self.toggle = true;
        self
    }

    pub fn level(&self) -> usize {
        self.id.level
    }

    pub fn is_in_row(&self, data_id: &str) -> bool {
        self.data_id.as_deref() == Some(data_id)
    }
}

/// Filter that keeps every item
pub fn any_item(_: &NavItem) -> bool {
    true
}

/// Filter that drops show more/less controls
pub fn skip_toggles(item: &NavItem) -> bool {
    !item.toggle
}

/// Items in render order, grouped by level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleItems {
    levels: BTreeMap<usize, Vec<NavItem>>,
}

impl VisibleItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: NavItem) {
        self.levels.entry(item.level()).or_default().push(item);
    }

    /// All items rendered for `level`, in order
    pub fn level(&self, level: usize) -> &[NavItem] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Items of `level` passing `filter`, in order
    pub fn tree_items(&self, level: usize, filter: impl Fn(&NavItem) -> bool) -> Vec<&NavItem> {
        self.level(level).iter().filter(|item| filter(item)).collect()
    }

    pub fn find(&self, id: &ItemId) -> Option<&NavItem> {
        self.level(id.level).iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.find(id).is_some()
    }

    /// First item of `level` passing `filter`
    pub fn first(&self, level: usize, filter: impl Fn(&NavItem) -> bool) -> Option<&NavItem> {
        self.level(level).iter().find(|item| filter(item))
    }

    pub fn levels(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.values().all(Vec::is_empty)
    }
}

impl FromIterator<NavItem> for VisibleItems {
    fn from_iter<I: IntoIterator<Item = NavItem>>(iter: I) -> Self {
        let mut items = Self::new();
        for item in iter {
            items.push(item);
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_grouped_by_level_in_order() {
        let items: VisibleItems = [
            NavItem::button(1, "a"),
            NavItem::button(2, "a1"),
            NavItem::button(1, "b"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = items.level(1).iter().map(|i| i.id.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(items.contains(&ItemId::new(2, "a1")));
        assert!(!items.contains(&ItemId::new(2, "a")));
    }

    #[test]
    fn tree_items_apply_filter() {
        let items: VisibleItems = [
            NavItem::button(1, "a"),
            NavItem::button(1, "more").as_toggle(),
            NavItem::button(1, "b"),
        ]
        .into_iter()
        .collect();

        assert_eq!(items.tree_items(1, any_item).len(), 3);
        assert_eq!(items.tree_items(1, skip_toggles).len(), 2);
    }

    #[test]
    fn missing_level_is_empty() {
        let items = VisibleItems::new();
        assert!(items.level(4).is_empty());
        assert!(items.first(4, any_item).is_none());
        assert!(items.is_empty());
    }

    #[test]
    fn item_id_display() {
        assert_eq!(ItemId::new(3, "v1").to_string(), "level3:v1");
    }
}
