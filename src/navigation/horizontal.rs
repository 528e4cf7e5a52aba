//! Row navigation for chip grids and action-icon rows.
//!
//! Items of a level are grouped into rows by `data_id`. Left/right move
//! within the current row and spill over into the neighbouring row group;
//! up/down jump to whatever sits just outside the row in render order.

use crossterm::event::KeyEvent;

use super::items::{ItemId, NavItem, VisibleItems};
use super::keys::NavKey;
use super::NavOutcome;

/// Which row the focused item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowScope<'a> {
    /// `data_id` of the current row
    pub row: &'a str,
    /// Extra `data_id` whose items also count as part of the row (an
    /// expanded overlay of the same row)
    pub extra: Option<&'a str>,
    /// Step over one more item on up/down, for rows rendered twice under a
    /// shared `data_id`
    pub jump_twice: bool,
}

impl<'a> RowScope<'a> {
    pub fn new(row: &'a str) -> Self {
        Self {
            row,
            extra: None,
            jump_twice: false,
        }
    }

    pub fn with_extra(mut self, extra: &'a str) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn jump_twice(mut self) -> Self {
        self.jump_twice = true;
        self
    }

    fn contains(&self, item: &NavItem) -> bool {
        item.is_in_row(self.row) || self.extra.is_some_and(|extra| item.is_in_row(extra))
    }
}

/// Handle a key event on `current` inside `scope`
pub fn handle_key_horizontal(
    event: &KeyEvent,
    current: &ItemId,
    items: &VisibleItems,
    scope: RowScope<'_>,
) -> NavOutcome {
    match NavKey::from_event(event) {
        Some(key) => navigate_horizontal(key, current, items, scope),
        None => NavOutcome::Ignored,
    }
}

/// Compute the focus target for `key` pressed on `current` inside `scope`
pub fn navigate_horizontal(
    key: NavKey,
    current: &ItemId,
    items: &VisibleItems,
    scope: RowScope<'_>,
) -> NavOutcome {
    let all = items.level(current.level);
    let row: Vec<&NavItem> = all.iter().filter(|item| scope.contains(item)).collect();

    let outcome = match key {
        NavKey::Activate => NavOutcome::Activate,
        NavKey::Right | NavKey::Left => {
            match row.iter().position(|item| &item.id == current) {
                None => row
                    .first()
                    .map_or(NavOutcome::Stay, |item| NavOutcome::Focus(item.id.clone())),
                Some(pos) if key == NavKey::Right && pos + 1 < row.len() => {
                    NavOutcome::Focus(row[pos + 1].id.clone())
                }
                Some(pos) if key == NavKey::Left && pos > 0 => {
                    NavOutcome::Focus(row[pos - 1].id.clone())
                }
                Some(_) => leave_row(key, all, scope),
            }
        }
        NavKey::Down | NavKey::Up => {
            let step = if scope.jump_twice { 2 } else { 1 };
            let first = all.iter().position(|item| scope.contains(item));
            let last = all.iter().rposition(|item| scope.contains(item));
            let target = match (key, first, last) {
                (NavKey::Down, _, Some(last)) => Some(last + step),
                (NavKey::Up, Some(first), _) => first.checked_sub(step),
                _ => None,
            };
            target
                .and_then(|index| all.get(index))
                .map_or(NavOutcome::Stay, |item| NavOutcome::Focus(item.id.clone()))
        }
    };
    tracing::trace!(%current, row = scope.row, ?key, ?outcome, "horizontal navigation");
    outcome
}

/// Move into the previous/next row group, reporting that focus left the row
fn leave_row(key: NavKey, all: &[NavItem], scope: RowScope<'_>) -> NavOutcome {
    let groups = row_groups(all, scope.extra);
    let Some(section) = groups.iter().position(|g| *g == scope.row) else {
        return NavOutcome::Stay;
    };

    let target = match key {
        NavKey::Right => groups
            .get(section + 1)
            .and_then(|g| all.iter().find(|item| item.is_in_row(g))),
        _ => section
            .checked_sub(1)
            .and_then(|s| groups.get(s))
            .and_then(|g| all.iter().rev().find(|item| item.is_in_row(g))),
    };
    target.map_or(NavOutcome::Stay, |item| NavOutcome::FocusOut(item.id.clone()))
}

/// Distinct `data_id`s in render order, minus the overlay group
fn row_groups<'a>(all: &'a [NavItem], extra: Option<&str>) -> Vec<&'a str> {
    let mut groups: Vec<&str> = Vec::new();
    for data_id in all.iter().filter_map(|item| item.data_id.as_deref()) {
        if Some(data_id) != extra && !groups.contains(&data_id) {
            groups.push(data_id);
        }
    }
    groups
}
