//! Column navigation: up/down within a level, left/right across levels

use crossterm::event::KeyEvent;

use super::items::{ItemId, NavItem, VisibleItems};
use super::keys::NavKey;
use super::NavOutcome;

/// Handle a key event on `current`.
///
/// `filter` narrows the visible items considered for movement, e.g. to
/// leave show more/less toggles out of up/down traversal.
pub fn handle_key(
    event: &KeyEvent,
    current: &ItemId,
    items: &VisibleItems,
    filter: impl Fn(&NavItem) -> bool,
) -> NavOutcome {
    match NavKey::from_event(event) {
        Some(key) => navigate(key, current, items, filter),
        None => NavOutcome::Ignored,
    }
}

/// Compute the focus target for `key` pressed on `current`
pub fn navigate(
    key: NavKey,
    current: &ItemId,
    items: &VisibleItems,
    filter: impl Fn(&NavItem) -> bool,
) -> NavOutcome {
    let outcome = match key {
        NavKey::Activate => NavOutcome::Activate,
        NavKey::Down => step(current, items, &filter, |pos, len| {
            (pos + 1 < len).then_some(pos + 1)
        }),
        NavKey::Up => step(current, items, &filter, |pos, _| pos.checked_sub(1)),
        NavKey::Right => jump_level(current.level + 1, items, &filter),
        NavKey::Left => match current.level.checked_sub(1) {
            Some(level) if level >= 1 => jump_level(level, items, &filter),
            _ => NavOutcome::Stay,
        },
    };
    tracing::trace!(%current, ?key, ?outcome, "vertical navigation");
    outcome
}

fn step(
    current: &ItemId,
    items: &VisibleItems,
    filter: &impl Fn(&NavItem) -> bool,
    next: impl Fn(usize, usize) -> Option<usize>,
) -> NavOutcome {
    let visible = items.tree_items(current.level, filter);
    match visible.iter().position(|item| &item.id == current) {
        Some(pos) => next(pos, visible.len())
            .and_then(|target| visible.get(target))
            .map_or(NavOutcome::Stay, |item| NavOutcome::Focus(item.id.clone())),
        None => visible
            .first()
            .map_or(NavOutcome::Stay, |item| NavOutcome::Focus(item.id.clone())),
    }
}

fn jump_level(level: usize, items: &VisibleItems, filter: &impl Fn(&NavItem) -> bool) -> NavOutcome {
    items
        .first(level, filter)
        .map_or(NavOutcome::Stay, |item| NavOutcome::Focus(item.id.clone()))
}
