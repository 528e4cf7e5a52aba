//! Keyboard navigation over rendered items
//!
//! The traversers never own focus. They take the currently focused item and
//! the [`VisibleItems`] model the renderer produced, and say where focus
//! should go. Focus only ever moves or stays; it never wraps.
//!
//! - `keys` - key event decoding
//! - `items` - the visible-items model
//! - `vertical` - column navigation
//! - `horizontal` - row-group navigation

mod horizontal;
mod items;
mod keys;
mod vertical;

pub use horizontal::{handle_key_horizontal, navigate_horizontal, RowScope};
pub use items::{any_item, skip_toggles, ItemId, ItemRole, NavItem, VisibleItems};
pub use keys::NavKey;
pub use vertical::{handle_key, navigate};

/// Result of handling one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Not a navigation key; let the host handle it
    Ignored,
    /// Handled, focus stays where it is
    Stay,
    /// Move focus
    Focus(ItemId),
    /// Move focus into a different row group
    FocusOut(ItemId),
    /// Enter/Space on the current item
    Activate,
}

impl NavOutcome {
    /// Whether the key was consumed (no further propagation)
    pub fn is_handled(&self) -> bool {
        !matches!(self, NavOutcome::Ignored)
    }

    /// New focus target, if focus moves
    pub fn target(&self) -> Option<&ItemId> {
        match self {
            NavOutcome::Focus(id) | NavOutcome::FocusOut(id) => Some(id),
            _ => None,
        }
    }
}
