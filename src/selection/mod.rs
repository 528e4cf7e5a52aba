//! Selection state
//!
//! - `key` - level slot identifiers
//! - `state` - the per-level selection mapping
//! - `policy` - selector variants (default / advanced selector)
//! - `manager` - the single mutation entrypoint with cascade

mod key;
mod manager;
mod policy;
mod state;

pub use key::LevelKey;
pub use manager::{default_selections, ChangeListener, SelectionManager, DEFAULT_LEVELS};
pub use policy::{
    with_first_action_icon, AdvancedSelectorPolicy, DefaultPolicy, SelectionPolicy, SelectorKind,
};
pub use state::SelectionState;
