//! Strata - hierarchical multi-level selector
//!
//! Strata picks one option per level from a tree of options. Choosing an
//! option cascades first children down to the configured depth, keyboard
//! navigation moves focus across levels and chip rows, and a popover shell
//! decides when the selector closes.

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod popover;
pub mod presentation;
pub mod resolver;
pub mod selection;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::{StrataError, StrataResult};
pub use models::{load_tree, parse_tree, ActionIcon, OptionNode, TreeFormat};
pub use navigation::{ItemId, NavItem, NavKey, NavOutcome, VisibleItems};
pub use popover::{Popover, PopoverShell};
pub use selection::{LevelKey, SelectionManager, SelectionState, SelectorKind, DEFAULT_LEVELS};
