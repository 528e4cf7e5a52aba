//! Multi-level selector widget
//!
//! Columns of options, one per level, with an optional nested column of
//! version chips and action icons for the advanced selector.
//!
//! # Module Structure
//!
//! - `options_group` - Column building and the navigation model
//! - `picker` - MultiSelect state and key handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop
//! - `prompt` - Line-prompt fallback for non-interactive terminals

mod input;
mod options_group;
mod picker;
mod prompt;
mod render;

pub use input::{key_to_action, run_interactive, PickerAction};
pub use options_group::{
    build_columns, is_chip, visible_items, Column, Entry, EntryKind, ACTIONS_ROW, CHIP_ROW_PREFIX,
    TOGGLE_KEY, TOGGLE_ROW,
};
pub use picker::MultiSelect;
pub use prompt::run_prompt;
pub use render::{render_columns, render_help_bar, render_trigger, RenderOptions};
