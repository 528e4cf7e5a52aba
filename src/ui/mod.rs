//! Terminal UI
//!
//! - `theme` - colors, glyphs and the dialoguer theme
//! - `terminal` - capability detection
//! - `widgets` - the multi-level selector widget

pub mod terminal;
pub mod theme;
pub mod widgets;
