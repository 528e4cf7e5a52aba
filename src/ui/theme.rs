use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Design tokens for the Strata terminal UI.
///
/// Design constraints:
/// - Only 3 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SELECTED: Color = Color::Green;
    /// #06B6D4
    pub const FOCUS: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const CURSOR: &str = "❯";
    pub const HAS_CHILDREN: &str = "▶";
    pub const SCROLL_UP: &str = "▲";
    pub const SCROLL_DOWN: &str = "▼";
    pub const SHOW_MORE: &str = "…";
    pub const PATH_SEPARATOR: &str = "›";
    pub const ARROWS: &str = "↑↓←→";
}

pub mod icons_ascii {
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const CURSOR: &str = ">";
    pub const HAS_CHILDREN: &str = ">";
    pub const SCROLL_UP: &str = "^";
    pub const SCROLL_DOWN: &str = "v";
    pub const SHOW_MORE: &str = "...";
    pub const PATH_SEPARATOR: &str = ">";
    pub const ARROWS: &str = "arrows";
}

pub mod borders {
    pub const VERTICAL: &str = "│";
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const VERTICAL: &str = "|";
    pub const HORIZONTAL: &str = "-";
}

/// Icon set resolved once for a given terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub cursor: &'static str,
    pub has_children: &'static str,
    pub scroll_up: &'static str,
    pub scroll_down: &'static str,
    pub show_more: &'static str,
    pub path_separator: &'static str,
    pub arrows: &'static str,
    pub vertical: &'static str,
    pub horizontal: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                cursor: icons::CURSOR,
                has_children: icons::HAS_CHILDREN,
                scroll_up: icons::SCROLL_UP,
                scroll_down: icons::SCROLL_DOWN,
                show_more: icons::SHOW_MORE,
                path_separator: icons::PATH_SEPARATOR,
                arrows: icons::ARROWS,
                vertical: borders::VERTICAL,
                horizontal: borders::HORIZONTAL,
            }
        } else {
            Self {
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                cursor: icons_ascii::CURSOR,
                has_children: icons_ascii::HAS_CHILDREN,
                scroll_up: icons_ascii::SCROLL_UP,
                scroll_down: icons_ascii::SCROLL_DOWN,
                show_more: icons_ascii::SHOW_MORE,
                path_separator: icons_ascii::PATH_SEPARATOR,
                arrows: icons_ascii::ARROWS,
                vertical: borders_ascii::VERTICAL,
                horizontal: borders_ascii::HORIZONTAL,
            }
        }
    }
}

// ----------------------------------------------------------------------------
// StrataTheme - dialoguer theme for the line-prompt picker
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts using Strata design tokens.
///
/// Wraps `ColorfulTheme` and only replaces the select item formatting so the
/// active row carries the same cursor glyph as the column picker.
pub struct StrataTheme {
    glyphs: Glyphs,
    inner: dialoguer::theme::ColorfulTheme,
}

impl StrataTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            glyphs: Glyphs::new(unicode),
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }
}

impl Theme for StrataTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.glyphs.cursor, text)
        } else {
            write!(f, "{:width$} {}", "", text, width = self.glyphs.cursor.width())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_unicode() {
        let glyphs = Glyphs::new(true);
        assert_eq!(glyphs.selected, "●");
        assert_eq!(glyphs.unselected, "○");
    }

    #[test]
    fn test_glyphs_ascii() {
        let glyphs = Glyphs::new(false);
        assert_eq!(glyphs.selected, "[x]");
        assert_eq!(glyphs.vertical, "|");
    }

    #[test]
    fn test_theme_select_item_marks_active_row() {
        let theme = StrataTheme::new(false);
        let mut out = String::new();
        theme.format_select_prompt_item(&mut out, "Group A", true).unwrap();
        assert_eq!(out, "> Group A");

        let mut out = String::new();
        theme.format_select_prompt_item(&mut out, "Group B", false).unwrap();
        assert_eq!(out, "  Group B");
    }
}
