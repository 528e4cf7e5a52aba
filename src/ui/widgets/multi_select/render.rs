//! Terminal rendering functions for the multi-level picker.
//!
//! Columns are drawn side by side. Width math always uses the plain text;
//! color is applied only when writing out.

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::navigation::ItemId;
use crate::selection::SelectionState;
use crate::ui::theme::{colors, Glyphs};

use super::options_group::{Column, Entry, EntryKind};

/// How to draw the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub glyphs: Glyphs,
    pub color: bool,
    pub scroll_height: usize,
}

impl RenderOptions {
    pub fn plain(unicode: bool) -> Self {
        Self {
            glyphs: Glyphs::new(unicode),
            color: false,
            scroll_height: 8,
        }
    }
}

#[derive(Debug, Clone)]
struct Segment {
    text: String,
    color: Option<Color>,
}

#[derive(Debug, Clone, Default)]
struct Line {
    segments: Vec<Segment>,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment {
                text: text.into(),
                color: None,
            }],
        }
    }

    fn push(&mut self, text: impl Into<String>, color: Option<Color>) {
        self.segments.push(Segment {
            text: text.into(),
            color,
        });
    }

    fn width(&self) -> usize {
        self.segments.iter().map(|s| s.text.width()).sum()
    }

    fn write(&self, out: &mut String, color: bool) {
        for segment in &self.segments {
            match segment.color {
                Some(c) if color => out.push_str(&segment.text.as_str().with(c).to_string()),
                _ => out.push_str(&segment.text),
            }
        }
    }
}

/// Render a single entry cell
fn render_entry(entry: &Entry, focus: Option<&ItemId>, glyphs: &Glyphs) -> Segment {
    let cursor = if focus == Some(entry.id()) {
        glyphs.cursor.to_string()
    } else {
        " ".repeat(glyphs.cursor.width())
    };

    let mark = match entry.kind {
        EntryKind::Toggle { .. } => glyphs.show_more,
        _ if entry.selected => glyphs.selected,
        _ => glyphs.unselected,
    };

    let children = if entry.has_children() {
        format!(" {}", glyphs.has_children)
    } else {
        String::new()
    };

    let color = if focus == Some(entry.id()) {
        Some(colors::FOCUS)
    } else if entry.selected {
        Some(colors::SELECTED)
    } else if matches!(entry.kind, EntryKind::Toggle { .. }) {
        Some(colors::DIM)
    } else {
        None
    };

    Segment {
        text: format!("{} {} {}{}", cursor, mark, entry.label(), children),
        color,
    }
}

fn column_lines(column: &Column, focus: Option<&ItemId>, opts: &RenderOptions) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current_row: Option<&str> = None;

    for entry in &column.entries {
        let row = entry.item.data_id.as_deref();
        let segment = render_entry(entry, focus, &opts.glyphs);
        match (row, current_row, lines.last_mut()) {
            (Some(row), Some(prev), Some(line)) if row == prev => {
                line.push(" ", None);
                line.segments.push(segment);
            }
            _ => lines.push(Line {
                segments: vec![segment],
            }),
        }
        current_row = row;
    }

    if column.scroll && opts.scroll_height > 0 && lines.len() > opts.scroll_height {
        window(lines, column, focus, opts)
    } else {
        lines
    }
}

/// Keep `scroll_height` lines around the focused (or selected) entry
fn window(lines: Vec<Line>, column: &Column, focus: Option<&ItemId>, opts: &RenderOptions) -> Vec<Line> {
    let height = opts.scroll_height;
    let anchor = column
        .entries
        .iter()
        .position(|e| Some(e.id()) == focus)
        .or_else(|| column.entries.iter().position(|e| e.selected))
        .unwrap_or(0);
    let start = (anchor + 1).saturating_sub(height);
    let end = (start + height).min(lines.len());

    let mut windowed = Vec::with_capacity(height + 2);
    if start > 0 {
        windowed.push(Line::plain(format!("  {}", opts.glyphs.scroll_up)));
    }
    windowed.extend(lines[start..end].iter().cloned());
    if end < lines.len() {
        windowed.push(Line::plain(format!("  {}", opts.glyphs.scroll_down)));
    }
    windowed
}

/// Render all columns side by side
pub fn render_columns(columns: &[Column], focus: Option<&ItemId>, opts: &RenderOptions) -> String {
    let rendered: Vec<Vec<Line>> = columns
        .iter()
        .map(|column| column_lines(column, focus, opts))
        .collect();
    let widths: Vec<usize> = rendered
        .iter()
        .map(|lines| lines.iter().map(Line::width).max().unwrap_or(0))
        .collect();
    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);
    let separator = format!(" {} ", opts.glyphs.vertical);

    let mut out = String::new();
    for row in 0..height {
        let mut line = String::new();
        for (i, lines) in rendered.iter().enumerate() {
            if i > 0 {
                line.push_str(&separator);
            }
            let cell = lines.get(row).cloned().unwrap_or_default();
            cell.write(&mut line, opts.color);
            line.push_str(&" ".repeat(widths[i].saturating_sub(cell.width())));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Text shown on the trigger for the current selection
pub fn render_trigger(state: &SelectionState, glyphs: &Glyphs) -> String {
    let mut parts: Vec<String> = state
        .path()
        .into_iter()
        .map(|option| option.display_label().to_string())
        .collect();

    if let Some(nested) = state
        .iter()
        .filter(|(key, _)| key.is_nested())
        .find_map(|(_, option)| option)
    {
        let label = match &nested.trigger_icon {
            Some(icon) => format!("{} {}", nested.display_label(), icon),
            None => nested.display_label().to_string(),
        };
        parts.push(label);
    }

    if parts.is_empty() {
        return "(nothing selected)".to_string();
    }
    parts.join(&format!(" {} ", glyphs.path_separator))
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(glyphs: &Glyphs) -> String {
    format!(
        "[{}/hjkl] Navigate    [Enter/Space] Select    [q/Esc] Cancel",
        glyphs.arrows
    )
}
