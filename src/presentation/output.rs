//! Output Rendering
//!
//! Results go to stdout as plain text or JSON; everything else (logs, the
//! picker itself) goes to stderr.

use serde::Serialize;

use crate::error::StrataResult;
use crate::selection::SelectionState;
use crate::ui::widgets::multi_select::{Column, Entry, EntryKind};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// One rendered column, as printed by `strata levels`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub level: usize,
    pub key: String,
    pub selected: Option<String>,
    /// Chosen action icon of the nested column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub options: Vec<String>,
}

impl ColumnSummary {
    fn is_marked(&self, label: &str) -> bool {
        self.selected.as_deref() == Some(label) || self.action.as_deref() == Some(label)
    }
}

/// How an entry is listed; toggles are not listed
fn summary_label(entry: &Entry) -> Option<String> {
    match &entry.kind {
        EntryKind::Option(option) | EntryKind::Version(option) => Some(option.id.clone()),
        EntryKind::Action(icon) => Some(format!("{}:{}", icon.icon, icon.value)),
        EntryKind::Toggle { .. } => None,
    }
}

impl From<&Column> for ColumnSummary {
    fn from(column: &Column) -> Self {
        let marked = |action: bool| {
            column
                .entries
                .iter()
                .filter(|entry| entry.selected)
                .filter(|entry| matches!(entry.kind, EntryKind::Action(_)) == action)
                .find_map(summary_label)
        };
        Self {
            level: column.level,
            key: column.key.to_string(),
            selected: marked(false),
            action: marked(true),
            options: column.entries.iter().filter_map(summary_label).collect(),
        }
    }
}

/// Render the selection state
pub fn render_state(state: &SelectionState, format: OutputFormat) -> StrataResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(state)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (key, option) in state.iter() {
                let line = match option {
                    Some(option) => {
                        let mut line = format!("{key}: {} ({})", option.id, option.title);
                        if let Some(action) = &option.action_icon {
                            line.push_str(&format!(" [{}]", action.value));
                        }
                        line
                    }
                    None => format!("{key}: -"),
                };
                out.push_str(&line);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Render the columns a picker would show
pub fn render_levels(columns: &[Column], format: OutputFormat) -> StrataResult<String> {
    let summaries: Vec<ColumnSummary> = columns.iter().map(ColumnSummary::from).collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for summary in &summaries {
                let options: Vec<String> = summary
                    .options
                    .iter()
                    .map(|id| {
                        if summary.is_marked(id) {
                            format!("[{id}]")
                        } else {
                            id.clone()
                        }
                    })
                    .collect();
                out.push_str(&format!("{}: {}\n", summary.key, options.join(" ")));
            }
            Ok(out)
        }
    }
}
