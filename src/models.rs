//! Core data models for Strata
//!
//! An option tree is a list of [`OptionNode`]s; each node's `sub_categories`
//! are the data for the next level down.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StrataError, StrataResult};

/// An icon attached to an advanced-selector choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionIcon {
    pub icon: String,
    pub value: String,
}

/// A node in the option hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionNode {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_label: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_icons: Vec<ActionIcon>,

    /// Action icon picked for this choice. Only ever set on clones held in a
    /// selection, never on the loaded tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_icon: Option<ActionIcon>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_scroll_helper: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_categories: Vec<OptionNode>,
}

impl OptionNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<OptionNode>) -> Self {
        self.sub_categories = children;
        self
    }

    pub fn with_action_icons(mut self, icons: Vec<ActionIcon>) -> Self {
        self.action_icons = icons;
        self
    }

    pub fn with_scroll_helper(mut self) -> Self {
        self.has_scroll_helper = true;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_categories.is_empty()
    }

    pub fn first_child(&self) -> Option<&OptionNode> {
        self.sub_categories.first()
    }

    pub fn child(&self, id: &str) -> Option<&OptionNode> {
        self.sub_categories.iter().find(|c| c.id == id)
    }

    /// Label shown on the trigger: `trigger_label` if set, else `title`
    pub fn display_label(&self) -> &str {
        self.trigger_label.as_deref().unwrap_or(&self.title)
    }
}

/// Supported tree file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
}

impl TreeFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse an option tree from a string
pub fn parse_tree(content: &str, format: TreeFormat) -> StrataResult<Vec<OptionNode>> {
    let tree: Vec<OptionNode> = match format {
        TreeFormat::Json => serde_json::from_str(content)?,
        TreeFormat::Yaml => serde_yaml_ng::from_str(content)?,
    };
    validate_tree(&tree, "<root>")?;
    Ok(tree)
}

/// Load and validate an option tree file
pub fn load_tree(path: &Path) -> StrataResult<Vec<OptionNode>> {
    let format = TreeFormat::from_path(path).ok_or_else(|| StrataError::UnsupportedTreeFormat {
        file: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path)?;
    let tree = parse_tree(&content, format)?;
    tracing::debug!(file = %path.display(), roots = tree.len(), "loaded option tree");
    Ok(tree)
}

fn validate_tree(siblings: &[OptionNode], parent: &str) -> StrataResult<()> {
    let mut seen = HashSet::new();
    for node in siblings {
        if node.id.is_empty() {
            return Err(StrataError::EmptyOptionId {
                title: node.title.clone(),
                parent: parent.to_string(),
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(StrataError::DuplicateOptionId {
                id: node.id.clone(),
                parent: parent.to_string(),
            });
        }
        validate_tree(&node.sub_categories, &node.id)?;
    }
    Ok(())
}
