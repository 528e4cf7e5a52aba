//! Per-level selection mapping

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::key::LevelKey;
use crate::error::StrataError;
use crate::models::OptionNode;

/// Selected option per level slot.
///
/// A slot can be present and empty (`None`): after a cascade every level up
/// to the configured depth has a slot, even when there was no child to pick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Option<OptionNode>>")]
pub struct SelectionState {
    slots: BTreeMap<LevelKey, Option<OptionNode>>,
}

impl SelectionState {
    /// All plain slots `level1..=levels` present and empty
    pub fn blank(levels: usize) -> Self {
        let slots = (1..=levels).map(|l| (LevelKey::level(l), None)).collect();
        Self { slots }
    }

    pub fn get(&self, key: LevelKey) -> Option<&OptionNode> {
        self.slots.get(&key).and_then(Option::as_ref)
    }

    /// Selection at a plain level
    pub fn at(&self, level: usize) -> Option<&OptionNode> {
        self.get(LevelKey::level(level))
    }

    pub fn set(&mut self, key: LevelKey, option: Option<OptionNode>) {
        self.slots.insert(key, option);
    }

    pub fn contains_key(&self, key: LevelKey) -> bool {
        self.slots.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LevelKey, Option<&OptionNode>)> {
        self.slots.iter().map(|(k, v)| (*k, v.as_ref()))
    }

    /// Plain-level selections from level 1 down, stopping at the first gap
    pub fn path(&self) -> Vec<&OptionNode> {
        (1..)
            .map_while(|level| self.at(level))
            .collect()
    }

    /// Ids along [`path`](Self::path)
    pub fn path_ids(&self) -> Vec<&str> {
        self.path().into_iter().map(|o| o.id.as_str()).collect()
    }
}

impl Serialize for SelectionState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (key, value) in &self.slots {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, Option<OptionNode>>> for SelectionState {
    type Error = StrataError;

    fn try_from(raw: BTreeMap<String, Option<OptionNode>>) -> Result<Self, Self::Error> {
        let slots = raw
            .into_iter()
            .map(|(k, v)| Ok((k.parse::<LevelKey>()?, v)))
            .collect::<Result<_, StrataError>>()?;
        Ok(Self { slots })
    }
}
