//! Level keys (`level2`, `level3_1`, ...)

use std::fmt;
use std::str::FromStr;

use crate::error::StrataError;

/// Identifies one slot in a [`SelectionState`](super::SelectionState).
///
/// Ordering is by level, then plain slot before nested slots, so iterating
/// a state walks the selection path top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelKey {
    level: usize,
    sub: Option<usize>,
}

impl LevelKey {
    /// Plain slot for `level`
    pub const fn level(level: usize) -> Self {
        Self { level, sub: None }
    }

    /// Nested slot `level{level}_{sub}`
    pub const fn nested(level: usize, sub: usize) -> Self {
        Self {
            level,
            sub: Some(sub),
        }
    }

    pub fn level_number(&self) -> usize {
        self.level
    }

    pub fn sub(&self) -> Option<usize> {
        self.sub
    }

    pub fn is_nested(&self) -> bool {
        self.sub.is_some()
    }
}

impl fmt::Display for LevelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub {
            Some(sub) => write!(f, "level{}_{}", self.level, sub),
            None => write!(f, "level{}", self.level),
        }
    }
}

impl FromStr for LevelKey {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StrataError::InvalidLevelKey(s.to_string());
        let rest = s.strip_prefix("level").ok_or_else(invalid)?;
        let (level, sub) = match rest.split_once('_') {
            Some((level, sub)) => (level, Some(sub)),
            None => (rest, None),
        };
        let level: usize = level.parse().map_err(|_| invalid())?;
        let sub = sub
            .map(|s| s.parse::<usize>().map_err(|_| invalid()))
            .transpose()?;
        Ok(Self { level, sub })
    }
}
