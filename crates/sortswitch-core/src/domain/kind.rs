//! Built-in strategy kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::StrategyError;

/// The sort variants shipped with sortswitch-core.
///
/// `Display` yields the registry name, so `kind.to_string()` can be passed
/// straight to `StrategyRegistry::get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Ascending,
    Descending,
}

impl StrategyKind {
    /// Registry name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Ascending => "ascending",
            StrategyKind::Descending => "descending",
        }
    }

    /// Human wording used in client announcements ("normal sorting", "reverse sorting").
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Ascending => "normal",
            StrategyKind::Descending => "reverse",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, StrategyError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" | "normal" => Ok(StrategyKind::Ascending),
            "descending" | "desc" | "reverse" => Ok(StrategyKind::Descending),
            _ => Err(StrategyError::UnknownStrategyKind(s.to_string())),
        }
    }
}
