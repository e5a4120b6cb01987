//! Stack ordering

use crate::item::StackEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sort key for [`crate::Inventory::sort_inventory`]. All keys sort ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Display name, ignoring case
    Name,
    /// Weight per unit
    Weight,
    /// Units on the stack
    Amount,
    /// Sort priority
    #[default]
    Priority,
}

impl SortMethod {
    /// Compare two stacks under this method
    pub fn compare(&self, a: &StackEntry, b: &StackEntry) -> Ordering {
        match self {
            Self::Name => compare_ignore_case(&a.name, &b.name),
            Self::Weight => a.weight.cmp(&b.weight),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Priority => a.sort_priority.cmp(&b.sort_priority),
        }
    }

    /// Stable in-place sort
    pub fn apply(&self, stacks: &mut [StackEntry]) {
        stacks.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Weight => write!(f, "weight"),
            Self::Amount => write!(f, "amount"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

impl std::str::FromStr for SortMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "alpha" => Ok(Self::Name),
            "weight" => Ok(Self::Weight),
            "amount" | "count" => Ok(Self::Amount),
            "priority" | "" => Ok(Self::Priority),
            _ => Err(format!("Unknown sort method: {}", s)),
        }
    }
}
