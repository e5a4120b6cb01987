//! Inventory error types

use crate::equipment::EquipSlot;
use satchel_core::{ItemClassId, UniqueId};
use thiserror::Error;

/// Rejected inventory operations.
///
/// An operation that returns one of these has not touched the inventory.
/// Running out of space is not an error; see [`crate::PickupOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Item descriptor is structurally invalid
    #[error("Invalid item: {0}")]
    InvalidItem(&'static str),
    /// Stack index outside the list
    #[error("Stack index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Split amount is zero or would empty the source stack
    #[error("Cannot split {amount} from a stack of {available}")]
    InvalidSplitAmount { amount: u32, available: u32 },
    /// Stacks hold different item classes
    #[error("Cannot combine {first} with {second}")]
    ClassMismatch {
        first: ItemClassId,
        second: ItemClassId,
    },
    /// Both indices name the same stack
    #[error("Cannot combine stack {0} with itself")]
    SameStack(usize),
    /// Asked to remove more than the stack holds
    #[error("Cannot remove {requested} from a stack of {available}")]
    InsufficientAmount { requested: u32, available: u32 },
    /// No stack with this unique ID
    #[error("Stack not found: {0}")]
    StackNotFound(UniqueId),
    /// No stack of this item class
    #[error("No stack of class {0}")]
    ClassNotFound(ItemClassId),
    /// Equip slot holds nothing
    #[error("{0} slot is empty")]
    SlotEmpty(EquipSlot),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values that parse but make no sense
    #[error("Invalid config: {0}")]
    Invalid(String),
}
