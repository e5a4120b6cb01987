//! Inventory events

use crate::equipment::EquipSlot;
use crate::sort::SortMethod;
use satchel_core::{ItemClassId, SceneHandle, UniqueId};

/// Events raised by inventory operations, drained by UI and feedback systems
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    /// New stack appended to the list
    ItemAdded {
        unique_id: UniqueId,
        item_class: ItemClassId,
        amount: u32,
    },
    /// Stack split in two
    StackSplit {
        source: UniqueId,
        created: UniqueId,
        amount: u32,
    },
    /// Units moved from `from` into `into`; `from` is gone if `merged`
    StacksCombined {
        into: UniqueId,
        from: UniqueId,
        moved: u32,
        merged: bool,
    },
    /// Units taken from a stack; `emptied` when the stack was deleted
    ItemRemoved {
        unique_id: UniqueId,
        amount: u32,
        emptied: bool,
    },
    /// One unit consumed
    ItemUsed {
        unique_id: UniqueId,
        item_class: ItemClassId,
    },
    /// Stack dropped into the world
    ItemDropped {
        unique_id: UniqueId,
        amount: u32,
        handle: SceneHandle,
    },
    /// Item placed into an equip slot
    ItemEquipped {
        slot: EquipSlot,
        unique_id: UniqueId,
    },
    /// Equip slot occupant sent back into the world
    ItemEjected {
        slot: EquipSlot,
        unique_id: UniqueId,
        handle: SceneHandle,
    },
    /// Total carrying capacity changed
    CapacityChanged { old: u32, new: u32 },
    /// List reordered
    Sorted(SortMethod),
    /// A pickup did not fit completely
    OutOfSpace {
        item_class: ItemClassId,
        requested: u32,
        picked_up: u32,
    },
}
