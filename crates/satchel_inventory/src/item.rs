//! Item descriptors and inventory stacks

use crate::equipment::EquipSlot;
use crate::error::{InventoryError, Result};
use satchel_core::{ItemClassId, SceneHandle, UniqueId};
use serde::{Deserialize, Serialize};

/// How an item is handled on pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemKind {
    /// Goes into the stack list and costs weight
    #[default]
    Default,
    /// Worn on the back, raises carrying capacity
    Backpack,
    /// Held in hand
    Weapon,
    /// Visual only
    Cosmetic,
}

impl ItemKind {
    /// Equip slot this kind occupies, if any
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self {
            Self::Default => None,
            Self::Backpack => Some(EquipSlot::Backpack),
            Self::Weapon => Some(EquipSlot::Weapon),
            Self::Cosmetic => Some(EquipSlot::Cosmetic),
        }
    }
}

/// Description of an item lying in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Stacking key
    pub item_class: ItemClassId,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Pickup handling
    pub kind: ItemKind,
    /// How many units a pickup yields
    pub pickup_amount: u32,
    /// Maximum units per stack
    pub max_amount: u32,
    /// Weight per unit
    pub weight: u32,
    /// Capacity granted while equipped
    pub capacity_bonus: u32,
    /// Sort key for [`crate::SortMethod::Priority`]
    pub sort_priority: i32,
    /// Mesh/visual reference understood by the scene
    pub visual: String,
}

impl ItemDescriptor {
    /// Create a new descriptor for a single default-kind unit
    pub fn new(item_class: impl Into<ItemClassId>, name: impl Into<String>) -> Self {
        Self {
            item_class: item_class.into(),
            name: name.into(),
            description: String::new(),
            kind: ItemKind::Default,
            pickup_amount: 1,
            max_amount: 1,
            weight: 0,
            capacity_bonus: 0,
            sort_priority: 0,
            visual: String::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set kind
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set pickup amount
    pub fn with_pickup_amount(mut self, amount: u32) -> Self {
        self.pickup_amount = amount;
        self
    }

    /// Set max stack size
    pub fn with_max_amount(mut self, max: u32) -> Self {
        self.max_amount = max;
        self
    }

    /// Set weight per unit
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set capacity bonus
    pub fn with_capacity_bonus(mut self, bonus: u32) -> Self {
        self.capacity_bonus = bonus;
        self
    }

    /// Set sort priority
    pub fn with_sort_priority(mut self, priority: i32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Set visual reference
    pub fn with_visual(mut self, visual: impl Into<String>) -> Self {
        self.visual = visual.into();
        self
    }

    /// Check the descriptor can be turned into a stack
    pub fn validate(&self) -> Result<()> {
        if self.item_class.is_empty() {
            return Err(InventoryError::InvalidItem("empty item class"));
        }
        if self.kind == ItemKind::Default {
            if self.pickup_amount == 0 {
                return Err(InventoryError::InvalidItem("pickup amount is zero"));
            }
            if self.max_amount == 0 {
                return Err(InventoryError::InvalidItem("max amount is zero"));
            }
        }
        Ok(())
    }
}

/// An item placed in the scene, as handed to [`crate::Inventory::add_item`]
#[derive(Debug, Clone)]
pub struct WorldItem {
    /// Scene object representing the item
    pub handle: SceneHandle,
    /// What the item is; `pickup_amount` shrinks on partial pickups
    pub descriptor: ItemDescriptor,
}

impl WorldItem {
    pub fn new(handle: SceneHandle, descriptor: ItemDescriptor) -> Self {
        Self { handle, descriptor }
    }
}

/// A stack of identical items owned by an inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// Stacking key
    pub item_class: ItemClassId,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Units on this stack
    pub amount: u32,
    /// Maximum units on this stack
    pub max_amount: u32,
    /// Weight per unit
    pub weight: u32,
    /// Capacity granted while equipped
    pub capacity_bonus: u32,
    /// Identity of this stack, fixed at creation
    pub unique_id: UniqueId,
    /// Sort key for [`crate::SortMethod::Priority`]
    pub sort_priority: i32,
    /// Pickup handling
    pub kind: ItemKind,
    /// Mesh/visual reference understood by the scene
    pub visual: String,
}

impl StackEntry {
    /// Create a stack of `amount` units described by `descriptor`
    pub fn from_descriptor(descriptor: &ItemDescriptor, amount: u32, unique_id: UniqueId) -> Self {
        Self {
            item_class: descriptor.item_class.clone(),
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            amount,
            max_amount: descriptor.max_amount,
            weight: descriptor.weight,
            capacity_bonus: descriptor.capacity_bonus,
            unique_id,
            sort_priority: descriptor.sort_priority,
            kind: descriptor.kind,
            visual: descriptor.visual.clone(),
        }
    }

    /// Copy of this stack with a different amount and identity
    pub fn split_off(&self, amount: u32, unique_id: UniqueId) -> Self {
        Self {
            amount,
            unique_id,
            ..self.clone()
        }
    }

    /// Total weight of this stack
    pub fn total_weight(&self) -> u64 {
        self.amount as u64 * self.weight as u64
    }

    /// Check if this stack is at its maximum
    pub fn is_full(&self) -> bool {
        self.amount >= self.max_amount
    }

    /// Units that still fit on this stack
    pub fn space_left(&self) -> u32 {
        self.max_amount.saturating_sub(self.amount)
    }
}
