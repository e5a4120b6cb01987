//! Equip slots

use crate::item::StackEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Equip slot types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    /// Back slot, carries the capacity bonus
    Backpack,
    /// Hand slot
    Weapon,
    /// Appearance slot
    Cosmetic,
}

impl EquipSlot {
    /// All slots in a fixed order
    pub const ALL: [EquipSlot; 3] = [Self::Backpack, Self::Weapon, Self::Cosmetic];
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backpack => write!(f, "backpack"),
            Self::Weapon => write!(f, "weapon"),
            Self::Cosmetic => write!(f, "cosmetic"),
        }
    }
}

/// Carrying capacity from the base value and the bonuses of equipped items
pub fn total_capacity(base: u32, equipped_bonuses: impl IntoIterator<Item = u32>) -> u32 {
    equipped_bonuses
        .into_iter()
        .fold(base, |total, bonus| total.saturating_add(bonus))
}

/// The three equip slots of a carrier.
///
/// Equipped entries are snapshots; they are never part of the stack list and
/// never count towards the carried weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentSlots {
    backpack: Option<StackEntry>,
    weapon: Option<StackEntry>,
    cosmetic: Option<StackEntry>,
}

impl EquipmentSlots {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<StackEntry> {
        match slot {
            EquipSlot::Backpack => &mut self.backpack,
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Cosmetic => &mut self.cosmetic,
        }
    }

    /// Get the item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<&StackEntry> {
        match slot {
            EquipSlot::Backpack => self.backpack.as_ref(),
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Cosmetic => self.cosmetic.as_ref(),
        }
    }

    /// Put an item into a slot, returning the previous occupant
    pub fn replace(&mut self, slot: EquipSlot, entry: StackEntry) -> Option<StackEntry> {
        self.slot_mut(slot).replace(entry)
    }

    /// Empty a slot
    pub fn take(&mut self, slot: EquipSlot) -> Option<StackEntry> {
        self.slot_mut(slot).take()
    }

    /// Capacity bonuses of everything currently equipped
    pub fn bonuses(&self) -> impl Iterator<Item = u32> + '_ {
        EquipSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot))
            .map(|entry| entry.capacity_bonus)
    }

    /// Iterate over occupied slots
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &StackEntry)> {
        EquipSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|entry| (slot, entry)))
    }
}
