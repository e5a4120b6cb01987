//! Capacity-aware pickup planning

use satchel_core::{SceneHandle, UniqueId};

/// How much of a world item fits into the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupPlan {
    /// Everything fits
    Whole(u32),
    /// Only `picked` units fit, `remaining` stay in the world
    Partial { picked: u32, remaining: u32 },
    /// Nothing fits
    OutOfSpace,
}

/// Decide how many of `amount` units of `weight` each can be carried.
///
/// `load` may exceed `capacity` (after a backpack swap), which counts as no
/// free space.
pub fn plan_pickup(amount: u32, weight: u32, load: u64, capacity: u32) -> PickupPlan {
    let free = capacity as i64 - load as i64;
    let needed = amount as i64 * weight as i64;

    if free >= needed {
        return PickupPlan::Whole(amount);
    }
    if free <= 0 {
        return PickupPlan::OutOfSpace;
    }

    // free < needed, so weight > 0 here
    let picked = (free / weight as i64) as u32;
    if picked == 0 {
        return PickupPlan::OutOfSpace;
    }

    PickupPlan::Partial {
        picked,
        remaining: amount - picked,
    }
}

/// Result of a successful [`crate::Inventory::add_item`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupOutcome {
    /// The whole world item went into the stack list
    PickedUp {
        amount: u32,
        /// Stacks created for the pickup that survived merging
        new_stacks: Vec<UniqueId>,
    },
    /// Part of the world item went into the stack list, the rest stays in the world
    PartiallyPickedUp {
        picked: u32,
        remaining: u32,
        new_stacks: Vec<UniqueId>,
    },
    /// Nothing fit; the out-of-space event was raised
    OutOfSpace { requested: u32 },
    /// The item went into an equip slot
    Equipped {
        unique_id: UniqueId,
        /// Representation spawned for the previous occupant
        ejected: Option<SceneHandle>,
    },
}

impl PickupOutcome {
    /// Units moved out of the world into the stack list
    pub fn picked(&self) -> u32 {
        match self {
            Self::PickedUp { amount, .. } => *amount,
            Self::PartiallyPickedUp { picked, .. } => *picked,
            Self::OutOfSpace { .. } | Self::Equipped { .. } => 0,
        }
    }

    /// Check if the world item was consumed entirely
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::PickedUp { .. } | Self::Equipped { .. })
    }
}
