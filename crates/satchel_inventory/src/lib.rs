//! Satchel Inventory - Weight-Limited Stack Inventory
//!
//! Inventory engine for a single carrier (usually a player avatar).
//!
//! # Features
//!
//! - Ordered stack list with per-class stacking and stack maximums
//! - Weight capacity with partial pickups and out-of-space events
//! - Backpack, weapon and cosmetic equip slots; backpacks raise capacity
//! - Split, combine, remove, use and drop operations
//! - Stable sorting by name, weight, amount or priority
//! - Scene access through the [`SceneAdapter`] trait
//!
//! # Example
//!
//! ```ignore
//! use satchel_inventory::prelude::*;
//!
//! let mut scene = HeadlessScene::new();
//! let mut inventory = Inventory::new(10);
//!
//! let mut ore = scene.place(
//!     ItemDescriptor::new("iron_ore", "Iron Ore")
//!         .with_pickup_amount(5)
//!         .with_max_amount(20)
//!         .with_weight(3),
//! );
//!
//! // only 3 units fit, 2 stay in the world
//! let outcome = inventory.add_item(&mut ore, &mut scene)?;
//! assert_eq!(outcome.picked(), 3);
//! ```

pub mod config;
pub mod equipment;
pub mod error;
pub mod events;
pub mod inventory;
pub mod item;
pub mod pickup;
pub mod scene;
pub mod shared;
pub mod sort;

pub mod prelude {
    pub use crate::config::{InventoryConfig, SocketNames};
    pub use crate::equipment::{total_capacity, EquipSlot, EquipmentSlots};
    pub use crate::error::{ConfigError, InventoryError};
    pub use crate::events::InventoryEvent;
    pub use crate::inventory::{CombineOutcome, Inventory, MAX_PENDING_EVENTS};
    pub use crate::item::{ItemDescriptor, ItemKind, StackEntry, WorldItem};
    pub use crate::pickup::{plan_pickup, PickupOutcome, PickupPlan};
    pub use crate::scene::{HeadlessScene, SceneAdapter, SceneCall};
    pub use crate::shared::SharedInventory;
    pub use crate::sort::SortMethod;
    pub use satchel_core::{ItemClassId, SceneHandle, Transform, UniqueId};
}

pub use prelude::*;
