//! Scene collaborator
//!
//! The inventory does not know about meshes, actors or sockets. Every time
//! something has to appear in or vanish from the world it asks a
//! [`SceneAdapter`]. Calls are synchronous and must not call back into the
//! inventory that issued them.

use crate::equipment::EquipSlot;
use crate::item::{ItemDescriptor, StackEntry, WorldItem};
use satchel_core::{ItemClassId, SceneHandle, Transform};
use std::collections::HashMap;

/// World/scene services used by the inventory
pub trait SceneAdapter {
    /// Place an object in the world matching a stack that left the inventory
    fn spawn_dropped_representation(&mut self, entry: &StackEntry, origin: Transform) -> SceneHandle;

    /// Remove a picked-up object from the world
    fn destroy_picked_up_representation(&mut self, handle: SceneHandle);

    /// Shrink a world object after a partial pickup to the units left behind
    fn update_remaining(&mut self, handle: SceneHandle, remaining: u32);

    /// Trigger the item-specific effect of one consumed unit
    fn invoke_use_effect(&mut self, item_class: &ItemClassId);

    /// Location of a named socket on the carrier
    fn carrier_attachment_point(&self, socket: &str) -> Transform;

    /// Show an equipped item on the carrier
    fn attach_equip_visual(&mut self, _slot: EquipSlot, _visual: &str, _at: Transform) {}

    /// Remove the visual of an equip slot
    fn detach_equip_visual(&mut self, _slot: EquipSlot) {}
}

/// A call received by a [`HeadlessScene`]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    Spawned {
        handle: SceneHandle,
        item_class: ItemClassId,
        amount: u32,
        origin: Transform,
    },
    Destroyed(SceneHandle),
    Remaining {
        handle: SceneHandle,
        amount: u32,
    },
    UseEffect(ItemClassId),
    Attached {
        slot: EquipSlot,
        visual: String,
        at: Transform,
    },
    Detached(EquipSlot),
}

/// Scene without rendering.
///
/// Hands out sequential handles, keeps the set of live world items and
/// records every call it receives. Useful for servers, tools and tests.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    next_handle: u64,
    world: HashMap<SceneHandle, ItemDescriptor>,
    sockets: HashMap<String, Transform>,
    calls: Vec<SceneCall>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transform reported for a socket (unknown sockets report identity)
    pub fn with_socket(mut self, socket: impl Into<String>, at: Transform) -> Self {
        self.sockets.insert(socket.into(), at);
        self
    }

    fn allocate(&mut self) -> SceneHandle {
        let handle = SceneHandle::from_bits(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Put an item into the world
    pub fn place(&mut self, descriptor: ItemDescriptor) -> WorldItem {
        let handle = self.allocate();
        self.world.insert(handle, descriptor.clone());
        WorldItem::new(handle, descriptor)
    }

    /// Look up a live world item
    pub fn world_item(&self, handle: SceneHandle) -> Option<&ItemDescriptor> {
        self.world.get(&handle)
    }

    /// Check if a world item is still present
    pub fn contains(&self, handle: SceneHandle) -> bool {
        self.world.contains_key(&handle)
    }

    /// Number of live world items
    pub fn world_len(&self) -> usize {
        self.world.len()
    }

    /// Calls received so far
    pub fn calls(&self) -> &[SceneCall] {
        &self.calls
    }

    /// Drain recorded calls
    pub fn drain_calls(&mut self) -> Vec<SceneCall> {
        std::mem::take(&mut self.calls)
    }
}

impl SceneAdapter for HeadlessScene {
    fn spawn_dropped_representation(&mut self, entry: &StackEntry, origin: Transform) -> SceneHandle {
        let handle = self.allocate();
        let descriptor = ItemDescriptor {
            item_class: entry.item_class.clone(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            kind: entry.kind,
            pickup_amount: entry.amount,
            max_amount: entry.max_amount,
            weight: entry.weight,
            capacity_bonus: entry.capacity_bonus,
            sort_priority: entry.sort_priority,
            visual: entry.visual.clone(),
        };
        self.world.insert(handle, descriptor);
        self.calls.push(SceneCall::Spawned {
            handle,
            item_class: entry.item_class.clone(),
            amount: entry.amount,
            origin,
        });
        handle
    }

    fn destroy_picked_up_representation(&mut self, handle: SceneHandle) {
        self.world.remove(&handle);
        self.calls.push(SceneCall::Destroyed(handle));
    }

    fn update_remaining(&mut self, handle: SceneHandle, remaining: u32) {
        if let Some(descriptor) = self.world.get_mut(&handle) {
            descriptor.pickup_amount = remaining;
        }
        self.calls.push(SceneCall::Remaining {
            handle,
            amount: remaining,
        });
    }

    fn invoke_use_effect(&mut self, item_class: &ItemClassId) {
        self.calls.push(SceneCall::UseEffect(item_class.clone()));
    }

    fn carrier_attachment_point(&self, socket: &str) -> Transform {
        self.sockets.get(socket).copied().unwrap_or_default()
    }

    fn attach_equip_visual(&mut self, slot: EquipSlot, visual: &str, at: Transform) {
        self.calls.push(SceneCall::Attached {
            slot,
            visual: visual.to_string(),
            at,
        });
    }

    fn detach_equip_visual(&mut self, slot: EquipSlot) {
        self.calls.push(SceneCall::Detached(slot));
    }
}
