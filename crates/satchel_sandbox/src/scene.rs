//! Logging scene
//!
//! Headless scene with fixed socket positions that logs every call.

use satchel_inventory::prelude::*;

pub struct LoggingScene {
    inner: HeadlessScene,
}

impl LoggingScene {
    pub fn new(sockets: &SocketNames) -> Self {
        let inner = HeadlessScene::new()
            .with_socket(sockets.backpack.as_str(), Transform::from_position([0.0, 1.4, -0.25]))
            .with_socket(sockets.weapon.as_str(), Transform::from_position([0.35, 1.0, 0.1]))
            .with_socket(sockets.cosmetic.as_str(), Transform::from_position([0.0, 1.8, 0.0]))
            .with_socket(sockets.drop.as_str(), Transform::from_position([0.0, 0.0, 1.0]));
        Self { inner }
    }

    pub fn place(&mut self, descriptor: ItemDescriptor) -> WorldItem {
        let item = self.inner.place(descriptor);
        log::info!(
            "[scene] placed {} x{} as {:?}",
            item.descriptor.name,
            item.descriptor.pickup_amount,
            item.handle
        );
        item
    }

    pub fn world_len(&self) -> usize {
        self.inner.world_len()
    }
}

impl SceneAdapter for LoggingScene {
    fn spawn_dropped_representation(&mut self, entry: &StackEntry, origin: Transform) -> SceneHandle {
        let handle = self.inner.spawn_dropped_representation(entry, origin);
        log::info!(
            "[scene] spawned {} x{} at {:?} as {:?}",
            entry.name,
            entry.amount,
            origin.position,
            handle
        );
        handle
    }

    fn destroy_picked_up_representation(&mut self, handle: SceneHandle) {
        log::info!("[scene] destroyed {:?}", handle);
        self.inner.destroy_picked_up_representation(handle);
    }

    fn update_remaining(&mut self, handle: SceneHandle, remaining: u32) {
        log::info!("[scene] {:?} now holds {}", handle, remaining);
        self.inner.update_remaining(handle, remaining);
    }

    fn invoke_use_effect(&mut self, item_class: &ItemClassId) {
        log::info!("[scene] use effect of {}", item_class);
        self.inner.invoke_use_effect(item_class);
    }

    fn carrier_attachment_point(&self, socket: &str) -> Transform {
        self.inner.carrier_attachment_point(socket)
    }

    fn attach_equip_visual(&mut self, slot: EquipSlot, visual: &str, at: Transform) {
        log::info!("[scene] attached {} to {} slot at {:?}", visual, slot, at.position);
        self.inner.attach_equip_visual(slot, visual, at);
    }

    fn detach_equip_visual(&mut self, slot: EquipSlot) {
        log::info!("[scene] detached {} slot visual", slot);
        self.inner.detach_equip_visual(slot);
    }
}
