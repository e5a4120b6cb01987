//! Inventory engine
//!
//! Owns the ordered stack list, the equip slots, the capacity and the stack
//! ID generator of a single carrier. Every operation runs to completion on
//! the calling thread; rejected operations leave the inventory untouched.

use crate::config::{InventoryConfig, SocketNames};
use crate::equipment::{total_capacity, EquipSlot, EquipmentSlots};
use crate::error::{InventoryError, Result};
use crate::events::InventoryEvent;
use crate::item::{ItemDescriptor, StackEntry, WorldItem};
use crate::pickup::{plan_pickup, PickupOutcome, PickupPlan};
use crate::scene::SceneAdapter;
use crate::sort::SortMethod;
use satchel_core::{ItemClassId, SceneHandle, UniqueId, UniqueIdGenerator};

/// Undrained events kept per carrier; the oldest are discarded beyond this
pub const MAX_PENDING_EVENTS: usize = 256;

/// Result of a successful [`Inventory::combine_stack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOutcome {
    /// The second stack was absorbed and removed from the list
    Merged { amount: u32 },
    /// The first stack was filled; `left` units stay on the second stack
    Partial { moved: u32, left: u32 },
}

/// Weight-limited stack inventory of one carrier.
///
/// Not `Clone`: a copy would share the ID sequence of the original and issue
/// duplicate stack IDs. Share a carrier through [`crate::SharedInventory`].
#[derive(Debug)]
pub struct Inventory {
    /// Stacks in list order
    stacks: Vec<StackEntry>,
    /// Backpack, weapon and cosmetic slots
    equipment: EquipmentSlots,
    /// Capacity without equipment
    base_capacity: u32,
    /// Capacity including equipment bonuses
    total_capacity: u32,
    /// Stack ID source
    ids: UniqueIdGenerator,
    /// Carrier sockets handed to the scene
    sockets: SocketNames,
    /// Sort applied after stack pickups
    auto_sort: Option<SortMethod>,
    /// Events not yet drained, at most [`MAX_PENDING_EVENTS`]
    events: Vec<InventoryEvent>,
}

impl Inventory {
    /// Create an empty inventory with the given base capacity
    pub fn new(base_capacity: u32) -> Self {
        Self {
            stacks: Vec::new(),
            equipment: EquipmentSlots::new(),
            base_capacity,
            total_capacity: base_capacity,
            ids: UniqueIdGenerator::new(),
            sockets: SocketNames::default(),
            auto_sort: None,
            events: Vec::new(),
        }
    }

    /// Create an empty inventory from configuration
    pub fn from_config(config: &InventoryConfig) -> Self {
        let mut inventory = Self::new(config.base_capacity).with_sockets(config.sockets.clone());
        inventory.auto_sort = config.auto_sort;
        inventory
    }

    /// Set socket names
    pub fn with_sockets(mut self, sockets: SocketNames) -> Self {
        self.sockets = sockets;
        self
    }

    /// Sort the list after every stack pickup
    pub fn with_auto_sort(mut self, method: SortMethod) -> Self {
        self.auto_sort = Some(method);
        self
    }

    /// Number of stacks
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Check if the stack list is empty
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Stacks in list order
    pub fn stacks(&self) -> &[StackEntry] {
        &self.stacks
    }

    /// Item in an equip slot
    pub fn equipped(&self, slot: EquipSlot) -> Option<&StackEntry> {
        self.equipment.get(slot)
    }

    /// All equip slots
    pub fn equipment(&self) -> &EquipmentSlots {
        &self.equipment
    }

    /// Capacity without equipment
    pub fn base_capacity(&self) -> u32 {
        self.base_capacity
    }

    /// Capacity including equipment bonuses
    pub fn total_capacity(&self) -> u32 {
        self.total_capacity
    }

    /// Weight that still fits
    pub fn free_capacity(&self) -> u64 {
        (self.total_capacity as u64).saturating_sub(self.calculate_inventory_weight())
    }

    /// Units of a class across all stacks
    pub fn count_of(&self, item_class: &ItemClassId) -> u64 {
        self.stacks
            .iter()
            .filter(|s| s.item_class == *item_class)
            .map(|s| s.amount as u64)
            .sum()
    }

    /// Events raised since the last drain
    pub fn events(&self) -> &[InventoryEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Discard pending events. Hosts without an event consumer call this
    /// once per tick.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn push_event(&mut self, event: InventoryEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            log::debug!("Event buffer full, discarding oldest event");
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Issue the next stack ID
    pub fn calculate_unique_id(&mut self) -> UniqueId {
        self.ids.next()
    }

    /// Total weight of one stack
    pub fn calculate_stack_weight(stack: &StackEntry) -> u64 {
        stack.total_weight()
    }

    /// Total weight of the stack list; equipped items weigh nothing
    pub fn calculate_inventory_weight(&self) -> u64 {
        self.stacks.iter().map(Self::calculate_stack_weight).sum()
    }

    /// Take an item from the world.
    ///
    /// Default-kind items go through capacity-aware pickup; equip kinds
    /// replace their slot. Only a structurally invalid descriptor is an
    /// error; running out of space is reported through the outcome and an
    /// [`InventoryEvent::OutOfSpace`] event. On a partial pickup the world
    /// item's `pickup_amount` is reduced to what was left behind.
    pub fn add_item(&mut self, item: &mut WorldItem, scene: &mut dyn SceneAdapter) -> Result<PickupOutcome> {
        item.descriptor.validate()?;

        let outcome = match item.descriptor.kind.equip_slot() {
            None => self.add_default_item(item, scene),
            Some(slot) => self.equip_item(slot, item, scene),
        };
        Ok(outcome)
    }

    fn add_default_item(&mut self, item: &mut WorldItem, scene: &mut dyn SceneAdapter) -> PickupOutcome {
        let requested = item.descriptor.pickup_amount;
        let load = self.calculate_inventory_weight();

        let (picked, remaining) = match plan_pickup(requested, item.descriptor.weight, load, self.total_capacity) {
            PickupPlan::Whole(amount) => (amount, 0),
            PickupPlan::Partial { picked, remaining } => (picked, remaining),
            PickupPlan::OutOfSpace => {
                log::warn!(
                    "Out of space for {} x{} (load {}/{})",
                    item.descriptor.item_class,
                    requested,
                    load,
                    self.total_capacity
                );
                self.push_event(InventoryEvent::OutOfSpace {
                    item_class: item.descriptor.item_class.clone(),
                    requested,
                    picked_up: 0,
                });
                return PickupOutcome::OutOfSpace { requested };
            }
        };

        let new_stacks = self.insert_stacks(&item.descriptor, picked);
        if let Some(method) = self.auto_sort {
            self.sort_inventory(method);
        }

        if remaining == 0 {
            scene.destroy_picked_up_representation(item.handle);
            log::debug!("Picked up {} x{}", item.descriptor.item_class, picked);
            return PickupOutcome::PickedUp {
                amount: picked,
                new_stacks,
            };
        }

        item.descriptor.pickup_amount = remaining;
        scene.update_remaining(item.handle, remaining);
        log::warn!(
            "Picked up {} of {} {}, {} left behind",
            picked,
            requested,
            item.descriptor.item_class,
            remaining
        );
        self.push_event(InventoryEvent::OutOfSpace {
            item_class: item.descriptor.item_class.clone(),
            requested,
            picked_up: picked,
        });
        PickupOutcome::PartiallyPickedUp {
            picked,
            remaining,
            new_stacks,
        }
    }

    /// Append `amount` units as new stacks, merging each into the first
    /// non-full stack of the same class when there is one.
    ///
    /// Pickups larger than the stack maximum are inserted in chunks so no
    /// stack ever exceeds its maximum. Returns the IDs of the new stacks that
    /// were not fully merged away.
    fn insert_stacks(&mut self, descriptor: &ItemDescriptor, amount: u32) -> Vec<UniqueId> {
        let mut created = Vec::new();
        let mut left = amount;

        while left > 0 {
            let chunk = left.min(descriptor.max_amount);
            left -= chunk;

            let target = self
                .find_stack_by_class(&descriptor.item_class, false)
                .map(|(index, _)| index);

            let entry = StackEntry::from_descriptor(descriptor, chunk, self.ids.next());
            let unique_id = entry.unique_id;
            self.stacks.push(entry);
            self.push_event(InventoryEvent::ItemAdded {
                unique_id,
                item_class: descriptor.item_class.clone(),
                amount: chunk,
            });

            if let Some(target) = target {
                let new_index = self.stacks.len() - 1;
                if let Ok(CombineOutcome::Merged { .. }) = self.combine_stack(target, new_index) {
                    continue;
                }
            }
            created.push(unique_id);
        }

        created
    }

    fn equip_item(&mut self, slot: EquipSlot, item: &WorldItem, scene: &mut dyn SceneAdapter) -> PickupOutcome {
        let amount = item.descriptor.pickup_amount.max(1);
        let entry = StackEntry::from_descriptor(&item.descriptor, amount, self.ids.next());
        let unique_id = entry.unique_id;

        let previous = self.equipment.take(slot);
        let ejected = previous.map(|previous| self.eject(slot, previous, &mut *scene));

        let at = scene.carrier_attachment_point(self.sockets.for_slot(slot));
        scene.attach_equip_visual(slot, &entry.visual, at);

        log::info!("Equipped {} in {} slot", entry.name, slot);
        self.equipment.replace(slot, entry);
        self.refresh_capacity();
        self.push_event(InventoryEvent::ItemEquipped { slot, unique_id });

        scene.destroy_picked_up_representation(item.handle);
        PickupOutcome::Equipped { unique_id, ejected }
    }

    /// Send a former slot occupant back into the world
    fn eject(&mut self, slot: EquipSlot, previous: StackEntry, scene: &mut dyn SceneAdapter) -> SceneHandle {
        scene.detach_equip_visual(slot);
        let origin = scene.carrier_attachment_point(&self.sockets.drop);
        let handle = scene.spawn_dropped_representation(&previous, origin);

        log::debug!("Ejected {} from {} slot", previous.name, slot);
        self.push_event(InventoryEvent::ItemEjected {
            slot,
            unique_id: previous.unique_id,
            handle,
        });
        handle
    }

    fn refresh_capacity(&mut self) {
        let new = total_capacity(self.base_capacity, self.equipment.bonuses());
        if new != self.total_capacity {
            let old = self.total_capacity;
            self.total_capacity = new;
            log::debug!("Capacity {} -> {}", old, new);
            self.push_event(InventoryEvent::CapacityChanged { old, new });
        }
    }

    /// Empty an equip slot, putting its item back into the world
    pub fn drop_equipped(&mut self, slot: EquipSlot, scene: &mut dyn SceneAdapter) -> Result<SceneHandle> {
        let previous = self.equipment.take(slot).ok_or(InventoryError::SlotEmpty(slot))?;
        let handle = self.eject(slot, previous, scene);
        self.refresh_capacity();
        Ok(handle)
    }

    /// Remove a whole stack and place it in the world at the drop socket
    pub fn drop_item(&mut self, unique_id: UniqueId, scene: &mut dyn SceneAdapter) -> Result<SceneHandle> {
        let index = self
            .find_stack_by_unique_id(unique_id)
            .map(|(index, _)| index)
            .ok_or(InventoryError::StackNotFound(unique_id))?;

        let entry = self.stacks.remove(index);
        let origin = scene.carrier_attachment_point(&self.sockets.drop);
        let handle = scene.spawn_dropped_representation(&entry, origin);

        log::debug!("Dropped {} x{}", entry.item_class, entry.amount);
        self.push_event(InventoryEvent::ItemDropped {
            unique_id,
            amount: entry.amount,
            handle,
        });
        Ok(handle)
    }

    /// Consume one unit of a class and trigger its effect
    pub fn use_item(&mut self, item_class: &ItemClassId, scene: &mut dyn SceneAdapter) -> Result<()> {
        let (index, unique_id) = self
            .find_stack_by_class(item_class, true)
            .map(|(index, stack)| (index, stack.unique_id))
            .ok_or_else(|| InventoryError::ClassNotFound(item_class.clone()))?;

        self.remove_from_stack(index, 1, false)?;
        scene.invoke_use_effect(item_class);

        self.push_event(InventoryEvent::ItemUsed {
            unique_id,
            item_class: item_class.clone(),
        });
        Ok(())
    }

    /// Move `amount` units of a stack onto a new stack at the end of the list.
    ///
    /// The amount must be positive and smaller than the stack; the source is
    /// never emptied. Returns the new stack's ID.
    pub fn split_stack(&mut self, index: usize, amount: u32) -> Result<UniqueId> {
        let len = self.stacks.len();
        let source = self
            .stacks
            .get(index)
            .ok_or(InventoryError::IndexOutOfRange { index, len })?;

        if amount == 0 || amount >= source.amount {
            return Err(InventoryError::InvalidSplitAmount {
                amount,
                available: source.amount,
            });
        }

        let created = source.split_off(amount, self.ids.next());
        let source_id = source.unique_id;
        let created_id = created.unique_id;

        self.stacks[index].amount -= amount;
        self.stacks.push(created);

        self.push_event(InventoryEvent::StackSplit {
            source: source_id,
            created: created_id,
            amount,
        });
        Ok(created_id)
    }

    /// Move units from the second stack onto the first.
    ///
    /// If everything fits the second stack is removed; otherwise the first
    /// stack is filled to its maximum and the second keeps the rest.
    pub fn combine_stack(&mut self, first: usize, second: usize) -> Result<CombineOutcome> {
        let len = self.stacks.len();
        for index in [first, second] {
            if index >= len {
                return Err(InventoryError::IndexOutOfRange { index, len });
            }
        }
        if first == second {
            return Err(InventoryError::SameStack(first));
        }

        let (a, b) = (&self.stacks[first], &self.stacks[second]);
        if a.item_class != b.item_class {
            return Err(InventoryError::ClassMismatch {
                first: a.item_class.clone(),
                second: b.item_class.clone(),
            });
        }

        let into = a.unique_id;
        let from = b.unique_id;

        let outcome = if a.amount as u64 + b.amount as u64 <= a.max_amount as u64 {
            let amount = b.amount;
            self.stacks[first].amount += amount;
            self.stacks.remove(second);
            CombineOutcome::Merged { amount }
        } else {
            let moved = a.space_left();
            let target = &mut self.stacks[first];
            target.amount = target.max_amount;

            // the rest stays behind even if nothing is left
            let rest = &mut self.stacks[second];
            rest.amount = rest.amount.saturating_sub(moved);
            CombineOutcome::Partial {
                moved,
                left: rest.amount,
            }
        };

        let (moved, merged) = match outcome {
            CombineOutcome::Merged { amount } => (amount, true),
            CombineOutcome::Partial { moved, .. } => (moved, false),
        };
        log::debug!("Combined {} into {} ({} moved)", from, into, moved);
        self.push_event(InventoryEvent::StacksCombined {
            into,
            from,
            moved,
            merged,
        });
        Ok(outcome)
    }

    /// Take units off a stack, deleting it once empty.
    ///
    /// With `remove_whole` the stack is deleted regardless of `amount`.
    pub fn remove_from_stack(&mut self, index: usize, amount: u32, remove_whole: bool) -> Result<()> {
        let len = self.stacks.len();
        if index >= len {
            return Err(InventoryError::IndexOutOfRange { index, len });
        }

        if remove_whole {
            let removed = self.stacks.remove(index);
            self.push_event(InventoryEvent::ItemRemoved {
                unique_id: removed.unique_id,
                amount: removed.amount,
                emptied: true,
            });
            return Ok(());
        }

        let stack = &mut self.stacks[index];
        if amount > stack.amount {
            return Err(InventoryError::InsufficientAmount {
                requested: amount,
                available: stack.amount,
            });
        }

        stack.amount -= amount;
        let unique_id = stack.unique_id;
        let emptied = stack.amount == 0;
        if emptied {
            self.stacks.remove(index);
        }

        self.push_event(InventoryEvent::ItemRemoved {
            unique_id,
            amount,
            emptied,
        });
        Ok(())
    }

    /// Find a stack by its unique ID
    pub fn find_stack_by_unique_id(&self, unique_id: UniqueId) -> Option<(usize, &StackEntry)> {
        self.stacks
            .iter()
            .enumerate()
            .find(|(_, stack)| stack.unique_id == unique_id)
    }

    /// Find a stack of a class.
    ///
    /// The first non-full stack wins. Full stacks are only considered when
    /// `return_full` is set and no non-full stack exists; then the first full
    /// one is returned.
    pub fn find_stack_by_class(&self, item_class: &ItemClassId, return_full: bool) -> Option<(usize, &StackEntry)> {
        let mut first_full = None;

        for (index, stack) in self.stacks.iter().enumerate() {
            if stack.item_class != *item_class {
                continue;
            }
            if !stack.is_full() {
                return Some((index, stack));
            }
            if return_full && first_full.is_none() {
                first_full = Some((index, stack));
            }
        }

        first_full
    }

    /// Get a stack by list position
    pub fn find_stack_by_index(&self, index: usize) -> Option<&StackEntry> {
        self.stacks.get(index)
    }

    /// Reorder the list; nothing but positions change
    pub fn sort_inventory(&mut self, method: SortMethod) {
        method.apply(&mut self.stacks);
        self.push_event(InventoryEvent::Sorted(method));
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::from_config(&InventoryConfig::default())
    }
}
