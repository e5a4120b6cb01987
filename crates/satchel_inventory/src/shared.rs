//! Per-carrier shared access
//!
//! The engine itself is single-owner. When several systems (input, AI,
//! network) need to reach the same carrier's inventory, each carrier gets
//! exactly one lock and every mutation goes through it.

use crate::inventory::Inventory;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable handle to one carrier's inventory
#[derive(Debug, Clone)]
pub struct SharedInventory {
    inner: Arc<Mutex<Inventory>>,
}

impl SharedInventory {
    /// Wrap an inventory
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Lock for the duration of the guard
    pub fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access
    pub fn with<R>(&self, f: impl FnOnce(&mut Inventory) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl From<Inventory> for SharedInventory {
    fn from(inventory: Inventory) -> Self {
        Self::new(inventory)
    }
}
