//! Opaque handles to scene-owned objects
//!
//! The inventory never owns world objects. The scene hands out a
//! [`SceneHandle`] for every object it places and the inventory passes it
//! back when it wants that object gone.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Handle to an object living in the scene
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SceneHandle {
    bits: u64,
}

impl SceneHandle {
    /// Create a handle from raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Create a null handle
    #[inline]
    pub const fn null() -> Self {
        Self { bits: u64::MAX }
    }

    /// Check if this handle is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.bits == u64::MAX
    }

    /// Convert to raw bits
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        self.bits
    }
}

impl Default for SceneHandle {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for SceneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "SceneHandle(null)")
        } else {
            write!(f, "SceneHandle({})", self.bits)
        }
    }
}
