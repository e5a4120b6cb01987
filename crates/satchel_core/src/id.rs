//! Stack identifiers and item-class keys

use core::fmt;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// Identifier of a single inventory stack.
///
/// Issued by a [`UniqueIdGenerator`]; IDs from one generator are strictly
/// increasing and never handed out twice.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniqueId(u64);

impl UniqueId {
    /// Wrap a raw value
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniqueId({})", self.0)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic stack ID source.
///
/// Each inventory owns its own generator, so two carriers never share a
/// counter. The first issued ID is 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniqueIdGenerator {
    last: u64,
}

impl UniqueIdGenerator {
    /// Create a new generator
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Generate the next unique ID
    pub fn next(&mut self) -> UniqueId {
        self.last += 1;
        UniqueId(self.last)
    }
}

/// Stacking key of an item class.
///
/// Two stacks may only be combined when their class IDs are equal.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ItemClassId {
    name: Box<str>,
    hash: u64,
}

impl ItemClassId {
    /// Create a new class ID
    pub fn new(name: &str) -> Self {
        // FNV-1a
        let mut hash = 0xcbf29ce484222325u64;
        for byte in name.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }

        Self {
            name: name.into(),
            hash,
        }
    }

    /// Get the name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check for an empty name
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

// Equality checks the precomputed hash before the name.
impl PartialEq for ItemClassId {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.name == other.name
    }
}

impl Eq for ItemClassId {}

impl Hash for ItemClassId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Debug for ItemClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemClassId({:?})", self.name)
    }
}

impl fmt::Display for ItemClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for ItemClassId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemClassId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<ItemClassId> for String {
    fn from(id: ItemClassId) -> Self {
        id.name.into()
    }
}
