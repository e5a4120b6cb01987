//! # satchel_core - Satchel Core Primitives
//!
//! Small, engine-agnostic building blocks shared by the inventory crates:
//! - **Ids**: per-engine monotonic stack IDs and hashed item-class keys
//! - **Handles**: opaque references to objects owned by the scene
//! - **Transforms**: attachment points reported by the scene

pub mod handle;
pub mod id;
pub mod transform;

pub use handle::*;
pub use id::*;
pub use transform::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::handle::SceneHandle;
    pub use crate::id::{ItemClassId, UniqueId, UniqueIdGenerator};
    pub use crate::transform::Transform;
}
