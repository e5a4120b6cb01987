//! Attachment transforms reported by the scene

use serde::{Deserialize, Serialize};

/// Position and orientation of a carrier socket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World position
    pub position: [f32; 3],
    /// World rotation (quaternion, xyzw)
    pub rotation: [f32; 4],
}

impl Transform {
    /// Identity transform at the origin
    pub const IDENTITY: Self = Self {
        position: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
    };

    /// Transform at a position with no rotation
    pub fn from_position(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
