//! Visible screen extents in world units.

use bevy::prelude::*;

/// Half extents of the visible area, refreshed by the rendering plugin.
///
/// The core only reads this; spawning and wraparound use it as-is.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        // 16:9 view, 10 units tall
        Self {
            half_width: 5.0 * 16.0 / 9.0,
            half_height: 5.0,
        }
    }
}

impl ScreenBounds {
    pub fn from_half_size(half_size: Vec2) -> Self {
        Self {
            half_width: half_size.x,
            half_height: half_size.y,
        }
    }
}
