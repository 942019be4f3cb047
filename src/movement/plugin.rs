//! Movement plugin - generic translate-and-cull for spawned entities.

use bevy::prelude::*;

use super::systems::{cull_out_of_bounds, move_entities};
use crate::core::TickSet;

/// Movement plugin - moves every `Mover` and culls the ones that leave the world.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, move_entities.in_set(TickSet::Movement))
            .add_systems(Update, cull_out_of_bounds.in_set(TickSet::Cleanup));
    }
}
