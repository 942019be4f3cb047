//! Boss plugin - patrol, volleys, and the win condition.

use bevy::prelude::*;

use super::systems::{boss_fire, resolve_boss_hits, steer_boss};
use crate::core::TickSet;
use crate::movement::move_entities;

/// Boss plugin - runs the boss once `start_boss_battle` has spawned it.
pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                steer_boss.in_set(TickSet::Movement).before(move_entities),
                boss_fire.in_set(TickSet::Spawn),
                resolve_boss_hits.in_set(TickSet::Collision),
            ),
        );
    }
}
