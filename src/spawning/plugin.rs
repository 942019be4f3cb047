//! Spawning plugin - timed enemy and pickup drops.

use bevy::prelude::*;

use super::schedule::{SpawnRng, SpawnSchedule};
use super::systems::{reset_spawning, spawn_enemies, spawn_food};
use crate::core::{GameState, SessionSet, TickSet};

/// Spawning plugin - drives the two spawn timers while a session is live.
pub struct SpawningPlugin;

impl Plugin for SpawningPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnRng>()
            .init_resource::<SpawnSchedule>()
            .add_systems(
                OnEnter(GameState::Playing),
                reset_spawning.in_set(SessionSet::Reset),
            )
            .add_systems(Update, (spawn_enemies, spawn_food).in_set(TickSet::Spawn));
    }
}
