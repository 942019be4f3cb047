//! Player plugin - movement, power state, firing, and collision response.

use bevy::prelude::*;

use super::battle::{start_boss_battle, unlock_next_enemy};
use super::collision::resolve_player_contacts;
use super::movement::{player_movement, spawn_player};
use super::power::{apply_magnet, fire_projectile, tick_power_expiry};
use crate::core::{GameState, SessionSet, TickSet};
use crate::progression::apply_points;

/// Player plugin - handles the player entity and its reactions to progression.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            spawn_player.in_set(SessionSet::Populate),
        )
        .add_systems(
            Update,
            (
                (player_movement, apply_magnet, tick_power_expiry).in_set(TickSet::Movement),
                fire_projectile.in_set(TickSet::Spawn),
                resolve_player_contacts.in_set(TickSet::Collision),
                (unlock_next_enemy, start_boss_battle)
                    .in_set(TickSet::Progression)
                    .after(apply_points),
            ),
        );
    }
}
