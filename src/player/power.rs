//! Power-up state, food magnet, and player projectiles.

use bevy::prelude::*;

use super::components::*;
use crate::core::{
    GameConfig, MusicCue, MusicEvent, PlayerInput, PlayerTuning, SoundCue, SoundEvent,
};
use crate::movement::{Category, Mover};
use crate::spawning::kinematic;

/// Radius of a player projectile's sensor.
const PROJECTILE_RADIUS: f32 = 0.35;

/// Turn the power state on: speed boost, powered skin, fresh expiry.
pub fn activate_power(
    stats: &mut PlayerStats,
    power: &mut PowerUp,
    skin: &mut Skin,
    tuning: &PlayerTuning,
) {
    power.activate(tuning.power_duration);
    stats.refresh_speed(true, tuning.power_speed_multiplier);
    *skin = Skin::Powered;
}

/// Expire the power state once its timer runs out.
///
/// Expiry is suppressed for the rest of the session once the boss fight
/// has started.
pub fn tick_power_expiry(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut player_query: Query<(&mut PowerUp, &mut PlayerStats, &mut Skin), With<Player>>,
    mut music: EventWriter<MusicEvent>,
) {
    let Ok((mut power, mut stats, mut skin)) = player_query.get_single_mut() else {
        return;
    };

    if !power.tick_expiry(time.delta()) {
        return;
    }

    if stats.boss_active {
        power.expiry = None;
        debug!("Power expiry suppressed during boss fight");
        return;
    }

    power.deactivate();
    stats.refresh_speed(false, config.player.power_speed_multiplier);
    *skin = Skin::Normal;
    music.send(MusicEvent(MusicCue::Normal));
    info!("Power-up expired");
}

/// Pull falling food towards the player while empowered.
pub fn apply_magnet(
    time: Res<Time>,
    config: Res<GameConfig>,
    player_query: Query<(&Transform, &PlayerStats, &PowerUp), With<Player>>,
    mut food_query: Query<(&Category, &mut Transform), Without<Player>>,
) {
    let Ok((player_transform, stats, power)) = player_query.get_single() else {
        return;
    };
    if !stats.alive || !empowered(stats, power) {
        return;
    }

    let target = player_transform.translation.truncate();
    let max_step = config.player.magnet_speed * time.delta_secs();

    for (category, mut transform) in food_query.iter_mut() {
        if !category.is_food() {
            continue;
        }
        let next = transform.translation.truncate().move_towards(target, max_step);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

/// Fire a projectile in the facing direction while empowered.
pub fn fire_projectile(
    mut commands: Commands,
    input: Res<PlayerInput>,
    config: Res<GameConfig>,
    player_query: Query<(&Transform, &Facing, &PlayerStats, &PowerUp), With<Player>>,
    mut sounds: EventWriter<SoundEvent>,
) {
    if !input.fire {
        return;
    }
    let Ok((transform, facing, stats, power)) = player_query.get_single() else {
        return;
    };
    if !stats.alive || !empowered(stats, power) {
        return;
    }

    commands.spawn(kinematic(
        Category::PlayerProjectile,
        transform.translation.truncate(),
        Mover::new(facing.direction(), config.player.projectile_speed),
        PROJECTILE_RADIUS,
    ));
    sounds.send(SoundEvent(SoundCue::Shoot));
}
