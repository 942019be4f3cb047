//! Boss systems - spawning, patrol, fire volleys, and hit resolution.

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::{Boss, Fireball};
use crate::core::{BossContact, BossDefeatedEvent, BossTuning, GameConfig, ScreenBounds};
use crate::movement::{Category, Mover};
use crate::spawning::kinematic;

/// Radius of a boss fireball's sensor.
const FIREBALL_RADIUS: f32 = 0.35;

/// Spawn the boss at its entry point, exempt from bounds culling.
pub fn spawn_boss(commands: &mut Commands, tuning: &BossTuning) -> Entity {
    let (x, y) = tuning.spawn_position;
    let boss = commands
        .spawn((
            kinematic(
                Category::Enemy,
                Vec2::new(x, y),
                Mover::falling(tuning.descent_speed).exempt(),
                tuning.radius,
            ),
            Boss::from_tuning(tuning),
            Name::new("Boss"),
        ))
        .id();

    info!("Boss spawned at ({}, {})", x, y);
    boss
}

/// Point the boss's mover along its descent and patrol path.
pub fn steer_boss(
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    mut boss_query: Query<(&mut Boss, &mut Mover, &Transform)>,
) {
    let limit = bounds.half_width - config.boss.edge_margin;

    for (mut boss, mut mover, transform) in boss_query.iter_mut() {
        let velocity = boss.steer(transform.translation.truncate(), limit, &config.boss);
        mover.set_velocity(velocity);
    }
}

/// Fire a volley below the boss whenever its fire timer runs out.
pub fn boss_fire(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut boss_query: Query<(&mut Boss, &Transform)>,
) {
    let tuning = &config.boss;

    for (mut boss, transform) in boss_query.iter_mut() {
        if boss.defeated || !boss.fire.tick(time.delta()).just_finished() {
            continue;
        }
        boss.fire = Timer::from_seconds(tuning.fire_interval, TimerMode::Once);

        let muzzle = transform.translation.truncate() - Vec2::new(0.0, tuning.muzzle_drop);
        commands.spawn((
            kinematic(
                Category::Enemy,
                muzzle,
                Mover::new(boss.patrol_direction(), tuning.projectile_speed),
                FIREBALL_RADIUS,
            ),
            Fireball,
        ));
    }
}

/// Apply player projectile hits to the boss.
///
/// Anything other than a player projectile is ignored. The defeating hit
/// despawns the boss and sends `BossDefeatedEvent` exactly once.
pub fn resolve_boss_hits(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut contacts: EventReader<BossContact>,
    mut boss_query: Query<&mut Boss>,
    category_query: Query<&Category>,
    mut defeated: EventWriter<BossDefeatedEvent>,
) {
    let mut spent = HashSet::new();

    for contact in contacts.read() {
        if spent.contains(&contact.other) {
            continue;
        }
        let Ok(Category::PlayerProjectile) = category_query.get(contact.other) else {
            continue;
        };
        let Ok(mut boss) = boss_query.get_mut(contact.boss) else {
            continue;
        };
        if boss.defeated {
            continue;
        }

        spent.insert(contact.other);
        commands.entity(contact.other).despawn_recursive();

        let killed = boss.take_hit(config.boss.hit_damage);
        debug!("Boss hit, {} hp left", boss.hp);

        if killed {
            commands.entity(contact.boss).despawn_recursive();
            defeated.send(BossDefeatedEvent);
            info!("Boss defeated");
        }
    }
}
