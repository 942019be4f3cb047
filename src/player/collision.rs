//! Player collision response and death.

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::*;
use super::power::activate_power;
use crate::boss::Boss;
use crate::core::{
    GameConfig, MusicCue, MusicEvent, PlayerContact, PlayerDiedEvent, PointsAwarded,
    SoundCue, SoundEvent,
};
use crate::movement::Category;

/// Resolve every overlap the player started this tick.
///
/// Pickups are consumed; enemies kill an unpowered player outright and
/// otherwise cost hit points. The boss is never destroyed by contact.
#[allow(clippy::too_many_arguments)]
pub fn resolve_player_contacts(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut contacts: EventReader<PlayerContact>,
    mut player_query: Query<(&mut PlayerStats, &mut PowerUp, &mut Skin), With<Player>>,
    other_query: Query<(&Category, Has<Boss>)>,
    mut points: EventWriter<PointsAwarded>,
    mut sounds: EventWriter<SoundEvent>,
    mut music: EventWriter<MusicEvent>,
    mut deaths: EventWriter<PlayerDiedEvent>,
) {
    let Ok((mut stats, mut power, mut skin)) = player_query.get_single_mut() else {
        contacts.clear();
        return;
    };

    // Track entities consumed this tick; the despawn is deferred
    let mut consumed = HashSet::new();

    for contact in contacts.read() {
        if !stats.alive {
            break;
        }
        if consumed.contains(&contact.other) {
            continue;
        }
        let Ok((category, is_boss)) = other_query.get(contact.other) else {
            continue;
        };

        match *category {
            Category::Power => {
                activate_power(&mut stats, &mut power, &mut skin, &config.player);
                sounds.send(SoundEvent(SoundCue::Power));
                sounds.send(SoundEvent(SoundCue::Eat));
                music.send(MusicEvent(MusicCue::Power));
                consume(&mut commands, &mut consumed, contact.other);
                info!("Power-up activated");
            }
            Category::Food(kind) => {
                points.send(PointsAwarded {
                    amount: kind.points(),
                });
                sounds.send(SoundEvent(SoundCue::Eat));
                consume(&mut commands, &mut consumed, contact.other);
            }
            Category::Enemy => {
                if !empowered(&stats, &power) {
                    die(&mut stats, &mut deaths);
                    continue;
                }

                stats.take_damage(config.player.hit_damage);
                sounds.send(SoundEvent(SoundCue::Hit));
                if !is_boss {
                    consume(&mut commands, &mut consumed, contact.other);
                }
                if stats.is_dead() {
                    die(&mut stats, &mut deaths);
                }
            }
            Category::PlayerProjectile => {}
        }
    }
}

/// Remember an entity as consumed and schedule its despawn.
fn consume(commands: &mut Commands, consumed: &mut HashSet<Entity>, entity: Entity) {
    if consumed.insert(entity) {
        commands.entity(entity).despawn_recursive();
    }
}

/// Terminal: the player stops and the game-over flow begins.
fn die(stats: &mut PlayerStats, deaths: &mut EventWriter<PlayerDiedEvent>) {
    if !stats.alive {
        return;
    }
    stats.alive = false;
    deaths.send(PlayerDiedEvent);
    info!("Player died with {} hp", stats.hp);
}
