//! Progression responses on the player side: enemy unlocks and the boss battle.

use bevy::prelude::*;

use super::components::*;
use crate::boss::spawn_boss;
use crate::core::{BossBattleEvent, GameConfig, SoundCue, SoundEvent, UnlockEnemyEvent};
use crate::progression::EnemyRoster;
use crate::spawning::SpawnSchedule;

/// Move the next queued variant into the active roster for each unlock.
pub fn unlock_next_enemy(mut unlocks: EventReader<UnlockEnemyEvent>, mut roster: ResMut<EnemyRoster>) {
    for _ in unlocks.read() {
        match roster.unlock_next() {
            Some(variant) => info!("Unlocked enemy {:?}", variant),
            None => debug!("Unlock requested with an empty queue"),
        }
    }
}

/// Begin the boss battle.
///
/// Idempotent: only the first request has any effect. Normal enemy spawning
/// stops for good and the player is forced into the powered state.
pub fn start_boss_battle(
    mut commands: Commands,
    mut requests: EventReader<BossBattleEvent>,
    config: Res<GameConfig>,
    mut schedule: ResMut<SpawnSchedule>,
    mut player_query: Query<(&mut PlayerStats, &mut Skin), With<Player>>,
    mut sounds: EventWriter<SoundEvent>,
) {
    if requests.read().count() == 0 {
        return;
    }
    let Ok((mut stats, mut skin)) = player_query.get_single_mut() else {
        return;
    };
    if stats.boss_active {
        return;
    }

    stats.boss_active = true;
    schedule.cancel_enemies();

    *skin = Skin::Powered;
    stats.refresh_speed(true, config.player.power_speed_multiplier);
    sounds.send(SoundEvent(SoundCue::Arrival));

    spawn_boss(&mut commands, &config.boss);
    info!("Boss battle started");
}
