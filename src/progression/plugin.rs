//! Progression plugin - score, milestone unlocks, and the boss trigger.

use bevy::prelude::*;

use super::roster::EnemyRoster;
use super::score::Progression;
use crate::core::{
    BossBattleEvent, GameConfig, GameState, PointsAwarded, SessionSet, TickSet, UnlockEnemyEvent,
};

/// Progression plugin - turns awarded points into unlocks and the boss phase.
pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Progression>()
            .init_resource::<EnemyRoster>()
            .add_systems(
                OnEnter(GameState::Playing),
                reset_progression.in_set(SessionSet::Reset),
            )
            .add_systems(Update, apply_points.in_set(TickSet::Progression));
    }
}

/// Start the session with a zero score and the configured roster.
fn reset_progression(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(Progression::from_tuning(&config.progression));
    commands.insert_resource(EnemyRoster::from_tuning(&config.progression));
}

/// Add awarded points to the score and request unlocks or the boss fight.
pub fn apply_points(
    mut points: EventReader<PointsAwarded>,
    mut progression: ResMut<Progression>,
    mut unlocks: EventWriter<UnlockEnemyEvent>,
    mut boss: EventWriter<BossBattleEvent>,
) {
    for event in points.read() {
        let step = progression.add_points(event.amount);

        if step.unlock {
            info!(
                "Score {} reached milestone {}",
                progression.score(),
                progression.milestone()
            );
            unlocks.send(UnlockEnemyEvent);
        }
        if step.start_boss {
            info!("Score {} reached the boss threshold", progression.score());
            boss.send(BossBattleEvent);
        }
    }
}
