//! Enemy and food spawning systems.

use bevy::prelude::*;

use super::schedule::{roll_pickup, SpawnRng, SpawnSchedule};
use crate::core::{GameConfig, GameState, ScreenBounds, SessionEntity};
use crate::movement::{Category, Mover};
use crate::physics::sensor_body;
use crate::player::{Player, PowerUp};
use crate::progression::EnemyRoster;

/// Everything a spawned kinematic entity needs: its category, motion,
/// placement, sensor collider, and session ownership.
pub fn kinematic(category: Category, position: Vec2, mover: Mover, radius: f32) -> impl Bundle {
    (
        category,
        mover,
        Transform::from_translation(position.extend(0.0)),
        Visibility::default(),
        sensor_body(radius),
        SessionEntity,
    )
}

/// Drop a random enemy from the active roster on the enemy timer.
///
/// Nothing spawns once the boss phase has begun.
pub fn spawn_enemies(
    mut commands: Commands,
    time: Res<Time>,
    state: Res<State<GameState>>,
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    roster: Res<EnemyRoster>,
    mut schedule: ResMut<SpawnSchedule>,
    mut rng: ResMut<SpawnRng>,
) {
    if *state.get() != GameState::Playing {
        return;
    }
    if !schedule.tick_enemy(time.delta()) {
        return;
    }

    let Some(variant) = roster.pick(&mut rng.0) else {
        warn!("Enemy roster is empty, skipping spawn");
        return;
    };

    let tuning = &config.spawning;
    let x = rng.spawn_x(bounds.half_width);
    commands.spawn((
        kinematic(
            Category::Enemy,
            Vec2::new(x, tuning.spawn_height),
            Mover::falling(tuning.enemy_speed),
            tuning.radius,
        ),
        variant,
    ));

    debug!("Spawned {:?} enemy at x = {:.2}", variant, x);
}

/// Drop a food or power pickup on the food timer.
pub fn spawn_food(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    player_query: Query<&PowerUp, With<Player>>,
    mut schedule: ResMut<SpawnSchedule>,
    mut rng: ResMut<SpawnRng>,
) {
    if !schedule.tick_food(time.delta()) {
        return;
    }

    let powered_up = player_query.get_single().is_ok_and(|power| power.active);
    let tuning = &config.spawning;
    let category = roll_pickup(rng.roll(), powered_up, tuning);
    let x = rng.spawn_x(bounds.half_width);

    commands.spawn(kinematic(
        category,
        Vec2::new(x, tuning.spawn_height),
        Mover::falling(tuning.food_speed),
        tuning.radius,
    ));
}

/// Fresh spawn timers for a new session.
///
/// `SpawnRng` is left alone so a seeded stream carries across restarts.
pub fn reset_spawning(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(SpawnSchedule::from_tuning(&config.spawning));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CorePlugin;
    use crate::progression::{EnemyVariant, ProgressionPlugin};
    use crate::spawning::SpawningPlugin;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;
    use rand::Rng;
    use std::time::Duration;

    fn spawning_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            StatesPlugin,
            CorePlugin,
            ProgressionPlugin,
            SpawningPlugin,
        ));
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
        app.insert_resource(SpawnRng::seeded(7));
        app.update();
        app
    }

    fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, F>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn enemies_spawn_from_the_active_roster() {
        let mut app = spawning_test_app();
        for _ in 0..6 {
            app.update();
        }

        let mut query = app.world_mut().query::<(&Category, &EnemyVariant, &Transform)>();
        let spawned: Vec<_> = query.iter(app.world()).collect();
        assert!(!spawned.is_empty());
        for (category, variant, transform) in spawned {
            assert_eq!(*category, Category::Enemy);
            assert_eq!(*variant, EnemyVariant::Grunt);
            assert_eq!(transform.translation.y, 6.0);
        }
    }

    #[test]
    fn food_spawns_without_a_player() {
        let mut app = spawning_test_app();
        for _ in 0..6 {
            app.update();
        }
        assert!(count::<(With<Category>, Without<EnemyVariant>)>(&mut app) > 0);
    }

    #[test]
    fn no_enemies_spawn_during_boss_phase() {
        let mut app = spawning_test_app();
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::BossPhase);
        app.update();
        for _ in 0..8 {
            app.update();
        }
        assert_eq!(count::<With<EnemyVariant>>(&mut app), 0);
    }

    #[test]
    fn reset_rearms_timers_and_keeps_the_random_stream() {
        let mut app = spawning_test_app();
        app.update();
        app.world_mut().resource_mut::<SpawnSchedule>().cancel_enemies();
        let mut expected = app.world().resource::<SpawnRng>().0.clone();

        app.world_mut().run_system_once(reset_spawning).ok();

        let schedule = app.world().resource::<SpawnSchedule>();
        let enemy = schedule.enemy.as_ref().unwrap();
        assert_eq!(enemy.elapsed(), Duration::ZERO);
        assert_eq!(enemy.duration(), Duration::from_millis(500));

        let mut rng = app.world_mut().resource_mut::<SpawnRng>();
        assert_eq!(rng.0.gen::<u64>(), expected.gen::<u64>());
    }
}
