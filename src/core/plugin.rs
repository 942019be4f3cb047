//! Core plugin that sets up game states, events, and the tick ordering.

use bevy::prelude::*;

use super::bounds::ScreenBounds;
use super::config::GameConfig;
use super::events::*;
use super::input::{read_keyboard_input, PlayerInput};
use super::states::*;

/// Per-frame ordering of gameplay systems.
///
/// Input and movement resolve before collisions, and collisions resolve
/// before out-of-bounds cleanup, so an entity destroyed this tick is never
/// queried again.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    Movement,
    Spawn,
    /// Raw physics contacts are routed into domain contact events
    Contacts,
    Collision,
    Progression,
    Cleanup,
}

/// Ordering of the systems that build a fresh session on entering `Playing`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionSet {
    /// Despawn everything left from the previous session
    Cleanup,
    /// Reset per-session resources
    Reset,
    /// Spawn the player and other starting entities
    Populate,
}

/// Marker for every entity that belongs to a single session.
#[derive(Component, Debug, Default)]
pub struct SessionEntity;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - The session state machine (Playing, BossPhase, Lost, Won)
/// - Global events (points, unlocks, boss, outcomes, contacts, sounds)
/// - Input sampling and the restart handler
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game state
            .init_state::<GameState>()

            // Shared resources; main inserts a loaded GameConfig first
            .init_resource::<GameConfig>()
            .init_resource::<PlayerInput>()
            .init_resource::<ScreenBounds>()

            // Register global events
            .add_event::<PointsAwarded>()
            .add_event::<UnlockEnemyEvent>()
            .add_event::<BossBattleEvent>()
            .add_event::<PlayerDiedEvent>()
            .add_event::<BossDefeatedEvent>()
            .add_event::<PlayerContact>()
            .add_event::<BossContact>()
            .add_event::<SoundEvent>()
            .add_event::<MusicEvent>()

            // Tick ordering, only while the session is live
            .configure_sets(
                Update,
                (
                    TickSet::Movement,
                    TickSet::Spawn,
                    TickSet::Contacts,
                    TickSet::Collision,
                    TickSet::Progression,
                    TickSet::Cleanup,
                )
                    .chain()
                    .run_if(gameplay_active),
            )
            .configure_sets(
                OnEnter(GameState::Playing),
                (SessionSet::Cleanup, SessionSet::Reset, SessionSet::Populate).chain(),
            )

            // Input is sampled every frame, before anything reads it
            .add_systems(PreUpdate, read_keyboard_input)

            .add_systems(
                OnEnter(GameState::Playing),
                cleanup_session.in_set(SessionSet::Cleanup),
            )
            .add_systems(Update, advance_game_state.after(TickSet::Cleanup))
            .add_systems(Update, handle_restart.run_if(session_ended));
    }
}

/// Apply outcome events to the session state.
fn advance_game_state(
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut boss_events: EventReader<BossBattleEvent>,
    mut died_events: EventReader<PlayerDiedEvent>,
    mut defeated_events: EventReader<BossDefeatedEvent>,
) {
    let current = *state.get();
    let mut target = current;

    let triggers = boss_events
        .read()
        .map(|_| Transition::BossTriggered)
        .chain(died_events.read().map(|_| Transition::PlayerDied))
        .chain(defeated_events.read().map(|_| Transition::BossDefeated))
        .collect::<Vec<_>>();

    for transition in triggers {
        if let Some(next) = target.next(transition) {
            target = next;
        }
    }

    if target != current {
        info!("Game state: {:?} -> {:?}", current, target);
        next_state.set(target);
    }
}

/// Start a fresh session when restart is pressed after the game ended.
fn handle_restart(
    input: Res<PlayerInput>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !input.restart {
        return;
    }
    if let Some(next) = state.get().next(Transition::Restart) {
        info!("Restarting session");
        next_state.set(next);
    }
}

/// Despawn all entities from the previous session.
fn cleanup_session(mut commands: Commands, query: Query<Entity, With<SessionEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn core_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, CorePlugin));
        app.update();
        app
    }

    fn current_state(app: &App) -> GameState {
        *app.world().resource::<State<GameState>>().get()
    }

    #[test]
    fn session_starts_playing() {
        let app = core_test_app();
        assert_eq!(current_state(&app), GameState::Playing);
    }

    #[test]
    fn boss_event_moves_to_boss_phase() {
        let mut app = core_test_app();
        app.world_mut().send_event(BossBattleEvent);
        app.update();
        app.update();
        assert_eq!(current_state(&app), GameState::BossPhase);
    }

    #[test]
    fn death_then_restart_returns_to_playing() {
        let mut app = core_test_app();
        let leftover = app.world_mut().spawn(SessionEntity).id();

        app.world_mut().send_event(PlayerDiedEvent);
        app.update();
        app.update();
        assert_eq!(current_state(&app), GameState::Lost);

        app.world_mut().resource_mut::<PlayerInput>().restart = true;
        app.update();
        app.world_mut().resource_mut::<PlayerInput>().restart = false;
        app.update();
        assert_eq!(current_state(&app), GameState::Playing);
        assert!(app.world().get::<SessionEntity>(leftover).is_none());
    }

    #[test]
    fn defeat_before_boss_phase_is_ignored() {
        let mut app = core_test_app();
        app.world_mut().send_event(BossDefeatedEvent);
        app.update();
        app.update();
        assert_eq!(current_state(&app), GameState::Playing);
    }
}
