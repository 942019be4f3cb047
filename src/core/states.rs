//! Game state definitions that control the overall flow of a session.
//!
//! States determine which systems run at any given time. Gameplay systems
//! only run while the session is live (`Playing` or `BossPhase`), while the
//! restart handler only runs once the session has ended.

use bevy::prelude::*;

/// Coarse session states.
///
/// The flow is one-directional:
/// - Start in `Playing` with normal food and enemy spawning
/// - Move to `BossPhase` once the score crosses the boss threshold
/// - End in `Lost` when the player dies, or `Won` when the boss falls
///
/// `Lost` and `Won` are terminal; only a restart request starts a fresh
/// `Playing` session.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Normal spawn and collision loop
    #[default]
    Playing,
    /// Enemy spawning suspended, boss active
    BossPhase,
    /// Player has died
    Lost,
    /// Boss has been defeated
    Won,
}

/// Things that can move the session between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    BossTriggered,
    PlayerDied,
    BossDefeated,
    Restart,
}

impl GameState {
    /// True while gameplay systems should tick.
    pub fn is_live(self) -> bool {
        matches!(self, GameState::Playing | GameState::BossPhase)
    }

    /// True once the session is over (lost or won).
    pub fn is_ended(self) -> bool {
        matches!(self, GameState::Lost | GameState::Won)
    }

    /// Resolve the state that follows `transition`.
    ///
    /// Returns `None` when the transition does not apply in the current state.
    pub fn next(self, transition: Transition) -> Option<GameState> {
        match (self, transition) {
            (GameState::Playing, Transition::BossTriggered) => Some(GameState::BossPhase),
            (GameState::Playing | GameState::BossPhase, Transition::PlayerDied) => {
                Some(GameState::Lost)
            }
            (GameState::BossPhase, Transition::BossDefeated) => Some(GameState::Won),
            (GameState::Lost | GameState::Won, Transition::Restart) => Some(GameState::Playing),
            _ => None,
        }
    }
}

/// Run condition: the session is live.
pub fn gameplay_active(state: Option<Res<State<GameState>>>) -> bool {
    state.is_some_and(|s| s.get().is_live())
}

/// Run condition: the session has ended and is waiting for a restart.
pub fn session_ended(state: Option<Res<State<GameState>>>) -> bool {
    state.is_some_and(|s| s.get().is_ended())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boss_trigger_only_leaves_playing() {
        assert_eq!(
            GameState::Playing.next(Transition::BossTriggered),
            Some(GameState::BossPhase)
        );
        assert_eq!(GameState::BossPhase.next(Transition::BossTriggered), None);
        assert_eq!(GameState::Lost.next(Transition::BossTriggered), None);
    }

    #[test]
    fn death_ends_any_live_state() {
        assert_eq!(GameState::Playing.next(Transition::PlayerDied), Some(GameState::Lost));
        assert_eq!(GameState::BossPhase.next(Transition::PlayerDied), Some(GameState::Lost));
        assert_eq!(GameState::Won.next(Transition::PlayerDied), None);
    }

    #[test]
    fn win_requires_boss_phase() {
        assert_eq!(GameState::Playing.next(Transition::BossDefeated), None);
        assert_eq!(GameState::BossPhase.next(Transition::BossDefeated), Some(GameState::Won));
    }

    #[test]
    fn ended_states_are_terminal_except_for_restart() {
        for ended in [GameState::Lost, GameState::Won] {
            assert!(ended.is_ended());
            assert!(!ended.is_live());
            assert_eq!(ended.next(Transition::BossDefeated), None);
            assert_eq!(ended.next(Transition::Restart), Some(GameState::Playing));
        }
        assert_eq!(GameState::Playing.next(Transition::Restart), None);
    }
}
