//! Global events used for cross-system communication.
//!
//! Events keep the controllers decoupled. The player's collision handler
//! sends `PointsAwarded`, the progression system turns that into
//! `UnlockEnemyEvent` or `BossBattleEvent`, and the presentation plugins
//! listen for the sound and outcome events without the core ever waiting on
//! them.

use bevy::prelude::*;

/// Sent when the player eats food.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointsAwarded {
    pub amount: u32,
}

/// Sent when a score milestone releases the next queued enemy variant.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UnlockEnemyEvent;

/// Sent once when the score reaches the boss threshold.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct BossBattleEvent;

/// Sent when the player's hit points run out or an unpowered player is hit.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerDiedEvent;

/// Sent when the boss's hit points run out.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct BossDefeatedEvent;

/// An overlap between the player and another gameplay entity began.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerContact {
    pub other: Entity,
}

/// An overlap between the boss and another gameplay entity began.
#[derive(Event, Debug, Clone, Copy)]
pub struct BossContact {
    pub boss: Entity,
    pub other: Entity,
}

/// One-shot sound effects keyed by gameplay event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Hit,
    Eat,
    Power,
    Arrival,
    Shoot,
}

/// Fire-and-forget request to play a sound effect.
#[derive(Event, Debug, Clone, Copy)]
pub struct SoundEvent(pub SoundCue);

/// Background music requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCue {
    /// Loop the normal gameplay track
    Normal,
    /// Loop the power-up track
    Power,
    /// Silence all music
    Stop,
}

/// Fire-and-forget request to switch background music.
#[derive(Event, Debug, Clone, Copy)]
pub struct MusicEvent(pub MusicCue);
