//! Player-related components.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::PlayerTuning;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Which way the player is looking; also the projectile direction.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by an input axis, or `None` when the axis is idle.
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn direction(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// Visual state requested from the presentation layer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    #[default]
    Normal,
    Powered,
}

/// Player's health, speed, and phase flags.
#[derive(Component, Debug, Clone)]
pub struct PlayerStats {
    pub base_speed: f32,
    pub speed: f32,
    /// Stored unclamped; death is decided by `is_dead`
    pub hp: f32,
    pub max_hp: f32,
    pub alive: bool,
    /// Set once the boss battle starts; keeps the power state on
    pub boss_active: bool,
}

impl PlayerStats {
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            base_speed: tuning.base_speed,
            speed: tuning.base_speed,
            hp: tuning.max_hp,
            max_hp: tuning.max_hp,
            alive: true,
            boss_active: false,
        }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.hp -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Base speed, or boosted while powered up or fighting the boss.
    pub fn refresh_speed(&mut self, powered: bool, multiplier: f32) {
        self.speed = if powered || self.boss_active {
            self.base_speed * multiplier
        } else {
            self.base_speed
        };
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::from_tuning(&PlayerTuning::default())
    }
}

/// Temporary power state with its pending expiry.
#[derive(Component, Debug, Clone, Default)]
pub struct PowerUp {
    pub active: bool,
    /// One-shot; `None` when nothing is pending
    pub expiry: Option<Timer>,
}

impl PowerUp {
    /// Turn the power on and restart the expiry.
    ///
    /// A second pickup replaces the pending expiry rather than adding one.
    pub fn activate(&mut self, duration: f32) {
        self.active = true;
        self.expiry = Some(Timer::from_seconds(duration, TimerMode::Once));
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.expiry = None;
    }

    /// True on the frame the pending expiry runs out.
    pub fn tick_expiry(&mut self, delta: Duration) -> bool {
        self.expiry
            .as_mut()
            .is_some_and(|timer| timer.tick(delta).just_finished())
    }
}

/// Magnet and shooting are available while powered up or during the boss fight.
pub fn empowered(stats: &PlayerStats, power: &PowerUp) -> bool {
    power.active || stats.boss_active
}
