//! Boss components - hit points, patrol state, and the fire timer.

use bevy::prelude::*;

use crate::core::BossTuning;

/// The scripted end-of-run adversary.
///
/// Tagged `Category::Enemy` like any other hazard; this marker is what
/// keeps it from being destroyed by contact or by bounds culling.
#[derive(Component, Debug, Clone)]
pub struct Boss {
    pub hp: f32,
    pub max_hp: f32,
    pub moving_right: bool,
    /// One-shot; rearmed with the fire interval after each volley
    pub fire: Timer,
    pub defeated: bool,
}

impl Boss {
    pub fn from_tuning(tuning: &BossTuning) -> Self {
        Self {
            hp: tuning.max_hp,
            max_hp: tuning.max_hp,
            moving_right: true,
            fire: Timer::from_seconds(tuning.first_fire, TimerMode::Once),
            defeated: false,
        }
    }

    /// Apply one accepted hit. Returns true on the hit that defeats the boss.
    pub fn take_hit(&mut self, damage: f32) -> bool {
        if self.defeated {
            return false;
        }
        self.hp -= damage;
        if self.hp <= 0.0 {
            self.defeated = true;
        }
        self.defeated
    }

    /// Health as a fraction of the maximum, for the health bar.
    pub fn health_fraction(&self) -> f32 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }

    pub fn patrol_direction(&self) -> Vec2 {
        if self.moving_right {
            Vec2::X
        } else {
            Vec2::NEG_X
        }
    }

    /// Velocity for this tick: bounce between `±limit` horizontally and keep
    /// descending until the hover height is reached.
    pub fn steer(&mut self, position: Vec2, limit: f32, tuning: &BossTuning) -> Vec2 {
        if position.x > limit {
            self.moving_right = false;
        } else if position.x < -limit {
            self.moving_right = true;
        }

        let mut velocity = self.patrol_direction() * tuning.patrol_speed;
        if position.y > tuning.hover_height {
            velocity.y = -tuning.descent_speed;
        }
        velocity
    }
}

/// Marker for projectiles fired by the boss.
#[derive(Component, Debug, Default)]
pub struct Fireball;
