//! Spawn timers, randomness, and the food roll.

use std::time::Duration;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::SpawnTuning;
use crate::movement::{Category, FoodKind};

/// Random source for spawn placement and selection.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Uniform x within the visible half-width.
    pub fn spawn_x(&mut self, half_width: f32) -> f32 {
        if half_width > 0.0 {
            self.0.gen_range(-half_width..half_width)
        } else {
            0.0
        }
    }

    /// Uniform roll in [0, 100).
    pub fn roll(&mut self) -> u32 {
        self.0.gen_range(0..100)
    }
}

/// The two independent spawn timers. `None` means cancelled.
///
/// Each repeating timer starts at its first delay and switches to its
/// interval after the first firing.
#[derive(Resource, Debug, Clone)]
pub struct SpawnSchedule {
    pub enemy: Option<Timer>,
    pub food: Option<Timer>,
    enemy_interval: Duration,
    food_interval: Duration,
}

impl Default for SpawnSchedule {
    fn default() -> Self {
        Self::from_tuning(&SpawnTuning::default())
    }
}

impl SpawnSchedule {
    pub fn from_tuning(tuning: &SpawnTuning) -> Self {
        Self {
            enemy: Some(Timer::from_seconds(tuning.enemy_first, TimerMode::Repeating)),
            food: Some(Timer::from_seconds(tuning.food_first, TimerMode::Repeating)),
            enemy_interval: Duration::from_secs_f32(tuning.enemy_interval),
            food_interval: Duration::from_secs_f32(tuning.food_interval),
        }
    }

    /// True on the frames an enemy is due.
    pub fn tick_enemy(&mut self, delta: Duration) -> bool {
        tick_spawn_timer(&mut self.enemy, delta, self.enemy_interval)
    }

    /// True on the frames a pickup is due.
    pub fn tick_food(&mut self, delta: Duration) -> bool {
        tick_spawn_timer(&mut self.food, delta, self.food_interval)
    }

    /// Stop enemy spawning for the rest of the session.
    pub fn cancel_enemies(&mut self) {
        self.enemy = None;
    }
}

fn tick_spawn_timer(timer: &mut Option<Timer>, delta: Duration, interval: Duration) -> bool {
    let Some(timer) = timer else {
        return false;
    };
    if !timer.tick(delta).just_finished() {
        return false;
    }
    timer.set_duration(interval);
    true
}

/// Map a roll in [0, 100) to the pickup it spawns.
///
/// Power pickups are only offered while the player is not powered up; a
/// power roll otherwise falls through to the food bands.
pub fn roll_pickup(roll: u32, powered_up: bool, tuning: &SpawnTuning) -> Category {
    if roll < tuning.power_below && !powered_up {
        Category::Power
    } else if roll < tuning.banana_below {
        Category::Food(FoodKind::Banana)
    } else if roll < tuning.pear_below {
        Category::Food(FoodKind::Pear)
    } else if roll < tuning.pringle_below {
        Category::Food(FoodKind::Pringle)
    } else {
        Category::Food(FoodKind::Plain)
    }
}
