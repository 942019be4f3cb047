//! Food Rush - a 2D arcade survival game in Bevy.
//!
//! Catch falling food, dodge falling enemies, grab a power-up to fight
//! back, and survive long enough to take down the boss.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, tuning data, input, tick ordering
//! - **Movement**: Kinematic entity record and out-of-bounds culling
//! - **Spawning**: Timed enemy and food drops
//! - **Progression**: Score, milestone unlocks, boss trigger
//! - **Player**: Movement, power-up, firing, collision response
//! - **Boss**: Patrol, volleys, hit points, win condition
//! - **Physics**: Sensor colliders and contact routing
//! - **Audio**: Sound effects and music switching
//! - **Rendering**: Camera and placeholder sprites
//! - **UI**: Score, boss health bar, end banners

pub mod audio;
pub mod boss;
pub mod core;
pub mod movement;
pub mod physics;
pub mod player;
pub mod progression;
pub mod rendering;
pub mod spawning;
pub mod ui;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Expects `RapierPhysicsPlugin` and `bevy_kira_audio::AudioPlugin` to be
/// added by the app.
pub struct FoodRushPlugin;

impl Plugin for FoodRushPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Gameplay
            .add_plugins((
                movement::MovementPlugin,
                spawning::SpawningPlugin,
                progression::ProgressionPlugin,
                player::PlayerPlugin,
                boss::BossPlugin,
                physics::ContactRoutingPlugin,
            ))

            // Presentation
            .add_plugins((
                audio::GameAudioPlugin,
                rendering::RenderingPlugin,
                ui::UiPlugin,
            ));
    }
}
