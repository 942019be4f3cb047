//! Food Rush - Entry Point
//!
//! Controls:
//! - Left/Right or A/D: Move
//! - Space: Fire (while powered up or fighting the boss)
//! - R: Restart after the game ends

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use food_rush::core::GameConfig;

fn main() {
    App::new()
        // Bevy default plugins; Kira replaces the built-in audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Food Rush".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )
        .add_plugins(bevy_kira_audio::AudioPlugin)

        // Tuning data, loaded once logging is up and before any game plugin
        .insert_resource(GameConfig::load())

        // Physics, used for overlap detection only
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(food_rush::FoodRushPlugin)

        .run();
}
