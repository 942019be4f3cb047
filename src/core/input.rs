//! Polled player input.
//!
//! Gameplay systems read `PlayerInput` rather than the keyboard, so the
//! controls can be driven by anything that fills the resource each frame.

use bevy::prelude::*;

/// Input sampled once per frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Horizontal axis in [-1, 1]
    pub axis: f32,
    /// Fire was pressed this frame
    pub fire: bool,
    /// Restart was pressed this frame
    pub restart: bool,
}

/// Sample the keyboard into `PlayerInput`.
///
/// Controls:
/// - Left/Right or A/D: move
/// - Space: fire (while powered up)
/// - R: restart after the session ends
pub fn read_keyboard_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<PlayerInput>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let mut axis = 0.0;
    if keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        axis -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        axis += 1.0;
    }

    *input = PlayerInput {
        axis,
        fire: keyboard.just_pressed(KeyCode::Space),
        restart: keyboard.just_pressed(KeyCode::KeyR),
    };
}
