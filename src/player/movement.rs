//! Player spawning, horizontal movement, and screen wraparound.

use bevy::prelude::*;

use super::components::*;
use crate::core::{GameConfig, PlayerInput, PlayerTuning, ScreenBounds, SessionEntity};
use crate::physics::sensor_body;

/// Spawn the player at the centre of its lane, level with the boss volleys.
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    let tuning = &config.player;

    commands.spawn((
        Player,
        Facing::default(),
        Skin::default(),
        PlayerStats::from_tuning(tuning),
        PowerUp::default(),
        Transform::from_xyz(0.0, tuning.start_y, 0.0),
        sensor_body(tuning.radius),
        SessionEntity,
    ));

    info!("Spawned player at (0, {})", tuning.start_y);
}

/// Wrap a horizontal position around the visible screen.
///
/// Leaving past `half_width + margin` on one side re-enters just outside
/// the opposite edge.
pub fn wrap_x(x: f32, half_width: f32, tuning: &PlayerTuning) -> f32 {
    if x > half_width + tuning.wrap_margin {
        -half_width - tuning.wrap_reentry
    } else if x < -half_width - tuning.wrap_margin {
        half_width + tuning.wrap_reentry
    } else {
        x
    }
}

/// Move the player along the input axis and wrap at the screen edges.
pub fn player_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    bounds: Res<ScreenBounds>,
    config: Res<GameConfig>,
    mut player_query: Query<(&mut Transform, &mut Facing, &PlayerStats), With<Player>>,
) {
    let Ok((mut transform, mut facing, stats)) = player_query.get_single_mut() else {
        return;
    };
    if !stats.alive {
        return;
    }

    let axis = input.axis.clamp(-1.0, 1.0);
    transform.translation.x += axis * stats.speed * time.delta_secs();

    if let Some(new_facing) = Facing::from_axis(axis) {
        if *facing != new_facing {
            *facing = new_facing;
        }
    }

    transform.translation.x = wrap_x(transform.translation.x, bounds.half_width, &config.player);
}
