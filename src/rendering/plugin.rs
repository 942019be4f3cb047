//! Rendering plugin - 2D camera, screen bounds, and placeholder sprites.

use bevy::prelude::*;
use bevy::render::camera::{CameraUpdateSystem, ScalingMode};

use super::style::{flip_for, player_color, style_for};
use crate::boss::{Boss, Fireball};
use crate::core::{GameConfig, ScreenBounds};
use crate::movement::{Category, Mover};
use crate::player::{Facing, Player, Skin};

/// Size of the player quad in world units.
const PLAYER_SIZE: f32 = 1.0;

/// Marker for the gameplay camera.
#[derive(Component)]
pub struct GameCamera;

/// Rendering plugin - draws every gameplay entity as a tinted quad.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            PostUpdate,
            (
                track_screen_bounds.after(CameraUpdateSystem),
                attach_entity_sprites,
                attach_player_sprite,
                sync_player_sprite,
            )
                .chain(),
        );
    }
}

fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: config.world.view_height,
            },
            ..OrthographicProjection::default_2d()
        },
        GameCamera,
    ));
}

/// Keep `ScreenBounds` in step with the camera's visible area.
fn track_screen_bounds(
    camera_query: Query<&OrthographicProjection, (With<GameCamera>, Changed<OrthographicProjection>)>,
    mut bounds: ResMut<ScreenBounds>,
) {
    let Ok(projection) = camera_query.get_single() else {
        return;
    };

    let next = ScreenBounds::from_half_size(projection.area.half_size());
    if *bounds != next {
        debug!("Screen bounds now {:?}", next);
        *bounds = next;
    }
}

/// Give newly spawned movers a sprite facing their direction of travel.
fn attach_entity_sprites(
    mut commands: Commands,
    query: Query<(Entity, &Category, &Mover, Has<Boss>, Has<Fireball>), Added<Category>>,
) {
    for (entity, category, mover, is_boss, is_fireball) in query.iter() {
        let flip_x = flip_for(mover.direction, is_fireball);
        let sprite = style_for(*category, is_boss, is_fireball).sprite(flip_x);
        commands.entity(entity).insert(sprite);
    }
}

fn attach_player_sprite(mut commands: Commands, query: Query<(Entity, &Skin), Added<Player>>) {
    for (entity, skin) in query.iter() {
        commands.entity(entity).insert((
            Sprite {
                color: player_color(*skin),
                custom_size: Some(Vec2::splat(PLAYER_SIZE)),
                ..default()
            },
            Visibility::default(),
        ));
    }
}

fn sync_player_sprite(
    mut query: Query<(&Skin, &Facing, &mut Sprite), (With<Player>, Or<(Changed<Skin>, Changed<Facing>)>)>,
) {
    for (skin, facing, mut sprite) in query.iter_mut() {
        sprite.color = player_color(*skin);
        sprite.flip_x = *facing == Facing::Left;
    }
}
