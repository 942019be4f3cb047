//! UI plugin - HUD and the end-of-session banners.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app.add_systems(OnEnter(GameState::Lost), setup_end_banner)
            .add_systems(OnEnter(GameState::Won), setup_end_banner)
            .add_systems(OnExit(GameState::Lost), cleanup_end_banner)
            .add_systems(OnExit(GameState::Won), cleanup_end_banner);
    }
}

/// Marker for end banner UI entities.
#[derive(Component)]
pub struct EndBannerUi;

/// Banner shown once a session has ended.
pub fn banner_text(state: GameState) -> Option<&'static str> {
    match state {
        GameState::Lost => Some("GAME OVER! Press R"),
        GameState::Won => Some("YOU WIN! Press R"),
        GameState::Playing | GameState::BossPhase => None,
    }
}

/// Set up the end banner for the state just entered.
fn setup_end_banner(mut commands: Commands, state: Res<State<GameState>>) {
    let Some(message) = banner_text(*state.get()) else {
        return;
    };

    // Semi-transparent overlay
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            EndBannerUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(message),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.3)),
            ));
        });
}

fn cleanup_end_banner(mut commands: Commands, query: Query<Entity, With<EndBannerUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
