//! In-game HUD - score readout and the boss health bar.

use bevy::prelude::*;

use crate::boss::Boss;
use crate::core::{BossDefeatedEvent, GameState};
use crate::progression::Progression;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the score text.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the boss health bar container, hidden until the boss arrives.
#[derive(Component)]
pub struct BossBar;

/// Marker for boss health bar fill.
#[derive(Component)]
pub struct BossBarFill;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(OnEnter(GameState::Playing), reset_boss_bar)
        .add_systems(
            Update,
            (
                update_score_text,
                show_boss_bar,
                update_boss_bar,
                empty_boss_bar_on_defeat,
            )
                .chain(),
        );
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Score (top-left) and boss bar (top-centre)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_label(0)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.95)),
                ScoreText,
            ));

            spawn_boss_bar(parent);
        });
}

fn spawn_boss_bar(parent: &mut ChildBuilder) {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                align_self: AlignSelf::Center,
                margin: UiRect::top(Val::Px(10.0)),
                ..default()
            },
            Visibility::Hidden,
            BossBar,
        ))
        .with_children(|bar_parent| {
            bar_parent.spawn((
                Text::new("Boss"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(300.0),
                        height: Val::Px(16.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.8, 0.2, 0.2)),
                        BossBarFill,
                    ));
                });
        });
}

/// Mirror the session score whenever it changes.
fn update_score_text(
    progression: Res<Progression>,
    mut text_query: Query<&mut Text, With<ScoreText>>,
) {
    if !progression.is_changed() {
        return;
    }
    for mut text in text_query.iter_mut() {
        text.0 = score_label(progression.score());
    }
}

fn set_fill(fill_query: &mut Query<&mut Node, With<BossBarFill>>, fraction: f32) {
    for mut node in fill_query.iter_mut() {
        node.width = Val::Percent(fraction * 100.0);
    }
}

/// Hide the bar and refill it for a new session.
fn reset_boss_bar(
    mut bar_query: Query<&mut Visibility, With<BossBar>>,
    mut fill_query: Query<&mut Node, With<BossBarFill>>,
) {
    for mut visibility in bar_query.iter_mut() {
        *visibility = Visibility::Hidden;
    }
    set_fill(&mut fill_query, 1.0);
}

fn show_boss_bar(
    boss_query: Query<&Boss, Added<Boss>>,
    mut bar_query: Query<&mut Visibility, With<BossBar>>,
) {
    if boss_query.is_empty() {
        return;
    }
    for mut visibility in bar_query.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}

/// Track the boss's hit points on the bar.
fn update_boss_bar(
    boss_query: Query<&Boss, Changed<Boss>>,
    mut fill_query: Query<&mut Node, With<BossBarFill>>,
) {
    let Ok(boss) = boss_query.get_single() else {
        return;
    };
    set_fill(&mut fill_query, boss.health_fraction());
}

/// The boss is despawned on its last hit, so the bar is emptied here.
fn empty_boss_bar_on_defeat(
    mut defeats: EventReader<BossDefeatedEvent>,
    mut fill_query: Query<&mut Node, With<BossBarFill>>,
) {
    if defeats.read().count() > 0 {
        set_fill(&mut fill_query, 0.0);
    }
}
