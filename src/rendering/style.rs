//! Placeholder sprite styling per entity kind.

use bevy::prelude::*;

use crate::movement::{Category, FoodKind};
use crate::player::Skin;

/// Colour and size of an entity's sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteStyle {
    pub color: Color,
    pub size: Vec2,
}

impl SpriteStyle {
    const fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            size: Vec2::splat(size),
        }
    }

    pub fn sprite(self, flip_x: bool) -> Sprite {
        Sprite {
            color: self.color,
            custom_size: Some(self.size),
            flip_x,
            ..default()
        }
    }
}

pub const BOSS: SpriteStyle = SpriteStyle::new(Color::srgb(0.55, 0.1, 0.6), 2.8);
pub const FIREBALL: SpriteStyle = SpriteStyle::new(Color::srgb(1.0, 0.15, 0.1), 0.7);
pub const PLAYER_SHOT: SpriteStyle = SpriteStyle::new(Color::srgb(0.2, 0.9, 1.0), 0.7);
pub const ENEMY: SpriteStyle = SpriteStyle::new(Color::srgb(0.35, 0.35, 0.4), 0.8);
pub const POWER: SpriteStyle = SpriteStyle::new(Color::srgb(1.0, 0.85, 0.1), 0.8);

/// Style for a freshly spawned gameplay entity.
pub fn style_for(category: Category, is_boss: bool, is_fireball: bool) -> SpriteStyle {
    match category {
        Category::Enemy if is_boss => BOSS,
        Category::Enemy if is_fireball => FIREBALL,
        Category::Enemy => ENEMY,
        Category::PlayerProjectile => PLAYER_SHOT,
        Category::Power => POWER,
        Category::Food(kind) => {
            let color = match kind {
                FoodKind::Banana => Color::srgb(0.95, 0.9, 0.3),
                FoodKind::Pear => Color::srgb(0.6, 0.85, 0.3),
                FoodKind::Pringle => Color::srgb(0.9, 0.55, 0.2),
                FoodKind::Plain => Color::srgb(0.8, 0.7, 0.55),
            };
            SpriteStyle::new(color, 0.7)
        }
    }
}

/// Whether a mover's sprite is mirrored for its direction of travel.
///
/// Fireball art faces left, so it is mirrored when heading right; every
/// other sprite faces right and is mirrored when heading left.
pub fn flip_for(direction: Vec2, is_fireball: bool) -> bool {
    if is_fireball {
        direction.x > 0.0
    } else {
        direction.x < 0.0
    }
}

/// Player tint for each skin.
pub fn player_color(skin: Skin) -> Color {
    match skin {
        Skin::Normal => Color::srgb(0.9, 0.9, 0.9),
        Skin::Powered => Color::srgb(1.0, 0.6, 0.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boss_projectiles_are_red_and_player_shots_cyan() {
        assert_eq!(style_for(Category::Enemy, false, true), FIREBALL);
        assert_eq!(style_for(Category::PlayerProjectile, false, false), PLAYER_SHOT);
        assert_ne!(FIREBALL.color, PLAYER_SHOT.color);
    }

    #[test]
    fn boss_marker_wins_over_enemy_tag() {
        assert_eq!(style_for(Category::Enemy, true, false), BOSS);
        assert_eq!(style_for(Category::Enemy, false, false), ENEMY);
    }

    #[test]
    fn fireballs_flip_when_heading_right_and_shots_when_heading_left() {
        assert!(flip_for(Vec2::X, true));
        assert!(!flip_for(Vec2::NEG_X, true));
        assert!(flip_for(Vec2::NEG_X, false));
        assert!(!flip_for(Vec2::X, false));
        assert!(!flip_for(Vec2::NEG_Y, false));
    }

    #[test]
    fn skins_are_distinguishable() {
        assert_ne!(player_color(Skin::Normal), player_color(Skin::Powered));
    }
}
