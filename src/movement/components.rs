//! Kinematic entity record: category tag and mover.

use bevy::prelude::*;

/// Food sub-type, decided by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Banana,
    Pear,
    Pringle,
    Plain,
}

impl FoodKind {
    /// Points awarded when eaten.
    pub fn points(self) -> u32 {
        match self {
            FoodKind::Banana => 5,
            FoodKind::Pear => 4,
            FoodKind::Pringle => 3,
            FoodKind::Plain => 2,
        }
    }
}

/// What a spawned entity is, for collision routing.
///
/// The boss is tagged `Enemy` and additionally carries the `Boss` component.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Food(FoodKind),
    Power,
    Enemy,
    PlayerProjectile,
}

impl Category {
    pub fn is_food(self) -> bool {
        matches!(self, Category::Food(_))
    }
}

/// Straight-line movement with out-of-bounds culling.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    /// Unit direction of travel (or zero when stationary)
    pub direction: Vec2,
    /// Units per second
    pub speed: f32,
    /// Never culled by the bounds check (the boss)
    pub cull_exempt: bool,
}

impl Mover {
    pub fn new(direction: Vec2, speed: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            speed,
            cull_exempt: false,
        }
    }

    /// Falling straight down at `speed`.
    pub fn falling(speed: f32) -> Self {
        Self::new(Vec2::NEG_Y, speed)
    }

    /// Exempt this instance from bounds culling.
    pub fn exempt(mut self) -> Self {
        self.cull_exempt = true;
        self
    }

    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    /// Replace direction and speed from a velocity vector.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.speed = velocity.length();
        self.direction = velocity.normalize_or_zero();
    }

    /// Position after `delta` seconds of travel.
    pub fn step(&self, position: Vec2, delta: f32) -> Vec2 {
        position + self.velocity() * delta
    }
}

/// True when `position` has left the cull box.
pub fn out_of_bounds(position: Vec2, cull_x: f32, cull_y: f32) -> bool {
    position.x.abs() > cull_x || position.y.abs() > cull_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_points_by_kind() {
        assert_eq!(FoodKind::Banana.points(), 5);
        assert_eq!(FoodKind::Pear.points(), 4);
        assert_eq!(FoodKind::Pringle.points(), 3);
        assert_eq!(FoodKind::Plain.points(), 2);
    }

    #[test]
    fn step_scales_by_speed_and_delta() {
        let mover = Mover::falling(2.5);
        let next = mover.step(Vec2::new(1.0, 6.0), 0.5);
        assert!((next - Vec2::new(1.0, 4.75)).length() < 1e-5);
    }

    #[test]
    fn set_velocity_normalizes_direction() {
        let mut mover = Mover::new(Vec2::X, 1.0);
        mover.set_velocity(Vec2::new(3.0, -4.0));
        assert!((mover.speed - 5.0).abs() < 1e-5);
        assert!((mover.direction.length() - 1.0).abs() < 1e-5);

        mover.set_velocity(Vec2::ZERO);
        assert_eq!(mover.speed, 0.0);
        assert_eq!(mover.direction, Vec2::ZERO);
    }

    #[test]
    fn bounds_are_exclusive() {
        assert!(!out_of_bounds(Vec2::new(25.0, 15.0), 25.0, 15.0));
        assert!(out_of_bounds(Vec2::new(25.1, 0.0), 25.0, 15.0));
        assert!(out_of_bounds(Vec2::new(0.0, -15.1), 25.0, 15.0));
    }
}
