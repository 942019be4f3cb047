//! Physics module - sensor colliders and contact routing.
//!
//! All gameplay bodies are kinematic sensors. Rapier only reports overlaps;
//! every response happens in the gameplay systems that read the routed
//! contact events.

mod contacts;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub use contacts::{route_collisions, ContactRoutingPlugin};

/// Kinematic ball sensor that reports overlaps with other kinematic bodies.
pub fn sensor_body(radius: f32) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::ball(radius),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}
