//! Movement module - kinematic entity record and the generic mover.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::MovementPlugin;
pub use systems::move_entities;
