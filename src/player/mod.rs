//! Player module - the player entity, its power state, and its collisions.

mod battle;
mod collision;
mod components;
mod movement;
mod plugin;
mod power;

pub use components::*;
pub use movement::{spawn_player, wrap_x};
pub use plugin::PlayerPlugin;
