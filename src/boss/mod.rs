//! Boss module - the scripted adversary of the final phase.

mod components;
mod plugin;
mod systems;

pub use components::{Boss, Fireball};
pub use plugin::BossPlugin;
pub use systems::spawn_boss;
