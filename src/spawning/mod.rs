//! Spawning module - spawn timers, pickup rolls, and the spawn systems.

mod plugin;
mod schedule;
mod systems;

pub use plugin::SpawningPlugin;
pub use schedule::{roll_pickup, SpawnRng, SpawnSchedule};
pub use systems::kinematic;
