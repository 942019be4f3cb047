//! Progression module - score milestones, enemy roster, and the boss trigger.

mod plugin;
mod roster;
mod score;

pub use plugin::{apply_points, ProgressionPlugin};
pub use roster::{EnemyRoster, EnemyVariant};
pub use score::{Progression, ScoreStep};
