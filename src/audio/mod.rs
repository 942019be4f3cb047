//! Audio module - cue-driven sound effects and music switching.

mod library;
mod plugin;

pub use library::SoundLibrary;
pub use plugin::{GameAudioPlugin, MusicChannel};
