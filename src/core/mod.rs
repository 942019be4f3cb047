//! Core game module - states, events, configuration, and input.
//!
//! This module provides the foundation that all other game systems build upon.

mod bounds;
mod config;
mod error;
mod events;
mod input;
mod plugin;
mod states;

pub use bounds::ScreenBounds;
pub use config::*;
pub use error::ConfigError;
pub use events::*;
pub use input::PlayerInput;
pub use plugin::{CorePlugin, SessionEntity, SessionSet, TickSet};
pub use states::*;
