//! Rendering module - camera and placeholder visuals.

mod plugin;
mod style;

pub use plugin::{GameCamera, RenderingPlugin};
pub use style::{flip_for, player_color, style_for, SpriteStyle};
