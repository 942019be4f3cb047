//! UI module - score readout, boss health bar, and end banners.

mod hud;
mod plugin;

pub use hud::{score_label, BossBar, BossBarFill, HudRoot, ScoreText};
pub use plugin::{banner_text, EndBannerUi, UiPlugin};
