//! Data models for the animation demo page.

mod effect;
mod palette;
mod play_state;

pub use effect::EffectSet;
pub use palette::Palette;
pub use play_state::PlayState;
