//! Bomb Shield - gameplay behaviors for a 2D action/puzzle game
//!
//! Core modules:
//! - `sim`: Engine-independent state machines (shield, cooldown, puzzle, bomb, gate)
//! - `behaviors`: Per-frame controllers wiring input and host ports to `sim`
//! - `input`: Injected input sampling
//! - `host`: Ports the core drives (proxies, sound cues, signals)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod behaviors;
pub mod error;
pub mod host;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::{BehaviorError, ConfigError};
pub use settings::Settings;

use glam::Vec2;

/// Frame loop constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Distance below which a moving gate counts as fully open
    pub const GATE_ARRIVE_EPSILON: f32 = 0.1;
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting
#[inline]
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let to_target = target - current;
    let dist = to_target.length();
    if dist <= max_delta || dist == 0.0 {
        target
    } else {
        current + to_target / dist * max_delta
    }
}
