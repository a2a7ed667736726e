//! Per-frame controllers
//!
//! Each controller owns one `sim` state machine, reads an `InputFrame` and
//! reports side effects through the `Host` port. The host calls `tick` once per
//! frame with a non-decreasing `FrameTime`.

pub mod bomb;
pub mod player;
pub mod puzzle;
pub mod shield;

pub use bomb::{BombField, BombThrower, ThrownBomb};
pub use player::PlayerMover;
pub use puzzle::{GateState, PuzzleController};
pub use shield::ShieldController;

/// Timing for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Scaled seconds since the previous frame
    pub dt: f32,
    /// Seconds since the previous frame, ignoring time scale (pause menus)
    pub unscaled_dt: f32,
    /// Scaled game time in seconds
    pub now: f32,
}

impl FrameTime {
    /// Frame with no time scaling
    pub fn new(dt: f32, now: f32) -> Self {
        Self {
            dt,
            unscaled_dt: dt,
            now,
        }
    }
}
