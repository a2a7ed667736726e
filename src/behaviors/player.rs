//! Top-down player movement

use glam::Vec2;

use crate::input::InputFrame;

/// Converts axis input into a velocity the host applies to the player body
#[derive(Debug, Clone)]
pub struct PlayerMover {
    pub move_speed: f32,
    enabled: bool,
}

impl PlayerMover {
    pub fn new(move_speed: f32) -> Self {
        Self {
            move_speed,
            enabled: true,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Suspend or restore control (the puzzle takes over the axes)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn velocity(&self, input: &InputFrame) -> Vec2 {
        if !self.enabled {
            return Vec2::ZERO;
        }
        Vec2::new(input.horizontal, input.vertical) * self.move_speed
    }
}
