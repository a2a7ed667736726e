//! Ball-in-maze win detection
//!
//! The active ball is steered by the caller; this only tracks its position
//! and fires completion once it comes within `success_threshold` of the target.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PuzzleState {
    #[default]
    Idle,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleSession {
    pub active_position: Vec2,
    pub target_position: Vec2,
    pub success_threshold: f32,
    start_position: Vec2,
    state: PuzzleState,
}

impl PuzzleSession {
    pub fn new(start: Vec2, target: Vec2, success_threshold: f32) -> Self {
        Self {
            active_position: start,
            target_position: target,
            success_threshold,
            start_position: start,
            state: PuzzleState::Idle,
        }
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn start_position(&self) -> Vec2 {
        self.start_position
    }

    /// Begin (or restart) a run from `active_pos`
    pub fn start(&mut self, active_pos: Vec2) {
        self.start_position = active_pos;
        self.active_position = active_pos;
        self.state = PuzzleState::InProgress;
    }

    /// Nudge the active ball; ignored outside a run
    pub fn move_by(&mut self, delta: Vec2) {
        if self.state == PuzzleState::InProgress {
            self.active_position += delta;
        }
    }

    pub fn distance_to_target(&self) -> f32 {
        self.active_position.distance(self.target_position)
    }

    /// Returns true exactly once, on the call that completes the run
    pub fn check_complete(&mut self) -> bool {
        if self.state != PuzzleState::InProgress {
            return false;
        }
        if self.distance_to_target() < self.success_threshold {
            self.state = PuzzleState::Completed;
            return true;
        }
        false
    }

    /// Complete from an external trigger (ball collider touching the target)
    pub fn force_complete(&mut self) -> bool {
        if self.state != PuzzleState::InProgress {
            return false;
        }
        self.state = PuzzleState::Completed;
        true
    }

    /// Back to Idle with the ball at its start position
    pub fn reset(&mut self) {
        self.active_position = self.start_position;
        self.state = PuzzleState::Idle;
    }
}
