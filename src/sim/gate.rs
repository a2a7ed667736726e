//! Sliding gate unlocked by solving the puzzle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::GATE_ARRIVE_EPSILON;
use crate::move_towards;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateMotion {
    pub position: Vec2,
    end: Vec2,
    speed: f32,
    opening: bool,
}

impl GateMotion {
    pub fn new(start: Vec2, open_height: f32, speed: f32) -> Self {
        Self {
            position: start,
            end: start + Vec2::Y * open_height,
            speed: speed.max(0.0),
            opening: false,
        }
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    pub fn is_opening(&self) -> bool {
        self.opening
    }

    pub fn begin_opening(&mut self) {
        self.opening = true;
    }

    /// Slide toward the open position. Returns true on the tick it arrives.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.opening {
            return false;
        }
        self.position = move_towards(self.position, self.end, self.speed * dt.max(0.0));
        if self.position.distance(self.end) < GATE_ARRIVE_EPSILON {
            self.opening = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_idle_until_opened() {
        let mut gate = GateMotion::new(Vec2::ZERO, 5.0, 2.0);
        assert!(!gate.tick(1.0));
        assert_eq!(gate.position, Vec2::ZERO);
    }

    #[test]
    fn test_gate_opens_over_time() {
        let mut gate = GateMotion::new(Vec2::new(3.0, 1.0), 5.0, 2.0);
        gate.begin_opening();
        assert!(!gate.tick(1.0));
        assert!((gate.position.y - 3.0).abs() < 1e-5);
        assert!(!gate.tick(1.0));
        assert!(gate.tick(1.0));
        assert_eq!(gate.position, Vec2::new(3.0, 6.0));
        assert!(!gate.is_opening());
        assert!(!gate.tick(1.0));
    }

    #[test]
    fn test_gate_stops_within_arrive_epsilon() {
        let mut gate = GateMotion::new(Vec2::ZERO, 1.0, 0.95);
        gate.begin_opening();
        assert!(gate.tick(1.0));
        // Arrival leaves the gate where it stopped rather than snapping to the end
        assert!((gate.position - Vec2::new(0.0, 0.95)).length() < 1e-6);
        assert_ne!(gate.position, gate.end());
        assert!(!gate.is_opening());
    }

    #[test]
    fn test_gate_ignores_negative_dt() {
        let mut gate = GateMotion::new(Vec2::ZERO, 5.0, 2.0);
        gate.begin_opening();
        assert!(!gate.tick(-1.0));
        assert_eq!(gate.position, Vec2::ZERO);
        assert!(gate.is_opening());
    }
}
