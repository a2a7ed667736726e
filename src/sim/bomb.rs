//! Bomb throw geometry and fuse timing

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, non_negative};

/// Which way the thrower is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Update from the raw horizontal axis; zero keeps the current facing
    pub fn turned_by(self, horizontal: f32) -> Self {
        if horizontal > 0.0 {
            Facing::Right
        } else if horizontal < 0.0 {
            Facing::Left
        } else {
            self
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Bomb thrower tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowConfig {
    /// Impulse magnitude applied to a fresh bomb
    pub throw_power: f32,
    /// Minimum seconds between throws
    pub cooldown: f32,
    /// Seconds from spawn to explosion
    pub fuse_secs: f32,
    /// Spawn offset from the thrower; x is mirrored by facing
    pub spawn_offset: Vec2,
    /// Throw direction before normalization; x is mirrored by facing
    pub throw_dir: Vec2,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            throw_power: 7.0,
            cooldown: 3.0,
            fuse_secs: 5.0,
            spawn_offset: Vec2::new(1.0, 0.5),
            throw_dir: Vec2::new(1.0, 0.8),
        }
    }
}

impl ThrowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("throw_power", self.throw_power)?;
        non_negative("cooldown", self.cooldown)?;
        non_negative("fuse_secs", self.fuse_secs)?;
        Ok(())
    }
}

/// Where to spawn a bomb and how hard to push it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrowPlan {
    pub spawn_pos: Vec2,
    pub impulse: Vec2,
}

pub fn throw_plan(origin: Vec2, facing: Facing, config: &ThrowConfig) -> ThrowPlan {
    let mirror = Vec2::new(facing.sign(), 1.0);
    let spawn_pos = origin + config.spawn_offset * mirror;
    let impulse = (config.throw_dir * mirror).normalize_or_zero() * config.throw_power;
    ThrowPlan { spawn_pos, impulse }
}

/// Countdown to explosion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombFuse {
    remaining: f32,
    exploded: bool,
}

impl BombFuse {
    pub fn new(fuse_secs: f32) -> Self {
        Self {
            remaining: fuse_secs.max(0.0),
            exploded: false,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    /// Returns true on the tick the fuse runs out, never again after
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.exploded {
            return false;
        }
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        if self.remaining <= 0.0 {
            self.exploded = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_turned_by_axis() {
        assert_eq!(Facing::Right.turned_by(-0.3), Facing::Left);
        assert_eq!(Facing::Left.turned_by(1.0), Facing::Right);
        assert_eq!(Facing::Left.turned_by(0.0), Facing::Left);
    }

    #[test]
    fn test_throw_plan_mirrors_with_facing() {
        let cfg = ThrowConfig::default();
        let right = throw_plan(Vec2::new(2.0, 0.0), Facing::Right, &cfg);
        assert_eq!(right.spawn_pos, Vec2::new(3.0, 0.5));
        assert!(right.impulse.x > 0.0 && right.impulse.y > 0.0);
        assert!((right.impulse.length() - 7.0).abs() < 1e-4);

        let left = throw_plan(Vec2::new(2.0, 0.0), Facing::Left, &cfg);
        assert_eq!(left.spawn_pos, Vec2::new(1.0, 0.5));
        assert!((left.impulse.x + right.impulse.x).abs() < 1e-6);
        assert!((left.impulse.y - right.impulse.y).abs() < 1e-6);
    }

    #[test]
    fn test_fuse_fires_once() {
        let mut fuse = BombFuse::new(5.0);
        assert!(!fuse.tick(2.0));
        assert!(!fuse.tick(2.0));
        assert!(fuse.tick(2.0));
        assert!(fuse.exploded());
        assert!(!fuse.tick(2.0));
    }

    #[test]
    fn test_fuse_ignores_negative_dt() {
        let mut fuse = BombFuse::new(5.0);
        assert!(!fuse.tick(-3.0));
        assert_eq!(fuse.remaining(), 5.0);
        assert!(!fuse.tick(4.0));
        assert!(!fuse.tick(-10.0));
        assert_eq!(fuse.remaining(), 1.0);
        assert!(!fuse.exploded());
    }
}
