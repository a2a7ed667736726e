//! Engine-independent simulation module
//!
//! All gameplay state machines live here. This module must stay pure:
//! - Driven only by explicit `tick(dt)` and method calls
//! - No input polling, logging side channels or host calls
//! - Each instance owned by exactly one controller

pub mod bomb;
pub mod cooldown;
pub mod gate;
pub mod puzzle;
pub mod shield;

pub use bomb::{BombFuse, Facing, ThrowConfig, ThrowPlan, throw_plan};
pub use cooldown::{CooldownGate, FireResult};
pub use gate::GateMotion;
pub use puzzle::{PuzzleSession, PuzzleState};
pub use shield::{ShieldConfig, ShieldEvent, ShieldPhase, ShieldState};
