//! Shield durability state machine
//!
//! ```text
//! Inactive --activate--> Active --deactivate--> RegenPending
//! RegenPending --delay--> Regenerating --full--> Inactive
//! ```
//!
//! Depletion while Active forces the deactivate path. Activating during
//! RegenPending or Regenerating cancels regeneration immediately.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, non_negative};

/// Shield tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldConfig {
    pub max_durability: f32,
    /// Durability lost per second while active
    pub decay_rate: f32,
    /// Durability regained per second while regenerating
    pub regen_rate: f32,
    /// Seconds after deactivation before regeneration starts
    pub regen_delay: f32,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            max_durability: 100.0,
            decay_rate: 10.0,
            regen_rate: 5.0,
            regen_delay: 2.0,
        }
    }
}

impl ShieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_durability > 0.0) {
            return Err(ConfigError::NonPositiveDurability(self.max_durability));
        }
        non_negative("decay_rate", self.decay_rate)?;
        non_negative("regen_rate", self.regen_rate)?;
        non_negative("regen_delay", self.regen_delay)?;
        Ok(())
    }
}

/// Discrete phase of the durability machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShieldPhase {
    #[default]
    Inactive,
    Active,
    /// Waiting out the regen delay
    RegenPending,
    Regenerating,
}

/// Transitions reported to the owning controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShieldEvent {
    Activated { durability: f32 },
    /// `depleted` is set when durability hit zero rather than a release
    Deactivated { durability: f32, depleted: bool },
    Hit { remaining: f32 },
    RegenStarted,
    Recharged,
}

/// Durability machine for one shield.
///
/// Transitions are queued as `ShieldEvent`s until `drain_events` is called.
/// Owners must drain once per frame; nothing else empties the queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldState {
    config: ShieldConfig,
    durability: f32,
    phase: ShieldPhase,
    /// Seconds left before regeneration, only meaningful in RegenPending
    regen_timer: f32,
    #[serde(skip)]
    events: Vec<ShieldEvent>,
}

impl ShieldState {
    pub fn new(config: ShieldConfig) -> Self {
        let max = config.max_durability.max(0.0);
        Self {
            config,
            durability: max,
            phase: ShieldPhase::Inactive,
            regen_timer: 0.0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &ShieldConfig {
        &self.config
    }

    pub fn phase(&self) -> ShieldPhase {
        self.phase
    }

    pub fn durability(&self) -> f32 {
        self.durability
    }

    pub fn is_active(&self) -> bool {
        self.phase == ShieldPhase::Active
    }

    /// Durability as 0..=1 of max (UI meter)
    pub fn durability_fraction(&self) -> f32 {
        if self.config.max_durability > 0.0 {
            self.durability / self.config.max_durability
        } else {
            0.0
        }
    }

    /// Seconds left before regeneration starts (0 outside RegenPending)
    pub fn regen_delay_remaining(&self) -> f32 {
        if self.phase == ShieldPhase::RegenPending {
            self.regen_timer
        } else {
            0.0
        }
    }

    /// Raise the shield. Returns false if already active or depleted.
    pub fn activate(&mut self) -> bool {
        if self.phase == ShieldPhase::Active || self.durability <= 0.0 {
            return false;
        }
        self.regen_timer = 0.0;
        self.phase = ShieldPhase::Active;
        self.events.push(ShieldEvent::Activated {
            durability: self.durability,
        });
        true
    }

    /// Lower the shield. Returns false if it was not active.
    pub fn deactivate(&mut self) -> bool {
        self.lower(false)
    }

    fn lower(&mut self, depleted: bool) -> bool {
        if self.phase != ShieldPhase::Active {
            return false;
        }
        self.phase = ShieldPhase::RegenPending;
        self.regen_timer = self.config.regen_delay;
        self.events.push(ShieldEvent::Deactivated {
            durability: self.durability,
            depleted,
        });
        true
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        match self.phase {
            ShieldPhase::Inactive => {}
            ShieldPhase::Active => {
                self.durability = (self.durability - self.config.decay_rate * dt).max(0.0);
                if self.durability <= 0.0 {
                    self.lower(true);
                }
            }
            ShieldPhase::RegenPending => {
                self.regen_timer -= dt;
                if self.regen_timer <= 0.0 {
                    self.regen_timer = 0.0;
                    self.phase = ShieldPhase::Regenerating;
                    self.events.push(ShieldEvent::RegenStarted);
                }
            }
            ShieldPhase::Regenerating => {
                let max = self.config.max_durability;
                self.durability = (self.durability + self.config.regen_rate * dt).min(max);
                if self.durability >= max {
                    self.phase = ShieldPhase::Inactive;
                    self.events.push(ShieldEvent::Recharged);
                }
            }
        }
    }

    /// Absorb a hit. Only has effect while active.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.phase != ShieldPhase::Active || !(amount > 0.0) {
            return false;
        }
        self.durability = (self.durability - amount).max(0.0);
        self.events.push(ShieldEvent::Hit {
            remaining: self.durability,
        });
        if self.durability <= 0.0 {
            self.lower(true);
        }
        true
    }

    /// Number of transitions waiting to be drained
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Take all transitions recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<ShieldEvent> {
        std::mem::take(&mut self.events)
    }
}
