//! Minimum-interval gate between repeated actions

use serde::{Deserialize, Serialize};

/// Outcome of a fire attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireResult {
    Allowed,
    /// Seconds until the gate reopens
    Denied { remaining: f32 },
}

impl FireResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, FireResult::Allowed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooldownGate {
    cooldown_secs: f32,
    /// Game time of the last accepted fire; -inf until the first one
    last_fire_time: f32,
}

impl CooldownGate {
    pub fn new(cooldown_secs: f32) -> Self {
        Self {
            cooldown_secs: cooldown_secs.max(0.0),
            last_fire_time: f32::NEG_INFINITY,
        }
    }

    pub fn cooldown_secs(&self) -> f32 {
        self.cooldown_secs
    }

    pub fn last_fire_time(&self) -> f32 {
        self.last_fire_time
    }

    /// Accept the action at `now` if the cooldown has elapsed
    pub fn try_fire(&mut self, now: f32) -> FireResult {
        let elapsed = now - self.last_fire_time;
        if elapsed >= self.cooldown_secs {
            self.last_fire_time = now;
            FireResult::Allowed
        } else {
            FireResult::Denied {
                remaining: self.cooldown_secs - elapsed,
            }
        }
    }

    /// Seconds until the gate reopens at `now` (0 if ready)
    pub fn remaining(&self, now: f32) -> f32 {
        (self.cooldown_secs - (now - self.last_fire_time)).max(0.0)
    }

    pub fn is_ready(&self, now: f32) -> bool {
        now - self.last_fire_time >= self.cooldown_secs
    }

    /// Forget the last fire time
    pub fn reset(&mut self) {
        self.last_fire_time = f32::NEG_INFINITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cooldown_sequence() {
        let mut gate = CooldownGate::new(3.0);
        assert_eq!(gate.try_fire(0.0), FireResult::Allowed);
        assert_eq!(gate.try_fire(2.0), FireResult::Denied { remaining: 1.0 });
        assert_eq!(gate.try_fire(3.0), FireResult::Allowed);
    }

    #[test]
    fn test_immediate_refire_denied_full_cooldown() {
        let mut gate = CooldownGate::new(3.0);
        assert!(gate.try_fire(10.0).is_allowed());
        assert_eq!(gate.try_fire(10.0), FireResult::Denied { remaining: 3.0 });
        assert_eq!(gate.last_fire_time(), 10.0);
    }

    #[test]
    fn test_denied_does_not_update_timestamp() {
        let mut gate = CooldownGate::new(3.0);
        gate.try_fire(0.0);
        gate.try_fire(1.0);
        gate.try_fire(2.5);
        assert_eq!(gate.last_fire_time(), 0.0);
        assert!(gate.is_ready(3.0));
    }

    #[test]
    fn test_remaining_and_reset() {
        let mut gate = CooldownGate::new(3.0);
        assert_eq!(gate.remaining(0.0), 0.0);
        gate.try_fire(1.0);
        assert_eq!(gate.remaining(2.0), 2.0);
        gate.reset();
        assert!(gate.try_fire(2.0).is_allowed());
    }

    #[test]
    fn test_zero_cooldown_always_allows() {
        let mut gate = CooldownGate::new(0.0);
        assert!(gate.try_fire(1.0).is_allowed());
        assert!(gate.try_fire(1.0).is_allowed());
    }

    proptest! {
        #[test]
        fn prop_accepted_fires_are_spaced(
            cooldown in 0.1f32..5.0,
            steps in proptest::collection::vec(0.0f32..2.0, 1..64),
        ) {
            let mut gate = CooldownGate::new(cooldown);
            let mut now = 0.0f32;
            let mut accepted: Vec<f32> = Vec::new();
            for step in steps {
                now += step;
                if gate.try_fire(now).is_allowed() {
                    accepted.push(now);
                }
            }
            for pair in accepted.windows(2) {
                prop_assert!(pair[1] - pair[0] >= cooldown);
            }
        }
    }
}
