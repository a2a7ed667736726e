//! Bomb throwing and live bomb fuses

use glam::Vec2;

use crate::behaviors::FrameTime;
use crate::host::{Host, ProxyId, ProxyKind, SoundCue};
use crate::input::InputFrame;
use crate::sim::{BombFuse, CooldownGate, Facing, FireResult, ThrowConfig, throw_plan};

/// A bomb handed to the host, still ticking
#[derive(Debug, Clone)]
pub struct ThrownBomb {
    pub id: ProxyId,
    pub fuse: BombFuse,
}

pub struct BombThrower {
    config: ThrowConfig,
    gate: CooldownGate,
    facing: Facing,
}

impl BombThrower {
    pub fn new(config: ThrowConfig) -> Self {
        Self {
            gate: CooldownGate::new(config.cooldown),
            config,
            facing: Facing::default(),
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }

    /// Track facing from the raw axis and throw on a bomb press
    pub fn tick(
        &mut self,
        position: Vec2,
        input: &InputFrame,
        time: FrameTime,
        host: &mut dyn Host,
    ) -> Option<ThrownBomb> {
        self.facing = self.facing.turned_by(input.horizontal_raw);
        if !input.bomb {
            return None;
        }
        match self.gate.try_fire(time.now) {
            FireResult::Allowed => Some(self.throw(position, host)),
            FireResult::Denied { remaining } => {
                log::info!("Wait {remaining:.1} seconds before throwing another bomb");
                None
            }
        }
    }

    fn throw(&self, position: Vec2, host: &mut dyn Host) -> ThrownBomb {
        let plan = throw_plan(position, self.facing, &self.config);
        let id = host.spawn_proxy(ProxyKind::Bomb, plan.spawn_pos);
        host.apply_impulse(id, plan.impulse);
        host.play_cue(SoundCue::BombThrow);
        log::debug!(
            "Bomb {} thrown from {} with impulse {}",
            id.0,
            plan.spawn_pos,
            plan.impulse
        );
        ThrownBomb {
            id,
            fuse: BombFuse::new(self.config.fuse_secs),
        }
    }
}

/// Bombs in flight, waiting to explode
#[derive(Debug, Default)]
pub struct BombField {
    bombs: Vec<ThrownBomb>,
}

impl BombField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bomb: ThrownBomb) {
        self.bombs.push(bomb);
    }

    pub fn len(&self) -> usize {
        self.bombs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }

    /// Burn fuses; despawns and returns the ids of bombs that exploded
    pub fn tick(&mut self, dt: f32, host: &mut dyn Host) -> Vec<ProxyId> {
        let mut exploded = Vec::new();
        self.bombs.retain_mut(|bomb| {
            if bomb.fuse.tick(dt) {
                exploded.push(bomb.id);
                false
            } else {
                true
            }
        });
        for id in &exploded {
            host.play_cue(SoundCue::BombExplode);
            host.despawn_proxy(*id);
        }
        exploded
    }
}
