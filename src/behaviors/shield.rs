//! Hold-to-shield controller

use glam::Vec2;

use crate::behaviors::FrameTime;
use crate::error::BehaviorError;
use crate::host::{Host, ProxyId, ProxyKind, SoundCue};
use crate::input::InputFrame;
use crate::sim::{ShieldConfig, ShieldEvent, ShieldState};

pub struct ShieldController {
    state: ShieldState,
    anchor: Option<Vec2>,
    proxy: Option<ProxyId>,
    /// Missing-anchor warning already logged
    warned: bool,
}

impl ShieldController {
    pub fn new(config: ShieldConfig, anchor: Option<Vec2>) -> Self {
        log::info!(
            "Shield initialized, anchor: {}",
            anchor.map_or("NONE".to_string(), |a| format!("{a}"))
        );
        Self {
            state: ShieldState::new(config),
            anchor,
            proxy: None,
            warned: false,
        }
    }

    pub fn state(&self) -> &ShieldState {
        &self.state
    }

    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }

    /// Assign (or clear) the position the shield is centered on
    pub fn set_anchor(&mut self, anchor: Option<Vec2>) {
        if anchor.is_some() {
            self.warned = false;
        }
        self.anchor = anchor;
    }

    /// Raise the shield. Ok(false) if already up or depleted.
    pub fn activate(&mut self, host: &mut dyn Host) -> Result<bool, BehaviorError> {
        if self.state.is_active() || self.state.durability() <= 0.0 {
            return Ok(false);
        }
        if self.anchor.is_none() {
            if !self.warned {
                log::warn!("{}", BehaviorError::MissingAnchor);
                self.warned = true;
            }
            return Err(BehaviorError::MissingAnchor);
        }
        let raised = self.state.activate();
        self.flush(host);
        Ok(raised)
    }

    pub fn deactivate(&mut self, host: &mut dyn Host) -> bool {
        let lowered = self.state.deactivate();
        self.flush(host);
        lowered
    }

    pub fn take_damage(&mut self, amount: f32, host: &mut dyn Host) -> bool {
        let hit = self.state.take_damage(amount);
        self.flush(host);
        hit
    }

    /// Poll the shield button, then advance durability
    pub fn tick(
        &mut self,
        input: &InputFrame,
        time: FrameTime,
        host: &mut dyn Host,
    ) -> Result<(), BehaviorError> {
        let mut result = Ok(());
        if input.shield && !self.state.is_active() && self.state.durability() > 0.0 {
            result = self.activate(host).map(|_| ());
        } else if !input.shield && self.state.is_active() {
            self.deactivate(host);
        }

        self.state.tick(time.dt);
        self.flush(host);

        if let (true, Some(id), Some(anchor)) = (self.state.is_active(), self.proxy, self.anchor) {
            host.move_proxy(id, anchor);
        }
        result
    }

    /// Release the host-owned proxy
    pub fn teardown(&mut self, host: &mut dyn Host) {
        if let Some(id) = self.proxy.take() {
            host.despawn_proxy(id);
        }
    }

    fn flush(&mut self, host: &mut dyn Host) {
        for event in self.state.drain_events() {
            match event {
                ShieldEvent::Activated { durability } => {
                    let anchor = self.anchor.unwrap_or(Vec2::ZERO);
                    let id = *self
                        .proxy
                        .get_or_insert_with(|| host.spawn_proxy(ProxyKind::Shield, anchor));
                    host.set_proxy_visible(id, true);
                    host.play_cue(SoundCue::ShieldActivate);
                    log::info!("Shield activated, durability: {durability:.1}");
                }
                ShieldEvent::Deactivated {
                    durability,
                    depleted,
                } => {
                    if let Some(id) = self.proxy {
                        host.set_proxy_visible(id, false);
                    }
                    host.play_cue(SoundCue::ShieldDeactivate);
                    if depleted {
                        log::info!("Shield depleted");
                    } else {
                        log::info!("Shield deactivated, durability: {durability:.1}");
                    }
                }
                ShieldEvent::Hit { remaining } => {
                    host.play_cue(SoundCue::ShieldHit);
                    log::debug!("Shield hit, remaining durability: {remaining:.1}");
                }
                ShieldEvent::RegenStarted => log::debug!("Shield regenerating"),
                ShieldEvent::Recharged => log::info!("Shield fully recharged"),
            }
        }
    }
}
