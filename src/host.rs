//! Host ports
//!
//! Everything the behaviors need from the surrounding engine: visual proxies,
//! one-shot sound cues and scene/UI signals. Calls are fire-and-forget; the
//! only value the core reads back is the id of a spawned proxy.

use glam::Vec2;

/// Handle to a host-owned visual object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProxyId(pub u32);

/// Kinds of visual proxy the core asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyKind {
    /// Dome around the anchor while the shield is up
    Shield,
    Bomb,
}

/// One-shot sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    ShieldActivate,
    ShieldDeactivate,
    ShieldHit,
    BombThrow,
    BombExplode,
}

/// Scene/UI notifications
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostSignal {
    /// Puzzle panel opened; player control suspended
    PuzzleShown,
    /// Ball reached the target; show the completion panel
    PuzzleCompleted,
    /// Player left the puzzle without solving it
    PuzzleExited,
    /// Player control restored after the puzzle closes
    PlayerEnabled(bool),
    /// Payphone trigger disabled after completion
    TriggerDisabled,
    /// Gate removed from the scene instantly
    GateRemoved,
    /// Gate slid to a new position
    GateMoved(Vec2),
    /// Gate finished sliding open
    GateOpened,
}

pub trait Host {
    fn spawn_proxy(&mut self, kind: ProxyKind, pos: Vec2) -> ProxyId;
    fn set_proxy_visible(&mut self, id: ProxyId, visible: bool);
    fn move_proxy(&mut self, id: ProxyId, pos: Vec2);
    fn despawn_proxy(&mut self, id: ProxyId);
    fn apply_impulse(&mut self, id: ProxyId, impulse: Vec2);
    fn play_cue(&mut self, cue: SoundCue);
    fn signal(&mut self, signal: HostSignal);
}

/// A recorded host call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Spawn(ProxyId, ProxyKind, Vec2),
    Visible(ProxyId, bool),
    Move(ProxyId, Vec2),
    Despawn(ProxyId),
    Impulse(ProxyId, Vec2),
    Cue(SoundCue),
    Signal(HostSignal),
}

/// Host that records every call in order
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    next_id: u32,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<SoundCue> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Cue(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    pub fn signals(&self) -> Vec<HostSignal> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Signal(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn count_spawned(&self, kind: ProxyKind) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Spawn(_, k, _) if *k == kind))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Host for RecordingHost {
    fn spawn_proxy(&mut self, kind: ProxyKind, pos: Vec2) -> ProxyId {
        self.next_id += 1;
        let id = ProxyId(self.next_id);
        self.calls.push(HostCall::Spawn(id, kind, pos));
        id
    }

    fn set_proxy_visible(&mut self, id: ProxyId, visible: bool) {
        self.calls.push(HostCall::Visible(id, visible));
    }

    fn move_proxy(&mut self, id: ProxyId, pos: Vec2) {
        self.calls.push(HostCall::Move(id, pos));
    }

    fn despawn_proxy(&mut self, id: ProxyId) {
        self.calls.push(HostCall::Despawn(id));
    }

    fn apply_impulse(&mut self, id: ProxyId, impulse: Vec2) {
        self.calls.push(HostCall::Impulse(id, impulse));
    }

    fn play_cue(&mut self, cue: SoundCue) {
        self.calls.push(HostCall::Cue(cue));
    }

    fn signal(&mut self, signal: HostSignal) {
        self.calls.push(HostCall::Signal(signal));
    }
}
