//! Payphone maze puzzle flow
//!
//! Entering the payphone trigger opens the puzzle and suspends player control.
//! The axes then steer the ball until it reaches the target. Continuing after a
//! win re-enables the player, retires the trigger and opens the gate.

use glam::Vec2;

use crate::behaviors::FrameTime;
use crate::host::{Host, HostSignal};
use crate::input::InputFrame;
use crate::settings::PuzzleSettings;
use crate::sim::{GateMotion, PuzzleSession, PuzzleState};

/// Where the gate blocking the exit is in its lifecycle
#[derive(Debug, Clone)]
pub enum GateState {
    Closed(GateMotion),
    Sliding(GateMotion),
    Open(Vec2),
    Removed,
}

pub struct PuzzleController {
    session: PuzzleSession,
    settings: PuzzleSettings,
    gate: GateState,
    /// Payphone can still start the puzzle
    trigger_enabled: bool,
}

impl PuzzleController {
    pub fn new(ball_start: Vec2, target: Vec2, gate_pos: Vec2, settings: PuzzleSettings) -> Self {
        Self {
            session: PuzzleSession::new(ball_start, target, settings.success_threshold),
            gate: GateState::Closed(GateMotion::new(
                gate_pos,
                settings.gate_open_height,
                settings.gate_speed,
            )),
            settings,
            trigger_enabled: true,
        }
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn gate(&self) -> &GateState {
        &self.gate
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    /// Player walked into the payphone. Returns false if the puzzle can't open.
    pub fn show(&mut self, host: &mut dyn Host) -> bool {
        if !self.trigger_enabled || self.session.state() != PuzzleState::Idle {
            return false;
        }
        let start = self.session.start_position();
        self.session.start(start);
        host.signal(HostSignal::PuzzleShown);
        host.signal(HostSignal::PlayerEnabled(false));
        log::info!("Puzzle started, steer the ball to the target");
        true
    }

    pub fn tick(&mut self, input: &InputFrame, time: FrameTime, host: &mut dyn Host) {
        if self.session.state() == PuzzleState::InProgress {
            let axis = Vec2::new(input.horizontal, input.vertical);
            self.session
                .move_by(axis * self.settings.ball_speed * time.unscaled_dt);
            log::trace!("Puzzle distance: {}", self.session.distance_to_target());
            if self.session.check_complete() {
                self.on_success(host);
            }
        }

        if let GateState::Sliding(motion) = &mut self.gate {
            let arrived = motion.tick(time.dt);
            let pos = motion.position;
            host.signal(HostSignal::GateMoved(pos));
            if arrived {
                self.gate = GateState::Open(pos);
                host.signal(HostSignal::GateOpened);
                log::info!("Gate fully opened");
            }
        }
    }

    /// Ball collider touched the target
    pub fn signal_success(&mut self, host: &mut dyn Host) -> bool {
        if self.session.force_complete() {
            self.on_success(host);
            true
        } else {
            false
        }
    }

    fn on_success(&mut self, host: &mut dyn Host) {
        host.signal(HostSignal::PuzzleCompleted);
        log::info!("Puzzle complete, ball reached the target");
    }

    /// Leave without solving; the ball goes back to its start
    pub fn exit(&mut self, host: &mut dyn Host) -> bool {
        if self.session.state() != PuzzleState::InProgress {
            return false;
        }
        self.session.reset();
        host.signal(HostSignal::PuzzleExited);
        host.signal(HostSignal::PlayerEnabled(true));
        log::info!("Puzzle exited");
        true
    }

    /// Close the completion panel and unlock the gate
    pub fn continue_after_success(&mut self, host: &mut dyn Host) -> bool {
        if self.session.state() != PuzzleState::Completed || !self.trigger_enabled {
            return false;
        }
        self.trigger_enabled = false;
        host.signal(HostSignal::PlayerEnabled(true));
        host.signal(HostSignal::TriggerDisabled);

        let gate = std::mem::replace(&mut self.gate, GateState::Removed);
        self.gate = match gate {
            GateState::Closed(_) if self.settings.make_gate_disappear => {
                host.signal(HostSignal::GateRemoved);
                log::info!("Gate removed");
                GateState::Removed
            }
            GateState::Closed(mut motion) => {
                motion.begin_opening();
                log::info!("Gate opening");
                GateState::Sliding(motion)
            }
            other => other,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    fn controller(disappear: bool) -> PuzzleController {
        let settings = PuzzleSettings {
            make_gate_disappear: disappear,
            ..Default::default()
        };
        PuzzleController::new(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0), settings)
    }

    fn right() -> InputFrame {
        InputFrame::with_axes(1.0, 0.0)
    }

    #[test]
    fn test_ball_ignores_input_until_shown() {
        let mut host = RecordingHost::new();
        let mut puzzle = controller(true);
        puzzle.tick(&right(), FrameTime::new(1.0, 0.0), &mut host);
        assert_eq!(puzzle.session().active_position, Vec2::ZERO);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_solve_and_remove_gate() {
        let mut host = RecordingHost::new();
        let mut puzzle = controller(true);
        assert!(puzzle.show(&mut host));
        assert!(!puzzle.show(&mut host));

        // 5 units/s for 0.5s per frame: 2.5 away after the first frame, then done
        puzzle.tick(&right(), FrameTime::new(0.5, 0.0), &mut host);
        assert_eq!(puzzle.session().state(), PuzzleState::InProgress);
        puzzle.tick(&right(), FrameTime::new(0.5, 0.5), &mut host);
        assert_eq!(puzzle.session().state(), PuzzleState::Completed);
        puzzle.tick(&right(), FrameTime::new(0.5, 1.0), &mut host);

        assert!(puzzle.continue_after_success(&mut host));
        assert!(!puzzle.continue_after_success(&mut host));
        assert!(matches!(puzzle.gate(), GateState::Removed));
        assert!(!puzzle.trigger_enabled());
        assert_eq!(
            host.signals(),
            vec![
                HostSignal::PuzzleShown,
                HostSignal::PlayerEnabled(false),
                HostSignal::PuzzleCompleted,
                HostSignal::PlayerEnabled(true),
                HostSignal::TriggerDisabled,
                HostSignal::GateRemoved,
            ]
        );

        // Trigger is single use
        assert!(!puzzle.show(&mut host));
    }

    #[test]
    fn test_ball_uses_unscaled_time() {
        let mut host = RecordingHost::new();
        let mut puzzle = controller(true);
        puzzle.show(&mut host);
        let paused = FrameTime {
            dt: 0.0,
            unscaled_dt: 0.2,
            now: 0.0,
        };
        puzzle.tick(&right(), paused, &mut host);
        assert!((puzzle.session().active_position.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_exit_resets_for_retry() {
        let mut host = RecordingHost::new();
        let mut puzzle = controller(true);
        puzzle.show(&mut host);
        puzzle.tick(&right(), FrameTime::new(0.2, 0.0), &mut host);
        assert!(puzzle.exit(&mut host));
        assert_eq!(puzzle.session().state(), PuzzleState::Idle);
        assert_eq!(puzzle.session().active_position, Vec2::ZERO);
        assert!(!puzzle.exit(&mut host));

        assert!(puzzle.show(&mut host));
        assert_eq!(puzzle.session().state(), PuzzleState::InProgress);
    }

    #[test]
    fn test_trigger_success_and_sliding_gate() {
        let mut host = RecordingHost::new();
        let mut puzzle = controller(false);
        assert!(!puzzle.signal_success(&mut host));
        puzzle.show(&mut host);
        assert!(puzzle.signal_success(&mut host));
        assert!(!puzzle.signal_success(&mut host));

        assert!(puzzle.continue_after_success(&mut host));
        assert!(matches!(puzzle.gate(), GateState::Sliding(_)));

        // open height 5 at 2 units/s
        for _ in 0..2 {
            puzzle.tick(&InputFrame::default(), FrameTime::new(1.0, 0.0), &mut host);
        }
        assert!(matches!(puzzle.gate(), GateState::Sliding(_)));
        puzzle.tick(&InputFrame::default(), FrameTime::new(1.0, 0.0), &mut host);
        match puzzle.gate() {
            GateState::Open(pos) => assert_eq!(*pos, Vec2::new(10.0, 5.0)),
            other => panic!("gate should be open, got {other:?}"),
        }
        assert_eq!(host.signals().last(), Some(&HostSignal::GateOpened));
    }
}
