//! Bomb Shield headless demo
//!
//! Drives every behavior through a scripted session on a fixed timestep and
//! logs what the host is asked to do.
//!
//! Usage: `bomb-shield [settings.json|-] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::Path;

    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use bomb_shield::Settings;
    use bomb_shield::behaviors::{
        BombField, BombThrower, FrameTime, PlayerMover, PuzzleController, ShieldController,
    };
    use bomb_shield::consts::*;
    use bomb_shield::host::{HostCall, HostSignal, ProxyKind, RecordingHost, SoundCue};
    use bomb_shield::input::{InputFrame, InputSource, ScriptedInput};
    use bomb_shield::sim::PuzzleState;

    const PAYPHONE_POS: Vec2 = Vec2::new(8.0, 0.0);
    const PAYPHONE_RADIUS: f32 = 1.0;
    const BALL_START: Vec2 = Vec2::new(0.0, 0.0);
    const BALL_TARGET: Vec2 = Vec2::new(3.0, 2.0);
    const GATE_POS: Vec2 = Vec2::new(12.0, 0.0);
    /// Chance per frame of a stray hit while the shield is up
    const HIT_CHANCE: f64 = 0.05;

    #[derive(Debug, Default)]
    struct Stats {
        shield_activations: u32,
        shield_hits: u32,
        bombs_thrown: u32,
        bombs_exploded: u32,
        gate_opened: bool,
    }

    /// All behaviors attached to the demo player
    struct Game {
        shield: ShieldController,
        thrower: BombThrower,
        bombs: BombField,
        puzzle: PuzzleController,
        player: PlayerMover,
        player_pos: Vec2,
        host: RecordingHost,
        rng: Pcg32,
        accumulator: f32,
        time: f32,
        stats: Stats,
    }

    impl Game {
        fn new(settings: &Settings, seed: u64) -> Self {
            let player_pos = Vec2::ZERO;
            Self {
                shield: ShieldController::new(settings.shield, Some(player_pos)),
                thrower: BombThrower::new(settings.bomb),
                bombs: BombField::new(),
                puzzle: PuzzleController::new(BALL_START, BALL_TARGET, GATE_POS, settings.puzzle),
                player: PlayerMover::new(settings.player.move_speed),
                player_pos,
                host: RecordingHost::new(),
                rng: Pcg32::seed_from_u64(seed),
                accumulator: 0.0,
                time: 0.0,
                stats: Stats::default(),
            }
        }

        /// Run fixed simulation steps for one rendered frame
        fn update(&mut self, frame_dt: f32, input: &mut dyn InputSource) {
            let dt = frame_dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let frame = input.sample();
                self.step(&frame);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        fn step(&mut self, input: &InputFrame) {
            let time = FrameTime::new(SIM_DT, self.time);

            // Player-owned behaviors pause while the puzzle has control
            if self.player.enabled() {
                self.player_pos += self.player.velocity(input) * SIM_DT;
                self.shield.set_anchor(Some(self.player_pos));

                if let Err(e) = self.shield.tick(input, time, &mut self.host) {
                    log::debug!("Shield input ignored: {e}");
                }
                if self.shield.state().is_active() && self.rng.random_bool(HIT_CHANCE) {
                    let damage = self.rng.random_range(5.0..20.0);
                    self.shield.take_damage(damage, &mut self.host);
                }

                let thrown = self.thrower.tick(self.player_pos, input, time, &mut self.host);
                if let Some(bomb) = thrown {
                    self.bombs.add(bomb);
                }

                if self.player_pos.distance(PAYPHONE_POS) < PAYPHONE_RADIUS {
                    self.puzzle.show(&mut self.host);
                }
            }
            self.bombs.tick(SIM_DT, &mut self.host);

            self.puzzle.tick(input, time, &mut self.host);
            if self.puzzle.session().state() == PuzzleState::Completed
                && self.puzzle.trigger_enabled()
            {
                self.puzzle.continue_after_success(&mut self.host);
            }

            self.apply_host_calls();
            self.time += SIM_DT;
        }

        /// Play the host's side of the recorded calls
        fn apply_host_calls(&mut self) {
            // Reacting to a call can record more (lowering the shield)
            while !self.host.calls.is_empty() {
                for call in std::mem::take(&mut self.host.calls) {
                    self.apply_host_call(call);
                }
            }
        }

        fn apply_host_call(&mut self, call: HostCall) {
            log::debug!("host: {call:?}");
            match call {
                HostCall::Spawn(_, ProxyKind::Bomb, _) => self.stats.bombs_thrown += 1,
                HostCall::Cue(SoundCue::ShieldActivate) => self.stats.shield_activations += 1,
                HostCall::Cue(SoundCue::ShieldHit) => self.stats.shield_hits += 1,
                HostCall::Cue(SoundCue::BombExplode) => self.stats.bombs_exploded += 1,
                HostCall::Signal(HostSignal::PlayerEnabled(enabled)) => {
                    self.player.set_enabled(enabled);
                    // The shield stops ticking with the player, so it can't stay up
                    if !enabled {
                        self.shield.deactivate(&mut self.host);
                    }
                }
                HostCall::Signal(HostSignal::GateRemoved | HostSignal::GateOpened) => {
                    self.stats.gate_opened = true
                }
                _ => {}
            }
        }
    }

    /// Walk to the payphone while testing the shield and bombs, then solve the maze
    fn script() -> ScriptedInput {
        let idle = InputFrame::default();
        let bomb = InputFrame {
            bomb: true,
            ..Default::default()
        };
        let shield = InputFrame {
            shield: true,
            ..Default::default()
        };

        let mut input = ScriptedInput::default();
        input.push_repeated(shield, 180);
        input.push_repeated(idle, 30);
        input.push(bomb);
        input.push_repeated(idle, 60);
        // Still cooling down
        input.push(bomb);
        input.push_repeated(idle, 130);
        input.push(bomb);
        input.push_repeated(shield, 60);
        input.push_repeated(idle, 360);
        // Walk right into the payphone
        input.push_repeated(InputFrame::with_axes(1.0, 0.0), 86);
        // Steer the ball toward the target
        input.push_repeated(InputFrame::with_axes(0.6, 0.4), 90);
        input.push_repeated(idle, 240);
        input
    }

    pub fn run() -> std::process::ExitCode {
        env_logger::init();
        log::info!("Bomb Shield demo starting...");

        let mut args = std::env::args().skip(1);
        let settings = match args.next().filter(|p| p != "-") {
            Some(path) => match Settings::load(Path::new(&path)) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("{e}");
                    return std::process::ExitCode::FAILURE;
                }
            },
            None => Settings::default(),
        };
        let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
        log::info!("Session seed: {seed}");

        let mut game = Game::new(&settings, seed);
        let mut input = script();
        while !input.is_exhausted() {
            game.update(SIM_DT, &mut input);
        }
        game.shield.teardown(&mut game.host);
        game.apply_host_calls();

        log::info!(
            "Session over after {:.1}s: shield raised {} times ({} hits, durability {:.1}), \
             {} bombs thrown ({} exploded), puzzle {:?}, gate open: {}",
            game.time,
            game.stats.shield_activations,
            game.stats.shield_hits,
            game.shield.state().durability(),
            game.stats.bombs_thrown,
            game.stats.bombs_exploded,
            game.puzzle.session().state(),
            game.stats.gate_opened,
        );
        std::process::ExitCode::SUCCESS
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use bomb_shield::sim::ShieldPhase;

        #[test]
        fn test_puzzle_lowers_raised_shield() {
            let mut game = Game::new(&Settings::default(), 7);
            let held = InputFrame {
                shield: true,
                ..Default::default()
            };
            game.step(&held);
            assert!(game.shield.state().is_active());

            // Standing on the payphone with the shield still held
            game.player_pos = PAYPHONE_POS;
            game.step(&held);
            assert!(!game.player.enabled());
            assert_eq!(game.puzzle.session().state(), PuzzleState::InProgress);
            assert_eq!(game.shield.state().phase(), ShieldPhase::RegenPending);
            assert!(game.host.calls.is_empty());

            let durability = game.shield.state().durability();
            for _ in 0..30 {
                game.step(&held);
            }
            assert!(!game.shield.state().is_active());
            assert_eq!(game.shield.state().durability(), durability);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    demo::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless demo on the web; embed the library instead
}
