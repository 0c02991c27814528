//! Owned simulation context: the single place all game state lives.

use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::fsm::{Phase, PhaseAction, PhaseController, TransitionResult};
use crate::{
    create_ball, create_paddle, serve_velocity, step, Ball, Config, ConfigError, Events,
    GameRng, InputSnapshot, Paddle, Score, Side, Time,
};

/// Advisory presentation hints, not simulation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints {
    pub cursor_visible: bool,
    pub start_control_visible: bool,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub left_paddle: Vec3,
    pub right_paddle: Vec3,
    pub ball: Vec3,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: Phase,
    pub hints: Hints,
    pub events: Events,
    pub tick: u64,
}

pub struct Simulation {
    world: World,
    time: Time,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    phase: PhaseController,
    /// In-flight ball velocity captured when play was paused
    paused_velocity: Vec3,
    ball: Entity,
    left_paddle: Entity,
    right_paddle: Entity,
}

impl Simulation {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let left_paddle = create_paddle(&mut world, &config, Side::Left);
        let right_paddle = create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(&mut world, Vec3::ZERO, Vec3::ZERO);

        tracing::debug!(variant = ?config.variant, seed, "simulation created");

        Ok(Self {
            world,
            time: Time::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            phase: PhaseController::new(),
            paused_velocity: Vec3::ZERO,
            ball,
            left_paddle,
            right_paddle,
        })
    }

    /// Advance one frame: phase commands first, then the live systems if running
    pub fn tick(&mut self, dt: f32, input: &InputSnapshot) -> RenderState {
        if input.start_requested {
            self.start();
        }
        if input.pause_toggle_requested {
            self.toggle_pause();
        }

        if self.phase.is_running() {
            step(
                &mut self.world,
                &self.config,
                input,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
            );
        } else {
            // Frozen: nothing moves, nothing collides
            self.events.clear();
        }

        self.time.advance(dt);
        tracing::trace!(tick = self.time.tick, phase = ?self.phase.state(), "tick");
        self.render_state()
    }

    /// Serve and go live. Only valid from `Idle`; a second start is a no-op.
    pub fn start(&mut self) -> TransitionResult {
        let result = self.phase.transition(PhaseAction::Start);
        if result.success() {
            self.serve();
        }
        result
    }

    /// Flip between `Running` and `Paused`. No-op while `Idle`.
    ///
    /// Pausing stops the ball. Resuming keeps a velocity written in while
    /// paused, otherwise restores the in-flight velocity from pause time, and
    /// re-serves only when that velocity was exactly zero.
    pub fn toggle_pause(&mut self) -> TransitionResult {
        let result = self.phase.transition(PhaseAction::TogglePause);
        if !result.success() {
            return result;
        }

        match result.to_state() {
            Phase::Paused => {
                let mut in_flight = Vec3::ZERO;
                if let Some(ball) = self.ball_mut() {
                    in_flight = ball.vel;
                    ball.vel = Vec3::ZERO;
                }
                self.paused_velocity = in_flight;
            }
            Phase::Running => {
                let in_flight = std::mem::take(&mut self.paused_velocity);
                // A velocity written in while paused wins
                if self.ball().is_stopped() {
                    if in_flight == Vec3::ZERO {
                        self.serve();
                    } else {
                        self.set_ball_velocity(in_flight);
                    }
                }
            }
            Phase::Idle => {}
        }
        result
    }

    fn serve(&mut self) {
        let vel = serve_velocity(1.0, &self.config, &mut self.rng);
        self.set_ball_velocity(vel);
    }

    fn set_ball_velocity(&mut self, vel: Vec3) {
        if let Some(ball) = self.ball_mut() {
            ball.vel = vel;
        }
    }

    fn ball_mut(&mut self) -> Option<&mut Ball> {
        let ball = self.world.query_one_mut::<&mut Ball>(self.ball).ok();
        debug_assert!(ball.is_some(), "ball entity missing");
        ball
    }

    /// Place the ball directly (hosts replaying a rally, tests)
    pub fn set_ball(&mut self, pos: Vec3, vel: Vec3) {
        if let Some(ball) = self.ball_mut() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn ball(&self) -> Ball {
        let ball = self.world.get::<&Ball>(self.ball).map(|b| *b);
        debug_assert!(ball.is_ok(), "ball entity missing");
        ball.unwrap_or_else(|_| Ball::at_rest())
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        let paddle = self.world.get::<&Paddle>(entity).map(|p| *p);
        debug_assert!(paddle.is_ok(), "paddle entity missing");
        paddle.unwrap_or_else(|_| Paddle::new(side, self.config.paddle_rest(side)))
    }

    pub fn phase(&self) -> Phase {
        self.phase.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> Events {
        self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            left_paddle: self.paddle(Side::Left).pos,
            right_paddle: self.paddle(Side::Right).pos,
            ball: self.ball().pos,
            left_score: self.score.left,
            right_score: self.score.right,
            phase: self.phase.state(),
            hints: Hints {
                cursor_visible: self.phase.cursor_visible(),
                start_control_visible: self.phase.start_control_visible(),
            },
            events: self.events,
            tick: self.time.tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_sim() -> Simulation {
        let mut sim = Simulation::new(Config::table(), 12345).unwrap();
        assert!(sim.start().success());
        sim
    }

    #[test]
    fn test_new_is_idle_and_at_rest() {
        let sim = Simulation::new(Config::table(), 1).unwrap();
        assert_eq!(sim.phase(), Phase::Idle);
        assert!(sim.ball().is_stopped());
        assert_eq!(sim.ball().pos, Vec3::ZERO);
        assert_eq!(sim.paddle(Side::Left).pos, Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::table();
        config.bounds.paddle_offset = 100.0;
        assert!(Simulation::new(config, 1).is_err());
    }

    #[test]
    fn test_start_serves_once() {
        let mut sim = running_sim();
        let served = sim.ball().vel;
        assert_eq!(served.x, 0.2);
        assert_eq!(served.y, 0.0);
        assert_eq!(served.z.abs(), 0.2);

        sim.set_ball(Vec3::ZERO, Vec3::new(0.05, 0.0, 0.05));
        let result = sim.start();
        assert!(!result.success(), "Second start is a no-op");
        assert_eq!(sim.ball().vel, Vec3::new(0.05, 0.0, 0.05));
    }

    #[test]
    fn test_pause_stops_ball_and_resume_restores_flight() {
        let mut sim = running_sim();
        sim.set_ball(Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.3, 0.0, 0.1));

        sim.toggle_pause();
        assert_eq!(sim.phase(), Phase::Paused);
        assert!(sim.ball().is_stopped(), "Paused ball has zero velocity");

        sim.toggle_pause();
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.ball().vel, Vec3::new(0.3, 0.0, 0.1), "No re-randomization");
    }

    #[test]
    fn test_resume_reserves_a_stopped_ball() {
        let mut sim = running_sim();
        sim.set_ball(Vec3::ZERO, Vec3::ZERO);
        sim.toggle_pause();
        sim.toggle_pause();

        let vel = sim.ball().vel;
        assert_eq!(vel.x, 0.2, "Stopped ball gets a fresh serve");
        assert_eq!(vel.y, 0.0);
        assert_eq!(vel.z.abs(), 0.2);
    }

    #[test]
    fn test_resume_keeps_velocity_set_while_paused() {
        let mut sim = running_sim();
        sim.toggle_pause();
        sim.set_ball(Vec3::ZERO, Vec3::new(-0.1, 0.0, 0.3));
        sim.toggle_pause();
        assert_eq!(sim.ball().vel, Vec3::new(-0.1, 0.0, 0.3));
    }

    #[test]
    fn test_toggle_while_idle_has_no_effect() {
        let mut sim = Simulation::new(Config::table(), 1).unwrap();
        let before = sim.render_state();
        let result = sim.toggle_pause();
        assert!(!result.success());
        assert_eq!(sim.render_state(), before);
        assert!(sim.ball().is_stopped());
    }

    #[test]
    fn test_hints_follow_phase() {
        let mut sim = Simulation::new(Config::table(), 1).unwrap();
        let state = sim.tick(0.016, &InputSnapshot::new());
        assert!(state.hints.cursor_visible && state.hints.start_control_visible);

        let state = sim.tick(0.016, &InputSnapshot::start());
        assert_eq!(state.phase, Phase::Running);
        assert!(!state.hints.cursor_visible && !state.hints.start_control_visible);

        let state = sim.tick(0.016, &InputSnapshot::toggle_pause());
        assert_eq!(state.phase, Phase::Paused);
        assert!(state.hints.cursor_visible && !state.hints.start_control_visible);
    }
}
