use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::resources::GameRng;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the side on the rally axis: left at `-Z`, right at `+Z`
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec3,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec3) -> Self {
        Self { side, pos }
    }
}

/// How a paddle is driven from the input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleControl {
    /// Position set directly from the normalized pointer
    Pointer,
    /// Scalar speed from held direction keys
    Keys,
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    /// Pointer target in world units (width, length)
    pub target: Option<Vec2>,
    /// Keyboard speed along the free axis, per tick
    pub speed: f32,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Ball {
    pub fn new(pos: Vec3, vel: Vec3) -> Self {
        Self { pos, vel }
    }

    /// Resting ball at the table center
    pub fn at_rest() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }

    /// Exactly zero velocity, as left behind by a pause
    pub fn is_stopped(&self) -> bool {
        self.vel == Vec3::ZERO
    }

    /// Reset ball to center and serve it
    pub fn reset(&mut self, directed_sign: f32, config: &Config, rng: &mut GameRng) {
        self.pos = Vec3::ZERO;
        self.vel = serve_velocity(directed_sign, config, rng);
    }
}

/// Serve vector: `directed_sign * s` on the exit axis, `±s` (random) on the serve axis
pub fn serve_velocity(directed_sign: f32, config: &Config, rng: &mut GameRng) -> Vec3 {
    use rand::Rng;
    let axes = config.axes();
    let speed = config.serve_speed;
    let random_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

    let mut vel = Vec3::ZERO;
    axes.exit.set(&mut vel, directed_sign.signum() * speed);
    axes.serve_random.set(&mut vel, random_sign * speed);
    vel
}
