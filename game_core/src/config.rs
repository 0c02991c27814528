use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{PaddleControl, Side};
use crate::params::Params;

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The third axis, given two distinct axes
    pub fn remaining(a: Axis, b: Axis) -> Axis {
        debug_assert_ne!(a, b, "remaining() needs two distinct axes");
        match (a, b) {
            (Axis::Y, Axis::Z) | (Axis::Z, Axis::Y) => Axis::X,
            (Axis::X, Axis::Z) | (Axis::Z, Axis::X) => Axis::Y,
            (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Axis::Z,
            // Same axis twice: no third axis exists
            (same, _) => same,
        }
    }

    pub fn of(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    pub fn set(self, v: &mut Vec3, value: f32) {
        v[self.index()] = value;
    }
}

/// Layout selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 3D table: pointer paddle vs keyboard paddle, rally along z
    #[default]
    Table,
    /// 2D layout: two keyboard paddles, rally along x
    Flat,
}

impl Variant {
    /// Parse a variant name (for host interop)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" | "3d" => Some(Variant::Table),
            "flat" | "2d" => Some(Variant::Flat),
            _ => None,
        }
    }
}

/// Which world axis plays which role in the collision resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    /// Paddles redirect the ball along this axis
    pub rally: Axis,
    /// Walls reflect the ball along this axis
    pub height: Axis,
    /// Leaving the table along this axis scores
    pub exit: Axis,
    /// Serve sign on this axis is random
    pub serve_random: Axis,
    /// Keyboard paddles move along this axis
    pub paddle_free: Axis,
}

impl AxisMap {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Table => Self {
                rally: Axis::Z,
                height: Axis::Y,
                exit: Axis::X,
                serve_random: Axis::Z,
                paddle_free: Axis::X,
            },
            Variant::Flat => Self {
                rally: Axis::X,
                height: Axis::Y,
                exit: Axis::X,
                serve_random: Axis::Y,
                paddle_free: Axis::Y,
            },
        }
    }

    /// Axis used for the paddle proximity check
    pub fn cross(&self) -> Axis {
        Axis::remaining(self.rally, self.height)
    }
}

/// Static table, paddle and ball dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub half_width: f32,
    pub half_height: f32,
    pub half_length: f32,
    pub paddle_radius: f32,
    pub ball_radius: f32,
    /// Paddle resting distance from the center along the rally axis
    pub paddle_offset: f32,
}

impl Bounds {
    pub fn table() -> Self {
        Self {
            half_width: Params::TABLE_HALF_WIDTH,
            half_height: Params::TABLE_HALF_HEIGHT,
            half_length: Params::TABLE_HALF_LENGTH,
            paddle_radius: Params::TABLE_PADDLE_RADIUS,
            ball_radius: Params::TABLE_BALL_RADIUS,
            paddle_offset: Params::TABLE_PADDLE_OFFSET,
        }
    }

    pub fn flat() -> Self {
        Self {
            half_width: Params::FLAT_HALF_WIDTH,
            half_height: Params::FLAT_HALF_HEIGHT,
            half_length: Params::FLAT_HALF_LENGTH,
            paddle_radius: Params::FLAT_PADDLE_RADIUS,
            ball_radius: Params::FLAT_BALL_RADIUS,
            paddle_offset: Params::FLAT_PADDLE_OFFSET,
        }
    }

    /// Half extent of the table along an axis
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.half_width,
            Axis::Y => self.half_height,
            Axis::Z => self.half_length,
        }
    }

    /// Scale factors from a normalized pointer to paddle coordinates (x by W, y by L)
    pub fn pointer_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_length)
    }

    /// Clamp a paddle coordinate into `[-extent + R, extent - R]`
    pub fn clamp_paddle(&self, value: f32, extent: f32) -> f32 {
        let limit = extent - self.paddle_radius;
        value.clamp(-limit, limit)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::table()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and greater than zero")]
    NonPositive { field: &'static str },
    #[error("paddle radius {radius} must be smaller than the half extent {extent}")]
    PaddleTooWide { radius: f32, extent: f32 },
    #[error("paddle offset {offset} plus radius {radius} exceeds the rally half extent {extent}")]
    PaddleOffsetOutOfRange { offset: f32, radius: f32, extent: f32 },
    #[error("paddle boost {0} must be at least 1.0")]
    BoostNotAmplifying(f32),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    pub bounds: Bounds,
    pub paddle_speed: f32,
    pub serve_speed: f32,
    pub paddle_boost: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::table()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table() -> Self {
        Self {
            variant: Variant::Table,
            bounds: Bounds::table(),
            paddle_speed: Params::PADDLE_SPEED,
            serve_speed: Params::SERVE_SPEED,
            paddle_boost: Params::PADDLE_BOOST,
        }
    }

    pub fn flat() -> Self {
        Self {
            variant: Variant::Flat,
            bounds: Bounds::flat(),
            ..Self::table()
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Table => Self::table(),
            Variant::Flat => Self::flat(),
        }
    }

    pub fn axes(&self) -> AxisMap {
        AxisMap::for_variant(self.variant)
    }

    /// Check the geometry invariants before a simulation is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        let positive = [
            ("half_width", b.half_width),
            ("half_height", b.half_height),
            ("half_length", b.half_length),
            ("paddle_radius", b.paddle_radius),
            ("ball_radius", b.ball_radius),
            ("paddle_offset", b.paddle_offset),
            ("paddle_speed", self.paddle_speed),
            ("serve_speed", self.serve_speed),
            ("paddle_boost", self.paddle_boost),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field });
            }
        }

        let axes = self.axes();
        for extent in [b.half_width, b.half_length, b.extent(axes.paddle_free)] {
            if b.paddle_radius >= extent {
                return Err(ConfigError::PaddleTooWide {
                    radius: b.paddle_radius,
                    extent,
                });
            }
        }

        let rally_extent = b.extent(axes.rally);
        if b.paddle_offset + b.paddle_radius > rally_extent {
            return Err(ConfigError::PaddleOffsetOutOfRange {
                offset: b.paddle_offset,
                radius: b.paddle_radius,
                extent: rally_extent,
            });
        }

        if self.paddle_boost < 1.0 {
            return Err(ConfigError::BoostNotAmplifying(self.paddle_boost));
        }

        Ok(())
    }

    /// Control scheme of each paddle: the table pairs a pointer with the arrow keys
    pub fn control(&self, side: Side) -> PaddleControl {
        match (self.variant, side) {
            (Variant::Table, Side::Left) => PaddleControl::Pointer,
            _ => PaddleControl::Keys,
        }
    }

    /// Resting position of a paddle: left at `-Z`, right at `+Z` on the rally axis
    pub fn paddle_rest(&self, side: Side) -> Vec3 {
        let mut pos = Vec3::ZERO;
        self.axes()
            .rally
            .set(&mut pos, side.sign() * self.bounds.paddle_offset);
        pos
    }
}
