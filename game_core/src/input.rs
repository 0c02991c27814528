//! Per-tick input snapshot and the mapping from raw input to paddle intents

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::config::Bounds;

/// Direction keys understood by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Map a DOM-style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" | "A" => Some(Key::A),
            "d" | "D" => Some(Key::D),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Key::A => 1,
            Key::D => 1 << 1,
            Key::ArrowLeft => 1 << 2,
            Key::ArrowRight => 1 << 3,
        }
    }

    /// (negative, positive) keys driving a side's paddle
    pub fn pair_for(side: Side) -> (Key, Key) {
        match side {
            Side::Left => (Key::A, Key::D),
            Side::Right => (Key::ArrowLeft, Key::ArrowRight),
        }
    }
}

/// Set of held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysHeld(u8);

impl KeysHeld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    /// Handle a key down event by name; unknown keys are ignored
    pub fn handle_key_down(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.press(key);
        }
    }

    /// Handle a key up event by name; unknown keys are ignored
    pub fn handle_key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.release(key);
        }
    }
}

/// Everything the host hands the core for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Normalized pointer, nominally in `[-1, 1]` on both axes
    pub pointer: Vec2,
    pub keys_held: KeysHeld,
    /// Edge-triggered
    pub start_requested: bool,
    /// Edge-triggered
    pub pause_toggle_requested: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = Vec2::new(x, y);
        self
    }

    pub fn with_keys(mut self, keys_held: KeysHeld) -> Self {
        self.keys_held = keys_held;
        self
    }

    pub fn start() -> Self {
        Self {
            start_requested: true,
            ..Self::default()
        }
    }

    pub fn toggle_pause() -> Self {
        Self {
            pause_toggle_requested: true,
            ..Self::default()
        }
    }
}

/// Speed command for a keyboard paddle: `-v`, `0` or `+v`
pub fn key_speed(keys: KeysHeld, side: Side, speed: f32) -> f32 {
    let (neg, pos) = Key::pair_for(side);
    match (keys.contains(neg), keys.contains(pos)) {
        (true, false) => -speed,
        (false, true) => speed,
        _ => 0.0,
    }
}

/// World-space target for a pointer paddle: `x = nx * W`, `y = ny * L` (unclamped)
pub fn pointer_target(pointer: Vec2, bounds: &Bounds) -> Vec2 {
    pointer * bounds.pointer_extents()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("a"), Some(Key::A));
        assert_eq!(Key::from_name("D"), Some(Key::D));
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_name("ArrowUp"), None);
    }

    #[test]
    fn test_key_down_up() {
        let mut keys = KeysHeld::new();
        keys.handle_key_down("d");
        keys.handle_key_down("Enter");
        assert!(keys.contains(Key::D));
        assert!(!keys.contains(Key::A));

        keys.handle_key_up("d");
        assert_eq!(keys, KeysHeld::new());
    }

    #[test]
    fn test_key_speed_per_side() {
        let keys = KeysHeld::new().with(Key::A).with(Key::ArrowRight);
        assert_eq!(key_speed(keys, Side::Left, 0.1), -0.1);
        assert_eq!(key_speed(keys, Side::Right, 0.1), 0.1);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let keys = KeysHeld::new().with(Key::ArrowLeft).with(Key::ArrowRight);
        assert_eq!(key_speed(keys, Side::Right, 0.1), 0.0);
        assert_eq!(key_speed(KeysHeld::new(), Side::Left, 0.1), 0.0);
    }

    #[test]
    fn test_pointer_target_scales_by_width_and_length() {
        let bounds = Bounds::table();
        let target = pointer_target(Vec2::new(1.0, -0.5), &bounds);
        assert_eq!(target.x, bounds.half_width);
        assert_eq!(target.y, -0.5 * bounds.half_length);
    }
}
