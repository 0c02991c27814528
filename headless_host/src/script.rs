//! Scripted players standing in for a mouse and a keyboard

use game_core::{Config, InputSnapshot, Key, KeysHeld, PaddleControl, RenderState, Side};
use glam::Vec2;

const DEADZONE: f32 = 0.3;

/// Build the next tick's input from the last rendered state.
///
/// Strategy (both players):
/// 1. Pointer paddle: aim the pointer at the ball's projection on the table.
/// 2. Keyboard paddle: hold the key toward the ball on the free axis, release inside the deadzone.
pub fn next_input(last: &RenderState, config: &Config, tick: u64) -> InputSnapshot {
    let mut input = InputSnapshot::new();
    input.start_requested = tick == 0;

    let free = config.axes().paddle_free;
    let mut keys = KeysHeld::new();
    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => last.left_paddle,
            Side::Right => last.right_paddle,
        };
        match config.control(side) {
            PaddleControl::Pointer => {
                let extents = config.bounds.pointer_extents();
                let aim = Vec2::new(last.ball.x, last.ball.y) / extents;
                input.pointer = aim.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
            }
            PaddleControl::Keys => {
                let diff = free.of(last.ball) - free.of(paddle);
                let (neg, pos) = Key::pair_for(side);
                if diff > DEADZONE {
                    keys.press(pos);
                } else if diff < -DEADZONE {
                    keys.press(neg);
                }
            }
        }
    }
    input.keys_held = keys;
    input
}
