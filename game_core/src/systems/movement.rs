use crate::config::Axis;
use crate::{Ball, Config, Paddle, PaddleControl, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents, then clamp into the table
pub fn move_paddles(world: &mut World, config: &Config) {
    let bounds = &config.bounds;
    let free = config.axes().paddle_free;

    for (_entity, (paddle, control, intent)) in
        world.query_mut::<(&mut Paddle, &PaddleControl, &PaddleIntent)>()
    {
        match control {
            PaddleControl::Pointer => {
                if let Some(target) = intent.target {
                    paddle.pos.x = target.x;
                    paddle.pos.y = target.y;
                }
                // Clamp every tick, not only on input
                paddle.pos.x = bounds.clamp_paddle(paddle.pos.x, bounds.half_width);
                paddle.pos.y = bounds.clamp_paddle(paddle.pos.y, bounds.half_length);
            }
            PaddleControl::Keys => {
                let moved = free.of(paddle.pos) + intent.speed;
                free.set(&mut paddle.pos, bounds.clamp_paddle(moved, bounds.extent(free)));
            }
        }

        debug_assert!(
            paddle_in_bounds(paddle, *control, config),
            "paddle {:?} left its clamp range: {:?}",
            paddle.side,
            paddle.pos
        );
    }
}

/// Every free coordinate of the paddle lies in `[-extent + R, extent - R]`
pub fn paddle_in_bounds(paddle: &Paddle, control: PaddleControl, config: &Config) -> bool {
    let bounds = &config.bounds;
    let within = |value: f32, extent: f32| value.abs() <= extent - bounds.paddle_radius;
    match control {
        PaddleControl::Pointer => {
            within(paddle.pos.x, bounds.half_width) && within(paddle.pos.y, bounds.half_length)
        }
        PaddleControl::Keys => {
            let free: Axis = config.axes().paddle_free;
            within(free.of(paddle.pos), bounds.extent(free))
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
