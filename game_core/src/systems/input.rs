use hecs::World;

use crate::input::{key_speed, pointer_target, InputSnapshot};
use crate::{Config, Paddle, PaddleControl, PaddleIntent};

/// Turn the tick's input snapshot into paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputSnapshot, config: &Config) {
    for (_entity, (paddle, control, intent)) in
        world.query_mut::<(&Paddle, &PaddleControl, &mut PaddleIntent)>()
    {
        *intent = match control {
            PaddleControl::Pointer => PaddleIntent {
                target: Some(pointer_target(input.pointer, &config.bounds)),
                speed: 0.0,
            },
            PaddleControl::Keys => PaddleIntent {
                target: None,
                speed: key_speed(input.keys_held, paddle.side, config.paddle_speed),
            },
        };
    }
}
