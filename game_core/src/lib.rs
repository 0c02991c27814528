pub mod components;
pub mod config;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one live tick of the table pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputSnapshot,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input, config);

    // 2. Move paddles based on intents, clamped
    move_paddles(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited table)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity at its resting position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, config.paddle_rest(side)),
        config.control(side),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec3, vel: glam::Vec3) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
