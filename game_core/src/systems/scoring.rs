use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if ball left the table (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let exit = config.axes().exit;
    let limit = config.bounds.extent(exit) + config.bounds.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let pos = exit.of(ball.pos);
        if pos > limit {
            // Left player scores
            score.increment_left();
            events.left_scored = true;

            // Re-serve away from the side the ball left through
            ball.reset(-1.0, config, rng);
            tracing::info!(left = score.left, right = score.right, "left player scored");
        } else if pos < -limit {
            // Right player scores
            score.increment_right();
            events.right_scored = true;

            ball.reset(1.0, config, rng);
            tracing::info!(left = score.left, right = score.right, "right player scored");
        }
    }
}
