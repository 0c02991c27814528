use crate::config::{AxisMap, Bounds};
use crate::geometry::Aabb;
use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec3;
use hecs::World;

/// Check ball collisions with walls, then the left and right paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let axes = config.axes();
    let bounds = &config.bounds;

    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, Vec3)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.pos))
        .collect();
    // Left before right
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls: pure reflection, no position correction
        let h = axes.height.of(ball.pos);
        let limit = bounds.extent(axes.height);
        if h + bounds.ball_radius > limit || h - bounds.ball_radius < -limit {
            let vh = axes.height.of(ball.vel);
            axes.height.set(&mut ball.vel, -vh);
            events.ball_hit_wall = true;
        }

        for &(side, paddle_pos) in &paddles {
            if !ball_touches_paddle(ball.pos, paddle_pos, &axes, bounds) {
                continue;
            }

            // Send the ball toward the opponent and speed it up.
            // Penetration is left alone; the new direction carries it out.
            let speed = axes.rally.of(ball.vel).abs() * config.paddle_boost;
            axes.rally.set(&mut ball.vel, -side.sign() * speed);
            events.ball_hit_paddle = true;
            tracing::debug!(?side, speed, "ball hit paddle");
        }
    }
}

/// Box overlap on the rally and height axes plus a proximity check on the cross axis
pub fn ball_touches_paddle(ball: Vec3, paddle: Vec3, axes: &AxisMap, bounds: &Bounds) -> bool {
    let ball_box = Aabb::around(ball, bounds.ball_radius);
    let paddle_box = Aabb::around(paddle, bounds.paddle_radius);
    let cross = axes.cross();

    ball_box.overlaps_on_all(&paddle_box, &[axes.rally, axes.height])
        && (cross.of(ball) - cross.of(paddle)).abs() < bounds.paddle_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events};

    fn setup_world(config: &Config) -> (hecs::World, Events) {
        let mut world = hecs::World::new();
        create_paddle(&mut world, config, Side::Left);
        create_paddle(&mut world, config, Side::Right);
        (world, Events::new())
    }

    fn only_ball(world: &hecs::World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball present");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);
        let top = config.bounds.half_height - config.bounds.ball_radius + 0.05;
        let ball_vel = Vec3::new(0.2, 0.15, 0.0);
        create_ball(&mut world, Vec3::new(0.0, top, 0.0), ball_vel);

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.y, -0.15, "Y velocity should be inverted");
        assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert_eq!(ball.pos.y, top, "Wall reflection does not move the ball");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);
        let bottom = -config.bounds.half_height + config.bounds.ball_radius - 0.05;
        create_ball(
            &mut world,
            Vec3::new(0.0, bottom, 0.0),
            Vec3::new(0.0, -0.3, 0.2),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.y, 0.3);
        assert_eq!(ball.vel.y.abs(), 0.3, "Reflection keeps speed");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_hit_inside_table() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);
        create_ball(&mut world, Vec3::ZERO, Vec3::new(0.2, 0.1, 0.2));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(only_ball(&world).vel, Vec3::new(0.2, 0.1, 0.2));
        assert!(!events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);
        let paddle_z = -config.bounds.paddle_offset;
        let ball_pos = Vec3::new(0.3, 0.0, paddle_z + 0.5);
        create_ball(&mut world, ball_pos, Vec3::new(0.0, 0.0, -0.2));

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!(
            (ball.vel.z - 0.2 * config.paddle_boost).abs() < 1e-6,
            "Ball should leave the left paddle 10% faster toward +z, got {}",
            ball.vel.z
        );
        assert_eq!(ball.pos, ball_pos, "No overlap correction");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);
        let paddle_z = config.bounds.paddle_offset;
        create_ball(
            &mut world,
            Vec3::new(-0.2, 0.4, paddle_z - 1.2),
            Vec3::new(0.1, 0.0, 0.25),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!((ball.vel.z + 0.25 * config.paddle_boost).abs() < 1e-6);
        assert_eq!(ball.vel.x, 0.1, "Cross velocity untouched");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_hit_is_forced_away_even_when_already_leaving() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);
        // Still overlapping the left paddle on the frame after a hit
        create_ball(
            &mut world,
            Vec3::new(0.0, 0.0, -config.bounds.paddle_offset),
            Vec3::new(0.0, 0.0, 0.22),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!(ball.vel.z > 0.0, "Direction stays toward the opponent");
        assert!((ball.vel.z - 0.22 * config.paddle_boost).abs() < 1e-6);
    }

    #[test]
    fn test_ball_misses_paddle_on_cross_axis() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);
        // Overlaps on z and y but too far along x
        create_ball(
            &mut world,
            Vec3::new(config.bounds.paddle_radius + 0.1, 0.0, -config.bounds.paddle_offset),
            Vec3::new(0.0, 0.0, -0.2),
        );

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(only_ball(&world).vel.z, -0.2);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_flat_variant_rallies_on_x() {
        let config = Config::flat();
        let (mut world, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            Vec3::new(config.bounds.paddle_offset - 0.5, 0.5, 0.0),
            Vec3::new(0.2, 0.1, 0.0),
        );

        check_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!((ball.vel.x + 0.2 * config.paddle_boost).abs() < 1e-6);
        assert_eq!(ball.vel.y, 0.1);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let config = Config::table();
        let (mut world, mut events) = setup_world(&config);

        // Should not panic or error
        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
