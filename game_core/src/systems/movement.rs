use crate::{physics, Ball, Config, Controller, Paddle, PaddleIntent, Time};
use hecs::World;

/// Turn human intents into paddle velocity
pub fn apply_intents(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if paddle.controller == Controller::Human {
            paddle.vy = intent.dir as f32 * config.paddle_speed;
        }
    }
}

/// Move paddles along their velocity, stopping at the walls
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.vy == 0.0 {
            continue;
        }
        let y = paddle.y + paddle.vy * time.dt;
        paddle.y = config.clamp_paddle_y(y);

        // A paddle pinned against a wall is not moving
        if paddle.y != y {
            paddle.vy = 0.0;
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        physics::advance(ball, time.dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, MatchKind, Side};
    use glam::Vec2;

    fn paddle_y(world: &World) -> (f32, f32) {
        world
            .query::<&Paddle>()
            .iter()
            .next()
            .map(|(_e, p)| (p.y, p.vy))
            .unwrap_or_default()
    }

    #[test]
    fn test_paddle_moves_with_intent() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, &config, Side::Left, Controller::Human);
        world
            .insert_one(entity, PaddleIntent { dir: 1 })
            .expect("paddle exists");

        apply_intents(&mut world, &config);
        move_paddles(&mut world, &Time::new(0.5, 0.0), &config);

        let (y, vy) = paddle_y(&world);
        assert_eq!(y, 300.0 + 0.5 * config.paddle_speed, "Paddle should move down");
        assert_eq!(vy, config.paddle_speed);
    }

    #[test]
    fn test_paddle_clamped_at_top_wall() {
        let mut world = World::new();
        let config = Config::new();
        let controller = MatchKind::TwoPlayer.controller(Side::Right);
        let entity = create_paddle(&mut world, &config, Side::Right, controller);
        world
            .insert_one(entity, PaddleIntent { dir: -1 })
            .expect("paddle exists");

        apply_intents(&mut world, &config);
        for _ in 0..200 {
            move_paddles(&mut world, &Time::default(), &config);
            let (y, _vy) = paddle_y(&world);
            let top = y - config.paddle_height / 2.0;
            assert!(top >= 0.0, "Paddle top should stay on the field");
        }

        let (y, vy) = paddle_y(&world);
        assert_eq!(y, config.paddle_height / 2.0);
        assert_eq!(vy, 0.0, "Pinned paddle has no velocity");
    }

    #[test]
    fn test_ai_paddle_ignores_intent() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, &config, Side::Right, Controller::Ai);
        world
            .insert_one(entity, PaddleIntent { dir: 1 })
            .expect("paddle exists");

        apply_intents(&mut world, &config);
        assert_eq!(paddle_y(&world).1, 0.0);
    }

    #[test]
    fn test_ball_moves_along_velocity() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, &config, Vec2::new(400.0, 300.0), Vec2::new(60.0, -30.0));

        move_ball(&mut world, &Time::new(0.5, 0.0));

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(430.0, 285.0));
        }
    }
}
