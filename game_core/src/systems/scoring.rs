use crate::{physics, Ball, Config, Events, GameRng, Playfield, Score, Side};
use hecs::World;

/// Check if ball left the field (scoring)
///
/// The scorer gets a point and the ball is served from the centre at base
/// speed toward the side that conceded.
pub fn check_scoring(
    world: &mut World,
    field: &Playfield,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(scorer) = physics::goal_scored(ball, field) else {
            continue;
        };

        score.record(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::debug!("{:?} scored, {} - {}", scorer, score.left, score.right);

        ball.reset(
            field.ball_spawn(),
            config.ball_speed_base,
            config.serve_angle,
            scorer.opponent(),
            rng,
        );
    }
}
