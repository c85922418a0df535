use crate::{ai, Ball, Config, Controller, Paddle, Playfield};
use hecs::World;

/// Set the velocity of every AI-driven paddle from the current ball
pub fn drive_ai_paddles(world: &mut World, field: &Playfield, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller == Controller::Ai {
            paddle.vy = ai::paddle_velocity(&ball, paddle, field, config);
        }
    }
}
