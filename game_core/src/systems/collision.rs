use crate::{physics, Ball, Config, Events, Paddle, Playfield};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
) {
    // Copy paddles out so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let contact = physics::resolve(ball, &paddles, field, config);
        if contact.paddle.is_some() {
            events.ball_hit_paddle = true;
        }
        if contact.wall {
            events.ball_hit_wall = true;
        }
    }
}

/// Re-centre anything that left the finite plane
pub fn guard_invariants(world: &mut World, field: &Playfield, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if physics::guard_ball(ball, field, config) {
            log::warn!("Ball state was not finite, re-centred");
        }
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if physics::guard_paddle(paddle, field) {
            log::warn!("{:?} paddle state was not finite, re-centred", paddle.side);
        }
    }
}
