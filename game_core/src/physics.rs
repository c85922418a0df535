//! Ball physics
//!
//! Pure functions over borrowed entities. Nothing here touches the world,
//! the score or any I/O; the systems in `systems::collision` and
//! `systems::scoring` apply these to the components they own.

use glam::Vec2;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::playfield::{Aabb, Playfield};

/// Steepest return allowed off a paddle, as |vy| / |vx|
pub const MAX_RETURN_SLOPE: f32 = 0.75;

/// What happened to the ball during one resolve pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub wall: bool,
    /// Paddle the ball bounced off
    pub paddle: Option<Side>,
    /// Side that scored because the ball left the field
    pub goal: Option<Side>,
}

/// Move the ball along its velocity
pub fn advance(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}

/// Reflect off the top or bottom wall
///
/// Only a ball moving into a wall bounces; vy is negated and the ball is
/// put back inside, so |vy| is unchanged. Returns true on a bounce.
pub fn wall_bounce(ball: &mut Ball, field: &Playfield) -> bool {
    let r = ball.radius;
    if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        true
    } else if ball.pos.y + r >= field.height && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = field.height - r;
        true
    } else {
        clamp_to_walls(ball, field);
        false
    }
}

/// Keep the ball between the walls without touching its velocity
pub fn clamp_to_walls(ball: &mut Ball, field: &Playfield) {
    ball.pos.y = field.clamp_y(ball.pos.y, ball.radius);
}

/// Whether the ball overlaps the paddle while travelling toward it
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let approaching = ball.vel.x * paddle.side.forward() < 0.0;
    approaching && Aabb::of_circle(ball.pos, ball.radius).overlaps(&Aabb::of_paddle(paddle))
}

/// Return velocity after hitting `paddle`
///
/// The offset of the ball from the paddle centre (-1 top .. 1 bottom) maps
/// linearly onto the bounce angle. A moving paddle adds spin to the
/// vertical component. The result always has speed
/// `min(|v| * speed_up, max)`.
pub fn return_velocity(ball: &Ball, paddle: &Paddle, config: &Config) -> Vec2 {
    let half_height = paddle.size.y / 2.0;
    let offset = ((ball.pos.y - paddle.y) / half_height).clamp(-1.0, 1.0);
    let speed = (ball.speed() * config.ball_speed_up).min(config.ball_speed_max);

    let angle = offset * config.max_bounce_angle;
    let mut dir = Vec2::new(paddle.side.forward() * angle.cos(), angle.sin());

    if paddle.vy != 0.0 && speed > 0.0 {
        dir.y += paddle.vy * config.spin_factor / speed;
        dir = dir.normalize();
    }

    if dir.y.abs() > dir.x.abs() * MAX_RETURN_SLOPE {
        dir = Vec2::new(dir.x.signum(), dir.y.signum() * MAX_RETURN_SLOPE).normalize();
    }

    dir * speed
}

/// Bounce the ball off `paddle` if they touch. Returns true on a hit.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    if !touches_paddle(ball, paddle) {
        return false;
    }

    ball.vel = return_velocity(ball, paddle, config);
    // Push ball out of the paddle face
    ball.pos.x = paddle.face_x() + paddle.side.forward() * ball.radius;
    true
}

/// Side that scores if the ball has fully left the field
pub fn goal_scored(ball: &Ball, field: &Playfield) -> Option<Side> {
    if ball.pos.x + ball.radius < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x - ball.radius > field.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Resolve collisions for a ball that has already moved this step
///
/// A paddle hit takes precedence over a wall bounce in the same step.
pub fn resolve(ball: &mut Ball, paddles: &[Paddle], field: &Playfield, config: &Config) -> Contact {
    let mut contact = Contact::default();

    contact.paddle = paddles
        .iter()
        .find(|paddle| paddle_bounce(ball, paddle, config))
        .map(|paddle| paddle.side);

    if contact.paddle.is_some() {
        clamp_to_walls(ball, field);
    } else {
        contact.wall = wall_bounce(ball, field);
    }

    contact.goal = goal_scored(ball, field);
    contact
}

/// Repair a ball whose state went non-finite
///
/// This is a physics defect: debug builds stop here, release builds put
/// the ball back in play. Returns true if a repair was needed.
pub fn guard_ball(ball: &mut Ball, field: &Playfield, config: &Config) -> bool {
    if ball.pos.is_finite() && ball.vel.is_finite() {
        return false;
    }
    debug_assert!(false, "ball left the finite plane: {ball:?}");
    ball.pos = field.ball_spawn();
    ball.vel = Vec2::new(config.ball_speed_base, 0.0);
    true
}

/// Repair a paddle whose centre went non-finite; see `guard_ball`
pub fn guard_paddle(paddle: &mut Paddle, field: &Playfield) -> bool {
    if paddle.y.is_finite() && paddle.vy.is_finite() {
        return false;
    }
    debug_assert!(false, "paddle left the finite plane: {paddle:?}");
    paddle.y = field.height / 2.0;
    paddle.vy = 0.0;
    true
}
