//! AI opponent
//!
//! Strategy:
//! 1. If the ball is coming toward us, track its y (or, with lookahead,
//!    the y where it will cross our face after at most one wall bounce).
//! 2. If it is moving away, drift back to the centre to cover the most
//!    ground.
//! 3. Inside the dead zone, hold still to avoid jitter.
//!
//! Everything here is a pure function of its inputs.

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::playfield::Playfield;

/// Whether the ball is travelling toward `paddle`
pub fn is_approaching(ball: &Ball, paddle: &Paddle) -> bool {
    ball.vel.x * paddle.side.forward() < 0.0
}

/// Y where the ball will cross the paddle face, folding in one wall bounce
pub fn predict_intercept(ball: &Ball, paddle: &Paddle, field: &Playfield) -> f32 {
    if ball.vel.x == 0.0 {
        return ball.pos.y;
    }
    let time_to_reach = ((paddle.face_x() - ball.pos.x) / ball.vel.x).max(0.0);
    let y = ball.pos.y + ball.vel.y * time_to_reach;

    let lo = ball.radius;
    let hi = field.height - ball.radius;
    let y = if y < lo {
        2.0 * lo - y
    } else if y > hi {
        2.0 * hi - y
    } else {
        y
    };
    y.clamp(lo, hi)
}

/// Y the paddle centre should head for
pub fn target_y(ball: &Ball, paddle: &Paddle, field: &Playfield, config: &Config) -> f32 {
    if !is_approaching(ball, paddle) {
        field.height / 2.0
    } else if config.ai_lookahead {
        predict_intercept(ball, paddle, field)
    } else {
        ball.pos.y
    }
}

/// Vertical velocity for an AI paddle, px/s, positive = down
pub fn paddle_velocity(ball: &Ball, paddle: &Paddle, field: &Playfield, config: &Config) -> f32 {
    let diff = target_y(ball, paddle, field, config) - paddle.y;
    if diff.abs() <= config.ai_dead_zone {
        return 0.0;
    }
    let max_speed = config.ai_max_speed();
    (diff * config.ai_gain).clamp(-max_speed, max_speed)
}
