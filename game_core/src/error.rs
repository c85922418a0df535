//! Error types for the game core.

use thiserror::Error;

/// A configuration value that cannot produce a playable match.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size, speed or rate that must be strictly positive.
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A tuning value that may be zero but never negative.
    #[error("{field} must be zero or positive and finite, got {value}")]
    Negative {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Serves must head toward a goal.
    #[error("serve angle must be within 0 <= angle < pi/2 radians, got {0}")]
    ServeAngle(f32),

    /// A paddle return at pi/2 or more never crosses back over the net.
    #[error("max bounce angle must be within 0 < angle < pi/2 radians, got {0}")]
    BounceAngle(f32),

    /// Paddles taller than the playfield cannot move.
    #[error("paddle height {paddle} does not fit in playfield height {field}")]
    PaddleTooTall {
        /// Configured paddle height.
        paddle: f32,
        /// Configured playfield height.
        field: f32,
    },

    /// The ball must fit between the walls.
    #[error("ball diameter {diameter} does not fit in playfield height {field}")]
    BallTooLarge {
        /// Configured ball diameter.
        diameter: f32,
        /// Configured playfield height.
        field: f32,
    },

    /// Paddles must sit inside the playfield, left of centre and right of centre.
    #[error("paddle margin {margin} places paddles outside the playfield of width {width}")]
    PaddleMargin {
        /// Configured margin.
        margin: f32,
        /// Configured playfield width.
        width: f32,
    },

    /// Base speed above the cap would make the cap meaningless.
    #[error("base ball speed {base} exceeds maximum ball speed {max}")]
    SpeedRange {
        /// Configured base speed.
        base: f32,
        /// Configured maximum speed.
        max: f32,
    },

    /// Paddle hits must speed the ball up, never slow it down.
    #[error("speed-up factor must be at least 1.0, got {0}")]
    SpeedUpFactor(f32),

    /// A match needs at least one point to win.
    #[error("winning score must be at least 1")]
    WinningScore,

    /// Frames longer than the 0.1 s step clamp lose simulated time.
    #[error("frame rate must be at least 10, got {0}")]
    FrameRate(u32),

    /// Volumes are fractions of full scale.
    #[error("sound volume must be within 0.0..=1.0, got {0}")]
    Volume(f32),
}
