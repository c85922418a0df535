use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// 24-bit colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const SILVER: Rgb = Rgb(220, 220, 220);

    /// Mix toward `other`; `t` = 0 keeps self, 1 gives other
    pub fn blend(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Colours used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub highlight: Rgb,
    /// Lit edge of a paddle
    pub shade: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
            highlight: Rgb::YELLOW,
            shade: Rgb::SILVER,
        }
    }
}

/// Game configuration
///
/// Built once at startup and handed out by reference; nothing mutates it
/// while a match is running.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_max: f32,
    pub ball_speed_up: f32,
    pub max_bounce_angle: f32,
    pub serve_angle: f32,
    pub spin_factor: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
    pub ai_gain: f32,
    /// Predict the intercept (one wall bounce) instead of chasing the ball
    pub ai_lookahead: bool,
    pub win_score: u32,
    pub fps: u32,
    pub palette: Palette,
    pub sound_enabled: bool,
    pub sound_volume: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Paddle".to_string(),
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_up: Params::BALL_SPEED_UP,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_angle: Params::SERVE_ANGLE,
            spin_factor: Params::SPIN_FACTOR,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_gain: Params::AI_GAIN,
            ai_lookahead: false,
            win_score: Params::WIN_SCORE,
            fps: Params::FPS,
            palette: Palette::default(),
            sound_enabled: true,
            sound_volume: Params::SOUND_VOLUME,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and return the config, for use at startup
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Reject values that cannot produce a playable match
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_base", self.ball_speed_base),
            ("ball_speed_max", self.ball_speed_max),
            ("ai_speed_factor", self.ai_speed_factor),
            ("ai_gain", self.ai_gain),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("spin_factor", self.spin_factor),
            ("ai_dead_zone", self.ai_dead_zone),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(0.0..FRAC_PI_2).contains(&self.serve_angle) {
            return Err(ConfigError::ServeAngle(self.serve_angle));
        }
        // A return must always send the ball back across the net
        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < FRAC_PI_2) {
            return Err(ConfigError::BounceAngle(self.max_bounce_angle));
        }

        if self.paddle_height >= self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.ball_radius * 2.0 >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                diameter: self.ball_radius * 2.0,
                field: self.field_height,
            });
        }
        let half_width = self.paddle_width / 2.0;
        if self.paddle_margin < half_width
            || self.paddle_margin + half_width >= self.field_width / 2.0
        {
            return Err(ConfigError::PaddleMargin {
                margin: self.paddle_margin,
                width: self.field_width,
            });
        }
        if self.ball_speed_base > self.ball_speed_max {
            return Err(ConfigError::SpeedRange {
                base: self.ball_speed_base,
                max: self.ball_speed_max,
            });
        }
        if !(self.ball_speed_up >= 1.0 && self.ball_speed_up.is_finite()) {
            return Err(ConfigError::SpeedUpFactor(self.ball_speed_up));
        }
        if self.win_score == 0 {
            return Err(ConfigError::WinningScore);
        }
        // Frames longer than the step clamp would run the match in slow motion
        if self.fps < Params::MIN_FPS {
            return Err(ConfigError::FrameRate(self.fps));
        }
        if !(0.0..=1.0).contains(&self.sound_volume) {
            return Err(ConfigError::Volume(self.sound_volume));
        }
        Ok(())
    }

    /// Fixed simulation step in seconds
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Wall-clock budget for one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    /// Get X position of the paddle centre for a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin,
        }
    }

    /// Clamp paddle centre Y so the whole paddle stays on the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.field_height - half_height)
    }

    /// Fastest the AI paddle may move
    pub fn ai_max_speed(&self) -> f32 {
        self.paddle_speed * self.ai_speed_factor
    }
}
