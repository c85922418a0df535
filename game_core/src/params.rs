/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 420.0; // pixels per second
    pub const PADDLE_MARGIN: f32 = 20.0; // distance from the edge to the paddle centre

    // Ball
    pub const BALL_RADIUS: f32 = 7.5;
    pub const BALL_SPEED_BASE: f32 = 300.0;
    pub const BALL_SPEED_MAX: f32 = 900.0;
    pub const BALL_SPEED_UP: f32 = 1.05; // Multiply speed on paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    pub const SERVE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    pub const SPIN_FACTOR: f32 = 0.2;

    pub const TRAIL_LENGTH: usize = 3; // Past positions drawn behind the ball

    // AI
    pub const AI_SPEED_FACTOR: f32 = 0.8;
    pub const AI_DEAD_ZONE: f32 = 5.0;
    pub const AI_GAIN: f32 = 8.0; // per second: 1/8 s to close the gap at full gain

    // Score
    pub const WIN_SCORE: u32 = 10; // First to 10 wins

    // Loop
    pub const FPS: u32 = 60;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const MAX_SUBSTEPS: u32 = 8;
    pub const MIN_FPS: u32 = 10; // 1 / MAX_DT, slower frames would lose time

    // Sound
    pub const SOUND_VOLUME: f32 = 0.7;
}
