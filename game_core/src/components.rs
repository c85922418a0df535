use glam::Vec2;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction pointing from this side toward the other
    pub fn forward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Which kind of match is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    SinglePlayer,
    TwoPlayer,
}

impl MatchKind {
    /// Who drives the paddle on `side` in this kind of match
    pub fn controller(self, side: Side) -> Controller {
        match (self, side) {
            (MatchKind::SinglePlayer, Side::Right) => Controller::Ai,
            _ => Controller::Human,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchKind::SinglePlayer => "Single Player",
            MatchKind::TwoPlayer => "Two Players",
        }
    }
}

/// Paddle component - a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,  // centre X, fixed per side
    pub y: f32,  // centre Y (clamped to field)
    pub vy: f32, // pixels per second, positive = down
    pub size: Vec2,
    pub controller: Controller,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, size: Vec2, controller: Controller) -> Self {
        Self {
            side,
            x,
            y,
            vy: 0.0,
            size,
            controller,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Y of the top edge
    pub fn top(&self) -> f32 {
        self.y - self.size.y / 2.0
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// X of the face the ball bounces off
    pub fn face_x(&self) -> f32 {
        self.x + self.side.forward() * self.size.x / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Reset ball to the centre, served at `speed` toward `toward`
    ///
    /// The serve angle is drawn uniformly from `-max_angle..=max_angle`.
    pub fn reset(
        &mut self,
        center: Vec2,
        speed: f32,
        max_angle: f32,
        toward: Side,
        rng: &mut crate::GameRng,
    ) {
        use rand::Rng;
        self.pos = center;
        let angle: f32 = rng.0.gen_range(-max_angle..=max_angle);
        // Serving toward the left paddle means travelling in -X
        let dir = toward.opponent().forward();
        self.vel = Vec2::new(dir * angle.cos(), angle.sin()) * speed;
    }
}

/// Movement intent for a human paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
