use crate::components::Side;
use crate::frontend::SoundEvent;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Award a point to `side`
    pub fn record(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from OS entropy, for real matches
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    /// Side that scored this step, if any
    pub fn scorer(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Sound cues for this step, one per occurrence
    pub fn sounds(&self) -> impl Iterator<Item = SoundEvent> {
        [
            (self.ball_hit_wall, SoundEvent::WallHit),
            (self.ball_hit_paddle, SoundEvent::PaddleHit),
            (self.left_scored || self.right_scored, SoundEvent::Score),
        ]
        .into_iter()
        .filter_map(|(fired, sound)| fired.then_some(sound))
    }
}

/// Pending paddle directions from human players
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pub inputs: Vec<(Side, i8)>, // (side, direction)
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, dir: i8) {
        self.inputs.push((side, dir));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.record(Side::Left);
        assert_eq!(score.left, 2);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        assert_eq!(score.right, 0);
        score.increment_right();
        assert_eq!(score.right, 1);
        score.record(Side::Right);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment_left();
        }
        assert_eq!(
            score.has_winner(10),
            Some(Side::Left),
            "Left player should win at 10"
        );
    }

    #[test]
    fn test_score_has_winner_right() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment_right();
        }
        assert_eq!(
            score.has_winner(10),
            Some(Side::Right),
            "Right player should win at 10"
        );
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score { left: 9, right: 9 };
        assert_eq!(score.has_winner(10), None, "No winner below threshold");
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert_eq!(events.sounds().count(), 0);
    }

    #[test]
    fn test_events_sounds_once_per_occurrence() {
        let events = Events {
            ball_hit_wall: true,
            right_scored: true,
            ..Events::new()
        };
        let sounds: Vec<_> = events.sounds().collect();
        assert_eq!(sounds, vec![SoundEvent::WallHit, SoundEvent::Score]);
        assert_eq!(events.scorer(), Some(Side::Right));
    }

    #[test]
    fn test_intent_queue_push_and_clear() {
        let mut queue = IntentQueue::new();
        queue.push_input(Side::Left, -1);
        queue.push_input(Side::Right, 1);

        assert_eq!(queue.inputs.len(), 2);
        assert_eq!(queue.inputs[0], (Side::Left, -1));
        assert_eq!(queue.inputs[1], (Side::Right, 1));

        queue.clear();
        assert!(queue.inputs.is_empty());
    }
}
