use glam::Vec2;

use crate::components::{MatchKind, Side};
use crate::config::Config;
use crate::frontend::{InputSnapshot, Key, Shape, Surface, TextSize};
use crate::resources::Score;

use super::Transition;

/// Final screen of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverState {
    pub kind: MatchKind,
    pub winner: Side,
    pub score: Score,
}

impl GameOverState {
    pub fn new(kind: MatchKind, winner: Side, score: Score) -> Self {
        Self {
            kind,
            winner,
            score,
        }
    }

    pub fn headline(&self) -> &'static str {
        match (self.winner, self.kind) {
            (Side::Left, _) => "Player 1 Wins!",
            (Side::Right, MatchKind::SinglePlayer) => "AI Wins!",
            (Side::Right, MatchKind::TwoPlayer) => "Player 2 Wins!",
        }
    }

    pub fn update(&mut self, input: &InputSnapshot) -> Option<Transition> {
        if input.was_pressed(Key::Quit) {
            Some(Transition::Quit)
        } else if input.was_pressed(Key::Restart) {
            Some(Transition::Restart(self.kind))
        } else if input.was_pressed(Key::Confirm) || input.was_pressed(Key::Back) {
            Some(Transition::Continue)
        } else {
            None
        }
    }

    pub fn render(&self, config: &Config, surface: &mut dyn Surface) {
        let palette = config.palette;
        let center = Vec2::new(config.field_width / 2.0, config.field_height / 2.0);
        surface.clear(palette.background);

        let lines = [
            (self.headline().to_string(), TextSize::Large, palette.highlight, 0.0),
            (
                format!("{} - {}", self.score.left, self.score.right),
                TextSize::Medium,
                palette.foreground,
                50.0,
            ),
            (
                "Press R to restart, ENTER or ESC for menu".to_string(),
                TextSize::Small,
                palette.foreground,
                100.0,
            ),
        ];
        for (text, size, color, dy) in lines {
            surface.draw(Shape::Text { text, size }, center + Vec2::new(0.0, dy), color);
        }
    }
}
