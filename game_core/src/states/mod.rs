//! Screens and the machine that switches between them
//!
//! Each screen has `update` and `render`. `update` never switches screens
//! itself; it returns a [`Transition`] request that the [`StateMachine`]
//! validates and applies once the update has returned.

pub mod game_over;
pub mod machine;
pub mod menu;
pub mod playing;

pub use game_over::*;
pub use machine::*;
pub use menu::*;
pub use playing::*;

use crate::components::{MatchKind, Side};
use crate::fsm::GameAction;
use crate::resources::Score;

/// A screen change requested during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start(MatchKind),
    Finish {
        kind: MatchKind,
        winner: Side,
        score: Score,
    },
    Leave,
    Continue,
    Restart(MatchKind),
    Quit,
}

impl Transition {
    /// Table action this request is checked against
    pub fn action(&self) -> GameAction {
        match self {
            Transition::Start(_) => GameAction::StartMatch,
            Transition::Finish { .. } => GameAction::GameOver,
            Transition::Leave => GameAction::Leave,
            Transition::Continue => GameAction::Continue,
            Transition::Restart(_) => GameAction::Restart,
            Transition::Quit => GameAction::Quit,
        }
    }
}
