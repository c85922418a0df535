//! Game State Machine
//!
//! The transition table for the screens. It only knows which moves are
//! legal; building the next screen is `states::StateMachine`'s job.

/// Screens the game can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver,
    /// Terminal: the process is shutting down
    Exited,
}

/// Actions that trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    StartMatch,
    GameOver,
    /// Back to the menu from a running match
    Leave,
    /// Dismiss the game-over screen
    Continue,
    Restart,
    Quit,
}

/// Result of a mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Mode,
    pub to: Mode,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    mode: Mode,
}

impl GameFsm {
    pub fn new() -> Self {
        Self { mode: Mode::Menu }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        next_mode(self.mode, action).is_some()
    }

    /// Attempt a transition; an invalid one leaves the mode unchanged
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.mode;

        match next_mode(from, action) {
            Some(to) => {
                self.mode = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    pub fn is_exited(&self) -> bool {
        self.mode == Mode::Exited
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

/// Get next mode for a given action (if valid)
pub fn next_mode(mode: Mode, action: GameAction) -> Option<Mode> {
    match (mode, action) {
        // From Menu
        (Mode::Menu, GameAction::StartMatch) => Some(Mode::Playing),

        // From Playing
        (Mode::Playing, GameAction::GameOver) => Some(Mode::GameOver),
        (Mode::Playing, GameAction::Leave) => Some(Mode::Menu),
        (Mode::Playing, GameAction::Restart) => Some(Mode::Playing),

        // From GameOver
        (Mode::GameOver, GameAction::Continue) => Some(Mode::Menu),
        (Mode::GameOver, GameAction::Restart) => Some(Mode::Playing),

        // Quit works from any live mode
        (Mode::Menu | Mode::Playing | Mode::GameOver, GameAction::Quit) => Some(Mode::Exited),

        // Invalid transition
        _ => None,
    }
}
