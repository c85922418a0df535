use crate::components::MatchKind;
use crate::config::Config;
use crate::frontend::{InputSnapshot, SoundEvent, Surface};
use crate::fsm::{GameFsm, Mode};
use crate::resources::GameRng;

use super::{GameOverState, MenuState, PlayingState, Transition};

/// The active screen and the data it owns
pub enum Screen {
    Menu(MenuState),
    Playing(Box<PlayingState>),
    GameOver(GameOverState),
    Exited,
}

/// Owns the one active screen and applies transitions between ticks
pub struct StateMachine<'c> {
    config: &'c Config,
    fsm: GameFsm,
    screen: Screen,
    sounds: Vec<SoundEvent>,
    /// Fixed seed for new matches; entropy when unset
    seed: Option<u64>,
}

impl<'c> StateMachine<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            fsm: GameFsm::new(),
            screen: Screen::Menu(MenuState::new()),
            sounds: Vec::new(),
            seed: None,
        }
    }

    /// Deterministic matches, for tests and replays of a bug
    pub fn with_seed(config: &'c Config, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    pub fn mode(&self) -> Mode {
        self.fsm.mode()
    }

    pub fn is_running(&self) -> bool {
        !self.fsm.is_exited()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn playing(&self) -> Option<&PlayingState> {
        match &self.screen {
            Screen::Playing(playing) => Some(&**playing),
            _ => None,
        }
    }

    pub fn playing_mut(&mut self) -> Option<&mut PlayingState> {
        match &mut self.screen {
            Screen::Playing(playing) => Some(&mut **playing),
            _ => None,
        }
    }

    /// Sounds raised since the last drain
    pub fn drain_sounds(&mut self) -> std::vec::Drain<'_, SoundEvent> {
        self.sounds.drain(..)
    }

    /// Update the active screen, then apply any transition it requested
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) {
        let config = self.config;
        let request = match &mut self.screen {
            Screen::Menu(menu) => menu.update(input),
            Screen::Playing(playing) => {
                let request = playing.update(config, dt, input);
                self.sounds.extend(playing.events.sounds());
                request
            }
            Screen::GameOver(over) => over.update(input),
            Screen::Exited => None,
        };

        if let Some(transition) = request {
            self.apply(transition);
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match &self.screen {
            Screen::Menu(menu) => menu.render(self.config, surface),
            Screen::Playing(playing) => playing.render(self.config, surface),
            Screen::GameOver(over) => over.render(self.config, surface),
            Screen::Exited => surface.clear(self.config.palette.background),
        }
    }

    /// Validate `transition` against the table and switch screens
    ///
    /// Returns false, leaving everything as it was, if the move is not
    /// legal from the current mode.
    pub fn apply(&mut self, transition: Transition) -> bool {
        let action = transition.action();
        if !self.fsm.can_transition(action) {
            log::warn!("Rejected {:?} while in {:?}", transition, self.fsm.mode());
            return false;
        }
        let result = self.fsm.transition(action);
        log::info!("{:?} -> {:?} ({:?})", result.from, result.to, result.action);

        self.screen = match transition {
            Transition::Start(kind) | Transition::Restart(kind) => {
                Screen::Playing(Box::new(self.new_match(kind)))
            }
            Transition::Finish {
                kind,
                winner,
                score,
            } => {
                log::info!("{:?} won {} - {}", winner, score.left, score.right);
                Screen::GameOver(GameOverState::new(kind, winner, score))
            }
            Transition::Leave | Transition::Continue => Screen::Menu(MenuState::new()),
            Transition::Quit => Screen::Exited,
        };
        true
    }

    fn new_match(&self, kind: MatchKind) -> PlayingState {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        PlayingState::new(self.config, kind, rng)
    }
}
