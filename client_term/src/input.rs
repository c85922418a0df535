//! Keyboard input handling

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputSnapshot, Key};

/// How long a key counts as held after its last press, when the terminal
/// never reports releases
pub const HOLD_TIMEOUT: Duration = Duration::from_millis(300);

/// Map a terminal key to a game key
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char('w' | 'W') => Key::W,
        KeyCode::Char('s' | 'S') => Key::S,
        KeyCode::Enter | KeyCode::Char(' ') => Key::Confirm,
        KeyCode::Esc => Key::Back,
        KeyCode::Char('p' | 'P') => Key::Pause,
        KeyCode::Char('r' | 'R') => Key::Restart,
        KeyCode::Char('q' | 'Q') => Key::Quit,
        _ => return None,
    };
    Some(key)
}

/// Turns a stream of terminal key events into held and pressed sets
#[derive(Debug)]
pub struct KeyTracker {
    held: HashMap<Key, Instant>,
    pressed: HashSet<Key>,
    hold_timeout: Duration,
    /// Set once the terminal has reported a release
    sees_releases: bool,
}

impl KeyTracker {
    pub fn new(hold_timeout: Duration) -> Self {
        Self {
            held: HashMap::new(),
            pressed: HashSet::new(),
            hold_timeout,
            sees_releases: false,
        }
    }

    pub fn handle(&mut self, event: &KeyEvent, now: Instant) {
        let Some(key) = map_key(event) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press => {
                self.pressed.insert(key);
                self.held.insert(key, now);
            }
            KeyEventKind::Repeat => {
                self.held.insert(key, now);
            }
            KeyEventKind::Release => {
                self.sees_releases = true;
                self.held.remove(&key);
            }
        }
    }

    /// Keys for this frame; presses are consumed
    pub fn snapshot(&mut self, now: Instant) -> InputSnapshot {
        if !self.sees_releases {
            let timeout = self.hold_timeout;
            self.held
                .retain(|_, last| now.saturating_duration_since(*last) < timeout);
        }
        InputSnapshot {
            held: self.held.keys().copied().collect(),
            pressed: std::mem::take(&mut self.pressed),
        }
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new(HOLD_TIMEOUT)
    }
}
