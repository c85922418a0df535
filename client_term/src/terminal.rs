//! Terminal frontend: crossterm input, ratatui output

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use game_core::{Config, DrawList, Frontend, InputSnapshot, Playfield};
use ratatui::DefaultTerminal;

use crate::input::KeyTracker;
use crate::render;

pub struct TerminalFrontend {
    terminal: DefaultTerminal,
    keys: KeyTracker,
    field: Playfield,
    /// Key release reporting was switched on and must be switched off again
    enhanced: bool,
}

impl TerminalFrontend {
    pub fn new(terminal: DefaultTerminal, config: &Config) -> Self {
        let enhanced = matches!(crossterm::terminal::supports_keyboard_enhancement(), Ok(true))
            && execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .is_ok();
        if enhanced {
            log::info!("Terminal reports key releases");
        } else {
            log::info!("No key release events, holding keys by timeout");
        }

        Self {
            terminal,
            keys: KeyTracker::default(),
            field: Playfield::from_config(config),
            enhanced,
        }
    }
}

impl Frontend for TerminalFrontend {
    fn poll_input(&mut self) -> io::Result<InputSnapshot> {
        // Process all pending events without blocking the frame
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.keys.handle(&key, Instant::now());
            }
        }
        Ok(self.keys.snapshot(Instant::now()))
    }

    fn present(&mut self, frame: &DrawList) -> io::Result<()> {
        let field = self.field;
        self.terminal
            .draw(|f| render::draw(f, frame, &field))?;
        Ok(())
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        if self.enhanced {
            if let Err(err) = execute!(io::stdout(), PopKeyboardEnhancementFlags) {
                log::warn!("Failed to restore keyboard mode: {err}");
            }
        }
    }
}
