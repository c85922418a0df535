mod audio;
mod input;
mod render;
mod terminal;

use std::fs::File;

use anyhow::{Context, Result};
use game_core::{Config, Engine, Silent, SoundSink};

use crate::audio::RodioSink;
use crate::terminal::TerminalFrontend;

fn main() -> Result<()> {
    init_logging()?;

    let config = Config::default()
        .validated()
        .context("Invalid game configuration")?;
    let sound = open_audio(&config);

    // Installs a panic hook that restores the terminal
    let terminal = ratatui::try_init().context("Failed to set up the terminal")?;
    let result = run(&config, terminal, sound);
    ratatui::restore();

    result
}

fn run(
    config: &Config,
    terminal: ratatui::DefaultTerminal,
    sound: Box<dyn SoundSink>,
) -> Result<()> {
    let frontend = TerminalFrontend::new(terminal, config);
    let mut engine = Engine::new(config, frontend, sound);
    engine.run().context("Game loop failed")?;
    Ok(())
}

/// Log to a file; the terminal belongs to the game
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join("paddle.log");
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    log::info!("Logging to {}", path.display());
    Ok(())
}

fn open_audio(config: &Config) -> Box<dyn SoundSink> {
    if !config.sound_enabled {
        log::info!("Sound disabled");
        return Box::new(Silent);
    }
    match RodioSink::new(config.sound_volume) {
        Ok(sink) => Box::new(sink),
        Err(err) => {
            log::warn!("No audio output, running silent: {err}");
            Box::new(Silent)
        }
    }
}
