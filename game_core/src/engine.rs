//! Frame loop driver
//!
//! Per frame: poll input, run zero or more fixed simulation steps, render,
//! then sleep off the rest of the frame budget.

use std::collections::HashSet;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::frontend::{DrawList, Frontend, InputSnapshot, Key, SoundSink};
use crate::params::Params;
use crate::states::StateMachine;

/// Fixed timestep accumulator.
/// Keeps the simulation rate independent of frame time.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_frame: f32,
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_frame: Params::MAX_DT,
            max_steps: Params::MAX_SUBSTEPS,
        }
    }

    /// Add frame time and return how many fixed steps are due
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        // A long stall (debugger, suspended terminal) must not fast-forward the match
        self.accumulator += frame_dt.clamp(0.0, self.max_frame);
        let due = (self.accumulator / self.dt + 1e-4) as u32;
        let steps = due.min(self.max_steps);
        self.accumulator = (self.accumulator - steps as f32 * self.dt).max(0.0);
        if due > steps {
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Runs a [`StateMachine`] against a frontend and a sound sink
pub struct Engine<'c, F, S> {
    config: &'c Config,
    machine: StateMachine<'c>,
    frontend: F,
    sound: S,
    timestep: FixedTimestep,
    frame: DrawList,
    /// Presses seen in frames that ran no step
    pending: HashSet<Key>,
}

impl<'c, F: Frontend, S: SoundSink> Engine<'c, F, S> {
    pub fn new(config: &'c Config, frontend: F, sound: S) -> Self {
        Self::with_machine(config, StateMachine::new(config), frontend, sound)
    }

    pub fn with_machine(
        config: &'c Config,
        machine: StateMachine<'c>,
        frontend: F,
        sound: S,
    ) -> Self {
        Self {
            config,
            machine,
            frontend,
            sound,
            timestep: FixedTimestep::new(config.fixed_dt()),
            frame: DrawList::new(),
            pending: HashSet::new(),
        }
    }

    pub fn machine(&self) -> &StateMachine<'c> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut StateMachine<'c> {
        &mut self.machine
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    /// Run one frame that took `elapsed` of wall time
    ///
    /// Returns false once the game has quit; nothing is rendered then.
    pub fn frame(&mut self, elapsed: Duration) -> io::Result<bool> {
        let mut input = self.frontend.poll_input()?;
        input.pressed.extend(self.pending.drain());

        let steps = self.timestep.accumulate(elapsed.as_secs_f32());
        if steps == 0 {
            self.pending = std::mem::take(&mut input.pressed);
        }

        let dt = self.timestep.dt();
        for _ in 0..steps {
            self.machine.update(dt, &input);
            // One-shot presses belong to the first step only
            input = input.held_only();

            for event in self.machine.drain_sounds() {
                self.sound.play(event);
            }
            if !self.machine.is_running() {
                return Ok(false);
            }
        }

        self.machine.render(&mut self.frame);
        self.frontend.present(&self.frame)?;
        Ok(true)
    }

    /// Drive frames at the configured rate until the game quits
    pub fn run(&mut self) -> io::Result<()> {
        let budget = self.config.frame_duration();
        let mut last = Instant::now();
        log::info!("Engine running at {} fps", self.config.fps);

        loop {
            let start = Instant::now();
            let elapsed = start - last;
            last = start;

            if !self.frame(elapsed)? {
                break;
            }

            let spent = start.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }

        log::info!("Engine stopped");
        Ok(())
    }
}

/// Frontend that replays scripted input and keeps every frame, for headless runs
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    pub script: std::collections::VecDeque<InputSnapshot>,
    pub frames: Vec<DrawList>,
}

impl ScriptedFrontend {
    pub fn new(script: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            script: script.into_iter().collect(),
            frames: Vec::new(),
        }
    }
}

impl Frontend for ScriptedFrontend {
    /// Empty input once the script runs out
    fn poll_input(&mut self) -> io::Result<InputSnapshot> {
        Ok(self.script.pop_front().unwrap_or_default())
    }

    fn present(&mut self, frame: &DrawList) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
