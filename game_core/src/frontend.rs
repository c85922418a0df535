//! Boundary traits between the simulation and whatever shows it
//!
//! The core never talks to a terminal or an audio device. It reads an
//! [`InputSnapshot`], draws into a [`Surface`] and emits [`SoundEvent`]s;
//! a [`Frontend`] and a [`SoundSink`] do the rest.

use std::collections::HashSet;
use std::io;

use glam::Vec2;

use crate::config::Rgb;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Confirm,
    Back,
    Pause,
    Restart,
    Quit,
}

/// Keyboard state for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Keys currently held down
    pub held: HashSet<Key>,
    /// Keys that went down since the last poll
    pub pressed: HashSet<Key>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press and hold `key`
    pub fn with_pressed(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.held.insert(key);
        self
    }

    /// Hold `key` without a fresh press
    pub fn with_held(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key) || self.pressed.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// -1 for `up`, 1 for `down`, 0 for neither or both
    pub fn axis(&self, up: Key, down: Key) -> i8 {
        self.is_held(down) as i8 - self.is_held(up) as i8
    }

    /// Same held keys, presses already consumed
    pub fn held_only(&self) -> Self {
        Self {
            held: self.held.clone(),
            pressed: HashSet::new(),
        }
    }
}

/// Text sizes the renderers know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

/// Something a surface can draw. Positions are in playfield units.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangle anchored at its top-left corner
    Rect { size: Vec2 },
    /// Circle anchored at its centre
    Circle { radius: f32 },
    /// Vertical dashed line from y = 0 down `length`, anchored at its top
    CenterLine { length: f32, dash: f32 },
    /// Label anchored at its centre
    Text { text: String, size: TextSize },
}

pub trait Surface {
    /// Wipe the surface to a single colour
    fn clear(&mut self, color: Rgb);

    fn draw(&mut self, shape: Shape, pos: Vec2, color: Rgb);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub pos: Vec2,
    pub color: Rgb,
}

/// Surface that records draw calls for a frontend to replay
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub background: Rgb,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// All text labels in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match &cmd.shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text == needle)
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.commands.clear();
    }

    fn draw(&mut self, shape: Shape, pos: Vec2, color: Rgb) {
        self.commands.push(DrawCommand { shape, pos, color });
    }
}

/// Sound cues raised by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    WallHit,
    PaddleHit,
    Score,
}

pub trait SoundSink {
    /// Fire and forget; must not block the frame
    fn play(&mut self, event: SoundEvent);
}

/// Sink used when audio is disabled or unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _event: SoundEvent) {}
}

impl<S: SoundSink + ?Sized> SoundSink for Box<S> {
    fn play(&mut self, event: SoundEvent) {
        (**self).play(event);
    }
}

/// Recording sink for headless runs
impl SoundSink for Vec<SoundEvent> {
    fn play(&mut self, event: SoundEvent) {
        self.push(event);
    }
}

/// Where input comes from and frames go to
pub trait Frontend {
    /// Called once per frame before any update
    fn poll_input(&mut self) -> io::Result<InputSnapshot>;

    fn present(&mut self, frame: &DrawList) -> io::Result<()>;
}
