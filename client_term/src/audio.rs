//! Procedural sound effects through rodio

use game_core::{SoundEvent, SoundSink};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

const SAMPLE_RATE: u32 = 44_100;

/// Shape of one effect: a sine sweep with a decaying envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub seconds: f32,
}

impl Tone {
    pub fn for_event(event: SoundEvent) -> Self {
        match event {
            SoundEvent::WallHit => Tone {
                start_hz: 440.0,
                end_hz: 440.0,
                seconds: 0.05,
            },
            SoundEvent::PaddleHit => Tone {
                start_hz: 880.0,
                end_hz: 880.0,
                seconds: 0.06,
            },
            SoundEvent::Score => Tone {
                start_hz: 660.0,
                end_hz: 220.0,
                seconds: 0.3,
            },
        }
    }

    /// Mono samples in -volume..=volume
    pub fn samples(&self, sample_rate: u32, volume: f32) -> Vec<f32> {
        let count = (self.seconds * sample_rate as f32) as usize;
        let mut phase = 0.0f32;
        (0..count)
            .map(|i| {
                let t = i as f32 / count as f32;
                let freq = self.start_hz + (self.end_hz - self.start_hz) * t;
                phase += std::f32::consts::TAU * freq / sample_rate as f32;
                let envelope = (1.0 - t) * (1.0 - t);
                phase.sin() * envelope * volume
            })
            .collect()
    }
}

/// Plays effects on the default output device
pub struct RodioSink {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    volume: f32,
}

impl RodioSink {
    pub fn new(volume: f32) -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            volume,
        })
    }
}

impl SoundSink for RodioSink {
    fn play(&mut self, event: SoundEvent) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                let samples = Tone::for_event(event).samples(SAMPLE_RATE, self.volume);
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
                sink.detach();
            }
            Err(err) => log::warn!("Skipping {event:?} sound: {err}"),
        }
    }
}
