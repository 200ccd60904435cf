//! Best-effort beeps and the looping jingle, synthesized on the fly.
//!
//! Audio is optional: with no output device the game plays on in
//! silence. Each sound is rendered into a sample buffer and handed to a
//! detached sink, so playback never blocks the game loop.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const SAMPLE_RATE: u32 = 44_100;
/// Each tone fades exponentially to this level over its duration.
const ENVELOPE_FLOOR: f64 = 0.001;

/// One jingle step; lead notes land every fourth step, bass every second.
const MELODY_STEP_MS: u64 = 150;
/// Jingle Bells, or close enough at 0.01 gain.
const MELODY_LEAD: [f64; 7] = [392.0, 329.63, 293.66, 261.63, 392.0, 392.0, 392.0];
const MELODY_BASS: [f64; 8] = [
    130.81, 130.81, 130.81, 130.81, 146.83, 146.83, 164.81, 196.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Square,
    Triangle,
    Sawtooth,
}

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    /// Open the default output device, or `None` to run silent.
    pub fn new() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream: stream,
            handle,
        })
    }

    pub fn play_tone(&self, freq: f64, wave: Wave, duration_s: f64, gain: f64) {
        self.play_samples(render_tone(freq, wave, duration_s, gain));
    }

    fn play_samples(&self, samples: Vec<f32>) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }

    pub fn jump(&self) {
        self.play_tone(600.0, Wave::Square, 0.1, 0.05);
    }

    pub fn collect(&self) {
        self.play_tone(880.0, Wave::Triangle, 0.2, 0.1);
    }

    pub fn hit(&self) {
        self.play_tone(150.0, Wave::Sawtooth, 0.3, 0.2);
    }
}

/// Render one oscillator tone with an exponential fade-out.
fn render_tone(freq: f64, wave: Wave, duration_s: f64, gain: f64) -> Vec<f32> {
    let gain = gain.max(ENVELOPE_FLOOR);
    let count = (SAMPLE_RATE as f64 * duration_s) as usize;
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 / SAMPLE_RATE as f64;
        let phase = (t * freq).fract();
        let shape = match wave {
            Wave::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Wave::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
            Wave::Sawtooth => 2.0 * phase - 1.0,
        };
        let envelope = (ENVELOPE_FLOOR / gain).powf(t / duration_s);
        samples.push((shape * gain * envelope) as f32);
    }
    samples
}

/// Start the looping jingle on its own thread. The thread opens its own
/// output stream; flip `stop` to end it within one step.
pub fn spawn_melody(stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        let audio = match Audio::new() {
            Some(audio) => audio,
            None => return,
        };

        let mut step: usize = 0;
        while !stop.load(Ordering::Relaxed) {
            if step % 2 == 0 {
                audio.play_tone(
                    MELODY_BASS[(step / 2) % MELODY_BASS.len()],
                    Wave::Triangle,
                    0.4,
                    0.015,
                );
            }
            if step % 4 == 0 {
                audio.play_tone(
                    MELODY_LEAD[(step / 4) % MELODY_LEAD.len()],
                    Wave::Square,
                    0.15,
                    0.01,
                );
            }
            step += 1;
            thread::sleep(Duration::from_millis(MELODY_STEP_MS));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length_matches_duration() {
        let samples = render_tone(440.0, Wave::Square, 0.15, 0.1);
        assert_eq!(samples.len(), (SAMPLE_RATE as f64 * 0.15) as usize);
    }

    #[test]
    fn test_tone_fades_toward_silence() {
        let samples = render_tone(440.0, Wave::Square, 0.2, 0.1);
        let first = samples[0].abs();
        let last = samples[samples.len() - 1].abs();
        assert!(first > last);
        assert!(last < 0.01);
    }

    #[test]
    fn test_waves_stay_within_gain() {
        for wave in [Wave::Square, Wave::Triangle, Wave::Sawtooth] {
            let samples = render_tone(220.0, wave, 0.1, 0.2);
            assert!(samples.iter().all(|s| s.abs() <= 0.2 + 1e-6));
            assert!(samples.iter().any(|s| *s > 0.0));
            assert!(samples.iter().any(|s| *s < 0.0));
        }
    }

    #[test]
    fn test_audio_init_is_best_effort() {
        // Must not panic even on machines with no output device
        let _ = Audio::new();
    }

    #[test]
    fn test_melody_stops_on_request() {
        let stop = Arc::new(AtomicBool::new(true));
        let handle = spawn_melody(Arc::clone(&stop));
        handle.join().unwrap();
    }
}
