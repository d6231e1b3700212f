// Shared fixtures for driving a spawned game in integration tests.
#![allow(dead_code)]

use landing_game::domain::ports::{AudioBackend, AudioPlayer};
use landing_game::domain::{Arena, AudioError, EngineTrack, GameTuning};
use landing_game::use_cases::{FlightSnapshot, GameHandle, GameSettings, Simulation, spawn_game};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

// Upper bound for any single wait; paused time makes this instant when nothing happens.
pub const WAIT: Duration = Duration::from_secs(30);

// An arena exactly the size of the vehicle: every spawn lands on the origin, so the vehicle
// always starts on top of the pad.
pub fn pinned_tuning() -> GameTuning {
    GameTuning {
        arena: Arena {
            screen_width: 150.0,
            screen_height: 150.0,
            vehicle_size: 150.0,
            pad_size: 130.0,
            control_bar_inset: 0.0,
        },
        ..GameTuning::default()
    }
}

pub fn settings() -> GameSettings {
    GameSettings {
        input_channel_capacity: 64,
        notice_broadcast_capacity: 64,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Load(EngineTrack),
    Play(EngineTrack),
    Pause(EngineTrack),
    Volume(EngineTrack, f32),
}

// Audio backend that records every call; optionally refuses to load anything.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub calls: Arc<Mutex<Vec<AudioCall>>>,
    pub fail_loads: bool,
}

impl RecordingAudio {
    pub fn failing() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

pub struct RecordingPlayer {
    track: EngineTrack,
    calls: Arc<Mutex<Vec<AudioCall>>>,
}

impl RecordingPlayer {
    fn record(&self, call: AudioCall) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

impl AudioBackend for RecordingAudio {
    type Player = RecordingPlayer;

    fn load(&mut self, track: EngineTrack) -> Result<RecordingPlayer, AudioError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(AudioCall::Load(track));
        if self.fail_loads {
            return Err(AudioError::TrackUnavailable {
                track: track.file_name(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(RecordingPlayer {
            track,
            calls: self.calls.clone(),
        })
    }
}

impl AudioPlayer for RecordingPlayer {
    fn play(&mut self) {
        self.record(AudioCall::Play(self.track));
    }

    fn pause(&mut self) {
        self.record(AudioCall::Pause(self.track));
    }

    fn set_volume(&mut self, level: f32, _fade: Duration) {
        self.record(AudioCall::Volume(self.track, level));
    }
}

pub fn spawn_pinned(audio: RecordingAudio) -> GameHandle {
    let simulation = Simulation::new(pinned_tuning(), StdRng::seed_from_u64(1));
    spawn_game(&settings(), simulation, audio)
}

// Waits until a published frame satisfies `ready`, and returns a copy of it.
// The borrow is released before returning so the game task is never blocked.
pub async fn wait_for_frame(
    frame_rx: &mut watch::Receiver<FlightSnapshot>,
    ready: impl FnMut(&FlightSnapshot) -> bool,
) -> FlightSnapshot {
    let frame = tokio::time::timeout(WAIT, frame_rx.wait_for(ready))
        .await
        .expect("timed out waiting for frame")
        .expect("game task stopped");
    frame.clone()
}
