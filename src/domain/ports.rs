use std::time::Duration;

use crate::domain::audio::EngineTrack;
use crate::domain::errors::AudioError;

// Port for the platform audio engine used by the audio subsystem.
pub trait AudioBackend: Send {
    type Player: AudioPlayer;

    /// Prepares a new player for `track`, at full volume and paused.
    fn load(&mut self, track: EngineTrack) -> Result<Self::Player, AudioError>;
}

// A single loaded engine sound.
pub trait AudioPlayer: Send {
    fn play(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, level: f32, fade: Duration);
}
