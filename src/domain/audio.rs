use std::time::Duration;

/// Engine loop played for the current vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineTrack {
    Helicopter,
    Drone,
}

impl EngineTrack {
    pub fn file_name(self) -> &'static str {
        match self {
            EngineTrack::Helicopter => "helicopterSound.mp3",
            EngineTrack::Drone => "droneSound.mp3",
        }
    }
}

/// Intent for the audio subsystem, produced by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    /// Load the track into a fresh player and start it.
    Play(EngineTrack),
    Pause,
    /// Fade the current player toward `level` (0.0..=1.0).
    SetVolume { level: f32, fade: Duration },
}
