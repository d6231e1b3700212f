// Headless engine audio: resolves track files on disk and logs playback instead of
// driving a sound device.

use crate::domain::ports::{AudioBackend, AudioPlayer};
use crate::domain::{AudioError, EngineTrack};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
pub struct HeadlessAudioBackend {
    assets_dir: PathBuf,
}

impl HeadlessAudioBackend {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }
}

impl AudioBackend for HeadlessAudioBackend {
    type Player = HeadlessPlayer;

    fn load(&mut self, track: EngineTrack) -> Result<HeadlessPlayer, AudioError> {
        let path = self.assets_dir.join(track.file_name());
        let metadata =
            std::fs::metadata(&path).map_err(|source| AudioError::TrackUnavailable {
                track: track.file_name(),
                source,
            })?;
        if !metadata.is_file() {
            return Err(AudioError::TrackUnavailable {
                track: track.file_name(),
                source: std::io::Error::other(format!("{} is not a file", path.display())),
            });
        }

        Ok(HeadlessPlayer {
            track,
            volume: 1.0,
            playing: false,
        })
    }
}

#[derive(Debug)]
pub struct HeadlessPlayer {
    track: EngineTrack,
    volume: f32,
    playing: bool,
}

#[cfg(test)]
impl HeadlessPlayer {
    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioPlayer for HeadlessPlayer {
    fn play(&mut self) {
        self.playing = true;
        info!(track = self.track.file_name(), volume = self.volume, "engine play");
    }

    fn pause(&mut self) {
        self.playing = false;
        info!(track = self.track.file_name(), "engine pause");
    }

    // The fade is reported, not rendered; the target level applies immediately.
    fn set_volume(&mut self, level: f32, fade: Duration) {
        self.volume = level;
        info!(
            track = self.track.file_name(),
            level,
            fade_ms = fade.as_millis() as u64,
            playing = self.playing,
            "engine volume"
        );
    }
}
