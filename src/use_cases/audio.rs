// Engine sound ownership: one player handle, replaced whenever the track (re)starts.

use crate::domain::ports::{AudioBackend, AudioPlayer};
use crate::domain::{AudioCommand, EngineTrack};
use tracing::{debug, error};

pub struct AudioSubsystem<B: AudioBackend> {
    backend: B,
    player: Option<B::Player>,
    track: Option<EngineTrack>,
}

impl<B: AudioBackend> AudioSubsystem<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            player: None,
            track: None,
        }
    }

    pub fn apply(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::Play(track) => self.start(track),
            AudioCommand::Pause => {
                if let Some(player) = self.player.as_mut() {
                    player.pause();
                }
            }
            AudioCommand::SetVolume { level, fade } => {
                if let Some(player) = self.player.as_mut() {
                    player.set_volume(level.clamp(0.0, 1.0), fade);
                }
            }
        }
    }

    // A fresh player per start, so playback always begins at full volume.
    fn start(&mut self, track: EngineTrack) {
        if let Some(mut previous) = self.player.take() {
            debug!(track = ?self.track, "engine sound replaced");
            previous.pause();
        }
        self.track = None;

        match self.backend.load(track) {
            Ok(mut player) => {
                debug!(track = track.file_name(), "engine sound started");
                player.play();
                self.player = Some(player);
                self.track = Some(track);
            }
            Err(e) => {
                // Not fatal: the game continues without engine sound.
                error!(error = %e, "failed to load engine sound");
            }
        }
    }
}

#[cfg(test)]
impl<B: AudioBackend> AudioSubsystem<B> {
    fn track(&self) -> Option<EngineTrack> {
        self.track
    }

    fn has_player(&self) -> bool {
        self.player.is_some()
    }
}
