/// Gameplay tuning for the approach and landing cycle.
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingTuning {
    /// Half-size of the square around the pad that slows the vehicle down.
    /// Independent of vehicle kind.
    pub proximity_radius: f64,

    /// Sprite scale (and engine volume) while approaching the pad.
    pub approach_scale: f64,

    /// Fade used when entering or leaving the proximity radius.
    pub proximity_fade_secs: f64,

    /// Engine volume during the landing celebration.
    pub landed_volume: f32,
    pub landed_fade_secs: f64,

    /// Engine volume once the celebration ends.
    pub restore_volume: f32,
    pub restore_fade_secs: f64,

    /// How long the vehicle stays landed before the pad moves.
    pub celebration_secs: f64,
}

impl Default for LandingTuning {
    fn default() -> Self {
        Self {
            proximity_radius: 70.0,
            approach_scale: 0.7,
            proximity_fade_secs: 2.0,
            landed_volume: 0.2,
            landed_fade_secs: 2.0,
            restore_volume: 1.0,
            restore_fade_secs: 1.5,
            celebration_secs: 2.0,
        }
    }
}

fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or_default()
}

impl LandingTuning {
    pub fn proximity_fade(&self) -> Duration {
        secs(self.proximity_fade_secs)
    }

    pub fn landed_fade(&self) -> Duration {
        secs(self.landed_fade_secs)
    }

    pub fn restore_fade(&self) -> Duration {
        secs(self.restore_fade_secs)
    }

    pub fn celebration(&self) -> Duration {
        secs(self.celebration_secs)
    }

    pub fn landing_scale(&self, approaching: bool) -> f64 {
        if approaching { self.approach_scale } else { 1.0 }
    }
}
