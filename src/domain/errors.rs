use std::fmt;

// Domain-level errors. None of these stop the game; callers log and carry on.

/// A motion sample that cannot be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The sampler reported a delivery failure instead of a reading.
    Delivery(String),
    /// The reading contained NaN or infinite angles.
    NonFinite { pitch: f64, roll: f64, yaw: f64 },
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Delivery(message) => write!(f, "motion delivery failed: {message}"),
            SensorError::NonFinite { pitch, roll, yaw } => write!(
                f,
                "non-finite attitude (pitch {pitch}, roll {roll}, yaw {yaw})"
            ),
        }
    }
}

impl std::error::Error for SensorError {}

/// Engine sound could not be prepared. Playback is skipped.
#[derive(Debug)]
pub enum AudioError {
    TrackUnavailable {
        track: &'static str,
        source: std::io::Error,
    },
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::TrackUnavailable { track, source } => {
                write!(f, "engine track {track} unavailable: {source}")
            }
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::TrackUnavailable { source, .. } => Some(source),
        }
    }
}
