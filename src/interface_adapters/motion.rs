// Motion sampler adapter: raw attitude callbacks in, game events out.

use crate::domain::{OrientationSample, SensorError};
use crate::use_cases::GameEvent;
use tokio::sync::mpsc;

/// What a platform motion callback delivers: an attitude, or an error instead of one.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionReading {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub error: Option<String>,
}

impl MotionReading {
    pub fn attitude(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            pitch,
            roll,
            yaw,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            error: Some(message.into()),
        }
    }

    pub fn into_sample(self) -> Result<OrientationSample, SensorError> {
        if let Some(message) = self.error {
            return Err(SensorError::Delivery(message));
        }
        OrientationSample::new(self.pitch, self.roll, self.yaw)
    }
}

impl From<MotionReading> for GameEvent {
    fn from(reading: MotionReading) -> Self {
        GameEvent::Motion(reading.into_sample())
    }
}

/// The game task is gone; nothing will consume further readings.
#[derive(Debug)]
pub struct FeedClosed;

/// Sender side of the motion queue. Readings are forwarded in arrival order; when the
/// queue is full the sampler waits instead of dropping readings.
#[derive(Clone)]
pub struct MotionFeed {
    input_tx: mpsc::Sender<GameEvent>,
}

impl MotionFeed {
    pub fn new(input_tx: mpsc::Sender<GameEvent>) -> Self {
        Self { input_tx }
    }

    pub async fn deliver(&self, reading: MotionReading) -> Result<(), FeedClosed> {
        self.input_tx
            .send(reading.into())
            .await
            .map_err(|_| FeedClosed)
    }
}
