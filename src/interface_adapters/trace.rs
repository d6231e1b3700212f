// Recorded motion traces: JSON lines replayed by the runner in place of a live sampler.

use crate::interface_adapters::motion::MotionReading;
use crate::interface_adapters::protocol::TraceMessage;
use crate::use_cases::GameEvent;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// One replay instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceStep {
    Send(GameEvent),
    Wait(Duration),
}

impl TraceStep {
    /// True for steps that stand in for one sampler tick.
    pub fn is_sample(&self) -> bool {
        matches!(self, TraceStep::Send(GameEvent::Motion(_)))
    }
}

impl From<TraceMessage> for TraceStep {
    fn from(message: TraceMessage) -> Self {
        match message {
            TraceMessage::Sample(sample) => TraceStep::Send(
                MotionReading::attitude(sample.pitch, sample.roll, sample.yaw).into(),
            ),
            TraceMessage::SensorError { message } => {
                TraceStep::Send(MotionReading::failed(message).into())
            }
            TraceMessage::ToggleVehicle => TraceStep::Send(GameEvent::ToggleVehicleKind),
            TraceMessage::ToggleSound => TraceStep::Send(GameEvent::ToggleSound),
            TraceMessage::RequestRestart => TraceStep::Send(GameEvent::RequestRestart),
            TraceMessage::ConfirmRestart => TraceStep::Send(GameEvent::ConfirmRestart),
            TraceMessage::CancelRestart => TraceStep::Send(GameEvent::CancelRestart),
            TraceMessage::Wait { millis } => TraceStep::Wait(Duration::from_millis(millis)),
        }
    }
}

#[derive(Debug)]
pub struct TraceError {
    pub line: usize,
    pub source: serde_json::Error,
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trace line {}: {}", self.line, self.source)
    }
}

impl std::error::Error for TraceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Parses a single line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<TraceStep>, TraceError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str::<TraceMessage>(line)
        .map(|message| Some(message.into()))
        .map_err(|source| TraceError {
            line: line_number,
            source,
        })
}

/// Parses a whole trace, skipping (and logging) malformed lines.
pub fn parse_trace(text: &str) -> Vec<TraceStep> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| match parse_line(index + 1, line) {
            Ok(step) => step,
            Err(e) => {
                warn!(error = %e, "skipping malformed trace line");
                None
            }
        })
        .collect()
}

pub async fn load_trace(path: &Path) -> std::io::Result<Vec<TraceStep>> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(parse_trace(&text))
}
