// Wire DTOs for the JSON-lines stream: trace lines in, frames and notices out.

use crate::domain::{FlightPhase, Position, VehicleKind};
use crate::use_cases::{FlightSnapshot, GameNotice};
use serde::{Deserialize, Serialize};

/// One line of a recorded motion trace.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TraceMessage {
    // Attitude reading from the motion sampler.
    Sample(SampleDto),
    // Sampler delivery failure.
    SensorError { message: String },
    ToggleVehicle,
    ToggleSound,
    RequestRestart,
    ConfirmRestart,
    CancelRestart,
    // Pause the replay without sending anything.
    Wait { millis: u64 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleDto {
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub roll: f64,
    #[serde(default)]
    pub yaw: f64,
}

/// Messages the runner writes for the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OutputMessage {
    Frame(FrameDto),
    Notice(NoticeDto),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub enum VehicleKindDto {
    Helicopter,
    Drone,
}

impl From<VehicleKind> for VehicleKindDto {
    fn from(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Helicopter => VehicleKindDto::Helicopter,
            VehicleKind::Drone => VehicleKindDto::Drone,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub enum FlightPhaseDto {
    Cruising,
    Approaching,
    Landed,
}

impl From<FlightPhase> for FlightPhaseDto {
    fn from(phase: FlightPhase) -> Self {
        match phase {
            FlightPhase::Cruising => FlightPhaseDto::Cruising,
            FlightPhase::Approaching => FlightPhaseDto::Approaching,
            FlightPhase::Landed => FlightPhaseDto::Landed,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PositionDto {
    pub x: f64,
    pub y: f64,
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        Self {
            x: position.width,
            y: position.height,
        }
    }
}

/// Flattened flight snapshot for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub kind: VehicleKindDto,
    pub vehicle: PositionDto,
    pub pad: PositionDto,
    pub phase: FlightPhaseDto,
    pub scale: f64,
    pub score: u32,
    pub sound: bool,
    pub restart_pending: bool,
}

impl From<&FlightSnapshot> for FrameDto {
    fn from(snapshot: &FlightSnapshot) -> Self {
        Self {
            tick: snapshot.tick,
            kind: snapshot.kind.into(),
            vehicle: snapshot.vehicle.into(),
            pad: snapshot.pad.into(),
            phase: snapshot.phase.into(),
            scale: snapshot.landing_scale,
            score: snapshot.score,
            sound: snapshot.sound_enabled,
            restart_pending: snapshot.restart_pending,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum NoticeDto {
    // Renders the "+points" badge.
    ScorePulse {
        kind: VehicleKindDto,
        points: u32,
        score: u32,
    },
    ScorePulseCleared,
    PadRespawned {
        pad: PositionDto,
    },
    Restarted,
}

impl From<&GameNotice> for NoticeDto {
    fn from(notice: &GameNotice) -> Self {
        match notice {
            GameNotice::Landed {
                kind,
                points,
                score,
            } => NoticeDto::ScorePulse {
                kind: (*kind).into(),
                points: *points,
                score: *score,
            },
            GameNotice::ScorePulseCleared => NoticeDto::ScorePulseCleared,
            GameNotice::PadRespawned { pad } => NoticeDto::PadRespawned { pad: (*pad).into() },
            GameNotice::Restarted => NoticeDto::Restarted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_serializes_with_type_tag() {
        let snapshot = FlightSnapshot {
            tick: 3,
            kind: VehicleKind::Drone,
            vehicle: Position::new(1.5, -2.0),
            pad: Position::ORIGIN,
            phase: FlightPhase::Approaching,
            landing_scale: 0.7,
            flight_speed: 20.0,
            score: 4,
            sound_enabled: false,
            restart_pending: false,
            generation: 2,
        };

        let json = serde_json::to_value(OutputMessage::Frame(FrameDto::from(&snapshot)))
            .expect("frame should serialize");

        assert_eq!(json["type"], "Frame");
        assert_eq!(json["data"]["kind"], "Drone");
        assert_eq!(json["data"]["phase"], "Approaching");
        assert_eq!(json["data"]["vehicle"]["x"], 1.5);
        assert_eq!(json["data"]["score"], 4);
        assert_eq!(json["data"]["sound"], false);
    }

    #[test]
    fn landed_notice_becomes_score_pulse() {
        let notice = GameNotice::Landed {
            kind: VehicleKind::Helicopter,
            points: 1,
            score: 7,
        };

        let json = serde_json::to_value(OutputMessage::Notice(NoticeDto::from(&notice)))
            .expect("notice should serialize");

        assert_eq!(json["type"], "Notice");
        assert_eq!(json["data"]["event"], "ScorePulse");
        assert_eq!(json["data"]["points"], 1);
        assert_eq!(json["data"]["score"], 7);
    }

    #[test]
    fn sample_fields_default_to_zero() {
        let message: TraceMessage =
            serde_json::from_str(r#"{"type":"Sample","data":{"pitch":0.25}}"#)
                .expect("sample should parse");

        match message {
            TraceMessage::Sample(sample) => {
                assert_eq!(sample.pitch, 0.25);
                assert_eq!(sample.roll, 0.0);
                assert_eq!(sample.yaw, 0.0);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn unit_commands_parse_without_data() {
        let message: TraceMessage =
            serde_json::from_str(r#"{"type":"ToggleVehicle"}"#).expect("command should parse");
        assert!(matches!(message, TraceMessage::ToggleVehicle));
    }
}
