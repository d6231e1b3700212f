// Use-case level inputs/outputs for the game loop.

use crate::domain::{AudioCommand, FlightPhase, OrientationSample, Position, SensorError, VehicleKind};
use std::time::Duration;

/// Everything the game task accepts, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Motion(Result<OrientationSample, SensorError>),
    ToggleVehicleKind,
    ToggleSound,
    RequestRestart,
    ConfirmRestart,
    CancelRestart,
}

/// Transient, caller-rendered happenings. Not part of the flight state.
#[derive(Debug, Clone, PartialEq)]
pub enum GameNotice {
    /// Score pulse: show `+points`.
    Landed {
        kind: VehicleKind,
        points: u32,
        score: u32,
    },
    ScorePulseCleared,
    PadRespawned { pad: Position },
    Restarted,
}

/// Read model published to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSnapshot {
    /// Samples applied since the game started.
    pub tick: u64,
    pub kind: VehicleKind,
    pub vehicle: Position,
    pub pad: Position,
    pub phase: FlightPhase,
    pub landing_scale: f64,
    pub flight_speed: f64,
    pub score: u32,
    pub sound_enabled: bool,
    pub restart_pending: bool,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    ClearScorePulse,
    /// Ends the celebration and moves the pad.
    FinishLanding,
}

/// A delayed state change, valid only for the generation it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub generation: u64,
    pub action: DeferredAction,
}

/// Side effects requested by the simulation; carried out by the game task.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Audio(AudioCommand),
    Notice(GameNotice),
    Schedule { delay: Duration, deferred: Deferred },
}
