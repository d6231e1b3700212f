// Domain-level flight state and input types.

use crate::domain::errors::SensorError;
use crate::domain::tuning::VehicleKind;

/// Screen-space offset from the centre of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub width: f64,
    pub height: f64,
}

impl Position {
    pub const ORIGIN: Position = Position {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when `other` lies strictly inside the axis-aligned square of half-size `extent`
    /// centred on `self`.
    pub fn is_within_square(&self, other: &Position, extent: f64) -> bool {
        (self.width - other.width).abs() < extent && (self.height - other.height).abs() < extent
    }
}

/// One attitude reading from the motion sampler, in radians.
///
/// Only pitch and roll drive the vehicle; yaw is carried for completeness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl OrientationSample {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Result<Self, SensorError> {
        if !(pitch.is_finite() && roll.is_finite() && yaw.is_finite()) {
            return Err(SensorError::NonFinite { pitch, roll, yaw });
        }
        Ok(Self { pitch, roll, yaw })
    }
}

/// Where the vehicle is in a single landing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Cruising,
    Approaching,
    Landed,
}

/// Authoritative game state. Mutated only by the simulation that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub kind: VehicleKind,
    pub vehicle: Position,
    pub pad: Position,

    // Landing cycle.
    pub approaching: bool,
    pub landed: bool,
    pub flight_speed: f64,

    pub score: u32,
    pub sound_enabled: bool,

    // Restart bookkeeping.
    pub restart_pending: bool,
    pub generation: u64, // bumped on every reset; tags deferred effects
}

impl FlightState {
    pub fn new(kind: VehicleKind, cruise_speed: f64) -> Self {
        Self {
            kind,
            vehicle: Position::ORIGIN,
            pad: Position::ORIGIN,
            approaching: false,
            landed: false,
            flight_speed: cruise_speed,
            score: 0,
            sound_enabled: true,
            restart_pending: false,
            generation: 0,
        }
    }

    /// Samples are ignored while the landing celebration or the restart prompt is showing.
    pub fn is_frozen(&self) -> bool {
        self.landed || self.restart_pending
    }

    pub fn phase(&self) -> FlightPhase {
        if self.landed {
            FlightPhase::Landed
        } else if self.approaching {
            FlightPhase::Approaching
        } else {
            FlightPhase::Cruising
        }
    }
}
