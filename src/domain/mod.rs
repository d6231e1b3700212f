// Domain layer: core flight types and rules.

pub mod audio;
pub mod errors;
pub mod ports;
pub mod state;
pub mod tuning;

pub use audio::{AudioCommand, EngineTrack};
pub use errors::{AudioError, SensorError};
pub use state::{FlightPhase, FlightState, OrientationSample, Position};
pub use tuning::{Arena, GameTuning, LandingTuning, VehicleKind, VehicleTable, VehicleTuning};
