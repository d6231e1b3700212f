// Use cases layer: the flight simulation and the task that owns it.

pub mod audio;
pub mod game;
pub mod simulation;
pub mod types;

pub use audio::AudioSubsystem;
pub use game::{GameHandle, GameSettings, spawn_game};
pub use simulation::Simulation;
pub use types::{Deferred, DeferredAction, Effect, FlightSnapshot, GameEvent, GameNotice};
