// Per-sample rules applied by the simulation.

pub mod flight;
pub mod pad;
pub mod respawn;
