/// Gameplay tuning for the two flyable vehicles.
///
/// Keyed by `VehicleKind` so rules never branch on names.
use crate::domain::audio::EngineTrack;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VehicleKind {
    #[default]
    Helicopter,
    Drone,
}

impl VehicleKind {
    pub fn toggled(self) -> Self {
        match self {
            VehicleKind::Helicopter => VehicleKind::Drone,
            VehicleKind::Drone => VehicleKind::Helicopter,
        }
    }

    pub fn engine_track(self) -> EngineTrack {
        match self {
            VehicleKind::Helicopter => EngineTrack::Helicopter,
            VehicleKind::Drone => EngineTrack::Drone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VehicleTuning {
    /// Displacement per radian of tilt per sample, away from the pad.
    pub cruise_speed: f64,

    /// Displacement per radian of tilt per sample inside the proximity radius.
    pub approach_speed: f64,

    /// Half-size of the square around the pad that counts as a landing.
    pub landing_tolerance: f64,

    /// Score awarded per landing.
    pub points: u32,
}

impl VehicleTuning {
    pub const HELICOPTER: VehicleTuning = VehicleTuning {
        cruise_speed: 8.0,
        approach_speed: 2.0,
        landing_tolerance: 10.0,
        points: 1,
    };

    pub const DRONE: VehicleTuning = VehicleTuning {
        cruise_speed: 50.0,
        approach_speed: 20.0,
        landing_tolerance: 1.0,
        points: 2,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct VehicleTable {
    pub helicopter: VehicleTuning,
    pub drone: VehicleTuning,
}

impl VehicleTable {
    pub fn get(&self, kind: VehicleKind) -> &VehicleTuning {
        match kind {
            VehicleKind::Helicopter => &self.helicopter,
            VehicleKind::Drone => &self.drone,
        }
    }
}

impl Default for VehicleTable {
    fn default() -> Self {
        Self {
            helicopter: VehicleTuning::HELICOPTER,
            drone: VehicleTuning::DRONE,
        }
    }
}
