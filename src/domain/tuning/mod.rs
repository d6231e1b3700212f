// Gameplay tuning. Keep this separate from runtime configuration (channel sizes, pacing).

pub mod arena;
pub mod landing;
pub mod vehicle;

pub use arena::{Arena, FlightBounds};
pub use landing::LandingTuning;
pub use vehicle::{VehicleKind, VehicleTable, VehicleTuning};

use serde::Deserialize;

/// Longest fade or celebration accepted from configuration, in seconds.
pub const MAX_DELAY_SECS: f64 = 3600.0;

/// Every gameplay constant the simulation reads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    pub arena: Arena,
    pub vehicles: VehicleTable,
    pub landing: LandingTuning,
}

impl GameTuning {
    /// Checks the ordering the landing rules depend on:
    /// drone tolerance < helicopter tolerance < proximity radius.
    pub fn validate(&self) -> Result<(), String> {
        let drone = self.vehicles.drone.landing_tolerance;
        let helicopter = self.vehicles.helicopter.landing_tolerance;
        let radius = self.landing.proximity_radius;

        if !(drone > 0.0 && drone < helicopter && helicopter < radius) {
            return Err(format!(
                "landing tolerances must satisfy 0 < drone ({drone}) < helicopter ({helicopter}) < proximity radius ({radius})"
            ));
        }
        if !(self.arena.screen_width > 0.0 && self.arena.screen_height > 0.0) {
            return Err("screen dimensions must be positive".to_string());
        }
        for (name, secs) in [
            ("proximity_fade_secs", self.landing.proximity_fade_secs),
            ("landed_fade_secs", self.landing.landed_fade_secs),
            ("restore_fade_secs", self.landing.restore_fade_secs),
            ("celebration_secs", self.landing.celebration_secs),
        ] {
            if !(secs.is_finite() && (0.0..=MAX_DELAY_SECS).contains(&secs)) {
                return Err(format!(
                    "{name} must be between 0 and {MAX_DELAY_SECS} seconds, got {secs}"
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_is_valid() {
        assert!(GameTuning::default().validate().is_ok());
    }

    #[test]
    fn default_tolerances_are_ordered() {
        let tuning = GameTuning::default();
        assert!(tuning.vehicles.drone.landing_tolerance < tuning.vehicles.helicopter.landing_tolerance);
        assert!(tuning.vehicles.helicopter.landing_tolerance < tuning.landing.proximity_radius);
    }

    #[test]
    fn when_drone_tolerance_exceeds_helicopter_then_validate_fails() {
        let mut tuning = GameTuning::default();
        tuning.vehicles.drone.landing_tolerance = 12.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn when_celebration_is_absurdly_long_then_validate_fails() {
        let mut tuning = GameTuning::default();
        tuning.landing.celebration_secs = 1e19;
        assert!(tuning.validate().is_err());

        tuning.landing.celebration_secs = MAX_DELAY_SECS;
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn when_fade_is_negative_then_validate_fails() {
        let mut tuning = GameTuning::default();
        tuning.landing.restore_fade_secs = -1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let tuning: GameTuning = toml::from_str(
            r#"
            [arena]
            screen_width = 800.0

            [vehicles.drone]
            cruise_speed = 40.0
            approach_speed = 15.0
            landing_tolerance = 2.0
            points = 3
            "#,
        )
        .expect("partial tuning should parse");

        assert_eq!(tuning.arena.screen_width, 800.0);
        assert_eq!(tuning.arena.screen_height, Arena::default().screen_height);
        assert_eq!(tuning.vehicles.drone.cruise_speed, 40.0);
        assert_eq!(tuning.vehicles.drone.points, 3);
        assert_eq!(tuning.vehicles.helicopter, VehicleTuning::HELICOPTER);
        assert_eq!(tuning.landing, LandingTuning::default());
    }
}
