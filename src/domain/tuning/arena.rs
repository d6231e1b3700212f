/// Playfield geometry, in screen points.
use crate::domain::state::Position;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub screen_width: f64,
    pub screen_height: f64,

    /// Side length of the vehicle sprite.
    pub vehicle_size: f64,

    /// Side length of the pad sprite. Rendering only.
    pub pad_size: f64,

    /// Space kept free for the control bar at the bottom of the screen.
    pub control_bar_inset: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            screen_width: 390.0,
            screen_height: 844.0,
            vehicle_size: 150.0,
            pad_size: 130.0,
            control_bar_inset: 20.0,
        }
    }
}

/// Axis-aligned rectangle positions are kept in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Arena {
    pub fn bound_width(&self) -> f64 {
        (self.screen_width / 2.0 - self.vehicle_size / 2.0).max(0.0)
    }

    pub fn bound_height(&self) -> f64 {
        (self.screen_height / 2.0 - self.vehicle_size / 2.0).max(0.0)
    }

    /// Symmetric bound used for spawning the vehicle and the pad.
    pub fn spawn_bounds(&self) -> FlightBounds {
        let (w, h) = (self.bound_width(), self.bound_height());
        FlightBounds {
            min_x: -w,
            max_x: w,
            min_y: -h,
            max_y: h,
        }
    }

    /// Bound the vehicle is clamped to while flying. The low edge is inset for the control bar.
    pub fn flight_bounds(&self) -> FlightBounds {
        let (w, h) = (self.bound_width(), self.bound_height());
        FlightBounds {
            min_x: -w,
            max_x: w,
            min_y: -h + self.control_bar_inset,
            max_y: h,
        }
    }
}

impl FlightBounds {
    pub fn contains(&self, position: &Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.width)
            && (self.min_y..=self.max_y).contains(&position.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_subtract_half_the_vehicle() {
        let arena = Arena {
            screen_width: 400.0,
            screen_height: 800.0,
            vehicle_size: 150.0,
            ..Arena::default()
        };
        assert_eq!(arena.bound_width(), 125.0);
        assert_eq!(arena.bound_height(), 325.0);
    }

    #[test]
    fn flight_bounds_inset_only_the_low_edge() {
        let arena = Arena {
            screen_width: 400.0,
            screen_height: 800.0,
            ..Arena::default()
        };
        let flight = arena.flight_bounds();
        let spawn = arena.spawn_bounds();

        assert_eq!(flight.min_y, spawn.min_y + 20.0);
        assert_eq!(flight.max_y, spawn.max_y);
        assert_eq!(flight.min_x, spawn.min_x);
        assert_eq!(flight.max_x, spawn.max_x);
    }

    #[test]
    fn when_screen_is_smaller_than_vehicle_then_bounds_collapse_to_zero() {
        let arena = Arena {
            screen_width: 100.0,
            screen_height: 100.0,
            ..Arena::default()
        };
        assert_eq!(arena.bound_width(), 0.0);
        assert_eq!(arena.bound_height(), 0.0);
    }
}
