use crate::domain::state::{OrientationSample, Position};
use crate::domain::tuning::FlightBounds;

pub fn tick_vehicle(
    position: &mut Position,
    sample: OrientationSample,
    flight_speed: f64,
    bounds: FlightBounds,
) {
    integrate(position, sample, flight_speed);
    clamp_position(position, bounds);
}

/// First-order model: tilt is velocity, not acceleration.
pub fn integrate(position: &mut Position, sample: OrientationSample, flight_speed: f64) {
    position.width += sample.roll * flight_speed;
    position.height += sample.pitch * flight_speed;
}

// Upper edges are applied first so a collapsed bound resolves to its low edge.
pub fn clamp_position(position: &mut Position, bounds: FlightBounds) {
    position.width = position.width.min(bounds.max_x).max(bounds.min_x);
    position.height = position.height.min(bounds.max_y).max(bounds.min_y);
}
