use crate::domain::state::Position;
use crate::domain::tuning::FlightBounds;
use rand::Rng;

/// Uniform draw inside `bounds`, both edges inclusive.
pub fn random_position<R: Rng>(rng: &mut R, bounds: FlightBounds) -> Position {
    Position {
        width: rng.random_range(bounds.min_x..=bounds.max_x),
        height: rng.random_range(bounds.min_y..=bounds.max_y),
    }
}
