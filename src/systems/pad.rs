use crate::domain::state::Position;

/// How close the vehicle is to the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadContact {
    Clear,
    Approaching,
    Touchdown,
}

impl PadContact {
    pub fn is_near(self) -> bool {
        !matches!(self, PadContact::Clear)
    }
}

/// Square checks on both axes; `landing_tolerance` is expected to be tighter than
/// `proximity_radius`.
pub fn contact(
    vehicle: &Position,
    pad: &Position,
    proximity_radius: f64,
    landing_tolerance: f64,
) -> PadContact {
    if !vehicle.is_within_square(pad, proximity_radius) {
        return PadContact::Clear;
    }
    if vehicle.is_within_square(pad, landing_tolerance) {
        PadContact::Touchdown
    } else {
        PadContact::Approaching
    }
}
