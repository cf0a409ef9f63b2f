use std::num::NonZeroU32;

use super::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub coordinate: Coordinate,
    radius_meters: NonZeroU32,
}

impl SearchQuery {
    pub fn new(coordinate: Coordinate, radius_meters: NonZeroU32) -> Self {
        Self {
            coordinate,
            radius_meters,
        }
    }

    pub fn radius_meters(&self) -> u32 {
        self.radius_meters.get()
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.is_within(&self.coordinate, self.radius_meters())
    }
}
