use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A struct representing a position and velocity at a point in time.
///
/// Both vectors are in the orbital plane, with the perigee on the +X axis
/// and motion counter-clockwise.
///
/// The position vector is in kilometers, the velocity vector is in
/// kilometers per second, and the time is in seconds since perigee.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVector {
    /// The 2D position, in kilometers.
    pub position: DVec2,
    /// The 2D velocity, in kilometers per second.
    pub velocity: DVec2,
    /// The time since perigee, in seconds.
    pub time: f64,
}

impl StateVector {
    /// The X coordinate of the position, in kilometers.
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// The Y coordinate of the position, in kilometers.
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// The distance from the center of the body, in kilometers.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.position.length()
    }

    /// The magnitude of the velocity, in kilometers per second.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Converts this state into an `(x, y, t)` tuple, discarding the velocity.
    #[inline]
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.position.x, self.position.y, self.time)
    }
}

impl From<StateVector> for (f64, f64, f64) {
    fn from(state: StateVector) -> Self {
        state.to_tuple()
    }
}
