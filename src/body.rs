#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The gravitational parameter of the Earth, in km^3 s^-2.
pub const EARTH_MU: f64 = 398600.4418;

/// The mean radius of the Earth, in kilometers.
pub const EARTH_RADIUS: f64 = 6371.0;

/// A struct representing the central body an orbit is propagated around.
///
/// Perigee altitudes are measured from this body's mean radius, and the
/// mean motion of an orbit is derived from its gravitational parameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// The name of the celestial body.
    pub name: String,

    /// The gravitational parameter of the body, in km^3 s^-2.
    ///
    /// This equals the gravitational constant times the mass of the body.
    /// In other words, mu = GM.
    pub mu: f64,

    /// The mean radius of the body, in kilometers.
    pub radius: f64,
}

impl Body {
    /// Creates a new `Body` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the celestial body.
    /// * `mu` - The gravitational parameter of the body, in km^3 s^-2.
    /// * `radius` - The mean radius of the body, in kilometers.
    ///
    /// # Returns
    ///
    /// A new `Body` instance.
    pub fn new(name: impl Into<String>, mu: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            mu,
            radius,
        }
    }

    /// Gets the distance from the center of this body to a point
    /// at the given altitude, in kilometers.
    #[inline]
    pub fn radius_at_altitude(&self, altitude: f64) -> f64 {
        self.radius + altitude
    }
}

impl Default for Body {
    /// Creates a default `Body` instance.
    ///
    /// This is the Earth, with `mu = 398600.4418 km^3 s^-2` and a mean
    /// radius of `6371.0 km`. Propagations that don't specify a body
    /// rely on these exact values.
    fn default() -> Self {
        Self {
            name: "Earth".to_string(),
            mu: EARTH_MU,
            radius: EARTH_RADIUS,
        }
    }
}
