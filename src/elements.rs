use core::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Body, PropagationError};

/// Gets the semi-major axis of an orbit from its perigee altitude.
///
/// The perigee radius is `r_p = radius + altitude`, and the semi-major
/// axis follows from `a = r_p / (1 - e)`.
///
/// # Unchecked Operation
/// This function does not check the eccentricity.
/// It returns infinity for `e = 1` and negative values for `e > 1`.
///
/// # Example
/// ```
/// use perigee_orbit::semi_major_axis_from_perigee;
///
/// let sma = semi_major_axis_from_perigee(500.0, 0.5, 6371.0);
/// assert_eq!(sma, 13742.0);
/// ```
#[inline]
pub fn semi_major_axis_from_perigee(altitude: f64, eccentricity: f64, body_radius: f64) -> f64 {
    (body_radius + altitude) / (1.0 - eccentricity)
}

/// The user-facing description of a planar orbit.
///
/// The orbit lies in the equatorial plane with its perigee on the +X axis,
/// and the satellite sits at perigee at `t = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitSpec {
    /// The altitude of the perigee above the body's mean radius, in kilometers.
    pub perigee_altitude: f64,

    /// The eccentricity of the orbit.
    ///
    /// Must be within `[0, 1)` for the propagation to be meaningful.
    pub eccentricity: f64,
}

impl OrbitSpec {
    /// Creates a new orbit description without validating it.
    ///
    /// Use [`OrbitSpec::try_new`] to reject non-physical inputs.
    pub const fn new(perigee_altitude: f64, eccentricity: f64) -> Self {
        Self {
            perigee_altitude,
            eccentricity,
        }
    }

    /// Creates a new orbit description, checking it against a central body.
    ///
    /// # Errors
    /// See [`OrbitSpec::validate`].
    ///
    /// # Example
    /// ```
    /// use perigee_orbit::{Body, OrbitSpec, PropagationError};
    ///
    /// let body = Body::default();
    ///
    /// assert!(OrbitSpec::try_new(500.0, 0.1, &body).is_ok());
    /// assert_eq!(
    ///     OrbitSpec::try_new(500.0, 1.0, &body),
    ///     Err(PropagationError::InvalidEccentricity(1.0)),
    /// );
    /// ```
    pub fn try_new(
        perigee_altitude: f64,
        eccentricity: f64,
        body: &Body,
    ) -> Result<Self, PropagationError> {
        let spec = Self::new(perigee_altitude, eccentricity);
        spec.validate(body)?;
        Ok(spec)
    }

    /// Checks that this orbit is a closed ellipse whose perigee lies
    /// outside the center of the given body.
    ///
    /// # Errors
    /// - [`PropagationError::InvalidEccentricity`] if the eccentricity
    ///   is not finite or outside `[0, 1)`.
    /// - [`PropagationError::NonFiniteAltitude`] if the altitude is not finite.
    /// - [`PropagationError::PerigeeBelowCenter`] if the perigee radius
    ///   is not positive.
    pub fn validate(&self, body: &Body) -> Result<(), PropagationError> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            log::trace!("Rejected eccentricity {}", self.eccentricity);
            return Err(PropagationError::InvalidEccentricity(self.eccentricity));
        }

        if !self.perigee_altitude.is_finite() {
            log::trace!("Rejected perigee altitude {}", self.perigee_altitude);
            return Err(PropagationError::NonFiniteAltitude(self.perigee_altitude));
        }

        let perigee_radius = self.perigee_radius(body);
        if perigee_radius <= 0.0 {
            log::trace!("Rejected perigee radius {perigee_radius}");
            return Err(PropagationError::PerigeeBelowCenter { perigee_radius });
        }

        Ok(())
    }

    /// Gets the distance from the center of the body to the perigee, in kilometers.
    #[inline]
    pub fn perigee_radius(&self, body: &Body) -> f64 {
        body.radius_at_altitude(self.perigee_altitude)
    }

    /// Gets the semi-major axis of this orbit around the given body, in kilometers.
    #[inline]
    pub fn semi_major_axis(&self, body: &Body) -> f64 {
        semi_major_axis_from_perigee(self.perigee_altitude, self.eccentricity, body.radius)
    }

    /// Derives the elements needed for propagation around the given body.
    ///
    /// # Example
    /// ```
    /// use perigee_orbit::{Body, OrbitSpec};
    ///
    /// let elements = OrbitSpec::new(500.0, 0.0).derive_elements(&Body::default());
    ///
    /// assert_eq!(elements.semi_major_axis, 6871.0);
    /// // A 500 km circular orbit takes a little over 94 minutes
    /// assert!((elements.period / 60.0 - 94.47).abs() < 0.01);
    /// ```
    pub fn derive_elements(&self, body: &Body) -> DerivedElements {
        DerivedElements::new(self.semi_major_axis(body), self.eccentricity, body.mu)
    }
}

/// Elements derived once from an [`OrbitSpec`] and a central body.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedElements {
    /// The semi-major axis, in kilometers.
    pub semi_major_axis: f64,

    /// The mean motion, in radians per second.
    ///
    /// `n = sqrt(mu / a^3)`
    pub mean_motion: f64,

    /// The time it takes to complete one revolution, in seconds.
    ///
    /// `T = 2pi / n`
    pub period: f64,

    /// The eccentricity the elements were derived with.
    pub eccentricity: f64,
}

impl DerivedElements {
    /// Derives the mean motion and period from a semi-major axis.
    pub fn new(semi_major_axis: f64, eccentricity: f64, mu: f64) -> Self {
        let mean_motion = (mu / semi_major_axis.powi(3)).sqrt();

        Self {
            semi_major_axis,
            mean_motion,
            period: TAU / mean_motion,
            eccentricity,
        }
    }

    /// Gets the distance from the center of the body to the perigee, in kilometers.
    ///
    /// `r_p = a (1 - e)`
    #[inline]
    pub fn perigee_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Gets the distance from the center of the body to the apogee, in kilometers.
    ///
    /// `r_a = a (1 + e)`
    #[inline]
    pub fn apogee_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Gets the semi-minor axis, in kilometers.
    ///
    /// `b = a sqrt(1 - e^2)`
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Gets the distance from the center of the body at a given
    /// eccentric anomaly, in kilometers.
    ///
    /// `r = a (1 - e cos E)`
    #[inline]
    pub fn radius_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * eccentric_anomaly.cos())
    }

    /// Gets the mean anomaly at a given time since perigee, wrapped
    /// into `[0, 2pi)`.
    #[inline]
    pub fn mean_anomaly_at_time(&self, t: f64) -> f64 {
        (self.mean_motion * t).rem_euclid(TAU)
    }
}
