use thiserror::Error;

/// An error to describe why a propagation request was rejected.
///
/// Only the time step and duration are always checked. Eccentricity and altitude are
/// checked only by the `checked`/`try_` family of functions; the default
/// path lets non-physical values flow through the arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PropagationError {
    /// ### The time step is zero, negative, or not finite.
    /// Samples are spaced `dt` seconds apart, so a non-positive step
    /// would never advance in time.
    #[error("Time step must be a finite positive number of seconds, got {0}")]
    InvalidTimeStep(f64),

    /// ### The duration is not finite.
    /// A finite number of samples can't cover an infinite time span.
    /// Negative durations are allowed and produce the minimum sample count.
    #[error("Duration must be a finite number of seconds, got {0}")]
    InvalidDuration(f64),

    /// ### The duration spans too many time steps.
    /// Holds the requested number of steps, `duration / dt`, which
    /// exceeds [`MAX_STEPS`][crate::MAX_STEPS].
    #[error("Propagation would take {0} steps, more than the maximum of {max}", max = crate::MAX_STEPS)]
    TooManySamples(f64),

    /// ### The eccentricity is outside of `[0, 1)`.
    /// Only closed elliptic orbits can be propagated.
    /// Parabolic and hyperbolic trajectories are not supported.
    #[error("Eccentricity must be within [0, 1), got {0}")]
    InvalidEccentricity(f64),

    /// ### The perigee altitude is not finite.
    #[error("Perigee altitude must be finite, got {0} km")]
    NonFiniteAltitude(f64),

    /// ### The perigee lies at or below the center of the body.
    /// The perigee altitude is measured from the body's mean radius,
    /// so it may be negative, but not below `-radius`.
    #[error("Perigee radius must be positive, got {perigee_radius} km")]
    PerigeeBelowCenter {
        /// The offending distance from the center of the body, in kilometers.
        perigee_radius: f64,
    },
}
