//! # Planar Perigee-Seeded Orbit Propagation
//! This library crate propagates a satellite along an elliptical two-body
//! orbit in its orbital plane, given only the altitude of its perigee and
//! its eccentricity.
//!
//! Like any Keplerian propagator, it doesn't integrate equations of motion.
//! Every sample is computed in closed form from the time since perigee:
//! 1. The perigee altitude and eccentricity are turned into a semi-major axis.
//! 2. The mean anomaly at each time is turned into an eccentric anomaly by
//!    solving Kepler's equation with Newton-Raphson iteration.
//! 3. The eccentric anomaly is turned into a true anomaly and a radius, and
//!    from there into planar coordinates.
//!
//! The orbit is not tilted: inclination, longitude of ascending node, and
//! argument of periapsis are all zero, so the perigee lies on the +X axis.
//! There are no perturbations either, so drag, J2, and third bodies are
//! all ignored.
//!
//! ## Getting started
//! This crate provides a few main items:
//! - [`propagate_from_perigee`]: Propagate an orbit around the Earth in a
//!   single call.
//! - [`Propagator`]: Propagate around any [`Body`], with custom
//!   [`SolverSettings`].
//! - [`OrbitSpec`] and [`DerivedElements`]: The orbit as described by the
//!   user, and the elements derived from it.
//! - [`Trajectory`]: A time-ascending list of [`StateVector`]s.
//!
//! We also provide a [`body_presets`] module, which contains some preset
//! central bodies other than the Earth.
//!
//! ## Units
//! Distances are in kilometers, times are in seconds, and angles
//! are in radians.
//!
//! ## Example
//!
//! ```rust
//! use perigee_orbit::propagate_from_perigee;
//!
//! # fn main() {
//! // A circular orbit 500 km above the Earth, sampled every minute for 90 minutes
//! let trajectory = propagate_from_perigee(500.0, 0.0, 5400.0, 60.0).unwrap();
//!
//! assert_eq!(trajectory.len(), 91);
//!
//! for state in &trajectory {
//!     assert!((state.radius() - 6871.0).abs() < 1e-6);
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod body;
pub mod body_presets;
mod elements;
mod errors;
mod propagator;
mod solvers;
mod state;
mod trajectory;

pub use body::{Body, EARTH_MU, EARTH_RADIUS};
pub use elements::{semi_major_axis_from_perigee, DerivedElements, OrbitSpec};
pub use errors::PropagationError;
pub use propagator::{step_count, Propagator, MAX_STEPS, MIN_STEPS};
pub use solvers::{
    solve_kepler, solve_kepler_with_diagnostics, wrap_mean_anomaly, KeplerSolution,
    SolverSettings, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, HIGH_ECCENTRICITY_SEED_THRESHOLD,
};
pub use state::StateVector;
pub use trajectory::Trajectory;

/// Propagates an orbit around the Earth from perigee.
///
/// The satellite starts at perigee at `t = 0`, and is sampled every `dt`
/// seconds up to roughly `duration` seconds.
/// The Earth is modelled with `mu = 398600.4418 km^3 s^-2` and a mean
/// radius of `6371.0 km`.
///
/// At least three samples are always produced, even if the duration is
/// shorter than two time steps.
///
/// # Unchecked Operation
/// The eccentricity is expected to be within `[0, 1)`.
/// This is not checked; other values give non-physical positions.
/// Use [`Propagator::propagate_checked`] if you want them rejected.
///
/// # Errors
/// - [`PropagationError::InvalidTimeStep`] if `dt` is not a finite
///   positive number.
/// - [`PropagationError::InvalidDuration`] if `duration` is not finite.
/// - [`PropagationError::TooManySamples`] if the duration spans more
///   than [`MAX_STEPS`] time steps.
///
/// # Example
/// ```
/// use perigee_orbit::propagate_from_perigee;
///
/// let trajectory = propagate_from_perigee(500.0, 0.01, 600.0, 60.0).unwrap();
/// let tuples = trajectory.to_tuples();
///
/// assert_eq!(tuples.len(), 11);
///
/// // Starts at perigee, on the +X axis
/// let (x, y, t) = tuples[0];
/// assert!((x - 6871.0).abs() < 1e-9);
/// assert!(y.abs() < 1e-9);
/// assert_eq!(t, 0.0);
/// ```
pub fn propagate_from_perigee(
    altitude: f64,
    eccentricity: f64,
    duration: f64,
    dt: f64,
) -> Result<Trajectory, PropagationError> {
    Propagator::default().propagate(&OrbitSpec::new(altitude, eccentricity), duration, dt)
}


#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * eccentric_anomaly.sin()) - mean_anomaly
}
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - (eccentricity * eccentric_anomaly.cos())
}
