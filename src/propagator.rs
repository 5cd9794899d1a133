use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    solve_kepler, Body, DerivedElements, OrbitSpec, PropagationError, SolverSettings,
    StateVector, Trajectory,
};

/// The smallest number of steps a propagation takes.
///
/// Samples are taken at step indices `0..=steps`, so every propagation
/// yields at least `MIN_STEPS + 1` samples, even when the requested
/// duration is shorter than a single time step.
pub const MIN_STEPS: usize = 2;

/// The largest number of steps a propagation may take.
///
/// Every sample is stored, so this bounds the memory a single
/// propagation can allocate.
pub const MAX_STEPS: usize = 100_000_000;

/// Gets the number of steps to take for a given duration and time step.
///
/// This is `max(2, floor(duration / dt))`. The number of samples
/// produced is one more than this.
///
/// # Errors
/// - [`PropagationError::InvalidTimeStep`] if `dt` is not a finite
///   positive number.
/// - [`PropagationError::InvalidDuration`] if `duration` is not finite.
/// - [`PropagationError::TooManySamples`] if `duration / dt` exceeds
///   [`MAX_STEPS`].
///
/// # Example
/// ```
/// use perigee_orbit::step_count;
///
/// assert_eq!(step_count(600.0, 60.0), Ok(10));
/// assert_eq!(step_count(30.0, 60.0), Ok(2));
/// assert!(step_count(600.0, 0.0).is_err());
/// ```
pub fn step_count(duration: f64, dt: f64) -> Result<usize, PropagationError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(PropagationError::InvalidTimeStep(dt));
    }
    if !duration.is_finite() {
        return Err(PropagationError::InvalidDuration(duration));
    }

    let quotient = (duration / dt).floor();
    if quotient > MAX_STEPS as f64 {
        return Err(PropagationError::TooManySamples(quotient));
    }

    // Negative quotients saturate to zero
    let steps = quotient as usize;

    Ok(steps.max(MIN_STEPS))
}

/// A planar two-body propagator around a fixed central body.
///
/// # Example
/// ```
/// use perigee_orbit::{body_presets, OrbitSpec, Propagator, SolverSettings};
///
/// let propagator = Propagator::new(body_presets::mars())
///     .with_solver_settings(SolverSettings::default().with_max_iterations(20));
///
/// let spec = OrbitSpec::new(300.0, 0.05);
/// let trajectory = propagator.propagate(&spec, 3600.0, 30.0).unwrap();
///
/// assert_eq!(trajectory.len(), 121);
///
/// let start = trajectory.first().unwrap();
/// assert!((start.x() - (3389.5 + 300.0)).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Propagator {
    body: Body,
    solver: SolverSettings,
}

impl Propagator {
    /// Creates a propagator around the given body, with the default
    /// solver settings.
    pub fn new(body: Body) -> Self {
        Self {
            body,
            solver: SolverSettings::default(),
        }
    }

    /// Replaces the solver settings of this propagator.
    #[must_use]
    pub fn with_solver_settings(self, solver: SolverSettings) -> Self {
        Self { solver, ..self }
    }

    /// The central body.
    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The settings used for solving Kepler's equation.
    #[inline]
    pub fn solver_settings(&self) -> &SolverSettings {
        &self.solver
    }

    /// Derives the semi-major axis, mean motion, and period of an orbit
    /// around this propagator's body.
    #[inline]
    pub fn derive_elements(&self, spec: &OrbitSpec) -> DerivedElements {
        spec.derive_elements(&self.body)
    }

    /// Gets the state of an orbit at a given time since perigee.
    ///
    /// # Time
    /// The time is expressed in seconds.
    ///
    /// # Performance
    /// This derives the elements of the orbit on every call.
    /// Use [`propagate`][Self::propagate] to get many evenly-spaced
    /// states at once.
    pub fn state_at_time(&self, spec: &OrbitSpec, t: f64) -> StateVector {
        self.state_from_elements(&self.derive_elements(spec), t)
    }

    /// Propagates an orbit from perigee, sampling it every `dt` seconds
    /// from `t = 0` up to roughly `t = duration`.
    ///
    /// There are always at least three samples. If the duration is
    /// shorter than two time steps, the trajectory extends past it.
    ///
    /// # Unchecked Operation
    /// The orbit itself is not validated.
    /// Eccentricities outside `[0, 1)` give non-physical results.
    /// Use [`propagate_checked`][Self::propagate_checked] to reject those.
    ///
    /// # Errors
    /// See [`step_count`].
    pub fn propagate(
        &self,
        spec: &OrbitSpec,
        duration: f64,
        dt: f64,
    ) -> Result<Trajectory, PropagationError> {
        let steps = step_count(duration, dt)?;
        let elements = self.derive_elements(spec);

        log::debug!(
            "Propagating around {}: a = {} km, e = {}, n = {} rad/s, T = {} s, {} samples",
            self.body.name,
            elements.semi_major_axis,
            elements.eccentricity,
            elements.mean_motion,
            elements.period,
            steps + 1,
        );

        Ok((0..=steps)
            .map(|i| self.state_from_elements(&elements, i as f64 * dt))
            .collect())
    }

    /// Like [`propagate`][Self::propagate], but first checks that the
    /// orbit is a closed ellipse with a perigee above the body's center.
    ///
    /// # Errors
    /// See [`OrbitSpec::validate`] and [`step_count`].
    pub fn propagate_checked(
        &self,
        spec: &OrbitSpec,
        duration: f64,
        dt: f64,
    ) -> Result<Trajectory, PropagationError> {
        spec.validate(&self.body)?;
        self.propagate(spec, duration, dt)
    }

    fn state_from_elements(&self, elements: &DerivedElements, t: f64) -> StateVector {
        let e = elements.eccentricity;

        // Wrapped into [0, tau) here, then into [-pi, pi) by the solver
        let mean_anomaly = elements.mean_anomaly_at_time(t);
        let eccentric_anomaly = solve_kepler(mean_anomaly, e, &self.solver);

        let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
        let radius = elements.semi_major_axis * (1.0 - e * cos_e);
        let q_mult = (1.0 - e * e).sqrt();

        // atan2 keeps the correct quadrant over the whole [0, tau) range
        let true_anomaly = (q_mult * sin_e).atan2(cos_e - e);
        let (sin_v, cos_v) = true_anomaly.sin_cos();

        // https://downloads.rene-schwarz.com/download/M001-Keplerian_Orbit_Elements_to_Cartesian_State_Vectors.pdf
        // Equation 8:
        //                           [      -sin E       ]
        // v(t) = sqrt(GM * a) / r * [ sqrt(1-e^2) cos E ]
        let outer_mult = (self.body.mu * elements.semi_major_axis).sqrt() / radius;

        StateVector {
            position: DVec2::new(radius * cos_v, radius * sin_v),
            velocity: DVec2::new(-outer_mult * sin_e, outer_mult * q_mult * cos_e),
            time: t,
        }
    }
}
