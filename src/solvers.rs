use core::f64::consts::{PI, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{keplers_equation, keplers_equation_derivative};

/// The default convergence tolerance of the Kepler solver, in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// The default maximum number of Newton-Raphson iterations.
///
/// This is used to prevent infinite loops in case the method fails to converge.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Eccentricities at or above this value seed the solver at apoapsis (pi)
/// instead of at the mean anomaly.
pub const HIGH_ECCENTRICITY_SEED_THRESHOLD: f64 = 0.8;

/// Settings for the Newton-Raphson Kepler equation solver.
///
/// # Example
/// ```
/// use perigee_orbit::SolverSettings;
///
/// let settings = SolverSettings::default();
/// assert_eq!(settings.tolerance, 1e-10);
/// assert_eq!(settings.max_iterations, 50);
///
/// let loose = SolverSettings::default().with_tolerance(1e-6);
/// assert_eq!(loose.tolerance, 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverSettings {
    /// The solver stops once the magnitude of a Newton step
    /// falls below this value, in radians.
    pub tolerance: f64,

    /// The solver stops after this many Newton steps even if it
    /// hasn't converged, returning its best estimate.
    pub max_iterations: u32,
}

impl SolverSettings {
    /// Creates new solver settings.
    pub const fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Returns a copy of these settings with a different tolerance.
    #[must_use]
    pub const fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Returns a copy of these settings with a different iteration cap.
    #[must_use]
    pub const fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

/// The outcome of solving Kepler's equation, with diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerSolution {
    /// The eccentric anomaly, in radians.
    ///
    /// This is relative to the mean anomaly after it has been wrapped
    /// into `[-pi, pi)`, and is not shifted back afterwards.
    pub eccentric_anomaly: f64,

    /// How many Newton steps were taken.
    ///
    /// With the default settings, elliptic orbits up to `e = 0.95`
    /// converge within about ten steps.
    pub iterations: u32,

    /// Whether the last step was smaller than the tolerance.
    pub converged: bool,

    /// The last Newton step, in radians, on the solved half `[0, pi]`.
    /// Zero if no step was taken.
    pub last_step: f64,
}

/// Wraps a mean anomaly into `[-pi, pi)`.
///
/// This works for arbitrarily large inputs, keeping the solver's iterate
/// in a well-behaved neighborhood regardless of how much time has elapsed.
///
/// # Example
/// ```
/// use perigee_orbit::wrap_mean_anomaly;
/// use std::f64::consts::PI;
///
/// assert_eq!(wrap_mean_anomaly(0.0), 0.0);
/// assert!((wrap_mean_anomaly(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_mean_anomaly(mean_anomaly: f64) -> f64 {
    (mean_anomaly + PI).rem_euclid(TAU) - PI
}

/// Gets the eccentric anomaly at a given mean anomaly.
///
/// This is [`solve_kepler_with_diagnostics`] without the diagnostics.
/// If the solver does not converge within the iteration cap, the best
/// estimate is returned anyway.
///
/// # Unchecked Operation
/// The eccentricity is expected to be within `[0, 1)`.
/// Other values may produce nonsensical outputs, but never panic.
///
/// # Example
/// ```
/// use perigee_orbit::{solve_kepler, SolverSettings};
///
/// let e = 0.3;
/// let ecc_anom = 1.2_f64;
/// let mean_anom = ecc_anom - e * ecc_anom.sin();
///
/// let solved = solve_kepler(mean_anom, e, &SolverSettings::default());
/// assert!((solved - ecc_anom).abs() < 1e-8);
/// ```
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64, settings: &SolverSettings) -> f64 {
    solve_kepler_with_diagnostics(mean_anomaly, eccentricity, settings).eccentric_anomaly
}

/// Gets the eccentric anomaly at a given mean anomaly, alongside
/// information about how the solver got there.
///
/// Kepler's equation `M = E - e sin E` is solved for `E` with
/// Newton-Raphson iteration:
/// 1. `M` is wrapped into `[-pi, pi)`.
/// 2. The equation is solved for `|M|`, and the sign of `M` is applied
///    to the result at the end.
/// 3. The iterate is seeded at `|M|` for `e < 0.8`, and at `pi` (apoapsis)
///    otherwise.
/// 4. Each step adds `-f(E) / f'(E)` to the iterate.
/// 5. The loop stops when a step is smaller than the tolerance, or
///    when the iteration cap is reached.
///
/// Non-convergence is not an error. The last iterate is returned and
/// [`KeplerSolution::converged`] is `false`.
///
/// # Division by zero
/// `f'(E) = 1 - e cos E >= 1 - e`, which is positive for every
/// eccentricity in `[0, 1)`.
pub fn solve_kepler_with_diagnostics(
    mean_anomaly: f64,
    eccentricity: f64,
    settings: &SolverSettings,
) -> KeplerSolution {
    let mean_anomaly = wrap_mean_anomaly(mean_anomaly);

    // Kepler's equation is odd in E: solve on [0, pi], then restore the sign
    let sign = if mean_anomaly < 0.0 { -1.0 } else { 1.0 };
    let mean_anomaly = mean_anomaly.abs();

    let mut eccentric_anomaly = if eccentricity < HIGH_ECCENTRICITY_SEED_THRESHOLD {
        mean_anomaly
    } else {
        PI
    };

    let mut iterations = 0;
    let mut last_step = 0.0;
    let mut converged = false;

    while iterations < settings.max_iterations {
        let f = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);
        let fp = keplers_equation_derivative(eccentric_anomaly, eccentricity);

        last_step = -f / fp;
        eccentric_anomaly += last_step;
        iterations += 1;

        if last_step.abs() < settings.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        log::debug!(
            "Kepler solver did not converge after {iterations} iterations \
            (|M| = {mean_anomaly}, e = {eccentricity}, last step = {last_step:e})"
        );
    }

    KeplerSolution {
        eccentric_anomaly: eccentric_anomaly * sign,
        iterations,
        converged,
        last_step,
    }
}
