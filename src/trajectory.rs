use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::StateVector;

/// A time-ascending sequence of state vectors produced by a propagation.
///
/// # Example
/// ```
/// use perigee_orbit::propagate_from_perigee;
///
/// let trajectory = propagate_from_perigee(500.0, 0.01, 600.0, 60.0).unwrap();
///
/// assert_eq!(trajectory.len(), 11);
/// assert_eq!(trajectory.duration(), 600.0);
///
/// let times: Vec<f64> = trajectory.iter().map(|s| s.time).collect();
/// assert_eq!(times[..3], [0.0, 60.0, 120.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory {
    samples: Vec<StateVector>,
}

impl Trajectory {
    /// Wraps a list of samples.
    ///
    /// # Unchecked Operation
    /// The samples are expected to be sorted by ascending time.
    /// The lookup functions give meaningless results otherwise.
    pub fn new(samples: Vec<StateVector>) -> Self {
        Self { samples }
    }

    /// The number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether there are no samples at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, in ascending time.
    #[inline]
    pub fn samples(&self) -> &[StateVector] {
        &self.samples
    }

    /// Iterates over the samples in ascending time.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, StateVector> {
        self.samples.iter()
    }

    /// The earliest sample.
    #[inline]
    pub fn first(&self) -> Option<&StateVector> {
        self.samples.first()
    }

    /// The latest sample.
    #[inline]
    pub fn last(&self) -> Option<&StateVector> {
        self.samples.last()
    }

    /// The time of the last sample, in seconds. Zero if empty.
    ///
    /// This can be slightly more than the requested duration,
    /// as short propagations always produce at least three samples.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.last().map_or(0.0, |s| s.time)
    }

    /// Unwraps the samples.
    #[inline]
    pub fn into_samples(self) -> Vec<StateVector> {
        self.samples
    }

    /// Converts the samples into `(x, y, t)` tuples.
    pub fn to_tuples(&self) -> Vec<(f64, f64, f64)> {
        self.samples.iter().map(StateVector::to_tuple).collect()
    }

    /// Gets the sample to show at a given playback time, looping
    /// over the trajectory.
    ///
    /// The time is wrapped into `[0, duration)`, then the latest sample
    /// whose successor is not yet earlier than the wrapped time is returned.
    /// In other words, playback steps from sample to sample without
    /// interpolating.
    ///
    /// Returns `None` if the trajectory is empty, and the first sample
    /// if the duration is zero.
    ///
    /// # Example
    /// ```
    /// use perigee_orbit::propagate_from_perigee;
    ///
    /// let trajectory = propagate_from_perigee(500.0, 0.0, 600.0, 60.0).unwrap();
    ///
    /// assert_eq!(trajectory.sample_at_looped(0.0).unwrap().time, 0.0);
    /// assert_eq!(trajectory.sample_at_looped(90.0).unwrap().time, 60.0);
    /// // 690 s wraps around to 90 s
    /// assert_eq!(trajectory.sample_at_looped(690.0).unwrap().time, 60.0);
    /// ```
    pub fn sample_at_looped(&self, t: f64) -> Option<&StateVector> {
        let first = self.first()?;
        let duration = self.duration();

        if duration <= 0.0 || !duration.is_finite() {
            return Some(first);
        }

        let t = t.rem_euclid(duration);
        if t.is_nan() {
            return Some(first);
        }

        let idx = self.samples[1..].partition_point(|s| s.time < t);

        self.samples.get(idx)
    }

    /// Gets the axis-aligned bounding box of all positions,
    /// as a `(min, max)` pair in kilometers.
    ///
    /// Returns `None` if the trajectory is empty.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = self.first()?.position;

        Some(
            self.samples
                .iter()
                .fold((first, first), |(min, max), s| {
                    (min.min(s.position), max.max(s.position))
                }),
        )
    }

    /// Gets the smallest and largest distances from the center of
    /// the body over all samples, in kilometers.
    ///
    /// Returns `None` if the trajectory is empty.
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        let first = self.first()?.radius();

        Some(self.samples.iter().fold((first, first), |(min, max), s| {
            let r = s.radius();
            (min.min(r), max.max(r))
        }))
    }
}

impl From<Vec<StateVector>> for Trajectory {
    fn from(samples: Vec<StateVector>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<StateVector> for Trajectory {
    fn from_iter<I: IntoIterator<Item = StateVector>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Trajectory {
    type Item = StateVector;
    type IntoIter = std::vec::IntoIter<StateVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StateVector;
    type IntoIter = core::slice::Iter<'a, StateVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
