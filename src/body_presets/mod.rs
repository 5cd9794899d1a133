//! This module contains preset central bodies to propagate around.
//!
//! All gravitational parameters are in km^3 s^-2 and all radii are mean
//! radii in kilometers.

mod moons;
mod planets;

pub use moons::*;
pub use planets::*;
