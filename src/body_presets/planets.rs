//! This module contains presets for planets.
//!
//! "A planet is a large, rounded astronomical body that is generally
//! required to be in orbit around a star, stellar remnant, or brown dwarf,
//! and is not one itself."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Planet)

use crate::{Body, EARTH_MU, EARTH_RADIUS};

/// Returns Venus.
pub fn venus() -> Body {
    Body::new("Venus", 324_859.0, 6051.8)
}

/// Returns the Earth.
///
/// This is identical to [`Body::default`].
pub fn earth() -> Body {
    Body::new("Earth", EARTH_MU, EARTH_RADIUS)
}

/// Returns Mars.
pub fn mars() -> Body {
    Body::new("Mars", 42_828.37, 3389.5)
}
