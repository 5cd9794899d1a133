//! This module contains presets for natural satellites.

use crate::Body;

/// Returns the Moon.
pub fn the_moon() -> Body {
    Body::new("The Moon", 4902.800066, 1737.4)
}
