//! 2D direction vector helpers

use std::fmt;

use glam::Vec2;

/// Error returned when normalizing a vector of zero length.
///
/// The one call site in the collision response is structurally unable to
/// produce a zero vector (the horizontal component is always ±1 at that
/// point), so this surfacing at runtime means the deflection geometry is
/// broken. Callers treat it as a fatal assertion, not a recoverable error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateVectorError;

impl fmt::Display for DegenerateVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot normalize a vector with zero length")
    }
}

impl std::error::Error for DegenerateVectorError {}

/// Normalize a vector to unit length, preserving its direction.
pub fn normalize(v: Vec2) -> Result<Vec2, DegenerateVectorError> {
    let length = v.length();
    if length == 0.0 {
        return Err(DegenerateVectorError);
    }
    Ok(v / length)
}
