use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A single visualisation arrow. A `None` direction means the arrow is
/// degenerate and must not be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugVector {
    pub origin: Vector3<f64>,
    pub direction: Option<Unit<Vector3<f64>>>,
    pub length: f64,
}

impl DebugVector {
    pub fn is_visible(&self) -> bool {
        self.direction.is_some() && self.length > 0.0
    }

    /// Arrow tip, if the arrow is drawable.
    pub fn tip(&self) -> Option<Vector3<f64>> {
        self.direction
            .filter(|_| self.length > 0.0)
            .map(|direction| self.origin + direction.into_inner() * self.length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugVectors {
    pub velocity: DebugVector,
    pub forward: DebugVector,
}
