//! Planar coordinate type.
//!
//! Generated graphs live in the square `[0, 100) × [0, 100)`; points are
//! plain `f64` pairs and distances are Euclidean.

/// Side length of the square that random node coordinates are drawn from.
pub const COORD_EXTENT: f64 = 100.0;

/// A 2-D point in graph space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// `true` if both coordinates lie in `[0, COORD_EXTENT)`.
    #[inline]
    pub fn in_extent(self) -> bool {
        (0.0..COORD_EXTENT).contains(&self.x) && (0.0..COORD_EXTENT).contains(&self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
