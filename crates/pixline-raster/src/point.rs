use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a pixel by column and row.
///
/// Coordinates are signed; negative values are valid and are left for the
/// consumer to clip.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint {
    /// The x-coordinate (column index).
    pub x: i32,
    /// The y-coordinate (row index).
    pub y: i32,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point with its x and y coordinates swapped.
    ///
    /// Mirrors the point across the main diagonal, which turns a steep
    /// segment into a shallow one.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self { x: self.y, y: self.x }
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
