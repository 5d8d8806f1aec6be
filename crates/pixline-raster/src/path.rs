use alloc::vec::Vec;
use core::fmt;
use core::slice;

use crate::GridPoint;

/// The ordered pixels approximating a segment.
///
/// A path is never empty and never backtracks: consecutive pixels differ by
/// one unit along the driving axis and by at most one unit along the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelPath {
    points: Vec<GridPoint>,
}

impl PixelPath {
    pub(crate) fn from_points(points: Vec<GridPoint>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Number of pixels in the path. Always at least one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pixels as a slice.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// The first pixel of the path.
    pub fn first(&self) -> GridPoint {
        self.points[0]
    }

    /// The last pixel of the path.
    pub fn last(&self) -> GridPoint {
        self.points[self.points.len() - 1]
    }

    /// Iterates over the pixels in path order.
    pub fn iter(&self) -> slice::Iter<'_, GridPoint> {
        self.points.iter()
    }

    /// Returns `true` if the path covers `p`.
    pub fn contains(&self, p: GridPoint) -> bool {
        self.points.contains(&p)
    }

    /// Returns the same pixels in the opposite order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// Consumes the path and returns the underlying vector.
    pub fn into_vec(self) -> Vec<GridPoint> {
        self.points
    }
}

impl IntoIterator for PixelPath {
    type Item = GridPoint;
    type IntoIter = alloc::vec::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelPath {
    type Item = &'a GridPoint;
    type IntoIter = slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl AsRef<[GridPoint]> for PixelPath {
    fn as_ref(&self) -> &[GridPoint] {
        &self.points
    }
}

impl fmt::Display for PixelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
