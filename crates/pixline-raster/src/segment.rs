use core::fmt;

use crate::GridPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The axis along which a line advances by exactly one unit per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Columns drive the scan.
    X,
    /// Rows drive the scan.
    Y,
}

/// The geometric configuration of a segment.
///
/// Variants are listed in dispatch order: the first one whose condition
/// holds is the case of the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCase {
    /// Both endpoints coincide.
    Point,
    /// `dx == 0`.
    Vertical,
    /// `dy == 0`.
    Horizontal,
    /// `|dy| <= |dx|`, slope magnitude at most one.
    Shallow,
    /// `|dy| > |dx|`, slope magnitude above one.
    Steep,
}

impl LineCase {
    /// Returns the driving axis of segments in this case.
    ///
    /// A single point is scanned along x; it only ever yields one pixel.
    pub const fn driving_axis(self) -> Axis {
        match self {
            LineCase::Vertical | LineCase::Steep => Axis::Y,
            LineCase::Point | LineCase::Horizontal | LineCase::Shallow => Axis::X,
        }
    }
}

impl fmt::Display for LineCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineCase::Point => write!(f, "point"),
            LineCase::Vertical => write!(f, "vertical"),
            LineCase::Horizontal => write!(f, "horizontal"),
            LineCase::Shallow => write!(f, "shallow"),
            LineCase::Steep => write!(f, "steep"),
        }
    }
}

/// A pair of endpoints to rasterize.
///
/// The pair is unordered as far as the covered pixels go: `a -> b` and
/// `b -> a` produce the same cells.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// First endpoint.
    pub a: GridPoint,
    /// Second endpoint.
    pub b: GridPoint,
}

impl Segment {
    /// Creates a new segment from `a` to `b`.
    #[must_use]
    pub const fn new(a: GridPoint, b: GridPoint) -> Self {
        Self { a, b }
    }

    /// Returns `true` if both endpoints are the same point.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Returns `(b.x - a.x, b.y - a.y)`.
    ///
    /// Computed in `i64` so the difference of any two `i32` coordinates,
    /// and twice that difference, is representable.
    pub fn delta(&self) -> (i64, i64) {
        (
            i64::from(self.b.x) - i64::from(self.a.x),
            i64::from(self.b.y) - i64::from(self.a.y),
        )
    }

    /// Classifies the segment.
    pub fn case(&self) -> LineCase {
        let (dx, dy) = self.delta();
        if self.is_degenerate() {
            LineCase::Point
        } else if dx == 0 {
            LineCase::Vertical
        } else if dy == 0 {
            LineCase::Horizontal
        } else if dy.abs() <= dx.abs() {
            LineCase::Shallow
        } else {
            LineCase::Steep
        }
    }

    /// Number of pixels the rasterized segment contains, `max(|dx|, |dy|) + 1`.
    pub fn pixel_count(&self) -> u64 {
        let (dx, dy) = self.delta();
        dx.unsigned_abs().max(dy.unsigned_abs()) + 1
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self { a: self.b, b: self.a }
    }

    /// Normalizes the segment so the driving coordinate does not decrease
    /// from `a` to `b`.
    ///
    /// # Returns
    ///
    /// The normalized segment and whether the endpoints had to be swapped.
    pub fn scan_order(self) -> (Self, bool) {
        let swap = match self.case().driving_axis() {
            Axis::X => self.a.x > self.b.x,
            Axis::Y => self.a.y > self.b.y,
        };
        if swap { (self.reversed(), true) } else { (self, false) }
    }
}

impl From<(GridPoint, GridPoint)> for Segment {
    fn from((a, b): (GridPoint, GridPoint)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
        Segment::new(GridPoint::new(x1, y1), GridPoint::new(x2, y2))
    }

    #[test]
    fn test_case_dispatch_order() {
        assert_eq!(seg(2, 2, 2, 2).case(), LineCase::Point);
        assert_eq!(seg(3, 5, 3, 9).case(), LineCase::Vertical);
        assert_eq!(seg(2, 4, 6, 4).case(), LineCase::Horizontal);
        assert_eq!(seg(0, 0, 5, 2).case(), LineCase::Shallow);
        assert_eq!(seg(0, 0, 5, -2).case(), LineCase::Shallow);
        assert_eq!(seg(0, 0, 2, 5).case(), LineCase::Steep);
        assert_eq!(seg(0, 0, -2, -5).case(), LineCase::Steep);
    }

    #[test]
    fn test_diagonal_is_shallow() {
        // |dy| == |dx| falls in the shallow case.
        assert_eq!(seg(0, 0, 4, 4).case(), LineCase::Shallow);
        assert_eq!(seg(0, 0, -4, 4).case(), LineCase::Shallow);
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(seg(1, 1, 1, 1).pixel_count(), 1);
        assert_eq!(seg(0, 0, 5, 2).pixel_count(), 6);
        assert_eq!(seg(0, 0, -2, 7).pixel_count(), 8);
        assert_eq!(seg(i32::MIN, 0, i32::MAX, 0).pixel_count(), 1u64 << 32);
    }

    #[test]
    fn test_delta_does_not_overflow() {
        let s = seg(i32::MIN, i32::MAX, i32::MAX, i32::MIN);
        assert_eq!(s.delta(), (u32::MAX as i64, -(u32::MAX as i64)));
    }

    #[test]
    fn test_scan_order() {
        let (s, swapped) = seg(5, 2, 0, 0).scan_order();
        assert!(swapped);
        assert_eq!(s, seg(0, 0, 5, 2));

        let (s, swapped) = seg(0, 9, 1, 3).scan_order();
        assert!(swapped);
        assert_eq!(s, seg(1, 3, 0, 9));

        let (s, swapped) = seg(0, 0, -3, 1).scan_order();
        assert!(swapped);
        assert_eq!(s, seg(-3, 1, 0, 0));

        let (s, swapped) = seg(3, 5, 3, 9).scan_order();
        assert!(!swapped);
        assert_eq!(s, seg(3, 5, 3, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", seg(0, 0, 5, -2)), "(0, 0) -> (5, -2)");
        assert_eq!(format!("{}", LineCase::Steep), "steep");
    }
}
