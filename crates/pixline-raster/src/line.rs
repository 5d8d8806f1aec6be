//! The decision-parameter engine.
//!
//! Every segment is rasterized by the same recurrence. Segments driven by
//! the y axis are transposed on the way in, run through the shallow-slope
//! loop, and transposed back on the way out:
//!
//! ```text
//! pk(0)   = 2|dy| - dx
//! pk <= 0 : keep y,          pk += 2|dy|
//! pk >  0 : y += sign(dy),   pk += 2|dy| - 2dx
//! ```
//!
//! `dx`, `dy` and the decision parameter are `i64`, so any two `i32`
//! endpoints are supported without overflow.

use core::iter::FusedIterator;

use crate::{Axis, GridPoint, LineCase, Segment};

/// Lazy iterator over the pixels of a segment, in scan order.
///
/// Scan order means the driving coordinate never decreases: `Line` yields
/// the same sequence for `a -> b` and `b -> a`. Use [`crate::rasterize`]
/// for a path that runs from the first endpoint to the second.
#[derive(Debug, Clone)]
pub struct Line {
    case: LineCase,
    transposed: bool,
    // Current pixel and end column, in (possibly transposed) scan space.
    x: i32,
    y: i32,
    end_x: i32,
    step_y: i32,
    decision: i64,
    two_ady: i64,
    two_dx: i64,
    last_decision: Option<i64>,
    started: bool,
    finished: bool,
}

impl Line {
    /// Prepares the pixels of `segment` for iteration.
    pub fn new(segment: Segment) -> Self {
        let case = segment.case();
        let (scan, _) = segment.scan_order();
        let transposed = case.driving_axis() == Axis::Y;
        let (start, end) = if transposed {
            (scan.a.transpose(), scan.b.transpose())
        } else {
            (scan.a, scan.b)
        };

        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        let ady = dy.abs();

        Line {
            case,
            transposed,
            x: start.x,
            y: start.y,
            end_x: end.x,
            step_y: if dy < 0 { -1 } else { 1 },
            decision: 2 * ady - dx,
            two_ady: 2 * ady,
            two_dx: 2 * dx,
            last_decision: None,
            started: false,
            finished: false,
        }
    }

    /// Convenience constructor from two endpoints.
    pub fn between(a: GridPoint, b: GridPoint) -> Self {
        Self::new(Segment::new(a, b))
    }

    /// The case the segment was classified as.
    pub fn case(&self) -> LineCase {
        self.case
    }

    /// The decision parameter that selected the pixel most recently
    /// yielded, or `None` before the second pixel.
    ///
    /// The first pixel is always an endpoint and needs no decision.
    pub fn last_decision(&self) -> Option<i64> {
        self.last_decision
    }

    /// Number of pixels left to yield.
    pub fn remaining(&self) -> u64 {
        if self.finished {
            return 0;
        }
        let left = (i64::from(self.end_x) - i64::from(self.x)) as u64;
        if self.started { left } else { left + 1 }
    }

    fn emit(&self) -> GridPoint {
        let p = GridPoint::new(self.x, self.y);
        if self.transposed { p.transpose() } else { p }
    }
}

impl Iterator for Line {
    type Item = GridPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }
        if self.x == self.end_x {
            self.finished = true;
            return None;
        }

        self.x += 1;
        self.last_decision = Some(self.decision);
        if self.decision <= 0 {
            self.decision += self.two_ady;
        } else {
            self.y += self.step_y;
            self.decision += self.two_ady - self.two_dx;
        }
        Some(self.emit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Line {}
