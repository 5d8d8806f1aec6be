#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for integer-only line rasterization."]
#![doc = ""]
#![doc = "This crate maps two grid points to the ordered run of pixels that best"]
#![doc = "approximates the segment between them, using one Bresenham decision-parameter"]
#![doc = "engine for every slope and direction."]

extern crate alloc;

use alloc::vec::Vec;

pub mod line;
pub mod observer;
mod path;
mod point;
mod segment;

pub use line::Line;
pub use observer::RasterObserver;
pub use path::PixelPath;
pub use point::GridPoint;
pub use segment::{Axis, LineCase, Segment};

/// Rasterizes the segment from `p1` to `p2`.
///
/// The path starts at `p1`, ends at `p2` and holds
/// `max(|dx|, |dy|) + 1` pixels. Swapping the endpoints yields the same
/// pixels in reverse order. Rasterization is total: every pair of `i32`
/// points, including `p1 == p2`, has a defined result.
///
/// # Examples
///
/// ```
/// use pixline_raster::{rasterize, GridPoint};
///
/// let path = rasterize(GridPoint::new(0, 0), GridPoint::new(5, 2));
/// let ys: Vec<i32> = path.iter().map(|p| p.y).collect();
/// assert_eq!(ys, [0, 0, 1, 1, 2, 2]);
/// ```
pub fn rasterize(p1: GridPoint, p2: GridPoint) -> PixelPath {
    rasterize_segment_with(Segment::new(p1, p2), &mut ())
}

/// Rasterizes `segment`, see [`rasterize`].
pub fn rasterize_segment(segment: &Segment) -> PixelPath {
    rasterize_segment_with(*segment, &mut ())
}

/// Rasterizes the segment from `p1` to `p2`, reporting progress to `observer`.
///
/// # Arguments
///
/// * `p1`: Start of the path.
/// * `p2`: End of the path.
/// * `observer`: Receives the dispatched case, every pixel with its decision
///   parameter, and the finished path.
///
/// # Returns
///
/// The same path [`rasterize`] returns for these endpoints.
pub fn rasterize_with<O>(p1: GridPoint, p2: GridPoint, observer: &mut O) -> PixelPath
where
    O: RasterObserver + ?Sized,
{
    rasterize_segment_with(Segment::new(p1, p2), observer)
}

fn rasterize_segment_with<O>(segment: Segment, observer: &mut O) -> PixelPath
where
    O: RasterObserver + ?Sized,
{
    observer.on_case(&segment, segment.case());

    let (_, swapped) = segment.scan_order();
    let mut line = Line::new(segment);
    let mut points = Vec::with_capacity(line.size_hint().1.unwrap_or(0));
    while let Some(pixel) = line.next() {
        observer.on_pixel(pixel, line.last_decision());
        points.push(pixel);
    }
    if swapped {
        points.reverse();
    }

    let path = PixelPath::from_points(points);
    observer.on_finish(&path);
    path
}
