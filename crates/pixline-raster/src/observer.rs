//! Hooks for watching a rasterization as it runs.

use crate::{GridPoint, LineCase, PixelPath, Segment};

/// Receives progress from [`crate::rasterize_with`].
///
/// All methods default to doing nothing, so an implementation only
/// overrides what it cares about. Pixels are reported in scan order, before
/// the path is turned to run from the first endpoint to the second.
pub trait RasterObserver {
    /// Called once with the segment and the case it was dispatched to.
    fn on_case(&mut self, _segment: &Segment, _case: LineCase) {}

    /// Called for every pixel with the decision parameter that selected it.
    ///
    /// `decision` is `None` for the starting endpoint.
    fn on_pixel(&mut self, _pixel: GridPoint, _decision: Option<i64>) {}

    /// Called with the finished path.
    fn on_finish(&mut self, _path: &PixelPath) {}
}

/// The no-op observer.
impl RasterObserver for () {}

impl<O: RasterObserver + ?Sized> RasterObserver for &mut O {
    fn on_case(&mut self, segment: &Segment, case: LineCase) {
        (**self).on_case(segment, case);
    }

    fn on_pixel(&mut self, pixel: GridPoint, decision: Option<i64>) {
        (**self).on_pixel(pixel, decision);
    }

    fn on_finish(&mut self, path: &PixelPath) {
        (**self).on_finish(path);
    }
}
