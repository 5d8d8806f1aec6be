use pixline_raster::{GridPoint, LineCase, PixelPath, RasterObserver, Segment};
use tracing::{debug, info};

/// Logs a rasterization through `tracing`: the case at `info`, every pixel
/// with its decision parameter at `debug`.
#[derive(Debug, Default)]
pub struct TracingObserver {
    pixels: usize,
}

impl TracingObserver {
    /// Pixels reported so far.
    pub fn pixels(&self) -> usize {
        self.pixels
    }
}

impl RasterObserver for TracingObserver {
    fn on_case(&mut self, segment: &Segment, case: LineCase) {
        info!(%segment, %case, expected_pixels = segment.pixel_count(), "Rasterizing segment");
    }

    fn on_pixel(&mut self, pixel: GridPoint, decision: Option<i64>) {
        self.pixels += 1;
        debug!(x = pixel.x, y = pixel.y, decision = ?decision, "Pixel");
    }

    fn on_finish(&mut self, path: &PixelPath) {
        info!(pixels = path.len(), first = %path.first(), last = %path.last(), "Rasterization finished");
    }
}
