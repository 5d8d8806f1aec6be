use pixline_raster::{rasterize_with, GridPoint, LineCase, PixelPath, RasterObserver, Segment};

/// Prints every step of the decision-parameter loop.
struct PrintObserver;

impl RasterObserver for PrintObserver {
    fn on_case(&mut self, segment: &Segment, case: LineCase) {
        println!("Rasterizing {} as a {} line", segment, case);
    }

    fn on_pixel(&mut self, pixel: GridPoint, decision: Option<i64>) {
        match decision {
            Some(pk) => println!("  pk = {:>4} -> {}", pk, pixel),
            None => println!("  start     -> {}", pixel),
        }
    }

    fn on_finish(&mut self, path: &PixelPath) {
        println!("Done: {} pixels, {} -> {}", path.len(), path.first(), path.last());
    }
}

fn main() {
    let segments = [
        ((0, 0), (5, 2)),
        ((0, 0), (5, -2)),
        ((0, 0), (2, 5)),
        ((6, 4), (2, 4)),
    ];

    for (a, b) in segments {
        rasterize_with(a.into(), b.into(), &mut PrintObserver);
        println!();
    }
}
