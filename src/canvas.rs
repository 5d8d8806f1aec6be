//! Maps grid pixels onto the tiled demo window.
//!
//! The rasterizer knows nothing about the canvas; clipping pixels that
//! fall outside the window happens here.

use std::collections::HashSet;

use pixline_raster::{GridPoint, PixelPath};

use crate::error::CanvasError;

/// A square tile on screen, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// The on-screen cells of a path, plus how many pixels did not fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPlan {
    pub cells: Vec<TileRect>,
    pub clipped: usize,
}

/// A window divided into square tiles, one tile per grid pixel.
///
/// Grid `(0, 0)` is the top-left tile; rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    /// Window width in pixels
    width: u32,
    /// Window height in pixels
    height: u32,
    /// Edge length of one tile in pixels
    tile_size: u32,
}

impl TileLayout {
    /// Creates a new layout.
    ///
    /// # Arguments
    /// * `width` - Window width in pixels
    /// * `height` - Window height in pixels
    /// * `tile_size` - Edge length of one tile in pixels
    ///
    /// # Returns
    /// * `Result<Self, CanvasError>` - The layout, or an error if a size is
    ///   zero or the window does not fit in an `i32`
    pub fn new(width: u32, height: u32, tile_size: u32) -> Result<Self, CanvasError> {
        if tile_size == 0 {
            return Err(CanvasError::InvalidTileSize("Tile size must be positive"));
        }
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions("Width and height must be non-zero"));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(CanvasError::InvalidDimensions("Width and height must not exceed i32::MAX"));
        }
        Ok(TileLayout { width, height, tile_size })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Window size as the signed pair windowing APIs take.
    pub fn window_size(&self) -> (i32, i32) {
        // Checked in `new`.
        (self.width as i32, self.height as i32)
    }

    /// Number of tile columns. A partial tile at the right edge counts.
    pub fn columns(&self) -> u32 {
        self.width.div_ceil(self.tile_size)
    }

    /// Number of tile rows. A partial tile at the bottom edge counts.
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.tile_size)
    }

    /// Returns `true` if `p` has a tile on the canvas.
    pub fn contains(&self, p: GridPoint) -> bool {
        match (u32::try_from(p.x), u32::try_from(p.y)) {
            (Ok(x), Ok(y)) => x < self.columns() && y < self.rows(),
            _ => false,
        }
    }

    fn rect_at(&self, column: i32, row: i32) -> TileRect {
        let size = self.tile_size as f32;
        TileRect {
            x: column as f32 * size,
            y: row as f32 * size,
            size,
        }
    }

    /// Screen rectangle of the tile at `p`, or `None` if `p` is off the canvas.
    pub fn tile_rect(&self, p: GridPoint) -> Option<TileRect> {
        self.contains(p).then(|| self.rect_at(p.x, p.y))
    }

    /// Screen position of the centre of the tile at `p`.
    ///
    /// Not clipped: the reference line may run off the canvas.
    pub fn tile_center(&self, p: GridPoint) -> (f32, f32) {
        let half = self.tile_size as f32 / 2.0;
        let rect = self.rect_at(p.x, p.y);
        (rect.x + half, rect.y + half)
    }

    /// Every tile of the background grid, row by row.
    pub fn background_tiles(&self) -> impl Iterator<Item = TileRect> + '_ {
        let columns = self.columns() as i32;
        (0..self.rows() as i32)
            .flat_map(move |row| (0..columns).map(move |column| self.rect_at(column, row)))
    }

    /// Splits a path into drawable cells and clipped pixels.
    pub fn plan(&self, path: &PixelPath) -> PlotPlan {
        let cells: Vec<TileRect> = path.iter().filter_map(|&p| self.tile_rect(p)).collect();
        PlotPlan {
            clipped: path.len() - cells.len(),
            cells,
        }
    }

    /// Draws the canvas as text: `A` and `B` mark the endpoints, `#` the
    /// rest of the path, `.` empty tiles.
    pub fn render_ascii(&self, path: &PixelPath) -> String {
        let (start, end) = (path.first(), path.last());
        let on_path: HashSet<GridPoint> = path.iter().copied().collect();
        let mut out = String::new();
        for row in 0..self.rows() as i32 {
            for column in 0..self.columns() as i32 {
                let cell = GridPoint::new(column, row);
                let glyph = if cell == start {
                    'A'
                } else if cell == end {
                    'B'
                } else if on_path.contains(&cell) {
                    '#'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixline_raster::rasterize;

    #[test]
    fn test_layout_creation() {
        let layout = TileLayout::new(640, 480, 80).unwrap();
        assert_eq!(layout.width(), 640);
        assert_eq!(layout.height(), 480);
        assert_eq!(layout.columns(), 8);
        assert_eq!(layout.rows(), 6);
    }

    #[test]
    fn test_invalid_creation() {
        assert!(matches!(
            TileLayout::new(640, 480, 0),
            Err(CanvasError::InvalidTileSize(_))
        ));
        assert!(matches!(
            TileLayout::new(0, 480, 80),
            Err(CanvasError::InvalidDimensions(_))
        ));
        assert!(matches!(
            TileLayout::new(640, 0, 80),
            Err(CanvasError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_oversized_window_is_rejected() {
        assert!(matches!(
            TileLayout::new(u32::MAX, 480, 80),
            Err(CanvasError::InvalidDimensions(_))
        ));
        assert!(matches!(
            TileLayout::new(640, i32::MAX as u32 + 1, 80),
            Err(CanvasError::InvalidDimensions(_))
        ));
        let layout = TileLayout::new(i32::MAX as u32, 480, 80).unwrap();
        assert_eq!(layout.window_size(), (i32::MAX, 480));
    }

    #[test]
    fn test_partial_tiles_count() {
        let layout = TileLayout::new(100, 50, 40).unwrap();
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.background_tiles().count(), 6);
    }

    #[test]
    fn test_tile_rect_and_clipping() {
        let layout = TileLayout::new(640, 480, 80).unwrap();
        assert_eq!(
            layout.tile_rect(GridPoint::new(2, 1)),
            Some(TileRect { x: 160.0, y: 80.0, size: 80.0 })
        );
        assert!(layout.tile_rect(GridPoint::new(7, 5)).is_some());
        assert!(layout.tile_rect(GridPoint::new(8, 0)).is_none());
        assert!(layout.tile_rect(GridPoint::new(0, 6)).is_none());
        assert!(layout.tile_rect(GridPoint::new(-1, 0)).is_none());
        assert!(layout.tile_rect(GridPoint::new(0, i32::MIN)).is_none());
    }

    #[test]
    fn test_tile_center_is_unclipped() {
        let layout = TileLayout::new(640, 480, 80).unwrap();
        assert_eq!(layout.tile_center(GridPoint::new(0, 0)), (40.0, 40.0));
        assert_eq!(layout.tile_center(GridPoint::new(-1, 10)), (-40.0, 840.0));
    }

    #[test]
    fn test_plan_counts_clipped_pixels() {
        let layout = TileLayout::new(640, 480, 80).unwrap();
        let path = rasterize(GridPoint::new(-2, 0), GridPoint::new(3, 0));
        let plan = layout.plan(&path);
        assert_eq!(plan.cells.len(), 4);
        assert_eq!(plan.clipped, 2);
        assert_eq!(plan.cells[0], TileRect { x: 0.0, y: 0.0, size: 80.0 });
    }

    #[test]
    fn test_render_ascii() {
        let layout = TileLayout::new(6, 3, 1).unwrap();
        let path = rasterize(GridPoint::new(0, 0), GridPoint::new(5, 2));
        assert_eq!(layout.render_ascii(&path), "A#....\n..##..\n....#B\n");
    }

    #[test]
    fn test_render_ascii_long_path() {
        let layout = TileLayout::new(64, 64, 1).unwrap();
        let path = rasterize(GridPoint::new(0, 0), GridPoint::new(63, 63));
        let text = layout.render_ascii(&path);
        assert_eq!(text.lines().count(), 64);
        assert_eq!(text.matches('#').count(), 62);
        for (row, line) in text.lines().enumerate() {
            assert_eq!(line.len(), 64);
            assert_ne!(line.as_bytes()[row], b'.');
        }
    }
}
