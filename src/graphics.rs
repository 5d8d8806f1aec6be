use std::path::{Path, PathBuf};
use std::time::Duration;

use macroquad::prelude::*;
use pixline_raster::Segment;
use spin_sleep::SpinSleeper;
use tracing::{info, warn};

use crate::canvas::{PlotPlan, TileLayout};

const TILE_OUTLINE: f32 = 4.0;
const TILE_OUTLINE_COLOR: Color = Color::new(0.0, 0.0, 100.0 / 255.0, 1.0);
// Path cells are drawn slightly smaller than a tile so the grid shows through.
const CELL_INSET: f32 = 4.0;
const REFERENCE_LINE_WIDTH: f32 = 2.0;

// Function to configure the macroquad window
pub fn window_conf(title: &str, layout: &TileLayout) -> Conf {
    Conf {
        window_title: title.to_string(),
        window_width: layout.window_size().0,
        window_height: layout.window_size().1,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Everything drawn each frame.
pub struct Scene {
    layout: TileLayout,
    plan: PlotPlan,
    line: ((f32, f32), (f32, f32)),
    screenshot: Option<PathBuf>,
}

impl Scene {
    pub fn new(layout: TileLayout, plan: PlotPlan, segment: Segment, screenshot: Option<PathBuf>) -> Self {
        let line = (layout.tile_center(segment.a), layout.tile_center(segment.b));
        Scene { layout, plan, line, screenshot }
    }

    fn draw(&self) {
        clear_background(BLACK);

        for tile in self.layout.background_tiles() {
            draw_rectangle(tile.x, tile.y, tile.size, tile.size, WHITE);
            draw_rectangle_lines(tile.x, tile.y, tile.size, tile.size, TILE_OUTLINE, TILE_OUTLINE_COLOR);
        }

        for cell in &self.plan.cells {
            let size = cell.size - CELL_INSET;
            draw_rectangle(cell.x, cell.y, size, size, YELLOW);
        }

        let ((x1, y1), (x2, y2)) = self.line;
        draw_line(x1, y1, x2, y2, REFERENCE_LINE_WIDTH, RED);
    }
}

/// Checks that `path` can be written before handing it to `export_png`,
/// which panics on I/O errors.
fn screenshot_target_ready(path: &Path) -> Result<(), String> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let meta = std::fs::metadata(parent)
        .map_err(|e| format!("directory {} is not accessible: {}", parent.display(), e))?;
    if !meta.is_dir() {
        return Err(format!("{} is not a directory", parent.display()));
    }
    if meta.permissions().readonly() {
        return Err(format!("directory {} is read-only", parent.display()));
    }
    Ok(())
}

fn save_screenshot(path: &Path) {
    if let Err(reason) = screenshot_target_ready(path) {
        warn!("Cannot save screenshot to {}: {}, skipping", path.display(), reason);
        return;
    }
    match path.to_str() {
        Some(p) => {
            get_screen_data().export_png(p);
            info!("Screenshot saved to {}", p);
        }
        None => warn!("Screenshot path {} is not valid UTF-8, skipping", path.display()),
    }
}

pub async fn run_visualization_loop(mut scene: Scene, frame_interval: Duration) {
    info!(
        columns = scene.layout.columns(),
        rows = scene.layout.rows(),
        cells = scene.plan.cells.len(),
        "Visualization loop starting..."
    );
    let sleeper = SpinSleeper::default();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, closing window.");
            break;
        }

        scene.draw();

        if let Some(path) = scene.screenshot.take() {
            save_screenshot(&path);
        }

        next_frame().await;
        sleeper.sleep(frame_interval);
    }
}
