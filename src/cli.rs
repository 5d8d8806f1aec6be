use std::path::PathBuf;

use clap::Parser;
use pixline_raster::{GridPoint, Segment};

use crate::settings::SegmentSettings;

#[derive(Parser, Debug)]
#[command(version, about = "Rasterizes a line segment and draws it on a tiled grid")]
pub struct Cli {
    #[arg(help = "Column of the first endpoint", allow_negative_numbers = true, requires_all = ["y1", "x2", "y2"])]
    pub x1: Option<i32>,

    #[arg(help = "Row of the first endpoint", allow_negative_numbers = true)]
    pub y1: Option<i32>,

    #[arg(help = "Column of the second endpoint", allow_negative_numbers = true)]
    pub x2: Option<i32>,

    #[arg(help = "Row of the second endpoint", allow_negative_numbers = true)]
    pub y2: Option<i32>,

    #[arg(help = "Window title, also used as the screenshot file name")]
    pub title: Option<String>,

    #[arg(help = "Configuration file (TOML)", long)]
    pub config: Option<PathBuf>,

    #[arg(help = "Print the grid as text instead of opening a window", long, default_value_t = false)]
    pub headless: bool,

    #[arg(help = "Do not save a screenshot of the first frame", long, default_value_t = false)]
    pub no_screenshot: bool,
}

impl Cli {
    /// The segment given on the command line, if all four coordinates were.
    pub fn segment(&self) -> Option<Segment> {
        match (self.x1, self.y1, self.x2, self.y2) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => {
                Some(Segment::new(GridPoint::new(x1, y1), GridPoint::new(x2, y2)))
            }
            _ => None,
        }
    }
}

/// What the demo draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Demo {
    pub segment: Segment,
    pub title: String,
}

/// Combines the command line with the configured fallback segment.
pub fn resolve_demo(cli: &Cli, defaults: &SegmentSettings) -> Demo {
    Demo {
        segment: cli.segment().unwrap_or_else(|| defaults.segment()),
        title: cli.title.clone().unwrap_or_else(|| defaults.title.clone()),
    }
}
