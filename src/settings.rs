use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use pixline_raster::{GridPoint, Segment};
use serde::Deserialize;
use tracing::{error, info};

use crate::canvas::TileLayout;
use crate::error::CanvasError;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "PIXLINE";

/// Everything the demo reads from configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub segment: SegmentSettings,
    pub screenshot: ScreenshotSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
    pub frame_interval_ms: u64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            width: 640,
            height: 480,
            tile_size: 80,
            frame_interval_ms: 1000,
        }
    }
}

impl WindowSettings {
    pub fn layout(&self) -> Result<TileLayout, CanvasError> {
        TileLayout::new(self.width, self.height, self.tile_size)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// The segment drawn when none is given on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SegmentSettings {
    pub from: GridPoint,
    pub to: GridPoint,
    pub title: String,
}

impl Default for SegmentSettings {
    fn default() -> Self {
        SegmentSettings {
            from: GridPoint::new(0, 0),
            to: GridPoint::new(0, 1),
            title: "Default".to_string(),
        }
    }
}

impl SegmentSettings {
    pub fn segment(&self) -> Segment {
        Segment::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScreenshotSettings {
    pub enabled: bool,
    pub directory: PathBuf,
}

impl Default for ScreenshotSettings {
    fn default() -> Self {
        ScreenshotSettings {
            enabled: true,
            directory: PathBuf::from("."),
        }
    }
}

impl ScreenshotSettings {
    /// Where the screenshot for a demo titled `title` is written.
    ///
    /// The title becomes a single file name inside `directory`: path
    /// separators and other characters that are not portable in file names
    /// are replaced by `_`, and an empty title falls back to `screenshot`.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.directory.join(format!("{}.png", file_stem_for(title)))
    }
}

fn file_stem_for(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    match stem.as_str() {
        "" | "." | ".." => "screenshot".to_string(),
        _ => stem,
    }
}

/// Loads settings from `path`, or from `config/default.toml` if it exists,
/// then applies `PIXLINE__SECTION__KEY` environment overrides.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(p) => {
            info!("Attempting to load configuration from {}", p.display());
            File::from(p).required(true)
        }
        None => {
            info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);
            File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false)
        }
    };

    let settings: Result<Settings, ConfigError> = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = settings_from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window.width, 640);
        assert_eq!(settings.window.height, 480);
        assert_eq!(settings.window.tile_size, 80);
        assert_eq!(settings.segment.segment(), Segment::new(GridPoint::new(0, 0), GridPoint::new(0, 1)));
        assert_eq!(settings.segment.title, "Default");
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let settings = settings_from_toml(include_str!("../config/default.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [window]
            tile_size = 40

            [segment]
            from = { x = -3, y = 2 }
            to = { x = 9, y = 5 }
            title = "negative start"
        "#;
        let settings = settings_from_toml(toml).unwrap();
        assert_eq!(settings.window.tile_size, 40);
        assert_eq!(settings.window.width, 640);
        assert_eq!(settings.segment.from, GridPoint::new(-3, 2));
        assert_eq!(settings.segment.to, GridPoint::new(9, 5));
        assert_eq!(settings.segment.title, "negative start");
        assert!(settings.screenshot.enabled);
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let toml = "[window]\ntile_size = \"big\"\n";
        assert!(settings_from_toml(toml).is_err());
    }

    #[test]
    fn test_layout_validation() {
        let mut window = WindowSettings::default();
        assert!(window.layout().is_ok());
        window.tile_size = 0;
        assert!(matches!(window.layout(), Err(CanvasError::InvalidTileSize(_))));
    }

    #[test]
    fn test_screenshot_path() {
        let screenshot = ScreenshotSettings {
            enabled: true,
            directory: PathBuf::from("shots"),
        };
        assert_eq!(screenshot.path_for("diag"), PathBuf::from("shots").join("diag.png"));
        assert_eq!(screenshot.path_for("steep line"), PathBuf::from("shots").join("steep line.png"));
    }

    #[test]
    fn test_screenshot_title_cannot_leave_directory() {
        let screenshot = ScreenshotSettings {
            enabled: true,
            directory: PathBuf::from("shots"),
        };
        assert_eq!(screenshot.path_for("run/1"), PathBuf::from("shots").join("run_1.png"));
        assert_eq!(screenshot.path_for("a\\b:c"), PathBuf::from("shots").join("a_b_c.png"));
        assert_eq!(screenshot.path_for("../up"), PathBuf::from("shots").join(".._up.png"));
        assert_eq!(screenshot.path_for("/abs"), PathBuf::from("shots").join("_abs.png"));
        assert_eq!(screenshot.path_for(".."), PathBuf::from("shots").join("screenshot.png"));
        assert_eq!(screenshot.path_for("  "), PathBuf::from("shots").join("screenshot.png"));

        let path = screenshot.path_for("run/1");
        assert_eq!(path.parent(), Some(Path::new("shots")));
    }

    #[test]
    fn test_frame_interval() {
        let window = WindowSettings { frame_interval_ms: 250, ..WindowSettings::default() };
        assert_eq!(window.frame_interval(), Duration::from_millis(250));
    }
}
