mod canvas;   // tile layout the path is drawn on
mod cli;      // command line arguments
mod error;
mod graphics; // macroquad window
mod settings; // `config`-backed settings
mod trace;    // tracing observer for the rasterizer

use anyhow::Context;
use clap::Parser;
use pixline_raster::rasterize_with;
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

use cli::Cli;
use trace::TracingObserver;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let settings = settings::load_settings(cli.config.as_deref())?;
    let demo = cli::resolve_demo(&cli, &settings.segment);
    info!(segment = %demo.segment, title = %demo.title, "Pixline started.");

    let mut observer = TracingObserver::default();
    let path = rasterize_with(demo.segment.a, demo.segment.b, &mut observer);

    println!("{} points to plot:", path.len());
    for p in &path {
        println!("{}, {}", p.x, p.y);
    }

    let layout = settings.window.layout()?;
    let plan = layout.plan(&path);
    if plan.clipped > 0 {
        warn!(
            clipped = plan.clipped,
            columns = layout.columns(),
            rows = layout.rows(),
            "Some pixels fall outside the canvas and will not be drawn."
        );
    }

    if cli.headless {
        print!("{}", layout.render_ascii(&path));
        return Ok(());
    }

    let screenshot = if settings.screenshot.enabled && !cli.no_screenshot {
        std::fs::create_dir_all(&settings.screenshot.directory).with_context(|| {
            format!(
                "Failed to create screenshot directory {}",
                settings.screenshot.directory.display()
            )
        })?;
        Some(settings.screenshot.path_for(&demo.title))
    } else {
        None
    };

    let conf = graphics::window_conf(&demo.title, &layout);
    let scene = graphics::Scene::new(layout, plan, demo.segment, screenshot);
    macroquad::Window::from_config(
        conf,
        graphics::run_visualization_loop(scene, settings.window.frame_interval()),
    );

    info!("Window closed.");
    Ok(())
}
