//! Renderer entry point.
//!
//! No command-line arguments: the scene, resolution, and output path
//! all come from `RenderConfig::default()` (600x600, radius-120
//! sphere, `sphere.bmp`).

use std::time::Instant;

use anyhow::Result;
use orb_render::{render, write_bmp, RenderConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = RenderConfig::default();

    log::info!(
        "Rendering {}x{} sphere silhouette (radius {})...",
        config.width,
        config.height,
        config.sphere_radius
    );

    let start = Instant::now();
    let image = render(&config);
    log::info!("Rendered in {:?}", start.elapsed());

    write_bmp(
        &config.output_path,
        config.width,
        config.height,
        &image.pixels,
        config.channel_policy,
    )?;
    log::info!("Saved to {}", config.output_path.display());

    Ok(())
}
