use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use tile_viewer::{
    config::CatalogArgs,
    export::save_png,
    raster::{fill_pattern, rasterize},
};

/// Render one tile from the catalog to a PNG file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Name of the pattern to render
    #[arg(long)]
    pattern: String,

    /// Palette index of the background (0 = white ... 7 = black)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..8))]
    color: u8,

    /// Width of the output in pixels [default: tile width]
    #[arg(long)]
    width: Option<usize>,

    /// Height of the output in pixels [default: tile height]
    #[arg(long)]
    height: Option<usize>,

    /// PNG file to write
    #[arg(long, short)]
    output: PathBuf,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let catalog = args.catalog.load()?;
    let tile = catalog.tile(catalog.position(&args.pattern)?);
    let color = tile_viewer::common::PALETTE[args.color as usize];

    let mut image = rasterize(tile, color);
    if args.width.is_some() || args.height.is_some() {
        let width = args.width.unwrap_or(image.width()).max(1);
        let height = args.height.unwrap_or(image.height()).max(1);
        image = fill_pattern(&image, width, height);
    }
    info!(
        "Rendering '{}' at {}x{}",
        args.pattern,
        image.width(),
        image.height()
    );
    save_png(&image, &args.output)
}
