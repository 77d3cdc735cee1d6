use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::info;

use crate::raster::PixelBuffer;

pub fn encode_png<W: Write>(buffer: &PixelBuffer, w: W) -> Result<()> {
    let mut encoder = png::Encoder::new(w, buffer.width() as u32, buffer.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(buffer.as_rgba())?;
    writer.finish()?;
    Ok(())
}

pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    info!("Saving {}", path.display());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    encode_png(buffer, BufWriter::new(file))
}
