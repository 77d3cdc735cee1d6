use std::sync::Arc;

use iced::{advanced::image::Handle, Size};
use log::debug;

use crate::{
    catalog::TileDefinition,
    common::Color,
    raster::{fill_pattern, rasterize, PixelBuffer},
};

/// Logical size of the drawing surface and its scale factor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    pub size: Size,
    pub scale_factor: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Surface {
            size: Size::ZERO,
            scale_factor: 1.0,
        }
    }
}

impl Surface {
    /// Scale factor, falling back to 1 when the host reports nonsense.
    pub fn scale(&self) -> f32 {
        if self.scale_factor.is_finite() && self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        }
    }

    /// Resolution in physical pixels, never smaller than 1x1.
    pub fn backing_size(&self) -> (usize, usize) {
        let scale = self.scale();
        let physical = |logical: f32| (logical.max(0.0) * scale).ceil().max(1.0) as usize;
        (physical(self.size.width), physical(self.size.height))
    }
}

/// Covers the surface's backing resolution with repeats of `tile_image`.
pub fn render(tile_image: &PixelBuffer, surface: Surface) -> PixelBuffer {
    let (width, height) = surface.backing_size();
    fill_pattern(tile_image, width, height)
}

#[derive(Clone, Debug)]
pub struct RenderRequest {
    pub generation: u64,
    pub tile: Arc<TileDefinition>,
    pub color: Color,
    pub surface: Surface,
}

/// A finished pattern image, sized in physical pixels.
#[derive(Clone, Debug)]
pub struct Painted {
    pub generation: u64,
    pub handle: Handle,
    pub width: usize,
    pub height: usize,
    pub surface: Surface,
}

impl Painted {
    /// Size to draw the image at so that one image pixel covers one
    /// physical pixel.
    pub fn logical_size(&self) -> Size {
        let scale = self.surface.scale();
        Size::new(self.width as f32 / scale, self.height as f32 / scale)
    }
}

/// Rasterizes, fills and uploads in one go.
pub fn build(request: RenderRequest) -> Painted {
    let tile_image = rasterize(&request.tile, request.color);
    let pattern = render(&tile_image, request.surface);
    let (width, height) = (pattern.width(), pattern.height());
    debug!(
        "Painted pattern #{} at {}x{}",
        request.generation, width, height
    );
    Painted {
        generation: request.generation,
        handle: Handle::from_rgba(width as u32, height as u32, pattern.into_rgba()),
        width,
        height,
        surface: request.surface,
    }
}

/// Background form of [`build`], run as a task so the window keeps showing
/// the previous image until this one is ready. Tasks are neither sequenced
/// nor cancelled: whichever finishes last ends up on screen.
pub async fn paint(request: RenderRequest) -> Painted {
    build(request)
}
