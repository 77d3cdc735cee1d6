use crate::{catalog::TileDefinition, common::Color};

/// Row-major RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let idx = (y * self.width + x) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }
}

/// Color used for foreground cells drawn over `background`.
///
/// Black backgrounds get white strokes; every other background gets black.
pub fn foreground_for(background: Color) -> Color {
    if background.is_black() {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

pub fn rasterize(tile: &TileDefinition, color: Color) -> PixelBuffer {
    let (width, height) = (tile.width(), tile.height());
    let foreground = foreground_for(color);

    let mut data: Vec<u8> = vec![];
    data.reserve_exact(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let c = if tile.is_foreground(x, y) {
                foreground
            } else {
                color
            };
            data.extend([c.red, c.green, c.blue]);
            data.push(255); // alpha channel
        }
    }
    PixelBuffer {
        width,
        height,
        data,
    }
}

/// Repeats `tile` in both axes, starting at the origin, to cover
/// `width` x `height` pixels.
pub fn fill_pattern(tile: &PixelBuffer, width: usize, height: usize) -> PixelBuffer {
    let row_bytes = tile.width * 4;
    let mut data: Vec<u8> = vec![];
    data.reserve_exact(width * height * 4);
    for y in 0..height {
        let src = &tile.data[(y % tile.height) * row_bytes..][..row_bytes];
        let mut remaining = width;
        while remaining > 0 {
            let n = remaining.min(tile.width);
            data.extend_from_slice(&src[..n * 4]);
            remaining -= n;
        }
    }
    PixelBuffer {
        width,
        height,
        data,
    }
}
