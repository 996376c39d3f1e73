// src/buffer.rs

//! The RGBA pixel buffer the renderer paints into.
//!
//! Samples are stored row-major, four bytes per pixel in red, green, blue,
//! alpha order. A buffer is exclusively owned by its renderer and is
//! recreated whenever a configuration change affects the output size.

use crate::color::Rgb;

/// Bytes per RGBA sample.
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Box<[u8]>,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer of `width x height` RGBA samples.
    pub fn new(width: usize, height: usize) -> Self {
        let data = vec![0u8; width * height * BYTES_PER_PIXEL].into_boxed_slice();
        PixelBuffer {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, row-major. This is the blit source for surfaces.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Fills every sample with `color` at full opacity (alpha 255).
    pub fn fill_opaque(&mut self, color: Rgb) {
        for sample in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            sample[0] = color.r;
            sample[1] = color.g;
            sample[2] = color.b;
            sample[3] = 255;
        }
    }

    /// Writes one RGBA sample. Coordinates outside the buffer are ignored;
    /// callers rely on this to clip over-long frames.
    pub fn put(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * BYTES_PER_PIXEL;
        self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Reads one RGBA sample, or `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * BYTES_PER_PIXEL;
        let mut sample = [0u8; 4];
        sample.copy_from_slice(&self.data[idx..idx + BYTES_PER_PIXEL]);
        Some(sample)
    }
}
