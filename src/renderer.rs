// src/renderer.rs

//! This module defines the `StripRenderer`.
//!
//! The `StripRenderer` turns full-frame LED color updates (flat hex
//! strings, one 32-bit ARGB value per LED) into pixels on an output
//! `Surface`. It owns the RGBA pixel buffer it paints into and the surface
//! it blits to; layout (block size, spacing, horizontal reversal) comes
//! from `RendererOptions`. It is deliberately a thin drawing routine:
//! scheduling, animation, and the transport that produces hex strings all
//! live with the host.

use crate::buffer::PixelBuffer;
use crate::color::{Argb, Rgb};
use crate::config::RendererOptions;
use crate::display::{Surface, SurfaceRegistry};
use crate::frame::decode_frame;

use anyhow::Result;
use log::{debug, trace, warn};
use std::fmt;

/// Errors that abort a renderer call outright, leaving its state
/// untouched. Every other anomaly is tolerated by dropping or clipping
/// the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererError {
    /// No surface with the requested id is registered.
    SurfaceNotFound(String),
    /// A dimension setter was given a value below 1.
    InvalidDimension { name: &'static str, value: usize },
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererError::SurfaceNotFound(id) => {
                write!(f, "surface with id '{}' not found", id)
            }
            RendererError::InvalidDimension { name, value } => {
                write!(f, "{} must be at least 1 (got {})", name, value)
            }
        }
    }
}

impl std::error::Error for RendererError {}

// Manual impl: the surface trait object has no `Debug`, and dumping the
// raw pixel bytes would drown the output anyway.
impl fmt::Debug for StripRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripRenderer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_size", &self.pixel_size)
            .field("led_spacing", &self.led_spacing)
            .field("reversed", &self.reversed)
            .field("background", &self.background)
            .field("output_width", &self.buffer.width())
            .field("output_height", &self.buffer.height())
            .finish_non_exhaustive()
    }
}

/// Renders a 1-D or 2-D LED grid onto a raster surface.
///
/// Each LED occupies a `pixel_size x pixel_size` block, with `led_spacing`
/// output pixels between neighbouring blocks. LED index `i` maps row-major
/// onto the grid: column `i % width`, row `i / width`.
pub struct StripRenderer {
    surface: Box<dyn Surface>,
    /// LED columns.
    width: usize,
    /// LED rows (1 for a plain strip).
    height: usize,
    pixel_size: usize,
    led_spacing: usize,
    reversed: bool,
    background: Rgb,
    buffer: PixelBuffer,
}

impl StripRenderer {
    /// Creates a renderer targeting the surface registered under
    /// `surface_id`, taking exclusive ownership of that surface out of the
    /// registry. Allocates the pixel buffer for the initial configuration
    /// and performs an initial clear, so the surface shows the background
    /// immediately.
    ///
    /// # Errors
    /// `RendererError::SurfaceNotFound` if no such surface is registered.
    pub fn new(
        surfaces: &mut SurfaceRegistry,
        surface_id: &str,
        width: usize,
        height: usize,
        options: RendererOptions,
    ) -> Result<Self> {
        let surface = surfaces
            .take(surface_id)
            .ok_or_else(|| RendererError::SurfaceNotFound(surface_id.to_string()))?;

        let background = Rgb::parse(&options.background_color);
        let buffer = PixelBuffer::new(
            Self::output_extent(width, options.pixel_size, options.led_spacing),
            Self::output_extent(height, options.pixel_size, options.led_spacing),
        );

        let mut renderer = StripRenderer {
            surface,
            width,
            height,
            pixel_size: options.pixel_size,
            led_spacing: options.led_spacing,
            reversed: options.reversed,
            background,
            buffer,
        };
        renderer.clear()?;
        Ok(renderer)
    }

    /// Output pixels spanned by `count` LEDs along one axis:
    /// `count * (pixel_size + led_spacing) - led_spacing`.
    fn output_extent(count: usize, pixel_size: usize, led_spacing: usize) -> usize {
        // Saturating so that zero LEDs along an axis yields an empty
        // buffer rather than an underflow.
        (count * (pixel_size + led_spacing)).saturating_sub(led_spacing)
    }

    /// Reallocates the pixel buffer from the current configuration and
    /// clears it to the background.
    fn rebuild_buffer(&mut self) -> Result<()> {
        self.buffer = PixelBuffer::new(
            Self::output_extent(self.width, self.pixel_size, self.led_spacing),
            Self::output_extent(self.height, self.pixel_size, self.led_spacing),
        );
        self.clear()
    }

    /// Changes the LED grid dimensions. The pixel buffer is reallocated
    /// and cleared; any previously rendered frame is gone.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        debug!("StripRenderer: resize to {}x{} LEDs", width, height);
        self.width = width;
        self.height = height;
        self.rebuild_buffer()
    }

    /// Fills the buffer with the background color at full opacity and
    /// presents it immediately.
    pub fn clear(&mut self) -> Result<()> {
        self.buffer.fill_opaque(self.background);
        self.surface.present(&self.buffer)
    }

    /// Renders one full frame from its hex encoding.
    ///
    /// The buffer is first reset to the background, so a frame covering
    /// fewer LEDs than the grid leaves the remainder background-colored.
    /// Decoded values map row-major (width-first); rows past the
    /// configured height are painted anyway and clipped by the buffer
    /// bounds check, which tolerates over-long input without erroring.
    /// The surface sees a single present after all blocks are painted.
    pub fn render_frame(&mut self, hex: &str) -> Result<()> {
        trace!("StripRenderer: rendering frame of {} chars", hex.len());
        self.buffer.fill_opaque(self.background);
        if self.width == 0 {
            warn!("StripRenderer has zero columns; nothing to paint.");
            return self.surface.present(&self.buffer);
        }
        for (i, slot) in decode_frame(hex).into_iter().enumerate() {
            if let Some(color) = slot {
                self.paint_led(i % self.width, i / self.width, color);
            }
        }
        self.surface.present(&self.buffer)
    }

    /// Paints one LED's block directly, without clearing first, and
    /// presents the result. Debug/test entry point; the rest of the
    /// buffer keeps whatever was last rendered.
    pub fn set_single_pixel(&mut self, index: usize, color: Argb) -> Result<()> {
        if self.width == 0 {
            warn!("StripRenderer has zero columns; ignoring set_single_pixel.");
            return self.surface.present(&self.buffer);
        }
        self.paint_led(index % self.width, index / self.width, color);
        self.surface.present(&self.buffer)
    }

    /// Fills the `pixel_size x pixel_size` block for the LED at grid
    /// position (x, y). Samples falling outside the buffer are skipped.
    fn paint_led(&mut self, x: usize, y: usize, color: Argb) {
        let step = self.pixel_size + self.led_spacing;
        let block_x = if self.reversed {
            // Mirrors column order only; rows keep their meaning.
            (self.width - 1 - x) * step
        } else {
            x * step
        };
        let block_y = y * step;

        let rgba = color.to_rgba();
        for dy in 0..self.pixel_size {
            for dx in 0..self.pixel_size {
                self.buffer.put(block_x + dx, block_y + dy, rgba);
            }
        }
    }

    /// Updates the horizontal reversal flag and clears. The previous
    /// frame is not repainted: reversal changes the spatial meaning of
    /// retained frame data, so the host re-renders if content should
    /// reappear.
    pub fn set_reversed(&mut self, reversed: bool) -> Result<()> {
        self.reversed = reversed;
        self.clear()
    }

    /// Changes the edge length of each LED block, reallocating and
    /// clearing the buffer.
    ///
    /// # Errors
    /// `RendererError::InvalidDimension` for a size below 1; the
    /// configuration is left untouched.
    pub fn set_pixel_size(&mut self, size: usize) -> Result<()> {
        if size < 1 {
            return Err(RendererError::InvalidDimension {
                name: "pixel size",
                value: size,
            }
            .into());
        }
        self.pixel_size = size;
        self.rebuild_buffer()
    }

    /// Total number of LEDs in the grid.
    pub fn led_count(&self) -> usize {
        self.width * self.height
    }

    // Read accessors, mostly for hosts and tests.

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_size(&self) -> usize {
        self.pixel_size
    }

    pub fn led_spacing(&self) -> usize {
        self.led_spacing
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// The current pixel buffer contents.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests;
