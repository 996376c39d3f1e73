// src/display/surface.rs
//! The `Surface` trait and the registry renderers resolve targets from.

use crate::buffer::PixelBuffer;
use anyhow::Result;
use std::collections::HashMap;

/// A raster target the renderer can blit its pixel buffer to.
///
/// Implementations are platform glue (a window, a shared-memory image, an
/// encoder) and live with the host; the renderer needs only this one
/// primitive. `present` receives the whole buffer after every LED block of
/// a frame has been painted — per-LED surface writes would tear visibly.
pub trait Surface {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()>;
}

/// Named surfaces the host has registered for renderers to resolve.
///
/// Resolving a surface removes it from the registry, so a surface is owned
/// by at most one renderer at a time.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Box<dyn Surface>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface under `id`, replacing any previous entry.
    pub fn register(&mut self, id: impl Into<String>, surface: Box<dyn Surface>) {
        self.surfaces.insert(id.into(), surface);
    }

    /// Takes the surface registered under `id`, if any.
    pub fn take(&mut self, id: &str) -> Option<Box<dyn Surface>> {
        self.surfaces.remove(id)
    }
}
