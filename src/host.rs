// src/host.rs

//! Host-facing entry points.
//!
//! The original integration installed the renderer behind a well-known
//! global name and routed render/resize calls through it. Here the host
//! owns a `RendererHost` value instead: the same "one active renderer"
//! usage pattern, with no shared mutable global. Re-initializing replaces
//! the installed instance wholesale.

use crate::config::RendererOptions;
use crate::display::SurfaceRegistry;
use crate::renderer::StripRenderer;

use anyhow::Result;
use log::warn;

/// Owns the active renderer, if one has been initialized.
#[derive(Default)]
pub struct RendererHost {
    renderer: Option<StripRenderer>,
}

impl RendererHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a renderer on the surface registered under `surface_id` and
    /// installs it, replacing any previous instance wholesale. A failed
    /// construction leaves the previously installed instance in place.
    pub fn init(
        &mut self,
        surfaces: &mut SurfaceRegistry,
        surface_id: &str,
        width: usize,
        height: usize,
        options: RendererOptions,
    ) -> Result<&mut StripRenderer> {
        let renderer = StripRenderer::new(surfaces, surface_id, width, height, options)?;
        Ok(self.renderer.insert(renderer))
    }

    /// Renders one hex-encoded frame on the active renderer. A call
    /// before `init` is a no-op with a diagnostic, not a failure.
    pub fn render(&mut self, hex: &str) {
        match self.renderer.as_mut() {
            Some(renderer) => {
                if let Err(err) = renderer.render_frame(hex) {
                    warn!("Frame render failed: {}", err);
                }
            }
            None => warn!("LED renderer not initialized; dropping frame. Call init() first."),
        }
    }

    /// Resizes the active renderer's LED grid; `height` defaults to 1 for
    /// a plain strip. A call before `init` is a no-op with a diagnostic.
    pub fn resize(&mut self, width: usize, height: Option<usize>) {
        match self.renderer.as_mut() {
            Some(renderer) => {
                if let Err(err) = renderer.resize(width, height.unwrap_or(1)) {
                    warn!("Resize failed: {}", err);
                }
            }
            None => warn!("LED renderer not initialized; ignoring resize. Call init() first."),
        }
    }

    pub fn renderer(&self) -> Option<&StripRenderer> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut StripRenderer> {
        self.renderer.as_mut()
    }
}
