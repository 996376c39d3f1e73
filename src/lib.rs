// src/lib.rs

//! LED strip visualization renderer.
//!
//! Renders a 1-D or 2-D grid of LEDs onto a raster surface. Frames arrive
//! as flat hex strings, eight characters per LED packing a 32-bit ARGB
//! value; each decoded value is painted as a square block into an owned
//! RGBA pixel buffer, which is then blitted to the output `Surface` in a
//! single present. Concrete surfaces are host glue behind the one-method
//! `Surface` trait.

// Declare modules
pub mod buffer;
pub mod color;
pub mod config;
pub mod display;
pub mod frame;
pub mod host;
pub mod renderer;

// Re-export the host-facing surface of the crate.
pub use config::RendererOptions;
pub use display::{HeadlessSurface, Surface, SurfaceRegistry};
pub use host::RendererHost;
pub use renderer::{RendererError, StripRenderer};
