// src/display/mod.rs
//! Output-surface abstraction.
//!
//! - `Surface`: the one blit primitive a renderer needs from its target.
//! - `SurfaceRegistry`: named surfaces the host has made available.
//! - `HeadlessSurface`: in-memory surface for tests and the demo driver.

pub mod headless;
pub mod surface;

pub use headless::HeadlessSurface;
pub use surface::{Surface, SurfaceRegistry};
