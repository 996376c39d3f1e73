// src/display/headless.rs
//! Headless in-memory surface implementation.

use crate::buffer::PixelBuffer;
use crate::display::surface::Surface;
use anyhow::Result;
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Captured {
    present_count: usize,
    last_frame: Option<PixelBuffer>,
}

/// A surface that records presented frames instead of displaying them.
///
/// Clones share the same capture state, so a test (or the demo driver) can
/// keep one handle while the renderer owns the other.
#[derive(Clone, Default)]
pub struct HeadlessSurface {
    captured: Rc<RefCell<Captured>>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far.
    pub fn present_count(&self) -> usize {
        self.captured.borrow().present_count
    }

    /// A copy of the most recently presented frame, if any.
    pub fn last_frame(&self) -> Option<PixelBuffer> {
        self.captured.borrow().last_frame.clone()
    }
}

impl Surface for HeadlessSurface {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        trace!(
            "HeadlessSurface: present {}x{}",
            frame.width(),
            frame.height()
        );
        let mut captured = self.captured.borrow_mut();
        captured.present_count += 1;
        captured.last_frame = Some(frame.clone());
        Ok(())
    }
}
