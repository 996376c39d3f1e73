// src/frame.rs

//! Frame decoding.
//!
//! A frame arrives as one flat hex string, eight characters per LED with
//! no delimiters, each group packing a 32-bit ARGB value.

use crate::color::Argb;
use log::warn;

/// Hex characters per encoded LED value.
pub const HEX_CHARS_PER_LED: usize = 8;

/// Decodes a frame hex string into per-LED color slots.
///
/// The string is walked in fixed 8-character groups; a trailing group
/// shorter than 8 characters is dropped outright. A full group that is not
/// valid hex yields `None` for its slot, so the positions of later LEDs
/// never shift — the renderer leaves such slots at the background color.
pub fn decode_frame(hex: &str) -> Vec<Option<Argb>> {
    hex.as_bytes()
        .chunks_exact(HEX_CHARS_PER_LED)
        .enumerate()
        .map(|(i, group)| {
            let parsed = std::str::from_utf8(group)
                .ok()
                .and_then(|s| u32::from_str_radix(s, 16).ok());
            if parsed.is_none() {
                warn!("Frame group {} is not valid hex; leaving that LED unpainted.", i);
            }
            parsed.map(Argb)
        })
        .collect()
}
