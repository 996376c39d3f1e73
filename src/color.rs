// src/color.rs

//! Color types for the LED strip renderer: the packed 32-bit `Argb` value
//! carried per LED in a frame, and the `Rgb` background color parsed from
//! `#RRGGBB` configuration strings.

use log::warn;

/// Fallback background applied when a configured color string is not
/// understood: a fixed dark grey.
pub const FALLBACK_BACKGROUND: Rgb = Rgb {
    r: 26,
    g: 26,
    b: 26,
};

/// A packed 32-bit ARGB color value, one per LED per frame.
///
/// Channel layout: alpha in bits 31-24, red 23-16, green 15-8, blue 7-0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb(pub u32);

impl Argb {
    /// Packs four 8-bit channels into an `Argb` value.
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channel bytes in the RGBA order the pixel buffer stores.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

/// An opaque RGB color, used for the renderer background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses a `#RRGGBB` color string (hex digits, either case).
    ///
    /// Any unrecognized format falls back to `FALLBACK_BACKGROUND` with a
    /// warning rather than failing; a bad color in the configuration must
    /// not take the renderer down.
    pub fn parse(color: &str) -> Rgb {
        if let Some(hex) = color.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                let r = u8::from_str_radix(&hex[0..2], 16);
                let g = u8::from_str_radix(&hex[2..4], 16);
                let b = u8::from_str_radix(&hex[4..6], 16);
                if let (Ok(r), Ok(g), Ok(b)) = (r, g, b) {
                    return Rgb { r, g, b };
                }
            }
        }
        warn!(
            "Unrecognized color string '{}'; using default dark background.",
            color
        );
        FALLBACK_BACKGROUND
    }
}
