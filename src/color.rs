//! Tint type: the color representation used by every glass layer.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range, non-premultiplied, so that
//! theme transitions can interpolate each channel independently.

use floem::peniko::Color;

use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Tint {
    pub const WHITE: Tint = Tint::from_rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Tint = Tint::from_rgba(0.0, 0.0, 0.0, 1.0);

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// All four channels in `r, g, b, a` order.
    pub fn channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE.with_alpha(0.0)
    }
}

impl Tint {
    /// Create from f64 RGBA (all 0.0–1.0).
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Parse a hex string (with or without `#`, 6 or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 6-char hex defaults to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&stripped[range], 16)
                .ok()
                .map(|v| v as f64 / 255.0)
        };
        match stripped.len() {
            6 => Some(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 1.0,
            }),
            8 => Some(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => None,
        }
    }

    /// Per-channel linear interpolation towards `other`.
    pub fn lerp(&self, other: &Tint, t: f64) -> Tint {
        Tint {
            r: math::lerp(self.r, other.r, t),
            g: math::lerp(self.g, other.g, t),
            b: math::lerp(self.b, other.b, t),
            a: math::lerp(self.a, other.a, t),
        }
    }

    pub fn to_peniko(&self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}
