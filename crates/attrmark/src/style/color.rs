//! RGBA colors and hex notation.

use serde::Serialize;

/// An RGBA color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    ///
    /// This is what a `<font color="...">` attribute with an unusable value
    /// resolves to.
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parses `#RRGGBBAA` or `#RRGGBB` notation.
    ///
    /// Six-digit colors are fully opaque. Returns `None` for a missing `#`,
    /// any other digit count, or non-hex digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attrmark::Color;
    ///
    /// let red = Color::from_hex("#FF0000").unwrap();
    /// assert_eq!(red, Color::rgba(1.0, 0.0, 0.0, 1.0));
    /// assert!(Color::from_hex("#F00").is_none());
    /// ```
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let n = u32::from_str_radix(digits, 16).ok()?;
        let [b0, b1, b2, b3] = n.to_be_bytes();
        match digits.len() {
            8 => Some(Self::from_rgba8(b0, b1, b2, b3)),
            6 => Some(Self::from_rgba8(b1, b2, b3, 0xff)),
            _ => None,
        }
    }

    /// Returns the channels quantized to 8 bits.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Formats the color as lowercase `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }

    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}
