//! RGBA color handling with hex parsing and serialization.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with normalized float channels (0.0-1.0).
///
/// Serializes as `{"r": ..., "g": ..., "b": ..., "a": ...}`. The default
/// is the mid-gray every new button starts with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0.0-1.0)
    pub r: f32,
    /// Green channel (0.0-1.0)
    pub g: f32,
    /// Blue channel (0.0-1.0)
    pub b: f32,
    /// Alpha channel (0.0-1.0)
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl Color {
    /// Creates a new opaque `Color` from normalized channel values.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Color` with an explicit alpha channel.
    #[must_use]
    pub const fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a `Color` from a hex string.
    ///
    /// Supports "#RRGGBB" and "#RRGGBBAA" (the leading '#' is optional,
    /// case is ignored). A 6-digit color is opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use rigpicker::models::Color;
    ///
    /// let red = Color::from_hex("#FF0000").unwrap();
    /// assert_eq!(red, Color::new(1.0, 0.0, 0.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 && hex.len() != 8 {
            anyhow::bail!("Invalid hex color '{hex}'. Expected RRGGBB or RRGGBBAA");
        }

        let channel = |range: std::ops::Range<usize>, name: &str| -> Result<f32> {
            let value = u8::from_str_radix(&hex[range], 16)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))?;
            Ok(f32::from(value) / 255.0)
        };

        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 { channel(6..8, "alpha")? } else { 1.0 };

        Ok(Self { r, g, b, a })
    }

    /// Converts the color to a hex string, "#RRGGBB" for opaque colors
    /// and "#RRGGBBAA" otherwise (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (to_byte(self.r), to_byte(self.g), to_byte(self.b));
        if (self.a - 1.0).abs() < f32::EPSILON {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{:02X}", to_byte(self.a))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Color {
    /// Default button color is opaque mid-gray.
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }
}
