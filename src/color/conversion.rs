//! Hex color parsing and HSV decomposition
//!
//! Provides the conversion half of the naming pipeline:
//! - Validated parsing of 6-digit hex strings (optional `#` prefix)
//! - RGB to hue/saturation/value decomposition
//! - sRGB round-tripping for swatch display

use crate::{constants::channel, NamingError, Result};
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// Hue/saturation/value triple derived from a hex sample
///
/// `h` is an integer-valued degree in [0, 360); hue 0 doubles as the
/// achromatic fallback when saturation is zero. `s` and `v` are
/// unrounded percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f32,
    /// Saturation percentage
    pub s: f32,
    /// Value (brightness) percentage
    pub v: f32,
}

/// Converter from hex-encoded sRGB samples to HSV
#[derive(Debug, Clone, Copy)]
pub struct ColorConverter;

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Parse a hex color string into 8-bit RGB channels
    ///
    /// # Errors
    ///
    /// Returns `MalformedColor` if the string is not exactly 6 hex digits
    /// after stripping an optional leading `#`.
    fn parse_channels(&self, hex: &str) -> Result<(u8, u8, u8)> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != channel::HEX_DIGITS {
            return Err(NamingError::malformed(
                hex,
                format!(
                    "expected {} hex digits, got {}",
                    channel::HEX_DIGITS,
                    digits.len()
                ),
            ));
        }
        // Length is in bytes; reject non-ASCII before slicing pairs
        if !digits.is_ascii() {
            return Err(NamingError::malformed(
                hex,
                "expected only ASCII hex digits",
            ));
        }

        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|e| NamingError::malformed(hex, format!("invalid red channel: {}", e)))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|e| NamingError::malformed(hex, format!("invalid green channel: {}", e)))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|e| NamingError::malformed(hex, format!("invalid blue channel: {}", e)))?;

        Ok((r, g, b))
    }

    /// Convert a hex color string to an HSV triple
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#C2894E" or "c2894e")
    ///
    /// # Errors
    ///
    /// Returns `MalformedColor` if the input is structurally invalid.
    pub fn hex_to_hsv(&self, hex: &str) -> Result<Hsv> {
        Ok(self.srgb_to_hsv(self.hex_to_srgb(hex)?))
    }

    /// Decompose an sRGB color into an HSV triple
    ///
    /// Expects components in [0, 1]. Hue is computed from the dominant
    /// channel and rounded once to the nearest whole degree (negative
    /// results wrap by +360); saturation and value are returned as
    /// unrounded percentages.
    pub fn srgb_to_hsv(&self, srgb: Srgb) -> Hsv {
        let r = srgb.red;
        let g = srgb.green;
        let b = srgb.blue;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            // Achromatic: saturation is also 0, hue is a placeholder
            0.0
        } else {
            let sector = if max == r {
                ((g - b) / delta) % 6.0
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            let mut h = (sector * 60.0).round();
            if h < 0.0 {
                h += 360.0;
            }
            h
        };

        let s = if max == 0.0 { 0.0 } else { (delta / max) * 100.0 };
        let v = max * 100.0;

        Hsv { h, s, v }
    }

    /// Parse a hex color string to sRGB
    ///
    /// # Errors
    ///
    /// Returns `MalformedColor` if the input is structurally invalid.
    pub fn hex_to_srgb(&self, hex: &str) -> Result<Srgb> {
        let (r, g, b) = self.parse_channels(hex)?;
        Ok(Srgb::new(
            r as f32 / channel::MAX_VALUE,
            g as f32 / channel::MAX_VALUE,
            b as f32 / channel::MAX_VALUE,
        ))
    }

    /// Convert sRGB to a normalized hexadecimal color string
    ///
    /// # Returns
    ///
    /// Uppercase hex color string with leading `#` (e.g., "#FF0000")
    pub fn srgb_to_hex(&self, srgb: Srgb) -> String {
        let r = (srgb.red * channel::MAX_VALUE).round() as u8;
        let g = (srgb.green * channel::MAX_VALUE).round() as u8;
        let b = (srgb.blue * channel::MAX_VALUE).round() as u8;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}
