//! # Color Namer
//!
//! A Rust crate for naming dominant colors sampled from photographs.
//!
//! This library converts a hex-encoded sRGB sample into a human-readable
//! color name by:
//! - Parsing and validating the hex triple
//! - Decomposing it into hue/saturation/value
//! - Classifying the triple with an ordered threshold decision list
//!   (White/Black/Gray first, then seven hue families with Light/Dark
//!   modifiers)
//!
//! The engine is pure and synchronous: callers perform any asynchronous
//! acquisition (camera capture, palette sampling) before invoking it.
//!
//! ## Example
//!
//! ```rust
//! use colornamer::name_color;
//!
//! let named = name_color("#C2894E")?;
//! assert_eq!(named.label.to_string(), "Orange");
//! assert_eq!(named.hex, "#C2894E");
//! # Ok::<(), colornamer::NamingError>(())
//! ```

use palette::Srgb;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{BaseColor, ColorConverter, ColorLabel, ColorNamer, Hsv, Modifier};
pub use config::{NamingConfig, NamingThresholds};
pub use error::{NamingError, Result};

/// Complete naming result for a single color sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Normalized hexadecimal representation (uppercase, leading `#`)
    pub hex: String,
    /// sRGB color for swatch display
    pub srgb: Srgb,
    /// Derived hue/saturation/value triple
    pub hsv: Hsv,
    /// Human-readable color name
    pub label: ColorLabel,
}

/// Name a hex color sample using the default thresholds
///
/// This is the main entry point. It validates and parses the hex string,
/// decomposes it into HSV, and classifies the result.
///
/// # Arguments
///
/// * `hex` - Hex color string, 6 digits with optional leading `#`
///
/// # Errors
///
/// Returns `MalformedColor` if the input is not a valid 6-digit hex
/// color.
pub fn name_color(hex: &str) -> Result<NamedColor> {
    ColorNamer::new().name_hex(hex)
}

/// Convert a hex color string to an HSV triple using the default converter
///
/// # Errors
///
/// Returns `MalformedColor` if the input is structurally invalid.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv> {
    ColorConverter::new().hex_to_hsv(hex)
}

/// Classify an HSV triple using the default thresholds
///
/// # Errors
///
/// Returns `InvalidRange` if any component is outside its documented
/// range.
pub fn classify_hsv(h: f32, s: f32, v: f32) -> Result<ColorLabel> {
    ColorNamer::new().classify(h, s, v)
}
