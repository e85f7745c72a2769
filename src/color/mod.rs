//! Color conversion and naming module
//!
//! This module handles hex parsing, HSV decomposition, and the ordered
//! threshold classification that produces human-readable color names.

pub mod conversion;
pub mod naming;

pub use conversion::{ColorConverter, Hsv};
pub use naming::{BaseColor, ColorLabel, ColorNamer, Modifier};
