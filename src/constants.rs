//! Classification constants for perceptual color naming
//!
//! This module contains the compile-time thresholds and hue cuts that
//! define the naming scheme. Scalar thresholds can be overridden at
//! runtime via [`crate::NamingThresholds`]; the hue wheel partition is
//! fixed.

/// Classification thresholds (percentages in [0, 100])
pub mod thresholds {
    /// Saturation below which a sample is treated as achromatic
    pub const ACHROMATIC_MAX_SATURATION: f32 = 20.0;

    /// Value above which an achromatic sample reads as white
    pub const WHITE_MIN_VALUE: f32 = 80.0;

    /// Value below which any sample reads as black
    pub const BLACK_MAX_VALUE: f32 = 20.0;

    /// Value above which a hued sample may take the "Light" prefix
    pub const LIGHT_MIN_VALUE: f32 = 80.0;

    /// Saturation below which a bright hued sample takes "Light"
    pub const LIGHT_MAX_SATURATION: f32 = 60.0;

    /// Value below which a hued sample takes "Dark"
    pub const DARK_MAX_VALUE: f32 = 40.0;
}

/// Hue wheel partition in degrees
///
/// Each constant is the exclusive upper bound of its bucket; buckets are
/// half-open intervals. Hues at or above `PINK_MAX` wrap back toward red.
pub mod hue {
    pub const RED_MAX: f32 = 15.0;
    pub const ORANGE_MAX: f32 = 45.0;
    pub const YELLOW_MAX: f32 = 70.0;
    pub const GREEN_MAX: f32 = 170.0;
    pub const BLUE_MAX: f32 = 260.0;
    pub const PURPLE_MAX: f32 = 300.0;
    pub const PINK_MAX: f32 = 345.0;
}

/// Input domain bounds
pub mod range {
    /// Exclusive upper bound for hue in degrees
    pub const HUE_DEGREES: f32 = 360.0;

    /// Inclusive upper bound for saturation and value percentages
    pub const PERCENT: f32 = 100.0;
}

/// sRGB channel encoding
pub mod channel {
    /// Maximum value of an 8-bit sRGB channel
    pub const MAX_VALUE: f32 = 255.0;

    /// Number of hex digits in an RGB triple
    pub const HEX_DIGITS: usize = 6;
}
