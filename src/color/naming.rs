//! HSV classification into human-readable color names
//!
//! Maps an (h, s, v) triple to a discrete label using an ordered decision
//! list: achromatic rules (White/Black/Gray) first, then hue bucketing,
//! then an optional Light/Dark modifier. Rule order is load-bearing; a
//! near-white sample must never fall through to "Light <hue>".

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::color::conversion::ColorConverter;
use crate::config::NamingThresholds;
use crate::constants::{hue, range};
use crate::{NamedColor, NamingError, Result};

/// Base color family of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    White,
    Black,
    Gray,
}

impl BaseColor {
    /// Canonical capitalized name
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseColor::Red => "Red",
            BaseColor::Orange => "Orange",
            BaseColor::Yellow => "Yellow",
            BaseColor::Green => "Green",
            BaseColor::Blue => "Blue",
            BaseColor::Purple => "Purple",
            BaseColor::Pink => "Pink",
            BaseColor::White => "White",
            BaseColor::Black => "Black",
            BaseColor::Gray => "Gray",
        }
    }

    /// Check whether this is one of the achromatic names
    ///
    /// Achromatic names never carry a Light/Dark modifier.
    pub fn is_achromatic(&self) -> bool {
        matches!(self, BaseColor::White | BaseColor::Black | BaseColor::Gray)
    }
}

impl fmt::Display for BaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brightness modifier applied to hued base colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Light,
    Dark,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Light => "Light",
            Modifier::Dark => "Dark",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete color name: base family plus optional modifier
///
/// Renders as one of 30 strings: the ten base names, each of the seven
/// hued names optionally prefixed with "Light " or "Dark ".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorLabel {
    pub base: BaseColor,
    pub modifier: Option<Modifier>,
}

impl ColorLabel {
    /// Label for an achromatic sample (no modifier by construction)
    pub fn achromatic(base: BaseColor) -> Self {
        Self {
            base,
            modifier: None,
        }
    }

    /// Label for a hued sample with an optional brightness modifier
    pub fn hued(base: BaseColor, modifier: Option<Modifier>) -> Self {
        Self { base, modifier }
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            Some(modifier) => write!(f, "{} {}", modifier, self.base),
            None => write!(f, "{}", self.base),
        }
    }
}

impl FromStr for ColorLabel {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        let (modifier, rest) = if let Some(rest) = s.strip_prefix("Light ") {
            (Some(Modifier::Light), rest)
        } else if let Some(rest) = s.strip_prefix("Dark ") {
            (Some(Modifier::Dark), rest)
        } else {
            (None, s)
        };

        let base = match rest {
            "Red" => BaseColor::Red,
            "Orange" => BaseColor::Orange,
            "Yellow" => BaseColor::Yellow,
            "Green" => BaseColor::Green,
            "Blue" => BaseColor::Blue,
            "Purple" => BaseColor::Purple,
            "Pink" => BaseColor::Pink,
            "White" => BaseColor::White,
            "Black" => BaseColor::Black,
            "Gray" => BaseColor::Gray,
            _ => {
                return Err(NamingError::UnknownLabel {
                    input: s.to_string(),
                })
            }
        };

        if modifier.is_some() && base.is_achromatic() {
            return Err(NamingError::UnknownLabel {
                input: s.to_string(),
            });
        }

        Ok(Self { base, modifier })
    }
}

impl Serialize for ColorLabel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorLabel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Classifier from HSV triples to color labels
pub struct ColorNamer {
    converter: ColorConverter,
    thresholds: NamingThresholds,
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorNamer {
    /// Create a namer with the default thresholds
    pub fn new() -> Self {
        Self::with_thresholds(NamingThresholds::default())
    }

    /// Create a namer with custom thresholds
    pub fn with_thresholds(thresholds: NamingThresholds) -> Self {
        Self {
            converter: ColorConverter::new(),
            thresholds,
        }
    }

    /// Classify an HSV triple into a color label
    ///
    /// Rules are evaluated in order: White, Black, Gray, then hue
    /// bucketing with a Light/Dark modifier. A sample caught by an
    /// achromatic rule never reaches the modifier step, so White/Black/
    /// Gray are returned bare even when the Light or Dark thresholds
    /// would also match.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees, [0, 360)
    /// * `s` - Saturation percentage, [0, 100]
    /// * `v` - Value percentage, [0, 100]
    ///
    /// # Errors
    ///
    /// Out-of-range inputs fail with `InvalidRange` (strict policy; no
    /// clamping).
    pub fn classify(&self, h: f32, s: f32, v: f32) -> Result<ColorLabel> {
        if !h.is_finite() || h < 0.0 || h >= range::HUE_DEGREES {
            return Err(NamingError::InvalidRange {
                component: "hue",
                value: h,
                min: 0.0,
                max: range::HUE_DEGREES,
            });
        }
        if !s.is_finite() || s < 0.0 || s > range::PERCENT {
            return Err(NamingError::InvalidRange {
                component: "saturation",
                value: s,
                min: 0.0,
                max: range::PERCENT,
            });
        }
        if !v.is_finite() || v < 0.0 || v > range::PERCENT {
            return Err(NamingError::InvalidRange {
                component: "value",
                value: v,
                min: 0.0,
                max: range::PERCENT,
            });
        }

        let t = &self.thresholds;

        if s < t.achromatic_max_saturation && v > t.white_min_value {
            return Ok(ColorLabel::achromatic(BaseColor::White));
        }
        if v < t.black_max_value {
            return Ok(ColorLabel::achromatic(BaseColor::Black));
        }
        if s < t.achromatic_max_saturation {
            return Ok(ColorLabel::achromatic(BaseColor::Gray));
        }

        let base = Self::hue_bucket(h);

        let modifier = if v > t.light_min_value && s < t.light_max_saturation {
            Some(Modifier::Light)
        } else if v < t.dark_max_value {
            Some(Modifier::Dark)
        } else {
            None
        };

        Ok(ColorLabel::hued(base, modifier))
    }

    /// Name a hex color sample end to end
    ///
    /// Composes conversion and classification, returning the normalized
    /// hex, the sRGB swatch color, the intermediate HSV triple, and the
    /// label.
    ///
    /// # Errors
    ///
    /// Returns `MalformedColor` if the hex string is structurally invalid.
    pub fn name_hex(&self, hex: &str) -> Result<NamedColor> {
        let srgb = self.converter.hex_to_srgb(hex)?;
        let hsv = self.converter.srgb_to_hsv(srgb);
        let label = self.classify(hsv.h, hsv.s, hsv.v)?;
        Ok(NamedColor {
            hex: self.converter.srgb_to_hex(srgb),
            srgb,
            hsv,
            label,
        })
    }

    /// Map a hue to its base color family
    ///
    /// Buckets are half-open; [345, 360) wraps back toward red.
    fn hue_bucket(h: f32) -> BaseColor {
        if h < hue::RED_MAX {
            BaseColor::Red
        } else if h < hue::ORANGE_MAX {
            BaseColor::Orange
        } else if h < hue::YELLOW_MAX {
            BaseColor::Yellow
        } else if h < hue::GREEN_MAX {
            BaseColor::Green
        } else if h < hue::BLUE_MAX {
            BaseColor::Blue
        } else if h < hue::PURPLE_MAX {
            BaseColor::Purple
        } else if h < hue::PINK_MAX {
            BaseColor::Pink
        } else {
            BaseColor::Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(h: f32, s: f32, v: f32) -> String {
        ColorNamer::new().classify(h, s, v).unwrap().to_string()
    }

    #[test]
    fn test_achromatic_rules() {
        assert_eq!(classify(0.0, 0.0, 100.0), "White");
        assert_eq!(classify(0.0, 0.0, 0.0), "Black");
        assert_eq!(classify(0.0, 0.0, 50.0), "Gray");
        // Black wins over gray when both saturation and value are low
        assert_eq!(classify(0.0, 10.0, 10.0), "Black");
        // Saturated but very dark samples are still black
        assert_eq!(classify(120.0, 90.0, 10.0), "Black");
    }

    #[test]
    fn test_white_precedes_light_modifier() {
        // Satisfies both the White rule and the Light thresholds;
        // the White rule must win
        assert_eq!(classify(200.0, 15.0, 85.0), "White");
    }

    #[test]
    fn test_hue_bucket_boundaries() {
        assert_eq!(classify(14.999, 80.0, 60.0), "Red");
        assert_eq!(classify(15.0, 80.0, 60.0), "Orange");
        assert_eq!(classify(44.999, 80.0, 60.0), "Orange");
        assert_eq!(classify(45.0, 80.0, 60.0), "Yellow");
        assert_eq!(classify(69.999, 80.0, 60.0), "Yellow");
        assert_eq!(classify(70.0, 80.0, 60.0), "Green");
        assert_eq!(classify(169.999, 80.0, 60.0), "Green");
        assert_eq!(classify(170.0, 80.0, 60.0), "Blue");
        assert_eq!(classify(259.999, 80.0, 60.0), "Blue");
        assert_eq!(classify(260.0, 80.0, 60.0), "Purple");
        assert_eq!(classify(299.999, 80.0, 60.0), "Purple");
        assert_eq!(classify(300.0, 80.0, 60.0), "Pink");
        assert_eq!(classify(344.999, 80.0, 60.0), "Pink");
        // Wrap-around toward red, capitalized like every other branch
        assert_eq!(classify(345.0, 80.0, 60.0), "Red");
        assert_eq!(classify(359.999, 80.0, 60.0), "Red");
    }

    #[test]
    fn test_light_dark_modifiers() {
        assert_eq!(classify(200.0, 30.0, 85.0), "Light Blue");
        assert_eq!(classify(5.0, 80.0, 30.0), "Dark Red");
        assert_eq!(classify(350.0, 80.0, 30.0), "Dark Red");
        // Bright but fully saturated hues stay unmodified
        assert_eq!(classify(200.0, 90.0, 85.0), "Blue");
        // Mid-value, mid-saturation hues stay unmodified
        assert_eq!(classify(31.0, 59.8, 76.1), "Orange");
    }

    #[test]
    fn test_out_of_range_rejected() {
        let namer = ColorNamer::new();
        let cases = [
            (360.0, 50.0, 50.0),
            (-0.001, 50.0, 50.0),
            (180.0, 100.001, 50.0),
            (180.0, -1.0, 50.0),
            (180.0, 50.0, 101.0),
            (180.0, 50.0, -0.5),
            (f32::NAN, 50.0, 50.0),
        ];
        for (h, s, v) in cases {
            let result = namer.classify(h, s, v);
            assert!(
                matches!(result, Err(NamingError::InvalidRange { .. })),
                "expected InvalidRange for ({}, {}, {})",
                h,
                s,
                v
            );
        }
    }

    #[test]
    fn test_fractional_thresholds_tolerated() {
        // Unrounded percentages straddling a threshold
        assert_eq!(classify(100.0, 19.999, 50.0), "Gray");
        assert_eq!(classify(100.0, 20.0, 50.0), "Green");
        assert_eq!(classify(100.0, 50.0, 39.999), "Dark Green");
        assert_eq!(classify(100.0, 50.0, 40.0), "Green");
    }

    #[test]
    fn test_label_display_and_parse() {
        let labels = ["Red", "Light Blue", "Dark Pink", "White", "Gray"];
        for text in labels {
            let label: ColorLabel = text.parse().unwrap();
            assert_eq!(label.to_string(), text);
        }
    }

    #[test]
    fn test_label_parse_rejects_unknown() {
        assert!("Chartreuse".parse::<ColorLabel>().is_err());
        assert!("light blue".parse::<ColorLabel>().is_err());
        // Achromatic names never take a modifier
        assert!("Light White".parse::<ColorLabel>().is_err());
        assert!("Dark Gray".parse::<ColorLabel>().is_err());
    }

    #[test]
    fn test_label_serde_as_string() {
        let label = ColorLabel::hued(BaseColor::Blue, Some(Modifier::Light));
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"Light Blue\"");
        let back: ColorLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }

    #[test]
    fn test_custom_thresholds() {
        // Widen the achromatic band; a mildly saturated sample turns gray
        let thresholds = NamingThresholds {
            achromatic_max_saturation: 30.0,
            ..NamingThresholds::default()
        };
        let namer = ColorNamer::with_thresholds(thresholds);
        assert_eq!(namer.classify(100.0, 25.0, 50.0).unwrap().to_string(), "Gray");
        assert_eq!(classify(100.0, 25.0, 50.0), "Green");
    }

    #[test]
    fn test_name_hex_end_to_end() {
        let namer = ColorNamer::new();
        let named = namer.name_hex("#C2894E").unwrap();
        assert_eq!(named.hex, "#C2894E");
        assert_eq!(named.label.to_string(), "Orange");
        assert_eq!(named.hsv.h, 31.0);
    }
}
