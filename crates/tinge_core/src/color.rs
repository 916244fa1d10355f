//! RGB color for themes, with strict `#rrggbb` parsing and contrast calculation.
//!
//! Colors enter the system as hex strings (`#rrggbb`, no shorthand, no alpha)
//! and are stored as byte triplets, so a malformed color can only fail at the
//! parse boundary — never mid-render.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, Result};

/// RGB triplet. Use with any terminal or UI color API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Pure black, returned as the contrast color for light backgrounds.
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Pure white, returned as the contrast color for dark backgrounds.
pub const WHITE: Rgb = Rgb(255, 255, 255);

/// Luminance above this reads better with black text; at or below, white.
const CONTRAST_THRESHOLD: f64 = 0.5;

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    /// Tuple for ratatui/crossterm: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Parse a strict 6-digit hex color: leading `#`, then exactly six hex
    /// digits. Shorthand (`#fff`) and alpha (`#rrggbbaa`) are rejected.
    pub fn from_hex(input: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidColorFormat {
            input: input.to_string(),
        };
        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
        Ok(Rgb(r, g, b))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Perceived brightness in `[0, 1]`: `(0.299·R + 0.587·G + 0.114·B) / 255`.
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.0) + 0.587 * f64::from(self.1) + 0.114 * f64::from(self.2)) / 255.0
    }

    /// Readable foreground for this color as a background: black for light
    /// colors (luminance strictly above 0.5), white for dark colors.
    pub fn contrast(self) -> Rgb {
        if self.luminance() > CONTRAST_THRESHOLD {
            BLACK
        } else {
            WHITE
        }
    }
}

/// Parse `input` as `#rrggbb` and return its readable foreground color.
/// Malformed input fails with [CoreError::InvalidColorFormat].
pub fn contrast_of(input: &str) -> Result<Rgb> {
    Ok(Rgb::from_hex(input)?.contrast())
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

// Themes serialize colors as hex strings so the JSON shape matches what a
// generation backend would produce.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_channels() {
        let c = Rgb::from_hex("#0f172a").unwrap();
        assert_eq!(c, Rgb(15, 23, 42));
    }

    #[test]
    fn from_hex_accepts_uppercase_digits() {
        let c = Rgb::from_hex("#FF00aB").unwrap();
        assert_eq!(c, Rgb(255, 0, 171));
    }

    #[test]
    fn from_hex_rejects_missing_hash() {
        assert!(Rgb::from_hex("0f172a").is_err());
    }

    #[test]
    fn from_hex_rejects_shorthand() {
        assert!(Rgb::from_hex("#fff").is_err());
    }

    #[test]
    fn from_hex_rejects_alpha() {
        assert!(Rgb::from_hex("#11223344").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_chars() {
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("#12345z").is_err());
    }

    #[test]
    fn from_hex_rejects_empty() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#").is_err());
    }

    #[test]
    fn from_hex_error_carries_input() {
        let err = Rgb::from_hex("#xyz").unwrap_err();
        assert!(err.to_string().contains("#xyz"));
    }

    #[test]
    fn to_hex_round_trips() {
        let c = Rgb(30, 41, 59);
        assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
        assert_eq!(c.to_hex(), "#1e293b");
    }

    #[test]
    fn contrast_white_background_is_black() {
        assert_eq!(Rgb::from_hex("#ffffff").unwrap().contrast(), BLACK);
    }

    #[test]
    fn contrast_dark_slate_is_white() {
        assert_eq!(Rgb::from_hex("#0f172a").unwrap().contrast(), WHITE);
    }

    #[test]
    fn contrast_black_background_is_white() {
        assert_eq!(Rgb(0, 0, 0).contrast(), WHITE);
    }

    #[test]
    fn contrast_is_deterministic() {
        let c = Rgb::from_hex("#38bdf8").unwrap();
        assert_eq!(c.contrast(), c.contrast());
    }

    #[test]
    fn contrast_mid_gray_just_above_threshold() {
        // #808080 → luminance 128/255 ≈ 0.50196, strictly above 0.5 → black
        assert_eq!(Rgb(128, 128, 128).contrast(), BLACK);
    }

    #[test]
    fn contrast_flips_across_threshold() {
        // 0.299·127 + 0.587·128 + 0.114·127 = 127.587 → ~0.5003, above 0.5
        assert_eq!(Rgb(127, 128, 127).contrast(), BLACK);
        // One step darker: 127/255 ≈ 0.498, at or below the threshold.
        assert_eq!(Rgb(127, 127, 127).contrast(), WHITE);
    }

    #[test]
    fn contrast_of_parses_then_computes() {
        assert_eq!(contrast_of("#ffffff").unwrap(), BLACK);
        assert_eq!(contrast_of("#0f172a").unwrap(), WHITE);
        assert!(contrast_of("not-a-color").is_err());
    }

    #[test]
    fn serde_hex_string_round_trip() {
        let c = Rgb::from_hex("#3b82f6").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        assert!(serde_json::from_str::<Rgb>("\"#12\"").is_err());
    }
}
