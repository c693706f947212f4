//! Pixel color values.
//!
//! Provides functionality for:
//! - Representing one RGBA sample read out of a frame
//! - Hex parsing/formatting (#RRGGBB and #RRGGBBAA)
//! - Color comparison with tolerance

use serde::{Deserialize, Serialize};

/// RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Create a color from a hex string: "#FF0000", "FF0000" or "FF000080".
    /// A six-digit string is treated as fully opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            0xFF
        };

        Some(Self { r, g, b, a })
    }

    /// Convert to a hex string. Opaque colors format as "#RRGGBB"; anything
    /// else carries the alpha digits.
    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Sum of absolute per-channel differences over red, green and blue.
    /// Alpha is excluded: screen pixels are effectively opaque and backends
    /// differ on what they report for it.
    pub fn distance(&self, other: &Color) -> u32 {
        let dr = (self.r as i32 - other.r as i32).unsigned_abs();
        let dg = (self.g as i32 - other.g as i32).unsigned_abs();
        let db = (self.b as i32 - other.b as i32).unsigned_abs();
        dr + dg + db
    }

    /// Check if this color matches another within a tolerance.
    /// Tolerance is the maximum allowed sum of channel differences.
    pub fn matches(&self, other: &Color, tolerance: u8) -> bool {
        self.distance(other) <= tolerance as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0xFF }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        let color = Color::from_hex("#FF0000").unwrap();
        assert_eq!(color, Color::opaque(255, 0, 0));

        let color = Color::from_hex("00FF00").unwrap();
        assert_eq!(color, Color::opaque(0, 255, 0));
    }

    #[test]
    fn test_from_hex_eight_digits() {
        let color = Color::from_hex("11223380").unwrap();
        assert_eq!(color, Color::new(0x11, 0x22, 0x33, 0x80));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#F00").is_none());
        assert!(Color::from_hex("GG0000").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::opaque(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(Color::new(255, 128, 0, 0x40).to_hex(), "#FF800040");
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color::new(0xAB, 0xCD, 0xEF, 0x12);
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn test_distance_ignores_alpha() {
        let c1 = Color::new(100, 100, 100, 255);
        let c2 = Color::new(110, 90, 105, 0);
        assert_eq!(c1.distance(&c2), 25); // 10 + 10 + 5
    }

    #[test]
    fn test_matches_with_tolerance() {
        let c1 = Color::opaque(100, 100, 100);
        let c2 = Color::opaque(105, 100, 100);
        assert!(c1.matches(&c2, 10));
        assert!(!c1.matches(&c2, 4));
    }
}
