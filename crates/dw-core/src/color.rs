use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DwError, DwResult};

/// A 24-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    /// Stone grey, the default floor color.
    pub const STONE: Color = Color(0x80_80_80);
    /// Dark brick, the default wall color.
    pub const BRICK: Color = Color(0x8b_45_13);
    /// Oak brown, the default door color.
    pub const OAK: Color = Color(0xa0_52_2d);

    /// Build a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = DwError;

    fn from_str(s: &str) -> DwResult<Self> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| DwError::InvalidColor(s.to_string()))?;
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| DwError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = DwError;

    fn try_from(s: String) -> DwResult<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn parse_round_trips() {
        let c: Color = "#A0522D".parse().unwrap();
        assert_eq!(c, Color::OAK);
        assert_eq!(c.to_string(), "#a0522d");
    }

    #[test]
    fn malformed_rejected() {
        assert!("a0522d".parse::<Color>().is_err());
        assert!("#a0522".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::STONE).unwrap();
        assert_eq!(json, "\"#808080\"");
        assert!(serde_json::from_str::<Color>("\"grey\"").is_err());
    }
}
