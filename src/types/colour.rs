//! Background colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomError};

/// An opaque RGB colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default room background.
    pub const DEFAULT_BACKGROUND: Self = Self::rgb(0x11, 0x11, 0x11);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Parse a six digit hex colour, with or without the leading `#`.
    ///
    /// Shorthand and alpha forms are rejected: the stored format is always
    /// exactly `#rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RoomError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB or RRGGBB format".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Format as an uppercase C integer literal, e.g. `0x1A2B3C`.
    pub fn to_c_literal(self) -> String {
        format!("0x{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Pack into a `0xRRGGBB` integer.
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Convert to an opaque RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::DEFAULT_BACKGROUND
    }
}

impl FromStr for Colour {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = RoomError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| RoomError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_hash() {
        let c = Colour::from_hex("#1a2b3c").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_rejects_other_lengths() {
        assert!(Colour::from_hex("#F00").is_err());
        assert!(Colour::from_hex("#FF000080").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        assert!(Colour::from_hex("#GG0000").is_err());
        assert!(Colour::from_hex("#+10000").is_err());
    }

    #[test]
    fn test_display_normalizes_hash_and_case() {
        assert_eq!(Colour::from_hex("1A2B3C").unwrap().to_string(), "#1a2b3c");
        assert_eq!(Colour::default().to_string(), "#111111");
    }

    #[test]
    fn test_c_literal_uppercase() {
        let c = Colour::from_hex("#1a2b3c").unwrap();
        assert_eq!(c.to_c_literal(), "0x1A2B3C");
        assert_eq!(Colour::BLACK.to_c_literal(), "0x000000");
    }

    #[test]
    fn test_to_u32() {
        assert_eq!(Colour::rgb(0x12, 0x34, 0x56).to_u32(), 0x123456);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Colour::rgb(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: Colour = serde_json::from_str("\"00FF00\"").unwrap();
        assert_eq!(back, Colour::rgb(0, 255, 0));
        assert!(serde_json::from_str::<Colour>("\"nope\"").is_err());
    }
}
