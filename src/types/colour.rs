//! Colour type, hex rendering and the packed 24-bit colour key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SwatchError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = c.to_digit(16).ok_or_else(|| invalid_hex(s))? as u8;
                    *slot = d << 4 | d;
                }
                Ok(Self::rgb(digits[0], digits[1], digits[2]))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2]).ok_or_else(|| invalid_hex(s))?;
                let g = parse_hex_byte(&hex[2..4]).ok_or_else(|| invalid_hex(s))?;
                let b = parse_hex_byte(&hex[4..6]).ok_or_else(|| invalid_hex(s))?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Canonical `#RRGGBB` label, uppercase.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Pack into a histogram key.
    pub fn key(self) -> ColourKey {
        ColourKey::pack(self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in raw channel space.
    pub fn distance_sq(self, other: Colour) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<ColourKey> for Colour {
    fn from(key: ColourKey) -> Self {
        let (r, g, b) = key.unpack();
        Self::rgb(r, g, b)
    }
}

/// A colour packed as `(r << 16) | (g << 8) | b`.
///
/// Bijective over all RGB triples, so it can stand in for the colour as a
/// map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColourKey(u32);

impl ColourKey {
    pub const fn pack(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn unpack(self) -> (u8, u8, u8) {
        (
            (self.0 >> 16 & 0xFF) as u8,
            (self.0 >> 8 & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// The raw 24-bit value.
    pub const fn value(self) -> u32 {
        self.0
    }
}

fn parse_hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

fn invalid_hex(s: &str) -> SwatchError {
    SwatchError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}
