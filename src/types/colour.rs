//! Colour type, hex parsing, and interpolation.

use std::fmt;
use std::str::FromStr;

use palette::{LinSrgb, Mix, Srgb};
use serde::de::{self, Deserialize, Deserializer};

use crate::error::{Result, ShotError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        // Byte-indexed slicing below requires single-byte characters.
        if !hex.is_ascii() {
            return Err(ShotError::Deck {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            });
        }

        match hex.len() {
            3 => {
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            4 => {
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                let a = parse_hex_digit(hex.chars().nth(3).unwrap())?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(ShotError::Deck {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Convert to an RGBA byte array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Replace the alpha component.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Interpolate towards another colour (`t` in `0.0..=1.0`).
    ///
    /// RGB channels mix in linear sRGB to avoid the muddy band that
    /// gamma-space interpolation produces in wide gradients; alpha
    /// interpolates linearly.
    pub fn lerp(self, other: Colour, t: f32) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let a: LinSrgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
        .into_linear();
        let b: LinSrgb<f32> = Srgb::new(
            other.r as f32 / 255.0,
            other.g as f32 / 255.0,
            other.b as f32 / 255.0,
        )
        .into_linear();

        let mixed: Srgb<f32> = Srgb::from_linear(a.mix(b, t));
        let alpha = self.a as f32 + (other.a as f32 - self.a as f32) * t;

        Colour::new(
            (mixed.red * 255.0).round() as u8,
            (mixed.green * 255.0).round() as u8,
            (mixed.blue * 255.0).round() as u8,
            alpha.round() as u8,
        )
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ShotError::Deck {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ShotError::Deck {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
