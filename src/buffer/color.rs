//! Rgb: The color value stored in a painted cell.
//!
//! Colors are plain 24-bit RGB. There is no alpha channel: an unpainted
//! cell is represented by the *absence* of a color (`Option<Rgb>` in the
//! buffer), and exported images substitute a fixed background for it.
//!
//! The canonical interchange form is the `#rrggbb` hex string used by the
//! host web-app, so `Rgb` parses from and formats to that shape and
//! serializes as that string in project records.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth. Equality is exact value
/// comparison; there is no tolerance or blending anywhere in the engine.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default paint color when a session starts (`#3390ec`).
    pub const DEFAULT_PAINT: Self = Self::from_u32(0x33_90_ec);
    /// Background substituted for empty cells in exported images (`#1a1a1a`).
    pub const EXPORT_BACKGROUND: Self = Self::from_u32(0x1a_1a_1a);

    /// The stock 12-color palette offered by the surrounding UI.
    pub const PALETTE: [Self; 12] = [
        Self::from_u32(0x33_90_ec),
        Self::from_u32(0x27_ae_60),
        Self::from_u32(0xe7_4c_3c),
        Self::from_u32(0xf3_9c_12),
        Self::from_u32(0x9b_59_b6),
        Self::from_u32(0x1a_bc_9c),
        Self::from_u32(0xe6_7e_22),
        Self::from_u32(0x34_49_5e),
        Self::from_u32(0xff_ff_ff),
        Self::from_u32(0x00_00_00),
        Self::from_u32(0x95_a5_a6),
        Self::from_u32(0xd3_54_00),
    ];

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a `#rrggbb` hex string.
    ///
    /// Returns `None` for anything that is not exactly a `#` followed by
    /// six hex digits. Shorthand (`#fff`) and alpha forms are rejected.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// Format as a `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("{self}")
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

impl Serialize for Rgb {
    /// Serialize as the `#rrggbb` string the host records use.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}
