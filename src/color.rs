use crate::{MatrixError, Result};
use serde::{Deserialize, Serialize};

/// 24-bit color as callers see it. The wire format is RGB565, so the low 3
/// bits of red/blue and the low 2 bits of green never reach the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts channel data whose arity the type system does not guarantee.
    pub fn from_slice(channels: &[u8]) -> Result<Self> {
        match channels {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            other => Err(MatrixError::InvalidColor(format!(
                "expected 3 channels, got {}",
                other.len()
            ))),
        }
    }

    /// Accepts raw channel values from an untyped source such as a parsed
    /// color string, rejecting anything outside [0, 255].
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        for value in [r, g, b] {
            if !(0..=255).contains(&value) {
                return Err(MatrixError::InvalidColor(format!(
                    "channel {value} violates 0 <= channel <= 255"
                )));
            }
        }
        Ok(Self::new(r as u8, g as u8, b as u8))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// Pack a color into the device's RGB565 word: `RRRRRGGGGGGBBBBB`.
pub fn pack(rgb: Rgb) -> u16 {
    let r5 = (rgb.r >> 3) as u16;
    let g6 = (rgb.g >> 2) as u16;
    let b5 = (rgb.b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Unpack an RGB565 word. Total over all 16-bit values; the truncated
/// channel bits come back as zero.
pub fn unpack(word: u16) -> Rgb {
    let r5 = (word >> 11) & 0x1F;
    let g6 = (word >> 5) & 0x3F;
    let b5 = word & 0x1F;
    Rgb::new((r5 << 3) as u8, (g6 << 2) as u8, (b5 << 3) as u8)
}
