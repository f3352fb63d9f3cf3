use crate::{Error::InvalidHexCode, Result};
use std::fmt;

/// Represents an opaque RGB pixel. Icons are always rendered on an opaque background, so this is
/// the only pixel type the canvas stores.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red component of the pixel.
    pub r: u8,
    /// The green component of the pixel.
    pub g: u8,
    /// The blue component of the pixel.
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a completely black pixel.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Creates a completely white pixel.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parses a hex code in the form `#RRGGBB`. The leading `#` is optional and the digits are
    /// case-insensitive. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// * The string is not exactly six hex digits after the optional `#`.
    pub fn from_hex(hex_code: &str) -> Result<Self> {
        let trimmed = hex_code.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidHexCode(hex_code.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| InvalidHexCode(hex_code.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Returns the color as an uppercase `#RRGGBB` hex code.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Blends `fill` over this pixel with the given coverage, where 0 leaves this pixel untouched
    /// and 255 replaces it with `fill`.
    #[must_use]
    pub fn blend(self, fill: Self, coverage: u8) -> Self {
        match coverage {
            0 => self,
            255 => fill,
            a => {
                let a = u32::from(a);
                let mix = |base: u8, over: u8| {
                    ((u32::from(over) * a + u32::from(base) * (255 - a) + 127) / 255) as u8
                };

                Self::new(mix(self.r, fill.r), mix(self.g, fill.g), mix(self.b, fill.b))
            }
        }
    }

    /// Returns the channels as a `[r, g, b]` array, the layout PNG expects for 8-bit RGB.
    #[must_use]
    pub const fn as_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

/// Returns whether `value` is a strict `#RRGGBB` hex color, the only form the color pickers emit.
#[must_use]
pub fn is_valid_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#E81123").unwrap(), Rgb::new(0xE8, 0x11, 0x23));
        assert_eq!(Rgb::from_hex("0078d4").unwrap(), Rgb::new(0x00, 0x78, 0xD4));
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert_eq!(Rgb::new(0x5C, 0x2D, 0x91).to_hex(), "#5C2D91");
    }

    #[test]
    fn test_strict_hex_check() {
        assert!(is_valid_hex_color("#FFB900"));
        assert!(!is_valid_hex_color("FFB900"));
        assert!(!is_valid_hex_color("#FFB90"));
    }

    #[test]
    fn test_blend_endpoints() {
        let base = Rgb::white();
        let fill = Rgb::new(232, 17, 35);

        assert_eq!(base.blend(fill, 0), base);
        assert_eq!(base.blend(fill, 255), fill);
        assert_eq!(Rgb::black().blend(Rgb::white(), 128), Rgb::new(128, 128, 128));
    }
}
