use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Rgb is the color stored in every cell.
/// Opaque by construction; displays as normalized lowercase `#rrggbb`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized hex form, e.g. `#6366f1`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// RGBA bytes for raster output
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Accepts `#rgb` or `#rrggbb`, any case, `#` optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                // Short form doubles each digit: #abc == #aabbcc
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let c: Rgb = "#6366f1".parse().unwrap();
        assert_eq!(c, Rgb::new(0x63, 0x66, 0xf1));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let c: Rgb = "#FF00aA".parse().unwrap();
        assert_eq!(c.to_hex(), "#ff00aa");
    }

    #[test]
    fn test_parse_short_form() {
        let c: Rgb = "#f0a".parse().unwrap();
        assert_eq!(c.to_hex(), "#ff00aa");
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!("ffffff".parse::<Rgb>().unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
        assert!("#ffffff00".parse::<Rgb>().is_err());
        assert!("#+fffff".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_matches_hex() {
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }
}
