use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// An opaque RGB color decoded from a `#RRGGBB` option value.
///
/// Alpha is not part of a color option: filters only ever blend the red,
/// green and blue channels toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in buffer order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or_else(|| ParseColorError::MissingHash {
            value: s.to_string(),
        })?;

        if digits.chars().count() != 6 {
            return Err(ParseColorError::InvalidLength { value: s.to_string() });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit { value: s.to_string() });
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(ParseColorError::InvalidDigit { value: s.to_string() }),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase_and_uppercase() {
        assert_eq!("#ff0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("#00FF7f".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 127));
    }

    #[test]
    fn test_missing_hash_rejected() {
        assert!(matches!(
            "ff0000".parse::<Rgb>(),
            Err(ParseColorError::MissingHash { .. })
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(matches!(
            "#fff".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength { .. })
        ));
        assert!(matches!(
            "#ff0000ff".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_bad_digit_rejected() {
        assert!(matches!(
            "#gg0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit { .. })
        ));
        assert!(matches!(
            "#+f0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_display_roundtrips() {
        let color = Rgb::new(18, 52, 86);
        assert_eq!(color.to_string(), "#123456");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }
}
