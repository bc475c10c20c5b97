use crate::Error;
use core::fmt;
use fmt::Display;

/// A 24-bit RGB color, one byte per channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rgb24 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb24 {
    #[must_use]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a new `Rgb24` from one palette line.
    ///
    /// A palette line is exactly six hex digits, two per channel, in
    /// "RRGGBB" order. Both digit cases are accepted.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLineLength` if the line is not six bytes
    /// long and `Error::InvalidHexDigit` if any of those bytes is not a
    /// hex digit.
    #[expect(clippy::string_slice)]
    pub fn parse_line(line: &str) -> Result<Self, Error> {
        if line.len() != 6 {
            return Err(Error::InvalidLineLength {
                line: line.to_owned(),
            });
        }

        // `from_str_radix` tolerates a leading sign, which is not a hex
        // digit. Checking every byte up front also guarantees the pair
        // slices below land on character boundaries.
        if !line.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexDigit {
                line: line.to_owned(),
            });
        }

        let r = u8::from_str_radix(&line[0..2], 16).map_err(|_err| Error::InvalidHexDigit {
            line: line.to_owned(),
        })?;

        let g = u8::from_str_radix(&line[2..4], 16).map_err(|_err| Error::InvalidHexDigit {
            line: line.to_owned(),
        })?;

        let b = u8::from_str_radix(&line[4..6], 16).map_err(|_err| Error::InvalidHexDigit {
            line: line.to_owned(),
        })?;

        Ok(Self { r, g, b })
    }

    #[must_use]
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Display for Rgb24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color quantized to 3-3-2, stored one full byte per channel.
///
/// Each channel keeps its top bits and reconstructs the dropped ones,
/// so the value still spans the full 8-bit range. Values of this type
/// only come out of quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb332 {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb332 {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Display for Rgb332 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let color = Rgb24::parse_line("aabbcc").expect("valid line");
        assert_eq!(color, Rgb24::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_parse_line_uppercase() {
        let color = Rgb24::parse_line("AABBCC").expect("valid line");
        assert_eq!(color, Rgb24::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_parse_line_rejects_wrong_length() {
        assert!(matches!(
            Rgb24::parse_line("zz"),
            Err(Error::InvalidLineLength { .. })
        ));
        assert!(matches!(
            Rgb24::parse_line("aabbc"),
            Err(Error::InvalidLineLength { .. })
        ));
        assert!(matches!(
            Rgb24::parse_line("aabbccdd"),
            Err(Error::InvalidLineLength { .. })
        ));
        assert!(matches!(
            Rgb24::parse_line(""),
            Err(Error::InvalidLineLength { .. })
        ));
    }

    #[test]
    fn test_parse_line_rejects_non_hex() {
        assert!(matches!(
            Rgb24::parse_line("zzzzzz"),
            Err(Error::InvalidHexDigit { .. })
        ));
        // A sign is not a digit, even though `from_str_radix` takes it.
        assert!(matches!(
            Rgb24::parse_line("+abbcc"),
            Err(Error::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn test_parse_line_rejects_non_ascii() {
        // Three U+00FF characters are six bytes, but not six hex
        // digits. Must not panic on the multi-byte characters.
        assert!(matches!(
            Rgb24::parse_line("\u{ff}\u{ff}\u{ff}"),
            Err(Error::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb24::new(0xAB, 0xCD, 0xEF).to_string(), "abcdef");
        assert_eq!(Rgb24::new(0x01, 0x02, 0x03).to_string(), "010203");
    }
}
