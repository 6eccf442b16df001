#![forbid(unsafe_code)]
//! Mode indicators and content classification.

use crate::alphanumeric::alphanumeric_code;
use crate::version::Version;

/// How payload bytes are packed into the data stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    /// Extended Channel Interpretation header. Carries a designator, never payload.
    Eci,
}

impl Mode {
    /// Returns the 4-bit mode indicator.
    pub fn mode_bits(self) -> u32 {
        use Mode::*;
        match self {
            Numeric => 0x1,
            Alphanumeric => 0x2,
            Byte => 0x4,
            Eci => 0x7,
        }
    }

    /// Returns the width of the character count field for this mode at `ver`.
    pub fn character_count_bits(self, ver: Version) -> u8 {
        use Mode::*;
        (match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
            Eci => [0, 0, 0],
        })[usize::from((ver.value() + 7) / 17)]
    }

    /// Classifies text into the narrowest mode that can hold all of it.
    ///
    /// Empty content is numeric.
    pub fn for_content(content: &[u8]) -> Mode {
        if is_numeric(content) {
            Mode::Numeric
        } else if is_alphanumeric(content) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }
}

/// Returns `true` if every byte is an ASCII digit.
pub fn is_numeric(content: &[u8]) -> bool {
    content.iter().all(u8::is_ascii_digit)
}

/// Returns `true` if every byte has an alphanumeric code.
pub fn is_alphanumeric(content: &[u8]) -> bool {
    content.iter().all(|&b| alphanumeric_code(b).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert_eq!(is_numeric(b"1234567890"), true);
        assert_eq!(is_numeric(b"1234abc"), false);
    }

    #[test]
    fn test_is_alphanumeric() {
        assert_eq!(is_alphanumeric(b"HELLO WORLD"), true);
        assert_eq!(is_alphanumeric(b"Hello World"), false);
    }

    #[test]
    fn test_for_content() {
        assert_eq!(Mode::for_content(b"01234567"), Mode::Numeric);
        assert_eq!(Mode::for_content(b""), Mode::Numeric);
        assert_eq!(Mode::for_content(b"HELLO WORLD"), Mode::Alphanumeric);
        assert_eq!(Mode::for_content(b"$5.00"), Mode::Alphanumeric);
        assert_eq!(Mode::for_content("héllo".as_bytes()), Mode::Byte);
    }

    #[test]
    fn test_character_count_bits() {
        let v = |n| Version::new(n);
        assert_eq!(Mode::Numeric.character_count_bits(v(9)), 10);
        assert_eq!(Mode::Numeric.character_count_bits(v(10)), 12);
        assert_eq!(Mode::Numeric.character_count_bits(v(27)), 14);
        assert_eq!(Mode::Alphanumeric.character_count_bits(v(26)), 11);
        assert_eq!(Mode::Byte.character_count_bits(v(1)), 8);
        assert_eq!(Mode::Byte.character_count_bits(v(40)), 16);
        assert_eq!(Mode::Eci.character_count_bits(v(40)), 0);
    }
}
