#![forbid(unsafe_code)]
//! Symbol versions, error correction levels and the per-version capacity tables.

use core::str::FromStr;

use tracing::{debug, warn};

use crate::error::EncodeError;

/// Error correction level of a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum EcLevel {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl EcLevel {
    /// All levels, from the most data capacity to the most resilience.
    pub const ALL: [EcLevel; 4] = [EcLevel::Low, EcLevel::Medium, EcLevel::Quartile, EcLevel::High];

    /// Returns an unsigned 2-bit integer (in the range 0 to 3).
    pub fn ordinal(self) -> usize {
        use EcLevel::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// Returns the single-letter name used by the standard.
    pub fn letter(self) -> char {
        use EcLevel::*;
        match self {
            Low => 'L',
            Medium => 'M',
            Quartile => 'Q',
            High => 'H',
        }
    }
}

impl TryFrom<u8> for EcLevel {
    type Error = EncodeError;

    /// Converts an ordinal (0 = L, 1 = M, 2 = Q, 3 = H).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        EcLevel::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| EncodeError::UnsupportedEcLevel(value.to_string()))
    }
}

impl FromStr for EcLevel {
    type Err = EncodeError;

    /// Parses `"L"`, `"M"`, `"Q"` or `"H"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EcLevel::ALL
            .into_iter()
            .find(|ecl| {
                let mut chars = s.chars();
                chars.next().map(|c| c.to_ascii_uppercase()) == Some(ecl.letter())
                    && chars.next().is_none()
            })
            .ok_or_else(|| EncodeError::UnsupportedEcLevel(s.to_string()))
    }
}

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [1, 40].
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.value() <= ver && ver <= Version::MAX.value(),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the width and height of the symbol in modules, between 21 and 177.
    pub const fn size(self) -> usize {
        (self.0 as usize) * 4 + 17
    }

    /// Iterates over every version from [`Version::MIN`] to [`Version::MAX`].
    pub fn all() -> impl Iterator<Item = Version> {
        (Version::MIN.0..=Version::MAX.0).map(Version)
    }

    /// Returns the number of modules available for data and error correction codewords,
    /// after all function patterns are excluded. Includes remainder bits, so the result
    /// may not be a multiple of 8.
    fn raw_data_modules(self) -> usize {
        let ver = usize::from(self.0);
        let mut result: usize = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign: usize = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        result
    }

    /// Returns the number of 8-bit codewords the symbol holds, data and error correction
    /// together.
    pub fn total_codewords(self) -> usize {
        self.raw_data_modules() / 8
    }

    /// Returns the number of error correction codewords at the given level, summed over
    /// all blocks.
    pub fn ec_codewords(self, ecl: EcLevel) -> usize {
        table_get(&ECC_CODEWORDS_PER_BLOCK, self, ecl)
            * table_get(&NUM_ERROR_CORRECTION_BLOCKS, self, ecl)
    }

    /// Returns the number of data codewords at the given level.
    pub fn data_codewords(self, ecl: EcLevel) -> usize {
        self.total_codewords() - self.ec_codewords(ecl)
    }

    /// Returns the data capacity in bits at the given level.
    pub fn data_capacity_bits(self, ecl: EcLevel) -> usize {
        self.data_codewords(ecl) * 8
    }
}

fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: EcLevel) -> usize {
    table[ecl.ordinal()][usize::from(ver.value())] as usize
}

/// Returns the smallest version whose data capacity at `ecl` holds `bits_needed` bits.
///
/// # Errors
///
/// Returns [`EncodeError::DataTooLarge`] if not even [`Version::MAX`] is big enough. The
/// level is never lowered automatically; retrying with a lower level is up to the caller.
pub fn choose_version(bits_needed: usize, ecl: EcLevel) -> Result<Version, EncodeError> {
    match Version::all().find(|v| bits_needed <= v.data_capacity_bits(ecl)) {
        Some(version) => {
            debug!(
                bits_needed,
                version = version.value(),
                ec_level = %ecl.letter(),
                capacity = version.data_capacity_bits(ecl),
                "version chosen"
            );
            Ok(version)
        }
        None => {
            let capacity = Version::MAX.data_capacity_bits(ecl);
            warn!(bits_needed, capacity, ec_level = %ecl.letter(), "data too large for any version");
            Err(EncodeError::DataTooLarge {
                needed: bits_needed,
                capacity,
            })
        }
    }
}

static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Indexed by version; index 0 is unused.
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30,
        30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30,
        30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_codewords() {
        assert_eq!(Version::new(1).total_codewords(), 26);
        assert_eq!(Version::new(7).total_codewords(), 196);
        assert_eq!(Version::new(40).total_codewords(), 3706);
    }

    #[test]
    fn test_data_codewords() {
        assert_eq!(Version::new(1).data_codewords(EcLevel::Low), 19);
        assert_eq!(Version::new(1).data_codewords(EcLevel::Medium), 16);
        assert_eq!(Version::new(1).data_codewords(EcLevel::Quartile), 13);
        assert_eq!(Version::new(1).data_codewords(EcLevel::High), 9);
        assert_eq!(Version::new(5).data_codewords(EcLevel::Quartile), 62);
        assert_eq!(Version::new(40).data_codewords(EcLevel::Low), 2956);
        assert_eq!(Version::new(40).data_codewords(EcLevel::High), 1276);
    }

    #[test]
    fn test_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::MAX.size(), 177);
        assert_eq!(Version::all().count(), 40);
    }

    #[test]
    fn test_choose_version() {
        assert_eq!(choose_version(0, EcLevel::High), Ok(Version::new(1)));
        assert_eq!(choose_version(128, EcLevel::Medium), Ok(Version::new(1)));
        assert_eq!(choose_version(129, EcLevel::Medium), Ok(Version::new(2)));
        assert_eq!(choose_version(2956 * 8, EcLevel::Low), Ok(Version::MAX));
    }

    #[test]
    fn test_choose_version_too_large() {
        assert_eq!(
            choose_version(1276 * 8 + 1, EcLevel::High),
            Err(EncodeError::DataTooLarge {
                needed: 10209,
                capacity: 10208,
            })
        );
    }

    #[test]
    fn test_ec_level_parsing() {
        assert_eq!("m".parse::<EcLevel>(), Ok(EcLevel::Medium));
        assert_eq!("H".parse::<EcLevel>(), Ok(EcLevel::High));
        assert_eq!(EcLevel::try_from(2), Ok(EcLevel::Quartile));
        assert_eq!(
            "X".parse::<EcLevel>(),
            Err(EncodeError::UnsupportedEcLevel("X".to_string()))
        );
        assert!("LL".parse::<EcLevel>().is_err());
        assert!(EcLevel::try_from(4).is_err());
    }
}
