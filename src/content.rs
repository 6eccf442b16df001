#![forbid(unsafe_code)]
//! Content encoding: mode header, character count, packed payload, terminator and padding.
//!
//! The output is the data codeword stream of a symbol, exactly as long as the data capacity
//! of the chosen version at the requested error correction level. Error correction
//! codewords, module placement and masking happen downstream.

use tracing::{debug, trace};

use crate::alphanumeric::alphanumeric_code;
use crate::bits::BitVector;
use crate::error::EncodeError;
use crate::grid::BitGrid;
use crate::mode::Mode;
use crate::storage::{BitStorage, DefaultStorage};
use crate::version::{choose_version, EcLevel, Version};

/// ECI designator announcing UTF-8 byte content.
pub const UTF8_ECI_DESIGNATOR: u32 = 26;

/// Pad codewords, appended alternately until the capacity is filled.
pub const PAD_CODEWORDS: [u32; 2] = [0xEC, 0x11];

/// The data stream of one symbol and the parameters it was sized for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedContent<S: BitStorage = DefaultStorage> {
    /// Header, count field, payload, terminator and padding. Always exactly
    /// `version.data_capacity_bits(ec_level)` bits long.
    pub bits: BitVector<S>,
    pub version: Version,
    pub ec_level: EcLevel,
    /// Mode the payload was packed in.
    pub mode: Mode,
}

impl<S: BitStorage> EncodedContent<S> {
    /// Returns an empty module grid sized for the chosen version, ready for matrix
    /// construction.
    pub fn new_grid(&self) -> BitGrid<S> {
        let size = self.version.size();
        BitGrid::with_storage(size, size)
    }
}

/// Encodes text in the narrowest mode that holds it.
///
/// Byte-mode text is announced as UTF-8 with an ECI header. Numeric and alphanumeric text
/// carries no ECI header.
///
/// # Errors
///
/// Returns [`EncodeError::DataTooLarge`] if the text does not fit in any version at `ecl`.
///
/// # Example
///
/// ```rust
/// use qrbits::content::string_content_bits;
/// use qrbits::mode::Mode;
/// use qrbits::version::{EcLevel, Version};
///
/// let encoded = string_content_bits("HELLO WORLD", EcLevel::Medium).unwrap();
/// assert_eq!(encoded.mode, Mode::Alphanumeric);
/// assert_eq!(encoded.version, Version::new(1));
/// assert_eq!(encoded.bits.len(), 128);
/// ```
pub fn string_content_bits(content: &str, ecl: EcLevel) -> Result<EncodedContent, EncodeError> {
    string_content_bits_in(content, ecl)
}

/// Same as [`string_content_bits`], on an explicitly chosen storage layout.
pub fn string_content_bits_in<S: BitStorage>(
    content: &str,
    ecl: EcLevel,
) -> Result<EncodedContent<S>, EncodeError> {
    let mode = Mode::for_content(content.as_bytes());
    debug!(?mode, len = content.len(), "text content classified");
    let mut header = BitVector::<S>::with_storage();
    if mode == Mode::Byte {
        header.append(Mode::Eci.mode_bits(), 4);
        header.append(UTF8_ECI_DESIGNATOR, 8);
    }
    header.append(mode.mode_bits(), 4);
    content_bits(content.as_bytes(), ecl, mode, header)
}

/// Encodes arbitrary bytes in byte mode, without an ECI header.
///
/// # Errors
///
/// Returns [`EncodeError::DataTooLarge`] if the data does not fit in any version at `ecl`.
pub fn binary_content_bits(content: &[u8], ecl: EcLevel) -> Result<EncodedContent, EncodeError> {
    binary_content_bits_in(content, ecl)
}

/// Same as [`binary_content_bits`], on an explicitly chosen storage layout.
pub fn binary_content_bits_in<S: BitStorage>(
    content: &[u8],
    ecl: EcLevel,
) -> Result<EncodedContent<S>, EncodeError> {
    let mut header = BitVector::<S>::with_storage();
    header.append(Mode::Byte.mode_bits(), 4);
    content_bits(content, ecl, Mode::Byte, header)
}

fn content_bits<S: BitStorage>(
    content: &[u8],
    ecl: EcLevel,
    mode: Mode,
    header: BitVector<S>,
) -> Result<EncodedContent<S>, EncodeError> {
    let mut data = BitVector::<S>::with_storage();
    append_content(content, mode, &mut data);

    // The count field width depends on the version, so size against the widest one.
    let bits_needed =
        header.len() + data.len() + usize::from(mode.character_count_bits(Version::MAX));
    let version = choose_version(bits_needed, ecl)?;

    let mut bits = BitVector::<S>::with_storage();
    bits.append_bits(&header);
    bits.append(content.len() as u32, mode.character_count_bits(version));
    bits.append_bits(&data);

    append_terminator(version.data_codewords(ecl), &mut bits);
    Ok(EncodedContent {
        bits,
        version,
        ec_level: ecl,
        mode,
    })
}

fn numeric_digit(b: u8) -> u32 {
    match alphanumeric_code(b) {
        Some(code) if code <= 9 => u32::from(code),
        _ => panic!("Invalid numeric mode content"),
    }
}

fn alphanumeric_value(b: u8) -> u32 {
    match alphanumeric_code(b) {
        Some(code) => u32::from(code),
        None => panic!("Invalid alphanumeric mode content"),
    }
}

/// Packs `content` in `mode` and appends the payload bits.
///
/// Numeric content goes in groups of three digits (10 bits), with a trailing pair taking
/// 7 bits and a trailing digit 4 bits. Alphanumeric content goes in pairs (11 bits) with a
/// trailing character taking 6 bits. Byte content is copied 8 bits per byte.
///
/// # Panics
///
/// Panics if numeric content holds a non-digit, if alphanumeric content holds a byte outside
/// the alphanumeric charset, or if `mode` is [`Mode::Eci`]. Content must already have been
/// classified with [`Mode::for_content`] or be byte mode.
pub fn append_content<S: BitStorage>(content: &[u8], mode: Mode, bits: &mut BitVector<S>) {
    match mode {
        Mode::Numeric => {
            let mut groups = content.chunks_exact(3);
            for group in &mut groups {
                let value = numeric_digit(group[0]) * 100
                    + numeric_digit(group[1]) * 10
                    + numeric_digit(group[2]);
                bits.append(value, 10);
            }
            match *groups.remainder() {
                [d] => bits.append(numeric_digit(d), 4),
                [d1, d2] => bits.append(numeric_digit(d1) * 10 + numeric_digit(d2), 7),
                _ => {}
            }
        }
        Mode::Alphanumeric => {
            let mut pairs = content.chunks_exact(2);
            for pair in &mut pairs {
                bits.append(alphanumeric_value(pair[0]) * 45 + alphanumeric_value(pair[1]), 11);
            }
            if let [c] = *pairs.remainder() {
                bits.append(alphanumeric_value(c), 6);
            }
        }
        Mode::Byte => {
            for &b in content {
                bits.append(u32::from(b), 8);
            }
        }
        Mode::Eci => panic!("Unsupported mode"),
    }
}

/// Appends the terminator, zero bits to the next byte boundary, and alternating pad
/// codewords until `bits` holds exactly `capacity_bytes` bytes.
///
/// # Panics
///
/// Panics if `bits` is already longer than the capacity.
pub fn append_terminator<S: BitStorage>(capacity_bytes: usize, bits: &mut BitVector<S>) {
    let capacity = capacity_bytes * 8;
    assert!(
        bits.len() <= capacity,
        "Data length {} exceeds capacity {}",
        bits.len(),
        capacity
    );
    let used = bits.len();

    for _ in 0..4 {
        if bits.len() >= capacity {
            break;
        }
        bits.append_bit(false);
    }
    while bits.len() % 8 != 0 {
        bits.append_bit(false);
    }
    let zero_bits = bits.len() - used;

    for &pad in PAD_CODEWORDS.iter().cycle() {
        if bits.len() >= capacity {
            break;
        }
        bits.append(pad, 8);
    }
    trace!(
        used,
        zero_bits,
        pad_codewords = (capacity - used - zero_bits) / 8,
        "content padded"
    );
    assert_eq!(bits.len(), capacity, "Padded length does not match capacity");
}
