#![forbid(unsafe_code)]
//! Append-only bit sequence used to assemble QR data streams.

use core::fmt;

use crate::storage::{BitStorage, DefaultStorage};

/// An append-only, order-preserving sequence of bits.
///
/// Bits are never removed or rewritten once appended. The encoder grows a vector
/// monotonically and hands it off read-only to the codeword interleaving stage.
///
/// # Example
///
/// ```rust
/// use qrbits::bits::BitVector;
///
/// let mut bits: BitVector = BitVector::new();
/// bits.append(0b0010, 4);
/// bits.append_bit(true);
/// assert_eq!(bits.to_string(), "00101");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitVector<S: BitStorage = DefaultStorage> {
    storage: S,
}

impl BitVector<DefaultStorage> {
    /// Creates an empty vector on the default storage layout.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: BitStorage> BitVector<S> {
    /// Creates an empty vector on an explicitly chosen storage layout.
    pub fn with_storage() -> Self {
        Self {
            storage: S::default(),
        }
    }

    /// Returns the number of bits appended so far.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no bits have been appended.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Appends a single bit.
    pub fn append_bit(&mut self, bit: bool) {
        self.storage.push(bit);
    }

    /// Appends the `width` least significant bits of `value`, most significant bit first.
    ///
    /// # Panics
    ///
    /// Panics if `width` is outside `1..=32` or if `value` does not fit in `width` bits.
    /// Callers size their fields before appending, so either case is a logic error.
    pub fn append(&mut self, value: u32, width: u8) {
        assert!((1..=32).contains(&width), "Invalid bit width {}", width);
        assert!(
            width == 32 || value >> width == 0,
            "Value {} does not fit in {} bits",
            value,
            width
        );
        for i in (0..width).rev() {
            self.storage.push((value >> i) & 1 != 0);
        }
    }

    /// Appends every bit of `other`, in order.
    pub fn append_bits<T: BitStorage>(&mut self, other: &BitVector<T>) {
        for bit in other.iter() {
            self.storage.push(bit);
        }
    }

    /// Reads the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len(),
            "Bit index {} out of range for length {}",
            index,
            self.len()
        );
        self.storage.get(index)
    }

    /// Iterates over the bits in append order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.storage.get(i))
    }

    /// Packs the bits into bytes, most significant bit first.
    ///
    /// A trailing partial byte is padded with zero bits. An encoded data stream is always a
    /// whole number of codewords, so its bytes are exactly the data codewords.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.len().div_ceil(8)];
        for (i, bit) in self.iter().enumerate() {
            if bit {
                bytes[i >> 3] |= 0x80 >> (i & 7);
            }
        }
        bytes
    }
}

impl<S: BitStorage> fmt::Display for BitVector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
