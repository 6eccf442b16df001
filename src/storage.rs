#![forbid(unsafe_code)]
//! Interchangeable backing layouts for [`BitVector`](crate::bits::BitVector) and
//! [`BitGrid`](crate::grid::BitGrid).
//!
//! Three layouts share one contract: one `bool` per bit, one byte per bit, and 32 bits
//! packed into each `u32` word. All of them read and write bits by index, so the containers
//! built on top never see which layout they run on. The layout used by default is picked at
//! build time through the `byte-storage` and `word-storage` Cargo features; any layout can
//! also be named explicitly as a type parameter.
//!
//! The `bool` layout is the default. Run `cargo bench` to compare the three on the current
//! machine.

use core::fmt::Debug;

/// A growable, index-addressed sequence of bits.
///
/// Indices are always in `[0, len())`. Out-of-range access panics, like slice indexing.
pub trait BitStorage: Clone + Debug + Default + PartialEq + Eq {
    /// Creates storage holding `len` bits, all `false`.
    fn with_len(len: usize) -> Self;

    /// Returns the number of bits held.
    fn len(&self) -> usize;

    /// Returns `true` if no bits are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends one bit at the end.
    fn push(&mut self, bit: bool);

    /// Reads the bit at `index`.
    fn get(&self, index: usize) -> bool;

    /// Overwrites the bit at `index`.
    fn set(&mut self, index: usize, bit: bool);
}

/// One `bool` per bit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoolStorage {
    bits: Vec<bool>,
}

impl BitStorage for BoolStorage {
    fn with_len(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    fn set(&mut self, index: usize, bit: bool) {
        self.bits[index] = bit;
    }
}

/// One byte per bit, holding `0` or `1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteStorage {
    bytes: Vec<u8>,
}

impl BitStorage for ByteStorage {
    fn with_len(len: usize) -> Self {
        Self {
            bytes: vec![0; len],
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn push(&mut self, bit: bool) {
        self.bytes.push(u8::from(bit));
    }

    fn get(&self, index: usize) -> bool {
        self.bytes[index] != 0
    }

    fn set(&mut self, index: usize, bit: bool) {
        self.bytes[index] = u8::from(bit);
    }
}

/// 32 bits packed per `u32`, most significant bit first.
///
/// Bits past `len` in the last word are kept clear so that derived equality compares
/// contents only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordStorage {
    words: Vec<u32>,
    len: usize,
}

impl WordStorage {
    const WORD_BITS: usize = 32;

    fn locate(&self, index: usize) -> (usize, u32) {
        assert!(
            index < self.len,
            "bit index {} out of range for length {}",
            index,
            self.len
        );
        let mask = 1u32 << (Self::WORD_BITS - 1 - index % Self::WORD_BITS);
        (index / Self::WORD_BITS, mask)
    }
}

impl BitStorage for WordStorage {
    fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(Self::WORD_BITS)],
            len,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, bit: bool) {
        if self.len % Self::WORD_BITS == 0 {
            self.words.push(0);
        }
        self.len += 1;
        self.set(self.len - 1, bit);
    }

    fn get(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word] & mask != 0
    }

    fn set(&mut self, index: usize, bit: bool) {
        let (word, mask) = self.locate(index);
        if bit {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }
}

/// The layout used when a container is named without a type parameter.
#[cfg(feature = "word-storage")]
pub type DefaultStorage = WordStorage;

/// The layout used when a container is named without a type parameter.
#[cfg(all(feature = "byte-storage", not(feature = "word-storage")))]
pub type DefaultStorage = ByteStorage;

/// The layout used when a container is named without a type parameter.
#[cfg(not(any(feature = "byte-storage", feature = "word-storage")))]
pub type DefaultStorage = BoolStorage;
