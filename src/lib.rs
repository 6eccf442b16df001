//! # qrbits
//!
//! The bit-level content encoder of a QR code generator, and the bit containers it builds on.
//!
//! `qrbits` turns text or binary data into the exact data codeword stream the QR Code Model 2
//! specification expects: it picks the encoding mode, packs the payload, sizes the stream to
//! the smallest version (1 to 40) that holds it at the requested error correction level, and
//! appends the terminator and pad codewords. It also provides the tri-state module grid that
//! matrix construction fills in, with text, RGB565, PNG and SVG export.
//!
//! ## Features
//!
//! - Numeric, alphanumeric and byte modes, with a UTF-8 ECI header for byte-mode text.
//! - Four error correction levels: Low, Medium, Quartile, High.
//! - `BitVector` and `BitGrid` over interchangeable storage layouts (`bool`, byte or packed
//!   `u32` per bit), selectable per type or with the `byte-storage` / `word-storage` features.
//! - RGB565 pixel export with a hard size cap, plus image buffers, PNG files and SVG strings.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrbits = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Encode text and inspect the data stream:
//!
//! ```rust
//! use qrbits::content::string_content_bits;
//! use qrbits::version::EcLevel;
//!
//! let encoded = string_content_bits("01234567", EcLevel::Medium).unwrap();
//! assert_eq!(encoded.version.value(), 1);
//! assert!(encoded.bits.to_string().starts_with("0001" /* numeric */));
//! ```
//!
//! Render a grid to RGB565 pixels that fit a 240x240 display:
//!
//! ```rust
//! use qrbits::grid::BitGrid;
//!
//! let mut grid: BitGrid = BitGrid::new(21, 21);
//! grid.set(0, 0, true);
//! let pixels = grid.to_rgb565_with_size(240, 240);
//! assert_eq!(pixels.len(), 232 * 232);
//! ```
//!
//! ## Modules
//!
//! - [`content`]: Mode selection, payload packing, version sizing and padding.
//! - [`bits`]: The append-only [`BitVector`](bits::BitVector).
//! - [`grid`]: The tri-state [`BitGrid`](grid::BitGrid) and its pixel export.
//! - [`storage`]: Storage layouts shared by both containers.
//! - [`version`]: Versions, error correction levels and capacity tables.
//! - [`mode`]: Mode indicators and content classification.
//! - [`alphanumeric`]: The alphanumeric code table.
//! - [`helper`]: Image and SVG rendering of grids.

pub mod alphanumeric;
pub mod bits;
pub mod content;
pub mod error;
pub mod grid;
pub mod helper;
pub mod mode;
pub mod storage;
pub mod version;

pub use error::EncodeError;
