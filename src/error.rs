//! Encoder error types.

use thiserror::Error;

/// Errors reported by the content encoder.
///
/// Ways to handle [`EncodeError::DataTooLarge`]:
///
/// - Decrease the error correction level if it was greater than `EcLevel::Low`.
/// - Change the text to fit the character set of a denser mode (numeric or alphanumeric).
/// - Shorten the text or binary data.
/// - Propagate the error upward to the caller/user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The requested error correction level is not one of L, M, Q or H.
    #[error("unrecognized EC level: {0}")]
    UnsupportedEcLevel(String),

    /// The content does not fit in the largest version at the requested level.
    #[error("data too large: {needed} bits needed, max capacity {capacity} bits")]
    DataTooLarge {
        /// Bits needed including mode header and character count field.
        needed: usize,
        /// Data capacity of version 40 at the requested level.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EncodeError::UnsupportedEcLevel("X".into());
        assert_eq!(err.to_string(), "unrecognized EC level: X");

        let err = EncodeError::DataTooLarge {
            needed: 23700,
            capacity: 23648,
        };
        assert_eq!(
            err.to_string(),
            "data too large: 23700 bits needed, max capacity 23648 bits"
        );
    }
}
