//! End-to-end encoding scenarios against worked examples of the QR standard.

use qrbits::content::{binary_content_bits, string_content_bits};
use qrbits::mode::Mode;
use qrbits::version::{EcLevel, Version};
use qrbits::EncodeError;

#[test]
fn hello_world_alphanumeric_medium() {
    let encoded = string_content_bits("HELLO WORLD", EcLevel::Medium).unwrap();
    assert_eq!(encoded.mode, Mode::Alphanumeric);
    assert_eq!(encoded.version, Version::new(1));
    assert_eq!(encoded.ec_level, EcLevel::Medium);

    let s = encoded.bits.to_string();
    // Mode indicator, 9-bit count of 11, five 11-bit pairs and a 6-bit single.
    assert_eq!(&s[..4], "0010");
    assert_eq!(&s[4..13], "000001011");
    assert_eq!(&s[13..24], "01100001011");
    assert_eq!(&s[68..74], "001101");
    assert_eq!(s.len(), 128);
}

#[test]
fn numeric_worked_example() {
    let encoded = string_content_bits("01234567", EcLevel::Medium).unwrap();
    assert_eq!(encoded.mode, Mode::Numeric);
    assert_eq!(
        &encoded.bits.to_string()[..41],
        "0001\
         0000001000\
         0000001100\
         0101011001\
         1000011"
    );
    assert_eq!(
        encoded.bits.to_bytes(),
        vec![
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ]
    );
}

#[test]
fn empty_binary_picks_version_one_at_every_level() {
    for ecl in EcLevel::ALL {
        let encoded = binary_content_bits(&[], ecl).unwrap();
        assert_eq!(encoded.version, Version::MIN);
        assert_eq!(encoded.mode, Mode::Byte);
        assert_eq!(encoded.bits.len(), Version::MIN.data_capacity_bits(ecl));
        let bytes = encoded.bits.to_bytes();
        // Header and zero count, then the 4-bit terminator completing the second byte.
        assert_eq!(&bytes[..2], &[0x40, 0x00]);
        for (i, b) in bytes[2..].iter().enumerate() {
            assert_eq!(*b, if i % 2 == 0 { 0xEC } else { 0x11 });
        }
    }
}

#[test]
fn utf8_text_uses_eci_and_byte_mode() {
    let encoded = string_content_bits("Grüße", EcLevel::Low).unwrap();
    assert_eq!(encoded.mode, Mode::Byte);
    let s = encoded.bits.to_string();
    assert_eq!(&s[..16], "0111000110100100");
    // "Grüße" is 7 bytes in UTF-8.
    assert_eq!(&s[16..24], "00000111");
}

#[test]
fn stream_always_fills_capacity() {
    for len in [0usize, 1, 2, 3, 17, 18, 19, 100, 500] {
        let text = "7".repeat(len);
        for ecl in EcLevel::ALL {
            let encoded = string_content_bits(&text, ecl).unwrap();
            assert_eq!(
                encoded.bits.len(),
                encoded.version.data_codewords(ecl) * 8,
                "len {} at {:?}",
                len,
                ecl
            );
        }
    }
}

#[test]
fn higher_level_never_picks_smaller_version() {
    let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789";
    let versions: Vec<Version> = EcLevel::ALL
        .iter()
        .map(|&ecl| string_content_bits(text, ecl).unwrap().version)
        .collect();
    assert!(versions.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn capacity_error_is_not_downgraded() {
    let data = vec![0xA5u8; 1300];
    assert!(matches!(
        binary_content_bits(&data, EcLevel::High),
        Err(EncodeError::DataTooLarge { .. })
    ));
    let encoded = binary_content_bits(&data, EcLevel::Low).unwrap();
    assert_eq!(encoded.ec_level, EcLevel::Low);
}

#[test]
fn unsupported_level_is_a_configuration_error() {
    assert_eq!(
        "Z".parse::<EcLevel>(),
        Err(EncodeError::UnsupportedEcLevel("Z".to_string()))
    );
    assert!(EcLevel::try_from(7u8).is_err());
}
