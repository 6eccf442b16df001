#![forbid(unsafe_code)]
//! Byte to alphanumeric-mode code lookup.

/// Characters of the alphanumeric mode, in code order.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

const INVALID: i8 = -1;

/// Alphanumeric code of every byte value, or `-1` when the byte has none.
static ALPHANUMERIC_TABLE: [i8; 256] = build_table();

const fn build_table() -> [i8; 256] {
    let mut table = [INVALID; 256];
    let charset = ALPHANUMERIC_CHARSET.as_bytes();
    let mut code = 0;
    while code < charset.len() {
        table[charset[code] as usize] = code as i8;
        code += 1;
    }
    table
}

/// Returns the alphanumeric code (0–44) of `b`, or `None` if `b` is not in the charset.
///
/// Digits map to their value, so numeric packing uses the same lookup and checks for
/// codes up to 9.
pub fn alphanumeric_code(b: u8) -> Option<u8> {
    match ALPHANUMERIC_TABLE[usize::from(b)] {
        INVALID => None,
        code => Some(code as u8),
    }
}
