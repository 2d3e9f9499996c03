// ABOUTME: Formatting and parsing constants shared by the parser and value layer

/// Digits after the decimal point used when rendering a double as an Atom,
/// before trailing zeros (and a trailing bare `.`) are stripped.
pub const FLOAT_PRECISION: usize = 15;

/// Bytes the parser treats as whitespace between tokens.
pub const WHITESPACE: [u8; 4] = [b' ', 9, 10, 13];

#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    WHITESPACE.contains(&byte)
}
