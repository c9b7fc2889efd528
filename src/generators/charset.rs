// src/generators/charset.rs
//
// Single definition of the character alphabets used for both entropy
// estimation and password generation, so the two can never disagree on
// what counts as a "symbol".

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
/// ASCII punctuation, all 32 characters.
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}
