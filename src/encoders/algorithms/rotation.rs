//! Alphabet rotation: Caesar and its fixed-shift special case ROT13.

const ALPHABET_LEN: i32 = 26;

/// Shifts ASCII letters within their case, wrapping around. Any shift is
/// accepted; it is normalised into `0..26`. Everything else is untouched.
pub fn shift(text: &str, by: i32) -> String {
    let by = by.rem_euclid(ALPHABET_LEN) as u8;
    if by == 0 {
        return text.to_string();
    }

    text.chars().map(|c| rotate_char(c, by)).collect()
}

fn rotate_char(c: char, by: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    let offset = (c as u8 - base + by) % ALPHABET_LEN as u8;
    (base + offset) as char
}

pub fn caesar_encode(text: &str, by: i32) -> String {
    shift(text, by)
}

pub fn caesar_decode(text: &str, by: i32) -> String {
    shift(text, -(by % ALPHABET_LEN))
}

/// Self-inverse.
pub fn rot13(text: &str) -> String {
    shift(text, 13)
}
