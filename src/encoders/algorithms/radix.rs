//! Per-character radix renderings: binary, hexadecimal and `U+` code points.
//!
//! All three work on Unicode scalar values. ASCII input gives the classic
//! fixed-width groups; wider scalars simply produce more digits.

/// Longest binary group that can still name a scalar value (U+10FFFF).
const MAX_BINARY_DIGITS: usize = 21;

pub fn encode_binary(text: &str) -> String {
    join_scalars(text, |v| format!("{:08b}", v))
}

/// Parses space-separated base-2 groups. Malformed groups are skipped.
pub fn decode_binary(text: &str) -> String {
    text.split(' ')
        .filter(|group| !group.is_empty() && group.len() <= MAX_BINARY_DIGITS)
        .filter(|group| group.bytes().all(|b| b == b'0' || b == b'1'))
        .filter_map(|group| u32::from_str_radix(group, 2).ok())
        .filter_map(char::from_u32)
        .collect()
}

pub fn encode_hex(text: &str) -> String {
    join_scalars(text, |v| format!("{:02X}", v))
}

pub fn encode_unicode(text: &str) -> String {
    join_scalars(text, |v| format!("U+{:04X}", v))
}

fn join_scalars(text: &str, render: impl Fn(u32) -> String) -> String {
    text.chars()
        .map(|c| render(c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}
