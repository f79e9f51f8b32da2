//! RFC 4648 style bit-chunked encoding, used for the Base64 scheme.

use num_integer::lcm;
use std::sync::LazyLock;

use super::errors::DecodeError;

const BASE64_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// A power-of-two alphabet with optional padding.
#[derive(Debug, Clone)]
pub struct ChunkedAlphabet {
    chars: Vec<char>,
    lookup: [Option<u8>; 128],
    padding: Option<char>,
    bits_per_char: usize,
}

impl ChunkedAlphabet {
    fn new(chars: &str, padding: Option<char>) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        debug_assert!(chars.len().is_power_of_two() && chars.len() <= 128);

        let mut lookup = [None; 128];
        for (i, &c) in chars.iter().enumerate() {
            lookup[c as usize] = Some(i as u8);
        }

        Self {
            bits_per_char: chars.len().trailing_zeros() as usize,
            chars,
            lookup,
            padding,
        }
    }

    /// Characters emitted per padded group.
    fn group_size(&self) -> usize {
        // Base64: LCM(6,8)=24, 24/6=4
        lcm(self.bits_per_char, 8) / self.bits_per_char
    }

    fn decode_char(&self, c: char) -> Option<u8> {
        self.lookup.get(c as usize).copied().flatten()
    }

    fn describe(&self) -> String {
        let mut valid: String = self.chars.iter().collect();
        if let Some(pad) = self.padding {
            valid.push(pad);
        }
        valid
    }
}

pub static BASE64: LazyLock<ChunkedAlphabet> =
    LazyLock::new(|| ChunkedAlphabet::new(BASE64_CHARS, Some('=')));

pub fn encode_chunked(data: &[u8], alphabet: &ChunkedAlphabet) -> String {
    let bits_per_char = alphabet.bits_per_char;
    let mask = (1u32 << bits_per_char) - 1;

    let output_chars = (data.len() * 8).div_ceil(bits_per_char);
    let mut result = String::with_capacity(output_chars.div_ceil(4) * 4);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            result.push(alphabet.chars[index]);
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits_per_char - bits_in_buffer)) & mask) as usize;
        result.push(alphabet.chars[index]);
    }

    if let Some(pad_char) = alphabet.padding {
        let group_size = alphabet.group_size();
        let padded_chars = result.len().div_ceil(group_size) * group_size;

        while result.len() < padded_chars {
            result.push(pad_char);
        }
    }

    result
}

/// Strict decode: every character must be in the alphabet, padding may only
/// close the final group, padded input must fill whole groups, and the bits
/// left over after the last full byte must be zero.
pub fn decode_chunked(encoded: &str, alphabet: &ChunkedAlphabet) -> Result<Vec<u8>, DecodeError> {
    let bits_per_char = alphabet.bits_per_char;
    let chars: Vec<char> = encoded.chars().collect();

    if alphabet.padding.is_some() {
        let group_size = alphabet.group_size();
        if chars.len() % group_size != 0 {
            return Err(DecodeError::invalid_length(
                chars.len(),
                format!("a multiple of {}", group_size),
                "add padding (=) or check for missing characters",
            ));
        }
    }

    let mut result = Vec::with_capacity(chars.len() * bits_per_char / 8);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mut padding_at = None;
    let mut last_data = 0;

    for (position, &c) in chars.iter().enumerate() {
        if Some(c) == alphabet.padding {
            padding_at.get_or_insert(position);
            continue;
        }
        if padding_at.is_some() {
            return Err(DecodeError::InvalidPadding);
        }

        let digit = alphabet.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, position, encoded, &alphabet.describe())
        })?;

        last_data = position;
        bit_buffer = (bit_buffer << bits_per_char) | (digit as u32);
        bits_in_buffer += bits_per_char;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    if let Some(start) = padding_at {
        // At most one group's worth of padding, and never a whole group
        let pad_len = chars.len() - start;
        let group_size = alphabet.group_size();
        if pad_len >= group_size || start % group_size < group_size / 2 {
            return Err(DecodeError::InvalidPadding);
        }
    }

    if bit_buffer & ((1 << bits_in_buffer) - 1) != 0 {
        return Err(DecodeError::TrailingBits {
            position: last_data,
        });
    }

    Ok(result)
}

/// Base64 of the UTF-8 bytes of `text`.
pub fn encode_base64(text: &str) -> String {
    encode_chunked(text.as_bytes(), &BASE64)
}

/// Decodes Base64 back into UTF-8 text.
pub fn decode_base64(encoded: &str) -> Result<String, DecodeError> {
    let bytes = decode_chunked(encoded, &BASE64)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
