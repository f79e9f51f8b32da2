//! Scheme dispatch: one encode transform per scheme, plus a decode transform
//! for the reversible ones.

use crate::core::options::ConversionOptions;
use crate::core::scheme::Scheme;

use super::algorithms::errors::{ConversionError, DecodeError};
use super::algorithms::{
    chunked, entities, morse, percent, radix, rotation, substitution, word,
};

impl Scheme {
    /// Forward transform.
    fn encode_text(self, text: &str, options: &ConversionOptions) -> String {
        match self {
            Scheme::Morse => morse::encode(text),
            Scheme::Binary => radix::encode_binary(text),
            Scheme::Hexadecimal => radix::encode_hex(text),
            Scheme::Leetspeak => substitution::encode_leetspeak(text),
            Scheme::PigLatin => word::encode_pig_latin(text),
            Scheme::Braille => substitution::encode_braille(text),
            Scheme::Base64 => chunked::encode_base64(text),
            Scheme::Rot13 => rotation::rot13(text),
            Scheme::AsciiArt => word::encode_ascii_art(text),
            Scheme::Unicode => radix::encode_unicode(text),
            Scheme::Nato => substitution::encode_nato(text),
            Scheme::Emoji => substitution::encode_emoji(text),
            Scheme::Caesar => rotation::caesar_encode(text, options.caesar_shift),
            Scheme::Url => percent::encode(text),
            Scheme::Html => entities::encode(text),
        }
    }

    /// Reverse transform, `None` for encode-only schemes. Only Base64 can
    /// fail; every other decoder degrades on bad input.
    fn decode_text(
        self,
        text: &str,
        options: &ConversionOptions,
    ) -> Option<Result<String, DecodeError>> {
        let decoded = match self {
            Scheme::Morse => morse::decode(text),
            Scheme::Binary => radix::decode_binary(text),
            Scheme::Base64 => return Some(chunked::decode_base64(text)),
            Scheme::Rot13 => rotation::rot13(text),
            Scheme::Caesar => rotation::caesar_decode(text, options.caesar_shift),
            Scheme::Url => percent::decode(text),
            Scheme::Html => entities::decode(text),
            Scheme::Hexadecimal
            | Scheme::Leetspeak
            | Scheme::PigLatin
            | Scheme::Braille
            | Scheme::AsciiArt
            | Scheme::Unicode
            | Scheme::Nato
            | Scheme::Emoji => return None,
        };
        Some(Ok(decoded))
    }
}

/// Runs `scheme` in the direction selected by `options.reverse`.
pub fn transform(
    scheme: Scheme,
    text: &str,
    options: &ConversionOptions,
) -> Result<String, ConversionError> {
    if !options.reverse {
        return Ok(scheme.encode_text(text, options));
    }

    match scheme.decode_text(text, options) {
        Some(result) => result.map_err(|detail| ConversionError::malformed(scheme, detail)),
        None => Err(ConversionError::unsupported_reverse(scheme)),
    }
}

pub fn encode(
    scheme: Scheme,
    text: &str,
    options: &ConversionOptions,
) -> Result<String, ConversionError> {
    transform(scheme, text, &options.with_reverse(false))
}

/// Fails with [`ConversionError::UnsupportedReverseConversion`] for encode-only schemes.
pub fn decode(
    scheme: Scheme,
    text: &str,
    options: &ConversionOptions,
) -> Result<String, ConversionError> {
    transform(scheme, text, &options.with_reverse(true))
}
