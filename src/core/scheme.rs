use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::encoders::algorithms::errors::{SchemeNotFoundError, find_closest_scheme};

/// A named text transformation.
///
/// The declaration order is the display order used by [`Scheme::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Morse,
    Binary,
    Hexadecimal,
    Leetspeak,
    PigLatin,
    Braille,
    Base64,
    Rot13,
    AsciiArt,
    Unicode,
    Nato,
    Emoji,
    Caesar,
    Url,
    Html,
}

const ALL_SCHEMES: [Scheme; 15] = [
    Scheme::Morse,
    Scheme::Binary,
    Scheme::Hexadecimal,
    Scheme::Leetspeak,
    Scheme::PigLatin,
    Scheme::Braille,
    Scheme::Base64,
    Scheme::Rot13,
    Scheme::AsciiArt,
    Scheme::Unicode,
    Scheme::Nato,
    Scheme::Emoji,
    Scheme::Caesar,
    Scheme::Url,
    Scheme::Html,
];

impl Scheme {
    /// Every scheme, in stable display order.
    pub fn all() -> &'static [Scheme] {
        &ALL_SCHEMES
    }

    /// Short command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Morse => "morse",
            Scheme::Binary => "binary",
            Scheme::Hexadecimal => "hex",
            Scheme::Leetspeak => "leet",
            Scheme::PigLatin => "pig-latin",
            Scheme::Braille => "braille",
            Scheme::Base64 => "base64",
            Scheme::Rot13 => "rot13",
            Scheme::AsciiArt => "ascii-art",
            Scheme::Unicode => "unicode",
            Scheme::Nato => "nato",
            Scheme::Emoji => "emoji",
            Scheme::Caesar => "caesar",
            Scheme::Url => "url",
            Scheme::Html => "html",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Scheme::Morse => "Morse Code",
            Scheme::Binary => "Binary",
            Scheme::Hexadecimal => "Hexadecimal",
            Scheme::Leetspeak => "Leetspeak",
            Scheme::PigLatin => "Pig Latin",
            Scheme::Braille => "Braille",
            Scheme::Base64 => "Base64",
            Scheme::Rot13 => "ROT13",
            Scheme::AsciiArt => "ASCII Art",
            Scheme::Unicode => "Unicode",
            Scheme::Nato => "NATO Phonetic",
            Scheme::Emoji => "Emoji",
            Scheme::Caesar => "Caesar Cipher",
            Scheme::Url => "URL Encoding",
            Scheme::Html => "HTML Entities",
        }
    }

    /// Whether a decode transform exists for this scheme.
    pub fn supports_reverse(self) -> bool {
        matches!(
            self,
            Scheme::Morse
                | Scheme::Binary
                | Scheme::Base64
                | Scheme::Rot13
                | Scheme::Caesar
                | Scheme::Url
                | Scheme::Html
        )
    }

    /// Presentation hint; opaque to the engine.
    pub fn icon(self) -> &'static str {
        match self {
            Scheme::Morse => "dot.radiowaves.right",
            Scheme::Binary => "number",
            Scheme::Hexadecimal => "hexagon",
            Scheme::Leetspeak => "textformat.abc",
            Scheme::PigLatin => "textformat",
            Scheme::Braille => "circle.grid.3x3",
            Scheme::Base64 => "doc.text",
            Scheme::Rot13 => "rotate.right",
            Scheme::AsciiArt => "textformat.alt",
            Scheme::Unicode => "character",
            Scheme::Nato => "airplane",
            Scheme::Emoji => "face.smiling",
            Scheme::Caesar => "key",
            Scheme::Url => "link",
            Scheme::Html => "chevron.left.forwardslash.chevron.right",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scheme::Morse => "Convert text to Morse code",
            Scheme::Binary => "Convert text to binary",
            Scheme::Hexadecimal => "Convert text to hexadecimal",
            Scheme::Leetspeak => "Convert text to Leetspeak",
            Scheme::PigLatin => "Convert text to Pig Latin",
            Scheme::Braille => "Convert text to Braille patterns",
            Scheme::Base64 => "Convert text to Base64",
            Scheme::Rot13 => "Rotate text by 13 positions",
            Scheme::AsciiArt => "Convert text to ASCII art",
            Scheme::Unicode => "Convert to Unicode code points",
            Scheme::Nato => "Spell text with the NATO phonetic alphabet",
            Scheme::Emoji => "Substitute characters with emoji",
            Scheme::Caesar => "Shift letters by a fixed amount",
            Scheme::Url => "Percent-encode text for URLs",
            Scheme::Html => "Escape text as HTML entities",
        }
    }
}

/// Every scheme, in stable display order.
pub fn all_schemes() -> &'static [Scheme] {
    Scheme::all()
}

/// Whether `scheme` has a decode transform.
pub fn supports_reverse(scheme: Scheme) -> bool {
    scheme.supports_reverse()
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Scheme {
    type Err = SchemeNotFoundError;

    /// Accepts the short name, a few aliases, or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();

        let alias = match needle.as_str() {
            "hexadecimal" => Some(Scheme::Hexadecimal),
            "leetspeak" | "1337" => Some(Scheme::Leetspeak),
            "piglatin" | "pig_latin" => Some(Scheme::PigLatin),
            "ascii" | "asciiart" | "ascii_art" => Some(Scheme::AsciiArt),
            "percent" => Some(Scheme::Url),
            _ => None,
        };
        if let Some(scheme) = alias {
            return Ok(scheme);
        }

        Scheme::all()
            .iter()
            .copied()
            .find(|scheme| {
                scheme.name() == needle || scheme.display_name().to_ascii_lowercase() == needle
            })
            .ok_or_else(|| {
                let names: Vec<&str> = Scheme::all().iter().map(|s| s.name()).collect();
                SchemeNotFoundError::new(s, find_closest_scheme(&needle, &names))
            })
    }
}
