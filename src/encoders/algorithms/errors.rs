use std::fmt;

use crate::core::scheme::Scheme;

/// Low-level reasons an encoded payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The padding is malformed or appears before the end of the input
    InvalidPadding,
    /// Invalid length for the encoding format
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// The last character before padding carries bits past the data
    TrailingBits { position: usize },
    /// The decoded bytes are not valid UTF-8 text
    InvalidUtf8 { valid_up_to: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        DecodeError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                writeln!(f, "invalid character '{}' at position {}", c, position)?;
                writeln!(f)?;

                // Caret under the offending character; position counts chars, not bytes
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                hint(f, use_color, &format!("valid characters: {}", valid_chars))
            }
            DecodeError::InvalidPadding => {
                writeln!(f, "invalid padding")?;
                writeln!(f)?;
                hint(
                    f,
                    use_color,
                    "'=' may only appear at the end of the input, at most twice",
                )
            }
            DecodeError::InvalidLength {
                actual,
                expected,
                hint: text,
            } => {
                writeln!(f, "invalid length for decode")?;
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                hint(f, use_color, text)
            }
            DecodeError::TrailingBits { position } => {
                writeln!(
                    f,
                    "non-zero trailing bits in the character at position {}",
                    position
                )?;
                writeln!(f)?;
                hint(
                    f,
                    use_color,
                    "the input was not produced by a standard Base64 encoder",
                )
            }
            DecodeError::InvalidUtf8 { valid_up_to } => {
                writeln!(
                    f,
                    "decoded bytes are not valid UTF-8 (valid up to byte {})",
                    valid_up_to
                )?;
                writeln!(f)?;
                hint(f, use_color, "the payload was probably not produced from text")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors surfaced by the conversion engine, the batch processor and option
/// validation. None of them are fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Caller-level validation: there was nothing to convert
    EmptyInput,
    /// A decode was requested for an encode-only scheme
    UnsupportedReverseConversion { scheme: Scheme },
    /// The encoded payload could not be decoded (Base64 only)
    MalformedEncodedInput { scheme: Scheme, detail: DecodeError },
    /// An option lies outside its accepted range
    InvalidOption {
        option: &'static str,
        value: i64,
        expected: &'static str,
    },
    /// A `chrono` date format string contains an unknown specifier
    InvalidDateFormat { format: String },
    /// A batch job was cancelled between chunks
    Cancelled { reason: String },
}

impl ConversionError {
    pub fn unsupported_reverse(scheme: Scheme) -> Self {
        ConversionError::UnsupportedReverseConversion { scheme }
    }

    pub fn malformed(scheme: Scheme, detail: DecodeError) -> Self {
        ConversionError::MalformedEncodedInput { scheme, detail }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        header(f, use_color)?;

        match self {
            ConversionError::EmptyInput => write!(f, "nothing to convert: input is empty"),
            ConversionError::UnsupportedReverseConversion { scheme } => {
                writeln!(f, "{} cannot be decoded", scheme.display_name())?;
                writeln!(f)?;
                hint(
                    f,
                    use_color,
                    "only Morse, Binary, Base64, ROT13, Caesar, URL and HTML support decoding",
                )
            }
            ConversionError::MalformedEncodedInput { scheme, detail } => {
                write!(f, "malformed {} input: {}", scheme.display_name(), detail)
            }
            ConversionError::InvalidOption {
                option,
                value,
                expected,
            } => {
                writeln!(f, "invalid value {} for {}", value, option)?;
                writeln!(f)?;
                hint(f, use_color, &format!("expected {}", expected))
            }
            ConversionError::InvalidDateFormat { format } => {
                writeln!(f, "invalid date format '{}'", format)?;
                writeln!(f)?;
                hint(f, use_color, "use strftime specifiers such as %Y-%m-%d %H:%M")
            }
            ConversionError::Cancelled { reason } => {
                write!(f, "conversion cancelled ({})", reason)
            }
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::MalformedEncodedInput { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

fn header(f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m ")
    } else {
        write!(f, "error: ")
    }
}

fn hint(f: &mut fmt::Formatter<'_>, use_color: bool, text: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", text)
    } else {
        write!(f, "hint: {}", text)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a scheme name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl SchemeNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for SchemeNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        header(f, use_color)?;
        writeln!(f, "scheme '{}' not found", self.name)?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`decoder config list`\x1b[0m to see all schemes"
            )
        } else {
            write!(f, "      run `decoder config list` to see all schemes")
        }
    }
}

impl std::error::Error for SchemeNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching scheme name
pub fn find_closest_scheme(name: &str, available: &[&str]) -> Option<String> {
    let name = name.to_ascii_lowercase();
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(&name, candidate);

        // 1-2 character typos for short names, up to 3 for longer ones
        let threshold = if name.len() < 5 { 2 } else { 3 };

        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_no_color<F: FnOnce()>(f: F) {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
        f();
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("morse", "morse"), 0);
        assert_eq!(levenshtein_distance("mose", "morse"), 1);
        assert_eq!(levenshtein_distance("rot13", "rot31"), 2);
        assert_eq!(levenshtein_distance("", "hex"), 3);
    }

    #[test]
    fn test_find_closest_scheme() {
        let schemes = ["morse", "binary", "base64", "rot13", "hex"];

        assert_eq!(
            find_closest_scheme("mors", &schemes),
            Some("morse".to_string())
        );
        assert_eq!(
            find_closest_scheme("BASE46", &schemes),
            Some("base64".to_string())
        );
        assert_eq!(find_closest_scheme("semaphore", &schemes), None);
    }

    #[test]
    fn test_invalid_character_display() {
        with_no_color(|| {
            let err = DecodeError::invalid_character('!', 4, "SGk=!", "A-Za-z0-9+/=");
            let display = format!("{}", err);

            assert!(display.contains("invalid character '!' at position 4"));
            assert!(display.contains("SGk=!"));
            assert!(display.contains("^"));
            assert!(display.contains("hint: valid characters"));
        });
    }

    #[test]
    fn test_unsupported_reverse_display() {
        with_no_color(|| {
            let err = ConversionError::unsupported_reverse(Scheme::PigLatin);
            let display = format!("{}", err);

            assert!(display.starts_with("error: Pig Latin cannot be decoded"));
            assert!(display.contains("hint:"));
        });
    }

    #[test]
    fn test_malformed_exposes_source() {
        use std::error::Error;

        let err = ConversionError::malformed(Scheme::Base64, DecodeError::InvalidPadding);
        assert!(err.source().is_some());
        assert!(ConversionError::EmptyInput.source().is_none());
    }

    #[test]
    fn test_scheme_not_found_display() {
        with_no_color(|| {
            let err = SchemeNotFoundError::new("mors", Some("morse".to_string()));
            let display = format!("{}", err);

            assert!(display.contains("scheme 'mors' not found"));
            assert!(display.contains("did you mean 'morse'?"));
            assert!(display.contains("decoder config list"));
        });
    }
}
