use crate::encoders::tables::{MORSE_LOOKUP, MORSE_REVERSE};

/// Token emitted for a dot/dash group that is not in the table.
const UNKNOWN: char = '?';

/// One token per character, joined by single spaces.
///
/// Spaces become a literal space token, so a word gap shows up as three
/// spaces. Unmapped characters contribute an empty token.
pub fn encode(text: &str) -> String {
    text.chars()
        .map(|c| MORSE_LOOKUP.get(&c).copied().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits on single spaces; empty tokens are word gaps.
///
/// Letters come back uppercase and runs of spaces collapse to one.
pub fn decode(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len() / 2);
    let mut last_was_space = false;

    for token in text.split(' ') {
        let c = if token.is_empty() {
            ' '
        } else {
            MORSE_REVERSE.get(token).copied().unwrap_or(UNKNOWN)
        };

        if c == ' ' {
            if last_was_space {
                continue;
            }
            last_was_space = true;
        } else {
            last_was_space = false;
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sos() {
        assert_eq!(encode("SOS"), "... --- ...");
        assert_eq!(encode("sos"), "... --- ...");
        assert_eq!(decode("... --- ..."), "SOS");
    }

    #[test]
    fn test_word_gap() {
        let encoded = encode("HI YOU");
        assert_eq!(encoded, ".... ..   -.-- --- ..-");
        assert_eq!(decode(&encoded), "HI YOU");
    }

    #[test]
    fn test_unmapped_becomes_gap() {
        assert_eq!(encode("A!B"), ".-  -...");
        assert_eq!(decode(".-  -..."), "A B");
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(decode(".- ........ -..."), "A?B");
    }

    #[test]
    fn test_digits() {
        assert_eq!(encode("2026"), "..--- ----- ..--- -....");
        assert_eq!(decode("..--- ----- ..--- -...."), "2026");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
    }
}
