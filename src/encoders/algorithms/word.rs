//! Word-level and glyph-level renderings: Pig Latin and block-letter art.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Lowercases, then moves the consonant prefix of each word behind it and
/// appends `ay`. Words without a vowel just get `ay`.
pub fn encode_pig_latin(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| match word.find(VOWELS) {
            Some(idx) => format!("{}{}ay", &word[idx..], &word[..idx]),
            None => format!("{}ay", word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Block glyphs exist only for A through E.
fn glyph(c: char) -> Option<&'static str> {
    match c.to_ascii_uppercase() {
        'A' => Some("    /\\    \n   /  \\   \n  /    \\  \n /      \\ \n/        \\"),
        'B' => Some("|----- \n|     )\n|-----<\n|     )\n|-----'"),
        'C' => Some("  _____ \n /      \n|       \n \\      \n  -----'"),
        'D' => Some("|\\    \n| )   \n|  )  \n| )   \n|/    "),
        'E' => Some("|-----\n|     \n|---- \n|     \n|-----"),
        _ => None,
    }
}

/// One block per character, blocks joined by newlines.
pub fn encode_ascii_art(text: &str) -> String {
    text.chars()
        .map(|c| match glyph(c) {
            Some(block) => block.to_string(),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
