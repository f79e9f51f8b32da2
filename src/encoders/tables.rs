//! Fixed character mapping tables.
//!
//! Forward tables are plain slices; lookups and inverse tables are built
//! once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Morse code for letters (uppercase keys), digits and the word gap.
pub const MORSE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', " "),
];

pub const LEETSPEAK: &[(char, &str)] = &[
    ('A', "4"),
    ('B', "8"),
    ('E', "3"),
    ('G', "9"),
    ('I', "1"),
    ('O', "0"),
    ('S', "5"),
    ('T', "7"),
    ('Z', "2"),
];

pub const BRAILLE: &[(char, &str)] = &[
    ('A', "⠁"),
    ('B', "⠃"),
    ('C', "⠉"),
    ('D', "⠙"),
    ('E', "⠑"),
    ('F', "⠋"),
    ('G', "⠛"),
    ('H', "⠓"),
    ('I', "⠊"),
    ('J', "⠚"),
    ('K', "⠅"),
    ('L', "⠇"),
    ('M', "⠍"),
    ('N', "⠝"),
    ('O', "⠕"),
    ('P', "⠏"),
    ('Q', "⠟"),
    ('R', "⠗"),
    ('S', "⠎"),
    ('T', "⠞"),
    ('U', "⠥"),
    ('V', "⠧"),
    ('W', "⠺"),
    ('X', "⠭"),
    ('Y', "⠽"),
    ('Z', "⠵"),
    (' ', " "),
];

pub const NATO: &[(char, &str)] = &[
    ('A', "Alfa"),
    ('B', "Bravo"),
    ('C', "Charlie"),
    ('D', "Delta"),
    ('E', "Echo"),
    ('F', "Foxtrot"),
    ('G', "Golf"),
    ('H', "Hotel"),
    ('I', "India"),
    ('J', "Juliett"),
    ('K', "Kilo"),
    ('L', "Lima"),
    ('M', "Mike"),
    ('N', "November"),
    ('O', "Oscar"),
    ('P', "Papa"),
    ('Q', "Quebec"),
    ('R', "Romeo"),
    ('S', "Sierra"),
    ('T', "Tango"),
    ('U', "Uniform"),
    ('V', "Victor"),
    ('W', "Whiskey"),
    ('X', "X-ray"),
    ('Y', "Yankee"),
    ('Z', "Zulu"),
    ('0', "Zero"),
    ('1', "One"),
    ('2', "Two"),
    ('3', "Three"),
    ('4', "Four"),
    ('5', "Five"),
    ('6', "Six"),
    ('7', "Seven"),
    ('8', "Eight"),
    ('9', "Nine"),
    (' ', "/"),
];

pub const EMOJI: &[(char, &str)] = &[
    ('A', "🍎"),
    ('B', "🐝"),
    ('C', "🐱"),
    ('D', "🐶"),
    ('E', "🐘"),
    ('F', "🐸"),
    ('G', "🍇"),
    ('H', "🏠"),
    ('I', "🍦"),
    ('J', "🃏"),
    ('K', "🔑"),
    ('L', "🦁"),
    ('M', "🌙"),
    ('N', "👃"),
    ('O', "🐙"),
    ('P', "🐧"),
    ('Q', "👑"),
    ('R', "🌈"),
    ('S', "🐍"),
    ('T', "🌴"),
    ('U', "🦄"),
    ('V', "🎻"),
    ('W', "🐋"),
    ('X', "❌"),
    ('Y', "🪀"),
    ('Z', "⚡"),
    ('0', "0️⃣"),
    ('1', "1️⃣"),
    ('2', "2️⃣"),
    ('3', "3️⃣"),
    ('4', "4️⃣"),
    ('5', "5️⃣"),
    ('6', "6️⃣"),
    ('7', "7️⃣"),
    ('8', "8️⃣"),
    ('9', "9️⃣"),
    ('!', "❗"),
    ('?', "❓"),
    ('+', "➕"),
    ('-', "➖"),
];

pub const HTML_ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
    ('¢', "&cent;"),
    ('£', "&pound;"),
    ('¥', "&yen;"),
    ('€', "&euro;"),
    ('©', "&copy;"),
    ('®', "&reg;"),
];

/// Builds a char lookup from a table whose letter keys are uppercase.
fn case_folded(table: &[(char, &'static str)]) -> HashMap<char, &'static str> {
    let mut map = HashMap::with_capacity(table.len() * 2);
    for &(c, code) in table {
        map.insert(c, code);
        if c.is_ascii_uppercase() {
            map.insert(c.to_ascii_lowercase(), code);
        }
    }
    map
}

fn exact(table: &[(char, &'static str)]) -> HashMap<char, &'static str> {
    table.iter().copied().collect()
}

pub static MORSE_LOOKUP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| case_folded(MORSE));

/// Dot/dash token back to its uppercase character. The word gap is excluded.
pub static MORSE_REVERSE: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    MORSE
        .iter()
        .filter(|(c, _)| *c != ' ')
        .map(|&(c, code)| (code, c))
        .collect()
});

pub static LEETSPEAK_LOOKUP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| case_folded(LEETSPEAK));

pub static BRAILLE_LOOKUP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| case_folded(BRAILLE));

pub static NATO_LOOKUP: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| exact(NATO));

pub static EMOJI_LOOKUP: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| exact(EMOJI));

pub static HTML_LOOKUP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| exact(HTML_ENTITIES));

/// Entities ordered longest first, so a scanner tries `&pound;` before any
/// shorter entity sharing its prefix.
pub static HTML_REVERSE: LazyLock<Vec<(&'static str, char)>> = LazyLock::new(|| {
    let mut entities: Vec<(&'static str, char)> =
        HTML_ENTITIES.iter().map(|&(c, entity)| (entity, c)).collect();
    entities.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
    entities
});
