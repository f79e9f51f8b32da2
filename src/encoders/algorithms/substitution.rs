//! One-to-one table substitutions. Characters missing from a table pass
//! through unchanged.

use std::collections::HashMap;

use crate::encoders::tables::{BRAILLE_LOOKUP, EMOJI_LOOKUP, LEETSPEAK_LOOKUP, NATO_LOOKUP};

pub fn encode_leetspeak(text: &str) -> String {
    substitute(text, &LEETSPEAK_LOOKUP)
}

pub fn encode_braille(text: &str) -> String {
    substitute(text, &BRAILLE_LOOKUP)
}

pub fn encode_emoji(text: &str) -> String {
    substitute(&text.to_uppercase(), &EMOJI_LOOKUP)
}

/// Phonetic words joined by single spaces; a space becomes `/`.
pub fn encode_nato(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| match NATO_LOOKUP.get(&c) {
            Some(word) => (*word).to_string(),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn substitute(text: &str, table: &HashMap<char, &'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table.get(&c) {
            Some(code) => out.push_str(code),
            None => out.push(c),
        }
    }
    out
}
