//! Named HTML entities.

use crate::encoders::tables::{HTML_LOOKUP, HTML_REVERSE};

pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match HTML_LOOKUP.get(&c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Single left-to-right scan. At each `&` the longest known entity wins;
/// replaced text is never scanned again, so `&amp;lt;` yields `&lt;`.
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match HTML_REVERSE
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
