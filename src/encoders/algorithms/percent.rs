//! Percent-encoding for URL query components.

/// Punctuation left alone in a query component, alongside ASCII alphanumerics.
const QUERY_SAFE: &[u8] = b"-._~!$&'()*+,;=:@/?";

fn is_query_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || QUERY_SAFE.contains(&b)
}

/// Escapes every UTF-8 byte outside the query-safe set as `%XX`.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &b in text.as_bytes() {
        if is_query_safe(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&hex::encode_upper([b]));
        }
    }
    out
}

/// Resolves `%XX` escapes. Malformed escapes are kept literally, and if the
/// unescaped bytes are not UTF-8 the input comes back unchanged.
pub fn decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(escape) = bytes.get(i + 1..i + 3)
        {
            let mut decoded = [0u8; 1];
            if hex::decode_to_slice(escape, &mut decoded).is_ok() {
                out.push(decoded[0]);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).unwrap_or_else(|_| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_spaces_and_reserved() {
        assert_eq!(encode("hello world"), "hello%20world");
        assert_eq!(encode("a=1&b=2?x/y"), "a=1&b=2?x/y");
        assert_eq!(encode("50% #1"), "50%25%20%231");
    }

    #[test]
    fn test_encode_utf8() {
        assert_eq!(encode("é"), "%C3%A9");
        assert_eq!(encode("€"), "%E2%82%AC");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("hello%20world"), "hello world");
        assert_eq!(decode("%C3%A9t%c3%a9"), "été");
    }

    #[test]
    fn test_decode_keeps_invalid_escapes() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("%zz%41"), "%zzA");
        assert_eq!(decode("%4"), "%4");
    }

    #[test]
    fn test_decode_invalid_utf8_returns_input() {
        assert_eq!(decode("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn test_roundtrip() {
        let text = "name=Zoë & Co <tag> 100% \"quoted\"";
        assert_eq!(decode(&encode(text)), text);
    }
}
