/// ASCII punctuation trimmed from both ends of a raw token.
const PUNCTUATION: &[u8] = b".,!?;:\"'()[]{}<>";

/// Token separators: the C-locale `isspace` set, which unlike
/// `u8::is_ascii_whitespace` includes the vertical tab.
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Split `text` on runs of ASCII whitespace. Never yields empty tokens.
pub fn tokenize(text: &[u8]) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Iterator over the raw whitespace-delimited tokens of a byte buffer.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let Some(start) = self.rest.iter().position(|&b| !is_separator(b)) else {
            self.rest = &[];
            return None;
        };
        let rest = &self.rest[start..];
        let end = rest
            .iter()
            .position(|&b| is_separator(b))
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;
        Some(token)
    }
}

/// Strip leading and trailing ASCII punctuation. Bytes >= 128 are never touched.
pub fn trim_punctuation(token: &[u8]) -> &[u8] {
    let start = token
        .iter()
        .position(|b| !PUNCTUATION.contains(b))
        .unwrap_or(token.len());
    let end = token
        .iter()
        .rposition(|b| !PUNCTUATION.contains(b))
        .map_or(start, |i| i + 1);
    &token[start..end]
}

/// Lower-case ASCII letters, keep ASCII digits, drop every other ASCII byte
/// (interior ones included) and pass non-ASCII bytes through verbatim.
pub fn normalize_ascii(token: &[u8]) -> Vec<u8> {
    token
        .iter()
        .filter_map(|&b| {
            if !b.is_ascii() {
                Some(b)
            } else if b.is_ascii_alphanumeric() {
                Some(b.to_ascii_lowercase())
            } else {
                None
            }
        })
        .collect()
}

/// Punctuation trimming followed by ASCII normalization.
pub fn normalize_token(token: &[u8]) -> Vec<u8> {
    normalize_ascii(trim_punctuation(token))
}

#[cfg(test)]
mod tests {
    use super::{normalize_ascii, normalize_token, tokenize, trim_punctuation};

    #[test]
    fn splits_on_every_c_locale_space() {
        let tokens: Vec<&[u8]> = tokenize(b"  a\tb\nc\x0Bd\x0Ce\rf  ").collect();
        assert_eq!(
            tokens,
            vec![&b"a"[..], b"b", b"c", b"d", b"e", b"f"]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert_eq!(tokenize(b"").count(), 0);
        assert_eq!(tokenize(b" \n\t ").count(), 0);
    }

    #[test]
    fn trims_only_outer_punctuation() {
        assert_eq!(trim_punctuation(b"\"(hello)!\""), b"hello");
        assert_eq!(trim_punctuation(b"a.b"), b"a.b");
        assert_eq!(trim_punctuation(b"?!..."), b"");
        assert_eq!(trim_punctuation(b"#tag#"), b"#tag#");
    }

    #[test]
    fn non_ascii_bytes_survive_trimming() {
        let word = "「국회」".as_bytes();
        assert_eq!(trim_punctuation(word), word);
    }

    #[test]
    fn interior_symbols_are_dropped_and_letters_lowered() {
        assert_eq!(normalize_ascii(b"Rust-Lang_2024"), b"rustlang2024");
        assert_eq!(normalize_ascii(b"#$%"), b"");
    }

    #[test]
    fn malformed_multibyte_passes_through() {
        assert_eq!(normalize_ascii(&[0xFF, b'A', 0x80]), vec![0xFF, b'a', 0x80]);
    }

    #[test]
    fn normalize_token_trims_before_folding() {
        assert_eq!(normalize_token("(Hello,".as_bytes()), b"hello");
        assert_eq!(normalize_token("국회의.".as_bytes()), "국회의".as_bytes());
    }
}
