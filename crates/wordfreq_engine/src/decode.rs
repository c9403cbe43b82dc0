use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
    /// Malformed sequences were replaced with U+FFFD.
    pub replaced: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown encoding label {0:?}")]
    UnknownLabel(String),
    #[error("input is not valid {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode raw bytes into UTF-8 using: BOM -> explicit label -> chardetng fallback.
///
/// UTF-8 is always decoded leniently, malformed sequences becoming U+FFFD,
/// the same way a browser reads a text file. Only an explicit legacy label
/// (e.g. `euc-kr`) rejects bytes that do not fit it. Korean text files are
/// frequently EUC-KR / CP949, which the detector recognizes when no label is
/// given.
pub fn decode_text(bytes: &[u8], label: Option<&str>) -> Result<DecodedText, DecodeError> {
    // 1) BOM wins over everything else
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Ok(decode_lossy(bytes, encoding));
    }

    // 2) Caller supplied label
    if let Some(label) = label {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| DecodeError::UnknownLabel(label.to_string()))?;
        if encoding == UTF_8 {
            return Ok(decode_lossy(bytes, encoding));
        }
        return decode_strict(bytes, encoding);
    }

    // 3) chardetng detection, UTF-8 allowed. A stray invalid byte makes the
    //    detector drop UTF-8, so mostly-UTF-8 input is checked first.
    if is_mostly_utf8(bytes) {
        return Ok(decode_lossy(bytes, UTF_8));
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    Ok(decode_lossy(bytes, encoding))
}

/// True when valid multi-byte UTF-8 characters outnumber malformed sequences.
/// Legacy double-byte text almost never forms valid UTF-8 sequences.
fn is_mostly_utf8(bytes: &[u8]) -> bool {
    let mut valid_non_ascii = 0usize;
    let mut malformed = 0usize;
    for chunk in bytes.utf8_chunks() {
        valid_non_ascii += chunk.valid().chars().filter(|c| !c.is_ascii()).count();
        if !chunk.invalid().is_empty() {
            malformed += 1;
        }
    }
    valid_non_ascii > malformed
}

fn decode_lossy(bytes: &[u8], encoding: &'static Encoding) -> DecodedText {
    let (text, used, had_errors) = encoding.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding: used.name(),
        replaced: had_errors,
    }
}

fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let decoded = decode_lossy(bytes, encoding);
    if decoded.replaced {
        return Err(DecodeError::DecodeFailure {
            encoding: decoded.encoding.to_string(),
        });
    }
    Ok(decoded)
}
