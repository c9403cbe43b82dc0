use std::fmt;

use crate::RankedEntry;

const TOP_WORDS_HEADER: &str = "=== 상위 10개 단어 ===\n";
const FOOTER: &str = "============================\n";
const SEPARATOR: &str = " : ";

/// Outcome of one analysis: the input size and the top-ranked words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Byte length of the original, untokenized input.
    pub input_len: usize,
    pub entries: Vec<RankedEntry>,
}

impl Report {
    pub fn new(input_len: usize, entries: Vec<RankedEntry>) -> Self {
        Self { input_len, entries }
    }

    fn length_header(&self) -> String {
        format!("=== 텍스트 길이: {} bytes ===\n", self.input_len)
    }

    /// Render the fixed text layout. Words are emitted as their raw bytes, so
    /// the result is only valid UTF-8 when the input was.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(self.length_header().as_bytes());
        out.extend_from_slice(TOP_WORDS_HEADER.as_bytes());
        for entry in &self.entries {
            out.extend_from_slice(&entry.word);
            out.extend_from_slice(SEPARATOR.as_bytes());
            out.extend_from_slice(entry.count.to_string().as_bytes());
            out.push(b'\n');
        }
        out.extend_from_slice(FOOTER.as_bytes());
        out
    }
}

/// Same layout as [`Report::to_bytes`], with invalid UTF-8 in words replaced.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.length_header())?;
        f.write_str(TOP_WORDS_HEADER)?;
        for entry in &self.entries {
            writeln!(f, "{}{SEPARATOR}{}", entry.word_lossy(), entry.count)?;
        }
        f.write_str(FOOTER)
    }
}
