use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;

/// Words of this many bytes or fewer are noise. Three bytes is one Hangul
/// syllable in UTF-8, so this drops single syllables and tiny ASCII tokens.
pub const MAX_NOISE_LEN: usize = 3;

/// Exact-match words that are never counted.
#[rustfmt::skip]
pub const STOPWORDS: [&str; 22] = [
    // standalone particles
    "은", "는", "이", "가",
    "을", "를",
    "에", "에서", "에게", "으로", "으로써", "부터", "까지",
    "와", "과",
    "도", "만",
    // connectives
    "및", "등",
    "때문에", "위해", "통해",
];

/// Suffixes marking a verb form.
#[rustfmt::skip]
pub const VERB_ENDINGS: [&str; 10] = [
    "한다", "된다", "있다", "가진다", "받는다",
    "하였다", "하며", "하면서",
    "위하여", "의하여",
];

/// Suffixes marking an adjectival form.
pub const ADJECTIVE_ENDINGS: [&str; 2] = ["관한", "관련한"];

lazy_static! {
    static ref STOPWORD_SET: HashSet<&'static [u8]> =
        STOPWORDS.iter().map(|&word| word.as_bytes()).collect();
}

/// Why a word was excluded from counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseReason {
    TooShort,
    Stopword,
    VerbEnding,
    AdjectiveEnding,
}

impl fmt::Display for NoiseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseReason::TooShort => write!(f, "too short"),
            NoiseReason::Stopword => write!(f, "stopword"),
            NoiseReason::VerbEnding => write!(f, "verb ending"),
            NoiseReason::AdjectiveEnding => write!(f, "adjective ending"),
        }
    }
}

/// Classify `word`, returning the first rule that rejects it.
pub fn noise_reason(word: &[u8]) -> Option<NoiseReason> {
    if word.len() <= MAX_NOISE_LEN {
        return Some(NoiseReason::TooShort);
    }
    if STOPWORD_SET.contains(word) {
        return Some(NoiseReason::Stopword);
    }
    if ends_with_any(word, &VERB_ENDINGS) {
        return Some(NoiseReason::VerbEnding);
    }
    if ends_with_any(word, &ADJECTIVE_ENDINGS) {
        return Some(NoiseReason::AdjectiveEnding);
    }
    None
}

pub fn is_noise_word(word: &[u8]) -> bool {
    noise_reason(word).is_some()
}

fn ends_with_any(word: &[u8], suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.ends_with(suffix.as_bytes()))
}
