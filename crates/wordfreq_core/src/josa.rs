/// Particle suffixes in priority order; the first match wins.
///
/// `에는` is listed twice. The second entry can never fire because the first
/// one already matches every word it would, but the order is kept as is.
#[rustfmt::skip]
pub const JOSA_SUFFIXES: [&str; 23] = [
    "에는", "에게는",
    "으로써", "으로서",
    "으로는", "으로",
    "까지", "부터",
    "에서", "에게",
    "에는",
    "에",
    "의",
    "은", "는", "이", "가",
    "을", "를",
    "와", "과",
    "도", "만",
];

/// Remove at most one trailing particle from `word`.
///
/// Lengths are byte lengths. A suffix only applies when the word is more than
/// twice as long as the suffix, so short words are left intact.
pub fn strip_josa(word: &[u8]) -> &[u8] {
    JOSA_SUFFIXES
        .iter()
        .map(|suffix| suffix.as_bytes())
        .filter(|suffix| word.len() > suffix.len() * 2)
        .find_map(|suffix| word.strip_suffix(suffix))
        .unwrap_or(word)
}
