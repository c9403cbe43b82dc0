use std::borrow::Cow;
use std::collections::HashMap;

/// Number of entries kept in a report.
pub const TOP_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: Vec<u8>,
    pub count: usize,
}

impl RankedEntry {
    pub fn word_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.word)
    }
}

/// Occurrence counts keyed by normalized word. Counts only ever grow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: HashMap<Vec<u8>, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: impl Into<Vec<u8>>) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
    }

    pub fn count(&self, word: &[u8]) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries by descending count, at most `limit` of them.
    ///
    /// Equal counts are ordered by ascending word bytes so the ranking does not
    /// depend on hash iteration order.
    pub fn ranked(&self, limit: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = self
            .counts
            .iter()
            .map(|(word, &count)| RankedEntry {
                word: word.clone(),
                count,
            })
            .collect();
        entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries.truncate(limit);
        entries
    }
}

impl<W: Into<Vec<u8>>> Extend<W> for FrequencyTable {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.record(word);
        }
    }
}

impl<W: Into<Vec<u8>>> FromIterator<W> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut table = Self::new();
        table.extend(words);
        table
    }
}
