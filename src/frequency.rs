use std::collections::HashMap;

use crate::ChineseTokenizer;

pub const DEFAULT_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: usize,
}

/// The most frequent words of one document, in ascending order of frequency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    pub rows: Vec<WordFrequency>,
    /// Tokens that survived filtering, i.e. the sum of every count before truncation.
    pub total_tokens: usize,
    pub distinct_words: usize,
}

impl FrequencyTable {
    pub fn from_text(tokenizer: &ChineseTokenizer, text: &str, limit: usize) -> Self {
        Self::from_tokens(tokenizer.tokenize(text), limit)
    }

    /// Counts `tokens` and keeps the `limit` most common ones. Equal counts
    /// are ranked by first occurrence, both when truncating and in the final
    /// ascending order.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>, limit: usize) -> Self {
        // word -> (count, first position)
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut total_tokens = 0;

        for (index, word) in tokens.into_iter().enumerate() {
            let entry = counts.entry(word).or_insert((0, index));
            entry.0 += 1;
            total_tokens += 1;
        }

        let distinct_words = counts.len();

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(word, (count, first))| (word, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(limit);
        ranked.sort_by(|a, b| a.1.cmp(&b.1).then(a.2.cmp(&b.2)));

        let rows = ranked
            .into_iter()
            .map(|(word, frequency, _)| WordFrequency {
                word: word.to_string(),
                frequency,
            })
            .collect();

        FrequencyTable {
            rows,
            total_tokens,
            distinct_words,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn max_frequency(&self) -> usize {
        self.rows.iter().map(|row| row.frequency).max().unwrap_or(0)
    }

    pub fn min_frequency(&self) -> usize {
        self.rows.iter().map(|row| row.frequency).min().unwrap_or(0)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.word.as_str())
    }

    pub fn frequencies(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(|row| row.frequency)
    }
}
