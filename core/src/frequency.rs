use crate::stopwords::StopWordSet;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

/// Word counts kept in first-seen order.
///
/// `slots` maps a word to its position in `entries`, the same dictionary-plus-vector
/// layout the index uses for term ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    slots: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyMap {
    pub fn new() -> Self { Self::default() }

    fn record(&mut self, word: &str) {
        match self.slots.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.slots.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Sum of all counts.
    pub fn total(&self) -> usize { self.entries.iter().map(|(_, n)| n).sum() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, n)| (w.as_str(), *n))
    }
}

/// Count tokens that are non-empty and not stop words.
pub fn count<I, S>(tokens: I, stop_words: &StopWordSet) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut freq = FrequencyMap::new();
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() || stop_words.contains(token) { continue; }
        freq.record(token);
    }
    freq
}

/// Tokenize each line independently, then count.
pub fn count_lines<I, S>(lines: I, stop_words: &StopWordSet) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    count(lines.into_iter().flat_map(|line| tokenize(line.as_ref())), stop_words)
}
