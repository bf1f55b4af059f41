use std::collections::HashSet;

/// Normalized stop words. Rebuilt from scratch on every load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn empty() -> Self { Self::default() }

    /// Build a set from raw lines, trimming and lowercasing each one.
    ///
    /// Blank lines become an empty entry; tokens are never empty so it matches nothing.
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
