use crate::error::{SourceKind, TagError};
use crate::format::display_lines;
use crate::frequency::{count_lines, FrequencyMap};
use crate::persist::{read_lines, read_lines_from, save_results};
use crate::stopwords::StopWordSet;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    StopWordsLoaded,
    TextLoaded,
    Processed,
    Saved,
}

/// Informational outcome of a session command, for the display area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TextLoaded { name: String },
    StopWordsLoaded { name: String, words: usize },
    Processed { distinct: usize, total: usize },
    Saved { path: PathBuf },
    /// Processing was requested before any text file was loaded.
    NoTextFileLoaded,
    /// Saving was requested before anything was processed.
    NothingToSave,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::TextLoaded { name } => write!(f, "Loaded text file: {name}"),
            Notice::StopWordsLoaded { name, .. } => write!(f, "Loaded stop words file: {name}"),
            Notice::Processed { distinct, total } => write!(f, "Counted {total} words, {distinct} distinct"),
            Notice::Saved { path } => write!(f, "Results saved to {}", path.display()),
            Notice::NoTextFileLoaded => f.write_str("Please load a text file first."),
            Notice::NothingToSave => f.write_str("Please process a text file before saving."),
        }
    }
}

/// Everything one run of the extractor knows: the chosen files, the stop words and the
/// latest counts. Commands replace collections wholesale and leave the session untouched
/// when they fail.
#[derive(Debug, Default)]
pub struct Session {
    text_file: Option<PathBuf>,
    stop_words_file: Option<PathBuf>,
    stop_words: StopWordSet,
    results: Option<FrequencyMap>,
    saved: bool,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> State {
        match (&self.results, &self.text_file, &self.stop_words_file) {
            (Some(_), _, _) if self.saved => State::Saved,
            (Some(_), _, _) => State::Processed,
            (None, Some(_), _) => State::TextLoaded,
            (None, None, Some(_)) => State::StopWordsLoaded,
            (None, None, None) => State::Idle,
        }
    }

    pub fn text_file(&self) -> Option<&Path> { self.text_file.as_deref() }

    pub fn stop_words(&self) -> &StopWordSet { &self.stop_words }

    pub fn results(&self) -> Option<&FrequencyMap> { self.results.as_ref() }

    /// Display-area lines for the current results, or `None` before the first run.
    pub fn display_lines(&self) -> Option<Vec<String>> {
        self.results.as_ref().map(display_lines)
    }

    /// Select the text file. Previous counts are discarded.
    pub fn load_text<P: AsRef<Path>>(&mut self, path: P) -> Result<Notice, TagError> {
        let path = path.as_ref();
        File::open(path).map_err(|source| TagError::FileRead {
            source_kind: SourceKind::Text,
            path: path.to_path_buf(),
            source,
        })?;
        self.text_file = Some(path.to_path_buf());
        self.results = None;
        self.saved = false;
        tracing::info!(path = %path.display(), "text file selected");
        Ok(Notice::TextLoaded { name: file_name(path) })
    }

    /// Replace the stop-word set with the contents of `path`.
    ///
    /// All or nothing: if any part of the read fails, the previous set stays in place.
    pub fn load_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<Notice, TagError> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|source| TagError::FileRead {
            source_kind: SourceKind::StopWords,
            path: path.to_path_buf(),
            source,
        })?;
        self.load_stop_words_from(path, BufReader::new(f))
    }

    /// Like `load_stop_words`, reading from `reader`; `path` names the source.
    pub fn load_stop_words_from<R: BufRead>(&mut self, path: &Path, reader: R) -> Result<Notice, TagError> {
        let lines = read_lines_from(reader).map_err(|source| TagError::FileRead {
            source_kind: SourceKind::StopWords,
            path: path.to_path_buf(),
            source,
        })?;
        self.stop_words = StopWordSet::load(lines);
        self.stop_words_file = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), words = self.stop_words.len(), "stop words loaded");
        Ok(Notice::StopWordsLoaded { name: file_name(path), words: self.stop_words.len() })
    }

    /// Count the loaded text file against the current stop words.
    pub fn process(&mut self) -> Result<Notice, TagError> {
        let Some(path) = &self.text_file else {
            tracing::debug!("process requested with no text file");
            return Ok(Notice::NoTextFileLoaded);
        };
        let lines = read_lines(path).map_err(|source| TagError::FileRead {
            source_kind: SourceKind::Text,
            path: path.clone(),
            source,
        })?;
        let freq = count_lines(&lines, &self.stop_words);
        let (distinct, total) = (freq.len(), freq.total());
        tracing::info!(path = %path.display(), distinct, total, "text processed");
        self.results = Some(freq);
        self.saved = false;
        Ok(Notice::Processed { distinct, total })
    }

    /// Write the latest results to `path`, replacing the file if it exists.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<Notice, TagError> {
        let path = path.as_ref();
        let Some(freq) = &self.results else {
            return Ok(Notice::NothingToSave);
        };
        save_results(path, freq).map_err(|source| TagError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        self.saved = true;
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        tracing::info!(path = %path.display(), distinct = freq.len(), "results saved");
        Ok(Notice::Saved { path })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn walks_through_states() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("doc.txt");
        let stop = dir.path().join("stop.txt");
        fs::write(&text, "a b a").unwrap();
        fs::write(&stop, "b").unwrap();

        let mut s = Session::new();
        assert_eq!(s.state(), State::Idle);
        s.load_stop_words(&stop).unwrap();
        assert_eq!(s.state(), State::StopWordsLoaded);
        s.load_text(&text).unwrap();
        assert_eq!(s.state(), State::TextLoaded);
        assert_eq!(s.process().unwrap(), Notice::Processed { distinct: 1, total: 2 });
        assert_eq!(s.state(), State::Processed);
        s.save(dir.path().join("out.txt")).unwrap();
        assert_eq!(s.state(), State::Saved);
        s.load_text(&text).unwrap();
        assert_eq!(s.state(), State::TextLoaded);
        assert!(s.results().is_none());
    }

    #[test]
    fn notice_messages() {
        assert_eq!(Notice::TextLoaded { name: "a.txt".into() }.to_string(), "Loaded text file: a.txt");
        assert_eq!(
            Notice::StopWordsLoaded { name: "s.txt".into(), words: 3 }.to_string(),
            "Loaded stop words file: s.txt"
        );
        assert_eq!(Notice::NoTextFileLoaded.to_string(), "Please load a text file first.");
    }

    #[test]
    fn save_before_process_writes_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let mut s = Session::new();
        assert_eq!(s.save(&out).unwrap(), Notice::NothingToSave);
        assert!(!out.exists());
    }

    #[test]
    fn missing_text_file_keeps_previous_selection() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("doc.txt");
        fs::write(&text, "hello").unwrap();

        let mut s = Session::new();
        s.load_text(&text).unwrap();
        s.process().unwrap();
        let err = s.load_text(dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.category(), "FileReadError");
        assert_eq!(s.text_file(), Some(text.as_path()));
        assert_eq!(s.results().and_then(|f| f.get("hello")), Some(1));
    }
}
