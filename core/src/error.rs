use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which input file a read error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Text,
    StopWords,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Text => f.write_str("text"),
            SourceKind::StopWords => f.write_str("stop words"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TagError {
    #[error("An error occurred while reading the {source_kind} file {}: {source}", path.display())]
    FileRead {
        source_kind: SourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("An error occurred while saving the results to {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TagError {
    pub fn category(&self) -> &'static str {
        match self {
            TagError::FileRead { .. } => "FileReadError",
            TagError::FileWrite { .. } => "FileWriteError",
        }
    }
}
