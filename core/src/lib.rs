pub mod error;
pub mod format;
pub mod frequency;
pub mod persist;
pub mod session;
pub mod stopwords;
pub mod tokenizer;

pub use error::{SourceKind, TagError};
pub use frequency::{count, count_lines, FrequencyMap};
pub use session::{Notice, Session, State};
pub use stopwords::StopWordSet;
