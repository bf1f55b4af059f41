use crate::frequency::FrequencyMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Read every line of a file. The handle is closed before returning, on success or error.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let f = File::open(path)?;
    read_lines_from(BufReader::new(f))
}

/// Split a reader into lines without their `\n` or `\r\n` terminators.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD, which the tokenizer treats as a separator.
pub fn read_lines_from<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 { break; }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') { buf.pop(); }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

/// Write one `word: count` line per entry, truncating any existing file.
pub fn save_results<P: AsRef<Path>>(path: P, freq: &FrequencyMap) -> io::Result<()> {
    let f = File::create(path)?;
    let mut out = BufWriter::new(f);
    for (word, n) in freq.iter() {
        write!(out, "{word}: {n}{LINE_ENDING}")?;
    }
    out.flush()?;
    Ok(())
}
