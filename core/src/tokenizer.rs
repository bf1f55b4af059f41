use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything outside [A-Za-z'] separates words; apostrophes keep contractions whole.
    static ref RE: Regex = Regex::new(r"[A-Za-z']+").expect("valid regex");
}

/// Tokenize a single line into lowercase words made of ASCII letters and apostrophes.
///
/// Lines are independent: a word broken across a line break yields two tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    RE.find_iter(line)
        .map(|mat| mat.as_str().to_ascii_lowercase())
        .collect()
}
