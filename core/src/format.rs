use crate::frequency::FrequencyMap;

pub const DISPLAY_HEADER: &str = "Extracted Tags and Frequencies:";
pub const DISPLAY_RULE: &str = "-------------------------------";

/// Render `word: count` lines in the map's first-seen order.
pub fn format_lines(freq: &FrequencyMap) -> Vec<String> {
    freq.iter().map(|(word, n)| format!("{word}: {n}")).collect()
}

/// Lines for the display area: a blank line, header and rule, then the results.
pub fn display_lines(freq: &FrequencyMap) -> Vec<String> {
    let mut lines = Vec::with_capacity(freq.len() + 3);
    lines.push(String::new());
    lines.push(DISPLAY_HEADER.to_string());
    lines.push(DISPLAY_RULE.to_string());
    lines.extend(format_lines(freq));
    lines
}

/// Parse one saved results line back into its word and count.
pub fn parse_line(line: &str) -> Option<(String, usize)> {
    let (word, n) = line.split_once(": ")?;
    if word.is_empty() { return None; }
    let n = n.trim_end().parse().ok()?;
    Some((word.to_string(), n))
}
