//! Word list input: one candidate word per line.

use std::path::Path;

use tracing::debug;

use crate::error::{read_file, ConvertResult};

/// Trim every line and drop the ones left empty, keeping input order.
///
/// `\n`, `\r\n` and a bare `\r` all end a line.
pub fn parse_words(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a UTF-8 word list from disk.
pub fn read_words(path: &Path) -> ConvertResult<Vec<String>> {
    let text = read_file(path)?;
    let words = parse_words(&text);
    debug!(path = %path.display(), count = words.len(), "Read word list");
    Ok(words)
}
