//! 截取两个模式之间的文本。

use regex::Regex;

use crate::error::SeqError;

/// Text captured between `start` and `end` in `text`.
///
/// Both are regular expressions; the capture is greedy and spans newlines,
/// so at most one span is returned: from the first `start` to the last `end`.
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> Result<Vec<&'a str>, SeqError> {
    let re = Regex::new(&format!("(?s){start}(.*){end}"))?;
    Ok(re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect())
}
