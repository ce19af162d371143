//! Message assembly and budget scoring

use std::collections::HashMap;

use crate::engine::encoding::count_chars;
use crate::types::{Encoding, GeneratedResult, MAX_CHARS_PER_SMS};

/// Assemble one combination into a scored message.
///
/// `pairs` carries (position label, value) in render order. Values are joined
/// with a single space; each value is counted under its position's effective
/// encoding (falling back to `Unicode`), and every separating space costs
/// exactly 1 unit regardless of encoding.
pub fn assemble(
    pairs: &[(String, String)],
    encodings: &HashMap<String, Encoding>,
) -> GeneratedResult {
    let content = pairs
        .iter()
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let value_chars: usize = pairs
        .iter()
        .map(|(label, value)| {
            let encoding = encodings.get(label).copied().unwrap_or_default();
            count_chars(value, encoding)
        })
        .sum();
    let separators = pairs.len().saturating_sub(1);
    let char_count = value_chars + separators;

    let is_exceeded = char_count > MAX_CHARS_PER_SMS;
    let exceeded_chars = char_count.saturating_sub(MAX_CHARS_PER_SMS);

    GeneratedResult {
        content,
        char_count,
        is_exceeded,
        exceeded_chars,
    }
}
