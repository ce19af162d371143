//! Character counting under the supported SMS encodings

use crate::types::Encoding;

/// Count `text` in SMS characters under `encoding`.
///
/// `Ascii` counts only code points below 128 and skips the rest. `Unicode`
/// counts code points. `Zawgyi` and `Other` count UTF-8 bytes, since those
/// encodings are bytes-expensive on the wire.
pub fn count_chars(text: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Ascii => text.chars().filter(|c| (*c as u32) < 128).count(),
        Encoding::Unicode => text.chars().count(),
        Encoding::Zawgyi | Encoding::Other => text.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_counts_only_low_code_points() {
        assert_eq!(count_chars("hello", Encoding::Ascii), 5);
        assert_eq!(count_chars("hello world", Encoding::Ascii), 11);
        // Non-ASCII characters are skipped, not rejected
        assert_eq!(count_chars("héllo", Encoding::Ascii), 4);
        assert_eq!(count_chars("你好", Encoding::Ascii), 0);
        assert_eq!(count_chars("", Encoding::Ascii), 0);
    }

    #[test]
    fn test_unicode_counts_code_points() {
        assert_eq!(count_chars("hello", Encoding::Unicode), 5);
        assert_eq!(count_chars("你好", Encoding::Unicode), 2);
        assert_eq!(count_chars("héllo", Encoding::Unicode), 5);
    }

    #[test]
    fn test_byte_encodings_count_utf8_bytes() {
        assert_eq!(count_chars("hello", Encoding::Zawgyi), 5);
        assert_eq!(count_chars("你好", Encoding::Zawgyi), 6);
        assert_eq!(count_chars("你好", Encoding::Other), 6);
        // Burmese script: 3 bytes per code point in UTF-8
        assert_eq!(count_chars("မ", Encoding::Zawgyi), 3);
        assert_eq!(count_chars("မ", Encoding::Unicode), 1);
    }
}
