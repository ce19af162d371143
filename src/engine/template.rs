//! Bracketed-template parsing

use regex::Regex;

use crate::error::{Result, SmsForgeError};

/// Result of parsing a bracketed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// Inner text of each `(...)` group, left to right
    pub specifiers: Vec<String>,
    /// The matched `(...)` substrings, parentheses included
    pub raw_tokens: Vec<String>,
}

/// Extract the ordered position specifiers and raw bracket tokens from a template.
///
/// Specifier semantics (ranges, literals, phrase-group names) are not
/// interpreted here; that is the resolver's job.
pub fn parse_template(template: &str) -> Result<ParsedTemplate> {
    let re = Regex::new(r"\(([^)]+)\)").map_err(|e| SmsForgeError::internal(e.to_string()))?;

    let mut specifiers = Vec::new();
    let mut raw_tokens = Vec::new();
    for caps in re.captures_iter(template) {
        specifiers.push(caps[1].to_string());
        raw_tokens.push(caps[0].to_string());
    }

    if specifiers.is_empty() {
        return Err(SmsForgeError::malformed_template(
            "no bracketed positions found",
        ));
    }

    Ok(ParsedTemplate {
        specifiers,
        raw_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordered_groups() {
        let parsed = parse_template("Hi (name), your code is (100-999)!").unwrap();
        assert_eq!(parsed.specifiers, vec!["name", "100-999"]);
        assert_eq!(parsed.raw_tokens, vec!["(name)", "(100-999)"]);
    }

    #[test]
    fn test_parse_adjacent_groups() {
        let parsed = parse_template("(a)(b)(c)").unwrap();
        assert_eq!(parsed.specifiers, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_groups_is_malformed() {
        let err = parse_template("plain text with no brackets").unwrap_err();
        assert!(matches!(err, SmsForgeError::MalformedTemplate { .. }));

        // Empty parentheses do not count as a group
        let err = parse_template("nothing here: ()").unwrap_err();
        assert!(matches!(err, SmsForgeError::MalformedTemplate { .. }));
    }
}
