//! Position-value resolution
//!
//! Turns a raw position specifier into the ordered candidate list for that
//! position. Precedence: bound phrase group, then numeric range expansion,
//! then externally configured candidates, then the specifier text itself.

use crate::error::{Result, SmsForgeError};

/// External phrase-group lookup contract.
///
/// Implementations resolve `name_or_id` to the group's stored phrase order,
/// trying a numeric-id lookup first when the reference looks numeric.
pub trait PhraseLookup {
    fn group_phrases(&self, name_or_id: &str) -> Result<Vec<String>>;
}

/// Expand a `"start-end"` specifier into the inclusive decimal sequence.
///
/// Returns `Ok(None)` when the specifier is not a range at all (wrong number
/// of `-`-separated parts, or a part that is not an integer) — that is a
/// valid fall-through outcome, not an error. An inverted range is an error.
pub fn expand_range(position: &str, specifier: &str) -> Result<Option<Vec<String>>> {
    let parts: Vec<&str> = specifier.split('-').collect();
    if parts.len() != 2 {
        return Ok(None);
    }

    let start: i64 = match parts[0].trim().parse() {
        Ok(n) => n,
        Err(_) => return Ok(None),
    };
    let end: i64 = match parts[1].trim().parse() {
        Ok(n) => n,
        Err(_) => return Ok(None),
    };

    if start > end {
        return Err(SmsForgeError::invalid_range(position, start, end));
    }

    Ok(Some((start..=end).map(|n| n.to_string()).collect()))
}

/// Resolve one position to its ordered, non-empty candidate list.
///
/// A phrase-group lookup miss is absorbed by falling through to the remaining
/// sources; it only surfaces as `EmptyPosition` when no fallback exists.
pub fn resolve_position(
    position: &str,
    specifier: &str,
    configured: &[String],
    phrase_ref: Option<&str>,
    lookup: Option<&dyn PhraseLookup>,
) -> Result<Vec<String>> {
    if let (Some(reference), Some(lookup)) = (phrase_ref, lookup) {
        match lookup.group_phrases(reference) {
            Ok(phrases) if !phrases.is_empty() => return Ok(phrases),
            Ok(_) => {
                tracing::debug!(position, reference, "Phrase group is empty, falling through");
            }
            Err(e) => {
                tracing::debug!(position, reference, error = %e, "Phrase group lookup missed, falling through");
            }
        }
    }

    if let Some(expanded) = expand_range(position, specifier)? {
        return Ok(expanded);
    }

    if !configured.is_empty() {
        return Ok(configured.to_vec());
    }

    if specifier.is_empty() {
        return Err(SmsForgeError::empty_position(position));
    }

    // The specifier doubles as a literal candidate
    Ok(vec![specifier.to_string()])
}
