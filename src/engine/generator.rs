//! Generation orchestrator
//!
//! Drives one generation run: validate the request, resolve every position's
//! candidate values, expand the Cartesian product, then assemble and score
//! each combination sequentially or in randomized order.

use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::engine::assemble::assemble;
use crate::engine::combine::cartesian_product;
use crate::engine::resolver::{resolve_position, PhraseLookup};
use crate::engine::template::parse_template;
use crate::error::{Result, SmsForgeError};
use crate::types::{
    position_label, Encoding, GenerateMode, GenerateRequest, GenerateResponse, GeneratedResult,
};

/// Top-level message generator.
///
/// Each call to [`generate`](Self::generate) is an independent, side-effect-free
/// computation; the only external read is the optional phrase-group lookup.
#[derive(Default)]
pub struct MessageGenerator {
    phrase_lookup: Option<Arc<dyn PhraseLookup + Send + Sync>>,
}

impl MessageGenerator {
    /// Create a generator with no phrase-group source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator backed by a phrase-group lookup
    pub fn with_phrase_lookup(lookup: Arc<dyn PhraseLookup + Send + Sync>) -> Self {
        Self {
            phrase_lookup: Some(lookup),
        }
    }

    /// Run one generation request to completion.
    ///
    /// All validation happens before any combination is produced; there is no
    /// partial-success response shape.
    pub fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse> {
        let (labels, specifiers) = select_positions(req)?;
        let encodings = resolve_encodings(req, &labels)?;

        tracing::debug!(positions = labels.len(), mode = %req.generate_mode, "Resolving position values");
        let mut value_sets = Vec::with_capacity(labels.len());
        for (label, specifier) in labels.iter().zip(specifiers.iter()) {
            let configured = req
                .positions
                .get(label)
                .map(|values| values.as_slice())
                .unwrap_or(&[]);
            let phrase_ref = req.phrase_groups.get(label).map(|s| s.as_str());
            let values = resolve_position(
                label,
                specifier,
                configured,
                phrase_ref,
                self.phrase_lookup.as_deref().map(|l| l as &dyn PhraseLookup),
            )?;
            value_sets.push(values);
        }

        let combinations = cartesian_product(&value_sets);
        tracing::debug!(combinations = combinations.len(), "Expanded Cartesian product");

        let results = match req.generate_mode {
            GenerateMode::Sequential => score_sequential(&labels, combinations, &encodings),
            GenerateMode::Random => score_random(&labels, combinations, &encodings),
        };

        let exceeded_count = results.iter().filter(|r| r.is_exceeded).count();
        tracing::info!(
            total = results.len(),
            exceeded = exceeded_count,
            "Generation run complete"
        );

        Ok(GenerateResponse {
            total_count: results.len(),
            exceeded_count,
            results,
        })
    }
}

/// Determine the ordered position labels and their raw specifiers.
///
/// An explicit position list wins; the template is consulted only when no
/// explicit list is given. For explicit positions the label itself doubles as
/// the specifier, so candidates come from phrase groups or configured values.
fn select_positions(req: &GenerateRequest) -> Result<(Vec<String>, Vec<String>)> {
    if !req.selected_positions.is_empty() {
        let labels = req.selected_positions.clone();
        let specifiers = labels.clone();
        return Ok((labels, specifiers));
    }

    let template = match req.template.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(SmsForgeError::NoPositionsSelected),
    };

    let parsed = parse_template(template)?;
    let labels = (0..parsed.specifiers.len()).map(position_label).collect();
    Ok((labels, parsed.specifiers))
}

/// Build the effective position -> encoding map.
///
/// Per-position entries win, the global encoding fills holes, and a hole with
/// no global falls back to `Unicode`. A request carrying no encoding
/// information at all is rejected.
fn resolve_encodings(
    req: &GenerateRequest,
    labels: &[String],
) -> Result<HashMap<String, Encoding>> {
    if req.encoding.is_none() && req.encodings.is_empty() {
        return Err(SmsForgeError::missing_encoding(
            "request supplies neither a global encoding nor a per-position map",
        ));
    }

    let fallback = req.encoding.unwrap_or_default();
    Ok(labels
        .iter()
        .map(|label| {
            let encoding = req.encodings.get(label).copied().unwrap_or(fallback);
            (label.clone(), encoding)
        })
        .collect())
}

fn score_sequential(
    labels: &[String],
    combinations: Vec<Vec<String>>,
    encodings: &HashMap<String, Encoding>,
) -> Vec<GeneratedResult> {
    combinations
        .into_iter()
        .map(|combo| {
            let pairs: Vec<(String, String)> =
                labels.iter().cloned().zip(combo.into_iter()).collect();
            assemble(&pairs, encodings)
        })
        .collect()
}

/// Random mode: shuffle which combination appears at which rank, then shuffle
/// each combination's own (label, value) pairs as a unit so the encoding
/// attribution follows whichever value lands in which slot.
fn score_random(
    labels: &[String],
    mut combinations: Vec<Vec<String>>,
    encodings: &HashMap<String, Encoding>,
) -> Vec<GeneratedResult> {
    let mut rng = rand::thread_rng();
    combinations.shuffle(&mut rng);

    combinations
        .into_iter()
        .map(|combo| {
            let mut pairs: Vec<(String, String)> =
                labels.iter().cloned().zip(combo.into_iter()).collect();
            pairs.shuffle(&mut rng);
            assemble(&pairs, encodings)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_request(template: &str) -> GenerateRequest {
        GenerateRequest {
            template: Some(template.to_string()),
            encoding: Some(Encoding::Ascii),
            ..Default::default()
        }
    }

    #[test]
    fn test_sequential_end_to_end_ordering() {
        let mut req = ascii_request("(a)(b)");
        req.positions
            .insert("a".to_string(), vec!["1".to_string(), "2".to_string()]);
        req.positions
            .insert("b".to_string(), vec!["x".to_string(), "y".to_string()]);

        let response = MessageGenerator::new().generate(&req).unwrap();
        let contents: Vec<&str> = response.results.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["1 x", "1 y", "2 x", "2 y"]);
        assert_eq!(response.total_count, 4);
        assert_eq!(response.exceeded_count, 0);
        for result in &response.results {
            assert_eq!(result.char_count, 3);
        }
    }

    #[test]
    fn test_sequential_is_deterministic() {
        let req = ascii_request("(1-3) (x) (p-q)");
        let generator = MessageGenerator::new();
        let first = generator.generate(&req).unwrap();
        let second = generator.generate(&req).unwrap();
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn test_template_range_expansion() {
        let req = ascii_request("code (3-10)");
        let response = MessageGenerator::new().generate(&req).unwrap();
        let contents: Vec<&str> = response.results.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_inverted_range_aborts_run() {
        let err = MessageGenerator::new()
            .generate(&ascii_request("(10-3)"))
            .unwrap_err();
        assert!(matches!(err, SmsForgeError::InvalidRange { .. }));
    }

    #[test]
    fn test_missing_template_and_positions() {
        let req = GenerateRequest {
            encoding: Some(Encoding::Unicode),
            ..Default::default()
        };
        let err = MessageGenerator::new().generate(&req).unwrap_err();
        assert!(matches!(err, SmsForgeError::NoPositionsSelected));
    }

    #[test]
    fn test_missing_encoding_rejected_before_resolution() {
        // The bad range must not be reached; encoding validation comes first
        let req = GenerateRequest {
            template: Some("(10-3)".to_string()),
            ..Default::default()
        };
        let err = MessageGenerator::new().generate(&req).unwrap_err();
        assert!(matches!(err, SmsForgeError::MissingEncoding { .. }));
    }

    #[test]
    fn test_per_position_map_wins_over_global() {
        let mut req = ascii_request("(你好) (你好)");
        req.encodings.insert("b".to_string(), Encoding::Unicode);

        let response = MessageGenerator::new().generate(&req).unwrap();
        // position a: 0 under ASCII; position b: 2 code points; 1 separator
        assert_eq!(response.results[0].char_count, 3);
    }

    #[test]
    fn test_explicit_positions_override_template() {
        let mut req = ascii_request("(ignored) (template)");
        req.selected_positions = vec!["a".to_string(), "b".to_string()];
        req.positions
            .insert("a".to_string(), vec!["hi".to_string()]);
        req.positions
            .insert("b".to_string(), vec!["there".to_string()]);

        let response = MessageGenerator::new().generate(&req).unwrap();
        assert_eq!(response.results[0].content, "hi there");
    }

    #[test]
    fn test_random_mode_same_multiset() {
        use std::collections::BTreeMap;

        let mut req = ascii_request("(1-3) (x-z)");
        req.positions.insert(
            "b".to_string(),
            vec!["x".to_string(), "y".to_string(), "z".to_string()],
        );
        let generator = MessageGenerator::new();
        let sequential = generator.generate(&req).unwrap();

        req.generate_mode = GenerateMode::Random;
        let random = generator.generate(&req).unwrap();
        assert_eq!(random.total_count, sequential.total_count);

        let multiset = |results: &[GeneratedResult]| {
            let mut counts: BTreeMap<Vec<String>, usize> = BTreeMap::new();
            for r in results {
                let mut words: Vec<String> =
                    r.content.split(' ').map(|s| s.to_string()).collect();
                words.sort();
                *counts.entry(words).or_default() += 1;
            }
            counts
        };
        // Within-combination shuffling may reorder words, so compare the
        // sorted word multiset of each message
        assert_eq!(multiset(&sequential.results), multiset(&random.results));
    }

    #[test]
    fn test_random_mode_produces_distinct_orderings() {
        let mut req = ascii_request("(1-9) (a-f)");
        req.positions.insert(
            "b".to_string(),
            ["a", "b", "c", "d", "e", "f"].iter().map(|s| s.to_string()).collect(),
        );
        req.generate_mode = GenerateMode::Random;

        let generator = MessageGenerator::new();
        let reference: Vec<String> = generator
            .generate(&req)
            .unwrap()
            .results
            .into_iter()
            .map(|r| r.content)
            .collect();

        // 54 combinations; 20 runs all matching the first ordering is
        // vanishingly unlikely
        let distinct = (0..20).any(|_| {
            let run: Vec<String> = generator
                .generate(&req)
                .unwrap()
                .results
                .into_iter()
                .map(|r| r.content)
                .collect();
            run != reference
        });
        assert!(distinct);
    }
}
