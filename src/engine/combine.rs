//! Cartesian-product expansion over position value sets

/// Total number of combinations for the given value sets.
///
/// Zero positions yields zero combinations; so does any empty value set. The
/// orchestrator decides whether either is a caller error.
pub fn total_combinations(value_sets: &[Vec<String>]) -> usize {
    if value_sets.is_empty() {
        return 0;
    }
    value_sets.iter().map(|set| set.len()).product()
}

/// Combination at `index` in product order: the first position is the
/// outermost loop, the last position varies fastest.
pub fn combination_at(value_sets: &[Vec<String>], index: usize) -> Option<Vec<String>> {
    let total = total_combinations(value_sets);
    if index >= total {
        return None;
    }

    let mut combo = vec![String::new(); value_sets.len()];
    let mut n = index;
    for (slot, set) in combo.iter_mut().zip(value_sets.iter()).rev() {
        *slot = set[n % set.len()].clone();
        n /= set.len();
    }

    Some(combo)
}

/// Materialize the full Cartesian product, one ordered tuple per combination.
pub fn cartesian_product(value_sets: &[Vec<String>]) -> Vec<Vec<String>> {
    let total = total_combinations(value_sets);
    let mut combinations = Vec::with_capacity(total);
    for index in 0..total {
        // Index is in range by construction
        if let Some(combo) = combination_at(value_sets, index) {
            combinations.push(combo);
        }
    }
    combinations
}
