use strsim::levenshtein;

/// Returns up to three names from `available` that are likely typos of
/// `key`, closest first.
pub fn compute_suggestions<S: AsRef<str>>(key: &str, available: &[S]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| *candidate != key)
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored.dedup();
    scored.into_iter().take(3).map(|(_, candidate)| candidate.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_closest_names_first() {
        let names = ["card", "cards", "cart", "dragon"];
        assert_eq!(compute_suggestions("cardz", &names), vec!["card", "cards", "cart"]);
    }

    #[test]
    fn short_keys_tolerate_a_single_edit() {
        assert_eq!(compute_suggestions("on", &["one", "two"]), vec!["one"]);
        assert!(compute_suggestions("xy", &["one"]).is_empty());
    }
}
