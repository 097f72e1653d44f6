//! The abbreviation table.

/// Short tokens and the full commands they stand for.
const ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("n", &["north"]),
    ("s", &["south"]),
    ("e", &["east"]),
    ("w", &["west"]),
    ("ne", &["northeast"]),
    ("nw", &["northwest"]),
    ("se", &["southeast"]),
    ("sw", &["southwest"]),
    ("i", &["inventory", "items"]),
    ("g", &["get", "go"]),
];

/// Get the full commands a token abbreviates, or `None` if it is not an abbreviation.
pub fn expand(token: &str) -> Option<&'static [&'static str]> {
    ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == token)
        .map(|(_, full)| *full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_candidate() {
        assert_eq!(expand("sw"), Some(&["southwest"][..]));
    }

    #[test]
    fn test_ambiguous_candidates() {
        assert_eq!(expand("i"), Some(&["inventory", "items"][..]));
        assert_eq!(expand("g"), Some(&["get", "go"][..]));
    }

    #[test]
    fn test_not_an_abbreviation() {
        assert_eq!(expand("north"), None);
        assert_eq!(expand("x"), None);
    }
}
