// Transition Detection
// Fixed lexicon of French discourse connectors matched against the document.

/// French discourse connectors, in declaration order. Detection reports
/// matches in this order, not in text order.
pub const TRANSITION_WORDS: [&str; 20] = [
    "premièrement",
    "deuxièmement",
    "ensuite",
    "puis",
    "enfin",
    "cependant",
    "néanmoins",
    "toutefois",
    "mais",
    "or",
    "donc",
    "ainsi",
    "par conséquent",
    "en effet",
    "car",
    "de plus",
    "en outre",
    "également",
    "aussi",
    "par ailleurs",
];

/// Connectors present in the document, case-insensitively, each at most
/// once, in lexicon order.
///
/// Matching is substring-based without word boundaries: "encore" contains
/// "or" and counts as a match. Documented behavior; changing it changes
/// scores for existing inputs.
pub fn detect_transitions(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();

    TRANSITION_WORDS
        .iter()
        .filter(|entry| folded.contains(*entry))
        .map(|entry| entry.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_transitions_lexicon_order() {
        // Text order is donc then cependant; output follows lexicon order.
        let found = detect_transitions("Donc il part. Cependant il revient.");
        assert_eq!(found, vec!["cependant", "donc"]);
    }

    #[test]
    fn test_detect_transitions_at_most_once() {
        let found = detect_transitions("donc donc donc");
        assert_eq!(found, vec!["donc"]);
    }

    #[test]
    fn test_detect_transitions_case_insensitive() {
        let found = detect_transitions("ENFIN le jour se lève");
        assert_eq!(found, vec!["enfin"]);
    }

    #[test]
    fn test_detect_transitions_multi_word_entries() {
        let found = detect_transitions("Il gagne, par conséquent il reste. De plus, il chante.");
        assert_eq!(found, vec!["par conséquent", "de plus"]);
    }

    #[test]
    fn test_detect_transitions_inside_longer_words() {
        // "encore" contains "or": matching has no word-boundary check.
        let found = detect_transitions("Il chante encore");
        assert_eq!(found, vec!["or"]);
    }

    #[test]
    fn test_detect_transitions_none() {
        assert!(detect_transitions("Le chat dîne").is_empty());
        assert!(detect_transitions("").is_empty());
    }
}
