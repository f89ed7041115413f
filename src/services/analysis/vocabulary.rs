// Vocabulary Analysis
// Uniqueness ratio, average word length and top-frequency word table.

use std::collections::{HashMap, HashSet};

use crate::models::{VocabularyStats, WordFrequency};
use crate::services::text_processor::tokenize_words;

/// Words must be strictly longer than this (in chars) to enter the
/// frequency table. Articles, pronouns and most prepositions fall out.
pub const TOP_WORD_MIN_LEN: usize = 3;

/// Default truncation for the topWords list.
pub const DEFAULT_TOP_WORDS_LIMIT: usize = 20;

/// Frequency table over case-folded tokens longer than
/// [`TOP_WORD_MIN_LEN`] chars, in first-occurrence order.
pub fn word_frequencies(tokens: &[&str]) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        let folded = token.to_lowercase();
        if folded.chars().count() <= TOP_WORD_MIN_LEN {
            continue;
        }
        match index.get(&folded) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(folded.clone(), entries.len());
                entries.push((folded, 1));
            }
        }
    }

    entries
}

/// Most frequent eligible words, descending by count. The sort is stable,
/// so ties keep the order in which words first appeared in the text.
pub fn top_words(tokens: &[&str], limit: usize) -> Vec<WordFrequency> {
    let mut entries = word_frequencies(tokens);
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(limit);

    entries
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word,
            count: count as i32,
        })
        .collect()
}

/// Full vocabulary statistics for a document.
pub fn analyze_vocabulary(text: &str, top_words_limit: usize) -> VocabularyStats {
    let tokens = tokenize_words(text);
    let total = tokens.len();

    let unique: HashSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    // Original tokens, not folded ones; length in Unicode scalar values.
    let average_word_length = if total == 0 {
        0.0
    } else {
        tokens.iter().map(|t| t.chars().count()).sum::<usize>() as f64 / total as f64
    };

    VocabularyStats {
        unique_word_count: unique.len() as i32,
        total_word_count: total as i32,
        average_word_length,
        top_words: top_words(&tokens, top_words_limit),
    }
}

/// Unique / total word ratio, 0 for an empty document.
pub fn diversity_ratio(stats: &VocabularyStats) -> f64 {
    if stats.total_word_count == 0 {
        return 0.0;
    }
    stats.unique_word_count as f64 / stats.total_word_count as f64
}
