// Scoring
// Marker rules, additive score and the derived decision band.

use crate::models::{Marker, MarkerKind, SentenceStats, Severity, VocabularyStats, WordFrequency};
use crate::services::analysis::vocabulary::{diversity_ratio, word_frequencies};
use crate::services::text_processor::tokenize_words;

// Rule thresholds. Comparisons are strict; changing any of these changes
// scores for existing inputs.
const LONG_SENTENCE_AVG_WORDS: f64 = 25.0;
const LONG_SENTENCE_DELTA: i32 = 15;
const REPEATED_WORD_MIN_COUNT: usize = 3;
const REPEATED_WORD_LIST_MAX: usize = 5;
const FEW_TRANSITIONS_DELTA: i32 = 10;
const SIMPLE_FRACTION_MAX: f64 = 0.7;
const SIMPLE_FRACTION_DELTA: i32 = 10;
const LOW_DIVERSITY_MAX: f64 = 0.4;
const LOW_DIVERSITY_DELTA: i32 = 20;

// Decision band cut-offs on the final score.
pub const REVIEW_SCORE: i32 = 20;
pub const FLAG_SCORE: i32 = 40;

/// Evaluate the five marker rules in fixed order and sum their deltas.
///
/// Rules are independent; several can fire on the same input. Structure
/// and coherence rules are skipped entirely when there are no sentences.
pub fn evaluate_markers(
    text: &str,
    vocabulary: &VocabularyStats,
    sentences: &SentenceStats,
) -> (i32, Vec<Marker>) {
    let mut score = 0;
    let mut markers = Vec::new();
    let sentence_count = sentences.sentence_count;

    if sentence_count > 0 {
        let avg_len = vocabulary.total_word_count as f64 / sentence_count as f64;
        if avg_len > LONG_SENTENCE_AVG_WORDS {
            markers.push(Marker {
                kind: MarkerKind::Structure,
                message: format!(
                    "Phrases très longues : {:.1} mots par phrase en moyenne",
                    avg_len
                ),
                severity: Severity::High,
            });
            score += LONG_SENTENCE_DELTA;
        }
    }

    let repeated = repeated_words(text);
    if !repeated.is_empty() {
        let listing = repeated
            .iter()
            .map(|w| format!("{} ({}×)", w.word, w.count))
            .collect::<Vec<_>>()
            .join(", ");
        markers.push(Marker {
            kind: MarkerKind::Vocabulary,
            message: format!("Mots répétés fréquemment : {}", listing),
            severity: Severity::Medium,
        });
        // Informational marker, no score contribution.
    }

    if sentence_count > 0 {
        // Real-valued division: a single sentence with no connector
        // still trips the rule (0 < 0.25).
        let expected = sentence_count as f64 / 4.0;
        if (sentences.transitions_found.len() as f64) < expected {
            markers.push(Marker {
                kind: MarkerKind::Coherence,
                message: "Peu de mots de transition pour relier les idées".to_string(),
                severity: Severity::Medium,
            });
            score += FEW_TRANSITIONS_DELTA;
        }

        let simple_fraction = sentences.type_counts.simple as f64 / sentence_count as f64;
        if simple_fraction > SIMPLE_FRACTION_MAX {
            markers.push(Marker {
                kind: MarkerKind::Structure,
                message: format!(
                    "Majorité de phrases simples ({} % des phrases)",
                    (simple_fraction * 100.0).round() as i32
                ),
                severity: Severity::Medium,
            });
            score += SIMPLE_FRACTION_DELTA;
        }
    }

    let diversity = diversity_ratio(vocabulary);
    if diversity < LOW_DIVERSITY_MAX {
        markers.push(Marker {
            kind: MarkerKind::Vocabulary,
            message: format!(
                "Vocabulaire peu varié : {} % de mots uniques",
                (diversity * 100.0).round() as i32
            ),
            severity: Severity::High,
        });
        score += LOW_DIVERSITY_DELTA;
    }

    (score, markers)
}

/// Case-folded words longer than 3 chars appearing strictly more than 3
/// times, most frequent first, capped at 5 entries.
pub fn repeated_words(text: &str) -> Vec<WordFrequency> {
    let tokens = tokenize_words(text);
    let mut entries = word_frequencies(&tokens);
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .filter(|(_, count)| *count > REPEATED_WORD_MIN_COUNT)
        .take(REPEATED_WORD_LIST_MAX)
        .map(|(word, count)| WordFrequency {
            word,
            count: count as i32,
        })
        .collect()
}

/// Coarse decision band for a final score.
pub fn derive_decision(score: i32) -> String {
    if score >= FLAG_SCORE {
        "flag".to_string()
    } else if score >= REVIEW_SCORE {
        "review".to_string()
    } else {
        "pass".to_string()
    }
}
