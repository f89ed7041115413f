// Analysis Module
// Heuristic pipeline estimating how AI-generated a French text looks:
// - vocabulary: uniqueness ratio, word lengths, top-frequency words
// - structure: sentence classification and length distribution
// - transitions: fixed French connector lexicon matching
// - scoring: marker rules, additive score, decision band

pub mod scoring;
pub mod structure;
pub mod transitions;
pub mod vocabulary;

pub use scoring::{derive_decision, evaluate_markers, repeated_words};
pub use structure::{classify_sentence, count_sentence_types, sentence_lengths};
pub use transitions::{detect_transitions, TRANSITION_WORDS};
pub use vocabulary::{analyze_vocabulary, diversity_ratio, top_words, word_frequencies, DEFAULT_TOP_WORDS_LIMIT};

use tracing::debug;

use crate::models::{AnalysisResult, SentenceStats, VocabularyStats};
use crate::services::text_processor::split_sentences;

/// Advisory attached to the result when there is nothing to analyze.
pub const NO_TEXT_ADVISORY: &str = "Aucun texte à analyser.";

/// Run the full pipeline over a document.
///
/// Pure and deterministic: no I/O, no shared state, a fresh result on
/// every call. Empty or whitespace-only input short-circuits to a
/// zero-valued result carrying [`NO_TEXT_ADVISORY`].
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with_limit(text, DEFAULT_TOP_WORDS_LIMIT)
}

/// Same as [`analyze`] with an explicit topWords truncation limit.
pub fn analyze_with_limit(text: &str, top_words_limit: usize) -> AnalysisResult {
    if text.trim().is_empty() {
        return empty_result();
    }

    let vocabulary_stats = analyze_vocabulary(text, top_words_limit);

    let sentences = split_sentences(text);
    let sentence_stats = SentenceStats {
        sentence_count: sentences.len() as i32,
        lengths: sentence_lengths(&sentences),
        type_counts: count_sentence_types(&sentences),
        transitions_found: detect_transitions(text),
    };

    let (score, markers) = evaluate_markers(text, &vocabulary_stats, &sentence_stats);
    let decision = derive_decision(score);

    debug!(
        score,
        decision = %decision,
        words = vocabulary_stats.total_word_count,
        sentences = sentence_stats.sentence_count,
        markers = markers.len(),
        "analysis complete"
    );

    AnalysisResult {
        score,
        decision,
        markers,
        vocabulary_stats,
        sentence_stats,
        advisory: None,
    }
}

fn empty_result() -> AnalysisResult {
    AnalysisResult {
        score: 0,
        decision: derive_decision(0),
        markers: Vec::new(),
        vocabulary_stats: VocabularyStats::default(),
        sentence_stats: SentenceStats::default(),
        advisory: Some(NO_TEXT_ADVISORY.to_string()),
    }
}
