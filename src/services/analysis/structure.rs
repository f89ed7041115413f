// Sentence Structure Analysis
// Classification into simple/compound/complex and length distribution.

use crate::models::{SentenceKind, SentenceTypeCounts};
use crate::services::text_processor::tokenize_words;

/// Classify a sentence as simple, compound or complex.
///
/// Matching is case-sensitive and substring-based, with no word-boundary
/// check: "question" contains "que", "toujours" contains "ou". Complex is
/// checked first, so a sentence matching both criteria counts only as
/// complex. Changing these semantics changes scores for existing inputs.
pub fn classify_sentence(sentence: &str) -> SentenceKind {
    let has_comma = sentence.contains(',');

    if has_comma && (sentence.contains("qui") || sentence.contains("que")) {
        SentenceKind::Complex
    } else if has_comma || sentence.contains("et") || sentence.contains("ou") {
        SentenceKind::Compound
    } else {
        SentenceKind::Simple
    }
}

/// Per-sentence word counts, using the document tokenizer.
pub fn sentence_lengths(sentences: &[String]) -> Vec<i32> {
    sentences
        .iter()
        .map(|s| tokenize_words(s).len() as i32)
        .collect()
}

/// Mutually exclusive classification counts over all sentences.
pub fn count_sentence_types(sentences: &[String]) -> SentenceTypeCounts {
    let mut counts = SentenceTypeCounts::default();

    for sentence in sentences {
        match classify_sentence(sentence) {
            SentenceKind::Simple => counts.simple += 1,
            SentenceKind::Compound => counts.compound += 1,
            SentenceKind::Complex => counts.complex += 1,
        }
    }

    counts
}
