// PlumeAI Core Services

pub mod text_processor;
pub mod config_store;
pub mod document_import;
pub mod analysis;
pub mod charts;
pub mod report;

pub use text_processor::*;
pub use config_store::*;
pub use document_import::*;
pub use charts::*;
pub use report::*;

// Re-export analysis module functions
pub use analysis::{
    analyze,
    analyze_with_limit,
    derive_decision,
    evaluate_markers,
    repeated_words,
    classify_sentence,
    count_sentence_types,
    sentence_lengths,
    detect_transitions,
    analyze_vocabulary,
    diversity_ratio,
    top_words,
    word_frequencies,
    NO_TEXT_ADVISORY,
    TRANSITION_WORDS,
    DEFAULT_TOP_WORDS_LIMIT,
};
