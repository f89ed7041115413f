// PlumeAI Data Models
// Shared structures produced by the analysis pipeline and consumed by
// the report/chart collaborators and the command layer.

use serde::{Deserialize, Serialize};

// ============ Markers ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Structure,
    Vocabulary,
    Coherence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub kind: MarkerKind,
    pub message: String,
    pub severity: Severity,
}

// ============ Sentence Classification ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceKind {
    Simple,
    Compound,
    Complex,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceTypeCounts {
    pub simple: i32,
    pub compound: i32,
    pub complex: i32,
}

// ============ Analysis Stats ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFrequency {
    pub word: String,
    pub count: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub unique_word_count: i32,
    pub total_word_count: i32,
    /// Mean length of all tokens in Unicode scalar values, 0 when empty.
    pub average_word_length: f64,
    /// Most frequent case-folded words longer than 3 characters,
    /// descending by count, insertion order on ties.
    pub top_words: Vec<WordFrequency>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceStats {
    pub sentence_count: i32,
    pub lengths: Vec<i32>,
    pub type_counts: SentenceTypeCounts,
    /// Connectors matched in the document, at most once each, in lexicon order.
    pub transitions_found: Vec<String>,
}

// ============ Analysis Result ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: i32,
    pub decision: String,
    pub markers: Vec<Marker>,
    pub vocabulary_stats: VocabularyStats,
    pub sentence_stats: SentenceStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

// ============ Chart Series ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

// ============ Command Responses ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
    pub version: String,
    pub request_id: String,
    pub elapsed_ms: i32,
}
