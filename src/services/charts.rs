// Chart Series
// Derived numeric series for the visualization layer. The pipeline holds
// no rendering objects; callers own the chart lifecycle and re-rendering.

use crate::models::{AnalysisResult, ChartSeries};

/// Default truncation for the "most common words" display.
pub const CHART_TOP_WORDS_LIMIT: usize = 10;

/// Unique vs repeated word counts, the chart view of the diversity ratio.
pub fn diversity_series(result: &AnalysisResult) -> ChartSeries {
    let stats = &result.vocabulary_stats;
    let unique = stats.unique_word_count;
    let repeated = stats.total_word_count - stats.unique_word_count;

    ChartSeries {
        title: "Diversité du vocabulaire".to_string(),
        labels: vec!["Mots uniques".to_string(), "Répétitions".to_string()],
        values: vec![unique as f64, repeated as f64],
    }
}

/// Percentage breakdown of sentence types, rounded to whole percents.
pub fn sentence_type_series(result: &AnalysisResult) -> ChartSeries {
    let stats = &result.sentence_stats;
    let total = stats.sentence_count;
    let pct = |n: i32| {
        if total == 0 {
            0.0
        } else {
            (n as f64 / total as f64 * 100.0).round()
        }
    };

    ChartSeries {
        title: "Types de phrases".to_string(),
        labels: vec![
            "Simples".to_string(),
            "Composées".to_string(),
            "Complexes".to_string(),
        ],
        values: vec![
            pct(stats.type_counts.simple),
            pct(stats.type_counts.compound),
            pct(stats.type_counts.complex),
        ],
    }
}

/// Most frequent eligible words with counts, truncated to
/// [`CHART_TOP_WORDS_LIMIT`].
pub fn top_words_series(result: &AnalysisResult) -> ChartSeries {
    top_words_series_with_limit(result, CHART_TOP_WORDS_LIMIT)
}

pub fn top_words_series_with_limit(result: &AnalysisResult, limit: usize) -> ChartSeries {
    let top = result.vocabulary_stats.top_words.iter().take(limit);
    let (labels, values): (Vec<String>, Vec<f64>) = top
        .map(|w| (w.word.clone(), w.count as f64))
        .unzip();

    ChartSeries {
        title: "Mots les plus fréquents".to_string(),
        labels,
        values,
    }
}
