// Report Formatting
// Renders an AnalysisResult as terminal text or a standalone HTML page.
// Rendering only; every statistic is reproduced from the result as-is.

use crate::models::{AnalysisResult, ChartSeries, MarkerKind, Severity};
use crate::services::charts::{diversity_series, sentence_type_series, top_words_series};

/// Mean words per sentence as evaluated by the scorer, 0 without sentences.
pub fn average_sentence_length(result: &AnalysisResult) -> f64 {
    let count = result.sentence_stats.sentence_count;
    if count == 0 {
        return 0.0;
    }
    result.vocabulary_stats.total_word_count as f64 / count as f64
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "faible",
        Severity::Medium => "moyenne",
        Severity::High => "élevée",
    }
}

fn kind_label(kind: MarkerKind) -> &'static str {
    match kind {
        MarkerKind::Structure => "structure",
        MarkerKind::Vocabulary => "vocabulaire",
        MarkerKind::Coherence => "cohérence",
    }
}

fn decision_label(decision: &str) -> &'static str {
    match decision {
        "flag" => "forte ressemblance avec un texte généré",
        "review" => "indices notables, relecture conseillée",
        _ => "aucun signal fort",
    }
}

/// Plain-text report for terminal output.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let vocab = &result.vocabulary_stats;
    let sentences = &result.sentence_stats;
    let types = sentence_type_series(result);

    out.push_str("=== Analyse PlumeAI ===\n");
    out.push_str(&format!(
        "Score : {} ({})\n",
        result.score, result.decision
    ));
    out.push_str(&format!("Verdict : {}\n", decision_label(&result.decision)));
    if let Some(advisory) = &result.advisory {
        out.push_str(&format!("Avis : {}\n", advisory));
    }
    out.push('\n');

    out.push_str("Statistiques\n");
    out.push_str(&format!("  Mots                 : {}\n", vocab.total_word_count));
    out.push_str(&format!("  Mots uniques         : {}\n", vocab.unique_word_count));
    out.push_str(&format!(
        "  Longueur des mots    : {:.1} caractères en moyenne\n",
        vocab.average_word_length
    ));
    out.push_str(&format!("  Phrases              : {}\n", sentences.sentence_count));
    out.push_str(&format!(
        "  Longueur des phrases : {:.1} mots en moyenne\n",
        average_sentence_length(result)
    ));
    out.push_str(&format!(
        "  Types de phrases     : simples {} %, composées {} %, complexes {} %\n",
        types.values[0], types.values[1], types.values[2]
    ));
    if sentences.transitions_found.is_empty() {
        out.push_str("  Transitions          : aucune\n");
    } else {
        out.push_str(&format!(
            "  Transitions          : {} ({})\n",
            sentences.transitions_found.len(),
            sentences.transitions_found.join(", ")
        ));
    }

    if !vocab.top_words.is_empty() {
        out.push('\n');
        out.push_str("Mots fréquents\n");
        for entry in &vocab.top_words {
            out.push_str(&format!("  {:>4}×  {}\n", entry.count, entry.word));
        }
    }

    out.push('\n');
    if result.markers.is_empty() {
        out.push_str("Marqueurs : aucun\n");
    } else {
        out.push_str(&format!("Marqueurs ({})\n", result.markers.len()));
        for marker in &result.markers {
            out.push_str(&format!(
                "  [{}] {} — {}\n",
                severity_label(marker.severity),
                kind_label(marker.kind),
                marker.message
            ));
        }
    }

    out
}

/// Pretty-printed JSON report.
pub fn render_json(result: &AnalysisResult) -> Result<String, String> {
    serde_json::to_string_pretty(result).map_err(|e| format!("Failed to serialize report: {}", e))
}

/// Self-contained HTML report, inline CSS, no external assets.
pub fn render_html(result: &AnalysisResult) -> String {
    let vocab = &result.vocabulary_stats;
    let sentences = &result.sentence_stats;
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut body = String::new();

    body.push_str(&format!(
        r#"<header class="score {decision}"><h1>Analyse PlumeAI</h1><p class="value">{score}</p><p class="label">{label}</p></header>"#,
        decision = escape_html(&result.decision),
        score = result.score,
        label = escape_html(decision_label(&result.decision)),
    ));

    if let Some(advisory) = &result.advisory {
        body.push_str(&format!(
            r#"<p class="advisory">{}</p>"#,
            escape_html(advisory)
        ));
    }

    body.push_str("<section><h2>Statistiques</h2><table>");
    let rows = [
        ("Mots", vocab.total_word_count.to_string()),
        ("Mots uniques", vocab.unique_word_count.to_string()),
        (
            "Longueur des mots",
            format!("{:.1} caractères en moyenne", vocab.average_word_length),
        ),
        ("Phrases", sentences.sentence_count.to_string()),
        (
            "Longueur des phrases",
            format!("{:.1} mots en moyenne", average_sentence_length(result)),
        ),
        (
            "Transitions",
            if sentences.transitions_found.is_empty() {
                "aucune".to_string()
            } else {
                format!(
                    "{} ({})",
                    sentences.transitions_found.len(),
                    sentences.transitions_found.join(", ")
                )
            },
        ),
    ];
    for (label, value) in rows {
        body.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>",
            escape_html(label),
            escape_html(&value)
        ));
    }
    body.push_str("</table></section>");

    body.push_str("<section><h2>Marqueurs</h2>");
    if result.markers.is_empty() {
        body.push_str("<p>Aucun marqueur.</p>");
    } else {
        body.push_str("<ul class=\"markers\">");
        for marker in &result.markers {
            body.push_str(&format!(
                r#"<li class="sev-{sev}"><span class="badge">{sev_label}</span> <strong>{kind}</strong> {message}</li>"#,
                sev = severity_css(marker.severity),
                sev_label = severity_label(marker.severity),
                kind = escape_html(kind_label(marker.kind)),
                message = escape_html(&marker.message),
            ));
        }
        body.push_str("</ul>");
    }
    body.push_str("</section>");

    body.push_str(&chart_section(&diversity_series(result), Scale::Share));
    body.push_str(&chart_section(&sentence_type_series(result), Scale::Percent));
    body.push_str(&chart_section(&top_words_series(result), Scale::Max));

    body.push_str(&format!(
        r#"<footer>Généré le {} — plumeAI {}</footer>"#,
        generated,
        env!("CARGO_PKG_VERSION")
    ));

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<title>Analyse PlumeAI</title>
<style>
body {{ font-family: sans-serif; max-width: 720px; margin: 2rem auto; color: #222; }}
header.score {{ text-align: center; padding: 1rem; border-radius: 8px; }}
header.score .value {{ font-size: 3rem; margin: 0; font-weight: bold; }}
header.pass {{ background: #e8f5e9; }}
header.review {{ background: #fff8e1; }}
header.flag {{ background: #ffebee; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ text-align: left; padding: 0.3rem 0.6rem; border-bottom: 1px solid #ddd; }}
ul.markers {{ list-style: none; padding: 0; }}
ul.markers li {{ padding: 0.4rem 0.6rem; margin: 0.3rem 0; border-left: 4px solid #999; background: #fafafa; }}
li.sev-high {{ border-left-color: #c62828; }}
li.sev-medium {{ border-left-color: #f9a825; }}
li.sev-low {{ border-left-color: #2e7d32; }}
.badge {{ font-size: 0.8rem; text-transform: uppercase; color: #666; }}
.bar-row {{ display: flex; align-items: center; margin: 0.2rem 0; }}
.bar-row .name {{ width: 10rem; }}
.bar-row .bar {{ background: #5c6bc0; height: 0.9rem; margin-right: 0.5rem; }}
footer {{ margin-top: 2rem; font-size: 0.8rem; color: #888; }}
</style>
</head>
<body>
{}
</body>
</html>
"#,
        body
    )
}

enum Scale {
    /// Bars scaled to the sum of all values.
    Share,
    /// Values already express percentages.
    Percent,
    /// Bars scaled to the largest value.
    Max,
}

fn severity_css(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "low",
        Severity::Medium => "medium",
        Severity::High => "high",
    }
}

fn chart_section(series: &ChartSeries, scale: Scale) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<section><h2>{}</h2>",
        escape_html(&series.title)
    ));

    if series.values.is_empty() {
        out.push_str("<p>Aucune donnée.</p></section>");
        return out;
    }

    let reference = match scale {
        Scale::Share => series.values.iter().sum::<f64>(),
        Scale::Percent => 100.0,
        Scale::Max => series.values.iter().cloned().fold(0.0, f64::max),
    };

    for (label, value) in series.labels.iter().zip(&series.values) {
        let width = if reference > 0.0 {
            (value / reference * 100.0).round()
        } else {
            0.0
        };
        out.push_str(&format!(
            r#"<div class="bar-row"><span class="name">{}</span><span class="bar" style="width:{}%"></span><span>{}</span></div>"#,
            escape_html(label),
            width,
            value
        ));
    }

    out.push_str("</section>");
    out
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
