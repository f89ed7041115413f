// PlumeAI Command Layer
// Async entry points shared by the CLI binary and embedding callers

use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use crate::models::{AnalysisResult, AnalyzeResponse};
use crate::services::{analyze_with_limit, extract_text, normalize_text, AppConfig, ConfigStore};

// ============ Helpers ============

fn config_store() -> Result<ConfigStore, String> {
    let dir = ConfigStore::default_config_dir()
        .ok_or_else(|| "Could not determine config directory".to_string())?;
    Ok(ConfigStore::new(dir))
}

fn effective_top_words(config: &AppConfig, override_limit: Option<i32>) -> usize {
    override_limit
        .unwrap_or(config.analysis.top_words_limit)
        .max(0) as usize
}

fn respond(result: AnalysisResult, started: Instant) -> AnalyzeResponse {
    AnalyzeResponse {
        result,
        version: env!("CARGO_PKG_VERSION").to_string(),
        request_id: Uuid::new_v4().to_string(),
        elapsed_ms: started.elapsed().as_millis() as i32,
    }
}

// ============ Commands ============

/// Analyze raw text and return the scored result
pub async fn analyze_text(
    text: String,
    top_words: Option<i32>,
) -> Result<AnalyzeResponse, String> {
    let started = Instant::now();
    info!("analyze_text command: {} chars", text.len());

    let config = config_store()?.load()?;
    let normalized = normalize_text(&text);
    let result = analyze_with_limit(&normalized, effective_top_words(&config, top_words));

    info!(
        "analyze_text complete: score={} decision={}",
        result.score, result.decision
    );
    Ok(respond(result, started))
}

/// Extract text from an uploaded document, then analyze it
pub async fn analyze_file(
    file_name: String,
    bytes: Vec<u8>,
    top_words: Option<i32>,
) -> Result<AnalyzeResponse, String> {
    let started = Instant::now();
    info!("analyze_file command: {} ({} bytes)", file_name, bytes.len());

    let config = config_store()?.load()?;
    let text = extract_text(&file_name, &bytes).map_err(|e| e.to_string())?;
    let normalized = normalize_text(&text);
    let result = analyze_with_limit(&normalized, effective_top_words(&config, top_words));

    info!(
        "analyze_file complete: score={} decision={}",
        result.score, result.decision
    );
    Ok(respond(result, started))
}

/// Get current configuration
pub async fn get_config() -> Result<AppConfig, String> {
    config_store()?.load()
}

/// Save configuration
pub async fn save_config(config: AppConfig) -> Result<(), String> {
    info!("save_config command");
    config_store()?.save(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_text_returns_response() {
        let response = analyze_text("Le chat dort. Le chien aboie.".to_string(), None)
            .await
            .unwrap();
        assert!(!response.request_id.is_empty());
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert!(response.elapsed_ms >= 0);
        assert_eq!(response.result.vocabulary_stats.total_word_count, 6);
    }

    #[tokio::test]
    async fn test_analyze_text_empty_advisory() {
        let response = analyze_text("   ".to_string(), None).await.unwrap();
        assert_eq!(response.result.score, 0);
        assert!(response.result.advisory.is_some());
    }

    #[tokio::test]
    async fn test_analyze_file_txt() {
        let bytes = "Bonjour tout le monde.".as_bytes().to_vec();
        let response = analyze_file("note.txt".to_string(), bytes, None)
            .await
            .unwrap();
        assert_eq!(response.result.sentence_stats.sentence_count, 1);
    }

    #[tokio::test]
    async fn test_analyze_file_unknown_extension() {
        let result = analyze_file("image.png".to_string(), vec![1, 2, 3], None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_top_words_override() {
        let text = "deux trois quatre cinq sept huit neuf onze douze".to_string();
        let response = analyze_text(text, Some(2)).await.unwrap();
        assert_eq!(response.result.vocabulary_stats.top_words.len(), 2);
    }

    #[tokio::test]
    async fn test_request_ids_are_unique() {
        let a = analyze_text("Un texte.".to_string(), None).await.unwrap();
        let b = analyze_text("Un texte.".to_string(), None).await.unwrap();
        assert_ne!(a.request_id, b.request_id);
    }
}
