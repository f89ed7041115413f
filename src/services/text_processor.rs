// Text Processing Service
// Tokenization, sentence segmentation and French typography normalization.

use regex::Regex;

/// Split text into words on runs of whitespace. Empty tokens never occur.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on `.`, `!` and `?`.
///
/// A run of consecutive delimiters counts as a single break; entries that
/// are empty after trimming are dropped. Matching is purely lexical, so
/// abbreviations and decimal points also end a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Normalize typography in text extracted from documents (French conventions).
///
/// Applied at ingestion only; the analysis entry point never rewrites its
/// input.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.to_string();

    // Typographic apostrophes and quotes
    s = s.replace('\u{2019}', "'")   // '
         .replace('\u{2018}', "'")   // '
         .replace('\u{201c}', "\"")  // "
         .replace('\u{201d}', "\"")  // "
         .replace('\u{00ab}', "\"")  // «
         .replace('\u{00bb}', "\""); // »

    // Ellipsis character
    s = s.replace('\u{2026}', "...");

    // Em/en dash
    s = s.replace('\u{2014}', "-").replace('\u{2013}', "-");

    // No-break and narrow no-break spaces (French spacing before !?;:»)
    let space_re = Regex::new(r"[\u{00A0}\u{202F}\u{2009}]").unwrap();
    s = space_re.replace_all(&s, " ").to_string();

    // Normalize line endings
    s = s.replace("\r\n", "\n").replace('\r', "\n");

    // Collapse horizontal whitespace
    let ws_re = Regex::new(r"[ \t\x0C\x0B]+").unwrap();
    s = ws_re.replace_all(&s, " ").to_string();

    // Strip each line, collapse runs of blank lines
    s = s.lines()
         .map(|ln| ln.trim())
         .collect::<Vec<_>>()
         .join("\n");
    let blank_re = Regex::new(r"\n{3,}").unwrap();
    s = blank_re.replace_all(&s, "\n\n").to_string();

    s.trim().to_string()
}
