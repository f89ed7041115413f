// Document Import
// Extracts plain text from uploaded files: txt/md, docx (strict parse
// with a raw-XML fallback) and pdf.

use std::io::{Cursor, Read};
use std::path::Path;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read docx: {0}")]
    Docx(String),
    #[error("failed to read pdf: {0}")]
    Pdf(String),
}

/// Extract plain text from a document, dispatching on the file extension.
///
/// Empty extraction output is not an error here; the analysis guards
/// handle it downstream.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ImportError> {
    let extension = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    debug!(file = file_name, size = bytes.len(), "extracting document");

    match extension.as_str() {
        "txt" | "md" | "markdown" | "text" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "docx" => extract_docx(bytes),
        "pdf" => extract_pdf(bytes),
        "" => Err(ImportError::UnsupportedFormat("(no extension)".to_string())),
        other => Err(ImportError::UnsupportedFormat(other.to_string())),
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, ImportError> {
    match docx_rs::read_docx(bytes) {
        Ok(docx) => {
            let mut lines: Vec<String> = Vec::new();
            for child in &docx.document.children {
                if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
                    lines.push(paragraph_text(paragraph));
                }
            }
            Ok(lines.join("\n"))
        }
        Err(e) => {
            warn!("strict docx parse failed, using raw XML fallback: {}", e);
            extract_docx_raw(bytes)
        }
    }
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut line = String::new();
    for child in &paragraph.children {
        collect_paragraph_child(child, &mut line);
    }
    line
}

fn collect_paragraph_child(child: &docx_rs::ParagraphChild, line: &mut String) {
    match child {
        docx_rs::ParagraphChild::Run(run) => {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    line.push_str(&text.text);
                }
            }
        }
        docx_rs::ParagraphChild::Hyperlink(link) => {
            for inner in &link.children {
                collect_paragraph_child(inner, line);
            }
        }
        _ => {}
    }
}

/// Fallback for archives that docx-rs rejects: read `word/document.xml`
/// straight out of the zip and strip the markup.
fn extract_docx_raw(bytes: &[u8]) -> Result<String, ImportError> {
    let cursor = Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ImportError::Docx(format!("not a valid archive: {}", e)))?;
    let mut file = archive
        .by_name("word/document.xml")
        .map_err(|e| ImportError::Docx(format!("missing word/document.xml: {}", e)))?;

    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|e| ImportError::Docx(format!("unreadable document.xml: {}", e)))?;

    Ok(strip_document_xml(&xml))
}

fn strip_document_xml(xml: &str) -> String {
    // Paragraph ends become line breaks before the tags are dropped.
    let paragraph_re = Regex::new(r"</w:p\s*>").unwrap();
    let with_breaks = paragraph_re.replace_all(xml, "\n");

    let tag_re = Regex::new(r"<[^>]+>").unwrap();
    let text = tag_re.replace_all(&with_breaks, "");

    decode_xml_entities(&text)
}

fn decode_xml_entities(text: &str) -> String {
    // `&amp;` last, otherwise freshly decoded sequences decode twice.
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ImportError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ImportError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    #[test]
    fn test_extract_plain_text_passthrough() {
        let text = extract_text("essai.txt", "Bonjour le monde".as_bytes()).unwrap();
        assert_eq!(text, "Bonjour le monde");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let text = extract_text("NOTES.TXT", "ok".as_bytes()).unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_unsupported_format() {
        let err = extract_text("photo.jpg", &[0xFF, 0xD8]).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(ext) if ext == "jpg"));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = extract_text("LISEZMOI", b"texte").unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extract_docx_built_in_memory() {
        let mut buffer = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Premier paragraphe")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Second paragraphe")))
            .build()
            .pack(&mut buffer)
            .unwrap();

        let bytes = buffer.into_inner();
        let text = extract_text("essai.docx", &bytes).unwrap();
        assert!(text.contains("Premier paragraphe"));
        assert!(text.contains("Second paragraphe"));
    }

    #[test]
    fn test_strip_document_xml() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Un</w:t></w:r></w:p><w:p><w:r><w:t>Deux &amp; trois</w:t></w:r></w:p></w:body></w:document>"#;
        let text = strip_document_xml(xml);
        assert_eq!(text.trim_end(), "Un\nDeux & trois");
    }

    #[test]
    fn test_invalid_docx_reports_error() {
        let err = extract_text("casse.docx", b"pas un zip").unwrap_err();
        assert!(matches!(err, ImportError::Docx(_)));
    }
}
