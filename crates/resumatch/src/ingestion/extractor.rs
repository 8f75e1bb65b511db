//! Plain-text extraction from resume files

use std::fs;
use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::{Error, Result};
use crate::types::FileKind;

/// Text extraction from a file on disk
///
/// The pipeline takes this as a trait object so tests can substitute canned
/// text without writing real PDF or DOCX fixtures.
pub trait TextExtract: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extracts text from PDF and Word files
pub struct FileTextExtractor;

impl TextExtract for FileTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume");

        match FileKind::from_filename(filename) {
            Some(FileKind::Pdf) => extract_pdf(path, filename),
            // Legacy .doc goes through the docx path. Real old binary .doc
            // files fail there with an extraction error.
            Some(FileKind::Docx) | Some(FileKind::Doc) => extract_docx(path, filename),
            None => Err(Error::UnsupportedFileType(FileKind::extension_label(
                filename,
            ))),
        }
    }
}

fn extract_pdf(path: &Path, filename: &str) -> Result<String> {
    let bytes = fs::read(path)?;

    let raw = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        // lopdf tells us whether the file is a PDF at all, which makes the
        // error actionable for the client.
        let detail = match lopdf::Document::load_mem(&bytes) {
            Ok(doc) => format!("{} (document has {} pages)", e, doc.get_pages().len()),
            Err(load_err) => format!("{}; file is not a readable PDF: {}", e, load_err),
        };
        Error::extraction(filename, detail)
    })?;

    let text = normalize_text(&raw);
    if text.is_empty() {
        return Err(Error::extraction(
            filename,
            "no text content could be extracted",
        ));
    }
    Ok(text)
}

/// Trim lines and collapse runs of blank lines into a single blank line
///
/// Paragraph breaks survive as blank lines, which the section parser keeps
/// inside section bodies.
fn normalize_text(raw: &str) -> String {
    let cleaned = raw.replace('\0', "");
    let mut text = String::new();
    let mut pending_break = false;

    for line in cleaned.lines() {
        let line = line.trim();
        if line.is_empty() {
            pending_break = !text.is_empty();
            continue;
        }
        if pending_break {
            text.push_str("\n\n");
            pending_break = false;
        } else if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
    }
    text
}

fn extract_docx(path: &Path, filename: &str) -> Result<String> {
    let bytes = fs::read(path)?;

    let docx = docx_rs::read_docx(&bytes).map_err(|e| Error::extraction(filename, e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for para_child in paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            let text = text.trim().to_string();
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    if paragraphs.is_empty() {
        return Err(Error::extraction(
            filename,
            "no text content could be extracted",
        ));
    }
    Ok(paragraphs.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_extension() {
        let extractor = FileTextExtractor;
        // Dispatch happens before any disk access, so a nonexistent path is
        // fine here.
        let err = extractor.extract(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType(ref ext) if ext == ".txt"));
    }

    #[test]
    fn normalize_keeps_single_paragraph_breaks() {
        let raw = "  SUMMARY  \n\n\n\nBuilt systems.\0\n   \nShipped things.  \n\n";
        assert_eq!(
            normalize_text(raw),
            "SUMMARY\n\nBuilt systems.\n\nShipped things."
        );
    }

    #[test]
    fn normalize_drops_leading_and_trailing_blanks() {
        assert_eq!(normalize_text("\n\n  \nhello\n  \n"), "hello");
        assert_eq!(normalize_text("   \n \n"), "");
    }
}
