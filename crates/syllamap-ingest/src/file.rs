//! File text extraction for uploaded syllabus documents.

use std::path::Path;

use syllamap_core::{Error, Result};

/// Supported file types for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Markdown,
    Pdf,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Self::PlainText,
            "md" | "mdx" => Self::Markdown,
            "pdf" => Self::Pdf,
            _ => Self::Unknown,
        }
    }
}

/// Extract text content from a file.
///
/// Returns `Ok(None)` when the file holds binary content no extractor can
/// decode; hard extraction failures (e.g. a corrupt PDF) are errors.
pub fn extract_text(path: &Path) -> Result<Option<String>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file_type = FileType::from_extension(ext);

    match file_type {
        FileType::PlainText | FileType::Markdown => {
            let content = std::fs::read_to_string(path)?;
            Ok(Some(content))
        }
        FileType::Pdf => {
            let data = std::fs::read(path)?;
            extract_pdf_bytes(&data).map(Some)
        }
        FileType::Unknown => {
            // Try reading as text
            match std::fs::read_to_string(path) {
                Ok(content) => {
                    // Basic check: if content has too many control bytes, skip it
                    if content
                        .chars()
                        .filter(|c| c.is_control() && *c != '\n' && *c != '\r' && *c != '\t')
                        .count()
                        > content.len() / 10
                    {
                        tracing::warn!("Skipping binary-looking file: {}", path.display());
                        Ok(None)
                    } else {
                        Ok(Some(content))
                    }
                }
                Err(_) => Ok(None), // Binary file
            }
        }
    }
}

/// Extract text from PDF bytes.
///
/// `pdf_extract` can panic on malformed input rather than returning an
/// error, so the call runs behind `catch_unwind`.
pub fn extract_pdf_bytes(data: &[u8]) -> Result<String> {
    let owned = data.to_vec();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        pdf_extract::extract_text_from_mem(&owned)
    }));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(Error::Ingest(format!("PDF extraction failed: {}", e))),
        Err(_) => Err(Error::Ingest(
            "PDF extraction panicked on malformed input".to_string(),
        )),
    }
}
