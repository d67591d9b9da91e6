//! Document Text Extractor — turns an uploaded PDF or plain-text artifact
//! into the raw resume text the rest of the workflow runs on.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported format '{0}' — upload a .pdf or .txt file")]
    UnsupportedFormat(String),

    #[error("File is not valid UTF-8 text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),
}

/// Accepted upload kinds, detected from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    pub fn from_file_name(name: &str) -> Result<Self, ExtractError> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") | Some("text") | Some("md") => Ok(DocumentKind::Text),
            _ => Err(ExtractError::UnsupportedFormat(name.to_string())),
        }
    }
}

/// Plain text lifted out of one uploaded file. Immutable once created; the
/// session replaces it wholesale on the next upload.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub raw_text: String,
}

/// Extracts plain text from an uploaded artifact.
///
/// Rewinds the reader first — the stream may already have been partially
/// consumed upstream (content sniffing, size checks).
pub fn extract<R: Read + Seek>(
    mut reader: R,
    kind: DocumentKind,
) -> Result<ExtractedDocument, ExtractError> {
    reader.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let raw_text = match kind {
        DocumentKind::Pdf => {
            let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
                .map_err(|e| ExtractError::Pdf(e.to_string()))?;
            debug!("extracted {} PDF pages", pages.len());
            join_pages(&pages)
        }
        DocumentKind::Text => String::from_utf8(bytes)?,
    };

    Ok(ExtractedDocument { raw_text })
}

/// Joins per-page text into one document.
///
/// A page with extractable text is appended verbatim; a page with none
/// contributes a lone newline. Adjacent text-bearing pages therefore merge
/// with no separator between them. Long-standing behavior — do not change
/// to newline-per-page without sign-off.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        if page.is_empty() {
            text.push('\n');
        } else {
            text.push_str(page);
        }
    }
    text
}
