//! Upload boundary: turns document bytes into plain text for the extractor.
//!
//! PDF goes through `pdf-extract`; plain text is decoded lossily. DOCX is recognised but not
//! decoded, so it yields empty text and the parser reports the empty profile.

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    Unsupported,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            "txt" | "text" | "md" => DocumentKind::PlainText,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Never fails: unreadable input comes back as an empty string.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> String {
    match kind {
        DocumentKind::Pdf => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => {
                debug!("Extracted {} chars from PDF", text.len());
                text
            }
            Err(e) => {
                warn!("PDF text extraction failed: {e}");
                String::new()
            }
        },
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        // Office formats are left to an upstream converter.
        DocumentKind::Docx => {
            warn!("DOCX uploads are not decoded; returning empty text");
            String::new()
        }
        DocumentKind::Unsupported => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_filename("cv.PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename("my.resume.docx"), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_filename("resume.txt"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename("resume.png"), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::from_filename("resume"), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::from_filename(""), DocumentKind::Unsupported);
    }

    #[test]
    fn test_plain_text_is_lossy_utf8() {
        let text = extract_text(DocumentKind::PlainText, b"Jane \xFF Doe");
        assert!(text.starts_with("Jane "));
        assert!(text.ends_with(" Doe"));
    }

    #[test]
    fn test_garbage_pdf_yields_empty_text() {
        assert_eq!(extract_text(DocumentKind::Pdf, b"not a pdf"), "");
    }

    #[test]
    fn test_docx_and_unsupported_yield_empty_text() {
        assert_eq!(extract_text(DocumentKind::Docx, b"PK\x03\x04"), "");
        assert_eq!(extract_text(DocumentKind::Unsupported, b"hello"), "");
    }
}
