//! Document text extraction.
//!
//! The pipeline only needs plain text out of an uploaded document, so the
//! extractor is a small synchronous trait.  [`extract_text`] runs it on the
//! blocking thread pool; a panicking extractor comes back as
//! [`ExtractError::Crashed`] instead of taking the task down.

pub mod pdf;
#[doc(hidden)]
pub mod test_pdf;

use std::sync::Arc;

use thiserror::Error;

pub use pdf::PdfTextExtractor;

/// File extensions accepted as documents (compared case-insensitively).
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

// ---------------------------------------------------------------------------
// ExtractError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes are not a readable document.
    #[error("could not read document: {0}")]
    Unreadable(String),

    /// The extractor panicked or its task was cancelled.
    #[error("text extractor crashed: {0}")]
    Crashed(String),
}

// ---------------------------------------------------------------------------
// TextExtractor trait
// ---------------------------------------------------------------------------

/// Pulls plain text out of document bytes.
///
/// Implementations are blocking; call them through [`extract_text`] from
/// async code.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Run `extractor` on the blocking pool.
pub async fn extract_text(
    extractor: Arc<dyn TextExtractor>,
    bytes: Arc<[u8]>,
) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                ExtractError::Crashed("extractor panicked".into())
            } else {
                ExtractError::Crashed(e.to_string())
            }
        })?
}

/// `true` when `filename` ends in `.<ext>` for a recognised extension,
/// ignoring ASCII case.  A bare `.pdf` counts; the content check happens at
/// extraction.
pub fn has_document_extension(filename: &str) -> bool {
    let name = filename.trim().to_ascii_lowercase();
    DOCUMENT_EXTENSIONS.iter().any(|ext| {
        name.strip_suffix(*ext)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct Panics;

    impl TextExtractor for Panics {
        fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractError> {
            panic!("malformed xref");
        }
    }

    struct Fixed(&'static str);

    impl TextExtractor for Fixed {
        fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(has_document_extension("report.pdf"));
        assert!(has_document_extension("Report.PDF"));
        assert!(has_document_extension("archive.tar.pdf"));
        assert!(has_document_extension(" spaced.pdf "));
    }

    #[test]
    fn bare_extension_is_accepted() {
        assert!(has_document_extension(".pdf"));
        assert!(has_document_extension(".PDF"));
    }

    #[test]
    fn other_names_are_rejected() {
        for name in ["notes.txt", "pdf", "reportpdf", "report.pdf.exe", "report", ""] {
            assert!(!has_document_extension(name), "{name:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn extract_text_runs_extractor() {
        let text = extract_text(Arc::new(Fixed("hello")), Arc::from(&b"%PDF"[..]))
            .await
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn panicking_extractor_is_reported() {
        let err = extract_text(Arc::new(Panics), Arc::from(&b"%PDF"[..]))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Crashed(_)));
    }

    #[test]
    fn test_pdf_has_valid_trailer() {
        let pdf = test_pdf::budget_report();
        let text = String::from_utf8(pdf).unwrap();
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Count 2"));
    }
}
