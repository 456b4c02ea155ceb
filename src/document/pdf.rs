//! PDF text extraction backed by `pdf-extract`.

use super::{ExtractError, TextExtractor};

/// Extracts the text layer of every page, in page order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Unreadable(e.to_string()))?;
        log::debug!("document: extracted {} chars from {} bytes", text.len(), bytes.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_pdf;

    #[test]
    fn two_page_pdf_yields_its_text() {
        let text = PdfTextExtractor.extract(&test_pdf::budget_report()).unwrap();

        assert!(!text.trim().is_empty());
        assert!(text.contains("budget"));
        assert_eq!(text.matches("budget").count(), 5);
        assert!(text.find("next year").unwrap() < text.find("travel").unwrap());
    }

    #[test]
    fn page_without_text_extracts_blank() {
        let text = PdfTextExtractor.extract(&test_pdf::build(&[&[]])).unwrap();
        assert!(text.trim().is_empty());
    }

    #[test]
    fn garbage_is_unreadable() {
        let err = PdfTextExtractor.extract(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Unreadable(_)));
    }
}
