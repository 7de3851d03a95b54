use crate::error::ProcessError;
use crate::processor::{DocumentFormat, DocumentProcessor};

/// Extracts text from the first page of a PDF.
///
/// Only page one is read; later pages never reach the classifier. DOCX
/// extraction, by contrast, covers the whole document.
pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for PdfProcessor {
    fn extract_text(&self, content: &[u8]) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.pdf").entered();

        let doc = lopdf::Document::load_mem(content)
            .map_err(|e| ProcessError::PdfProcessing(format!("Failed to load PDF: {}", e)))?;

        extract_first_page_text(&doc)
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Pdf)
    }
}

fn extract_first_page_text(doc: &lopdf::Document) -> Result<String, ProcessError> {
    let first_page = doc
        .get_pages()
        .into_keys()
        .next()
        .ok_or_else(|| ProcessError::PdfProcessing("PDF has no pages".to_string()))?;

    doc.extract_text(&[first_page]).map_err(|e| {
        ProcessError::PdfProcessing(format!(
            "Failed to extract text from page {}: {}",
            first_page, e
        ))
    })
}
