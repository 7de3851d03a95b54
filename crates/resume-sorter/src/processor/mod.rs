pub mod docx;
pub mod pdf;

use crate::error::ProcessError;
use crate::upload::UploadedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

pub trait DocumentProcessor: Send + Sync {
    fn extract_text(&self, content: &[u8]) -> Result<String, ProcessError>;
    fn supports(&self, format: DocumentFormat) -> bool;
}

pub struct ProcessorRegistry {
    processors: Vec<Box<dyn DocumentProcessor>>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        let processors: Vec<Box<dyn DocumentProcessor>> = vec![
            Box::new(pdf::PdfProcessor::new()),
            Box::new(docx::DocxProcessor::new()),
        ];

        Self { processors }
    }

    /// Extracts text from an uploaded file, routing on its extension.
    pub fn extract(&self, file: &UploadedFile) -> Result<String, ProcessError> {
        let extension = file.extension();

        let format = DocumentFormat::from_extension(extension)
            .ok_or_else(|| ProcessError::UnsupportedFormat(extension.to_string()))?;

        for processor in &self.processors {
            if processor.supports(format) {
                return processor.extract_text(&file.content);
            }
        }

        Err(ProcessError::UnsupportedFormat(extension.to_string()))
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("Docx"), Some(DocumentFormat::Docx));
    }

    #[test]
    fn test_from_extension_rejects_everything_else() {
        for ext in ["doc", "txt", "md", "png", "", "pdf.bak"] {
            assert_eq!(DocumentFormat::from_extension(ext), None, "{}", ext);
        }
    }

    #[test]
    fn test_unsupported_format_error() {
        let registry = ProcessorRegistry::new();
        let file = UploadedFile::new("notes.txt", b"some content".to_vec());

        match registry.extract(&file) {
            Err(ProcessError::UnsupportedFormat(ext)) => assert_eq!(ext, "txt"),
            _ => panic!("Expected UnsupportedFormat error"),
        }
    }

    #[test]
    fn test_no_extension_error() {
        let registry = ProcessorRegistry::new();
        let file = UploadedFile::new("noextension", b"some content".to_vec());

        match registry.extract(&file) {
            Err(ProcessError::UnsupportedFormat(ext)) => assert_eq!(ext, ""),
            _ => panic!("Expected UnsupportedFormat error for empty extension"),
        }
    }

    #[test]
    fn test_registry_routes_pdf_to_pdf_processor() {
        let registry = ProcessorRegistry::new();
        let file = UploadedFile::new("broken.pdf", b"not a pdf".to_vec());

        assert!(matches!(
            registry.extract(&file),
            Err(ProcessError::PdfProcessing(_))
        ));
    }

    #[test]
    fn test_registry_routes_docx_to_docx_processor() {
        let registry = ProcessorRegistry::new();
        let file = UploadedFile::new("broken.DOCX", b"not a zip".to_vec());

        assert!(matches!(
            registry.extract(&file),
            Err(ProcessError::DocxProcessing(_))
        ));
    }
}
