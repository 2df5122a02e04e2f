pub mod pdftotext;

use crate::error::TestbankError;

/// Text content extracted from a single page of a PDF, with page-number
/// artifacts already scrubbed by the backend.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TestbankError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
