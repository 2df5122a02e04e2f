pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::TestbankError;
use extraction::{PageContent, PdfExtractor};
use model::ParsedPaper;
use parsing::noise::NoisePatterns;

/// Main API entry point: extract question records from an exam PDF.
///
/// Extracts page text, strips template boilerplate, then segments and
/// parses each question block independently. Only the extraction backend
/// can fail; parsing degrades per block or per field instead of erroring.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    patterns: &NoisePatterns,
) -> Result<ParsedPaper, TestbankError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(parse_pages(&pages, patterns))
}

/// Parse already-extracted page text into question records.
pub fn parse_pages(pages: &[PageContent], patterns: &NoisePatterns) -> ParsedPaper {
    let mut text = String::new();
    for page in pages {
        text.push_str(&page.text);
        text.push('\n');
    }
    parsing::parse_document(&text, patterns)
}
