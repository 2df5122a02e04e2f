use crate::error::TestbankError;
use crate::extraction::{PageContent, PdfExtractor};
use regex::Regex;
use std::io::Write;
use std::process::Command;
use std::sync::LazyLock;

// Page-number artifacts left behind by lossy text extraction: "[24]" and
// "--- PAGE 2 ---" banners. Removed per page, before any structural parsing.
static RE_PAGE_BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());
static RE_PAGE_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"---\s*PAGE\s*\d+\s*---").unwrap());

/// PDF extraction backend using pdftotext (from poppler-utils).
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TestbankError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| TestbankError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| TestbankError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TestbankError::PdftotextNotFound
                } else {
                    TestbankError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(TestbankError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // Split into pages (pdftotext uses form feed \x0c as page separator)
        let pages: Vec<PageContent> = text
            .split('\x0c')
            .enumerate()
            .map(|(i, page_text)| PageContent {
                page_number: i + 1,
                text: scrub_page_markers(page_text),
            })
            .filter(|p| !p.text.trim().is_empty() || p.page_number == 1)
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Remove explicit page-number markers from one page's text.
pub fn scrub_page_markers(page_text: &str) -> String {
    let text = RE_PAGE_BRACKET.replace_all(page_text, "");
    RE_PAGE_BANNER.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_bracket_page_numbers() {
        assert_eq!(scrub_page_markers("Some text [24] more"), "Some text  more");
    }

    #[test]
    fn test_scrub_page_banners() {
        assert_eq!(
            scrub_page_markers("before\n--- PAGE 2 ---\nafter"),
            "before\n\nafter"
        );
        assert_eq!(scrub_page_markers("---PAGE 12---"), "");
    }

    #[test]
    fn test_scrub_leaves_ordinary_text() {
        let text = "Q.1) What year [context] matters?";
        // Only digit-only brackets are page markers
        assert_eq!(scrub_page_markers(text), text);
    }
}
