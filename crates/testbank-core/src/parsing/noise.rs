use regex::Regex;
use std::sync::LazyLock;

static RE_EXTRA_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Boilerplate patterns for one document template.
///
/// Exam PDFs repeat the same header/footer blocks on every page, and those
/// blocks leak into question and explanation text if not removed before
/// segmentation. The patterns here are tuned to a specific source template,
/// not general boilerplate detection, so the set is a value the pipeline
/// captures at construction rather than a hardcoded part of the parser.
///
/// Block patterns must be bounded: each anchors on a phrase that starts the
/// boilerplate and terminates non-greedily at a token that ends it. An
/// unbounded "anchor to end of text" match would swallow real question
/// content between repeated occurrences. If an end token is missing on some
/// page the block simply survives into later stages, which degrades output
/// but never fails.
#[derive(Debug, Clone)]
pub struct NoisePatterns {
    block_patterns: Vec<Regex>,
    literal_fragments: Vec<String>,
}

impl Default for NoisePatterns {
    fn default() -> Self {
        Self::forum_ias()
    }
}

impl NoisePatterns {
    pub fn new(block_patterns: Vec<Regex>, literal_fragments: Vec<String>) -> Self {
        NoisePatterns {
            block_patterns,
            literal_fragments,
        }
    }

    /// Patterns for the ForumIAS SFG test-series template.
    pub fn forum_ias() -> Self {
        let block_patterns = vec![
            // Address/contact footer: from the centre-name anchor to the
            // first of the two contact emails, crossing line boundaries.
            Regex::new(
                r"(?is)Forum\s+Learning\s+Centre\s*:.*?(?:admissions@forumias\.academy|helpdesk@forumias\.academy)",
            )
            .unwrap(),
            // Program/test header: "SFG 20xx ..." terminated by the brand name.
            Regex::new(r"(?is)SFG\s*20\d{2}.*?ForumIAS").unwrap(),
        ];
        // Fragments of the footer that survive the block pattern when OCR
        // mangles one of its anchors.
        let literal_fragments = vec![
            "9311740400, 9311740900".to_string(),
            "https://academy.forumias.com".to_string(),
            "admissions@forumias.academy".to_string(),
            "helpdesk@forumias.academy".to_string(),
            "Plot No. 36, 4th Floor".to_string(),
            "Hyderabad - 1st & 2nd Floor, SM Plaza".to_string(),
        ];
        NoisePatterns::new(block_patterns, literal_fragments)
    }

    /// Remove all configured boilerplate from raw document text.
    ///
    /// Total: absent patterns are a no-op. Runs of 3+ newlines left behind
    /// by removals are collapsed to exactly 2 so block boundaries stay
    /// stable for segmentation.
    pub fn strip(&self, raw_text: &str) -> String {
        let mut text = raw_text.to_string();

        for pattern in &self.block_patterns {
            text = pattern.replace_all(&text, "").into_owned();
        }

        for fragment in &self.literal_fragments {
            text = text.replace(fragment.as_str(), "");
        }

        RE_EXTRA_NEWLINES.replace_all(&text, "\n\n").into_owned()
    }
}
