pub mod fields;
pub mod format;
pub mod noise;

use crate::model::{ParsedPaper, QuestionRecord};
use noise::NoisePatterns;
use regex::Regex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::LazyLock;

// Question-start marker: "Q.1)", "Q. 12.", etc. The marker is consumed by
// the split and never appears inside a block.
static RE_QUESTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\nQ\.\s*\d+[).]").unwrap());

/// Parse one document's raw text into an ordered sequence of question
/// records.
///
/// Pipeline: strip boilerplate, segment into blocks, assemble each block
/// independently. A block that fails assembly is dropped with a warning;
/// the rest of the document is unaffected.
pub fn parse_document(raw_text: &str, patterns: &NoisePatterns) -> ParsedPaper {
    let cleaned = patterns.strip(raw_text);
    let blocks = segment_blocks(&cleaned);
    assemble_blocks(&blocks, assemble)
}

/// Assemble blocks into records with per-block failure isolation: a block
/// whose assembly panics is dropped with a warning naming its position,
/// while its siblings survive with contiguous ids.
fn assemble_blocks(
    blocks: &[&str],
    assemble_one: impl Fn(&str, usize) -> QuestionRecord,
) -> ParsedPaper {
    let mut paper = ParsedPaper::default();
    for (position, &block) in blocks.iter().enumerate() {
        // Ids follow the position among emitted records, so a dropped
        // block leaves no gap in the numbering.
        let id = paper.questions.len() + 1;
        match catch_unwind(AssertUnwindSafe(|| assemble_one(block, id))) {
            Ok(record) => paper.questions.push(record),
            Err(_) => paper.warnings.push(format!(
                "question block {} skipped: field extraction failed",
                position + 1
            )),
        }
    }

    if paper.questions.is_empty() {
        paper
            .warnings
            .push("no question records extracted from document".to_string());
    }

    paper
}

/// Split cleaned text into one chunk per question.
///
/// The first segment (title page, instructions) is always discarded.
/// Empty trimmed segments are dropped. Zero markers yields an empty
/// sequence, which is not an error.
pub fn segment_blocks(cleaned_text: &str) -> Vec<&str> {
    let mut segments = RE_QUESTION_START.split(cleaned_text);
    segments.next(); // preamble before the first marker

    segments
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Assemble one block into its final record: extract fields, format the
/// explanation, stamp the id.
fn assemble(block: &str, id: usize) -> QuestionRecord {
    let extracted = fields::extract(block);
    let explanation = format::format_explanation(&extracted.explanation);

    QuestionRecord {
        id,
        text: extracted.text,
        options: extracted.options,
        correct_answer: extracted.correct_answer,
        explanation,
        subject: extracted.subject,
        topic: extracted.topic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NO_EXPLANATION;

    #[test]
    fn test_segment_counts_markers() {
        let text = "Title page\nQ.1) First?\na) x\nQ.2) Second?\na) y\nQ. 3. Third?\na) z";
        let blocks = segment_blocks(text);
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("First?"));
        assert!(blocks[2].starts_with("Third?"));
    }

    #[test]
    fn test_segment_no_markers() {
        assert!(segment_blocks("just prose, nothing questionlike").is_empty());
        assert!(segment_blocks("").is_empty());
    }

    #[test]
    fn test_segment_discards_preamble() {
        let blocks = segment_blocks("INSTRUCTIONS: do not cheat\nQ.1) Only one?");
        assert_eq!(blocks, vec!["Only one?"]);
    }

    #[test]
    fn test_segment_marker_not_retained() {
        let blocks = segment_blocks("x\nQ.7) Where?\na) here");
        assert!(!blocks[0].contains("Q.7"));
    }

    #[test]
    fn test_segment_drops_empty_blocks() {
        let blocks = segment_blocks("x\nQ.1)   \n\nQ.2) Real?");
        assert_eq!(blocks, vec!["Real?"]);
    }

    #[test]
    fn test_segment_marker_inside_explanation_splits() {
        // Known fragility: a literal "Q.3)" at a line start inside an
        // explanation also splits. Documented behavior, not a defect of
        // the segmenter.
        let text = "x\nQ.1) Real?\na) opt\nExp) see\nQ.3) of last year's paper\nQ.2) Next?";
        let blocks = segment_blocks(text);
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_parse_document_numbers_by_emission() {
        let patterns = NoisePatterns::default();
        // Q.2's segment is whitespace only and is dropped; the following
        // record is renumbered by emission order.
        let text = "intro\nQ.1) First?\na) A\nb) B\nAns) a\nQ.2)  \nQ.3) Third?\na) A\nb) B\nAns) b";
        let paper = parse_document(text, &patterns);
        assert_eq!(paper.questions.len(), 2);
        assert_eq!(paper.questions[0].id, 1);
        assert_eq!(paper.questions[1].id, 2);
        assert!(paper.questions[1].text.starts_with("Third?"));
    }

    #[test]
    fn test_parse_document_empty_warns() {
        let paper = parse_document("no markers here", &NoisePatterns::default());
        assert!(paper.questions.is_empty());
        assert_eq!(paper.warnings.len(), 1);
        assert!(paper.warnings[0].contains("no question records"));
    }

    #[test]
    fn test_failed_block_dropped_with_warning() {
        let blocks = [
            "First?\na) A\nb) B\nAns) a",
            "poison",
            "Third?\na) A\nb) B\nAns) b",
        ];
        let paper = assemble_blocks(&blocks, |block, id| {
            if block == "poison" {
                panic!("induced extraction fault");
            }
            assemble(block, id)
        });

        // The faulting block is dropped; its siblings survive and are
        // numbered contiguously by emission order.
        assert_eq!(paper.questions.len(), 2);
        assert_eq!(paper.questions[0].id, 1);
        assert_eq!(paper.questions[1].id, 2);
        assert!(paper.questions[0].text.starts_with("First?"));
        assert!(paper.questions[1].text.starts_with("Third?"));
        assert_eq!(
            paper.warnings,
            vec!["question block 2 skipped: field extraction failed"]
        );
    }

    #[test]
    fn test_assemble_defaults() {
        let record = assemble("Stem only, nothing else", 5);
        assert_eq!(record.id, 5);
        assert_eq!(record.correct_answer, -1);
        assert_eq!(record.explanation, NO_EXPLANATION);
        assert_eq!(record.subject, "General");
        assert_eq!(record.topic, "GS");
    }
}
