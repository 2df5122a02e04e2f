use serde::{Deserialize, Serialize};

/// Stem sentinel used when no option-start marker is found in a block.
pub const PARSE_ERROR_TEXT: &str = "Error parsing question text.";

/// Placeholder for all four options when option parsing failed outright.
pub const PARSE_ERROR_OPTION: &str = "Parse Error";

/// Padding value when fewer than four option markers were found.
pub const OPTION_PLACEHOLDER: &str = "-";

/// Sentinel emitted instead of an empty explanation.
pub const NO_EXPLANATION: &str = "No explanation provided.";

pub const DEFAULT_SUBJECT: &str = "General";
pub const DEFAULT_TOPIC: &str = "GS";

/// One fully extracted multiple-choice question.
///
/// Records are independently constructed from their source block and
/// immutable once assembled. `options` always holds exactly 4 entries
/// (positions correspond to choices a-d), padded or placeholder-filled
/// when extraction partially failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 1-based position among emitted records, not the number printed
    /// in the source text.
    pub id: usize,
    pub text: String,
    pub options: Vec<String>,
    /// 0=a .. 3=d, or -1 when no answer letter could be determined.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: i32,
    pub explanation: String,
    pub subject: String,
    pub topic: String,
}

/// Result of parsing one document: the extracted records plus advisory
/// diagnostics (zero-record documents, skipped blocks).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedPaper {
    pub questions: Vec<QuestionRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Map an answer letter to its zero-based option index.
///
/// Total over a-d in either case; anything else maps to -1.
pub fn answer_index(letter: char) -> i32 {
    match letter.to_ascii_lowercase() {
        'a' => 0,
        'b' => 1,
        'c' => 2,
        'd' => 3,
        _ => -1,
    }
}
