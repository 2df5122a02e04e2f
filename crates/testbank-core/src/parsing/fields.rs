use crate::model::{
    answer_index, DEFAULT_SUBJECT, DEFAULT_TOPIC, OPTION_PLACEHOLDER, PARSE_ERROR_OPTION,
    PARSE_ERROR_TEXT,
};
use regex::{Match, Regex};
use std::sync::LazyLock;

// Explanation introducer: "Exp)" / "Explanation:" etc. Everything after it,
// newlines included, is the raw explanation candidate.
static RE_EXPLANATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(?:Explanation|Exp)[):]\s*(.*)").unwrap());

// "Option c is the correct answer" inside explanation prose ("Option" may
// be missing in OCR output).
static RE_ANSWER_IN_EXP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Option\s*)?([a-d])\s+is\s+the\s+correct\s+answer").unwrap()
});

// Explicit answer tag: "Ans) c" / "Answer: b".
static RE_ANSWER_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Answer|Ans)[):]\s*([a-d])").unwrap());

// The answer sentence again, for removal from the displayed explanation.
static RE_ANSWER_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Option\s*)?[a-d]\s+is\s+the\s+correct\s+answer[.\s]*").unwrap()
});

// Metadata tags trailing the explanation belong to metadata extraction,
// not prose: truncate from the first one onward.
static RE_METADATA_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(?:Subject:\)|Topic:\)|Source:\)).*").unwrap());

static RE_SUBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Subject:\)\s*(.*)").unwrap());
static RE_TOPIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Topic:\)\s*(.*)").unwrap());

// First "a)" or "a." at a line start marks where options begin.
static RE_OPTION_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*a[).]").unwrap());

// The option region ends at the first introducer tag after the options
// start. One consistent boundary for all paths.
static RE_TAG_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\n\s*(?:Answer|Ans|Explanation|Exp)[):]").unwrap());

// A single letter a-d at a line start followed by ")" or "." demarcates
// one option within the option region.
static RE_OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*([a-dA-D])[).]").unwrap());

/// Raw fields extracted from one question block. The explanation here is
/// cleaned but not yet formatted for display.
#[derive(Debug, Clone)]
pub struct ExtractedFields {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: String,
    pub subject: String,
    pub topic: String,
}

/// An answer-detection strategy: given the whole block and the raw
/// explanation candidate, return the answer letter if this strategy applies.
type AnswerStrategy = fn(block: &str, explanation: &str) -> Option<char>;

/// Priority-ordered dispatch, first non-empty result wins. The explanatory
/// sentence comes first: it survives OCR better than the short "Ans) c"
/// tag, whose punctuation is often dropped.
const ANSWER_STRATEGIES: &[AnswerStrategy] = &[answer_from_explanation, answer_from_tag];

fn answer_from_explanation(_block: &str, explanation: &str) -> Option<char> {
    RE_ANSWER_IN_EXP
        .captures(explanation)
        .and_then(|c| c[1].chars().next())
}

fn answer_from_tag(block: &str, _explanation: &str) -> Option<char> {
    RE_ANSWER_TAG.captures(block).and_then(|c| c[1].chars().next())
}

/// Extract all fields from one question block.
///
/// Never fails: each field degrades to its documented default
/// independently, so one missing field cannot take down the others.
/// The explanation is located first because answer detection searches
/// inside it.
pub fn extract(block: &str) -> ExtractedFields {
    let raw_explanation = RE_EXPLANATION
        .captures(block)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    let letter = ANSWER_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(block, &raw_explanation));
    let correct_answer = letter.map(answer_index).unwrap_or(-1);

    // Drop the answer sentence from the displayed explanation so it is not
    // duplicated, then cut any trailing metadata tags.
    let explanation = RE_ANSWER_SENTENCE.replace_all(&raw_explanation, "");
    let explanation = RE_METADATA_TAIL
        .replace(&explanation, "")
        .trim()
        .to_string();

    let subject = capture_line(&RE_SUBJECT, block).unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
    let topic = capture_line(&RE_TOPIC, block).unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    let (text, options) = extract_stem_and_options(block);

    ExtractedFields {
        text,
        options,
        correct_answer,
        explanation,
        subject,
        topic,
    }
}

fn capture_line(re: &Regex, block: &str) -> Option<String> {
    re.captures(block).map(|c| c[1].trim().to_string())
}

/// Split a block into question stem and exactly four options.
///
/// A block without an option-start marker is degraded, not dropped: the
/// stem becomes a fixed error sentinel and all four options a placeholder.
fn extract_stem_and_options(block: &str) -> (String, Vec<String>) {
    let Some(start) = RE_OPTION_START.find(block) else {
        return (
            PARSE_ERROR_TEXT.to_string(),
            vec![PARSE_ERROR_OPTION.to_string(); 4],
        );
    };

    let text = block[..start.start()].trim().to_string();

    let tail = &block[start.start()..];
    let region = match RE_TAG_SECTION.find(tail) {
        Some(tag) => &tail[..tag.start()],
        None => tail,
    };

    // Options are emitted in the order their letters appear, not sorted.
    let markers: Vec<Match> = RE_OPTION_MARKER.find_iter(region).collect();
    let mut options = Vec::with_capacity(4);
    for (i, marker) in markers.iter().enumerate() {
        let end = markers
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(region.len());
        options.push(region[marker.end()..end].trim().to_string());
    }

    // The schema is fixed at four choices: drop extras, pad short lists.
    options.truncate(4);
    while options.len() < 4 {
        options.push(OPTION_PLACEHOLDER.to_string());
    }

    (text, options)
}
