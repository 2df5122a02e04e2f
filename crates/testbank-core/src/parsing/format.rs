use crate::model::NO_EXPLANATION;
use regex::Regex;
use std::sync::LazyLock;

// Rhetorical keywords that start a new thought in an explanation. Each
// match is set off with a double break and emphasis, preserving the
// original casing. "Hence option ... is correct" is itself a pattern.
static KEYWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        "Statement I is correct",
        "Statement II is correct",
        "Statement 1 is correct",
        "Statement 2 is correct",
        "Statement I is incorrect",
        "Statement II is incorrect",
        "Statement 1 is incorrect",
        "Statement 2 is incorrect",
        "Hence option .*? is correct",
        "Thus,",
        "Therefore,",
    ]
    .iter()
    .map(|pattern| Regex::new(&format!("(?i)({pattern})")).unwrap())
    .collect()
});

// Numbered sub-points ("\n  3. text") become emphasized number labels.
static RE_NUMBERED_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*(\d+\.)\s+").unwrap());

/// Insert HTML-ish markup into extracted explanation text for readability.
///
/// One-shot transform: re-running it on its own output is not guaranteed
/// to be a no-op, so callers format each explanation exactly once.
/// Empty input yields a fixed sentinel instead of markup.
pub fn format_explanation(explanation: &str) -> String {
    if explanation.is_empty() {
        return NO_EXPLANATION.to_string();
    }

    let mut text = explanation.to_string();

    for pattern in KEYWORD_PATTERNS.iter() {
        text = pattern
            .replace_all(&text, "<br><br><b>$1</b>")
            .into_owned();
    }

    text = RE_NUMBERED_POINT
        .replace_all(&text, "<br><b>$1</b> ")
        .into_owned();

    // Adjacent insertions stack up breaks
    text = text.replace("<br><br><br>", "<br><br>");

    text.trim().to_string()
}
