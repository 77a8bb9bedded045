use crate::fonts::store::{TextMeasure, TextStyle};

/// Greedy word wrap against a measured width budget.
///
/// Paragraph breaks (`\n`) are preserved: a whitespace-only paragraph
/// becomes one empty line, kept in the count as a vertical spacer but
/// carrying nothing to draw. Words are accumulated left to right and the
/// line is flushed when the next word would push the measured width past
/// `max_width`. A single word wider than the budget is never split; it
/// stays on its own line and overflows visually.
///
/// Empty input wraps to zero lines.
pub(crate) fn wrap_lines(
    measure: &mut dyn TextMeasure,
    style: &TextStyle,
    text: &str,
    max_width: f64,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut line = String::new();
        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }

            let candidate = format!("{line} {word}");
            if measure.text_width(style, &candidate) > max_width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            } else {
                line = candidate;
            }
        }
        lines.push(line);
    }
    lines
}

/// True when `phrase` occurs in `text` ignoring case.
///
/// Emphasis is only attempted at all when this holds; otherwise the text
/// flows exactly as plain wrapping.
pub(crate) fn phrase_occurs(text: &str, phrase: &str) -> bool {
    !phrase.trim().is_empty() && text.to_lowercase().contains(&phrase.trim().to_lowercase())
}

/// Lowercased space-delimited words of an emphasis phrase.
pub(crate) fn phrase_words(phrase: &str) -> Vec<String> {
    phrase
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect()
}

/// True when a rendered word matches one of the phrase words.
///
/// Matching strips leading and trailing punctuation from the rendered
/// word, lowercases it, and requires exact equality. `"Tight-Margins."`
/// matches the phrase word `tight-margins`; `"margin"` never matches
/// `margins`.
pub(crate) fn word_matches(word: &str, phrase: &[String]) -> bool {
    let bare = strip_word(word).to_lowercase();
    !bare.is_empty() && phrase.iter().any(|p| *p == bare)
}

/// Strip sentence punctuation and quotes from both ends of a word.
pub(crate) fn strip_word(word: &str) -> &str {
    word.trim_matches(is_strippable)
}

fn is_strippable(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"' | '\u{2018}' | '\u{2019}' | '\u{201C}'
            | '\u{201D}'
    )
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
