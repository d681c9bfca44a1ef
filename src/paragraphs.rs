//! Paragraph segmentation for the full-text view.
//!
//! Splits running text into display paragraphs by counting sentence
//! boundaries. Independent of the segment structure; the HTML renderer uses it
//! so the full-text section reads as prose instead of one wall of text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default paragraph size used by the HTML renderer.
pub const DEFAULT_SENTENCES_PER_PARAGRAPH: usize = 4;

// A sentence ends at `.`, `!`, or `?` immediately followed by whitespace.
// No abbreviation or decimal handling: "Dr. Smith" splits. Known tradeoff.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split `text` into paragraphs of `sentences_per_paragraph` sentences each.
///
/// The final paragraph keeps whatever remains, regardless of size. Empty input
/// yields a single empty paragraph. Values of `sentences_per_paragraph` below
/// one are treated as one.
pub fn split_into_paragraphs(text: &str, sentences_per_paragraph: usize) -> Vec<String> {
    let text = text.trim();

    let mut sentences: Vec<&str> = Vec::new();
    let mut rest_start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Keep the punctuation mark (one ASCII byte) with the sentence it closes.
        sentences.push(&text[rest_start..boundary.start() + 1]);
        rest_start = boundary.end();
    }
    if rest_start < text.len() || sentences.is_empty() {
        sentences.push(&text[rest_start..]);
    }

    sentences
        .chunks(sentences_per_paragraph.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_sentences(count: usize) -> String {
        (1..=count)
            .map(|i| format!("Sentence {}.", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn groups_sentences_into_fours_by_default() {
        let text = numbered_sentences(9);
        let paragraphs = split_into_paragraphs(&text, DEFAULT_SENTENCES_PER_PARAGRAPH);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "Sentence 1. Sentence 2. Sentence 3. Sentence 4.");
        assert_eq!(paragraphs[2], "Sentence 9.");
    }

    #[test]
    fn paragraph_count_is_ceiling_of_sentences_over_n() {
        for (count, n, expected) in [(1, 4, 1), (4, 4, 1), (5, 4, 2), (12, 3, 4), (13, 3, 5)] {
            let text = numbered_sentences(count);
            assert_eq!(split_into_paragraphs(&text, n).len(), expected, "{count}/{n}");
        }
    }

    #[test]
    fn all_terminators_end_sentences() {
        let paragraphs = split_into_paragraphs("One! Two? Three. Four", 1);
        assert_eq!(paragraphs, vec!["One!", "Two?", "Three.", "Four"]);
    }

    #[test]
    fn punctuation_without_trailing_whitespace_is_not_a_boundary() {
        let paragraphs = split_into_paragraphs("about 3.14 radians", 1);
        assert_eq!(paragraphs, vec!["about 3.14 radians"]);
    }

    #[test]
    fn empty_input_yields_one_empty_paragraph() {
        assert_eq!(split_into_paragraphs("", 4), vec![String::new()]);
        assert_eq!(split_into_paragraphs("   ", 4), vec![String::new()]);
    }

    #[test]
    fn text_without_boundaries_is_one_paragraph() {
        let paragraphs = split_into_paragraphs("no terminators here at all", 4);
        assert_eq!(paragraphs, vec!["no terminators here at all"]);
    }
}
