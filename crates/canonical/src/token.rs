use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// Decides whether a character belongs to a word.
///
/// Any `Fn(char) -> bool` closure or function pointer implements this trait,
/// so callers can plug in their own classification without a wrapper type.
pub trait WordClassifier: Send + Sync {
    fn is_word_char(&self, ch: char) -> bool;
}

impl<F> WordClassifier for F
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn is_word_char(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Default classifier: Unicode letters and numbers form words, everything
/// else separates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFinder;

impl WordClassifier for WordFinder {
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_letter() || ch.is_number()
    }
}

/// A maximal run of same-class characters with its UTF-8 byte offsets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
    /// True for word runs, false for separator runs.
    pub is_word: bool,
}

impl Span {
    /// Borrow the spanned slice out of the text it was produced from.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `text` into alternating word and separator spans using [`WordFinder`].
pub fn tokenize(text: &str) -> Vec<Span> {
    tokenize_with(text, &WordFinder)
}

/// Splits `text` into alternating word and separator spans.
///
/// The spans cover the whole input with no gaps and no overlaps. A new span
/// starts whenever a character's classification differs from the current
/// span's; the last span is flushed at end of input. Classification runs per
/// `char`, so offsets always land on UTF-8 boundaries.
///
/// ```rust
/// use canonical::tokenize;
///
/// let text = "a, b.";
/// let parts: Vec<&str> = tokenize(text).iter().map(|s| s.slice(text)).collect();
/// assert_eq!(parts, vec!["a", ", ", "b", "."]);
/// ```
pub fn tokenize_with<C>(text: &str, classifier: &C) -> Vec<Span>
where
    C: WordClassifier + ?Sized,
{
    let mut spans = Vec::with_capacity((text.len() / 4).saturating_add(1));
    let mut current: Option<(usize, bool)> = None;

    for (idx, ch) in text.char_indices() {
        let is_word = classifier.is_word_char(ch);
        match current {
            Some((start, current_is_word)) if current_is_word != is_word => {
                spans.push(Span {
                    start,
                    end: idx,
                    is_word: current_is_word,
                });
                current = Some((idx, is_word));
            }
            Some(_) => {}
            None => current = Some((idx, is_word)),
        }
    }

    if let Some((start, is_word)) = current {
        spans.push(Span {
            start,
            end: text.len(),
            is_word,
        });
    }

    spans
}

/// Yields only the word spans of `text`, as string slices.
pub fn words_with<'a, C>(text: &'a str, classifier: &C) -> impl Iterator<Item = &'a str>
where
    C: WordClassifier + ?Sized,
{
    tokenize_with(text, classifier)
        .into_iter()
        .filter(|span| span.is_word)
        .map(move |span| span.slice(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(text: &str) -> Vec<(&str, bool)> {
        tokenize(text)
            .iter()
            .map(|span| (span.slice(text), span.is_word))
            .collect()
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn alternating_runs_are_maximal() {
        assert_eq!(
            contents("a, b."),
            vec![("a", true), (", ", false), ("b", true), (".", false)]
        );
    }

    #[test]
    fn leading_and_trailing_separators_are_spans() {
        let input = " pełnoziarnista mąka ryżowa ";
        let spans = contents(input);
        assert_eq!(spans.len(), 7);
        for i in [0, 2, 4, 6] {
            assert_eq!(spans[i], (" ", false), "span {i}");
        }
        assert_eq!(spans[1], ("pełnoziarnista", true));
        assert_eq!(spans[5], ("ryżowa", true));
    }

    #[test]
    fn spans_cover_input_without_gaps() {
        let input = "Pełnoziarnista mąka ryżowa – jak zrobić?";
        let spans = tokenize(input);
        assert_eq!(spans.first().map(|s| s.start), Some(0));
        assert_eq!(spans.last().map(|s| s.end), Some(input.len()));
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_ne!(pair[0].is_word, pair[1].is_word);
        }
        assert_eq!(spans.len(), 10);
    }

    #[test]
    fn non_bmp_offsets_are_char_aligned() {
        let input = "a\u{10348}b c";
        let spans = tokenize(input);
        // U+10348 is a letter, so the first word keeps all three chars.
        assert_eq!(spans[0].slice(input), "a\u{10348}b");
        assert_eq!(spans[0].len(), 6);
        assert_eq!(spans[2].slice(input), "c");
    }

    #[test]
    fn digits_are_word_chars() {
        assert_eq!(
            contents("route 66!"),
            vec![("route", true), (" ", false), ("66", true), ("!", false)]
        );
    }

    #[test]
    fn closure_classifier_is_accepted() {
        let only_x = |ch: char| ch == 'x';
        let input = "xxaxx";
        let spans = tokenize_with(input, &only_x);
        assert_eq!(spans.len(), 3);
        assert!(spans[0].is_word);
        assert!(!spans[1].is_word);
    }

    #[test]
    fn words_with_skips_separators() {
        let words: Vec<&str> = words_with("rice, whole flour", &WordFinder).collect();
        assert_eq!(words, vec!["rice", "whole", "flour"]);
    }
}
