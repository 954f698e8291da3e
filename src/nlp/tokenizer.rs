//! Sentence and word tokenization
//!
//! Boundaries follow Unicode UAX #29 (via `unicode-segmentation`). Sentence
//! boundaries are then repaired for common English abbreviations and
//! initials, which UAX #29 happily splits on ("Mr. Smith"). A boundary after
//! a non-title abbreviation or an initial is kept when the next word is a
//! capitalized function word ("... the U.S. The Fed ...").

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Sentence;

/// Titles (lowercase, trailing period removed); always followed by a name.
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "mt", "gen", "gov", "sen", "rep", "col", "lt", "sgt",
    "capt", "cmdr", "adm", "rev", "hon", "pres",
];

/// Abbreviations that may also end a sentence ("... in the U.S.").
const ABBREVIATIONS: &[&str] = &[
    "sr", "jr", "inc", "ltd", "corp", "co", "bros", "vs", "e.g", "i.e", "cf", "approx", "dept",
    "est", "fig", "u.s", "u.k", "u.n", "u.s.a", "jan", "feb", "mar", "apr", "aug", "sep", "sept",
    "oct", "nov", "dec",
];

/// Capitalized function words that begin a new sentence after an
/// abbreviation or initial rather than continue the current one.
const SENTENCE_STARTERS: &[&str] = &[
    "the", "a", "an", "it", "its", "he", "she", "they", "we", "i", "you", "this", "that",
    "these", "those", "there", "his", "her", "their", "our", "but", "and", "or", "so", "yet",
    "in", "on", "at", "as", "after", "before", "when", "while", "if", "however", "meanwhile",
    "still", "then", "now",
];

/// Split text into sentences in document order.
///
/// Sentence text is trimmed; `start`/`end` are byte offsets of the trimmed
/// text in `text`. Whitespace-only segments are dropped.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let segments: Vec<(usize, &str)> = text.split_sentence_bound_indices().collect();
    let mut sentences = Vec::new();
    let mut pending_start: Option<usize> = None;

    for (i, &(offset, segment)) in segments.iter().enumerate() {
        let start = pending_start.unwrap_or(offset);
        let end = offset + segment.len();

        let merge = segments
            .get(i + 1)
            .is_some_and(|&(_, next)| continues_sentence(segment, next));
        if merge {
            pending_start = Some(start);
            continue;
        }

        pending_start = None;
        push_trimmed(text, start, end, &mut sentences);
    }

    sentences
}

/// Split text into lowercase word and punctuation tokens.
///
/// Each punctuation character is its own token; whitespace is discarded.
pub fn split_words(text: &str) -> Vec<String> {
    word_segments(text).map(str::to_lowercase).collect()
}

/// Number of word and punctuation tokens in `text`.
pub fn word_count(text: &str) -> usize {
    word_segments(text).count()
}

/// Whether a token has no letter or digit (".", "—", "“").
pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

fn word_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
}

fn push_trimmed(text: &str, start: usize, end: usize, sentences: &mut Vec<Sentence>) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = raw.len() - raw.trim_start().len();
    let begin = start + lead;
    sentences.push(Sentence::new(
        trimmed,
        begin,
        begin + trimmed.len(),
        sentences.len(),
    ));
}

/// Whether a UAX #29 boundary between `segment` and `next` is spurious.
fn continues_sentence(segment: &str, next: &str) -> bool {
    let body = segment.trim_end();
    let Some(stem) = body.strip_suffix('.') else {
        return false;
    };

    // Lowercase continuation: "... approx. three times ..."
    if next
        .trim_start()
        .chars()
        .next()
        .is_some_and(char::is_lowercase)
    {
        return true;
    }

    let last_word = stem
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if last_word.is_empty() {
        return false;
    }

    let lower = last_word.to_lowercase();
    if TITLES.contains(&lower.as_str()) {
        return true;
    }

    let mut chars = last_word.chars();
    let is_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    if !is_initial && !ABBREVIATIONS.contains(&lower.as_str()) {
        return false;
    }

    let next_word = next
        .split(|c: char| !c.is_alphanumeric())
        .find(|w| !w.is_empty())
        .unwrap_or_default()
        .to_lowercase();
    !SENTENCE_STARTERS.contains(&next_word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("The cat sat. Dogs play in parks! Are parks nice?");
        assert_eq!(
            texts(&sentences),
            vec!["The cat sat.", "Dogs play in parks!", "Are parks nice?"]
        );
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
        }
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_split_sentences_offsets() {
        let text = "  First one.   Second one.  ";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 2);
        for sentence in &sentences {
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
    }

    #[test]
    fn test_split_sentences_abbreviations() {
        let sentences =
            split_sentences("Mr. Smith went to Washington. He met Dr. Jones at the U.S. Capitol.");
        assert_eq!(
            texts(&sentences),
            vec![
                "Mr. Smith went to Washington.",
                "He met Dr. Jones at the U.S. Capitol."
            ]
        );
    }

    #[test]
    fn test_split_sentences_initials() {
        let sentences = split_sentences("The novel was written by J. R. Tolkien. It sold well.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "The novel was written by J. R. Tolkien.");
    }

    #[test]
    fn test_split_sentences_abbreviation_at_sentence_end() {
        let sentences = split_sentences("Prices rose in the U.S. The Fed acted.");
        assert_eq!(
            texts(&sentences),
            vec!["Prices rose in the U.S.", "The Fed acted."]
        );

        let sentences = split_sentences("The plan needs a Plan B. It was approved.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_split_sentences_title_never_ends_sentence() {
        let sentences = split_sentences("She called Dr. The Hague office later.");
        assert_eq!(sentences.len(), 1);
    }

    /// An initial followed by a capitalized content word is read as part of
    /// a name, so "Plan B. Officials agreed." stays one sentence.
    #[test]
    fn test_split_sentences_initial_before_proper_noun_merges() {
        let sentences = split_sentences("They chose Plan B. Officials agreed.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_split_sentences_without_terminator() {
        let sentences = split_sentences("No punctuation at the end");
        assert_eq!(texts(&sentences), vec!["No punctuation at the end"]);
    }

    #[test]
    fn test_split_words_lowercases_and_separates_punctuation() {
        let words = split_words("Dogs and cats, Parks!");
        assert_eq!(words, vec!["dogs", "and", "cats", ",", "parks", "!"]);
    }

    #[test]
    fn test_split_words_keeps_contractions_and_numbers() {
        let words = split_words("It wasn't 3.5 percent.");
        assert_eq!(words, vec!["it", "wasn't", "3.5", "percent", "."]);
    }

    #[test]
    fn test_is_punctuation() {
        for token in [".", ",", "\u{2014}", "\u{201c}", "\u{201d}", "\u{2026}", "\u{00ab}"] {
            assert!(is_punctuation(token), "{token}");
        }
        assert!(!is_punctuation("u.s"));
        assert!(!is_punctuation("3.5"));
        assert!(!is_punctuation("caf\u{e9}"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("The cat sat."), 4);
        assert_eq!(word_count("  Hello,   world!  "), 4);
    }
}
