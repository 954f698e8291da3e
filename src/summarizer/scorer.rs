//! Sentence scoring by summed word frequency

use crate::nlp::tokenizer::split_words;
use crate::summarizer::frequency::WordFrequency;
use crate::types::{ScoredSentence, Sentence};

/// Score every sentence, in input order.
///
/// A sentence's score is the sum of `freq` over its tokens. Tokens absent
/// from `freq` (stopwords, punctuation) contribute nothing, so a sentence
/// made only of them scores 0 but is still returned.
pub fn score_sentences(sentences: &[Sentence], freq: &WordFrequency) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| ScoredSentence {
            index: sentence.index,
            score: score_text(&sentence.text, freq),
        })
        .collect()
}

fn score_text(text: &str, freq: &WordFrequency) -> u64 {
    split_words(text)
        .iter()
        .map(|word| u64::from(freq.get(word)))
        .sum()
}
