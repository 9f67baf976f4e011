//! Readability metrics: syllable estimation and Flesch Reading Ease

use crate::ReadabilityMetrics;
use once_cell::sync::Lazy;
use regex::Regex;

pub const VOWELS: &str = "aeiouy";

pub const FLESCH_BASE: f64 = 206.835;
pub const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
pub const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;
pub const FLESCH_MIN: f64 = 0.0;
pub const FLESCH_MAX: f64 = 100.0;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Approximate syllables: vowel groups, minus a trailing silent `e`, at least 1
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count: usize = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = VOWELS.contains(ch);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// Flesch Reading Ease clamped to [0, 100]; 0 when there are no sentences or words
pub fn flesch_reading_ease(sentences: usize, words: usize, syllables: usize) -> f64 {
    if sentences == 0 || words == 0 {
        return 0.0;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let score = FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * words_per_sentence
        - FLESCH_SYLLABLE_WEIGHT * syllables_per_word;
    score.clamp(FLESCH_MIN, FLESCH_MAX)
}

/// Readability of a text. `sentence_count` is the raw split length on runs of
/// `.`, `!`, `?`, empty fragments included.
pub fn calculate_readability(text: &str) -> ReadabilityMetrics {
    let sentence_count = SENTENCE_BOUNDARY.split(text).count();
    let words: Vec<&str> = text.split_whitespace().collect();
    let syllable_count = words.iter().map(|w| count_syllables(w)).sum();

    ReadabilityMetrics {
        flesch_score: flesch_reading_ease(sentence_count, words.len(), syllable_count),
        sentence_count,
        word_count: words.len(),
        syllable_count,
    }
}

/// Average words per sentence over non-empty sentences only; 0 when none
pub fn average_sentence_length(text: &str) -> f64 {
    let sentences: Vec<&str> = SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() {
        return 0.0;
    }

    let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    total_words as f64 / sentences.len() as f64
}
