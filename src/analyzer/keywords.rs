//! Keyword density and frequency-based keyword extraction

use crate::KeywordDensity;
use std::collections::HashMap;

/// Maximum number of primary keywords reported
pub const MAX_PRIMARY_KEYWORDS: usize = 10;

/// Tokens must be longer than this (in characters) to count as keywords
pub const MIN_KEYWORD_LEN_EXCLUSIVE: usize = 3;

/// Function words excluded from keyword frequency analysis
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "been", "be", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "when",
    "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "same", "so", "than", "too", "very", "just",
    "there",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Count case-insensitive substring occurrences of each target keyword.
///
/// Empty keywords are skipped and repeated keywords keep their first position.
pub fn keyword_density<K: AsRef<str>>(
    text: &str,
    word_count: usize,
    target_keywords: &[K],
) -> Vec<KeywordDensity> {
    let lowered = text.to_lowercase();
    let mut entries: Vec<KeywordDensity> = Vec::with_capacity(target_keywords.len());

    for keyword in target_keywords {
        let keyword = keyword.as_ref();
        if keyword.is_empty() || entries.iter().any(|e| e.keyword == keyword) {
            continue;
        }
        let count = lowered.matches(keyword.to_lowercase().as_str()).count();
        entries.push(KeywordDensity {
            keyword: keyword.to_string(),
            count,
            density: density_percent(count, word_count),
        });
    }

    entries
}

/// `count / word_count * 100`, rounded to 2 decimals; 0 for empty text
pub fn density_percent(count: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let density = count as f64 / word_count as f64 * 100.0;
    (density * 100.0).round() / 100.0
}

/// Most frequent lowercase tokens that are not stop words and are longer than
/// three characters. Equal counts are ordered by first occurrence in the text.
pub fn primary_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    // word -> (count, index of first occurrence)
    let mut frequencies: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in lowered.split_whitespace().enumerate() {
        if word.chars().count() <= MIN_KEYWORD_LEN_EXCLUSIVE || is_stop_word(word) {
            continue;
        }
        frequencies.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = frequencies
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(MAX_PRIMARY_KEYWORDS)
        .map(|(word, _, _)| word.to_string())
        .collect()
}
