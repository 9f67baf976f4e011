//! Human-readable improvement suggestions
//!
//! Each check is independent; a signal already in range yields nothing.

use super::scoring::{FLESCH_FAIR, IDEAL_DENSITY_MAX, LOW_DENSITY, MIN_H2_COUNT};
use crate::{SeoAnalysis, WordCountRange};

/// Average sentence length above which sentences are considered too long
pub const LONG_SENTENCE_THRESHOLD: f64 = 25.0;
/// Average sentence length below which the text reads choppy
pub const SHORT_SENTENCE_THRESHOLD: f64 = 10.0;

/// Generate suggestions in a fixed order: word count, keywords (in analysis
/// order), H1, H2, readability, sentence length.
pub fn generate_suggestions(analysis: &SeoAnalysis, range: WordCountRange) -> Vec<String> {
    let mut suggestions = Vec::new();

    if analysis.word_count < range.min {
        suggestions.push(format!(
            "Increase word count to at least {} words",
            range.min
        ));
    } else if analysis.word_count > range.max {
        suggestions.push(format!(
            "Consider reducing word count to under {} words",
            range.max
        ));
    }

    for entry in &analysis.keyword_density {
        if entry.density < LOW_DENSITY {
            suggestions.push(format!(
                "Increase usage of keyword '{}' (current: {}%)",
                entry.keyword,
                format_density(entry.density)
            ));
        } else if entry.density > IDEAL_DENSITY_MAX {
            suggestions.push(format!(
                "Reduce keyword stuffing for '{}' (current: {}%)",
                entry.keyword,
                format_density(entry.density)
            ));
        }
    }

    let headings = &analysis.heading_structure;
    if !headings.has_h1 {
        suggestions.push("Add a clear H1 heading".to_string());
    }
    if headings.h2_count < MIN_H2_COUNT {
        suggestions.push("Add more H2 subheadings to improve structure".to_string());
    }

    if analysis.readability.flesch_score < FLESCH_FAIR {
        suggestions.push("Simplify language to improve readability".to_string());
    }

    if analysis.average_sentence_length > LONG_SENTENCE_THRESHOLD {
        suggestions.push("Use shorter sentences for better readability".to_string());
    } else if analysis.average_sentence_length < SHORT_SENTENCE_THRESHOLD {
        suggestions.push("Vary sentence length for better flow".to_string());
    }

    suggestions
}

/// Whole percentages keep one decimal (`0.0`, `100.0`)
fn format_density(density: f64) -> String {
    if density.fract() == 0.0 {
        format!("{:.1}", density)
    } else {
        density.to_string()
    }
}
