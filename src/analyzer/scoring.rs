//! Composite SEO score (0-100)
//!
//! Six independent signals each contribute a capped number of points; the sum
//! is capped at [`MAX_SCORE`].

use crate::{ScoreBreakdown, SeoAnalysis, WordCountRange};

pub const MAX_SCORE: u8 = 100;

pub const DEFAULT_MIN_WORD_COUNT: usize = 800;
pub const DEFAULT_MAX_WORD_COUNT: usize = 2500;

/// Ideal keyword density band (percent, inclusive)
pub const IDEAL_DENSITY_MIN: f64 = 1.5;
pub const IDEAL_DENSITY_MAX: f64 = 3.0;
/// Below this density a keyword is reported as underused
pub const LOW_DENSITY: f64 = 1.0;

pub const MIN_H2_COUNT: usize = 3;

/// Flesch bands
pub const FLESCH_EASY: f64 = 60.0;
pub const FLESCH_FAIR: f64 = 40.0;

/// Average sentence length bands (words, inclusive)
pub const SENTENCE_LENGTH_IDEAL_MIN: f64 = 15.0;
pub const SENTENCE_LENGTH_IDEAL_MAX: f64 = 20.0;
pub const SENTENCE_LENGTH_OK_MIN: f64 = 10.0;
pub const SENTENCE_LENGTH_OK_MAX: f64 = 25.0;

const WORD_COUNT_IN_RANGE_POINTS: u8 = 20;
const WORD_COUNT_TOO_LONG_POINTS: u8 = 10;
const WORD_COUNT_TOO_SHORT_POINTS: u8 = 5;
const DENSITY_IDEAL_POINTS: u8 = 20;
const DENSITY_PRESENT_POINTS: u8 = 10;
const HEADING_POINTS: u8 = 5;
const READABILITY_EASY_POINTS: u8 = 20;
const READABILITY_FAIR_POINTS: u8 = 10;
const META_DESCRIPTION_POINTS: u8 = 10;
const SENTENCE_LENGTH_IDEAL_POINTS: u8 = 15;
const SENTENCE_LENGTH_OK_POINTS: u8 = 8;

/// Calculator for SEO scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Overall score, `min(sum of signal points, 100)`
    pub fn calculate(analysis: &SeoAnalysis, range: WordCountRange) -> u8 {
        Self::breakdown(analysis, range).total()
    }

    /// Points per signal
    pub fn breakdown(analysis: &SeoAnalysis, range: WordCountRange) -> ScoreBreakdown {
        ScoreBreakdown {
            word_count: Self::word_count_points(analysis.word_count, range),
            keyword_density: Self::keyword_density_points(analysis),
            headings: Self::heading_points(analysis),
            readability: Self::readability_points(analysis.readability.flesch_score),
            meta_description: if analysis.has_meta_description {
                META_DESCRIPTION_POINTS
            } else {
                0
            },
            sentence_length: Self::sentence_length_points(analysis.average_sentence_length),
        }
    }

    fn word_count_points(word_count: usize, range: WordCountRange) -> u8 {
        if word_count < range.min {
            WORD_COUNT_TOO_SHORT_POINTS
        } else if word_count <= range.max {
            WORD_COUNT_IN_RANGE_POINTS
        } else {
            WORD_COUNT_TOO_LONG_POINTS
        }
    }

    fn keyword_density_points(analysis: &SeoAnalysis) -> u8 {
        let ideal = analysis
            .keyword_density
            .iter()
            .any(|k| (IDEAL_DENSITY_MIN..=IDEAL_DENSITY_MAX).contains(&k.density));

        if ideal {
            DENSITY_IDEAL_POINTS
        } else if !analysis.keyword_density.is_empty() {
            DENSITY_PRESENT_POINTS
        } else {
            0
        }
    }

    fn heading_points(analysis: &SeoAnalysis) -> u8 {
        let headings = &analysis.heading_structure;
        let mut points = 0;
        if headings.has_h1 {
            points += HEADING_POINTS;
        }
        if headings.h2_count >= MIN_H2_COUNT {
            points += HEADING_POINTS;
        }
        if headings.proper_hierarchy {
            points += HEADING_POINTS;
        }
        points
    }

    fn readability_points(flesch_score: f64) -> u8 {
        if flesch_score >= FLESCH_EASY {
            READABILITY_EASY_POINTS
        } else if flesch_score >= FLESCH_FAIR {
            READABILITY_FAIR_POINTS
        } else {
            0
        }
    }

    fn sentence_length_points(average: f64) -> u8 {
        if (SENTENCE_LENGTH_IDEAL_MIN..=SENTENCE_LENGTH_IDEAL_MAX).contains(&average) {
            SENTENCE_LENGTH_IDEAL_POINTS
        } else if (SENTENCE_LENGTH_OK_MIN..=SENTENCE_LENGTH_OK_MAX).contains(&average) {
            SENTENCE_LENGTH_OK_POINTS
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeadingStructure, KeywordDensity, ReadabilityMetrics};

    fn keyword(density: f64) -> KeywordDensity {
        KeywordDensity {
            keyword: "seo".to_string(),
            count: 1,
            density,
        }
    }

    fn strong_analysis() -> SeoAnalysis {
        SeoAnalysis {
            word_count: 1000,
            keyword_density: vec![keyword(2.0)],
            primary_keywords: vec![],
            heading_structure: HeadingStructure::from_counts(1, 3, 0),
            readability: ReadabilityMetrics {
                flesch_score: 65.0,
                ..ReadabilityMetrics::default()
            },
            has_meta_description: true,
            average_sentence_length: 18.0,
        }
    }

    #[test]
    fn test_perfect_analysis_scores_100() {
        let analysis = strong_analysis();
        let breakdown = ScoreCalculator::breakdown(&analysis, WordCountRange::default());
        assert_eq!(breakdown.word_count, 20);
        assert_eq!(breakdown.keyword_density, 20);
        assert_eq!(breakdown.headings, 15);
        assert_eq!(breakdown.readability, 20);
        assert_eq!(breakdown.meta_description, 10);
        assert_eq!(breakdown.sentence_length, 15);
        assert_eq!(
            ScoreCalculator::calculate(&analysis, WordCountRange::default()),
            100
        );
    }

    #[test]
    fn test_default_analysis_scores_minimum() {
        // 5 for short text + 5 for proper hierarchy (zero H1s)
        let analysis = SeoAnalysis {
            heading_structure: HeadingStructure::from_counts(0, 0, 0),
            ..SeoAnalysis::default()
        };
        assert_eq!(
            ScoreCalculator::calculate(&analysis, WordCountRange::default()),
            10
        );
    }

    #[test]
    fn test_word_count_bands() {
        let range = WordCountRange::new(800, 2500);
        assert_eq!(ScoreCalculator::word_count_points(799, range), 5);
        assert_eq!(ScoreCalculator::word_count_points(800, range), 20);
        assert_eq!(ScoreCalculator::word_count_points(2500, range), 20);
        assert_eq!(ScoreCalculator::word_count_points(2501, range), 10);
    }

    #[test]
    fn test_keyword_density_bands() {
        let mut analysis = strong_analysis();
        analysis.keyword_density = vec![keyword(0.5), keyword(1.5)];
        assert_eq!(ScoreCalculator::keyword_density_points(&analysis), 20);

        analysis.keyword_density = vec![keyword(3.0)];
        assert_eq!(ScoreCalculator::keyword_density_points(&analysis), 20);

        analysis.keyword_density = vec![keyword(3.01), keyword(0.2)];
        assert_eq!(ScoreCalculator::keyword_density_points(&analysis), 10);

        analysis.keyword_density.clear();
        assert_eq!(ScoreCalculator::keyword_density_points(&analysis), 0);
    }

    #[test]
    fn test_readability_bands() {
        assert_eq!(ScoreCalculator::readability_points(60.0), 20);
        assert_eq!(ScoreCalculator::readability_points(59.9), 10);
        assert_eq!(ScoreCalculator::readability_points(40.0), 10);
        assert_eq!(ScoreCalculator::readability_points(39.9), 0);
    }

    #[test]
    fn test_sentence_length_bands() {
        assert_eq!(ScoreCalculator::sentence_length_points(15.0), 15);
        assert_eq!(ScoreCalculator::sentence_length_points(20.0), 15);
        assert_eq!(ScoreCalculator::sentence_length_points(21.0), 8);
        assert_eq!(ScoreCalculator::sentence_length_points(10.0), 8);
        assert_eq!(ScoreCalculator::sentence_length_points(25.0), 8);
        assert_eq!(ScoreCalculator::sentence_length_points(9.9), 0);
        assert_eq!(ScoreCalculator::sentence_length_points(25.1), 0);
    }

    #[test]
    fn test_heading_points() {
        let mut analysis = strong_analysis();
        analysis.heading_structure = HeadingStructure::from_counts(2, 5, 0);
        // has H1 + enough H2s, but two H1s break the hierarchy
        assert_eq!(ScoreCalculator::heading_points(&analysis), 10);

        analysis.heading_structure = HeadingStructure::from_counts(1, 2, 4);
        assert_eq!(ScoreCalculator::heading_points(&analysis), 10);
    }

    #[test]
    fn test_more_h2_never_lowers_score() {
        let mut analysis = strong_analysis();
        analysis.heading_structure = HeadingStructure::from_counts(1, 2, 0);
        let before = ScoreCalculator::calculate(&analysis, WordCountRange::default());
        analysis.heading_structure = HeadingStructure::from_counts(1, 3, 0);
        let after = ScoreCalculator::calculate(&analysis, WordCountRange::default());
        assert!(after >= before);
        assert_eq!(after - before, 5);
    }

    #[test]
    fn test_custom_word_range() {
        let mut analysis = strong_analysis();
        analysis.word_count = 400;
        let range = WordCountRange::new(300, 2000);
        assert_eq!(ScoreCalculator::breakdown(&analysis, range).word_count, 20);
        assert_eq!(
            ScoreCalculator::breakdown(&analysis, WordCountRange::default()).word_count,
            5
        );
    }
}
