//! Analysis engine - runs every text metric and scores files

use crate::{AnalysisReport, SeoAnalysis, WordCountRange};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::headings::analyze_headings;
use super::keywords::{keyword_density, primary_keywords};
use super::readability::{average_sentence_length, calculate_readability};
use super::{generate_suggestions, ScoreCalculator};

/// Analyze a flattened article body against a list of target keywords.
///
/// Pure and total: empty text yields a zeroed analysis.
pub fn analyze_seo<K: AsRef<str>>(text: &str, target_keywords: &[K]) -> SeoAnalysis {
    let word_count = text.split_whitespace().count();

    SeoAnalysis {
        word_count,
        keyword_density: keyword_density(text, word_count, target_keywords),
        primary_keywords: primary_keywords(text),
        heading_structure: analyze_headings(text),
        readability: calculate_readability(text),
        has_meta_description: !text.is_empty(),
        average_sentence_length: average_sentence_length(text),
    }
}

/// Analyzes text files (Markdown or plain text) with a fixed keyword list
pub struct AnalysisEngine {
    /// Target keywords checked in every file
    keywords: Vec<String>,
    /// Word count band used for scoring
    range: WordCountRange,
}

impl AnalysisEngine {
    /// Create a new analysis engine with default word count band and no keywords
    pub fn new() -> Self {
        Self {
            keywords: Vec::new(),
            range: WordCountRange::default(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_word_count_range(mut self, range: WordCountRange) -> Self {
        self.range = range;
        self
    }

    /// Read and analyze one file
    pub fn analyze(&self, path: &Path) -> Result<AnalysisReport> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(self.analyze_text(path.to_path_buf(), &text))
    }

    /// Analyze in-memory text, labelled with `path` in the report
    pub fn analyze_text(&self, path: PathBuf, text: &str) -> AnalysisReport {
        let analysis = analyze_seo(text, &self.keywords);
        let breakdown = ScoreCalculator::breakdown(&analysis, self.range);
        let suggestions = generate_suggestions(&analysis, self.range);
        tracing::debug!(
            file = %path.display(),
            words = analysis.word_count,
            score = breakdown.total(),
            "analyzed"
        );

        AnalysisReport {
            file_path: path,
            score: breakdown.total(),
            breakdown,
            analysis,
            suggestions,
        }
    }

    /// Aggregate statistics across several reports
    pub fn aggregate_stats(reports: &[AnalysisReport]) -> AggregateStats {
        if reports.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = reports.iter().map(|r| r.score as u32).sum();
        AggregateStats {
            files_analyzed: reports.len(),
            average_score: (total_score / reports.len() as u32) as u8,
            total_words: reports.iter().map(|r| r.analysis.word_count).sum(),
            total_suggestions: reports.iter().map(|r| r.suggestions.len()).sum(),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary over a multi-file analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub files_analyzed: usize,
    pub average_score: u8,
    pub total_words: usize,
    pub total_suggestions: usize,
}
