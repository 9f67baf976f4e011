//! seogen: template-driven SEO article generator
//!
//! This library fills article templates from configured variable pools,
//! assembles per-template content sections, and scores the result with a
//! keyword-density / readability / heading-structure heuristic before
//! rendering it as Markdown, HTML or JSON.

pub mod analyzer;
pub mod batch;
pub mod config;
pub mod generator;
pub mod logging;
pub mod optimizer;
pub mod output;
pub mod reporter;

mod text;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub use analyzer::{analyze_seo, generate_suggestions, ScoreCalculator};

/// Accepted article word count band used by the scorer and suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountRange {
    pub min: usize,
    pub max: usize,
}

impl WordCountRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

impl Default for WordCountRange {
    fn default() -> Self {
        Self {
            min: analyzer::scoring::DEFAULT_MIN_WORD_COUNT,
            max: analyzer::scoring::DEFAULT_MAX_WORD_COUNT,
        }
    }
}

/// Occurrences of one target keyword in the analyzed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    /// Keyword as given by the caller (original case)
    pub keyword: String,
    /// Non-overlapping, case-insensitive substring occurrences
    pub count: usize,
    /// Percentage of total words, rounded to 2 decimals
    pub density: f64,
}

/// Markdown heading counts (`# `, `## `, `### ` line prefixes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStructure {
    pub has_h1: bool,
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    /// At most one H1
    pub proper_hierarchy: bool,
}

impl HeadingStructure {
    pub fn from_counts(h1_count: usize, h2_count: usize, h3_count: usize) -> Self {
        Self {
            has_h1: h1_count > 0,
            h1_count,
            h2_count,
            h3_count,
            proper_hierarchy: h1_count <= 1,
        }
    }
}

/// Flesch Reading Ease and the counts it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityMetrics {
    /// Clamped to [0, 100]
    pub flesch_score: f64,
    /// Raw split length on `[.!?]+`, empty fragments included
    pub sentence_count: usize,
    pub word_count: usize,
    pub syllable_count: usize,
}

/// Full text analysis of one article body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    pub word_count: usize,
    /// One entry per distinct, non-empty target keyword, in input order
    pub keyword_density: Vec<KeywordDensity>,
    /// Most frequent non-stop-word tokens longer than three characters
    pub primary_keywords: Vec<String>,
    pub heading_structure: HeadingStructure,
    pub readability: ReadabilityMetrics,
    pub has_meta_description: bool,
    /// Words per non-empty sentence
    pub average_sentence_length: f64,
}

impl SeoAnalysis {
    /// Look up the density entry for a keyword (exact match)
    pub fn density_for(&self, keyword: &str) -> Option<&KeywordDensity> {
        self.keyword_density.iter().find(|k| k.keyword == keyword)
    }
}

/// Points awarded per signal; see `analyzer::scoring` for the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// 5, 10 or 20
    pub word_count: u8,
    /// 0, 10 or 20
    pub keyword_density: u8,
    /// 0-15
    pub headings: u8,
    /// 0, 10 or 20
    pub readability: u8,
    /// 0 or 10
    pub meta_description: u8,
    /// 0, 8 or 15
    pub sentence_length: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        let sum = self.word_count as u16
            + self.keyword_density as u16
            + self.headings as u16
            + self.readability as u16
            + self.meta_description as u16
            + self.sentence_length as u16;
        sum.min(analyzer::scoring::MAX_SCORE as u16) as u8
    }
}

/// Result of analyzing one text file with the `analyze` command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub file_path: PathBuf,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub analysis: SeoAnalysis,
    pub suggestions: Vec<String>,
}

/// Placeholder values used to fill `{name}` patterns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, String>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parse a variable as a count (e.g. `number` for listicles)
    pub fn number(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every `{key}` of a known variable; unknown placeholders stay verbatim
    pub fn substitute(&self, pattern: &str) -> String {
        let mut out = pattern.to_string();
        for (key, value) in &self.0 {
            let placeholder = format!("{{{}}}", key);
            if out.contains(&placeholder) {
                out = out.replace(&placeholder, value);
            }
        }
        out
    }
}

/// A generated article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub intro: String,
    /// Template name from config (e.g. "listicle", "how_to")
    pub template_type: String,
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub content_sections: Vec<Section>,
    pub meta: ArticleMeta,
    pub conclusion: String,
    pub key_takeaways: Vec<String>,
    #[serde(default)]
    pub variables: Variables,
    /// Present once the article went through the optimizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    pub description: String,
    pub keywords: Vec<String>,
}

/// Content section, tagged by `type` in serialized form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    ListItem {
        number: usize,
        title: String,
        content: String,
        #[serde(default)]
        benefits: Vec<String>,
    },
    Prerequisites {
        title: String,
        items: Vec<String>,
    },
    Steps {
        title: String,
        steps: Vec<Step>,
    },
    Tips {
        title: String,
        tips: Vec<String>,
    },
    ComparisonTable {
        title: String,
        table: ComparisonTable,
    },
    Analysis {
        title: String,
        subsections: Vec<Subsection>,
    },
    Verdict {
        title: String,
        content: String,
    },
    Overview {
        title: String,
        content: String,
    },
    Chapter {
        title: String,
        content: String,
        #[serde(default)]
        subsections: Vec<String>,
    },
    Resources {
        title: String,
        resources: Vec<Resource>,
    },
    /// Generic titled paragraph
    Section {
        title: String,
        content: String,
    },
}

impl Section {
    pub fn title(&self) -> &str {
        match self {
            Section::ListItem { title, .. }
            | Section::Prerequisites { title, .. }
            | Section::Steps { title, .. }
            | Section::Tips { title, .. }
            | Section::ComparisonTable { title, .. }
            | Section::Analysis { title, .. }
            | Section::Verdict { title, .. }
            | Section::Overview { title, .. }
            | Section::Chapter { title, .. }
            | Section::Resources { title, .. }
            | Section::Section { title, .. } => title,
        }
    }

    /// Body paragraph, for section kinds that carry one
    pub fn content(&self) -> Option<&str> {
        match self {
            Section::ListItem { content, .. }
            | Section::Verdict { content, .. }
            | Section::Overview { content, .. }
            | Section::Chapter { content, .. }
            | Section::Section { content, .. } => Some(content),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// SEO data attached to an article by the optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    /// Composite score (0-100)
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub suggestions: Vec<String>,
    pub analysis: SeoAnalysis,
    /// schema.org JSON-LD object
    pub schema_markup: serde_json::Value,
    pub internal_links: Vec<InternalLink>,
}

/// Suggested link to related content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalLink {
    pub anchor_text: String,
    pub suggested_url: String,
    pub reason: String,
}
