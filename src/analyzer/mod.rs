//! Analyzer module - SEO text metrics, composite score and suggestions

pub mod engine;
pub mod headings;
pub mod keywords;
pub mod readability;
pub mod scoring;
pub mod suggestions;

pub use engine::{analyze_seo, AnalysisEngine};
pub use scoring::ScoreCalculator;
pub use suggestions::generate_suggestions;
