//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::{AnalysisReport, Article};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single analysis as JSON
    pub fn report(&self, report: &AnalysisReport) -> String {
        self.to_json(report, "{}")
    }

    /// Report with summary
    pub fn report_with_summary(&self, reports: &[AnalysisReport], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: reports,
            summary: JsonSummary {
                files_analyzed: stats.files_analyzed,
                average_score: stats.average_score,
                total_words: stats.total_words,
                total_suggestions: stats.total_suggestions,
            },
        };
        self.to_json(&output, "{}")
    }

    /// Serialize a generated article
    pub fn article(&self, article: &Article) -> String {
        self.to_json(article, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [AnalysisReport],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files_analyzed: usize,
    average_score: u8,
    total_words: usize,
    total_suggestions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalysisEngine;
    use crate::{ArticleMeta, Section, Variables};
    use std::path::PathBuf;

    fn make_report(path: &str, text: &str) -> AnalysisReport {
        AnalysisEngine::new()
            .with_keywords(vec!["privacy".to_string()])
            .analyze_text(PathBuf::from(path), text)
    }

    #[test]
    fn test_json_single_report_has_expected_keys() {
        let report = make_report("post.md", "# Privacy\n\nPrivacy matters.");
        let json = JsonReporter::new().report(&report);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["filePath"], "post.md");
        assert!(parsed.get("score").is_some());
        assert!(parsed["breakdown"].get("wordCount").is_some());
        assert!(parsed["analysis"]["headingStructure"]["hasH1"].as_bool().unwrap());
        assert_eq!(parsed["analysis"]["keywordDensity"][0]["keyword"], "privacy");
        assert!(parsed["suggestions"].is_array());
    }

    #[test]
    fn test_json_pretty_output() {
        let report = make_report("post.md", "text");
        let json = JsonReporter::new().pretty().report(&report);
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn test_json_report_with_summary() {
        let reports = vec![make_report("a.md", "one two"), make_report("b.md", "three")];
        let stats = AnalysisEngine::aggregate_stats(&reports);
        let json = JsonReporter::new().report_with_summary(&reports, &stats);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let results = parsed["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["filePath"], "a.md");
        assert_eq!(results[1]["filePath"], "b.md");
        assert_eq!(parsed["summary"]["filesAnalyzed"], 2);
        assert_eq!(parsed["summary"]["totalWords"], 3);
    }

    #[test]
    fn test_article_json_shape() {
        let article = Article {
            id: "article_0001".to_string(),
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            intro: "Intro".to_string(),
            template_type: "comparison".to_string(),
            generated_at: "2025-01-01T00:00:00+00:00".to_string(),
            content_sections: vec![Section::Verdict {
                title: "Final Verdict".to_string(),
                content: "A wins".to_string(),
            }],
            meta: ArticleMeta::default(),
            conclusion: "Bye".to_string(),
            key_takeaways: vec![],
            variables: Variables::new().with("product1", "A"),
            seo: None,
        };
        let json = JsonReporter::new().pretty().article(&article);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["templateType"], "comparison");
        assert_eq!(parsed["contentSections"][0]["type"], "verdict");
        assert_eq!(parsed["variables"]["product1"], "A");
        assert!(parsed.get("seo").is_none());

        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}
