//! Edge cases: degenerate inputs must never panic

use seogen::analyzer::AnalysisEngine;
use seogen::reporter::html::{escape_html, markdown_to_html};
use seogen::{analyze_seo, generate_suggestions, ScoreCalculator, WordCountRange};
use std::io::Write;
use tempfile::NamedTempFile;

fn analyze_file(content: &str) -> seogen::AnalysisReport {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    AnalysisEngine::new()
        .with_keywords(vec!["seo".to_string()])
        .analyze(file.path())
        .unwrap()
}

#[test]
fn empty_file_no_panic() {
    let report = analyze_file("");
    assert_eq!(report.analysis.word_count, 0);
    assert_eq!(report.analysis.keyword_density[0].density, 0.0);
    assert!(report.score <= 100);
}

#[test]
fn whitespace_only_no_panic() {
    let report = analyze_file("   \n\n\t  \n");
    assert_eq!(report.analysis.word_count, 0);
    assert_eq!(report.analysis.average_sentence_length, 0.0);
}

#[test]
fn punctuation_only_no_panic() {
    let analysis = analyze_seo("?!... !!! ...", &["seo"]);
    assert_eq!(analysis.average_sentence_length, 0.0);
    let score = ScoreCalculator::calculate(&analysis, WordCountRange::default());
    assert!(score <= 100);
}

#[test]
fn unicode_text_no_panic() {
    let text = "# Über Datenschutz\n\nDatenschutz ist wichtig. 日本語のテキストです。 Ça marche très bien!";
    let analysis = analyze_seo(text, &["datenschutz", "über"]);
    assert_eq!(analysis.heading_structure.h1_count, 1);
    assert_eq!(analysis.density_for("datenschutz").unwrap().count, 2);
    assert!(analysis.readability.flesch_score >= 0.0);
    assert!(analysis.readability.flesch_score <= 100.0);
}

#[test]
fn empty_and_duplicate_keywords_are_skipped() {
    let analysis = analyze_seo("seo tips for seo teams", &["", "seo", "seo"]);
    assert_eq!(analysis.keyword_density.len(), 1);
    assert_eq!(analysis.keyword_density[0].count, 2);
}

#[test]
fn heading_prefixes_need_a_space() {
    let analysis = analyze_seo("#Title\n#### Deep\n## Real", &[] as &[&str]);
    assert_eq!(analysis.heading_structure.h1_count, 0);
    assert_eq!(analysis.heading_structure.h2_count, 1);
    assert_eq!(analysis.heading_structure.h3_count, 0);
}

#[test]
fn inverted_word_count_range_does_not_panic() {
    let analysis = analyze_seo("word ".repeat(1000).as_str(), &["word"]);
    let range = WordCountRange::new(2500, 800);
    assert!(ScoreCalculator::calculate(&analysis, range) <= 100);
    let _ = generate_suggestions(&analysis, range);
}

#[test]
fn non_utf8_file_is_an_error_not_a_panic() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
    let result = AnalysisEngine::new().analyze(file.path());
    assert!(result.is_err());
}

#[test]
fn markdown_converter_handles_odd_input() {
    assert_eq!(markdown_to_html(""), "");
    assert_eq!(markdown_to_html("**unclosed"), "<p>**unclosed</p>");
    assert!(markdown_to_html("- only item").contains("<li>only item</li>"));
    assert_eq!(escape_html(""), "");
}
