//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::{AnalysisReport, ScoreBreakdown};
use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Titles listed after a generation run
pub const SAMPLE_TITLES: usize = 5;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

/// What a `generate` run produced
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub generated: usize,
    pub failed: usize,
    pub elapsed: Duration,
    pub output_dir: PathBuf,
    pub template_counts: BTreeMap<String, usize>,
    /// Mean SEO score when articles were optimized
    pub average_score: Option<f64>,
    pub titles: Vec<String>,
    pub manifest_path: Option<PathBuf>,
}

impl GenerationSummary {
    pub fn articles_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.generated as f64 / secs
        } else {
            0.0
        }
    }
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis
    pub fn report(&self, report: &AnalysisReport) {
        self.print_header(report);
        self.print_score(report);
        self.print_breakdown(&report.breakdown);
        if self.verbose {
            self.print_keywords(report);
        }
        self.print_suggestions(report);
        println!();
    }

    /// Report multiple analyses with summary
    pub fn report_many(&self, reports: &[AnalysisReport], stats: &AggregateStats) {
        for report in reports {
            self.report(report);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, report: &AnalysisReport) {
        println!(
            "{}: {}/100",
            report.file_path.display(),
            self.colorize_score(report.score)
        );
    }

    /// Summary table after generating articles
    pub fn report_generation(&self, summary: &GenerationSummary) {
        for line in self.generation_lines(summary) {
            println!("{}", line);
        }
    }

    fn generation_lines(&self, summary: &GenerationSummary) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            self.paint("✓ Generation Complete!", |s| s.green().bold()),
            String::new(),
            self.paint("Generation Summary", |s| s.bold()),
            "─".repeat(44),
        ];
        for (metric, value) in summary_rows(summary) {
            lines.push(format!(
                "   {}{}",
                self.paint(&format!("{:<22}", metric), |s| s.cyan()),
                self.paint(&value, |s| s.green())
            ));
        }
        lines.push(String::new());

        if !summary.titles.is_empty() {
            lines.push(self.paint("Sample Generated Titles:", |s| s.bold()));
            for title in summary.titles.iter().take(SAMPLE_TITLES) {
                lines.push(format!("   • {}", title));
            }
            if summary.titles.len() > SAMPLE_TITLES {
                let more = format!("... and {} more", summary.titles.len() - SAMPLE_TITLES);
                lines.push(format!("   {}", self.paint(&more, |s| s.dimmed())));
            }
        }

        if let Some(ref manifest) = summary.manifest_path {
            lines.push(String::new());
            let saved = format!("Manifest saved to: {}", manifest.display());
            lines.push(self.paint(&saved, |s| s.dimmed()));
        }
        lines
    }

    /// Apply `style` only when colors are enabled
    fn paint(&self, text: &str, style: impl FnOnce(ColoredString) -> ColoredString) -> String {
        if self.use_colors {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    fn print_header(&self, report: &AnalysisReport) {
        println!();
        println!(
            "{}",
            format!("SEO Analysis: {}", report.file_path.display()).bold()
        );
        let analysis = &report.analysis;
        println!(
            "   Words: {} | Sentences: {} | H1: {} | H2: {} | H3: {}",
            analysis.word_count,
            analysis.readability.sentence_count,
            analysis.heading_structure.h1_count,
            analysis.heading_structure.h2_count,
            analysis.heading_structure.h3_count
        );
        println!(
            "   Flesch: {:.1} | Avg sentence: {:.1} words",
            analysis.readability.flesch_score, analysis.average_sentence_length
        );
        println!();
    }

    fn print_score(&self, report: &AnalysisReport) {
        println!("   Score: {}", self.create_score_bar(report.score));
        println!();
    }

    fn print_breakdown(&self, breakdown: &ScoreBreakdown) {
        println!("   {}", "Score Breakdown:".bold());
        for (name, score, max) in breakdown_rows(breakdown) {
            let bar = self.create_mini_bar(score, max);
            let score_str = format!("{:>2}/{}", score, max);
            let colored_score = if score == max {
                score_str.green()
            } else if score > 0 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", bar, colored_score, name);
        }
        println!();
    }

    fn print_keywords(&self, report: &AnalysisReport) {
        let analysis = &report.analysis;
        if !analysis.keyword_density.is_empty() {
            println!("   {}", "Keyword Density:".bold());
            for entry in &analysis.keyword_density {
                println!(
                    "   {:<24} {:>4} hits {:>6.2}%",
                    entry.keyword, entry.count, entry.density
                );
            }
            println!();
        }
        if !analysis.primary_keywords.is_empty() {
            println!(
                "   {} {}",
                "Primary keywords:".bold(),
                analysis.primary_keywords.join(", ").dimmed()
            );
            println!();
        }
    }

    fn print_suggestions(&self, report: &AnalysisReport) {
        if report.suggestions.is_empty() {
            println!("   {} No suggestions", "✓".green());
            return;
        }
        println!("   {}", "Suggestions:".bold());
        for suggestion in &report.suggestions {
            println!("   {} {}", "→".cyan(), suggestion);
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Files analyzed:    {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:     {}",
            self.colorize_score(stats.average_score)
        );
        println!("   Total words:       {}", stats.total_words);
        println!("   Total suggestions: {}", stats.total_suggestions);
        println!();
    }

    fn colorize_score(&self, score: u8) -> String {
        let s = score.to_string();
        if score >= 80 {
            self.paint(&s, |s| s.green().bold())
        } else if score >= 60 {
            self.paint(&s, |s| s.yellow())
        } else {
            self.paint(&s, |s| s.red())
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let bar = score_bar(score);

        if self.use_colors {
            if score >= 80 {
                bar.green().to_string()
            } else if score >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: u8, max: u8) -> String {
        let filled = if max == 0 {
            0
        } else {
            (score.min(max) as usize * 10) / max as usize
        };
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(10 - filled))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 20-cell bar with the percentage, e.g. `[████░░…]  20%`
fn score_bar(score: u8) -> String {
    let score = score.min(100);
    let filled = (score as usize * 20) / 100;
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(20 - filled),
        score
    )
}

/// (label, points, max points) per scoring signal
fn breakdown_rows(breakdown: &ScoreBreakdown) -> [(&'static str, u8, u8); 6] {
    [
        ("Word Count", breakdown.word_count, 20),
        ("Keyword Density", breakdown.keyword_density, 20),
        ("Headings", breakdown.headings, 15),
        ("Readability", breakdown.readability, 20),
        ("Meta Description", breakdown.meta_description, 10),
        ("Sentence Length", breakdown.sentence_length, 15),
    ]
}

fn summary_rows(summary: &GenerationSummary) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Articles Generated".to_string(), summary.generated.to_string()),
        (
            "Time Taken".to_string(),
            format!("{:.2} seconds", summary.elapsed.as_secs_f64()),
        ),
        (
            "Articles per Second".to_string(),
            format!("{:.2}", summary.articles_per_second()),
        ),
        (
            "Output Directory".to_string(),
            summary.output_dir.display().to_string(),
        ),
    ];
    if summary.failed > 0 {
        rows.push(("Failed".to_string(), summary.failed.to_string()));
    }
    for (template, count) in &summary.template_counts {
        rows.push((format!("  - {}", template), count.to_string()));
    }
    if let Some(score) = summary.average_score {
        rows.push(("Average SEO Score".to_string(), format!("{:.1}/100", score)));
    }
    rows
}
