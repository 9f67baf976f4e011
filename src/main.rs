//! seogen: SEO article generator CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use seogen::analyzer::AnalysisEngine;
use seogen::batch::{BatchOptions, BatchProcessor};
use seogen::config::{load_config, write_default_config, Config, DEFAULT_CONFIG_PATH};
use seogen::generator::ArticleGenerator;
use seogen::logging::{init_logging, Verbosity};
use seogen::optimizer::SeoOptimizer;
use seogen::output::{ArticleWriter, OutputFormat, DEFAULT_OUTPUT_DIR};
use seogen::reporter::{ConsoleReporter, GenerationSummary, HtmlConverter, JsonReporter};
use seogen::AnalysisReport;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use walkdir::WalkDir;

/// Extensions picked up when analyzing a directory
const TEXT_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// seogen: generate SEO articles from templates and score them
#[derive(Parser, Debug)]
#[command(name = "seogen")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of articles to generate
    #[arg(long, short = 'n', default_value_t = 10)]
    count: usize,

    /// Path to config file
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output directory
    #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::All)]
    format: OutputFormat,

    /// Generate one article at a time
    #[arg(long)]
    sequential: bool,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(long, short, value_name = "N")]
    workers: Option<usize>,

    /// Generate only this template type
    #[arg(long, short)]
    template: Option<String>,

    /// Score each article and attach SEO metadata
    #[arg(long)]
    optimize_seo: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze Markdown or text files and score their SEO
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Target keyword (repeatable)
        #[arg(long = "keyword", short = 'k')]
        keywords: Vec<String>,

        /// Minimum word count for full points
        #[arg(long)]
        min_words: Option<usize>,

        /// Maximum word count for full points
        #[arg(long)]
        max_words: Option<usize>,

        /// Read word count limits from this config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Minimum score threshold (exit 1 if below)
        #[arg(long, short)]
        threshold: Option<u8>,

        /// Number of parallel threads (default: number of CPU cores)
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,

        /// Quiet mode (just scores)
        #[arg(long, short)]
        quiet: bool,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
    },

    /// Convert a Markdown file to a full HTML page
    Render {
        /// Markdown file
        markdown: PathBuf,

        /// Output file (default: input with .html extension)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check a config file and print what it contains
    Validate {
        /// Path to config file
        #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Write default config.yaml and templates.yaml
    Init {
        /// Directory in which to create config
        #[arg(long, default_value = "config")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut args = Args::parse();

    match args.command.take() {
        Some(Commands::Analyze {
            path,
            keywords,
            min_words,
            max_words,
            config,
            json,
            threshold,
            jobs,
            quiet,
            verbose,
        }) => {
            init_logging(Verbosity::from_flags(verbose, quiet || json));
            run_analyze(&AnalyzeArgs {
                path,
                keywords,
                min_words,
                max_words,
                config,
                json,
                threshold,
                jobs,
                quiet,
                verbose,
            })
        }
        Some(Commands::Render { markdown, output }) => {
            init_logging(Verbosity::Normal);
            run_render(&markdown, output)
        }
        Some(Commands::Validate { config }) => {
            init_logging(Verbosity::Normal);
            Ok(run_validate(&config))
        }
        Some(Commands::Init { dir, force }) => {
            init_logging(Verbosity::Normal);
            run_init(&dir, force)
        }
        None => {
            init_logging(Verbosity::from_flags(args.verbose, args.quiet));
            run_generate(&args)
        }
    }
}

fn run_generate(args: &Args) -> Result<ExitCode> {
    let config = load_config(&args.config).with_context(|| {
        format!(
            "Could not load {} (run `seogen init` to create one)",
            args.config.display()
        )
    })?;
    if !report_problems(&config) {
        return Ok(ExitCode::from(1));
    }

    let generator = ArticleGenerator::new(&config);
    let mut options = BatchOptions {
        count: args.count,
        distribution: config.template_distribution.clone(),
        parallel: !args.sequential,
        workers: args.workers,
        seed: args.seed,
    };
    if let Some(ref template) = args.template {
        if !generator.has_template(template) {
            let known: Vec<&str> = generator.template_names().collect();
            anyhow::bail!(
                "Unknown template '{}' (available: {})",
                template,
                known.join(", ")
            );
        }
        options = options.single_template(template);
    }

    let mut processor = BatchProcessor::new(generator, config.variable_pools.clone());
    if args.optimize_seo {
        processor = processor.with_optimizer(SeoOptimizer::new(config.seo.clone()));
    }

    if !args.quiet {
        eprintln!(
            "{}: Generating {} articles ({})",
            "Info".blue(),
            args.count,
            if args.sequential { "sequential" } else { "parallel" }
        );
    }

    let start = Instant::now();
    let outcome = processor.generate_batch(&options)?;

    for failure in &outcome.failures {
        if !args.quiet {
            eprintln!(
                "{}: {} ({}): {}",
                "Warning".yellow(),
                failure.id,
                failure.template_type,
                failure.error
            );
        }
    }
    if outcome.articles.is_empty() && !outcome.failures.is_empty() {
        eprintln!("{}: All articles failed to generate", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let mut writer = ArticleWriter::new(args.output.clone(), args.format);
    if args.format.includes_html() {
        writer = writer.with_html_converter(HtmlConverter::from_config(&config.html)?);
    }
    let written = writer.write_all(&outcome.articles)?;

    let scores: Vec<f64> = outcome
        .articles
        .iter()
        .filter_map(|a| a.seo.as_ref().map(|seo| seo.score as f64))
        .collect();
    let average_score = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    };

    let summary = GenerationSummary {
        generated: outcome.articles.len(),
        failed: outcome.failures.len(),
        elapsed: start.elapsed(),
        output_dir: args.output.clone(),
        template_counts: outcome.template_counts(),
        average_score,
        titles: outcome.articles.iter().map(|a| a.title.clone()).collect(),
        manifest_path: Some(written.manifest_path),
    };

    if args.quiet {
        println!("{}", summary.generated);
    } else {
        ConsoleReporter::new().report_generation(&summary);
    }

    Ok(ExitCode::SUCCESS)
}

struct AnalyzeArgs {
    path: PathBuf,
    keywords: Vec<String>,
    min_words: Option<usize>,
    max_words: Option<usize>,
    config: Option<PathBuf>,
    json: bool,
    threshold: Option<u8>,
    jobs: Option<usize>,
    quiet: bool,
    verbose: bool,
}

fn run_analyze(args: &AnalyzeArgs) -> Result<ExitCode> {
    let config = match args.config {
        Some(ref path) => load_config(path)?,
        None => Config::default(),
    };
    let range = config
        .merge_with_cli(args.min_words, args.max_words)
        .seo
        .word_count_range();

    let files = collect_text_files(&args.path)?;
    if files.is_empty() {
        eprintln!("{}: No text files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let engine = AnalysisEngine::new()
        .with_keywords(args.keywords.clone())
        .with_word_count_range(range);
    let (results, had_errors) = analyze_files_parallel(&engine, &files, args.quiet || args.json);

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = AnalysisEngine::aggregate_stats(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &results {
            reporter.report_quiet(result);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    if let Some(threshold) = args.threshold {
        let score = if results.len() == 1 {
            results[0].score
        } else {
            stats.average_score
        };

        if score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Score {} is below threshold {}",
                    "Failed".red().bold(),
                    score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_render(markdown: &Path, output: Option<PathBuf>) -> Result<ExitCode> {
    let content = fs::read_to_string(markdown)
        .with_context(|| format!("Failed to read {}", markdown.display()))?;
    let fallback_title = markdown
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled");
    let html = HtmlConverter::new().convert_markdown(&content, fallback_title);

    let output = output.unwrap_or_else(|| markdown.with_extension("html"));
    fs::write(&output, html)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    eprintln!("{}: Wrote {}", "Info".blue(), output.display());
    Ok(ExitCode::SUCCESS)
}

fn run_validate(path: &Path) -> ExitCode {
    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            return ExitCode::from(1);
        }
    };
    if !report_problems(&config) {
        return ExitCode::from(1);
    }

    let templates: Vec<&str> = config.templates.keys().map(String::as_str).collect();
    println!("{} {}", "✓".green(), format!("{} is valid", path.display()).bold());
    println!("   Brand:           {}", brand_label(&config));
    println!("   Templates:       {}", templates.join(", "));
    println!(
        "   Listicle items:  {}",
        config.content_blocks.listicle_items.len()
    );
    println!(
        "   Word count:      {}-{}",
        config.seo.min_word_count, config.seo.max_word_count
    );
    if config.variable_pools.is_empty() {
        eprintln!(
            "{}: variable_pools is empty; placeholders will stay unfilled",
            "Warning".yellow()
        );
    }
    ExitCode::SUCCESS
}

fn brand_label(config: &Config) -> &str {
    config.brand.name.as_deref().unwrap_or("(unset)")
}

/// Print validation problems; true when there are none
fn report_problems(config: &Config) -> bool {
    let problems = config.validate();
    for problem in &problems {
        eprintln!("{}: {}", "Invalid config".red().bold(), problem);
    }
    problems.is_empty()
}

fn run_init(dir: &Path, force: bool) -> Result<ExitCode> {
    let written = write_default_config(dir, force)?;
    for path in &written {
        eprintln!("{}: Created {}", "Info".blue(), path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn collect_text_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_text_file(e.path()))
        .map(|e| e.into_path())
        .collect();

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Analyze files in parallel; results keep input order
fn analyze_files_parallel(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    quiet: bool,
) -> (Vec<AnalysisReport>, bool) {
    let had_errors = AtomicBool::new(false);

    let results: Vec<_> = files
        .par_iter()
        .filter_map(|file| match engine.analyze(file) {
            Ok(result) => Some(result),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                if !quiet {
                    eprintln!(
                        "{}: Failed to analyze {}: {:#}",
                        "Error".red(),
                        file.display(),
                        e
                    );
                }
                None
            }
        })
        .collect();

    (results, had_errors.load(Ordering::Relaxed))
}
