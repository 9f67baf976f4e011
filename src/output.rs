//! Writing generated articles and the batch manifest to disk

use crate::reporter::{HtmlConverter, JsonReporter, MarkdownRenderer};
use crate::Article;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "generated_articles";

/// Timestamp format in manifest file names and the manifest itself
pub const MANIFEST_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Html,
    Json,
    #[default]
    All,
}

impl OutputFormat {
    pub fn includes_markdown(self) -> bool {
        matches!(self, OutputFormat::Markdown | OutputFormat::All)
    }

    pub fn includes_html(self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::All)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::All)
    }
}

/// Index of one batch, written next to the article directories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: String,
    pub total_articles: usize,
    pub articles: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub template_type: String,
}

impl Manifest {
    pub fn new(generated_at: impl Into<String>, articles: &[Article]) -> Self {
        Self {
            generated_at: generated_at.into(),
            total_articles: articles.len(),
            articles: articles
                .iter()
                .map(|a| ManifestEntry {
                    id: a.id.clone(),
                    title: a.title.clone(),
                    slug: a.slug.clone(),
                    template_type: a.template_type.clone(),
                })
                .collect(),
        }
    }
}

/// Files written by one [`ArticleWriter::write_all`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteSummary {
    pub markdown_files: usize,
    pub html_files: usize,
    pub json_files: usize,
    pub manifest_path: PathBuf,
}

/// Writes articles as `markdown/{slug}.md`, `html/{slug}.html` and
/// `json/{slug}.json` under the output directory
pub struct ArticleWriter {
    out_dir: PathBuf,
    format: OutputFormat,
    html: HtmlConverter,
}

impl ArticleWriter {
    pub fn new(out_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            out_dir: out_dir.into(),
            format,
            html: HtmlConverter::new(),
        }
    }

    /// Use a specific HTML converter (e.g. one with a custom page template)
    pub fn with_html_converter(mut self, html: HtmlConverter) -> Self {
        self.html = html;
        self
    }

    fn ensure_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.out_dir.join(name);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        Ok(dir)
    }

    /// Write every article in the selected formats, then the manifest
    pub fn write_all(&self, articles: &[Article]) -> Result<WriteSummary> {
        let mut summary = WriteSummary::default();
        let json = JsonReporter::new().pretty();

        if self.format.includes_markdown() {
            let dir = self.ensure_dir("markdown")?;
            for article in articles {
                write_file(&dir.join(format!("{}.md", article.slug)), &MarkdownRenderer::render(article))?;
                summary.markdown_files += 1;
            }
        }

        if self.format.includes_html() {
            let dir = self.ensure_dir("html")?;
            for article in articles {
                write_file(&dir.join(format!("{}.html", article.slug)), &self.html.convert_article(article))?;
                summary.html_files += 1;
            }
        }

        if self.format.includes_json() {
            let dir = self.ensure_dir("json")?;
            for article in articles {
                write_file(&dir.join(format!("{}.json", article.slug)), &json.article(article))?;
                summary.json_files += 1;
            }
        }

        summary.manifest_path = self.write_manifest(articles)?;
        tracing::info!(
            dir = %self.out_dir.display(),
            markdown = summary.markdown_files,
            html = summary.html_files,
            json = summary.json_files,
            "articles written"
        );
        Ok(summary)
    }

    /// Write `manifest_{timestamp}.json` and return its path
    pub fn write_manifest(&self, articles: &[Article]) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("Failed to create directory: {}", self.out_dir.display()))?;
        let timestamp = chrono::Local::now()
            .format(MANIFEST_TIMESTAMP_FORMAT)
            .to_string();
        let manifest = Manifest::new(timestamp.clone(), articles);
        let path = self.out_dir.join(format!("manifest_{}.json", timestamp));
        let content =
            serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
        write_file(&path, &content)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArticleMeta, Section, Variables};
    use tempfile::TempDir;

    fn article(slug: &str) -> Article {
        Article {
            id: format!("id-{}", slug),
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            intro: "Intro.".to_string(),
            template_type: "listicle".to_string(),
            generated_at: "2025-01-01T00:00:00+00:00".to_string(),
            content_sections: vec![Section::Section {
                title: "Body".to_string(),
                content: "Text.".to_string(),
            }],
            meta: ArticleMeta::default(),
            conclusion: "End.".to_string(),
            key_takeaways: vec![],
            variables: Variables::new(),
            seo: None,
        }
    }

    #[test]
    fn test_format_selection() {
        assert!(OutputFormat::All.includes_markdown());
        assert!(OutputFormat::All.includes_html());
        assert!(OutputFormat::All.includes_json());
        assert!(OutputFormat::Json.includes_json());
        assert!(!OutputFormat::Json.includes_markdown());
        assert!(!OutputFormat::Markdown.includes_html());
    }

    #[test]
    fn test_write_all_formats() {
        let dir = TempDir::new().unwrap();
        let writer = ArticleWriter::new(dir.path(), OutputFormat::All);
        let summary = writer.write_all(&[article("one"), article("two")]).unwrap();

        assert_eq!(summary.markdown_files, 2);
        assert_eq!(summary.html_files, 2);
        assert_eq!(summary.json_files, 2);
        assert!(dir.path().join("markdown/one.md").exists());
        assert!(dir.path().join("html/two.html").exists());

        let json = fs::read_to_string(dir.path().join("json/one.json")).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slug, "one");

        let manifest: Manifest =
            serde_json::from_str(&fs::read_to_string(&summary.manifest_path).unwrap()).unwrap();
        assert_eq!(manifest.total_articles, 2);
        assert_eq!(manifest.articles[1].slug, "two");
        assert_eq!(manifest.generated_at.len(), "20250101_000000".len());
    }

    #[test]
    fn test_write_markdown_only() {
        let dir = TempDir::new().unwrap();
        let summary = ArticleWriter::new(dir.path(), OutputFormat::Markdown)
            .write_all(&[article("solo")])
            .unwrap();

        assert_eq!(summary.markdown_files, 1);
        assert!(!dir.path().join("html").exists());
        assert!(!dir.path().join("json").exists());
        assert!(summary.manifest_path.exists());
    }

    #[test]
    fn test_custom_html_converter() {
        let dir = TempDir::new().unwrap();
        ArticleWriter::new(dir.path(), OutputFormat::Html)
            .with_html_converter(HtmlConverter::with_template("<x>{{title}}</x>"))
            .write_all(&[article("a")])
            .unwrap();

        let html = fs::read_to_string(dir.path().join("html/a.html")).unwrap();
        assert_eq!(html, "<x>Title a</x>");
    }

    #[test]
    fn test_empty_batch_still_writes_manifest() {
        let dir = TempDir::new().unwrap();
        let summary = ArticleWriter::new(dir.path().join("nested"), OutputFormat::Json)
            .write_all(&[])
            .unwrap();
        assert!(summary.manifest_path.starts_with(dir.path().join("nested")));
        assert!(summary.manifest_path.exists());
    }
}
