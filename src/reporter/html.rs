//! HTML rendering: full article pages and a small Markdown converter

use crate::config::HtmlConfig;
use crate::{Article, Section};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,4}) (.+)$").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\. ").unwrap());
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

/// Placeholder text under guide subsection headings
const SUBSECTION_PLACEHOLDER: &str = "Content for this subsection...";

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Converts articles and Markdown documents to HTML pages
#[derive(Debug, Clone)]
pub struct HtmlConverter {
    /// Page template with `{{title}}`, `{{content}}`, `{{meta_description}}`,
    /// `{{meta_keywords}}` and `{{published_date}}` placeholders
    template: String,
}

impl HtmlConverter {
    /// Converter with the built-in page template
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Load a page template from disk
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let template = fs::read_to_string(path)
            .with_context(|| format!("Failed to read HTML template: {}", path.display()))?;
        Ok(Self::with_template(template))
    }

    /// Use `html.template_path` when set, else the built-in template
    pub fn from_config(config: &HtmlConfig) -> Result<Self> {
        match config.template_path {
            Some(ref path) => Self::from_template_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Full HTML page for an article
    pub fn convert_article(&self, article: &Article) -> String {
        self.render_page(&PageData {
            title: &article.title,
            content: &article_to_html(article),
            description: &article.meta.description,
            keywords: &article.meta.keywords.join(", "),
            published: &article.generated_at,
        })
    }

    /// Full HTML page for a Markdown document. The title is taken from the
    /// first `# ` heading, falling back to `fallback_title`.
    pub fn convert_markdown(&self, markdown: &str, fallback_title: &str) -> String {
        let title = markdown
            .lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(str::trim)
            .unwrap_or(fallback_title);
        let published = chrono::Local::now().to_rfc3339();

        self.render_page(&PageData {
            title,
            content: &markdown_to_html(markdown),
            description: "",
            keywords: "",
            published: &published,
        })
    }

    /// Fill template placeholders in one pass; substituted values are never
    /// scanned again, and unknown placeholders stay verbatim.
    fn render_page(&self, page: &PageData<'_>) -> String {
        PLACEHOLDER
            .replace_all(&self.template, |caps: &Captures| match &caps[1] {
                "title" => escape_html(page.title),
                "content" => page.content.to_string(),
                "meta_description" => escape_html(page.description),
                "meta_keywords" => escape_html(page.keywords),
                "published_date" => escape_html(page.published),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl Default for HtmlConverter {
    fn default() -> Self {
        Self::new()
    }
}

struct PageData<'a> {
    title: &'a str,
    content: &'a str,
    description: &'a str,
    keywords: &'a str,
    published: &'a str,
}

/// `<article class="seo-article">` body for an article
pub fn article_to_html(article: &Article) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<article class=\"seo-article\">\n");
    let _ = writeln!(
        html,
        "  <h1 class=\"article-title\">{}</h1>",
        escape_html(&article.title)
    );
    html.push_str("  <div class=\"article-intro\">\n");
    let _ = writeln!(html, "    <p>{}</p>", escape_html(&article.intro));
    html.push_str("  </div>\n");

    if !article.key_takeaways.is_empty() {
        html.push_str("  <div class=\"key-takeaways\">\n    <h2>Key Takeaways</h2>\n    <ul>\n");
        for takeaway in &article.key_takeaways {
            let _ = writeln!(html, "      <li>{}</li>", escape_html(takeaway));
        }
        html.push_str("    </ul>\n  </div>\n");
    }

    for section in &article.content_sections {
        html.push_str(&section_to_html(section));
    }

    if !article.conclusion.is_empty() {
        html.push_str("  <div class=\"article-conclusion\">\n    <h2>Conclusion</h2>\n");
        let _ = writeln!(html, "    <p>{}</p>", escape_html(&article.conclusion));
        html.push_str("  </div>\n");
    }

    html.push_str("</article>\n");
    html
}

fn push_list(html: &mut String, class: &str, items: &[String]) {
    let _ = writeln!(html, "    <ul class=\"{}\">", class);
    for item in items {
        let _ = writeln!(html, "      <li>{}</li>", escape_html(item));
    }
    html.push_str("    </ul>\n");
}

fn section_to_html(section: &Section) -> String {
    let mut html = String::from("  <section class=\"article-section\">\n");
    let title = escape_html(section.title());

    match section {
        Section::ListItem {
            number,
            content,
            benefits,
            ..
        } => {
            let _ = writeln!(html, "    <h2>{}. {}</h2>", number, title);
            let _ = writeln!(html, "    <p>{}</p>", escape_html(content));
            if !benefits.is_empty() {
                html.push_str("    <div class=\"benefits\">\n      <h3>Key Benefits:</h3>\n      <ul>\n");
                for benefit in benefits {
                    let _ = writeln!(html, "        <li>{}</li>", escape_html(benefit));
                }
                html.push_str("      </ul>\n    </div>\n");
            }
        }
        Section::Steps { steps, .. } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            html.push_str("    <ol class=\"steps\">\n");
            for step in steps {
                html.push_str("      <li>\n");
                let _ = writeln!(html, "        <h3>{}</h3>", escape_html(&step.title));
                let _ = writeln!(html, "        <p>{}</p>", escape_html(&step.description));
                html.push_str("      </li>\n");
            }
            html.push_str("    </ol>\n");
        }
        Section::ComparisonTable { table, .. } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            html.push_str("    <div class=\"table-responsive\">\n");
            html.push_str("      <table class=\"comparison-table\">\n        <thead>\n          <tr>\n");
            for header in &table.headers {
                let _ = writeln!(html, "            <th>{}</th>", escape_html(header));
            }
            html.push_str("          </tr>\n        </thead>\n        <tbody>\n");
            for row in &table.rows {
                html.push_str("          <tr>\n");
                for cell in row {
                    let _ = writeln!(html, "            <td>{}</td>", escape_html(cell));
                }
                html.push_str("          </tr>\n");
            }
            html.push_str("        </tbody>\n      </table>\n    </div>\n");
        }
        Section::Tips { tips, .. } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            push_list(&mut html, "tips", tips);
        }
        Section::Prerequisites { items, .. } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            push_list(&mut html, "prerequisites", items);
        }
        Section::Chapter {
            content,
            subsections,
            ..
        } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            let _ = writeln!(html, "    <p>{}</p>", escape_html(content));
            if !subsections.is_empty() {
                html.push_str("    <div class=\"subsections\">\n");
                for subsection in subsections {
                    let _ = writeln!(html, "      <h3>{}</h3>", escape_html(subsection));
                    let _ = writeln!(html, "      <p>{}</p>", SUBSECTION_PLACEHOLDER);
                }
                html.push_str("    </div>\n");
            }
        }
        Section::Resources { resources, .. } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            html.push_str("    <ul class=\"resources\">\n");
            for resource in resources {
                let _ = writeln!(
                    html,
                    "      <li><strong>{}:</strong> {}</li>",
                    escape_html(&resource.kind),
                    escape_html(&resource.description)
                );
            }
            html.push_str("    </ul>\n");
        }
        Section::Analysis { subsections, .. } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            for subsection in subsections {
                let _ = writeln!(html, "    <h3>{}</h3>", escape_html(&subsection.title));
                let _ = writeln!(html, "    <p>{}</p>", escape_html(&subsection.content));
            }
        }
        Section::Verdict { content, .. }
        | Section::Overview { content, .. }
        | Section::Section { content, .. } => {
            let _ = writeln!(html, "    <h2>{}</h2>", title);
            let _ = writeln!(html, "    <p>{}</p>", escape_html(content));
        }
    }

    html.push_str("  </section>\n");
    html
}

/// Convert a Markdown subset: h1-h4, bold, italic, links, `-`/`*`/numbered
/// lists, pipe tables and paragraphs. Inline HTML passes through unescaped.
pub fn markdown_to_html(markdown: &str) -> String {
    let html = convert_lists(markdown);
    let html = convert_tables(&html);
    let html = HEADING.replace_all(&html, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{0}>{1}</h{0}>", level, &caps[2])
    });
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    let html = LINK.replace_all(&html, "<a href=\"$2\">$1</a>");
    convert_paragraphs(&html)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    let trimmed = line.trim();
    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Some((ListKind::Unordered, item));
    }
    ORDERED_ITEM
        .find(trimmed)
        .map(|m| (ListKind::Ordered, &trimmed[m.end()..]))
}

fn convert_lists(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut current: Option<ListKind> = None;

    for line in text.split('\n') {
        match list_item(line) {
            Some((kind, item)) => {
                if current != Some(kind) {
                    if let Some(open) = current {
                        out.push(open.close().to_string());
                    }
                    out.push(kind.open().to_string());
                    current = Some(kind);
                }
                out.push(format!("  <li>{}</li>", item));
            }
            None => {
                if let Some(open) = current.take() {
                    out.push(open.close().to_string());
                }
                out.push(line.to_string());
            }
        }
    }
    if let Some(open) = current {
        out.push(open.close().to_string());
    }

    out.join("\n")
}

fn table_cells(line: &str) -> Vec<&str> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect()
}

/// Header row, separator row, then body rows
fn parse_table(lines: &[&str]) -> String {
    let mut html = String::from("<table>\n  <thead>\n    <tr>\n");
    for cell in table_cells(lines[0]) {
        let _ = writeln!(html, "      <th>{}</th>", cell);
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for line in lines.iter().skip(2).filter(|l| !l.trim().is_empty()) {
        html.push_str("    <tr>\n");
        for cell in table_cells(line) {
            let _ = writeln!(html, "      <td>{}</td>", cell);
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
    html
}

fn flush_table(out: &mut Vec<String>, block: &mut Vec<&str>) {
    if block.len() >= 3 {
        out.push(parse_table(block));
    } else {
        out.extend(block.iter().map(|l| l.to_string()));
    }
    block.clear();
}

fn convert_tables(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.contains('|') {
            block.push(line);
        } else {
            flush_table(&mut out, &mut block);
            out.push(line.to_string());
        }
    }
    flush_table(&mut out, &mut block);

    out.join("\n")
}

fn convert_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .map(|block| {
            if !block.is_empty() && !block.starts_with('<') {
                format!("<p>{}</p>", block)
            } else {
                block.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{{meta_description}}">
    <meta name="keywords" content="{{meta_keywords}}">
    <meta property="article:published_time" content="{{published_date}}">
    <title>{{title}}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }
        h1 { color: #2c3e50; }
        h2 { color: #34495e; margin-top: 2em; }
        h3 { color: #7f8c8d; }
        .key-takeaways {
            background: #f8f9fa;
            padding: 20px;
            border-left: 4px solid #3498db;
            margin: 2em 0;
        }
        .key-takeaways h2 { margin-top: 0; }
        table { width: 100%; border-collapse: collapse; margin: 1em 0; }
        th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
        th { background: #f4f4f4; font-weight: bold; }
        .article-intro { font-size: 1.1em; color: #555; margin: 1.5em 0; }
        .article-conclusion {
            background: #f0f8ff;
            padding: 20px;
            border-radius: 5px;
            margin-top: 2em;
        }
        ul, ol { margin: 1em 0; padding-left: 2em; }
        li { margin: 0.5em 0; }
        .table-responsive { overflow-x: auto; }
        .steps { counter-reset: step-counter; }
        .steps li { counter-increment: step-counter; position: relative; padding-left: 3em; }
        .steps li::before {
            content: counter(step-counter);
            position: absolute;
            left: 0;
            top: 0;
            background: #3498db;
            color: white;
            width: 2em;
            height: 2em;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: bold;
        }
    </style>
</head>
<body>
    {{content}}
</body>
</html>
"#;
