//! Markdown rendering for generated articles

use crate::{Article, Section};
use std::fmt::Write as _;

const SUBSECTION_PLACEHOLDER: &str = "Content for this subsection...";

/// Renders articles as Markdown documents
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Title, intro, takeaways, sections, conclusion and a provenance footer
    pub fn render(article: &Article) -> String {
        let mut md = String::with_capacity(4096);
        let _ = write!(md, "# {}\n\n{}\n\n", article.title, article.intro);

        if !article.key_takeaways.is_empty() {
            md.push_str("## Key Takeaways\n");
            for takeaway in &article.key_takeaways {
                let _ = writeln!(md, "- {}", takeaway);
            }
            md.push('\n');
        }

        for section in &article.content_sections {
            md.push_str(&Self::section(section));
        }

        if !article.conclusion.is_empty() {
            let _ = write!(md, "## Conclusion\n\n{}\n\n", article.conclusion);
        }

        let _ = write!(
            md,
            "\n<!-- Generated: {} -->\n<!-- Template: {} -->\n",
            article.generated_at, article.template_type
        );
        md
    }

    /// One section, ending with a blank line
    pub fn section(section: &Section) -> String {
        let mut md = String::new();

        match section {
            Section::ListItem {
                number,
                title,
                content,
                benefits,
            } => {
                let _ = write!(md, "## {}. {}\n\n{}\n\n", number, title, content);
                if !benefits.is_empty() {
                    md.push_str("**Key Benefits:**\n");
                    push_bullets(&mut md, benefits);
                }
            }
            Section::Steps { title, steps } => {
                let _ = write!(md, "## {}\n\n", title);
                for (i, step) in steps.iter().enumerate() {
                    let _ = write!(
                        md,
                        "### Step {}: {}\n\n{}\n\n",
                        i + 1,
                        step.title,
                        step.description
                    );
                }
            }
            Section::ComparisonTable { title, table } => {
                let _ = write!(md, "## {}\n\n", title);
                let _ = writeln!(md, "| {} |", table.headers.join(" | "));
                let _ = writeln!(md, "|{}", " --- |".repeat(table.headers.len()));
                for row in &table.rows {
                    let _ = writeln!(md, "| {} |", row.join(" | "));
                }
                md.push('\n');
            }
            Section::Tips { title, tips: items } | Section::Prerequisites { title, items } => {
                let _ = write!(md, "## {}\n\n", title);
                push_bullets(&mut md, items);
            }
            Section::Analysis { title, subsections } => {
                let _ = write!(md, "## {}\n\n", title);
                for subsection in subsections {
                    let _ = write!(md, "### {}\n\n{}\n\n", subsection.title, subsection.content);
                }
            }
            Section::Chapter {
                title,
                content,
                subsections,
            } => {
                let _ = write!(md, "## {}\n\n{}\n\n", title, content);
                for subsection in subsections {
                    let _ = write!(md, "### {}\n\n{}\n\n", subsection, SUBSECTION_PLACEHOLDER);
                }
            }
            Section::Resources { title, resources } => {
                let _ = write!(md, "## {}\n\n", title);
                for resource in resources {
                    let _ = writeln!(md, "- **{}:** {}", resource.kind, resource.description);
                }
                md.push('\n');
            }
            Section::Verdict { title, content }
            | Section::Overview { title, content }
            | Section::Section { title, content } => {
                let _ = write!(md, "## {}\n\n{}\n\n", title, content);
            }
        }

        md
    }
}

fn push_bullets(md: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(md, "- {}", item);
    }
    md.push('\n');
}
