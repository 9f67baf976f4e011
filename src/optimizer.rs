//! Article-level SEO optimization
//!
//! Flattens an article to plain text, runs the analyzer over it and attaches
//! score, suggestions, schema.org markup and internal link ideas.

use crate::analyzer::{analyze_seo, generate_suggestions, ScoreCalculator};
use crate::config::SeoConfig;
use crate::generator::TemplateKind;
use crate::text::{title_case, truncate_chars};
use crate::{Article, InternalLink, Section, SeoReport};
use serde_json::{json, Value};

/// Meta description base length taken from the intro
pub const META_BASE_LEN: usize = 150;
/// Hard cap for an optimized meta description
pub const META_MAX_LEN: usize = 160;
/// Internal links are suggested for this many meta keywords
pub const LINKED_KEYWORDS: usize = 3;

pub struct SeoOptimizer {
    config: SeoConfig,
}

impl SeoOptimizer {
    pub fn new(config: SeoConfig) -> Self {
        Self { config }
    }

    /// Return a copy of the article with an improved meta description and an
    /// attached [`SeoReport`]
    pub fn optimize_article(&self, article: &Article) -> Article {
        let text = extract_text(article);
        let analysis = analyze_seo(&text, &article.meta.keywords);
        let range = self.config.word_count_range();

        let breakdown = ScoreCalculator::breakdown(&analysis, range);
        let suggestions = generate_suggestions(&analysis, range);
        let schema_markup = self.schema_markup(article);
        let internal_links = suggest_internal_links(article);

        let mut optimized = article.clone();
        optimized.meta.description = optimize_meta_description(
            &article.title,
            &article.intro,
            &analysis.primary_keywords,
        );

        tracing::debug!(
            id = %article.id,
            score = breakdown.total(),
            words = analysis.word_count,
            "optimized article"
        );

        optimized.seo = Some(SeoReport {
            score: breakdown.total(),
            breakdown,
            suggestions,
            analysis,
            schema_markup,
            internal_links,
        });
        optimized
    }

    /// schema.org JSON-LD; how-to articles become `HowTo` with their steps
    pub fn schema_markup(&self, article: &Article) -> Value {
        let organization = self.config.organization();
        let mut schema = json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": article.title,
            "description": article.meta.description,
            "datePublished": article.generated_at,
            "dateModified": article.generated_at,
            "author": {
                "@type": "Organization",
                "name": organization,
            },
            "publisher": {
                "@type": "Organization",
                "name": organization,
                "logo": {
                    "@type": "ImageObject",
                    "url": self.config.logo_url(),
                },
            },
        });

        if TemplateKind::from_name(&article.template_type) == TemplateKind::HowTo {
            schema["@type"] = json!("HowTo");

            let steps: Vec<Value> = article
                .content_sections
                .iter()
                .filter_map(|section| match section {
                    Section::Steps { steps, .. } => Some(steps),
                    _ => None,
                })
                .flatten()
                .map(|step| {
                    json!({
                        "@type": "HowToStep",
                        "name": step.title,
                        "text": step.description,
                    })
                })
                .collect();
            if !steps.is_empty() {
                schema["step"] = Value::Array(steps);
            }
        }

        schema
    }
}

impl Default for SeoOptimizer {
    fn default() -> Self {
        Self::new(SeoConfig::default())
    }
}

/// Flatten an article to the text the analyzer scores: title, intro, every
/// section, conclusion and takeaways joined by single spaces
pub fn extract_text(article: &Article) -> String {
    let mut parts: Vec<String> = vec![article.title.clone(), article.intro.clone()];
    parts.extend(article.content_sections.iter().map(section_text));
    parts.push(article.conclusion.clone());
    parts.extend(article.key_takeaways.iter().cloned());
    parts.join(" ")
}

/// Title, body and list entries of one section
fn section_text(section: &Section) -> String {
    let mut parts: Vec<&str> = vec![section.title()];
    if let Some(content) = section.content() {
        parts.push(content);
    }

    match section {
        Section::ListItem { benefits, .. } => parts.extend(benefits.iter().map(String::as_str)),
        Section::Tips { tips, .. } => parts.extend(tips.iter().map(String::as_str)),
        Section::Prerequisites { items, .. } => parts.extend(items.iter().map(String::as_str)),
        Section::Steps { steps, .. } => {
            for step in steps {
                parts.push(&step.title);
                parts.push(&step.description);
            }
        }
        _ => {}
    }

    parts.join(" ")
}

/// Intro-based meta description that mentions the top primary keyword
pub fn optimize_meta_description(title: &str, intro: &str, keywords: &[String]) -> String {
    let source = if intro.is_empty() { title } else { intro };
    let mut meta = truncate_chars(source, META_BASE_LEN).to_string();

    if let Some(keyword) = keywords.first() {
        if !meta.to_lowercase().contains(&keyword.to_lowercase()) {
            let prefixed = format!("{}: {}", title_case(keyword), meta);
            meta = truncate_chars(&prefixed, META_MAX_LEN).to_string();
        }
    }

    let meta = meta.trim();
    if meta.chars().count() > META_MAX_LEN {
        format!("{}...", truncate_chars(meta, META_MAX_LEN - 3))
    } else {
        meta.to_string()
    }
}

/// Related-content links by template type, then one per leading meta keyword
pub fn suggest_internal_links(article: &Article) -> Vec<InternalLink> {
    let mut links = Vec::new();

    match TemplateKind::from_name(&article.template_type) {
        TemplateKind::HowTo => links.push(InternalLink {
            anchor_text: "complete guide".to_string(),
            suggested_url: "/ultimate-guide-[topic]".to_string(),
            reason: "Link to comprehensive guide on same topic".to_string(),
        }),
        TemplateKind::Comparison => links.push(InternalLink {
            anchor_text: "detailed review".to_string(),
            suggested_url: "/review-[product]".to_string(),
            reason: "Link to individual product reviews".to_string(),
        }),
        _ => {}
    }

    links.extend(
        article
            .meta
            .keywords
            .iter()
            .take(LINKED_KEYWORDS)
            .map(|keyword| InternalLink {
                anchor_text: keyword.clone(),
                suggested_url: format!("/{}", keyword.replace(' ', "-").to_lowercase()),
                reason: format!("Link to pillar content about {}", keyword),
            }),
    );

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArticleMeta, Step, Variables};

    fn article(template_type: &str) -> Article {
        Article {
            id: "article_0001".to_string(),
            slug: "secure-calls".to_string(),
            title: "How to Make Secure Calls".to_string(),
            intro: "Secure calls protect your privacy.".to_string(),
            template_type: template_type.to_string(),
            generated_at: "2025-01-01T00:00:00+00:00".to_string(),
            content_sections: vec![
                Section::Steps {
                    title: "Steps".to_string(),
                    steps: vec![
                        Step {
                            title: "Open".to_string(),
                            description: "Open the app".to_string(),
                        },
                        Step {
                            title: "Call".to_string(),
                            description: "Start the call".to_string(),
                        },
                    ],
                },
                Section::ListItem {
                    number: 1,
                    title: "Fast".to_string(),
                    content: "Very fast.".to_string(),
                    benefits: vec!["Speed".to_string()],
                },
            ],
            meta: ArticleMeta {
                description: "Secure calls protect your privacy.".to_string(),
                keywords: vec![
                    "secure calls".to_string(),
                    "privacy".to_string(),
                    "encryption".to_string(),
                    "browser".to_string(),
                ],
            },
            conclusion: "Stay safe.".to_string(),
            key_takeaways: vec!["Encrypt everything".to_string()],
            variables: Variables::new(),
            seo: None,
        }
    }

    #[test]
    fn test_extract_text_order() {
        let text = extract_text(&article("how_to"));
        assert_eq!(
            text,
            "How to Make Secure Calls Secure calls protect your privacy. \
             Steps Open Open the app Call Start the call \
             Fast Very fast. Speed \
             Stay safe. Encrypt everything"
        );
    }

    #[test]
    fn test_how_to_schema_has_steps() {
        let schema = SeoOptimizer::default().schema_markup(&article("how_to"));
        assert_eq!(schema["@type"], "HowTo");
        assert_eq!(schema["step"][0]["@type"], "HowToStep");
        assert_eq!(schema["step"][1]["text"], "Start the call");
        assert_eq!(schema["publisher"]["name"], "Your Company");
        assert_eq!(
            schema["publisher"]["logo"]["url"],
            "https://example.com/logo.png"
        );
    }

    #[test]
    fn test_article_schema_uses_config() {
        let config = SeoConfig {
            organization: Some("Acme".to_string()),
            ..SeoConfig::default()
        };
        let schema = SeoOptimizer::new(config).schema_markup(&article("listicle"));
        assert_eq!(schema["@type"], "Article");
        assert!(schema.get("step").is_none());
        assert_eq!(schema["author"]["name"], "Acme");
        assert_eq!(schema["datePublished"], "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_meta_description_keeps_present_keyword() {
        let meta = optimize_meta_description("Title", "Privacy first calls.", &["privacy".to_string()]);
        assert_eq!(meta, "Privacy first calls.");
    }

    #[test]
    fn test_meta_description_prefixes_missing_keyword() {
        let meta = optimize_meta_description("Title", "Fast calls.", &["secure rooms".to_string()]);
        assert_eq!(meta, "Secure Rooms: Fast calls.");
    }

    #[test]
    fn test_meta_description_falls_back_to_title() {
        assert_eq!(optimize_meta_description("Only Title", "", &[]), "Only Title");
    }

    #[test]
    fn test_meta_description_never_exceeds_cap() {
        let intro = "x".repeat(400);
        let meta = optimize_meta_description("T", &intro, &["keyword".to_string()]);
        assert!(meta.chars().count() <= META_MAX_LEN);
        assert_eq!(meta.chars().count(), "Keyword: ".len() + META_BASE_LEN);
        assert!(meta.starts_with("Keyword: "));
    }

    #[test]
    fn test_internal_links_how_to() {
        let links = suggest_internal_links(&article("how_to"));
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].suggested_url, "/ultimate-guide-[topic]");
        assert_eq!(links[1].suggested_url, "/secure-calls");
        assert_eq!(links[1].reason, "Link to pillar content about secure calls");
        assert_eq!(links[3].anchor_text, "encryption");
    }

    #[test]
    fn test_internal_links_comparison_and_other() {
        let links = suggest_internal_links(&article("comparison"));
        assert_eq!(links[0].anchor_text, "detailed review");

        let links = suggest_internal_links(&article("listicle"));
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_optimize_article_attaches_report() {
        let original = article("how_to");
        let optimized = SeoOptimizer::default().optimize_article(&original);

        let seo = optimized.seo.as_ref().unwrap();
        assert!(seo.score <= 100);
        assert_eq!(seo.score, seo.breakdown.total());
        assert!(seo
            .suggestions
            .contains(&"Increase word count to at least 800 words".to_string()));
        assert_eq!(seo.internal_links.len(), 4);
        // Schema is built from the article before the description changed
        assert_eq!(seo.schema_markup["description"], original.meta.description);
        assert!(original.seo.is_none());
    }

    #[test]
    fn test_optimize_uses_configured_word_range() {
        let config = SeoConfig {
            min_word_count: 10,
            max_word_count: 100,
            ..SeoConfig::default()
        };
        let optimized = SeoOptimizer::new(config).optimize_article(&article("how_to"));
        let seo = optimized.seo.unwrap();
        assert_eq!(seo.breakdown.word_count, 20);
    }
}
