//! Article generation from configured templates

pub mod content;

use crate::config::{Config, ContentBlocks, TemplateConfig};
use crate::text::truncate_chars;
use crate::{Article, ArticleMeta, Section, Variables};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Meta descriptions are cut to this many characters
pub const META_DESCRIPTION_LEN: usize = 150;
/// Maximum number of meta keywords
pub const MAX_META_KEYWORDS: usize = 10;

/// Words dropped when extracting meta keywords from title and intro
const META_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
];

/// Errors from title/intro generation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Unknown template type: {0}")]
    UnknownTemplate(String),

    #[error("Template '{template}' has no {field}")]
    NoPatterns {
        template: String,
        field: &'static str,
    },
}

/// Template families with dedicated section layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Listicle,
    HowTo,
    Comparison,
    UltimateGuide,
    /// Any other template name gets generic sections
    Generic,
}

impl TemplateKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "listicle" => TemplateKind::Listicle,
            "how_to" => TemplateKind::HowTo,
            "comparison" => TemplateKind::Comparison,
            "ultimate_guide" => TemplateKind::UltimateGuide,
            _ => TemplateKind::Generic,
        }
    }
}

/// Fills templates with variables and assembles article content
pub struct ArticleGenerator {
    templates: BTreeMap<String, TemplateConfig>,
    content_blocks: ContentBlocks,
}

impl ArticleGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            templates: config.templates.clone(),
            content_blocks: config.content_blocks.clone(),
        }
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Random title pattern of the template with variables substituted
    pub fn generate_title<R: Rng + ?Sized>(
        &self,
        template_type: &str,
        variables: &Variables,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        let template = self.template(template_type)?;
        let pattern = pick_pattern(&template.title_patterns, template_type, "title_patterns", rng)?;
        Ok(variables.substitute(pattern))
    }

    /// Random intro pattern of the template with variables substituted
    pub fn generate_intro<R: Rng + ?Sized>(
        &self,
        template_type: &str,
        variables: &Variables,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        let template = self.template(template_type)?;
        let pattern = pick_pattern(&template.intro_patterns, template_type, "intro_patterns", rng)?;
        Ok(variables.substitute(pattern))
    }

    /// Assemble a full article around a title and intro.
    ///
    /// `id` and `slug` are left empty for the caller to assign.
    pub fn generate_content<R: Rng + ?Sized>(
        &self,
        template_type: &str,
        title: &str,
        intro: &str,
        variables: &Variables,
        rng: &mut R,
    ) -> Article {
        let content_sections = self.sections(TemplateKind::from_name(template_type), variables, rng);
        let conclusion = self.conclusion(variables, rng);
        let key_takeaways = content::takeaways(&self.content_blocks.takeaways, variables);

        Article {
            id: String::new(),
            slug: String::new(),
            title: title.to_string(),
            intro: intro.to_string(),
            template_type: template_type.to_string(),
            generated_at: chrono::Local::now().to_rfc3339(),
            content_sections,
            meta: ArticleMeta {
                description: meta_description(intro),
                keywords: meta_keywords(title, intro),
            },
            conclusion,
            key_takeaways,
            variables: variables.clone(),
            seo: None,
        }
    }

    /// Title, intro and content in one call
    pub fn generate_article<R: Rng + ?Sized>(
        &self,
        template_type: &str,
        variables: &Variables,
        rng: &mut R,
    ) -> Result<Article, GeneratorError> {
        let title = self.generate_title(template_type, variables, rng)?;
        let intro = self.generate_intro(template_type, variables, rng)?;
        Ok(self.generate_content(template_type, &title, &intro, variables, rng))
    }

    fn template(&self, template_type: &str) -> Result<&TemplateConfig, GeneratorError> {
        self.templates
            .get(template_type)
            .ok_or_else(|| GeneratorError::UnknownTemplate(template_type.to_string()))
    }

    fn sections<R: Rng + ?Sized>(
        &self,
        kind: TemplateKind,
        variables: &Variables,
        rng: &mut R,
    ) -> Vec<Section> {
        match kind {
            TemplateKind::Listicle => {
                content::listicle_sections(&self.content_blocks.listicle_items, variables)
            }
            TemplateKind::HowTo => content::how_to_sections(),
            TemplateKind::Comparison => content::comparison_sections(variables),
            TemplateKind::UltimateGuide => content::ultimate_guide_sections(variables),
            TemplateKind::Generic => content::generic_sections(rng.gen_range(3..=5), variables),
        }
    }

    fn conclusion<R: Rng + ?Sized>(&self, variables: &Variables, rng: &mut R) -> String {
        let configured = self
            .content_blocks
            .conclusions
            .as_deref()
            .filter(|c| !c.is_empty());

        let pattern = match configured {
            Some(patterns) => patterns.choose(rng).map(String::as_str),
            None => content::DEFAULT_CONCLUSIONS.choose(rng).copied(),
        };
        pattern
            .map(|p| variables.substitute(p))
            .unwrap_or_default()
    }
}

fn pick_pattern<'a, R: Rng + ?Sized>(
    patterns: &'a [String],
    template_type: &str,
    field: &'static str,
    rng: &mut R,
) -> Result<&'a str, GeneratorError> {
    patterns
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| GeneratorError::NoPatterns {
            template: template_type.to_string(),
            field,
        })
}

/// First 150 characters of the intro; longer intros are cut back to a word
/// boundary and end with "..."
pub fn meta_description(intro: &str) -> String {
    let meta = truncate_chars(intro, META_DESCRIPTION_LEN).trim();
    if intro.chars().count() <= META_DESCRIPTION_LEN {
        return meta.to_string();
    }
    let cut = meta.rsplit_once(' ').map_or(meta, |(head, _)| head);
    format!("{}...", cut)
}

/// Unique lowercase words of title and intro longer than three characters,
/// in order of appearance
pub fn meta_keywords(title: &str, intro: &str) -> Vec<String> {
    let text = format!("{} {}", title, intro).to_lowercase();
    let mut seen = HashSet::new();

    text.split_whitespace()
        .filter(|w| w.chars().count() > 3 && !META_STOP_WORDS.contains(w))
        .filter(|w| seen.insert(*w))
        .take(MAX_META_KEYWORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListicleItem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> Config {
        let mut config = Config::default();
        config.templates.insert(
            "listicle".to_string(),
            TemplateConfig {
                title_patterns: vec!["{number} Reasons to Use {product} in {year}".to_string()],
                intro_patterns: vec!["Discover why {product} helps {audience}.".to_string()],
            },
        );
        config.templates.insert(
            "empty".to_string(),
            TemplateConfig {
                title_patterns: vec![],
                intro_patterns: vec![],
            },
        );
        config.templates.insert(
            "location_based".to_string(),
            TemplateConfig {
                title_patterns: vec!["Best {service} in {location}".to_string()],
                intro_patterns: vec!["Find {service} in {location}.".to_string()],
            },
        );
        config.content_blocks.listicle_items = (1..=12)
            .map(|i| ListicleItem {
                title: Some(format!("Feature {}", i)),
                content: "Useful.".to_string(),
                benefits: vec![],
            })
            .collect();
        config
    }

    fn vars() -> Variables {
        Variables::new()
            .with("number", 7)
            .with("product", "Acme")
            .with("year", 2025)
    }

    #[test]
    fn test_generate_title_substitutes_known_variables() {
        let generator = ArticleGenerator::new(&config());
        let mut rng = StdRng::seed_from_u64(1);
        let title = generator.generate_title("listicle", &vars(), &mut rng).unwrap();
        assert_eq!(title, "7 Reasons to Use Acme in 2025");
    }

    #[test]
    fn test_generate_intro_leaves_unknown_placeholders() {
        let generator = ArticleGenerator::new(&config());
        let mut rng = StdRng::seed_from_u64(1);
        let intro = generator.generate_intro("listicle", &vars(), &mut rng).unwrap();
        assert_eq!(intro, "Discover why Acme helps {audience}.");
    }

    #[test]
    fn test_unknown_template() {
        let generator = ArticleGenerator::new(&config());
        let mut rng = StdRng::seed_from_u64(1);
        let err = generator.generate_title("missing", &vars(), &mut rng).unwrap_err();
        assert_eq!(err, GeneratorError::UnknownTemplate("missing".to_string()));
        assert_eq!(err.to_string(), "Unknown template type: missing");
    }

    #[test]
    fn test_template_without_patterns() {
        let generator = ArticleGenerator::new(&config());
        let mut rng = StdRng::seed_from_u64(1);
        let err = generator.generate_intro("empty", &vars(), &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "Template 'empty' has no intro_patterns");
    }

    #[test]
    fn test_listicle_article() {
        let generator = ArticleGenerator::new(&config());
        let mut rng = StdRng::seed_from_u64(3);
        let article = generator.generate_article("listicle", &vars(), &mut rng).unwrap();

        assert_eq!(article.template_type, "listicle");
        assert_eq!(article.content_sections.len(), 7);
        assert_eq!(article.key_takeaways.len(), 5);
        assert!(article.seo.is_none());
        assert!(article.id.is_empty());
        assert!(!article.conclusion.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&article.generated_at).is_ok());
    }

    #[test]
    fn test_generic_template_gets_three_to_five_sections() {
        let generator = ArticleGenerator::new(&config());
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let article = generator
                .generate_article("location_based", &vars(), &mut rng)
                .unwrap();
            let n = article.content_sections.len();
            assert!((3..=5).contains(&n), "got {} sections", n);
        }
    }

    #[test]
    fn test_configured_conclusions_are_used() {
        let mut cfg = config();
        cfg.content_blocks.conclusions = Some(vec!["Try {product} today.".to_string()]);
        let generator = ArticleGenerator::new(&cfg);
        let mut rng = StdRng::seed_from_u64(9);
        let article = generator.generate_article("listicle", &vars(), &mut rng).unwrap();
        assert_eq!(article.conclusion, "Try Acme today.");
    }

    #[test]
    fn test_same_seed_same_article_text() {
        let generator = ArticleGenerator::new(&config());
        let a = generator
            .generate_article("location_based", &vars(), &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = generator
            .generate_article("location_based", &vars(), &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a.title, b.title);
        assert_eq!(a.content_sections, b.content_sections);
        assert_eq!(a.conclusion, b.conclusion);
    }

    #[test]
    fn test_meta_description_short_intro_kept() {
        assert_eq!(meta_description("  Short intro.  "), "Short intro.");
    }

    #[test]
    fn test_meta_description_long_intro_cut_at_word() {
        let intro = "word ".repeat(40);
        let meta = meta_description(&intro);
        assert!(meta.ends_with("..."));
        assert!(meta.chars().count() <= META_DESCRIPTION_LEN + 3);
        assert!(!meta.trim_end_matches("...").ends_with(' '));
        assert!(meta.trim_end_matches("...").ends_with("word"));
    }

    #[test]
    fn test_meta_keywords_unique_ordered() {
        let keywords = meta_keywords(
            "Secure Calls for Teams",
            "Secure calls keep teams private and the data safe",
        );
        assert_eq!(
            keywords,
            vec!["secure", "calls", "teams", "keep", "private", "data", "safe"]
        );
    }

    #[test]
    fn test_meta_keywords_capped() {
        let title = (0..20)
            .map(|i| format!("word{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(meta_keywords(&title, "").len(), MAX_META_KEYWORDS);
    }

    #[test]
    fn test_template_kind_from_name() {
        assert_eq!(TemplateKind::from_name("how_to"), TemplateKind::HowTo);
        assert_eq!(TemplateKind::from_name("location_based"), TemplateKind::Generic);
    }
}
