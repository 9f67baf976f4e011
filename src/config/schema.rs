//! Config schema and deserialization

use crate::WordCountRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Organization name used in schema.org markup when none is configured
pub const DEFAULT_ORGANIZATION: &str = "Your Company";
/// Publisher logo used in schema.org markup when none is configured
pub const DEFAULT_LOGO_URL: &str = "https://example.com/logo.png";
/// Target keyword density (fraction), informational only
pub const DEFAULT_KEYWORD_DENSITY: f64 = 0.02;

/// Brand information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Title and intro patterns of one template kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub title_patterns: Vec<String>,
    #[serde(default)]
    pub intro_patterns: Vec<String>,
}

/// Candidate values sampled into article variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariablePools {
    /// First entry is the primary product (`{product1}`)
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub audiences: Vec<String>,
    #[serde(default)]
    pub problems: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl VariablePools {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
            && self.competitors.is_empty()
            && self.use_cases.is_empty()
            && self.audiences.is_empty()
            && self.problems.is_empty()
            && self.goals.is_empty()
            && self.benefits.is_empty()
            && self.locations.is_empty()
            && self.services.is_empty()
            && self.topics.is_empty()
            && self.actions.is_empty()
    }
}

/// Reusable listicle entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListicleItem {
    /// Missing titles become "Item {n}"
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// Prewritten content blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlocks {
    #[serde(default)]
    pub listicle_items: Vec<ListicleItem>,
    /// Conclusion patterns; built-in patterns are used when absent
    #[serde(default)]
    pub conclusions: Option<Vec<String>>,
    /// Key takeaways; built-in takeaways are used when empty
    #[serde(default)]
    pub takeaways: Vec<String>,
}

/// SEO settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoConfig {
    /// Target keyword density as a fraction
    #[serde(default = "default_keyword_density")]
    pub keyword_density: f64,
    #[serde(default = "default_min_word_count")]
    pub min_word_count: usize,
    #[serde(default = "default_max_word_count")]
    pub max_word_count: usize,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

fn default_keyword_density() -> f64 {
    DEFAULT_KEYWORD_DENSITY
}

fn default_min_word_count() -> usize {
    crate::analyzer::scoring::DEFAULT_MIN_WORD_COUNT
}

fn default_max_word_count() -> usize {
    crate::analyzer::scoring::DEFAULT_MAX_WORD_COUNT
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            keyword_density: DEFAULT_KEYWORD_DENSITY,
            min_word_count: default_min_word_count(),
            max_word_count: default_max_word_count(),
            organization: None,
            logo_url: None,
        }
    }
}

impl SeoConfig {
    pub fn word_count_range(&self) -> WordCountRange {
        WordCountRange::new(self.min_word_count, self.max_word_count)
    }

    pub fn organization(&self) -> &str {
        self.organization.as_deref().unwrap_or(DEFAULT_ORGANIZATION)
    }

    pub fn logo_url(&self) -> &str {
        self.logo_url.as_deref().unwrap_or(DEFAULT_LOGO_URL)
    }
}

/// HTML rendering settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Page template with `{{title}}`-style placeholders
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}

/// Root config structure for config.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub brand: BrandConfig,

    /// Template name -> patterns
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateConfig>,

    #[serde(default)]
    pub variable_pools: VariablePools,

    #[serde(default)]
    pub content_blocks: ContentBlocks,

    #[serde(default)]
    pub seo: SeoConfig,

    #[serde(default)]
    pub html: HtmlConfig,

    /// Template name -> relative weight; built-in distribution when absent
    #[serde(default)]
    pub template_distribution: Option<BTreeMap<String, f64>>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, min_words: Option<usize>, max_words: Option<usize>) -> Self {
        if let Some(min) = min_words {
            self.seo.min_word_count = min;
        }
        if let Some(max) = max_words {
            self.seo.max_word_count = max;
        }
        self
    }

    /// Problems that make the config unusable for generation
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.seo.min_word_count > self.seo.max_word_count {
            problems.push(format!(
                "seo.min_word_count ({}) is greater than seo.max_word_count ({})",
                self.seo.min_word_count, self.seo.max_word_count
            ));
        }

        for (name, template) in &self.templates {
            if template.title_patterns.is_empty() {
                problems.push(format!("template '{}' has no title_patterns", name));
            }
            if template.intro_patterns.is_empty() {
                problems.push(format!("template '{}' has no intro_patterns", name));
            }
        }

        if let Some(distribution) = &self.template_distribution {
            for (name, weight) in distribution {
                if !weight.is_finite() || *weight < 0.0 {
                    problems.push(format!(
                        "template_distribution weight for '{}' must be a non-negative number",
                        name
                    ));
                }
            }
            if distribution.values().sum::<f64>() <= 0.0 {
                problems.push("template_distribution weights sum to zero".to_string());
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.seo.min_word_count, 800);
        assert_eq!(config.seo.max_word_count, 2500);
        assert_eq!(config.seo.organization(), "Your Company");
        assert_eq!(config.seo.logo_url(), "https://example.com/logo.png");
    }

    #[test]
    fn test_partial_seo_section() {
        let config: Config = serde_yaml_ng::from_str(
            r#"
seo:
  min_word_count: 300
  organization: Acme
"#,
        )
        .unwrap();
        assert_eq!(config.seo.word_count_range(), WordCountRange::new(300, 2500));
        assert_eq!(config.seo.organization(), "Acme");
        assert_eq!(config.seo.keyword_density, 0.02);
    }

    #[test]
    fn test_listicle_item_optional_fields() {
        let config: Config = serde_yaml_ng::from_str(
            r#"
content_blocks:
  listicle_items:
    - content: Only content
    - title: Titled
      benefits: [Fast]
"#,
        )
        .unwrap();
        let items = &config.content_blocks.listicle_items;
        assert_eq!(items[0].title, None);
        assert_eq!(items[1].benefits, vec!["Fast"]);
        assert!(config.content_blocks.conclusions.is_none());
    }

    #[test]
    fn test_merge_with_cli() {
        let config = Config::default().merge_with_cli(Some(100), None);
        assert_eq!(config.seo.word_count_range(), WordCountRange::new(100, 2500));
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = Config::default();
        config.seo.min_word_count = 3000;
        config.templates.insert(
            "listicle".to_string(),
            TemplateConfig {
                title_patterns: vec!["{number} Tips".to_string()],
                intro_patterns: vec![],
            },
        );
        let mut distribution = BTreeMap::new();
        distribution.insert("listicle".to_string(), 0.0);
        config.template_distribution = Some(distribution);

        let problems = config.validate();
        assert_eq!(problems.len(), 3);
        assert!(problems[0].contains("min_word_count"));
        assert!(problems[1].contains("intro_patterns"));
        assert!(problems[2].contains("sum to zero"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_empty());
    }
}
