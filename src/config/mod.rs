//! Configuration loading for seogen

mod defaults;
mod schema;

pub use defaults::{DEFAULT_CONFIG_YAML, DEFAULT_TEMPLATES_YAML};
pub use schema::{
    BrandConfig, Config, ContentBlocks, HtmlConfig, ListicleItem, SeoConfig, TemplateConfig,
    VariablePools, DEFAULT_KEYWORD_DENSITY, DEFAULT_LOGO_URL, DEFAULT_ORGANIZATION,
};

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";
pub const CONFIG_FILENAME: &str = "config.yaml";
/// Optional file next to the config that replaces its `templates` table
pub const TEMPLATES_FILENAME: &str = "templates.yaml";

/// Config file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => anyhow::bail!(
                "Unsupported config format '{}' for {} (expected .yaml, .yml or .json)",
                extension,
                path.display()
            ),
        }
    }
}

/// Load a config file, then replace its templates with a sibling
/// `templates.yaml` when one exists.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let mut config = parse_config(&content, ConfigFormat::from_path(path)?)
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    let templates_path = path
        .parent()
        .unwrap_or(Path::new("."))
        .join(TEMPLATES_FILENAME);
    if templates_path.exists() && templates_path != path {
        config.templates = load_templates(&templates_path)?;
        tracing::debug!(path = %templates_path.display(), "loaded templates");
    }

    tracing::debug!(
        path = %path.display(),
        templates = config.templates.len(),
        "loaded config"
    );
    Ok(config)
}

fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    // An empty YAML document deserializes as unit, not as an empty mapping
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = match format {
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

fn load_templates(path: &Path) -> Result<BTreeMap<String, TemplateConfig>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read templates: {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Invalid templates: {}", path.display()))
}

/// Write the starter `config.yaml` and `templates.yaml` into `dir`.
///
/// Refuses to overwrite an existing config unless `force` is set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let templates_path = dir.join(TEMPLATES_FILENAME);
    fs::write(&config_path, DEFAULT_CONFIG_YAML)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    fs::write(&templates_path, DEFAULT_TEMPLATES_YAML)
        .with_context(|| format!("Failed to write {}", templates_path.display()))?;

    Ok(vec![config_path, templates_path])
}
