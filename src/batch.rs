//! Batch generation: article specs, variable sampling, slugs and parallelism

use crate::config::VariablePools;
use crate::generator::{ArticleGenerator, GeneratorError};
use crate::optimizer::SeoOptimizer;
use crate::{Article, Variables};
use chrono::Datelike;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Template mix used when the config has no `template_distribution`
pub const DEFAULT_DISTRIBUTION: &[(&str, f64)] = &[
    ("listicle", 0.30),
    ("how_to", 0.25),
    ("comparison", 0.20),
    ("ultimate_guide", 0.15),
    ("location_based", 0.10),
];

/// Candidate values for `{number}`
pub const NUMBER_CHOICES: &[usize] = &[5, 7, 10, 12, 15];

/// Batches larger than this run in parallel when parallelism is requested
pub const PARALLEL_THRESHOLD: usize = 10;

/// Fallback `{service}` for location articles when no services are configured
const DEFAULT_SERVICE: &str = "Service";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Template distribution is empty")]
    EmptyDistribution,

    #[error("Template distribution weights must be non-negative and sum to a positive number")]
    InvalidWeights,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Everything needed to generate one article independently of the others
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSpec {
    /// `article_0001`, `article_0002`, ...
    pub id: String,
    pub template_type: String,
    pub variables: Variables,
    /// Seed for the article's own RNG
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub count: usize,
    /// Template name -> weight; [`DEFAULT_DISTRIBUTION`] when `None`
    pub distribution: Option<BTreeMap<String, f64>>,
    pub parallel: bool,
    /// Worker threads for parallel runs (default: rayon's global pool)
    pub workers: Option<usize>,
    /// Fixed seed for a reproducible batch
    pub seed: Option<u64>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 10,
            distribution: None,
            parallel: true,
            workers: None,
            seed: None,
        }
    }
}

impl BatchOptions {
    /// Force every article onto one template
    pub fn single_template(mut self, template: &str) -> Self {
        let mut distribution = BTreeMap::new();
        distribution.insert(template.to_string(), 1.0);
        self.distribution = Some(distribution);
        self
    }
}

/// An article that could not be generated
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub id: String,
    pub template_type: String,
    pub error: GeneratorError,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Generated articles in spec order
    pub articles: Vec<Article>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Number of generated articles per template
    pub fn template_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for article in &self.articles {
            *counts.entry(article.template_type.clone()).or_insert(0) += 1;
        }
        counts
    }
}

pub struct BatchProcessor {
    generator: ArticleGenerator,
    pools: VariablePools,
    optimizer: Option<SeoOptimizer>,
}

impl BatchProcessor {
    pub fn new(generator: ArticleGenerator, pools: VariablePools) -> Self {
        Self {
            generator,
            pools,
            optimizer: None,
        }
    }

    /// Optimize every article right after it is generated
    pub fn with_optimizer(mut self, optimizer: SeoOptimizer) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    /// Generate a batch. Per-article failures are logged and collected; only
    /// an unusable distribution or worker pool aborts the batch.
    pub fn generate_batch(&self, options: &BatchOptions) -> Result<BatchOutcome, BatchError> {
        let specs = self.generate_specs(options)?;
        let parallel = options.parallel && options.count > PARALLEL_THRESHOLD;
        tracing::info!(count = specs.len(), parallel, "generating articles");

        let results = if parallel {
            self.generate_parallel(&specs, options.workers)?
        } else {
            specs.iter().map(|spec| self.generate_single(spec)).collect()
        };

        let mut outcome = BatchOutcome::default();
        for (spec, result) in specs.iter().zip(results) {
            match result {
                Ok(article) => outcome.articles.push(article),
                Err(error) => {
                    tracing::warn!(id = %spec.id, template = %spec.template_type, %error, "skipping article");
                    outcome.failures.push(BatchFailure {
                        id: spec.id.clone(),
                        template_type: spec.template_type.clone(),
                        error,
                    });
                }
            }
        }

        dedupe_slugs(&mut outcome.articles);
        tracing::info!(
            generated = outcome.articles.len(),
            failed = outcome.failures.len(),
            "batch complete"
        );
        Ok(outcome)
    }

    /// Draw template and variables for every article from one RNG, so a
    /// seeded batch is identical regardless of execution mode
    pub fn generate_specs(&self, options: &BatchOptions) -> Result<Vec<ArticleSpec>, BatchError> {
        let (names, weights) = normalized_distribution(options.distribution.as_ref())?;
        let index = WeightedIndex::new(&weights).map_err(|_| BatchError::InvalidWeights)?;
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let year = chrono::Local::now().year();

        let specs = (0..options.count)
            .map(|i| {
                let template_type = names[index.sample(&mut rng)].clone();
                let variables = self.generate_variables(&template_type, year, &mut rng);
                ArticleSpec {
                    id: format!("article_{:04}", i + 1),
                    template_type,
                    variables,
                    seed: rng.gen(),
                }
            })
            .collect();
        Ok(specs)
    }

    /// Sample placeholder values for one article
    pub fn generate_variables<R: Rng + ?Sized>(
        &self,
        template_type: &str,
        year: i32,
        rng: &mut R,
    ) -> Variables {
        let pools = &self.pools;
        let mut vars = Variables::new();
        vars.insert("year", year);
        if let Some(number) = NUMBER_CHOICES.choose(rng) {
            vars.insert("number", number);
        }

        if let Some(product) = pools.products.choose(rng) {
            vars.insert("product", product);
        }
        if let Some(primary) = pools.products.first() {
            vars.insert("product1", primary);
        }
        if let Some(c) = pools.competitors.choose(rng) {
            vars.insert("product2", c);
        }
        if let Some(c) = pools.competitors.choose(rng) {
            vars.insert("product3", c);
        }

        let common = [
            ("use_case", &pools.use_cases),
            ("audience", &pools.audiences),
            ("problem", &pools.problems),
            ("achieve_goal", &pools.goals),
            ("benefit", &pools.benefits),
        ];
        for (key, pool) in common {
            if let Some(value) = pool.choose(rng) {
                vars.insert(key, value);
            }
        }

        match template_type {
            "location_based" => {
                if let Some(location) = pools.locations.choose(rng) {
                    vars.insert("location", location);
                    let service = pools
                        .services
                        .choose(rng)
                        .map_or(DEFAULT_SERVICE, String::as_str);
                    vars.insert("service", service);
                }
            }
            "ultimate_guide" => {
                if let Some(topic) = pools.topics.choose(rng) {
                    vars.insert("topic", topic);
                }
            }
            "how_to" => {
                if let Some(action) = pools.actions.choose(rng) {
                    vars.insert("action", action);
                }
            }
            _ => {}
        }

        vars
    }

    /// Generate one article from its spec with the spec's own RNG
    pub fn generate_single(&self, spec: &ArticleSpec) -> Result<Article, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(spec.seed);
        let mut article =
            self.generator
                .generate_article(&spec.template_type, &spec.variables, &mut rng)?;

        article.id = spec.id.clone();
        article.slug = slugify(&article.title);
        if article.slug.is_empty() {
            article.slug = spec.id.clone();
        }

        if let Some(optimizer) = &self.optimizer {
            article = optimizer.optimize_article(&article);
        }
        tracing::debug!(id = %article.id, template = %article.template_type, "generated article");
        Ok(article)
    }

    fn generate_parallel(
        &self,
        specs: &[ArticleSpec],
        workers: Option<usize>,
    ) -> Result<Vec<Result<Article, GeneratorError>>, BatchError> {
        let done = AtomicUsize::new(0);
        let run = || -> Vec<Result<Article, GeneratorError>> {
            specs
                .par_iter()
                .map(|spec| {
                    let result = self.generate_single(spec);
                    let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                    tracing::debug!(id = %spec.id, done = n, total = specs.len(), "finished");
                    result
                })
                .collect()
        };

        match workers {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }
}

/// Template names with their normalized weights, in a stable order
fn normalized_distribution(
    distribution: Option<&BTreeMap<String, f64>>,
) -> Result<(Vec<String>, Vec<f64>), BatchError> {
    let entries: Vec<(String, f64)> = match distribution {
        Some(map) => map.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        None => DEFAULT_DISTRIBUTION
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
    };

    if entries.is_empty() {
        return Err(BatchError::EmptyDistribution);
    }
    if entries.iter().any(|(_, w)| !w.is_finite() || *w < 0.0) {
        return Err(BatchError::InvalidWeights);
    }
    let total: f64 = entries.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return Err(BatchError::InvalidWeights);
    }

    Ok(entries.into_iter().map(|(k, w)| (k, w / total)).unzip())
}

/// URL-safe slug: lowercase ASCII letters, digits and single hyphens
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for ch in lowered.trim().chars() {
        let ch = if ch == ' ' { '-' } else { ch };
        let allowed = ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-';
        if !allowed || (ch == '-' && slug.ends_with('-')) {
            continue;
        }
        slug.push(ch);
    }

    slug.trim_matches('-').to_string()
}

/// Give repeated slugs `-2`, `-3`, ... suffixes in batch order
fn dedupe_slugs(articles: &mut [Article]) {
    let mut used: HashSet<String> = HashSet::new();
    for article in articles.iter_mut() {
        if used.insert(article.slug.clone()) {
            continue;
        }
        let mut n = 2;
        let unique = loop {
            let candidate = format!("{}-{}", article.slug, n);
            if !used.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        used.insert(unique.clone());
        article.slug = unique;
    }
}
