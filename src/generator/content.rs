//! Built-in content blocks and per-template section builders

use crate::config::ListicleItem;
use crate::{ComparisonTable, Resource, Section, Step, Subsection, Variables};

/// Listicle length when `{number}` is missing or not a number
pub const DEFAULT_LISTICLE_ITEMS: usize = 10;
/// At most this many key takeaways are kept
pub const MAX_TAKEAWAYS: usize = 5;

pub const DEFAULT_CONCLUSIONS: &[&str] = &[
    "In conclusion, {product} offers a comprehensive solution for {use_case}.",
    "With these features and benefits, it's clear why {product} is leading the way.",
    "The future of {topic} is here, and it's more accessible than ever.",
];

const PREREQUISITES: &[&str] = &[
    "A modern web browser (Chrome, Firefox, Safari, or Edge)",
    "Stable internet connection",
    "Microphone access (will be requested by browser)",
    "5 minutes of your time",
];

const STEPS: &[(&str, &str)] = &[
    (
        "Access the Platform",
        "Navigate to the website using any modern browser",
    ),
    (
        "Create Your Room",
        "Click the create button to generate a unique, encrypted room",
    ),
    (
        "Share the Link",
        "Send the secure link to your call participants",
    ),
    (
        "Start Calling",
        "Both parties join and start the encrypted conversation",
    ),
];

const TIPS: &[&str] = &[
    "Use headphones for better audio quality",
    "Test your microphone before important calls",
    "Close unnecessary browser tabs for better performance",
    "Use a wired connection for more stable calls",
];

const COMPARISON_ROWS: &[[&str; 3]] = &[
    ["Privacy Protection", "Complete", "Partial"],
    ["Browser-Based", "Yes", "No"],
    ["No Download Required", "Yes", "No"],
    ["Pay-Per-Use", "Yes", "Monthly Only"],
    ["Anonymous Usage", "Yes", "Requires Account"],
];

const ANALYSIS: &[(&str, &str)] = &[
    (
        "Privacy Features",
        "When it comes to privacy, the differences are clear...",
    ),
    ("Ease of Use", "User experience is crucial for adoption..."),
    (
        "Pricing Model",
        "The pricing structure reveals different philosophies...",
    ),
];

const CHAPTERS: &[(&str, &str, [&str; 3])] = &[
    (
        "Getting Started",
        "The fundamentals you need to know...",
        ["Basic Concepts", "First Steps", "Common Mistakes"],
    ),
    (
        "Advanced Techniques",
        "Once you master the basics...",
        ["Pro Strategies", "Optimization Tips", "Expert Secrets"],
    ),
    (
        "Best Practices",
        "Industry standards and recommendations...",
        ["Security", "Performance", "Scalability"],
    ),
];

const RESOURCES: &[(&str, &str)] = &[
    ("Documentation", "Complete API documentation"),
    ("Tutorial", "Step-by-step video guides"),
    ("Community", "Join our user community"),
    ("Support", "24/7 customer support"),
];

const GENERIC_SECTION_TITLES: &[&str] = &[
    "Understanding the Basics",
    "Key Features and Benefits",
    "How It Works",
    "Getting the Most Value",
    "Common Use Cases",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// One list item per configured block, up to `{number}`
pub fn listicle_sections(items: &[ListicleItem], variables: &Variables) -> Vec<Section> {
    let wanted = variables.number("number").unwrap_or(DEFAULT_LISTICLE_ITEMS);

    items
        .iter()
        .take(wanted)
        .enumerate()
        .map(|(i, item)| Section::ListItem {
            number: i + 1,
            title: item
                .title
                .clone()
                .unwrap_or_else(|| format!("Item {}", i + 1)),
            content: item.content.clone(),
            benefits: item.benefits.clone(),
        })
        .collect()
}

pub fn how_to_sections() -> Vec<Section> {
    vec![
        Section::Prerequisites {
            title: "What You'll Need".to_string(),
            items: owned(PREREQUISITES),
        },
        Section::Steps {
            title: "Step-by-Step Instructions".to_string(),
            steps: STEPS
                .iter()
                .map(|(title, description)| Step {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        },
        Section::Tips {
            title: "Pro Tips".to_string(),
            tips: owned(TIPS),
        },
    ]
}

pub fn comparison_sections(variables: &Variables) -> Vec<Section> {
    let table = ComparisonTable {
        headers: vec![
            "Feature".to_string(),
            variables.get_or("product1", "Product A").to_string(),
            variables.get_or("product2", "Product B").to_string(),
        ],
        rows: COMPARISON_ROWS.iter().map(|row| owned(row)).collect(),
    };

    let verdict = format!(
        "While both options have their merits, {} stands out for users who prioritize {}.",
        variables.get_or("product1", "our solution"),
        variables.get_or("priority", "privacy and convenience"),
    );

    vec![
        Section::ComparisonTable {
            title: "Feature Comparison".to_string(),
            table,
        },
        Section::Analysis {
            title: "Detailed Analysis".to_string(),
            subsections: ANALYSIS
                .iter()
                .map(|(title, content)| Subsection {
                    title: title.to_string(),
                    content: content.to_string(),
                })
                .collect(),
        },
        Section::Verdict {
            title: "Final Verdict".to_string(),
            content: verdict,
        },
    ]
}

pub fn ultimate_guide_sections(variables: &Variables) -> Vec<Section> {
    let mut sections = Vec::with_capacity(CHAPTERS.len() + 2);

    sections.push(Section::Overview {
        title: "Overview".to_string(),
        content: format!(
            "This comprehensive guide covers everything you need to know about {}. \
             From basics to advanced techniques.",
            variables.get_or("topic", "the subject")
        ),
    });

    for (title, content, subsections) in CHAPTERS {
        sections.push(Section::Chapter {
            title: title.to_string(),
            content: content.to_string(),
            subsections: owned(subsections),
        });
    }

    sections.push(Section::Resources {
        title: "Additional Resources".to_string(),
        resources: RESOURCES
            .iter()
            .map(|(kind, description)| Resource {
                kind: kind.to_string(),
                description: description.to_string(),
            })
            .collect(),
    });

    sections
}

/// `count` generic sections with cycling titles
pub fn generic_sections(count: usize, variables: &Variables) -> Vec<Section> {
    let topic = variables.get_or("topic", "the topic");
    (0..count)
        .map(|i| Section::Section {
            title: GENERIC_SECTION_TITLES[i % GENERIC_SECTION_TITLES.len()].to_string(),
            content: format!("This section explores important aspects of {}...", topic),
        })
        .collect()
}

/// Configured takeaways, or the built-in list; at most five
pub fn takeaways(configured: &[String], variables: &Variables) -> Vec<String> {
    if !configured.is_empty() {
        return configured.iter().take(MAX_TAKEAWAYS).cloned().collect();
    }

    vec![
        format!(
            "{} offers unmatched privacy protection",
            variables.get_or("product", "The solution")
        ),
        "No downloads or installations required".to_string(),
        "Pay-per-use model ensures cost efficiency".to_string(),
        "Enterprise-grade security for all users".to_string(),
        "Works on any device with a modern browser".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: Option<&str>) -> ListicleItem {
        ListicleItem {
            title: title.map(str::to_string),
            content: "Body".to_string(),
            benefits: vec!["Fast".to_string()],
        }
    }

    #[test]
    fn test_listicle_limited_by_number() {
        let items = vec![item(Some("One")), item(None), item(Some("Three"))];
        let vars = Variables::new().with("number", 2);
        let sections = listicle_sections(&items, &vars);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title(), "One");
        // Missing titles fall back to the item position
        assert_eq!(sections[1].title(), "Item 2");
    }

    #[test]
    fn test_listicle_limited_by_available_items() {
        let items = vec![item(Some("Only"))];
        let vars = Variables::new().with("number", 15);
        assert_eq!(listicle_sections(&items, &vars).len(), 1);
        assert!(listicle_sections(&[], &vars).is_empty());
    }

    #[test]
    fn test_how_to_layout() {
        let sections = how_to_sections();
        let titles: Vec<_> = sections.iter().map(Section::title).collect();
        assert_eq!(
            titles,
            vec!["What You'll Need", "Step-by-Step Instructions", "Pro Tips"]
        );
        match &sections[1] {
            Section::Steps { steps, .. } => assert_eq!(steps.len(), 4),
            other => panic!("expected steps, got {:?}", other),
        }
    }

    #[test]
    fn test_comparison_uses_product_variables() {
        let vars = Variables::new()
            .with("product1", "Acme")
            .with("product2", "Zoom");
        let sections = comparison_sections(&vars);
        match &sections[0] {
            Section::ComparisonTable { table, .. } => {
                assert_eq!(table.headers, vec!["Feature", "Acme", "Zoom"]);
                assert_eq!(table.rows.len(), 5);
            }
            other => panic!("expected table, got {:?}", other),
        }
        assert!(sections[2]
            .content()
            .unwrap()
            .contains("Acme stands out for users who prioritize privacy and convenience"));
    }

    #[test]
    fn test_comparison_defaults() {
        let sections = comparison_sections(&Variables::new());
        match &sections[0] {
            Section::ComparisonTable { table, .. } => {
                assert_eq!(table.headers, vec!["Feature", "Product A", "Product B"])
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_ultimate_guide_layout() {
        let vars = Variables::new().with("topic", "privacy");
        let sections = ultimate_guide_sections(&vars);
        assert_eq!(sections.len(), 5);
        assert!(sections[0].content().unwrap().contains("about privacy."));
        assert_eq!(sections[4].title(), "Additional Resources");
    }

    #[test]
    fn test_generic_titles_cycle() {
        let sections = generic_sections(6, &Variables::new());
        assert_eq!(sections[0].title(), "Understanding the Basics");
        assert_eq!(sections[5].title(), "Understanding the Basics");
        assert_eq!(
            sections[0].content(),
            Some("This section explores important aspects of the topic...")
        );
    }

    #[test]
    fn test_takeaways() {
        let defaults = takeaways(&[], &Variables::new().with("product", "Acme"));
        assert_eq!(defaults.len(), 5);
        assert_eq!(defaults[0], "Acme offers unmatched privacy protection");

        let configured: Vec<String> = (1..=7).map(|i| format!("T{}", i)).collect();
        assert_eq!(takeaways(&configured, &Variables::new()).len(), MAX_TAKEAWAYS);
    }
}
