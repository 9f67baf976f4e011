//! Markdown heading structure

use crate::HeadingStructure;

const H1_PREFIX: &str = "# ";
const H2_PREFIX: &str = "## ";
const H3_PREFIX: &str = "### ";

/// Count lines starting with `# `, `## ` and `### ` (deeper levels are ignored)
pub fn analyze_headings(text: &str) -> HeadingStructure {
    let (mut h1, mut h2, mut h3) = (0, 0, 0);

    for line in text.split('\n') {
        if line.starts_with(H1_PREFIX) {
            h1 += 1;
        } else if line.starts_with(H2_PREFIX) {
            h2 += 1;
        } else if line.starts_with(H3_PREFIX) {
            h3 += 1;
        }
    }

    HeadingStructure::from_counts(h1, h2, h3)
}
