//! Reporter module for output formatting

pub mod console;
pub mod html;
pub mod json;
pub mod markdown;

pub use console::{ConsoleReporter, GenerationSummary};
pub use html::HtmlConverter;
pub use json::JsonReporter;
pub use markdown::MarkdownRenderer;
