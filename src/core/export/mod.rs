//! Graph exporters
//!
//! Serializes a built [`TechGraph`] for the rendering side: JSON for a web
//! renderer, Mermaid for Markdown viewers, and a standalone HTML page.

pub mod html;
pub mod json;
pub mod mermaid;

pub use html::HtmlExporter;
pub use json::JsonExporter;
pub use mermaid::MermaidExporter;

use crate::core::layout::NodeSize;
use crate::core::models::TechGraph;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Node/edge JSON consumed by the web renderer
    Json,
    /// Mermaid flowchart in a Markdown code fence
    Mermaid,
    /// Self-contained HTML page
    Html,
}

impl ExportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Mermaid => "md",
            Self::Html => "html",
        }
    }

    /// Exporter for this format; `node_size` must match the size the graph
    /// was laid out with so HTML boxes line up with their positions
    #[must_use]
    pub fn exporter(self, node_size: NodeSize) -> Box<dyn GraphExporter> {
        match self {
            Self::Json => Box::new(JsonExporter::pretty()),
            Self::Mermaid => Box::new(MermaidExporter::new()),
            Self::Html => Box::new(HtmlExporter::new(node_size)),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "mermaid" | "md" | "markdown" => Ok(Self::Mermaid),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Mermaid => write!(f, "mermaid"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Trait for graph exporters
pub trait GraphExporter {
    /// Render the graph as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, graph: &TechGraph) -> Result<String, Box<dyn Error>>;

    /// Render the graph and write it to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn export(&self, graph: &TechGraph, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(graph)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Escape text for HTML element content and attribute values
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
