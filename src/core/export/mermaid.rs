//! Mermaid exporter for tech-tree graphs
//!
//! Generates a top-to-bottom Mermaid flowchart that can be embedded in
//! Markdown files and rendered by GitHub, GitLab, and other viewers.

use super::GraphExporter;
use crate::core::models::{SkillStatus, TechGraph, TechNode};
use std::error::Error;
use std::fmt::Write;

/// Statuses in the order their class definitions are emitted
const STATUS_CLASSES: [(SkillStatus, &str); 5] = [
    (SkillStatus::Locked, "fill:#1f1f24,stroke:#444,color:#888"),
    (SkillStatus::Available, "fill:#13324a,stroke:#3fa9f5,color:#fff"),
    (SkillStatus::InProgress, "fill:#3a2f10,stroke:#f5a623,color:#fff"),
    (SkillStatus::Completed, "fill:#163a24,stroke:#4caf50,color:#fff"),
    (SkillStatus::Mastered, "fill:#3a3210,stroke:#ffd700,color:#fff"),
];

/// Generator for Mermaid flowchart syntax
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidExporter;

impl MermaidExporter {
    /// Create a new Mermaid exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate the flowchart, wrapped in a Markdown code fence
    #[must_use]
    pub fn generate(graph: &TechGraph) -> String {
        let mut output = String::from("```mermaid\nflowchart TB\n");

        for node in &graph.nodes {
            let safe_id = Self::sanitize_id(&node.id);
            let label = Self::node_label(node);
            let _ = writeln!(output, "    {safe_id}[\"{label}\"]:::{}", node.status);
        }

        if !graph.edges.is_empty() {
            output.push('\n');
        }

        for edge in &graph.edges {
            let source = Self::sanitize_id(&edge.source);
            let target = Self::sanitize_id(&edge.target);
            let arrow = if edge.emphasized { "==>" } else { "-->" };
            let _ = writeln!(output, "    {source} {arrow} {target}");
        }

        output.push('\n');
        for (status, style) in STATUS_CLASSES {
            let _ = writeln!(output, "    classDef {status} {style}");
        }

        output.push_str("```\n");
        output
    }

    /// Label with the subject name and its star glyphs (or a lock)
    fn node_label(node: &TechNode) -> String {
        let name = Self::escape_label(&node.label);
        if node.status == SkillStatus::Locked {
            return format!("{name}<br/>🔒");
        }
        let stars = usize::from(node.stars());
        format!("{name}<br/>{}{}", "★".repeat(stars), "☆".repeat(3 - stars))
    }

    /// Mermaid labels cannot contain raw double quotes
    fn escape_label(label: &str) -> String {
        label.replace('"', "#quot;")
    }

    /// Sanitize a node id for use as a Mermaid node ID
    fn sanitize_id(id: &str) -> String {
        id.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl GraphExporter for MermaidExporter {
    fn render(&self, graph: &TechGraph) -> Result<String, Box<dyn Error>> {
        Ok(Self::generate(graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;
    use crate::core::models::TechEdge;

    fn node(id: &str, label: &str, status: SkillStatus) -> TechNode {
        TechNode::new(
            id.to_string(),
            label.to_string(),
            String::new(),
            status,
            Category::Common,
        )
    }

    #[test]
    fn test_mermaid_generation() {
        let mut graph = TechGraph::new();
        graph.nodes.push(node("node-0", "Python", SkillStatus::Mastered));
        graph.nodes.push(node("node-1", "OOP & \"Functional\"", SkillStatus::Available));
        graph.nodes.push(node("node-2", "Linux", SkillStatus::Locked));
        graph.edges.push(TechEdge::new("node-0", "node-1", true));
        graph.edges.push(TechEdge::new("node-1", "node-2", false));

        let diagram = MermaidExporter::generate(&graph);

        assert!(diagram.starts_with("```mermaid\nflowchart TB\n"));
        assert!(diagram.contains("node_0[\"Python<br/>★★★\"]:::mastered"));
        assert!(diagram.contains("node_1[\"OOP & #quot;Functional#quot;<br/>★☆☆\"]:::available"));
        assert!(diagram.contains("node_2[\"Linux<br/>🔒\"]:::locked"));
        assert!(diagram.contains("node_0 ==> node_1"));
        assert!(diagram.contains("node_1 --> node_2"));
        assert!(diagram.contains("classDef in_progress"));
        assert!(diagram.trim_end().ends_with("```"));
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(MermaidExporter::sanitize_id("node-12"), "node_12");
        assert_eq!(MermaidExporter::sanitize_id("a b"), "a_b");
    }
}
