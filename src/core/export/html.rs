//! HTML exporter
//!
//! Generates a self-contained page: node boxes absolutely positioned at their
//! top-left coordinate, SVG connectors for edges, status as a CSS class.

use super::{escape_html, GraphExporter};
use crate::core::layout::{LayoutConfig, NodeSize};
use crate::core::models::{SkillStatus, TechGraph, TechNode};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML page template
const HTML_TEMPLATE: &str = include_str!("templates/techtree.html");

/// HTML exporter with a static rendering of the tree
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    node_size: NodeSize,
    title: String,
}

impl HtmlExporter {
    /// Create an exporter drawing boxes of the given size
    #[must_use]
    pub fn new(node_size: NodeSize) -> Self {
        Self {
            node_size,
            title: "Tech Tree".to_string(),
        }
    }

    /// Set the page title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the page using template substitution
    fn render_template(&self, graph: &TechGraph) -> String {
        let (width, height) = graph.extent(self.node_size.width, self.node_size.height);

        let mut output = HTML_TEMPLATE.to_string();
        output = output.replace("{{title}}", &escape_html(&self.title));
        output = output.replace("{{node_count}}", &graph.node_count().to_string());
        output = output.replace("{{edge_count}}", &graph.edge_count().to_string());
        output = output.replace("{{canvas_width}}", &format!("{width:.0}"));
        output = output.replace("{{canvas_height}}", &format!("{height:.0}"));
        output = output.replace("{{node_width}}", &format!("{:.0}", self.node_size.width));
        output = output.replace("{{node_height}}", &format!("{:.0}", self.node_size.height));
        output = output.replace("{{edges}}", &self.generate_edges_svg(graph));
        output = output.replace("{{nodes}}", &Self::generate_nodes_html(graph));
        output
    }

    /// One cubic connector per edge, from the bottom of the source box to the
    /// top of the target box
    fn generate_edges_svg(&self, graph: &TechGraph) -> String {
        let by_id: HashMap<&str, &TechNode> =
            graph.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
        let half_width = self.node_size.width / 2.0;

        let mut svg = String::new();
        for edge in &graph.edges {
            let (Some(source), Some(target)) = (
                by_id.get(edge.source.as_str()),
                by_id.get(edge.target.as_str()),
            ) else {
                continue;
            };

            let x1 = source.position.x + half_width;
            let y1 = source.position.y + self.node_size.height;
            let x2 = target.position.x + half_width;
            let y2 = target.position.y;
            let mid = (y1 + y2) / 2.0;
            let class = if edge.emphasized { "edge emphasized" } else { "edge" };

            let _ = writeln!(
                svg,
                "    <path id=\"{}\" class=\"{class}\" d=\"M {x1:.1} {y1:.1} C {x1:.1} {mid:.1}, {x2:.1} {mid:.1}, {x2:.1} {y2:.1}\" marker-end=\"url(#arrow)\"/>",
                escape_html(&edge.id)
            );
        }
        svg
    }

    fn generate_nodes_html(graph: &TechGraph) -> String {
        let mut html = String::new();
        for node in &graph.nodes {
            let _ = writeln!(
                html,
                "  <div class=\"tech-node {}\" id=\"{}\" data-category=\"{}\" style=\"left:{:.1}px;top:{:.1}px\">",
                node.status,
                escape_html(&node.id),
                escape_html(node.category.label()),
                node.position.x,
                node.position.y
            );
            let _ = writeln!(html, "    <div class=\"header\">");
            let _ = writeln!(
                html,
                "      <span class=\"title\">{}</span>",
                escape_html(&node.label)
            );
            let _ = writeln!(html, "      {}", Self::stars_html(node));
            let _ = writeln!(html, "    </div>");
            let _ = writeln!(
                html,
                "    <p class=\"description\">{}</p>",
                escape_html(&node.description)
            );
            let _ = writeln!(html, "  </div>");
        }
        html
    }

    /// Locked nodes show a lock; others show three stars. The first two are
    /// gold only for mastered nodes, the third is gold whenever it is earned.
    fn stars_html(node: &TechNode) -> String {
        if node.status == SkillStatus::Locked {
            return "<span class=\"lock\">🔒</span>".to_string();
        }

        let stars = node.stars();
        let glyphs: Vec<String> = (1..=3u8)
            .map(|level| {
                let class = if stars < level {
                    "star-inactive"
                } else if level == 3 || node.status == SkillStatus::Mastered {
                    "star-gold"
                } else {
                    "star-active"
                };
                let glyph = if stars >= level { '★' } else { '☆' };
                format!("<span class=\"{class}\">{glyph}</span>")
            })
            .collect();
        format!("<span class=\"stars\">{}</span>", glyphs.join(""))
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new(LayoutConfig::default().node_size())
    }
}

impl GraphExporter for HtmlExporter {
    fn render(&self, graph: &TechGraph) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(graph))
    }
}
