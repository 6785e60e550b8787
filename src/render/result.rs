//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::model::{Node, NodeKind};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Total number of nodes rendered
    pub node_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of links
    pub link_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of RawText and EscapeSequence nodes
    pub text_node_count: u32,

    /// Characters replaced by entity references in text content
    pub escaped_char_count: u32,

    /// Deepest nesting reached (root = 1)
    pub max_depth: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered node at the given depth.
    pub fn add_node(&mut self, node: &Node, depth: usize) {
        self.node_count = self.node_count.saturating_add(1);
        self.max_depth = self.max_depth.max(saturate(depth));
        let tally = match node.kind {
            NodeKind::Heading { .. } => &mut self.heading_count,
            NodeKind::Link { .. } => &mut self.link_count,
            NodeKind::Image { .. } => &mut self.image_count,
            NodeKind::Table { .. } => &mut self.table_count,
            NodeKind::ListItem => &mut self.list_item_count,
            NodeKind::RawText { .. } | NodeKind::EscapeSequence { .. } => {
                &mut self.text_node_count
            }
            _ => return,
        };
        *tally = tally.saturating_add(1);
    }

    /// Add escaped character count.
    pub fn add_escaped(&mut self, count: usize) {
        self.escaped_char_count = self.escaped_char_count.saturating_add(saturate(count));
    }
}

fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
