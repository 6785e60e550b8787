//! Table types.

use super::{Node, NodeKind};
use serde::{Deserialize, Serialize};

/// Explicit table cell alignment.
///
/// Left alignment is the implicit default and is represented by the
/// absence of a value, never by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

impl CellAlign {
    /// Get the value of the HTML `align` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellAlign::Center => "center",
            CellAlign::Right => "right",
        }
    }
}

/// Whether cells render as header (`th`) or body (`td`) cells.
///
/// The context is decided by the enclosing table, not stored on rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellContext {
    /// Cells of the header row
    Header,
    /// Cells of any other row
    #[default]
    Body,
}

impl CellContext {
    /// Get the cell tag name for this context.
    pub fn cell_tag(&self) -> &'static str {
        match self {
            CellContext::Header => "th",
            CellContext::Body => "td",
        }
    }
}

impl Node {
    /// Split a table's rows into the header row and the body rows.
    ///
    /// Only the first row can be a header, and only when the table is
    /// flagged `has_header_row`. Non-table nodes have no header and all
    /// children are body rows.
    pub fn table_sections(&self) -> (Option<&Node>, &[Node]) {
        match self.kind {
            NodeKind::Table {
                has_header_row: true,
            } => match self.children.split_first() {
                Some((head, body)) => (Some(head), body),
                None => (None, self.children.as_slice()),
            },
            _ => (None, self.children.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str) -> Node {
        Node::table_row(vec![Node::table_cell(None, vec![Node::text(text)])])
    }

    #[test]
    fn test_align_as_str() {
        assert_eq!(CellAlign::Center.as_str(), "center");
        assert_eq!(CellAlign::Right.as_str(), "right");
    }

    #[test]
    fn test_cell_context_tag() {
        assert_eq!(CellContext::Header.cell_tag(), "th");
        assert_eq!(CellContext::Body.cell_tag(), "td");
        assert_eq!(CellContext::default(), CellContext::Body);
    }

    #[test]
    fn test_table_sections_with_header() {
        let table = Node::table(true, vec![row("h"), row("a"), row("b")]);
        let (head, body) = table.table_sections();
        assert_eq!(head.map(|h| h.plain_text()), Some("h".to_string()));
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_table_sections_without_header() {
        let table = Node::table(false, vec![row("a"), row("b")]);
        let (head, body) = table.table_sections();
        assert!(head.is_none());
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_table_sections_empty_header_table() {
        let table = Node::table(true, vec![]);
        let (head, body) = table.table_sections();
        assert!(head.is_none());
        assert!(body.is_empty());
    }
}
