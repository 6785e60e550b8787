//! Document tree nodes.

use super::CellAlign;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One element of a parsed document tree.
///
/// A node owns its children; trees are finite and acyclic by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The variant and its own fields
    #[serde(flatten)]
    pub kind: NodeKind,

    /// Ordered child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// The closed set of node variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Top-level block sequence
    Document,

    /// A paragraph of inline content
    Paragraph,

    /// A heading; level is expected in 1-6 but not enforced
    Heading {
        /// Heading level
        level: u32,
    },

    /// A block quote
    Quote,

    /// A list; `start` present means ordered
    List {
        /// Starting number for ordered lists
        #[serde(default)]
        start: Option<i64>,
    },

    /// An item of a list
    ListItem,

    /// A fenced or indented code block
    BlockCode {
        /// Info-string language, used as the code class
        #[serde(default)]
        language: Option<String>,
    },

    /// A table of rows
    Table {
        /// Whether the first row is a header row
        #[serde(default)]
        has_header_row: bool,
    },

    /// A row of table cells
    TableRow,

    /// A table cell
    TableCell {
        /// Explicit alignment (absent = left)
        #[serde(default)]
        align: Option<CellAlign>,
    },

    /// A thematic break
    Separator,

    /// Strong emphasis
    Strong,

    /// Emphasis
    Emphasis,

    /// Inline code span
    InlineCode,

    /// Struck-through text
    Strikethrough,

    /// A hyperlink wrapping its children
    Link {
        /// Link URL
        target: String,
    },

    /// An image; children are never rendered
    Image {
        /// Image URL
        target: String,
        /// Alternative text
        alt: String,
        /// Title (tooltip)
        title: String,
    },

    /// Literal text
    RawText {
        /// Text payload
        content: String,
    },

    /// A backslash escape, carrying the escaped character
    EscapeSequence {
        /// Text payload
        content: String,
    },
}

impl NodeKind {
    /// Get the variant name, e.g. `"TableCell"`.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Quote => "Quote",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::BlockCode { .. } => "BlockCode",
            NodeKind::Table { .. } => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell { .. } => "TableCell",
            NodeKind::Separator => "Separator",
            NodeKind::Strong => "Strong",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::InlineCode => "InlineCode",
            NodeKind::Strikethrough => "Strikethrough",
            NodeKind::Link { .. } => "Link",
            NodeKind::Image { .. } => "Image",
            NodeKind::RawText { .. } => "RawText",
            NodeKind::EscapeSequence { .. } => "EscapeSequence",
        }
    }

    /// Check if this kind renders as a void element.
    pub fn is_void(&self) -> bool {
        matches!(self, NodeKind::Separator | NodeKind::Image { .. })
    }

    /// Get the text payload of `RawText` and `EscapeSequence`.
    pub fn text(&self) -> Option<&str> {
        match self {
            NodeKind::RawText { content } | NodeKind::EscapeSequence { content } => Some(content),
            _ => None,
        }
    }
}

impl Node {
    /// Create a node with children.
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Create a node without children.
    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Create a document root.
    pub fn document(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Document, children)
    }

    /// Create a paragraph.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Paragraph, children)
    }

    /// Create a heading. The level is stored as given.
    pub fn heading(level: u32, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Heading { level }, children)
    }

    /// Create a block quote.
    pub fn quote(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Quote, children)
    }

    /// Create an unordered list.
    pub fn bullet_list(items: Vec<Node>) -> Self {
        Self::new(NodeKind::List { start: None }, items)
    }

    /// Create an ordered list starting at `start`.
    pub fn ordered_list(start: i64, items: Vec<Node>) -> Self {
        Self::new(NodeKind::List { start: Some(start) }, items)
    }

    /// Create a list item.
    pub fn list_item(children: Vec<Node>) -> Self {
        Self::new(NodeKind::ListItem, children)
    }

    /// Create a code block.
    pub fn block_code(language: Option<&str>, children: Vec<Node>) -> Self {
        Self::new(
            NodeKind::BlockCode {
                language: language.map(str::to_string),
            },
            children,
        )
    }

    /// Create a table.
    pub fn table(has_header_row: bool, rows: Vec<Node>) -> Self {
        Self::new(NodeKind::Table { has_header_row }, rows)
    }

    /// Create a table row.
    pub fn table_row(cells: Vec<Node>) -> Self {
        Self::new(NodeKind::TableRow, cells)
    }

    /// Create a table cell.
    pub fn table_cell(align: Option<CellAlign>, children: Vec<Node>) -> Self {
        Self::new(NodeKind::TableCell { align }, children)
    }

    /// Create a thematic break.
    pub fn separator() -> Self {
        Self::leaf(NodeKind::Separator)
    }

    /// Create a strong span.
    pub fn strong(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Strong, children)
    }

    /// Create an emphasis span.
    pub fn emphasis(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Emphasis, children)
    }

    /// Create an inline code span.
    pub fn inline_code(children: Vec<Node>) -> Self {
        Self::new(NodeKind::InlineCode, children)
    }

    /// Create a strikethrough span.
    pub fn strikethrough(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Strikethrough, children)
    }

    /// Create a link.
    pub fn link(target: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(
            NodeKind::Link {
                target: target.into(),
            },
            children,
        )
    }

    /// Create an image.
    pub fn image(
        target: impl Into<String>,
        alt: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self::leaf(NodeKind::Image {
            target: target.into(),
            alt: alt.into(),
            title: title.into(),
        })
    }

    /// Create a raw text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::leaf(NodeKind::RawText {
            content: content.into(),
        })
    }

    /// Create an escape sequence node.
    pub fn escape(content: impl Into<String>) -> Self {
        Self::leaf(NodeKind::EscapeSequence {
            content: content.into(),
        })
    }

    /// Replace the children and return self.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Parse a tree from its JSON form.
    ///
    /// Each node is an object with a snake_case `"type"` tag, the variant's
    /// own fields, and an optional `"children"` array.
    ///
    /// Nesting depth is not limited; the stack grows on the heap as needed.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::deserialize_unbounded(serde_json::Deserializer::from_str(json))
    }

    /// Read a tree from a JSON reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Self::deserialize_unbounded(serde_json::Deserializer::from_reader(reader))
    }

    fn deserialize_unbounded<'de, R>(mut de: serde_json::Deserializer<R>) -> Result<Self>
    where
        R: serde_json::de::Read<'de>,
    {
        de.disable_recursion_limit();
        let node = Node::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(node)
    }

    /// Get the variant name.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Check if this node renders as a void element.
    pub fn is_void(&self) -> bool {
        self.kind.is_void()
    }

    /// Check if this node is a text leaf.
    pub fn is_text(&self) -> bool {
        self.kind.text().is_some()
    }

    /// Check if this node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Count the nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Depth of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Get the unescaped text of this subtree in document order.
    ///
    /// Image alt text stands in for the image; separators contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut output = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match &node.kind {
                NodeKind::RawText { content } | NodeKind::EscapeSequence { content } => {
                    output.push_str(content)
                }
                NodeKind::Image { alt, .. } => output.push_str(alt),
                NodeKind::Separator => {}
                _ => stack.extend(node.children.iter().rev()),
            }
        }
        output
    }
}

impl Drop for Node {
    /// Tear the tree down with a heap stack so deep trees cannot overflow.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let h = Node::heading(2, vec![Node::text("Title")]);
        assert_eq!(h.kind, NodeKind::Heading { level: 2 });
        assert_eq!(h.children.len(), 1);
        assert_eq!(h.kind_name(), "Heading");

        let list = Node::ordered_list(5, vec![]);
        assert_eq!(list.kind, NodeKind::List { start: Some(5) });
        assert!(list.is_empty());
    }

    #[test]
    fn test_void_and_text() {
        assert!(Node::separator().is_void());
        assert!(Node::image("a.png", "a", "").is_void());
        assert!(!Node::paragraph(vec![]).is_void());

        assert!(Node::text("x").is_text());
        assert!(Node::escape("*").is_text());
        assert!(!Node::strong(vec![]).is_text());
    }

    #[test]
    fn test_node_count_and_depth() {
        let doc = Node::document(vec![
            Node::paragraph(vec![Node::strong(vec![Node::text("a")])]),
            Node::separator(),
        ]);
        assert_eq!(doc.node_count(), 5);
        assert_eq!(doc.depth(), 4);
        assert_eq!(Node::text("x").depth(), 1);
    }

    #[test]
    fn test_plain_text_order() {
        let doc = Node::document(vec![
            Node::paragraph(vec![
                Node::text("Hello "),
                Node::emphasis(vec![Node::text("<world>")]),
            ]),
            Node::paragraph(vec![Node::image("x.png", "pic", "t"), Node::escape("!")]),
        ]);
        assert_eq!(doc.plain_text(), "Hello <world>pic!");
    }

    #[test]
    fn test_with_children_and_push() {
        let mut p = Node::paragraph(vec![]).with_children(vec![Node::text("a")]);
        p.push(Node::text("b"));
        assert_eq!(p.children.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "type": "document",
            "children": [
                {"type": "heading", "level": 1, "children": [{"type": "raw_text", "content": "Hi"}]},
                {"type": "list", "start": 3, "children": [{"type": "list_item"}]},
                {"type": "table_cell", "align": "center"}
            ]
        }"#;
        let doc = Node::from_json(json).unwrap();
        assert_eq!(doc.kind, NodeKind::Document);
        assert_eq!(doc.children[0].kind, NodeKind::Heading { level: 1 });
        assert_eq!(doc.children[1].kind, NodeKind::List { start: Some(3) });
        assert_eq!(
            doc.children[2].kind,
            NodeKind::TableCell {
                align: Some(CellAlign::Center)
            }
        );
    }

    #[test]
    fn test_from_json_optional_fields_default() {
        let list = Node::from_json(r#"{"type": "list"}"#).unwrap();
        assert_eq!(list.kind, NodeKind::List { start: None });

        let table = Node::from_json(r#"{"type": "table"}"#).unwrap();
        assert_eq!(
            table.kind,
            NodeKind::Table {
                has_header_row: false
            }
        );
    }

    #[test]
    fn test_from_json_deep_tree() {
        let depth = 500;
        let mut json = String::new();
        for _ in 0..depth {
            json.push_str(r#"{"type":"quote","children":["#);
        }
        json.push_str(r#"{"type":"raw_text","content":"core"}"#);
        for _ in 0..depth {
            json.push_str("]}");
        }
        let node = Node::from_json(&json).unwrap();
        assert_eq!(node.depth(), depth + 1);
        assert_eq!(node.plain_text(), "core");
    }

    #[test]
    fn test_from_json_rejects_trailing_data() {
        assert!(Node::from_json(r#"{"type": "separator"} {"#).is_err());
    }

    #[test]
    fn test_from_json_wide_heading_level() {
        let node = Node::from_json(r#"{"type": "heading", "level": 300}"#).unwrap();
        assert_eq!(node.kind, NodeKind::Heading { level: 300 });
    }

    #[test]
    fn test_from_reader_io_failure() {
        struct FailingReader;

        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"))
            }
        }

        let result = Node::from_reader(FailingReader);
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_drop_very_deep_tree() {
        let mut node = Node::text("core");
        for _ in 0..200_000 {
            node = Node::quote(vec![node]);
        }
        assert_eq!(node.node_count(), 200_001);
        drop(node);
    }

    #[test]
    fn test_from_json_unknown_kind_fails() {
        let result = Node::from_json(r#"{"type": "footnote", "children": []}"#);
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }
}
