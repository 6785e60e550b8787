//! Streaming renderer for deep or large document trees.
//!
//! The streaming renderer walks the tree with an explicit work stack instead
//! of recursion and yields markup fragments one at a time. Concatenating the
//! fragments gives exactly the output of [`to_html`](super::to_html), but
//! tree depth is bounded by heap memory rather than the call stack.
//!
//! # Example
//!
//! ```
//! use mdhtml::model::Node;
//! use mdhtml::render::{RenderEvent, RenderOptions, StreamingRenderer};
//!
//! let doc = Node::document(vec![Node::paragraph(vec![Node::text("hi")])]);
//! let renderer = StreamingRenderer::new(&doc, RenderOptions::default());
//!
//! let mut html = String::new();
//! for event in renderer {
//!     match event? {
//!         RenderEvent::Text(text) => html.push_str(&text),
//!         other => html.push_str(other.as_str()),
//!     }
//! }
//! assert_eq!(html, "<html><body><p>hi</p></body></html>");
//! # Ok::<(), mdhtml::Error>(())
//! ```

use log::{trace, warn};

use crate::error::Result;
use crate::model::{CellContext, Node};

use super::element::{check_node, child_context, element, Element, Tag};
use super::escape::escape_html;
use super::RenderOptions;

/// Markup fragments emitted during streaming rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// An opening tag, e.g. `<ol start="3">`
    Open(String),

    /// A closing tag, e.g. `</ol>`
    Close(String),

    /// A void element, e.g. `<hr>`
    Void(String),

    /// Escaped text content
    Text(String),
}

impl RenderEvent {
    /// Get the markup of this fragment.
    pub fn as_str(&self) -> &str {
        match self {
            RenderEvent::Open(s)
            | RenderEvent::Close(s)
            | RenderEvent::Void(s)
            | RenderEvent::Text(s) => s,
        }
    }

    /// Check if this is a tag event (open, close, or void).
    pub fn is_tag(&self) -> bool {
        !matches!(self, RenderEvent::Text(_))
    }

    /// Consume the event and return its markup.
    pub fn into_string(self) -> String {
        match self {
            RenderEvent::Open(s)
            | RenderEvent::Close(s)
            | RenderEvent::Void(s)
            | RenderEvent::Text(s) => s,
        }
    }
}

/// Pending work on the stack.
enum Work<'a> {
    /// A node still to be expanded
    Node {
        node: &'a Node,
        ctx: CellContext,
        depth: usize,
    },
    /// A fragment ready to emit
    Emit(RenderEvent),
}

/// Streaming renderer that yields markup fragments as an iterator.
///
/// Errors (depth limit, strict field checks) are yielded once, after which
/// the iterator is exhausted.
pub struct StreamingRenderer<'a> {
    options: RenderOptions,
    stack: Vec<Work<'a>>,
    failed: bool,
    emitted: usize,
}

impl<'a> StreamingRenderer<'a> {
    /// Create a new streaming renderer.
    pub fn new(root: &'a Node, options: RenderOptions) -> Self {
        Self {
            options,
            stack: vec![Work::Node {
                node: root,
                ctx: CellContext::Body,
                depth: 1,
            }],
            failed: false,
            emitted: 0,
        }
    }

    /// Check if rendering is complete.
    pub fn is_done(&self) -> bool {
        self.failed || self.stack.is_empty()
    }

    /// Get the number of events emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn open(&self, tag: &Tag<'_>) -> Work<'a> {
        Work::Emit(RenderEvent::Open(tag.open(self.options.attribute_escaping)))
    }

    fn close(tag: &Tag<'_>) -> Work<'a> {
        Work::Emit(RenderEvent::Close(tag.close()))
    }

    fn children(
        children: &'a [Node],
        ctx: CellContext,
        depth: usize,
    ) -> impl Iterator<Item = Work<'a>> {
        children.iter().map(move |node| Work::Node { node, ctx, depth })
    }

    /// Expand a node into work items in document order.
    fn expand(&self, node: &'a Node, ctx: CellContext, depth: usize) -> Vec<Work<'a>> {
        let mut items = Vec::new();
        match element(node, ctx) {
            Element::Text(content) => {
                items.push(Work::Emit(RenderEvent::Text(escape_html(content))));
            }
            Element::Void(tag) => {
                items.push(Work::Emit(RenderEvent::Void(
                    tag.open(self.options.attribute_escaping),
                )));
            }
            Element::Container(tags) => {
                items.extend(tags.iter().map(|tag| self.open(tag)));
                let child_ctx = child_context(node, ctx);
                items.extend(Self::children(&node.children, child_ctx, depth + 1));
                items.extend(tags.iter().rev().map(Self::close));
            }
            Element::Table { has_header_row } => {
                let table = Tag::new("table");
                let tbody = Tag::new("tbody");
                items.push(self.open(&table));
                if has_header_row {
                    let (head, body) = node.table_sections();
                    let thead = Tag::new("thead");
                    items.push(self.open(&thead));
                    match head {
                        Some(row) => items.push(Work::Node {
                            node: row,
                            ctx: CellContext::Header,
                            depth: depth + 1,
                        }),
                        None => warn!("Table is flagged with a header row but has no rows"),
                    }
                    items.push(Self::close(&thead));
                    items.push(self.open(&tbody));
                    items.extend(Self::children(body, CellContext::Body, depth + 1));
                } else {
                    items.push(self.open(&tbody));
                    items.extend(Self::children(
                        &node.children,
                        CellContext::Body,
                        depth + 1,
                    ));
                }
                items.push(Self::close(&tbody));
                items.push(Self::close(&table));
            }
        }
        items
    }
}

impl<'a> Iterator for StreamingRenderer<'a> {
    type Item = Result<RenderEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            match self.stack.pop()? {
                Work::Emit(event) => {
                    self.emitted += 1;
                    return Some(Ok(event));
                }
                Work::Node { node, ctx, depth } => {
                    trace!("Expanding {} at depth {}", node.kind_name(), depth);
                    if let Err(err) = check_node(&self.options, node, depth) {
                        self.failed = true;
                        self.stack.clear();
                        return Some(Err(err));
                    }
                    let items = self.expand(node, ctx, depth);
                    self.stack.extend(items.into_iter().rev());
                }
            }
        }
    }
}

/// Collect all fragments from a streaming renderer into a single string.
pub fn collect_html(renderer: StreamingRenderer<'_>) -> Result<String> {
    let mut output = String::new();
    for event in renderer {
        output.push_str(event?.as_str());
    }
    Ok(output)
}
