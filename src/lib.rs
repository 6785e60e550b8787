//! # mdhtml
//!
//! HTML rendering for parsed markdown document trees.
//!
//! This library takes the node tree produced by a markdown parser and
//! renders it to an HTML string. Every node variant has exactly one
//! rendering rule, selected by an exhaustive match.
//!
//! ## Quick Start
//!
//! ```
//! use mdhtml::model::Node;
//!
//! let doc = Node::document(vec![
//!     Node::heading(1, vec![Node::text("Title")]),
//!     Node::paragraph(vec![Node::text("Fish & chips")]),
//! ]);
//!
//! let html = mdhtml::render(&doc);
//! assert_eq!(
//!     html,
//!     "<html><body><h1>Title</h1><p>Fish &amp; chips</p></body></html>"
//! );
//! ```
//!
//! ## Features
//!
//! - **Exhaustive dispatch**: a closed node enum, one rule per variant
//! - **Escaping**: text content always escaped; attribute escaping configurable
//! - **JSON input**: trees from parsers in other languages via serde
//! - **Deep trees**: iterative streaming renderer and optional depth limit
//! - **Batch rendering**: independent trees rendered on the rayon pool

pub mod error;
pub mod model;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{CellAlign, CellContext, Node, NodeKind};
pub use render::{
    AttributeEscaping, HtmlRenderer, JsonFormat, RenderEvent, RenderOptions, RenderResult,
    RenderStats, StreamingRenderer,
};

use std::io::Read;

/// Render a node to HTML with default options.
///
/// # Example
///
/// ```
/// use mdhtml::{render, Node};
///
/// let html = render(&Node::paragraph(vec![Node::text("hi")]));
/// assert_eq!(html, "<p>hi</p>");
/// ```
pub fn render(node: &Node) -> String {
    render::render(node)
}

/// Render a node to HTML with custom options.
///
/// # Example
///
/// ```
/// use mdhtml::{to_html, Node, RenderOptions};
///
/// let options = RenderOptions::new().with_max_depth(64).with_strict(true);
/// let html = to_html(&Node::heading(2, vec![]), &options)?;
/// assert_eq!(html, "<h2></h2>");
/// # Ok::<(), mdhtml::Error>(())
/// ```
pub fn to_html(node: &Node, options: &RenderOptions) -> Result<String> {
    render::to_html(node, options)
}

/// Render a tree given in JSON form.
///
/// # Example
///
/// ```
/// use mdhtml::render_json;
///
/// let html = render_json(r#"{"type": "separator"}"#)?;
/// assert_eq!(html, "<hr>");
/// # Ok::<(), mdhtml::Error>(())
/// ```
pub fn render_json(json: &str) -> Result<String> {
    render_json_with_options(json, &RenderOptions::default())
}

/// Render a tree given in JSON form with custom options.
pub fn render_json_with_options(json: &str, options: &RenderOptions) -> Result<String> {
    let node = Node::from_json(json)?;
    render::to_html(&node, options)
}

/// Render a tree read as JSON from a reader.
pub fn render_reader<R: Read>(reader: R, options: &RenderOptions) -> Result<String> {
    let node = Node::from_reader(reader)?;
    render::to_html(&node, options)
}

/// Render independent trees, preserving input order.
pub fn render_batch(nodes: &[Node], options: &RenderOptions) -> Result<Vec<String>> {
    render::to_html_batch(nodes, options)
}

/// Render a tree without recursion, for trees of unbounded depth.
///
/// Produces the same output as [`to_html`].
pub fn render_streaming(node: &Node, options: &RenderOptions) -> Result<String> {
    render::collect_html(StreamingRenderer::new(node, options.clone()))
}
