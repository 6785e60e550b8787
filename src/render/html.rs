//! HTML rendering for document trees.

use log::{debug, log_enabled, warn, Level};
use rayon::prelude::*;

use crate::error::Result;
use crate::model::{CellContext, Node};

use super::element::{check_node, child_context, element, Element, Tag};
use super::escape::escape_html_into;
use super::{RenderOptions, RenderResult, RenderStats};

/// Render a node with default options.
///
/// Total over every variant: default options set no depth limit and no
/// strict checks, so nothing can reject the tree.
pub fn render(node: &Node) -> String {
    HtmlRenderer::new(RenderOptions::default())
        .render(node)
        .unwrap_or_else(|err| unreachable!("default options rejected a tree: {}", err))
}

/// Convert a node to HTML.
pub fn to_html(node: &Node, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(node)
}

/// Convert a node to HTML with statistics.
pub fn to_html_with_stats(node: &Node, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(node)
}

/// Convert independent trees to HTML, in input order.
///
/// Uses the rayon thread pool when `options.parallel` is set. The first
/// failing tree fails the whole batch.
pub fn to_html_batch(nodes: &[Node], options: &RenderOptions) -> Result<Vec<String>> {
    debug!(
        "Rendering batch of {} trees ({})",
        nodes.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );
    if options.parallel {
        nodes.par_iter().map(|node| to_html(node, options)).collect()
    } else {
        nodes.iter().map(|node| to_html(node, options)).collect()
    }
}

/// Wrap inner HTML in a tag: `<tag>inner</tag>`.
pub fn wrap(tag: &str, inner: &str) -> String {
    format!("<{0}>{1}</{0}>", tag, inner)
}

/// Wrap inner HTML in a tag with attributes, in the order supplied.
///
/// Values are inserted verbatim; callers own their escaping.
pub fn wrap_with_attrs(tag: &str, attrs: &[(&str, &str)], inner: &str) -> String {
    let attrs: String = attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, value))
        .collect();
    format!("<{0}{1}>{2}</{0}>", tag, attrs, inner)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a node to HTML.
    pub fn render(mut self, node: &Node) -> Result<String> {
        self.render_internal(node)
    }

    /// Render a node to HTML with statistics.
    pub fn render_with_stats(mut self, node: &Node) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(node)?;
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, node: &Node) -> Result<String> {
        if log_enabled!(Level::Debug) {
            debug!(
                "Rendering {} tree ({} nodes)",
                node.kind_name(),
                node.node_count()
            );
        }

        let mut output = String::new();
        self.render_node(&mut output, node, CellContext::Body, 1)?;

        debug!("Rendered {} bytes of HTML", output.len());
        Ok(output)
    }

    fn render_node(
        &mut self,
        output: &mut String,
        node: &Node,
        ctx: CellContext,
        depth: usize,
    ) -> Result<()> {
        check_node(&self.options, node, depth)?;
        if self.options.collect_stats {
            self.stats.add_node(node, depth);
        }

        let mode = self.options.attribute_escaping;
        match element(node, ctx) {
            Element::Text(content) => {
                let escaped = escape_html_into(output, content);
                if self.options.collect_stats {
                    self.stats.add_escaped(escaped);
                }
            }
            Element::Void(tag) => tag.open_into(output, mode),
            Element::Container(tags) => {
                for tag in &tags {
                    tag.open_into(output, mode);
                }
                let child_ctx = child_context(node, ctx);
                self.render_children(output, &node.children, child_ctx, depth)?;
                for tag in tags.iter().rev() {
                    tag.close_into(output);
                }
            }
            Element::Table { has_header_row } => {
                self.render_table(output, node, has_header_row, depth)?;
            }
        }
        Ok(())
    }

    fn render_children(
        &mut self,
        output: &mut String,
        children: &[Node],
        ctx: CellContext,
        depth: usize,
    ) -> Result<()> {
        for child in children {
            self.render_node(output, child, ctx, depth + 1)?;
        }
        Ok(())
    }

    fn render_table(
        &mut self,
        output: &mut String,
        table: &Node,
        has_header_row: bool,
        depth: usize,
    ) -> Result<()> {
        let mode = self.options.attribute_escaping;
        let table_tag = Tag::new("table");
        let tbody = Tag::new("tbody");
        table_tag.open_into(output, mode);

        if has_header_row {
            let (head, body) = table.table_sections();
            let thead = Tag::new("thead");
            thead.open_into(output, mode);
            match head {
                Some(row) => self.render_node(output, row, CellContext::Header, depth + 1)?,
                None => warn!("Table is flagged with a header row but has no rows"),
            }
            thead.close_into(output);

            tbody.open_into(output, mode);
            self.render_children(output, body, CellContext::Body, depth)?;
            tbody.close_into(output);
        } else {
            tbody.open_into(output, mode);
            self.render_children(output, &table.children, CellContext::Body, depth)?;
            tbody.close_into(output);
        }

        table_tag.close_into(output);
        Ok(())
    }
}
