//! Per-variant HTML shapes shared by the recursive and streaming renderers.

use std::borrow::Cow;

use log::warn;

use crate::error::{Error, Result};
use crate::model::{CellContext, Node, NodeKind};

use super::escape::escape_attr_into;
use super::{AttributeEscaping, RenderOptions};

/// An HTML tag with attributes in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag<'a> {
    pub name: Cow<'static, str>,
    pub attrs: Vec<(&'static str, Cow<'a, str>)>,
}

impl<'a> Tag<'a> {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Write `<name a="v" ...>`. Void elements use the same form.
    pub fn open_into(&self, output: &mut String, mode: AttributeEscaping) {
        output.push('<');
        output.push_str(&self.name);
        for (name, value) in &self.attrs {
            output.push(' ');
            output.push_str(name);
            output.push_str("=\"");
            escape_attr_into(output, value, mode);
            output.push('"');
        }
        output.push('>');
    }

    pub fn close_into(&self, output: &mut String) {
        output.push_str("</");
        output.push_str(&self.name);
        output.push('>');
    }

    pub fn open(&self, mode: AttributeEscaping) -> String {
        let mut output = String::new();
        self.open_into(&mut output, mode);
        output
    }

    pub fn close(&self) -> String {
        let mut output = String::new();
        self.close_into(&mut output);
        output
    }
}

/// How a node maps to markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Element<'a> {
    /// Tags wrapping the children, outermost first
    Container(Vec<Tag<'a>>),
    /// A void element; children are not rendered
    Void(Tag<'a>),
    /// Escaped text, no wrapper
    Text(&'a str),
    /// A table with thead/tbody sections
    Table { has_header_row: bool },
}

/// Select the rendering rule for a node.
///
/// `ctx` decides whether a `TableCell` renders as `th` or `td`.
pub(crate) fn element(node: &Node, ctx: CellContext) -> Element<'_> {
    match &node.kind {
        NodeKind::Document => Element::Container(vec![Tag::new("html"), Tag::new("body")]),
        NodeKind::Paragraph => Element::Container(vec![Tag::new("p")]),
        NodeKind::Heading { level } => Element::Container(vec![Tag::new(format!("h{}", level))]),
        NodeKind::Quote => Element::Container(vec![Tag::new("blockquote")]),
        NodeKind::List { start: Some(start) } => {
            Element::Container(vec![Tag::new("ol").attr("start", start.to_string())])
        }
        NodeKind::List { start: None } => Element::Container(vec![Tag::new("ul")]),
        NodeKind::ListItem => Element::Container(vec![Tag::new("li")]),
        NodeKind::BlockCode { language } => {
            let code = match language {
                Some(lang) => Tag::new("code").attr("class", lang.as_str()),
                None => Tag::new("code"),
            };
            Element::Container(vec![Tag::new("pre"), code])
        }
        NodeKind::Table { has_header_row } => Element::Table {
            has_header_row: *has_header_row,
        },
        NodeKind::TableRow => Element::Container(vec![Tag::new("tr")]),
        NodeKind::TableCell { align } => {
            let cell = Tag::new(ctx.cell_tag());
            let cell = match align {
                Some(align) => cell.attr("align", align.as_str()),
                None => cell,
            };
            Element::Container(vec![cell])
        }
        NodeKind::Separator => Element::Void(Tag::new("hr")),
        NodeKind::Strong => Element::Container(vec![Tag::new("strong")]),
        NodeKind::Emphasis => Element::Container(vec![Tag::new("em")]),
        NodeKind::InlineCode => Element::Container(vec![Tag::new("code")]),
        NodeKind::Strikethrough => Element::Container(vec![Tag::new("del")]),
        NodeKind::Link { target } => {
            Element::Container(vec![Tag::new("a").attr("href", target.as_str())])
        }
        NodeKind::Image { target, alt, title } => Element::Void(
            Tag::new("img")
                .attr("src", target.as_str())
                .attr("alt", alt.as_str())
                .attr("title", title.as_str()),
        ),
        NodeKind::RawText { content } | NodeKind::EscapeSequence { content } => {
            Element::Text(content)
        }
    }
}

/// Cell context handed to the children of a container node.
pub(crate) fn child_context(node: &Node, ctx: CellContext) -> CellContext {
    match node.kind {
        NodeKind::TableRow => ctx,
        _ => CellContext::Body,
    }
}

/// Describe a field value outside its documented range, if any.
pub(crate) fn looseness(node: &Node) -> Option<String> {
    match node.kind {
        NodeKind::Heading { level } if !(1..=6).contains(&level) => {
            Some(format!("heading level {} is outside 1-6", level))
        }
        NodeKind::List { start: Some(start) } if start < 0 => {
            Some(format!("ordered list start {} is negative", start))
        }
        _ => None,
    }
}

/// Apply the depth limit and field checks to a node about to be rendered.
///
/// Out-of-range fields fail in strict mode and are logged otherwise.
pub(crate) fn check_node(options: &RenderOptions, node: &Node, depth: usize) -> Result<()> {
    if let Some(limit) = options.max_depth {
        if depth > limit {
            return Err(Error::DepthLimitExceeded { limit });
        }
    }
    if let Some(issue) = looseness(node) {
        if options.strict {
            return Err(Error::InvalidNode(issue));
        }
        warn!("{}; rendering as given", issue);
    }
    Ok(())
}
