//! Rendering module for converting document trees to HTML and other formats.

mod element;
mod escape;
mod html;
mod json;
mod options;
mod result;
pub mod streaming;
mod text;

pub use escape::{escape_attr_into, escape_html, escape_html_into};
pub use html::{
    render, to_html, to_html_batch, to_html_with_stats, wrap, wrap_with_attrs, HtmlRenderer,
};
pub use json::{to_json, JsonFormat};
pub use options::{AttributeEscaping, RenderOptions};
pub use result::{RenderResult, RenderStats};
pub use streaming::{collect_html, RenderEvent, StreamingRenderer};
pub use text::to_text;
