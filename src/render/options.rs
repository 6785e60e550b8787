//! Rendering options and configuration.

/// Options for rendering a document tree.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How attribute values are written
    pub attribute_escaping: AttributeEscaping,

    /// Maximum tree depth (None = unlimited)
    pub max_depth: Option<usize>,

    /// Reject out-of-range field values instead of rendering them
    pub strict: bool,

    /// Collect rendering statistics
    pub collect_stats: bool,

    /// Render batches on the rayon thread pool
    pub parallel: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attribute escaping mode.
    pub fn with_attribute_escaping(mut self, mode: AttributeEscaping) -> Self {
        self.attribute_escaping = mode;
        self
    }

    /// Write attribute values unchanged.
    pub fn verbatim_attributes(self) -> Self {
        self.with_attribute_escaping(AttributeEscaping::Verbatim)
    }

    /// Set the maximum tree depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Enable or disable strict field validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Enable or disable parallel batch rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(self) -> Self {
        self.with_parallel(false)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            attribute_escaping: AttributeEscaping::Quote,
            max_depth: None,
            strict: false,
            collect_stats: false,
            parallel: true,
        }
    }
}

/// How values are written into double-quoted HTML attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeEscaping {
    /// Insert values unchanged; a `"` in a value corrupts the markup
    Verbatim,
    /// Replace `&` and `"` with entity references
    #[default]
    Quote,
}
