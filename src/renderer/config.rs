//! SVG output settings for rendered pathway scenes

/// How a scene is written out as SVG
///
/// Connector outlines are always drawn. Anchor markers are drawn whenever a
/// connector lists anchors, sized by `anchor_radius`. Drag handles are an
/// editing aid and stay hidden unless `show_handles` is set.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Margin added on every side of the scene bounds
    pub viewbox_padding: f64,

    /// Emit the XML declaration ahead of the `<svg>` element
    pub standalone: bool,

    /// One element per line, indented
    pub pretty_print: bool,

    /// Prepended to every class name, `pc-` yields `pc-node`, `pc-connector`,
    /// `pc-anchor` and `pc-handle`
    pub class_prefix: Option<String>,

    /// Draw a square marker at the center of every interior segment
    pub show_handles: bool,

    /// Radius of the circles drawn at connector anchors
    pub anchor_radius: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("pc-".to_string()),
            show_handles: false,
            anchor_radius: 3.0,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Bare class names (`node`, `connector`, ...)
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Draw drag handles, for editors that let users move connector turns
    pub fn with_show_handles(mut self, show: bool) -> Self {
        self.show_handles = show;
        self
    }

    pub fn with_anchor_radius(mut self, radius: f64) -> Self {
        self.anchor_radius = radius;
        self
    }
}
