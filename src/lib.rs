//! Pathway Connectors - routing engine for connecting lines in pathway diagrams
//!
//! This library routes the lines between diagram elements as straight,
//! orthogonal (elbow) or curved connectors, keeps user adjustments stable
//! through segment preferences, and renders scenes of boxes and connectors
//! to SVG.
//!
//! # Example
//!
//! ```rust
//! use pathway_connectors::render;
//!
//! let svg = render(r#"
//!     [[connector]]
//!     start = [0.0, 0.0]
//!     end = [100.0, -50.0]
//!     style = "elbow"
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod connector;
pub mod error;
pub mod renderer;
pub mod scene;

pub use connector::{
    Axis, BoundingBox, ConnectorRestriction, ConnectorShape, ConnectorShapeKind, ConnectorStyle,
    Point, Restriction, RouteCache, RoutingConfig, Segment, SegmentPreference, ShapePath, Side,
};
pub use error::SceneError;
pub use renderer::{render_scene, SvgConfig};
pub use scene::{RoutedConnector, Scene};

use log::debug;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Routing defaults for scenes without a `[routing]` table
    pub routing: RoutingConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: draw drag handles on every connector
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the routing configuration
    pub fn with_routing(mut self, config: RoutingConfig) -> Self {
        self.routing = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a TOML scene to SVG with default configuration
pub fn render(source: &str) -> Result<String, SceneError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML scene to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use pathway_connectors::{render_with_config, RenderConfig, RoutingConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_routing(RoutingConfig::new().with_stub_length(30.0))
///     .with_svg(SvgConfig::default().with_viewbox_padding(50.0));
///
/// let svg = render_with_config("", config).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, SceneError> {
    let scene = Scene::from_str(source)?;
    let mut connectors = scene.resolve(&config.routing)?;
    debug!(
        "resolved {} nodes and {} connectors",
        scene.nodes.len(),
        connectors.len()
    );

    let svg_config = if config.debug {
        config.svg.with_show_handles(true)
    } else {
        config.svg
    };
    Ok(render_scene(&scene, &mut connectors, &svg_config))
}
