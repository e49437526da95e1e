//! SVG generation for routed scenes

use log::trace;

use crate::connector::{BoundingBox, Point};
use crate::scene::{RoutedConnector, Scene};

use super::SvgConfig;

/// Edge length of a drag handle marker
const HANDLE_SIZE: f64 = 6.0;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    connections: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            connections: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Default look for nodes, connectors and their markers
    pub fn add_default_styles(&mut self) {
        let p = self.prefix();
        self.styles.push(format!(
            ".{p}node {{ fill: #ffffff; stroke: #333333; }} \
             .{p}connector {{ stroke: #333333; stroke-width: 1.5; }} \
             .{p}anchor {{ fill: #2196f3; }} \
             .{p}handle {{ fill: #ff9800; stroke: #e65100; }}"
        ));
    }

    /// Add a node rectangle
    pub fn add_rect(&mut self, id: Option<&str>, bounds: &BoundingBox) {
        let prefix = self.prefix();
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<rect{} class="{}node" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            id_attr,
            prefix,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        ));
    }

    /// Add a connector outline
    pub fn add_connector_path(&mut self, id: &str, d: &str) {
        let prefix = self.prefix();
        self.connections.push(format!(
            r#"{}<path id="{}" class="{}connector" d="{}" fill="none"/>"#,
            self.indent_str(),
            escape_xml(id),
            prefix,
            d
        ));
    }

    /// Add an anchor marker on a connector
    pub fn add_anchor(&mut self, at: Point) {
        let prefix = self.prefix();
        self.connections.push(format!(
            r#"{}<circle class="{}anchor" cx="{}" cy="{}" r="{}"/>"#,
            self.indent_str(),
            prefix,
            at.x,
            at.y,
            self.config.anchor_radius
        ));
    }

    /// Add a drag handle marker centered on `at`
    pub fn add_handle(&mut self, at: Point) {
        let prefix = self.prefix();
        let half = HANDLE_SIZE / 2.0;
        self.connections.push(format!(
            r#"{}<rect class="{}handle" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            prefix,
            at.x - half,
            at.y - half,
            HANDLE_SIZE,
            HANDLE_SIZE
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Connectors are drawn over the nodes
        for conn in &self.connections {
            svg.push_str(conn);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render scene nodes and their resolved connectors to an SVG string
pub fn render_scene(
    scene: &Scene,
    connectors: &mut [RoutedConnector],
    config: &SvgConfig,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_default_styles();

    let mut bounds = scene.node_bounds();
    for node in &scene.nodes {
        builder.add_rect(Some(node.id.as_str()), &node.bounds());
    }

    for connector in connectors.iter_mut() {
        let outline = connector.outline();
        trace!("connector {}: {}", connector.id, outline.to_svg_d());
        builder.add_connector_path(&connector.id, &outline.to_svg_d());
        bounds = merge(bounds, outline.bounds());

        for anchor in connector.anchor_points() {
            builder.add_anchor(anchor);
            bounds = merge(bounds, Some(BoundingBox::at(anchor)));
        }

        if config.show_handles {
            for handle in connector.handles() {
                builder.add_handle(handle.location);
            }
        }
    }

    builder.build(bounds.unwrap_or_default())
}

fn merge(a: Option<BoundingBox>, b: Option<BoundingBox>) -> Option<BoundingBox> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (a, b) => a.or(b),
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::RoutingConfig;

    fn render(source: &str, config: &SvgConfig) -> String {
        let scene = Scene::from_str(source).unwrap();
        let mut connectors = scene.resolve(&RoutingConfig::default()).unwrap();
        render_scene(&scene, &mut connectors, config)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_merge_bounds() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(
            merge(Some(a), Some(b)),
            Some(BoundingBox::new(0.0, 0.0, 30.0, 30.0))
        );
        assert_eq!(merge(None, Some(b)), Some(b));
        assert_eq!(merge(None, None), None);
    }

    #[test]
    fn test_render_single_node() {
        let svg = render(
            r#"
            [[node]]
            id = "box"
            x = 0.0
            y = 0.0
            width = 100.0
            height = 50.0
            "#,
            &SvgConfig::default(),
        );
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r#"id="box""#));
        assert!(svg.contains("pc-node"));
        assert!(svg.contains(r#"viewBox="-20 -20 140 90""#));
    }

    #[test]
    fn test_render_connector_with_anchor() {
        let svg = render(
            r#"
            [[connector]]
            id = "line"
            start = [0.0, 0.0]
            end = [100.0, 0.0]
            anchors = [0.5]
            "#,
            &SvgConfig::default(),
        );
        assert!(svg.contains(
            r#"<path id="line" class="pc-connector" d="M0.00 0.00 L100.00 0.00" fill="none"/>"#
        ));
        assert!(svg.contains(r#"<circle class="pc-anchor" cx="50" cy="0" r="3"/>"#));
        assert!(!svg.contains(r#"class="pc-handle""#));
    }

    #[test]
    fn test_anchor_radius_and_bare_classes() {
        let svg = render(
            r#"
            [[connector]]
            start = [0.0, 0.0]
            end = [100.0, 0.0]
            anchors = [0.25]
            "#,
            &SvgConfig::default()
                .with_anchor_radius(4.5)
                .without_class_prefix(),
        );
        assert!(svg.contains(r#"<circle class="anchor" cx="25" cy="0" r="4.5"/>"#));
        assert!(svg.contains(r#"class="connector""#));
        assert!(!svg.contains("pc-"));
    }

    #[test]
    fn test_render_handles_when_enabled() {
        let svg = render(
            r#"
            [[connector]]
            start = [0.0, 0.0]
            end = [100.0, -50.0]
            style = "elbow"
            "#,
            &SvgConfig::default().with_show_handles(true),
        );
        assert!(svg.contains(r#"<rect class="pc-handle" x="17" y="-28" width="6" height="6"/>"#));
    }

    #[test]
    fn test_compact_output() {
        let svg = render(
            "",
            &SvgConfig::default()
                .with_pretty_print(false)
                .with_standalone(false),
        );
        assert!(!svg.contains('\n'));
        assert!(svg.starts_with("<svg"));
    }
}
