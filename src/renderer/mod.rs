//! SVG renderer for routed scenes
//!
//! This module takes scene nodes and resolved connectors and produces an
//! SVG string with CSS classes for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_scene;
