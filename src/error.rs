//! Error types for loading scenes

use thiserror::Error;

/// Errors that can occur when loading or resolving a scene
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A connector names a node id that no `[[node]]` declares
    #[error("connector '{connector}' references unknown node '{node}'")]
    UnknownNode { connector: String, node: String },

    /// A connector end has neither a node id nor a fixed point
    #[error("connector '{connector}' has no {end} node or point")]
    MissingEndpoint { connector: String, end: String },

    #[error("duplicate node id '{id}'")]
    DuplicateNode { id: String },
}

impl SceneError {
    /// Create an unknown node error
    pub fn unknown_node(connector: impl Into<String>, node: impl Into<String>) -> Self {
        Self::UnknownNode {
            connector: connector.into(),
            node: node.into(),
        }
    }

    /// Create a missing endpoint error; `end` is "start" or "end"
    pub fn missing_endpoint(connector: impl Into<String>, end: impl Into<String>) -> Self {
        Self::MissingEndpoint {
            connector: connector.into(),
            end: end.into(),
        }
    }

    pub fn duplicate_node(id: impl Into<String>) -> Self {
        Self::DuplicateNode { id: id.into() }
    }
}
