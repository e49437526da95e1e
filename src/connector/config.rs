//! Configuration for connector routing

use serde::Deserialize;

/// Default length of the first and last segment of an elbow connector
pub const DEFAULT_STUB_LENGTH: f64 = 20.0;

/// Configuration options for routing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Length of the stub leaving / entering an element edge, in model units
    pub stub_length: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            stub_length: DEFAULT_STUB_LENGTH,
        }
    }
}

impl RoutingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stub length
    pub fn with_stub_length(mut self, length: f64) -> Self {
        self.stub_length = length;
        self
    }
}
