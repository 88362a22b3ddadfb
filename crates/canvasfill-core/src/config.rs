//! Fill configuration.

use serde::{Deserialize, Serialize};

/// Which synthesis mode fills the exposed regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMethod {
    /// Patch the exposed regions from surrounding image content.
    #[default]
    ContentAware,
    /// Extend the canvas content outward via the generative service.
    GenerativeExpand,
}

impl FillMethod {
    /// Display name used for the undo history entry.
    pub fn command_name(&self) -> &'static str {
        match self {
            FillMethod::ContentAware => "Content-Aware Crop",
            FillMethod::GenerativeExpand => "Generative Expand",
        }
    }
}

/// Configuration for one region-fill sequence.
///
/// Passed by value into region builders and the dispatcher; there is no
/// module-level fill state, so a config cannot change mid-sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FillConfig {
    pub method: FillMethod,
    /// Prompt text forwarded to the generative service; ignored by
    /// content-aware fill.
    pub prompt: String,
}

impl FillConfig {
    pub fn new(method: FillMethod) -> Self {
        Self {
            method,
            prompt: String::new(),
        }
    }

    pub fn with_prompt(method: FillMethod, prompt: impl Into<String>) -> Self {
        Self {
            method,
            prompt: prompt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names() {
        assert_eq!(FillMethod::ContentAware.command_name(), "Content-Aware Crop");
        assert_eq!(
            FillMethod::GenerativeExpand.command_name(),
            "Generative Expand"
        );
    }

    #[test]
    fn default_is_content_aware() {
        let config = FillConfig::default();
        assert_eq!(config.method, FillMethod::ContentAware);
        assert!(config.prompt.is_empty());
    }
}
