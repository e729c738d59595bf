//! Rendering configuration shared by all backends.

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Line separator between program items and between comment lines
    pub newline: String,
    /// Whether a non-empty program ends with a line separator
    pub trailing_newline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            newline: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    pub fn with_trailing_newline(mut self, trailing: bool) -> Self {
        self.trailing_newline = trailing;
        self
    }
}
