//! Template seam types and error definitions

use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to render template {path}: {message}")]
    Render { path: String, message: String },

    #[error("Invalid template path: {0}")]
    InvalidPath(String),
}

impl TemplateError {
    /// Short label used for logging and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            TemplateError::NotFound(_) => "not_found",
            TemplateError::Render { .. } => "render",
            TemplateError::InvalidPath(_) => "invalid_path",
        }
    }
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Variables a template is rendered against
pub type RenderContext = serde_json::Map<String, serde_json::Value>;

/// A located template, ready to render
pub trait Template {
    /// Render the template against the given context
    fn render(&self, context: &RenderContext) -> TemplateResult<String>;
}

/// Resolves template paths to templates.
///
/// Implementations are read-only during rendering and must be safe to share
/// between threads.
pub trait TemplateSource: Send + Sync {
    /// Look up the template stored at `path`
    fn get_template<'a>(&'a self, path: &str) -> TemplateResult<Box<dyn Template + 'a>>;
}

/// Validate a relative, slash-separated template path
pub fn validate_path(path: &str) -> TemplateResult<()> {
    if path.is_empty() {
        return Err(TemplateError::InvalidPath("path must not be empty".to_string()));
    }

    if path.starts_with('/') || path.contains('\\') {
        return Err(TemplateError::InvalidPath(format!(
            "{path}: path must be relative and slash-separated"
        )));
    }

    if path.split('/').any(|segment| segment.is_empty() || segment == "..") {
        return Err(TemplateError::InvalidPath(format!(
            "{path}: empty or parent segments are not allowed"
        )));
    }

    Ok(())
}
