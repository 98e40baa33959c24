//! Render error definitions

use thiserror::Error;

use crate::channel::ChannelType;
use crate::template::TemplateError;

/// Renderer error type
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to build render context: {0}")]
    Context(#[source] serde_json::Error),

    #[error("Failed to assemble rendered {channel} message: {source}")]
    Assemble {
        channel: ChannelType,
        #[source]
        source: serde_json::Error,
    },
}

impl RenderError {
    /// Short label used for logging and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::Template(e) => e.kind(),
            RenderError::Context(_) => "context",
            RenderError::Assemble { .. } => "assemble",
        }
    }

    /// Whether the error is a missing template
    pub fn is_not_found(&self) -> bool {
        matches!(self, RenderError::Template(TemplateError::NotFound(_)))
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
