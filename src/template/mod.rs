//! Template lookup and rendering.
//!
//! This module provides:
//! - The `TemplateSource` / `Template` seam the renderer talks to
//! - A MiniJinja-backed source reading templates from a directory
//! - An in-memory template store that can back the same engine
//!
//! # Example
//!
//! ```ignore
//! let store = Arc::new(TemplateStore::new());
//! store.insert("courses/edx_ace/welcome/push/title.txt", "Hi {{ first_name }}")?;
//!
//! let templates = JinjaTemplates::from_store(store, EngineOptions::default());
//! let template = templates.get_template("courses/edx_ace/welcome/push/title.txt")?;
//!
//! let mut context = RenderContext::new();
//! context.insert("first_name".into(), json!("Ada"));
//! assert_eq!(template.render(&context)?, "Hi Ada");
//! ```

mod engine;
mod store;
mod types;

pub use engine::{EngineOptions, JinjaTemplates};
pub use store::TemplateStore;
pub use types::{
    validate_path, RenderContext, Template, TemplateError, TemplateResult, TemplateSource,
};
