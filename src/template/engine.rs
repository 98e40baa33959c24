//! MiniJinja-backed template source

use std::path::Path;
use std::sync::Arc;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};

use super::store::TemplateStore;
use super::types::{RenderContext, Template, TemplateError, TemplateResult, TemplateSource};
use crate::config::TemplateSettings;

/// Engine behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Treat undefined variables as render errors
    pub strict_undefined: bool,
    /// Keep the final newline of a template file in the output
    pub keep_trailing_newline: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_undefined: true,
            keep_trailing_newline: true,
        }
    }
}

impl From<&TemplateSettings> for EngineOptions {
    fn from(settings: &TemplateSettings) -> Self {
        Self {
            strict_undefined: settings.strict_undefined,
            keep_trailing_newline: settings.keep_trailing_newline,
        }
    }
}

/// Template source rendering Jinja templates.
///
/// Auto-escaping follows the template file extension, so `.html` templates
/// are HTML-escaped and `.txt` templates are not. Loaded templates are cached
/// until [`JinjaTemplates::clear_cache`] is called.
pub struct JinjaTemplates {
    env: Environment<'static>,
}

impl JinjaTemplates {
    /// Load templates from files under `root`
    pub fn from_dir(root: impl AsRef<Path>, options: EngineOptions) -> Self {
        let mut env = base_environment(options);
        env.set_loader(minijinja::path_loader(root.as_ref().to_path_buf()));

        tracing::debug!(root = %root.as_ref().display(), "Template directory loader configured");
        Self { env }
    }

    /// Load templates from an in-memory store
    pub fn from_store(store: Arc<TemplateStore>, options: EngineOptions) -> Self {
        let mut env = base_environment(options);
        env.set_loader(move |name| Ok(store.source(name)));

        Self { env }
    }

    /// Build a directory-backed engine from settings
    pub fn from_settings(settings: &TemplateSettings) -> Self {
        Self::from_dir(&settings.root, EngineOptions::from(settings))
    }

    /// Drop cached templates so the next lookup reloads them
    pub fn clear_cache(&mut self) {
        self.env.clear_templates();
    }
}

fn base_environment(options: EngineOptions) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(options.keep_trailing_newline);
    env.set_undefined_behavior(if options.strict_undefined {
        UndefinedBehavior::Strict
    } else {
        UndefinedBehavior::Lenient
    });
    env
}

impl TemplateSource for JinjaTemplates {
    fn get_template<'a>(&'a self, path: &str) -> TemplateResult<Box<dyn Template + 'a>> {
        match self.env.get_template(path) {
            Ok(inner) => Ok(Box::new(JinjaTemplate {
                path: path.to_string(),
                inner,
            })),
            Err(e) if e.kind() == ErrorKind::TemplateNotFound => {
                Err(TemplateError::NotFound(path.to_string()))
            }
            Err(e) => Err(TemplateError::Render {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

struct JinjaTemplate<'env> {
    path: String,
    inner: minijinja::Template<'env, 'env>,
}

impl Template for JinjaTemplate<'_> {
    fn render(&self, context: &RenderContext) -> TemplateResult<String> {
        self.inner.render(context).map_err(|e| TemplateError::Render {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}
