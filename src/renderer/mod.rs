//! Channel renderers.
//!
//! A renderer turns a [`Message`](crate::message::Message) into the payload a
//! channel needs. Each result shape declares its fields and the template file
//! each field is rendered from; the renderer looks every template up at
//! `{app_label}/{segment}/{name}/{channel}/{filename}`, renders it against the
//! message context and assembles the result.
//!
//! # Example
//!
//! ```ignore
//! let templates = Arc::new(JinjaTemplates::from_dir("templates", EngineOptions::default()));
//! let renderer = EmailRenderer::new(templates);
//!
//! let email = renderer.render(&message)?;
//! println!("{}", email.subject);
//! ```

mod base;
mod field;
mod rendered;
mod types;

pub use base::{
    render_context, template_path, EmailRenderer, PushNotificationRenderer, Renderer,
    DEFAULT_NAMESPACE_SEGMENT, MESSAGE_CONTEXT_KEY,
};
pub use field::{FieldSpec, TemplateFormat};
pub use rendered::{RenderedEmail, RenderedFields, RenderedMessage, RenderedPushNotification};
pub use types::{RenderError, RenderResult};
