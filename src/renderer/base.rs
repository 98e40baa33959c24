//! Generic field-driven renderer

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use super::field::FieldSpec;
use super::rendered::{RenderedEmail, RenderedFields, RenderedMessage, RenderedPushNotification};
use super::types::{RenderError, RenderResult};
use crate::channel::ChannelType;
use crate::message::Message;
use crate::metrics::RenderMetrics;
use crate::template::{RenderContext, TemplateSource};

/// Path segment placed between the app label and the message name
pub const DEFAULT_NAMESPACE_SEGMENT: &str = "edx_ace";

/// Render context key holding the message itself
pub const MESSAGE_CONTEXT_KEY: &str = "message";

/// Renders messages into the result shape `R`
pub struct Renderer<R> {
    templates: Arc<dyn TemplateSource>,
    namespace_segment: String,
    _shape: PhantomData<fn() -> R>,
}

/// Renderer for email channels
pub type EmailRenderer = Renderer<RenderedEmail>;

/// Renderer for push notification channels
pub type PushNotificationRenderer = Renderer<RenderedPushNotification>;

impl<R> Clone for Renderer<R> {
    fn clone(&self) -> Self {
        Self {
            templates: self.templates.clone(),
            namespace_segment: self.namespace_segment.clone(),
            _shape: PhantomData,
        }
    }
}

impl<R: RenderedMessage> Renderer<R> {
    /// Create a renderer reading templates from `templates`
    pub fn new(templates: Arc<dyn TemplateSource>) -> Self {
        Self {
            templates,
            namespace_segment: DEFAULT_NAMESPACE_SEGMENT.to_string(),
            _shape: PhantomData,
        }
    }

    /// Override the fixed namespace path segment
    pub fn with_namespace_segment(mut self, segment: impl Into<String>) -> Self {
        self.namespace_segment = segment.into();
        self
    }

    /// Channel this renderer produces payloads for
    pub fn channel(&self) -> ChannelType {
        R::CHANNEL
    }

    /// Template path a field of `message` is rendered from
    pub fn template_path(&self, message: &Message, field: &FieldSpec) -> String {
        template_path(
            message,
            &self.namespace_segment,
            R::CHANNEL.as_str(),
            &field.filename(),
        )
    }

    /// Template paths for every declared field, in field order
    pub fn template_paths(&self, message: &Message) -> Vec<String> {
        R::FIELDS
            .iter()
            .map(|field| self.template_path(message, field))
            .collect()
    }

    /// Render every declared field of `R` for `message`.
    ///
    /// The first failing field aborts the render; no partial result is
    /// returned.
    #[tracing::instrument(
        name = "render_message",
        skip_all,
        fields(
            channel = %R::CHANNEL,
            app_label = %message.app_label,
            message_name = %message.name,
            message_uuid = %message.uuid,
        )
    )]
    pub fn render(&self, message: &Message) -> RenderResult<R> {
        let start = Instant::now();

        let result = self.render_fields(message).and_then(R::from_fields);

        match &result {
            Ok(_) => {
                RenderMetrics::record_rendered(R::CHANNEL, start.elapsed());
                tracing::debug!(
                    fields = R::FIELDS.len(),
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Message rendered"
                );
            }
            Err(e) => {
                RenderMetrics::record_failed(R::CHANNEL, e.kind());
                tracing::warn!(error = %e, kind = e.kind(), "Message render failed");
            }
        }

        result
    }

    fn render_fields(&self, message: &Message) -> RenderResult<RenderedFields> {
        let context = render_context(message)?;
        let mut rendered = RenderedFields::new();

        for field in R::FIELDS {
            let path = self.template_path(message, field);
            tracing::trace!(field = field.name, path = %path, "Rendering field");

            let template = self.templates.get_template(&path)?;
            let text = template.render(&context)?;
            rendered.insert(field.name.to_string(), serde_json::Value::String(text));
        }

        Ok(rendered)
    }
}

/// Join the parts of a template lookup path
pub fn template_path(
    message: &Message,
    namespace_segment: &str,
    channel: &str,
    filename: &str,
) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        message.app_label, namespace_segment, message.name, channel, filename
    )
}

/// Build the context every template of `message` is rendered against.
///
/// The message itself is available as `message`; entries of the message
/// context are merged on top and win on key collisions.
pub fn render_context(message: &Message) -> RenderResult<RenderContext> {
    let mut context = RenderContext::new();
    context.insert(
        MESSAGE_CONTEXT_KEY.to_string(),
        serde_json::to_value(message).map_err(RenderError::Context)?,
    );

    if message.context.contains_key(MESSAGE_CONTEXT_KEY) {
        tracing::warn!(
            app_label = %message.app_label,
            message_name = %message.name,
            "Message context shadows the reserved `message` render key"
        );
    }

    context.extend(
        message
            .context
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{EngineOptions, JinjaTemplates, TemplateError, TemplateStore};
    use serde_json::json;

    fn message() -> Message {
        Message::builder("courses", "welcome")
            .context_value("first_name", "Ada")
            .build()
    }

    fn push_renderer(templates: &[(&str, &str)]) -> PushNotificationRenderer {
        let store = Arc::new(TemplateStore::new());
        for (path, source) in templates {
            store.insert(*path, *source).unwrap();
        }
        PushNotificationRenderer::new(Arc::new(JinjaTemplates::from_store(
            store,
            EngineOptions::default(),
        )))
    }

    #[test]
    fn test_template_path_layout() {
        let path = template_path(&message(), "edx_ace", "push", "title.txt");
        assert_eq!(path, "courses/edx_ace/welcome/push/title.txt");
    }

    #[test]
    fn test_template_paths_follow_field_order() {
        let renderer = push_renderer(&[]).with_namespace_segment("notices");

        assert_eq!(
            renderer.template_paths(&message()),
            vec![
                "courses/notices/welcome/push/title.txt",
                "courses/notices/welcome/push/body.txt",
            ]
        );
    }

    #[test]
    fn test_render_push() {
        let renderer = push_renderer(&[
            ("courses/edx_ace/welcome/push/title.txt", "Hi {{ first_name }}"),
            ("courses/edx_ace/welcome/push/body.txt", "Welcome to {{ message.app_label }}"),
        ]);

        let push = renderer.render(&message()).unwrap();
        assert_eq!(push.title, "Hi Ada");
        assert_eq!(push.body, "Welcome to courses");
        assert_eq!(renderer.channel(), ChannelType::Push);
    }

    #[test]
    fn test_render_missing_template_aborts() {
        let renderer = push_renderer(&[("courses/edx_ace/welcome/push/title.txt", "Hi")]);

        let err = renderer.render(&message()).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            err,
            RenderError::Template(TemplateError::NotFound(ref path))
                if path == "courses/edx_ace/welcome/push/body.txt"
        ));
    }

    #[test]
    fn test_render_context_contains_message() {
        let context = render_context(&message()).unwrap();

        assert_eq!(context[MESSAGE_CONTEXT_KEY]["name"], "welcome");
        assert_eq!(context["first_name"], "Ada");
    }

    #[test]
    fn test_unset_optional_message_fields_are_falsy() {
        let renderer = push_renderer(&[
            (
                "app/edx_ace/n/push/title.txt",
                "{% if message.language %}{{ message.language }} {% endif %}Hi",
            ),
            (
                "app/edx_ace/n/push/body.txt",
                "{% if message.recipient.email_address %}mail{% endif %}ok\
                 {% if message.expiration_time %} expires{% endif %}",
            ),
        ]);
        let message = Message::builder("app", "n").build();

        let push = renderer.render(&message).unwrap();
        assert_eq!(push.title, "Hi");
        assert_eq!(push.body, "ok");
    }

    #[test]
    fn test_message_context_shadows_reserved_key() {
        let message = Message::builder("courses", "welcome")
            .context_value("message", json!("overridden"))
            .build();

        let context = render_context(&message).unwrap();
        assert_eq!(context[MESSAGE_CONTEXT_KEY], "overridden");
    }
}
