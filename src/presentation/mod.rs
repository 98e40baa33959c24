//! Channel-keyed rendering.
//!
//! Picks the renderer that matches a channel type so callers holding only a
//! `ChannelType` can render a message for it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::channel::ChannelType;
use crate::message::Message;
use crate::renderer::{
    EmailRenderer, PushNotificationRenderer, RenderResult, RenderedEmail,
    RenderedPushNotification,
};
use crate::template::TemplateSource;

/// A rendered message for any channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum RenderedPayload {
    Email(RenderedEmail),
    Push(RenderedPushNotification),
}

impl RenderedPayload {
    /// Channel this payload was rendered for
    pub fn channel(&self) -> ChannelType {
        match self {
            RenderedPayload::Email(_) => ChannelType::Email,
            RenderedPayload::Push(_) => ChannelType::Push,
        }
    }
}

/// One renderer per channel type, sharing a template source
#[derive(Clone)]
pub struct Presenter {
    email: EmailRenderer,
    push: PushNotificationRenderer,
}

impl Presenter {
    /// Create renderers for every channel type
    pub fn new(templates: Arc<dyn TemplateSource>, namespace_segment: &str) -> Self {
        Self {
            email: EmailRenderer::new(templates.clone())
                .with_namespace_segment(namespace_segment),
            push: PushNotificationRenderer::new(templates)
                .with_namespace_segment(namespace_segment),
        }
    }

    /// Render `message` for `channel`
    pub fn render(&self, channel: ChannelType, message: &Message) -> RenderResult<RenderedPayload> {
        match channel {
            ChannelType::Email => self.email.render(message).map(RenderedPayload::Email),
            ChannelType::Push => self.push.render(message).map(RenderedPayload::Push),
        }
    }

    /// Template paths `render` would look up for `channel`
    pub fn template_paths(&self, channel: ChannelType, message: &Message) -> Vec<String> {
        match channel {
            ChannelType::Email => self.email.template_paths(message),
            ChannelType::Push => self.push.template_paths(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{EngineOptions, JinjaTemplates, TemplateStore};

    fn presenter() -> Presenter {
        let store = Arc::new(TemplateStore::new());
        store.insert("app/edx_ace/note/push/title.txt", "T {{ n }}").unwrap();
        store.insert("app/edx_ace/note/push/body.txt", "B {{ n }}").unwrap();

        let templates = Arc::new(JinjaTemplates::from_store(store, EngineOptions::default()));
        Presenter::new(templates, "edx_ace")
    }

    #[test]
    fn test_render_dispatches_by_channel() {
        let message = Message::builder("app", "note").context_value("n", 3).build();

        let payload = presenter().render(ChannelType::Push, &message).unwrap();
        assert_eq!(payload.channel(), ChannelType::Push);
        assert_eq!(
            payload,
            RenderedPayload::Push(RenderedPushNotification {
                title: "T 3".to_string(),
                body: "B 3".to_string(),
            })
        );
    }

    #[test]
    fn test_email_without_templates_fails() {
        let message = Message::builder("app", "note").build();

        let err = presenter().render(ChannelType::Email, &message).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_payload_serializes_with_channel_tag() {
        let payload = RenderedPayload::Push(RenderedPushNotification {
            title: "t".to_string(),
            body: "b".to_string(),
        });

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["channel"], "push");
        assert_eq!(value["title"], "t");
    }

    #[test]
    fn test_template_paths_per_channel() {
        let message = Message::builder("app", "note").build();
        let presenter = presenter();

        assert_eq!(presenter.template_paths(ChannelType::Email, &message).len(), 5);
        assert_eq!(
            presenter.template_paths(ChannelType::Push, &message),
            vec!["app/edx_ace/note/push/title.txt", "app/edx_ace/note/push/body.txt"]
        );
    }
}
