//! Rendered result shapes

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::field::FieldSpec;
use super::types::{RenderError, RenderResult};
use crate::channel::ChannelType;

/// Rendered text keyed by field name
pub type RenderedFields = serde_json::Map<String, serde_json::Value>;

/// A channel-specific rendered message.
///
/// `FIELDS` lists every field of the type, in render order, with the
/// template file it comes from. Every listed field must be present for
/// [`RenderedMessage::from_fields`] to succeed.
pub trait RenderedMessage: Serialize + DeserializeOwned {
    /// Channel whose templates this shape is rendered from
    const CHANNEL: ChannelType;

    /// Declared output fields
    const FIELDS: &'static [FieldSpec];

    /// Assemble the result from rendered fields
    fn from_fields(fields: RenderedFields) -> RenderResult<Self> {
        serde_json::from_value(serde_json::Value::Object(fields)).map_err(|source| {
            RenderError::Assemble {
                channel: Self::CHANNEL,
                source,
            }
        })
    }
}

/// Everything needed to send a message over email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEmail {
    pub from_name: String,
    pub subject: String,
    pub body_html: String,
    pub head_html: String,
    pub body: String,
}

impl RenderedMessage for RenderedEmail {
    const CHANNEL: ChannelType = ChannelType::Email;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("from_name"),
        FieldSpec::text("subject"),
        FieldSpec::html("body_html", "body"),
        FieldSpec::html("head_html", "head"),
        FieldSpec::text("body"),
    ];
}

/// Everything needed to send a message as a push notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPushNotification {
    pub title: String,
    pub body: String,
}

impl RenderedMessage for RenderedPushNotification {
    const CHANNEL: ChannelType = ChannelType::Push;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec::text("title"), FieldSpec::text("body")];
}
