use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Extra key/value pairs merged into every template render context
pub type MessageContext = serde_json::Map<String, serde_json::Value>;

/// The person a message is addressed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// User identifier in the host platform
    pub lms_user_id: i64,
    /// Email address (optional, required only by email delivery)
    #[serde(default)]
    pub email_address: Option<String>,
}

impl Recipient {
    /// Create a recipient without an email address
    pub fn new(lms_user_id: i64) -> Self {
        Self {
            lms_user_id,
            email_address: None,
        }
    }

    /// Attach an email address
    pub fn with_email(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }
}

/// A single message addressed to a single recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// Identifier shared by every message of the same send batch
    #[serde(default = "Uuid::new_v4")]
    pub send_uuid: Uuid,
    /// Namespace owning the message templates
    pub app_label: String,
    /// Message type name, unique within `app_label`
    pub name: String,
    /// Who receives the message
    pub recipient: Recipient,
    /// Values merged into the template render context
    #[serde(default)]
    pub context: MessageContext,
    /// Preferred language tag (e.g. "en", "fr-ca")
    #[serde(default)]
    pub language: Option<String>,
    /// Free-form delivery options
    #[serde(default)]
    pub options: MessageContext,
    /// After this instant the message should no longer be delivered
    #[serde(default)]
    pub expiration_time: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a builder for a message type
    pub fn builder(app_label: impl Into<String>, name: impl Into<String>) -> MessageBuilder {
        MessageBuilder::new(app_label, name)
    }

    /// Check if the message has passed its expiration time
    pub fn is_expired(&self) -> bool {
        self.expiration_time
            .map(|expiry| Utc::now() > expiry)
            .unwrap_or(false)
    }
}

/// Builder for creating messages
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    app_label: String,
    name: String,
    recipient: Recipient,
    context: MessageContext,
    language: Option<String>,
    options: MessageContext,
    expiration_time: Option<DateTime<Utc>>,
    send_uuid: Option<Uuid>,
}

impl MessageBuilder {
    /// Create a new message builder
    pub fn new(app_label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            app_label: app_label.into(),
            name: name.into(),
            recipient: Recipient::new(0),
            context: MessageContext::new(),
            language: None,
            options: MessageContext::new(),
            expiration_time: None,
            send_uuid: None,
        }
    }

    /// Set the recipient
    pub fn recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = recipient;
        self
    }

    /// Add a single context value
    pub fn context_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Merge a context mapping, later keys win
    pub fn context(mut self, context: MessageContext) -> Self {
        self.context.extend(context);
        self
    }

    /// Set the preferred language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Add a delivery option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Set the expiration time
    pub fn expiration_time(mut self, expiration_time: DateTime<Utc>) -> Self {
        self.expiration_time = Some(expiration_time);
        self
    }

    /// Share a send batch identifier with other messages
    pub fn send_uuid(mut self, send_uuid: Uuid) -> Self {
        self.send_uuid = Some(send_uuid);
        self
    }

    /// Build the message
    pub fn build(self) -> Message {
        Message {
            uuid: Uuid::new_v4(),
            send_uuid: self.send_uuid.unwrap_or_else(Uuid::new_v4),
            app_label: self.app_label,
            name: self.name,
            recipient: self.recipient,
            context: self.context,
            language: self.language,
            options: self.options,
            expiration_time: self.expiration_time,
        }
    }
}
