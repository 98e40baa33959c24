//! Delivery channel types.
//!
//! Each channel type owns a distinct set of templates; its string value is
//! the path segment that selects that set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delivery medium for a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// Email delivery
    Email,
    /// Mobile push notification
    Push,
}

impl ChannelType {
    /// All known channel types
    pub const ALL: [ChannelType; 2] = [ChannelType::Email, ChannelType::Push];

    /// Path segment used to locate this channel's templates
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Push => "push",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown channel type: {0}")]
pub struct UnknownChannel(pub String);

impl FromStr for ChannelType {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(ChannelType::Email),
            "push" => Ok(ChannelType::Push),
            other => Err(UnknownChannel(other.to_string())),
        }
    }
}
