//! Messages to be rendered and delivered.
//!
//! A message names its templates through an `app_label`/`name` pair and
//! carries the context those templates are rendered against.

mod types;

pub use types::{Message, MessageBuilder, MessageContext, Recipient};
