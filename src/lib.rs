//! Repackages GitHub push-event payloads into a form consumable by a
//! chat-message-posting action.
//!
//! The whole crate is one pure transform: pick `head_commit.id` and
//! `repository.full_name` out of the webhook payload and wrap them in a
//! `{ "text": ... }` object. Anything missing or malformed becomes a fixed
//! fallback sentence, never an error escaping to the host.

pub mod events;
pub mod notifier;

pub use events::PushEvent;
pub use notifier::{repackage, repackage_json, Notification};
