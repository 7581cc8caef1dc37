use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::PushEvent;

/// Sentence used when the required fields can't be extracted from the
/// payload. Surfacing this downstream beats crashing the host with an opaque
/// platform error.
pub const PARSE_ERROR_TEXT: &str =
    "Error occurred when attempting to parse information regarding latest git push event.";

/// Payload consumed by the downstream chat-message-posting action.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub text: String,
}

impl Notification {
    fn parse_error() -> Self {
        Notification {
            text: PARSE_ERROR_TEXT.to_owned(),
        }
    }
}

/// Formats a push event for the chat action.
///
/// Total over its input: a payload missing `head_commit.id` or
/// `repository.full_name` yields the [`PARSE_ERROR_TEXT`] fallback instead of
/// an error.
pub fn repackage(event: &PushEvent) -> Notification {
    match summary(event) {
        Some(text) => Notification { text },
        None => Notification::parse_error(),
    }
}

/// Same as [`repackage`], starting from an untyped JSON payload.
///
/// A payload that doesn't even fit [`PushEvent`] (e.g. `head_commit` holding
/// a string) also gets the fallback text, so no deserialization error
/// reaches the caller.
pub fn repackage_json(payload: &Value) -> Notification {
    match PushEvent::deserialize(payload) {
        Ok(event) => repackage(&event),
        Err(_) => Notification::parse_error(),
    }
}

fn summary(event: &PushEvent) -> Option<String> {
    let id = event.head_commit.as_ref()?.id.as_ref()?;
    let full_name = event.repository.as_ref()?.full_name.as_ref()?;
    Some(format!("commit {} was pushed to {}", id, full_name))
}
