use serde::Deserialize;

/// Subset of the GitHub push-event webhook payload that the notifier reads.
///
/// Webhook payloads are loosely typed, so every field is optional here: the
/// notifier performs the presence checks and decides what to do when
/// something is missing.
#[derive(Debug, Deserialize)]
pub struct PushEvent {
    pub head_commit: Option<Commit>,
    pub repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
pub struct Commit {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: Option<String>,
}
