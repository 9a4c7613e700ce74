use serde::Deserialize;

/// The feed envelope. Entries are kept untyped because the feed mixes value types within an entry.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub message: Vec<serde_json::Value>,
}
