use super::id::RecordId;
use serde::{Deserialize, Serialize};

/// A vocal take recorded over a beat.
///
/// `beat_id` points at a [`super::Track`] id; whether that beat exists is the
/// server's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vocal {
    pub id: RecordId,
    pub title: String,
    pub artist: String,
    pub filename: String,
    pub beat_id: RecordId,
}
