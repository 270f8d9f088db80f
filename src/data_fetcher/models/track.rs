use super::id::RecordId;
use serde::{Deserialize, Serialize};

/// A song or beat in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub id: RecordId,
    pub title: String,
    pub artist: String,
    /// Audio asset reference, passed through untouched.
    pub filename: String,
    /// Cover-art asset reference, passed through untouched.
    pub img_path: String,
}

/// Entries of the `music` collection.
pub type Music = Track;

/// Entries of the `beats` collection.
pub type Beat = Track;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_deserialization() {
        let json = r#"{"id":"b1","title":"Beat One","artist":"A","filename":"b1.mp3","img_path":"b1.png"}"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, "b1");
        assert_eq!(track.title, "Beat One");
        assert_eq!(track.artist, "A");
        assert_eq!(track.filename, "b1.mp3");
        assert_eq!(track.img_path, "b1.png");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"id":"m1","title":"Song","artist":"B","filename":"m1.mp3","img_path":"m1.png","bpm":92,"tags":["lofi"]}"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, "m1");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{"id":"m1","title":"Song","artist":"B","filename":"m1.mp3"}"#;

        let err = serde_json::from_str::<Track>(json).unwrap_err();
        assert!(err.to_string().contains("img_path"));
    }

    #[test]
    fn test_empty_id_is_an_error() {
        let json = r#"{"id":"","title":"Song","artist":"B","filename":"m1.mp3","img_path":"m1.png"}"#;

        assert!(serde_json::from_str::<Track>(json).is_err());
    }
}
