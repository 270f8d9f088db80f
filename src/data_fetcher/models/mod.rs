pub mod id;
pub mod track;
pub mod vocal;

pub use id::{EmptyRecordId, RecordId};
pub use track::{Beat, Music, Track};
pub use vocal::Vocal;
