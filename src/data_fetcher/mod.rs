pub mod api;
pub mod models;

pub use api::CatalogClient;
pub use models::{Beat, Music, RecordId, Track, Vocal};
