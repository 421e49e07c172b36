mod errors;
mod models;
mod store;
mod trait_def;
pub mod validation;

pub use errors::{StoreError, StoreResult};
pub use models::*;
pub use store::InMemoryAlbumStore;
pub use trait_def::AlbumStore;
