//! AlbumStore trait definition.
//!
//! Handlers only talk to this trait, so tests can run the server against
//! any store implementation.

use super::errors::StoreResult;
use super::models::{Album, AlbumId, AlbumUpdate, NewAlbum, UpdatedAlbum};

pub trait AlbumStore: Send + Sync {
    // =========================================================================
    // Reads
    // =========================================================================

    /// All records, in insertion order.
    fn list(&self) -> Vec<Album>;

    /// Looks up a single record by id.
    fn get(&self, id: AlbumId) -> StoreResult<Album>;

    /// Case-insensitive substring match on title or artist.
    ///
    /// Fails with `InvalidArgument` when the query is empty or whitespace only.
    fn search(&self, query: &str) -> StoreResult<Vec<Album>>;

    /// Number of records currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Assigns the next id and appends the record.
    fn insert(&self, album: NewAlbum) -> Album;

    /// Overwrites the fields present in `update`.
    fn update(&self, id: AlbumId, update: AlbumUpdate) -> StoreResult<UpdatedAlbum>;

    /// Removes the record permanently and returns it.
    fn delete(&self, id: AlbumId) -> StoreResult<Album>;
}
