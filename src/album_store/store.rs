//! In-memory album store.

use super::errors::{StoreError, StoreResult};
use super::models::{default_albums, Album, AlbumId, AlbumUpdate, NewAlbum, UpdatedAlbum};
use super::trait_def::AlbumStore;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const EMPTY_QUERY_MESSAGE: &str = "Search query cannot be empty";

struct StoreState {
    albums: Vec<Album>,
    next_id: AlbumId,
}

/// Process-wide album collection.
///
/// Every operation takes the lock exactly once, so each insert, update and
/// delete is atomic with respect to concurrent requests.
pub struct InMemoryAlbumStore {
    state: RwLock<StoreState>,
}

impl InMemoryAlbumStore {
    /// Builds a store from `albums`; the first assigned id is one past the
    /// highest seeded id.
    pub fn new(albums: Vec<Album>) -> Self {
        let next_id = albums.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        InMemoryAlbumStore {
            state: RwLock::new(StoreState { albums, next_id }),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::new(default_albums())
    }

    /// The id the next insert will receive.
    pub fn next_id(&self) -> AlbumId {
        self.read().next_id
    }

    // None of the operations can leave the state half-written, so a poisoned
    // lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryAlbumStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AlbumStore for InMemoryAlbumStore {
    fn list(&self) -> Vec<Album> {
        self.read().albums.clone()
    }

    fn get(&self, id: AlbumId) -> StoreResult<Album> {
        self.read()
            .albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Album>> {
        if query.trim().is_empty() {
            return Err(StoreError::InvalidArgument(EMPTY_QUERY_MESSAGE.to_string()));
        }

        let query = query.to_lowercase();
        Ok(self
            .read()
            .albums
            .iter()
            .filter(|album| {
                album.title.to_lowercase().contains(&query)
                    || album.artist.to_lowercase().contains(&query)
            })
            .cloned()
            .collect())
    }

    fn len(&self) -> usize {
        self.read().albums.len()
    }

    fn insert(&self, album: NewAlbum) -> Album {
        let mut state = self.write();
        let album = album.into_album(state.next_id);
        state.albums.push(album.clone());
        state.next_id += 1;
        album
    }

    fn update(&self, id: AlbumId, update: AlbumUpdate) -> StoreResult<UpdatedAlbum> {
        let mut state = self.write();
        let album = state
            .albums
            .iter_mut()
            .find(|album| album.id == id)
            .ok_or(StoreError::NotFound { id })?;

        let updated_fields = update.apply_to(album);
        Ok(UpdatedAlbum {
            album: album.clone(),
            updated_fields,
        })
    }

    fn delete(&self, id: AlbumId) -> StoreResult<Album> {
        let mut state = self.write();
        let index = state
            .albums
            .iter()
            .position(|album| album.id == id)
            .ok_or(StoreError::NotFound { id })?;
        Ok(state.albums.remove(index))
    }
}
